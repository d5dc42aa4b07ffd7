//! Central index of all archived creative works
//!
//! The catalog owns a unique mapping from work ID to entry. It grows via
//! insertion and never shrinks: there is no delete operation.

use std::collections::HashMap;
use tracing::debug;

use poiesis_archive_core::{ArchiveError, CatalogEntry, Medium, Result, WorkId};

/// Central index of all archived creative works
///
/// Supports adding, searching, and filtering works by medium and free-text
/// query. Work IDs are unique: inserting a duplicate fails and leaves the
/// catalog unchanged.
///
/// Iteration order is insertion order, which also serves as the documented
/// tie-break for search results with equal creation dates.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<WorkId, CatalogEntry>,
    // Insertion-order index over the map, for deterministic iteration.
    order: Vec<WorkId>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new work in the catalog
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::DuplicateWork`] if a work with the same ID
    /// is already cataloged; the catalog is unchanged on failure.
    pub fn add_entry(&mut self, entry: CatalogEntry) -> Result<()> {
        if self.entries.contains_key(entry.work_id.as_str()) {
            return Err(ArchiveError::DuplicateWork(entry.work_id));
        }
        debug!(work_id = %entry.work_id, title = %entry.title, medium = %entry.medium, "registering work");
        self.order.push(entry.work_id.clone());
        self.entries.insert(entry.work_id.clone(), entry);
        Ok(())
    }

    /// Search all entries by free-text query
    ///
    /// Matches case-insensitively against title, description, and tags;
    /// any field match qualifies the entry. An empty query matches every
    /// entry. Results are ordered by creation date, newest first; ties
    /// keep insertion order (stable sort).
    pub fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        let mut matches: Vec<&CatalogEntry> =
            self.iter().filter(|e| e.matches_query(query)).collect();
        matches.sort_by(|a, b| b.created_date.cmp(&a.created_date));
        debug!(query, hits = matches.len(), "catalog search");
        matches
    }

    /// Return all entries of a specific creative medium, in insertion order
    pub fn filter_by_medium(&self, medium: Medium) -> Vec<&CatalogEntry> {
        self.iter().filter(|e| e.medium == medium).collect()
    }

    /// Retrieve a single entry by its work ID
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::WorkNotFound`] if no entry with the given
    /// ID exists.
    pub fn get_entry(&self, work_id: &str) -> Result<&CatalogEntry> {
        self.entries
            .get(work_id)
            .ok_or_else(|| ArchiveError::WorkNotFound(work_id.to_string()))
    }

    /// Check whether a work ID is cataloged
    pub fn contains(&self, work_id: &str) -> bool {
        self.entries.contains_key(work_id)
    }

    /// Total number of cataloged works
    pub fn total_works(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.order.iter().filter_map(|id| self.entries.get(id.as_str()))
    }

    /// Export every entry as a flat record, in insertion order
    ///
    /// Records are plain structural data suitable for hand-off to an
    /// external persistence or transport layer.
    pub fn export_records(&self) -> Result<Vec<serde_json::Value>> {
        self.iter().map(CatalogEntry::to_record).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn entry(work_id: &str, title: &str, medium: Medium, created: DateTime<Utc>) -> CatalogEntry {
        CatalogEntry::new(work_id, title, medium, created)
    }

    #[test]
    fn test_add_and_retrieve() {
        let mut catalog = Catalog::new();
        catalog
            .add_entry(entry("W001", "Noise Garden", Medium::Audio, date(2024, 6, 15)))
            .unwrap();

        assert_eq!(catalog.get_entry("W001").unwrap().title, "Noise Garden");
        assert_eq!(catalog.total_works(), 1);
        assert!(catalog.contains("W001"));
    }

    #[test]
    fn test_rejects_duplicate_and_preserves_state() {
        let mut catalog = Catalog::new();
        catalog
            .add_entry(entry("W001", "Original", Medium::Text, date(2024, 1, 1)))
            .unwrap();

        let result = catalog.add_entry(entry("W001", "Imposter", Medium::Text, date(2024, 2, 2)));
        assert!(matches!(result, Err(ArchiveError::DuplicateWork(_))));

        // Failed insert leaves the original entry untouched
        assert_eq!(catalog.total_works(), 1);
        assert_eq!(catalog.get_entry("W001").unwrap().title, "Original");
    }

    #[test]
    fn test_get_entry_missing() {
        let catalog = Catalog::new();
        assert!(matches!(
            catalog.get_entry("W404"),
            Err(ArchiveError::WorkNotFound(_))
        ));
    }

    #[test]
    fn test_search_matches_title() {
        let mut catalog = Catalog::new();
        catalog
            .add_entry(entry("W001", "Recursive Spirals", Medium::Visual, date(2024, 3, 10)))
            .unwrap();
        catalog
            .add_entry(entry("W002", "Linear Paths", Medium::Visual, date(2024, 5, 20)))
            .unwrap();

        let results = catalog.search("recursive");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].work_id.as_str(), "W001");
    }

    #[test]
    fn test_search_orders_newest_first() {
        let mut catalog = Catalog::new();
        catalog
            .add_entry(entry("W001", "First", Medium::Text, date(2024, 1, 1)))
            .unwrap();
        catalog
            .add_entry(entry("W002", "Second", Medium::Text, date(2024, 6, 1)))
            .unwrap();
        catalog
            .add_entry(entry("W003", "Third", Medium::Text, date(2024, 3, 1)))
            .unwrap();

        let results = catalog.search("");
        let ids: Vec<&str> = results.iter().map(|e| e.work_id.as_str()).collect();
        assert_eq!(ids, vec!["W002", "W003", "W001"]);
    }

    #[test]
    fn test_search_ties_keep_insertion_order() {
        let mut catalog = Catalog::new();
        let same_day = date(2024, 4, 1);
        catalog.add_entry(entry("W001", "Alpha", Medium::Text, same_day)).unwrap();
        catalog.add_entry(entry("W002", "Beta", Medium::Text, same_day)).unwrap();
        catalog.add_entry(entry("W003", "Gamma", Medium::Text, same_day)).unwrap();

        let results = catalog.search("");
        let ids: Vec<&str> = results.iter().map(|e| e.work_id.as_str()).collect();
        assert_eq!(ids, vec!["W001", "W002", "W003"]);
    }

    #[test]
    fn test_search_matches_tags_case_insensitive() {
        let mut catalog = Catalog::new();
        let mut e = entry("W001", "Untitled", Medium::Mixed, date(2024, 2, 2));
        e.add_tag("Generative");
        catalog.add_entry(e).unwrap();

        assert_eq!(catalog.search("generative").len(), 1);
        assert_eq!(catalog.search("GENERATIVE").len(), 1);
    }

    #[test]
    fn test_filter_by_medium_partitions_catalog() {
        let mut catalog = Catalog::new();
        catalog
            .add_entry(entry("W001", "Audio Piece", Medium::Audio, date(2024, 1, 1)))
            .unwrap();
        catalog
            .add_entry(entry("W002", "Visual Piece", Medium::Visual, date(2024, 2, 1)))
            .unwrap();
        catalog
            .add_entry(entry("W003", "Another Audio", Medium::Audio, date(2024, 3, 1)))
            .unwrap();

        let audio = catalog.filter_by_medium(Medium::Audio);
        assert_eq!(audio.len(), 2);
        assert!(audio.iter().all(|e| e.medium == Medium::Audio));

        // The six media partition the full entry set
        let partitioned: usize = Medium::ALL
            .iter()
            .map(|m| catalog.filter_by_medium(*m).len())
            .sum();
        assert_eq!(partitioned, catalog.total_works());
    }

    #[test]
    fn test_iter_preserves_insertion_order() {
        let mut catalog = Catalog::new();
        catalog.add_entry(entry("W002", "B", Medium::Text, date(2024, 2, 1))).unwrap();
        catalog.add_entry(entry("W001", "A", Medium::Text, date(2024, 1, 1))).unwrap();

        let ids: Vec<&str> = catalog.iter().map(|e| e.work_id.as_str()).collect();
        assert_eq!(ids, vec!["W002", "W001"]);
    }

    #[test]
    fn test_export_records() {
        let mut catalog = Catalog::new();
        catalog
            .add_entry(entry("W001", "Noise Garden", Medium::Audio, date(2024, 6, 15)))
            .unwrap();
        catalog
            .add_entry(entry("W002", "Linear Paths", Medium::Visual, date(2024, 5, 20)))
            .unwrap();

        let records = catalog.export_records().unwrap();
        assert_eq!(records.len(), catalog.total_works());
        assert_eq!(records[0]["work_id"], "W001");
        assert_eq!(records[1]["medium"], "visual");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.total_works(), 0);
        assert!(catalog.search("anything").is_empty());
        assert!(catalog.filter_by_medium(Medium::Audio).is_empty());
    }
}
