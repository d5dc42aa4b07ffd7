//! Catalog entry types and medium classification
//!
//! This module defines the CatalogEntry type that represents a single
//! archived creative work, along with the closed Medium classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ArchiveError, Result};
use crate::types::{Tags, WorkId};

/// Default provenance label for works produced by the poiesis organ
pub const DEFAULT_SOURCE_ORGAN: &str = "poiesis";

/// Creative medium classifications
///
/// A closed enumeration: every archived work is classified as exactly one
/// of these six forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Medium {
    /// Visual works (images, paintings, photography)
    Visual,
    /// Audio works (music, soundscapes, field recordings)
    Audio,
    /// Text works (poetry, prose, essays)
    Text,
    /// Performance works (live or recorded performances)
    Performance,
    /// Interactive works (installations with audience input, software pieces)
    Interactive,
    /// Works spanning multiple media
    Mixed,
}

impl Medium {
    /// All medium variants, in declaration order
    pub const ALL: [Medium; 6] = [
        Medium::Visual,
        Medium::Audio,
        Medium::Text,
        Medium::Performance,
        Medium::Interactive,
        Medium::Mixed,
    ];

    /// Get the string representation of the medium
    pub fn as_str(&self) -> &'static str {
        match self {
            Medium::Visual => "visual",
            Medium::Audio => "audio",
            Medium::Text => "text",
            Medium::Performance => "performance",
            Medium::Interactive => "interactive",
            Medium::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Medium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Medium {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "visual" => Ok(Self::Visual),
            "audio" => Ok(Self::Audio),
            "text" => Ok(Self::Text),
            "performance" => Ok(Self::Performance),
            "interactive" => Ok(Self::Interactive),
            "mixed" => Ok(Self::Mixed),
            _ => Err(format!("Invalid medium: {}", s)),
        }
    }
}

/// A single work in the archive catalog
///
/// Identity (`work_id`) is immutable once the entry is registered; the
/// remaining fields belong to the owning caller and carry no invariants
/// beyond construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Unique identifier for this work
    pub work_id: WorkId,

    /// Human-readable title of the work
    pub title: String,

    /// Creative medium classification
    pub medium: Medium,

    /// When the work was created
    pub created_date: DateTime<Utc>,

    /// User-defined tags for categorization
    #[serde(default)]
    pub tags: Tags,

    /// Free-text description of the work
    #[serde(default)]
    pub description: String,

    /// People who collaborated on the work
    #[serde(default)]
    pub collaborators: Vec<String>,

    /// Provenance label naming the organ that produced this work
    pub source_organ: String,
}

impl CatalogEntry {
    /// Create a new entry with required fields and empty defaults
    pub fn new(
        work_id: impl Into<WorkId>,
        title: impl Into<String>,
        medium: Medium,
        created_date: DateTime<Utc>,
    ) -> Self {
        Self {
            work_id: work_id.into(),
            title: title.into(),
            medium,
            created_date,
            tags: Vec::new(),
            description: String::new(),
            collaborators: Vec::new(),
            source_organ: DEFAULT_SOURCE_ORGAN.to_string(),
        }
    }

    /// Create a builder for constructing catalog entries
    pub fn builder(
        work_id: impl Into<WorkId>,
        title: impl Into<String>,
        medium: Medium,
        created_date: DateTime<Utc>,
    ) -> CatalogEntryBuilder {
        CatalogEntryBuilder::new(work_id, title, medium, created_date)
    }

    /// Validate the entry
    pub fn validate(&self) -> Result<()> {
        if self.work_id.as_str().is_empty() {
            return Err(ArchiveError::ValidationError(
                "Work ID cannot be empty".to_string(),
            ));
        }
        if self.title.is_empty() {
            return Err(ArchiveError::ValidationError(
                "Title cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Check if this entry matches a text search query
    ///
    /// Searches across title, description, and tags (case-insensitive
    /// substring match). An empty query matches every entry.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        if self.title.to_lowercase().contains(&query) {
            return true;
        }
        if self.description.to_lowercase().contains(&query) {
            return true;
        }
        self.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
    }

    /// Add a tag
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
    }

    /// Check if the entry has a specific tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Serialize this entry to a flat record for export
    ///
    /// Produces plain structural data (primitive values, timestamps as
    /// RFC 3339 strings) suitable for hand-off to persistence or transport.
    pub fn to_record(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(Into::into)
    }
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CatalogEntry({}, '{}', {})", self.work_id, self.title, self.medium)
    }
}

/// Builder for constructing CatalogEntry instances
pub struct CatalogEntryBuilder {
    entry: CatalogEntry,
}

impl CatalogEntryBuilder {
    /// Create a new builder with the required fields
    pub fn new(
        work_id: impl Into<WorkId>,
        title: impl Into<String>,
        medium: Medium,
        created_date: DateTime<Utc>,
    ) -> Self {
        Self {
            entry: CatalogEntry::new(work_id, title, medium, created_date),
        }
    }

    /// Add a tag
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.entry.tags.push(tag.into());
        self
    }

    /// Add multiple tags
    pub fn tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.entry.tags.extend(tags);
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.entry.description = description.into();
        self
    }

    /// Add a collaborator
    pub fn collaborator(mut self, name: impl Into<String>) -> Self {
        self.entry.collaborators.push(name.into());
        self
    }

    /// Override the default source organ label
    pub fn source_organ(mut self, organ: impl Into<String>) -> Self {
        self.entry.source_organ = organ.into();
        self
    }

    /// Build the entry with validation
    pub fn build(self) -> Result<CatalogEntry> {
        self.entry.validate()?;
        Ok(self.entry)
    }

    /// Build without validation
    pub fn build_unchecked(self) -> CatalogEntry {
        self.entry
    }
}
