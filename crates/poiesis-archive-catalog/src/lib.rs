//! Catalog layer for the Poiesis archive
//!
//! This crate provides the stateful registry that sits on top of the core
//! domain types: registration of works, free-text search, medium filtering,
//! and keyed lookup. State is in-memory only and owned exclusively by each
//! `Catalog` instance; callers that need to share a catalog across threads
//! must add their own synchronization.
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use poiesis_archive_catalog::Catalog;
//! use poiesis_archive_core::{CatalogEntry, Medium};
//!
//! let mut catalog = Catalog::new();
//! let entry = CatalogEntry::new("W001", "Noise Garden", Medium::Audio, Utc::now());
//! catalog.add_entry(entry).unwrap();
//!
//! let results = catalog.search("noise");
//! assert_eq!(results.len(), 1);
//! ```

pub mod catalog;

pub use catalog::Catalog;
