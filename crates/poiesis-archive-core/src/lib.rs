//! Core domain models and types for the Poiesis archive
//!
//! This crate contains the core data structures, enums, and domain logic
//! that represent archived creative works: catalog entries, provenance
//! chains, and technical metadata extracted from work files.

pub mod entry;
pub mod error;
pub mod metadata;
pub mod provenance;
pub mod types;

// Re-exports for convenience
pub use entry::{CatalogEntry, CatalogEntryBuilder, Medium, DEFAULT_SOURCE_ORGAN};
pub use error::{ArchiveError, Result};
pub use metadata::{MetadataExtractor, TechnicalMetadata};
pub use provenance::{ProvenanceChain, ProvenanceEvent};
pub use types::{MetadataValue, Tags, WorkId};
