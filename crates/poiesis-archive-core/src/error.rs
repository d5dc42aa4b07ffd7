//! Error types for the Poiesis archive

use thiserror::Error;

use crate::types::WorkId;

/// Result type alias for archive operations
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Main error type for archive operations
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// A work with the same ID is already cataloged
    #[error("Duplicate work_id: '{0}'")]
    DuplicateWork(WorkId),

    /// No work with the given ID exists
    #[error("Work not found: '{0}'")]
    WorkNotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Serialization/Deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for ArchiveError {
    fn from(err: serde_json::Error) -> Self {
        ArchiveError::SerializationError(err.to_string())
    }
}
