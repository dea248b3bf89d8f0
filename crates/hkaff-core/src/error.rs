//! Core error types for hkaff-core.
//!
//! This module defines the error hierarchy using thiserror. Only a small
//! part of the system ever surfaces an error: catalogue loading records
//! non-fatal notices, storage corruption heals silently, and duplicate
//! selections are an expected result, not a failure of the engine.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for hkaff-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Catalogue-related errors
    #[error("Catalogue error: {0}")]
    Catalogue(#[from] CatalogueError),

    /// A selection referenced a screening id absent from the catalogue
    #[error("Unknown screening: {0}")]
    UnknownScreening(String),

    /// A screening referenced a film id absent from the catalogue
    #[error("Unknown film '{film_id}' referenced by screening '{screening_id}'")]
    UnknownFilm {
        screening_id: String,
        film_id: String,
    },

    /// The screening is already in the schedule
    #[error(transparent)]
    AlreadySelected(#[from] AlreadySelected),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage-specific errors.
///
/// `SchedulePersistence::load` never returns these (it fails safe to an
/// empty schedule); they only surface from `save`.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to write the schedule document
    #[error("Failed to write schedule to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read the raw stored document
    #[error("Failed to read schedule from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the schedule document
    #[error("Failed to serialize schedule: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The storage location could not be resolved
    #[error("Storage location unavailable: {0}")]
    Unavailable(String),
}

/// Non-fatal catalogue loading problems.
///
/// These are recorded on the facade's error list and shown as notices;
/// the affected collection is treated as empty or partially loaded.
#[derive(Error, Debug)]
pub enum CatalogueError {
    /// A collection file was missing or not valid JSON
    #[error("Catalogue collection '{collection}' unavailable: {message}")]
    CollectionUnavailable { collection: String, message: String },

    /// Individual entries failed validation and were skipped
    #[error("Skipped {count} malformed entries in '{collection}'")]
    SkippedEntries { collection: String, count: usize },
}

/// Returned by `ScheduleEngine::add_selection` when the screening is
/// already in the schedule. The prior selection is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Screening '{screening_id}' is already selected")]
pub struct AlreadySelected {
    pub screening_id: String,
}
