//! Error types for timetable ingestion.

use std::path::PathBuf;
use thiserror::Error;

use sace_model::SaceError;

/// Errors that can occur while locating or reading timetable exports.
///
/// Every variant is fatal for an import run.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// None of the candidate timetable folders exist.
    #[error("timetable folder can not be found (searched {} locations)", .searched.len())]
    NoTimetableDir { searched: Vec<PathBuf> },

    /// Timetable export not found.
    #[error("timetable file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// Export is not valid JSON or lacks a required collection or field.
    #[error("failed to parse timetable {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// A record parsed but holds an unusable value.
    #[error("invalid record {index} in {collection}: {source}")]
    InvalidRecord {
        collection: &'static str,
        index: usize,
        #[source]
        source: SaceError,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
