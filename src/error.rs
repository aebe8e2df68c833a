use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationReport;

/// The main error type for pantrack operations.
#[derive(Debug, Error)]
pub enum PantrackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No {suffix} document found in archive")]
    MissingEntry { suffix: String },

    #[error("Could not detect latitude/longitude columns in CSV input")]
    ColumnDetection,

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to parse {format} XML: {message}")]
    XmlParse {
        format: &'static str,
        message: String,
    },

    #[error("Failed to read archive: {source}")]
    ArchiveRead {
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Failed to read CSV input: {source}")]
    CsvRead {
        #[source]
        source: csv::Error,
    },

    #[error("Failed to parse document JSON from {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write document JSON to {path}: {source}")]
    JsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Validation failed with {error_count} error(s) and {warning_count} warning(s)")]
    ValidationFailed {
        error_count: usize,
        warning_count: usize,
        report: ValidationReport,
    },
}
