//! Error types for dataset loading.

use thiserror::Error;

/// Errors raised while loading a dataset. Each failure is scoped to the file
/// that caused it; other files in a batch keep processing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited-text parsing failed for a file declared as such.
    #[error("csv parse error: {0}")]
    Csv(String),

    /// Spreadsheet parsing failed for a file declared as such.
    #[error("spreadsheet parse error: {0}")]
    Spreadsheet(String),

    /// Neither parser accepted the payload.
    #[error("unrecognized format (csv: {csv}; spreadsheet: {spreadsheet})")]
    UnrecognizedFormat { csv: String, spreadsheet: String },
}

/// Result type alias for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;
