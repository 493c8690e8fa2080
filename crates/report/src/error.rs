//! Error types for report writing.

use thiserror::Error;

/// Errors that can occur while writing report outputs.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report file: {0}")]
    FileWrite(#[from] std::io::Error),

    #[error("Failed to write CSV: {0}")]
    CsvWrite(#[from] csv::Error),

    #[error("Failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
