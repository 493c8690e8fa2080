//! Error types for roster ingestion.

use thiserror::Error;

/// Errors that can occur while reading a roster file.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Failed to read roster file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse roster CSV: {0}")]
    CsvParse(#[from] csv::Error),
}

/// Result type for roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;
