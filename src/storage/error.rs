//! Storage error types
//!
//! Defines all errors that can occur while reading or writing the diary table.

use thiserror::Error;

/// Errors that can occur in the storage layer
#[derive(Error, Debug)]
pub enum StorageError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file could not be read or written as CSV
    #[error("CSV error: {0}")]
    Csv(String),

    /// The header row is missing or does not match `Date,Description`
    #[error("Invalid header: expected [\"Date\", \"Description\"], found {found:?}")]
    InvalidHeader {
        /// Header fields actually present in the file
        found: Vec<String>,
    },

    /// A data row does not have exactly two fields
    #[error("Expected 2 fields in line {line}, saw {found}")]
    FieldCount {
        /// 1-based line number in the file
        line: u64,
        /// Number of fields found on that line
        found: usize,
    },
}

impl From<csv::Error> for StorageError {
    fn from(err: csv::Error) -> Self {
        StorageError::Csv(err.to_string())
    }
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
