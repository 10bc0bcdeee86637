//! Error types for residence data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading source rows.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file {path} is {size} bytes, over the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File starts with a byte-order mark for an encoding we do not read.
    #[error("unsupported encoding {encoding} in {path} (expected UTF-8)")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// Malformed CSV content.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no non-blank rows.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/residents.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/residents.csv");
    }

    #[test]
    fn test_too_large_display() {
        let err = IngestError::FileTooLarge {
            path: PathBuf::from("big.csv"),
            size: 20,
            max_size: 10,
        };
        assert_eq!(
            err.to_string(),
            "file big.csv is 20 bytes, over the 10 byte limit"
        );
    }
}
