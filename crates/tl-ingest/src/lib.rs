//! Residence timeline data ingestion.
//!
//! Turns a CSV export (local upload or a public spreadsheet export) into the
//! one shape the normalizer accepts: an ordered list of rows, each an ordered
//! list of trimmed string cells, header row first.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tl_ingest::read_csv_rows;
//!
//! let rows = read_csv_rows(Path::new("residents.csv"))?;
//! let header = &rows[0];
//! ```

mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{
    MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, parse_csv_text,
    read_csv_rows, validate_encoding,
};
