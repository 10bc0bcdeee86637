//! CSV file reading into header-first rows of trimmed cells.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Maximum file size for CSV loading (50 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 50 * 1024 * 1024;

const BOM: char = '\u{feff}';

fn open_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        let encoding = match buffer {
            [0xFF, 0xFE] => Some("UTF-16 LE"),
            [0xFE, 0xFF] => Some("UTF-16 BE"),
            _ => None,
        };
        if let Some(encoding) = encoding {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding,
            });
        }
    }

    // UTF-8 BOM is acceptable (stripped while parsing)
    Ok(())
}

/// Reads a CSV file into rows of trimmed cells, header row first.
///
/// Rows may be ragged; rows whose cells are all empty are dropped.
pub fn read_csv_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    check_file_size(path)?;
    validate_encoding(path)?;

    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let rows = parse_records(file, path)?;

    tracing::debug!(
        path = %path.display(),
        rows = rows.len(),
        "read CSV rows"
    );
    Ok(rows)
}

/// Parses CSV text already in memory, such as a fetched spreadsheet export.
pub fn parse_csv_text(text: &str) -> Result<Vec<Vec<String>>> {
    parse_records(text.as_bytes(), Path::new("<text>"))
}

fn parse_records<R: Read>(source: R, path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
        if rows.is_empty() {
            if let Some(first) = cells.first_mut() {
                *first = first.trim_start_matches(BOM).trim().to_string();
            }
        }
        if cells.iter().all(String::is_empty) {
            continue;
        }
        rows.push(cells);
    }

    if rows.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    Ok(rows)
}
