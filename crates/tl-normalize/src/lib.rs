//! Row normalization for residence timelines.
//!
//! [`normalize`] takes header-first rows of string cells and produces
//! per-building resident lists:
//!
//! - Columns are found through fixed alias lists ([`Field::aliases`]), first
//!   non-empty match wins.
//! - Years are coerced with integer-prefix parsing ([`coerce_year`]).
//! - Rows with unusable years are dropped and reported as
//!   [`tl_model::RowRejection`]s instead of failing the run.
//! - Residents are grouped by building in order of first appearance.
//!
//! # Example
//!
//! ```ignore
//! use tl_normalize::{NormalizeOptions, normalize};
//!
//! let rows = vec![
//!     vec!["House", "Name", "StartYear", "EndYear"],
//!     vec!["House 1", "Ann", "1900", "1920"],
//! ];
//! let dataset = normalize(&rows, &NormalizeOptions::default())?;
//! assert_eq!(dataset.buildings[0].building_id, "House 1");
//! ```

mod aliases;
mod normalizer;
mod options;
mod schema;
mod years;

pub use aliases::Field;
pub use normalizer::{NormalizedDataset, normalize};
pub use options::{MissingNamePolicy, NormalizeOptions, SchemaMode};
pub use schema::validate_headers;
pub use years::{MAX_YEAR, coerce_year, is_valid_year, parse_year};
