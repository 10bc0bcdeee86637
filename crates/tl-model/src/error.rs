use thiserror::Error;

/// Whole-run failures surfaced to the caller.
///
/// Per-row problems are never raised through this type; they are collected
/// as [`crate::RowRejection`] values instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimelineError {
    /// Fewer than two rows: nothing beyond the header.
    #[error("input needs a header row and at least one data row (got {rows} rows)")]
    EmptyInput { rows: usize },

    /// Every data row was blank or rejected.
    #[error("no valid resident records found ({rejected} rows rejected)")]
    NoValidRecords { rejected: usize },

    /// Year range requested over zero residents.
    #[error("cannot compute a year range without residents")]
    EmptyRange,

    /// Strict schema validation found none of a field's aliases in the header.
    #[error("missing required column for {field} (expected one of: {aliases})")]
    MissingHeader { field: String, aliases: String },
}

pub type Result<T> = std::result::Result<T, TimelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TimelineError::EmptyInput { rows: 1 };
        assert_eq!(
            err.to_string(),
            "input needs a header row and at least one data row (got 1 rows)"
        );

        let err = TimelineError::MissingHeader {
            field: "building".to_string(),
            aliases: "House, Address".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "missing required column for building (expected one of: House, Address)"
        );
    }
}
