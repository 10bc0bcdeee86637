//! Per-row diagnostics collected during normalization.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::row::RawRow;

/// Why a data row was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// No name alias had a value and the run rejects nameless rows.
    MissingName,
    /// Start year absent, unparsable or not positive.
    InvalidStartYear,
    /// End year absent, unparsable or not positive.
    InvalidEndYear,
    StartAfterEnd,
}

impl RejectReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingName => "missing resident name",
            Self::InvalidStartYear => "invalid start year",
            Self::InvalidEndYear => "invalid end year",
            Self::StartAfterEnd => "start year after end year",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dropped row. `line` is the 1-based position in the input, header
/// included, so the first data row is line 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRejection {
    pub line: usize,
    pub row: RawRow,
    pub reason: RejectReason,
}

impl fmt::Display for RowRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_display() {
        let rejection = RowRejection {
            line: 4,
            row: RawRow::default(),
            reason: RejectReason::StartAfterEnd,
        };
        assert_eq!(rejection.to_string(), "line 4: start year after end year");
    }
}
