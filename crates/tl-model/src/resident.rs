use serde::{Deserialize, Serialize};

use crate::category::NotesCategory;

/// Building id used when a row names no building.
pub const UNKNOWN_BUILDING: &str = "Unknown";

/// Name substituted for rows without a resident name in flexible mode.
pub const UNKNOWN_RESIDENT: &str = "Unknown Resident";

/// One occupant's stay in a building, inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidentInterval {
    pub name: String,
    pub start_year: i32,
    pub end_year: i32,
    pub notes: String,
    /// Visual lane assigned by layout; `None` until then.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_index: Option<usize>,
}

impl ResidentInterval {
    pub fn new(
        name: impl Into<String>,
        start_year: i32,
        end_year: i32,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            start_year,
            end_year,
            notes: notes.into(),
            row_index: None,
        }
    }

    /// Inclusive overlap: sharing a single year counts.
    pub fn overlaps(&self, other: &ResidentInterval) -> bool {
        self.start_year <= other.end_year && other.start_year <= self.end_year
    }

    /// Number of years covered, counting both ends.
    pub fn duration_years(&self) -> i32 {
        self.end_year - self.start_year + 1
    }

    pub fn category(&self) -> NotesCategory {
        NotesCategory::classify(&self.notes)
    }
}

/// Residents grouped under one building id, in discovery order until laid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingTimeline {
    pub building_id: String,
    pub residents: Vec<ResidentInterval>,
}

impl BuildingTimeline {
    pub fn new(building_id: impl Into<String>) -> Self {
        Self {
            building_id: building_id.into(),
            residents: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.residents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_is_inclusive() {
        let widow = ResidentInterval::new("A", 1920, 1920, "");
        let heir = ResidentInterval::new("B", 1920, 1935, "");
        let later = ResidentInterval::new("C", 1936, 1940, "");
        assert!(widow.overlaps(&heir));
        assert!(heir.overlaps(&widow));
        assert!(!heir.overlaps(&later));
    }

    #[test]
    fn test_duration_counts_both_ends() {
        assert_eq!(ResidentInterval::new("A", 1900, 1900, "").duration_years(), 1);
        assert_eq!(ResidentInterval::new("A", 1900, 1920, "").duration_years(), 21);
    }

    #[test]
    fn test_category_from_notes() {
        let resident = ResidentInterval::new("A", 1900, 1910, "Tenant, later grocer");
        assert_eq!(resident.category(), NotesCategory::Tenant);
    }
}
