//! Data model shared by the residence timeline crates.
//!
//! Raw spreadsheet rows come in as [`RawRow`] values, the normalizer turns
//! them into [`BuildingTimeline`]s of [`ResidentInterval`]s, and the layout
//! engine fills in each interval's row index and the global [`YearRange`].

pub mod category;
pub mod error;
pub mod range;
pub mod rejection;
pub mod resident;
pub mod row;

pub use category::{LegendEntry, NotesCategory, legend};
pub use error::{Result, TimelineError};
pub use range::{BarExtent, YearRange};
pub use rejection::{RejectReason, RowRejection};
pub use resident::{BuildingTimeline, ResidentInterval, UNKNOWN_BUILDING, UNKNOWN_RESIDENT};
pub use row::RawRow;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn building_timeline_serializes() {
        let building = BuildingTimeline {
            building_id: "House 1".to_string(),
            residents: vec![ResidentInterval::new("John Smith", 1900, 1920, "owner")],
        };
        let json = serde_json::to_string(&building).expect("serialize building");
        let round: BuildingTimeline = serde_json::from_str(&json).expect("deserialize building");
        assert_eq!(round, building);
    }

    #[test]
    fn unplaced_resident_omits_row_index() {
        let resident = ResidentInterval::new("Mary Johnson", 1922, 1935, "tenant");
        let json = serde_json::to_value(&resident).expect("serialize resident");
        assert!(json.get("row_index").is_none());
        assert_eq!(json["start_year"], 1922);
    }
}
