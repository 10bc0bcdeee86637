//! Whole-dataset layout for the renderer.

use serde::{Deserialize, Serialize};
use tracing::info;

use tl_model::{BuildingTimeline, Result, YearRange};

use crate::engine::{LaidOutBuilding, layout_building};
use crate::range::compute_year_range;

/// Order of buildings in the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BuildingOrder {
    /// Order of first appearance in the input.
    #[default]
    Discovery,
    /// By building id, ignoring case.
    Alphabetical,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutOptions {
    pub building_order: BuildingOrder,
}

impl LayoutOptions {
    #[must_use]
    pub fn with_building_order(mut self, order: BuildingOrder) -> Self {
        self.building_order = order;
        self
    }
}

/// Laid-out buildings plus the shared axis range. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSnapshot {
    pub buildings: Vec<LaidOutBuilding>,
    pub year_range: YearRange,
}

impl TimelineSnapshot {
    pub fn resident_count(&self) -> usize {
        self.buildings.iter().map(|b| b.residents.len()).sum()
    }

    pub fn building(&self, building_id: &str) -> Option<&LaidOutBuilding> {
        self.buildings
            .iter()
            .find(|building| building.building_id == building_id)
    }
}

/// Lays out every building and computes the global year range.
pub fn build_snapshot(
    buildings: &[BuildingTimeline],
    options: &LayoutOptions,
) -> Result<TimelineSnapshot> {
    let year_range =
        compute_year_range(buildings.iter().flat_map(|building| building.residents.iter()))?;

    let mut laid_out: Vec<LaidOutBuilding> = buildings.iter().map(layout_building).collect();
    if options.building_order == BuildingOrder::Alphabetical {
        laid_out.sort_by(|a, b| {
            a.building_id
                .to_lowercase()
                .cmp(&b.building_id.to_lowercase())
                .then_with(|| a.building_id.cmp(&b.building_id))
        });
    }

    info!(
        buildings = laid_out.len(),
        min_year = year_range.min,
        max_year = year_range.max,
        "timeline ready"
    );

    Ok(TimelineSnapshot {
        buildings: laid_out,
        year_range,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tl_model::{ResidentInterval, TimelineError};

    fn building(id: &str, residents: &[(i32, i32)]) -> BuildingTimeline {
        let mut building = BuildingTimeline::new(id);
        building.residents = residents
            .iter()
            .map(|&(start, end)| ResidentInterval::new("R", start, end, ""))
            .collect();
        building
    }

    #[test]
    fn test_range_spans_all_buildings() {
        let buildings = [building("B", &[(1921, 1930)]), building("A", &[(1888, 1901)])];
        let snapshot = build_snapshot(&buildings, &LayoutOptions::default()).unwrap();
        assert_eq!(snapshot.year_range, YearRange { min: 1880, max: 1930 });
        assert_eq!(snapshot.buildings[0].building_id, "B");
        assert_eq!(snapshot.resident_count(), 2);
    }

    #[test]
    fn test_alphabetical_order() {
        let buildings = [
            building("mill", &[(1900, 1910)]),
            building("Abbey", &[(1900, 1910)]),
            building("Chapel", &[(1900, 1910)]),
        ];
        let options = LayoutOptions::default().with_building_order(BuildingOrder::Alphabetical);
        let snapshot = build_snapshot(&buildings, &options).unwrap();
        let ids: Vec<&str> = snapshot
            .buildings
            .iter()
            .map(|b| b.building_id.as_str())
            .collect();
        assert_eq!(ids, vec!["Abbey", "Chapel", "mill"]);
    }

    #[test]
    fn test_no_residents_is_empty_range() {
        let buildings = [building("Empty", &[])];
        let err = build_snapshot(&buildings, &LayoutOptions::default()).unwrap_err();
        assert_eq!(err, TimelineError::EmptyRange);
    }
}
