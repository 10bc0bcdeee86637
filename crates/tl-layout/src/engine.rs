//! Greedy row assignment within one building.

use serde::{Deserialize, Serialize};
use tracing::debug;

use tl_model::{BuildingTimeline, ResidentInterval};

/// A building whose residents all carry a row index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaidOutBuilding {
    pub building_id: String,
    /// Sorted by start year, ties in input order.
    pub residents: Vec<ResidentInterval>,
    /// Number of rows opened; every `row_index` is below this.
    pub row_count: usize,
}

/// Assigns each resident the lowest row it can share without overlapping.
///
/// Residents are stable-sorted by start year. Each row keeps a watermark, the
/// end year of the last resident placed in it; a resident may join a row only
/// when it starts strictly after that watermark, so intervals sharing a year
/// never share a row.
pub fn layout(residents: &[ResidentInterval]) -> Vec<ResidentInterval> {
    let mut placed = residents.to_vec();
    placed.sort_by_key(|resident| resident.start_year);

    let mut watermarks: Vec<i32> = Vec::new();
    for resident in &mut placed {
        let row = match watermarks
            .iter()
            .position(|&end_year| resident.start_year > end_year)
        {
            Some(row) => {
                watermarks[row] = resident.end_year;
                row
            }
            None => {
                watermarks.push(resident.end_year);
                watermarks.len() - 1
            }
        };
        resident.row_index = Some(row);
    }
    placed
}

/// Lays out one building and records how many rows it needs.
pub fn layout_building(building: &BuildingTimeline) -> LaidOutBuilding {
    let residents = layout(&building.residents);
    let row_count = residents
        .iter()
        .filter_map(|resident| resident.row_index)
        .max()
        .map_or(0, |max| max + 1);

    debug!(
        building = %building.building_id,
        residents = residents.len(),
        rows = row_count,
        "laid out building"
    );

    LaidOutBuilding {
        building_id: building.building_id.clone(),
        residents,
        row_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resident(name: &str, start: i32, end: i32) -> ResidentInterval {
        ResidentInterval::new(name, start, end, "")
    }

    fn rows_of(placed: &[ResidentInterval]) -> Vec<(&str, usize)> {
        placed
            .iter()
            .map(|r| (r.name.as_str(), r.row_index.unwrap()))
            .collect()
    }

    #[test]
    fn test_sequential_residents_share_row() {
        let placed = layout(&[
            resident("A", 1900, 1910),
            resident("B", 1911, 1920),
            resident("C", 1921, 1930),
        ]);
        assert_eq!(rows_of(&placed), vec![("A", 0), ("B", 0), ("C", 0)]);
    }

    #[test]
    fn test_shared_boundary_year_overlaps() {
        let placed = layout(&[resident("A", 1920, 1920), resident("B", 1920, 1935)]);
        assert_eq!(rows_of(&placed), vec![("A", 0), ("B", 1)]);
    }

    #[test]
    fn test_sorted_by_start_year_stable() {
        let placed = layout(&[
            resident("Late", 1950, 1960),
            resident("First", 1900, 1960),
            resident("Second", 1900, 1905),
        ]);
        assert_eq!(
            rows_of(&placed),
            vec![("First", 0), ("Second", 1), ("Late", 1)]
        );
    }

    #[test]
    fn test_reuses_lowest_free_row() {
        let placed = layout(&[
            resident("A", 1900, 1950),
            resident("B", 1900, 1910),
            resident("C", 1905, 1915),
            resident("D", 1912, 1920),
        ]);
        // D fits after B in row 1 before C's row 2 is considered.
        assert_eq!(rows_of(&placed), vec![("A", 0), ("B", 1), ("C", 2), ("D", 1)]);
    }

    #[test]
    fn test_layout_does_not_touch_input() {
        let input = vec![resident("A", 1900, 1910)];
        let _ = layout(&input);
        assert_eq!(input[0].row_index, None);
    }

    #[test]
    fn test_layout_building_row_count() {
        let mut building = BuildingTimeline::new("House 1");
        building.residents = vec![
            resident("A", 1900, 1920),
            resident("B", 1910, 1930),
            resident("C", 1925, 1940),
        ];
        let laid_out = layout_building(&building);
        assert_eq!(laid_out.building_id, "House 1");
        assert_eq!(laid_out.row_count, 2);
    }

    #[test]
    fn test_empty_building() {
        let laid_out = layout_building(&BuildingTimeline::new("Empty"));
        assert_eq!(laid_out.row_count, 0);
        assert!(laid_out.residents.is_empty());
    }
}
