//! End-to-end: raw rows through normalization and layout.

use tl_layout::{LayoutOptions, build_snapshot};
use tl_model::YearRange;
use tl_normalize::{NormalizeOptions, normalize};

fn upload_rows() -> Vec<Vec<&'static str>> {
    vec![
        vec!["house", "resident_name", "start_year", "end_year", "notes"],
        vec!["House 1", "John Smith", "1900", "1920", "owner"],
        vec!["House 1", "Mary Johnson", "1922", "1935", "tenant"],
        vec!["House 1", "Robert Brown", "1930", "1945", "tenant"],
    ]
}

#[test]
fn upload_scenario_rows_and_range() {
    let dataset = normalize(&upload_rows(), &NormalizeOptions::default()).unwrap();
    let snapshot = build_snapshot(&dataset.buildings, &LayoutOptions::default()).unwrap();

    assert_eq!(snapshot.buildings.len(), 1);
    let building = snapshot.building("House 1").unwrap();
    assert_eq!(building.row_count, 2);

    let rows: Vec<(&str, Option<usize>)> = building
        .residents
        .iter()
        .map(|r| (r.name.as_str(), r.row_index))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("John Smith", Some(0)),
            ("Mary Johnson", Some(0)),
            ("Robert Brown", Some(1)),
        ]
    );
    assert_eq!(snapshot.year_range, YearRange { min: 1900, max: 1950 });
}

#[test]
fn upload_scenario_snapshot_shape() {
    let dataset = normalize(&upload_rows(), &NormalizeOptions::default()).unwrap();
    let snapshot = build_snapshot(&dataset.buildings, &LayoutOptions::default()).unwrap();

    insta::assert_json_snapshot!(snapshot, @r#"
    {
      "buildings": [
        {
          "building_id": "House 1",
          "residents": [
            {
              "name": "John Smith",
              "start_year": 1900,
              "end_year": 1920,
              "notes": "owner",
              "row_index": 0
            },
            {
              "name": "Mary Johnson",
              "start_year": 1922,
              "end_year": 1935,
              "notes": "tenant",
              "row_index": 0
            },
            {
              "name": "Robert Brown",
              "start_year": 1930,
              "end_year": 1945,
              "notes": "tenant",
              "row_index": 1
            }
          ],
          "row_count": 2
        }
      ],
      "year_range": {
        "min": 1900,
        "max": 1950
      }
    }
    "#);
}
