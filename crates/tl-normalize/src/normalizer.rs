//! Raw rows to per-building resident lists.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use tl_model::{
    BuildingTimeline, RawRow, RejectReason, ResidentInterval, Result, RowRejection,
    TimelineError, UNKNOWN_BUILDING, UNKNOWN_RESIDENT,
};

use crate::aliases::Field;
use crate::options::{MissingNamePolicy, NormalizeOptions, SchemaMode};
use crate::schema::validate_headers;
use crate::years::{coerce_year, is_valid_year};

/// Output of one normalization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedDataset {
    /// Buildings in order of first appearance; residents in input order.
    pub buildings: Vec<BuildingTimeline>,
    /// Rows dropped for invalid years or a missing name.
    pub rejections: Vec<RowRejection>,
    /// Rows with neither a name nor a building, skipped without a diagnostic.
    pub blank_rows: usize,
}

impl NormalizedDataset {
    pub fn building(&self, building_id: &str) -> Option<&BuildingTimeline> {
        self.buildings
            .iter()
            .find(|building| building.building_id == building_id)
    }

    pub fn resident_count(&self) -> usize {
        self.buildings.iter().map(BuildingTimeline::len).sum()
    }

    pub fn residents(&self) -> impl Iterator<Item = &ResidentInterval> {
        self.buildings
            .iter()
            .flat_map(|building| building.residents.iter())
    }
}

/// Normalizes header-first rows into per-building resident lists.
///
/// Fails when there is no data row, when strict schema validation finds a
/// required field missing from the header, or when no row survives
/// validation. Invalid rows are otherwise dropped and listed in
/// [`NormalizedDataset::rejections`].
pub fn normalize<S: AsRef<str>>(
    rows: &[Vec<S>],
    options: &NormalizeOptions,
) -> Result<NormalizedDataset> {
    let span = info_span!("normalize", rows = rows.len());
    let _guard = span.enter();

    let Some((header, data)) = rows.split_first() else {
        return Err(TimelineError::EmptyInput { rows: 0 });
    };
    if data.is_empty() {
        return Err(TimelineError::EmptyInput { rows: rows.len() });
    }

    let headers: Vec<&str> = header.iter().map(|h| h.as_ref().trim()).collect();
    if options.schema == SchemaMode::Strict {
        validate_headers(&headers)?;
    }

    let mut buildings: Vec<BuildingTimeline> = Vec::new();
    let mut building_index: HashMap<String, usize> = HashMap::new();
    let mut rejections = Vec::new();
    let mut blank_rows = 0usize;

    for (offset, cells) in data.iter().enumerate() {
        // Header is line 1.
        let line = offset + 2;
        let cells: Vec<&str> = cells.iter().map(|c| c.as_ref().trim()).collect();
        let record = RawRow::from_cells(&headers, &cells);

        if is_blank(&record) {
            debug!(line, "skipping row without name or building");
            blank_rows += 1;
            continue;
        }

        match resolve_record(&record, options) {
            Ok((building_id, resident)) => {
                let idx = match building_index.get(&building_id) {
                    Some(&idx) => idx,
                    None => {
                        buildings.push(BuildingTimeline::new(building_id.clone()));
                        building_index.insert(building_id, buildings.len() - 1);
                        buildings.len() - 1
                    }
                };
                buildings[idx].residents.push(resident);
            }
            Err(reason) => {
                warn!(line, %reason, "skipping invalid record");
                rejections.push(RowRejection {
                    line,
                    row: record,
                    reason,
                });
            }
        }
    }

    if buildings.is_empty() {
        return Err(TimelineError::NoValidRecords {
            rejected: rejections.len(),
        });
    }

    let dataset = NormalizedDataset {
        buildings,
        rejections,
        blank_rows,
    };
    info!(
        buildings = dataset.buildings.len(),
        residents = dataset.resident_count(),
        rejected = dataset.rejections.len(),
        blank = dataset.blank_rows,
        "normalized residence rows"
    );
    Ok(dataset)
}

fn is_blank(record: &RawRow) -> bool {
    record.first_non_empty(Field::Name.aliases()).is_none()
        && record.first_non_empty(Field::Building.aliases()).is_none()
}

fn resolve_record(
    record: &RawRow,
    options: &NormalizeOptions,
) -> std::result::Result<(String, ResidentInterval), RejectReason> {
    let building_id = record
        .first_non_empty(Field::Building.aliases())
        .unwrap_or(UNKNOWN_BUILDING);

    let name = match record.first_non_empty(Field::Name.aliases()) {
        Some(name) => name,
        None => match options.missing_name {
            MissingNamePolicy::Substitute => UNKNOWN_RESIDENT,
            MissingNamePolicy::Reject => return Err(RejectReason::MissingName),
        },
    };

    let start_year = year_field(record, Field::StartYear);
    if !is_valid_year(start_year) {
        return Err(RejectReason::InvalidStartYear);
    }
    let end_year = year_field(record, Field::EndYear);
    if !is_valid_year(end_year) {
        return Err(RejectReason::InvalidEndYear);
    }
    if start_year > end_year {
        return Err(RejectReason::StartAfterEnd);
    }

    let notes = record
        .first_non_empty(Field::Notes.aliases())
        .unwrap_or_default();

    Ok((
        building_id.to_string(),
        ResidentInterval::new(name, start_year, end_year, notes),
    ))
}

/// The first non-empty alias decides; an unparsable value there does not
/// fall through to later aliases.
fn year_field(record: &RawRow, field: Field) -> i32 {
    record
        .first_non_empty(field.aliases())
        .map_or(0, coerce_year)
}
