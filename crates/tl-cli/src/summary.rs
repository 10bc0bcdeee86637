use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use tl_cli::logging::redact_value;
use tl_cli::pipeline::TimelineRun;
use tl_layout::LaidOutBuilding;
use tl_model::{RawRow, RejectReason, ResidentInterval, RowRejection, YearRange};

pub fn print_summary(run: &TimelineRun, log_data: bool) {
    let snapshot = &run.snapshot;
    println!("Source: {}", run.source.display());
    println!(
        "Year range: {}-{} ({} decades)",
        snapshot.year_range.min,
        snapshot.year_range.max,
        snapshot.year_range.span() / 10
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Building"),
        header_cell("Row"),
        header_cell("Resident"),
        header_cell("Years"),
        header_cell("Notes"),
        header_cell("Category"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for building in &snapshot.buildings {
        add_building_rows(&mut table, building);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(snapshot.resident_count()).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");
    print_rejection_table(run, log_data);
}

fn add_building_rows(table: &mut Table, building: &LaidOutBuilding) {
    for (idx, resident) in building.residents.iter().enumerate() {
        let building_cell = if idx == 0 {
            Cell::new(format!("{} ({} rows)", building.building_id, building.row_count))
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new("")
        };
        table.add_row(vec![
            building_cell,
            row_cell(resident),
            Cell::new(&resident.name),
            Cell::new(format!("{}-{}", resident.start_year, resident.end_year)),
            notes_cell(&resident.notes),
            category_cell(resident),
        ]);
    }
}

fn print_rejection_table(run: &TimelineRun, log_data: bool) {
    if run.rejections.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Reason"),
        header_cell("Row"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for rejection in &run.rejections {
        table.add_row(vec![
            Cell::new(rejection.line),
            reason_cell(rejection.reason),
            Cell::new(describe_row(&rejection.row, log_data)),
        ]);
    }
    println!();
    println!("Rejected rows:");
    println!("{table}");
    if run.blank_rows > 0 {
        println!("Skipped {} blank rows.", run.blank_rows);
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    source: &'a Path,
    year_range: YearRange,
    buildings: &'a [LaidOutBuilding],
    rejections: Vec<JsonRejection<'a>>,
    blank_rows: usize,
}

#[derive(Serialize)]
struct JsonRejection<'a> {
    line: usize,
    reason: RejectReason,
    #[serde(skip_serializing_if = "Option::is_none")]
    row: Option<&'a RawRow>,
}

impl<'a> JsonRejection<'a> {
    fn new(rejection: &'a RowRejection, log_data: bool) -> Self {
        Self {
            line: rejection.line,
            reason: rejection.reason,
            row: log_data.then_some(&rejection.row),
        }
    }
}

pub fn print_json(run: &TimelineRun, log_data: bool) -> Result<()> {
    let report = JsonReport {
        source: &run.source,
        year_range: run.snapshot.year_range,
        buildings: &run.snapshot.buildings,
        rejections: run
            .rejections
            .iter()
            .map(|rejection| JsonRejection::new(rejection, log_data))
            .collect(),
        blank_rows: run.blank_rows,
    };
    let json = serde_json::to_string_pretty(&report).context("serialize timeline")?;
    println!("{json}");
    Ok(())
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn describe_row(row: &RawRow, log_data: bool) -> String {
    row.iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| format!("{name}={}", redact_value(value, log_data)))
        .collect::<Vec<_>>()
        .join("; ")
}

fn row_cell(resident: &ResidentInterval) -> Cell {
    match resident.row_index {
        Some(row) => Cell::new(row),
        None => dim_cell("-"),
    }
}

fn notes_cell(notes: &str) -> Cell {
    if notes.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(notes)
    }
}

fn category_cell(resident: &ResidentInterval) -> Cell {
    let category = resident.category();
    Cell::new(category.label()).fg(hex_color(category.color()))
}

fn reason_cell(reason: RejectReason) -> Cell {
    match reason {
        RejectReason::MissingName => Cell::new(reason).fg(Color::Yellow),
        RejectReason::InvalidStartYear
        | RejectReason::InvalidEndYear
        | RejectReason::StartAfterEnd => Cell::new(reason).fg(Color::Red),
    }
}

/// A cell showing the hex code in its own color.
pub fn color_swatch(hex: &str) -> Cell {
    Cell::new(hex).fg(hex_color(hex))
}

fn hex_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
    };
    match (digits.len(), channel(0..2), channel(2..4), channel(4..6)) {
        (6, Some(r), Some(g), Some(b)) => Color::Rgb { r, g, b },
        _ => Color::Reset,
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert_eq!(
            hex_color("#69b3a2"),
            Color::Rgb {
                r: 0x69,
                g: 0xb3,
                b: 0xa2
            }
        );
        assert_eq!(hex_color("teal"), Color::Reset);
    }

    #[test]
    fn test_describe_row_redacts() {
        let row = RawRow::from_cells(&["House", "Name", "Notes"], &["H", "Ann", ""]);
        assert_eq!(describe_row(&row, false), "House=[REDACTED]; Name=[REDACTED]");
        assert_eq!(describe_row(&row, true), "House=H; Name=Ann");
    }
}
