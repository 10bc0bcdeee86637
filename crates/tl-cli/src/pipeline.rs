//! Load, normalize and lay out one source file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use tl_ingest::read_csv_rows;
use tl_layout::{LayoutOptions, TimelineSnapshot, build_snapshot};
use tl_model::RowRejection;
use tl_normalize::{NormalizeOptions, normalize};

/// Options for a full run, threaded from CLI flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    pub normalize: NormalizeOptions,
    pub layout: LayoutOptions,
}

/// Everything the presentation layer needs from one run.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineRun {
    pub source: PathBuf,
    pub snapshot: TimelineSnapshot,
    pub rejections: Vec<RowRejection>,
    pub blank_rows: usize,
}

/// Layout of in-memory rows, before a source is attached.
#[derive(Debug, Clone, Serialize)]
pub struct RowsOutcome {
    pub snapshot: TimelineSnapshot,
    pub rejections: Vec<RowRejection>,
    pub blank_rows: usize,
}

/// Normalizes in-memory rows and lays out the result.
pub fn run_rows<S: AsRef<str>>(rows: &[Vec<S>], options: &PipelineOptions) -> Result<RowsOutcome> {
    let dataset = normalize(rows, &options.normalize).context("normalize rows")?;
    let snapshot = build_snapshot(&dataset.buildings, &options.layout).context("lay out timeline")?;
    Ok(RowsOutcome {
        snapshot,
        rejections: dataset.rejections,
        blank_rows: dataset.blank_rows,
    })
}

/// Reads a CSV file and runs it through normalization and layout.
pub fn load_timeline(path: &Path, options: &PipelineOptions) -> Result<TimelineRun> {
    let span = info_span!("timeline", source = %path.display());
    let _guard = span.enter();

    let rows = read_csv_rows(path).with_context(|| format!("read {}", path.display()))?;
    let RowsOutcome {
        snapshot,
        rejections,
        blank_rows,
    } = run_rows(&rows, options)?;

    info!(
        buildings = snapshot.buildings.len(),
        residents = snapshot.resident_count(),
        rejected = rejections.len(),
        "loaded timeline"
    );

    Ok(TimelineRun {
        source: path.to_path_buf(),
        snapshot,
        rejections,
        blank_rows,
    })
}
