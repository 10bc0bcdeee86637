use anyhow::Result;
use comfy_table::{Cell, Table};
use tracing::info_span;

use tl_cli::pipeline::{PipelineOptions, TimelineRun, load_timeline};
use tl_layout::{BuildingOrder, LayoutOptions};
use tl_model::legend;
use tl_normalize::NormalizeOptions;

use crate::cli::LayoutArgs;
use crate::summary::{apply_table_style, color_swatch};

pub fn run_legend() {
    let mut table = Table::new();
    table.set_header(vec!["Category", "Color"]);
    apply_table_style(&mut table);
    for entry in legend() {
        table.add_row(vec![Cell::new(entry.label), color_swatch(entry.color)]);
    }
    println!("{table}");
}

pub fn run_layout(args: &LayoutArgs) -> Result<TimelineRun> {
    let span = info_span!("layout", strict = args.strict);
    let _guard = span.enter();
    load_timeline(&args.input, &pipeline_options(args))
}

fn pipeline_options(args: &LayoutArgs) -> PipelineOptions {
    let normalize = if args.strict {
        NormalizeOptions::strict()
    } else {
        NormalizeOptions::default()
    };
    let layout = LayoutOptions::default().with_building_order(if args.sort_buildings {
        BuildingOrder::Alphabetical
    } else {
        BuildingOrder::Discovery
    });
    PipelineOptions { normalize, layout }
}
