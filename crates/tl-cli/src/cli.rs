//! CLI argument definitions for the residence timeline tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "residence-timeline",
    version,
    about = "Lay out building occupancy records as non-overlapping timeline rows",
    long_about = "Read a CSV of people who lived in buildings over year ranges,\n\
                  group them per building and assign each stay a timeline row\n\
                  so that overlapping stays never share a row."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Show cell values of rejected rows (resident names) in diagnostics.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a CSV file and print the laid-out timeline.
    Layout(LayoutArgs),

    /// List the notes categories and their colors.
    Legend,
}

#[derive(Parser)]
pub struct LayoutArgs {
    /// CSV file with a header row (house, name, start year, end year, notes).
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Require the building, name, start and end year columns in the header
    /// and reject rows without a resident name.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Sort buildings by id instead of order of first appearance.
    #[arg(long = "sort-buildings")]
    pub sort_buildings: bool,

    /// Output format to print.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
