//! CLI argument definitions for the NTCNA dashboard.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use ntcna_model::ChartKind;

#[derive(Parser)]
#[command(
    name = "ntcna",
    version,
    about = "NTCNA census dashboard - compare places against the state and the US",
    long_about = "Reshape census and CHAS records for Northeast Nebraska places into\n\
                  US / state / place comparison tables, and filter arbitrary tables\n\
                  by numeric ranges and category sets."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Dashboard configuration file (JSON). Missing fields take defaults.
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the census and CHAS files (overrides the config).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the known places and their codes.
    Places,

    /// List the demographic groups and their codes.
    Demographics,

    /// List the years present in the census data.
    Years,

    /// Print the comparison table for one or all charts.
    Chart(ChartArgs),

    /// Print where the map centres for a place and year.
    Map(MapArgs),

    /// Filter a CSV or GeoJSON table by ranges and category sets.
    Filter(FilterArgs),
}

/// Place and year shared by the chart and map commands.
#[derive(Args)]
pub struct SelectionArgs {
    /// Place code or name (default: Santee).
    #[arg(long = "place", value_name = "PLACE")]
    pub place: Option<String>,

    /// Survey year (default: 2011).
    #[arg(long = "year", value_name = "YEAR")]
    pub year: Option<i64>,
}

#[derive(Args)]
pub struct ChartArgs {
    /// Chart to print.
    #[arg(long = "kind", value_enum, default_value = "all")]
    pub kind: ChartKindArg,

    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Demographic code or name (default: total).
    #[arg(long = "demographic", value_name = "DEMOGRAPHIC")]
    pub demographic: Option<String>,

    /// Print one row per group with a column per scope.
    #[arg(long = "wide")]
    pub wide: bool,
}

#[derive(Args)]
pub struct MapArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Map zoom level, 1 to 20 (default: from the config).
    #[arg(long = "zoom", value_name = "LEVEL")]
    pub zoom: Option<u8>,
}

#[derive(Args)]
pub struct FilterArgs {
    /// Table to filter (.geojson/.json feature collection or .csv).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Numeric range filter, optionally with a value: COLUMN[=LO:HI].
    #[arg(long = "range", value_name = "SPEC")]
    pub ranges: Vec<String>,

    /// Category filter, optionally with selected values: COLUMN[=A,B,..].
    #[arg(long = "category", value_name = "SPEC")]
    pub categories: Vec<String>,

    /// Maximum number of filtered rows to print.
    #[arg(long = "limit", value_name = "N", default_value_t = 10)]
    pub limit: usize,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ChartKindArg {
    MedianAge,
    SevereHousing,
    Poverty,
    AgeDistribution,
    All,
}

impl ChartKindArg {
    pub fn kinds(self) -> Vec<ChartKind> {
        match self {
            ChartKindArg::MedianAge => vec![ChartKind::MedianAge],
            ChartKindArg::SevereHousing => vec![ChartKind::SevereHousing],
            ChartKindArg::Poverty => vec![ChartKind::Poverty],
            ChartKindArg::AgeDistribution => vec![ChartKind::AgeDistribution],
            ChartKindArg::All => ChartKind::ALL.to_vec(),
        }
    }
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
