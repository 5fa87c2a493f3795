//! CLI argument definitions for the data exploration studio.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use dash_model::ChartKind;

#[derive(Parser)]
#[command(
    name = "dash",
    version,
    about = "Data exploration studio - profile tabular files and build chart specs",
    long_about = "Explore tabular datasets from the terminal.\n\n\
                  Loads CSV and spreadsheet files (or a public drive share link),\n\
                  profiles every column, reassigns column types, and turns chart\n\
                  selections into declarative chart specifications.\n\n\
                  Files up to 5 GB are fine in practice; the limit is advisory,\n\
                  not enforced."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Profile one or more local data files.
    Profile(ProfileArgs),

    /// Fetch a dataset from a public share link and profile it.
    Fetch(FetchArgs),

    /// Reassign column types, then profile the result.
    Retype(RetypeArgs),

    /// Validate a chart selection and print the resulting spec.
    Chart(ChartArgs),
}

#[derive(Parser)]
pub struct ProfileArgs {
    /// Data files to profile (CSV or spreadsheet), processed in order.
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Parser)]
pub struct FetchArgs {
    /// Public share link ("anyone with the link" sharing).
    #[arg(value_name = "SHARE_LINK")]
    pub link: String,
}

#[derive(Parser)]
pub struct RetypeArgs {
    /// Data file to retype.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Type assignments as column=type (type: text, int64, float64, bool,
    /// timestamp). Repeatable; failing columns are reported and skipped.
    #[arg(long = "set", value_name = "COLUMN=TYPE", required = true)]
    pub assignments: Vec<String>,
}

#[derive(Parser)]
pub struct ChartArgs {
    /// Data file to chart.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Column for a univariate chart, or the x axis of a bivariate one.
    #[arg(long = "x", value_name = "COLUMN")]
    pub x: String,

    /// Y-axis column; providing it makes the request bivariate.
    #[arg(long = "y", value_name = "COLUMN")]
    pub y: Option<String>,

    /// Categorical grouping column (bivariate only).
    #[arg(long = "group", value_name = "COLUMN")]
    pub group: Option<String>,

    /// Chart kind.
    #[arg(long = "kind", value_enum, default_value = "distribution")]
    pub kind: KindArg,

    /// Also print describe-style aggregates for the selected columns.
    #[arg(long = "describe")]
    pub describe: bool,
}

/// CLI chart kind choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    Distribution,
    Histogram,
    TrendLine,
    BoxSummary,
    TabularPreview,
}

impl From<KindArg> for ChartKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Distribution => ChartKind::Distribution,
            KindArg::Histogram => ChartKind::Histogram,
            KindArg::TrendLine => ChartKind::TrendLine,
            KindArg::BoxSummary => ChartKind::BoxSummary,
            KindArg::TabularPreview => ChartKind::TabularPreview,
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
