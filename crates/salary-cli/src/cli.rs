//! CLI argument definitions for the salary explorer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use salary_cli::filters::FilterArgs;

#[derive(Parser)]
#[command(
    name = "salary-eda",
    version,
    about = "Explore data science salaries from the command line",
    long_about = "Filter the data science salaries dataset by region, experience level,\n\
                  job type, job title and employment type, and print aggregate views:\n\
                  salary distribution, top and bottom countries, continents and job titles."
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

    #[command(flatten)]
    pub data: DataArgs,
}

/// Where the input files live.
#[derive(Args)]
pub struct DataArgs {
    /// Directory containing salaries.csv and regions.csv.
    #[arg(long = "data-dir", value_name = "DIR", default_value = ".", global = true)]
    pub data_dir: PathBuf,

    /// Salaries CSV (default: <DATA_DIR>/salaries.csv).
    #[arg(long = "salaries", value_name = "FILE", global = true)]
    pub salaries: Option<PathBuf>,

    /// Country and region lookup CSV (default: <DATA_DIR>/regions.csv).
    #[arg(long = "regions", value_name = "FILE", global = true)]
    pub regions: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every filter dimension with its options.
    Options,

    /// Render one visualization for the given filters.
    View(ViewArgs),

    /// Write the filtered records to a CSV file.
    Export(ExportArgs),

    /// Read commands from stdin and re-render after each one.
    Interactive,
}

#[derive(Parser)]
pub struct ViewArgs {
    /// distribution, countries, continents or jobs (full names also accepted).
    #[arg(value_name = "VISUALIZATION", default_value = "distribution")]
    pub visualization: String,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Also print the first N filtered records (table format only).
    #[arg(long = "rows", value_name = "N")]
    pub rows: Option<usize>,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Destination CSV path.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    #[command(flatten)]
    pub filters: FilterArgs,
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

