//! CLI argument definitions for the booking report tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tada",
    version,
    about = "Ta-Da, Data! - Summaries and charts from hotel reservation exports",
    long_about = "Derive summary tables and charts from hotel reservation exports.\n\n\
                  Reads CSV or Excel files and reports the booking channel mix,\n\
                  guest nationality mix, and top booked room types per file."
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
    /// Build summary tables and distributions from reservation exports.
    Report(ReportArgs),

    /// List the columns the report is built from.
    Columns,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Reservation export files (CSV or Excel), processed independently.
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Render the three charts per file into this directory as PNGs.
    #[arg(long = "charts-dir", value_name = "DIR")]
    pub charts_dir: Option<PathBuf>,

    /// Emit the report data as JSON on stdout instead of tables.
    #[arg(long = "json")]
    pub json: bool,
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
