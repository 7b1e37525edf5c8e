//! CLI argument definitions for tablecast.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tablecast",
    version,
    about = "Infer a memory-optimized schema for a tabular data file",
    long_about = "Infer a memory-optimized schema for a tabular data file.\n\n\
                  Reads CSV or Excel input and reclassifies each column into its\n\
                  most specific type: integer, float, boolean, timestamp,\n\
                  category, or text. Reports the inferred schema and a preview\n\
                  of the first rows."
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
    /// Infer the schema of a CSV or Excel file.
    Infer(InferArgs),

    /// List supported input formats.
    Formats,
}

#[derive(Parser)]
pub struct InferArgs {
    /// Path to the input file (.csv, .xls, or .xlsx).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Emit the schema and preview as a JSON payload instead of tables.
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
