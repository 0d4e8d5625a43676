//! CLI argument definitions for `tbl-import`.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tbl-import",
    version,
    about = "Import a delimited text or dBase table with field type inference",
    long_about = "Import a delimited text or dBase table with field type inference.\n\n\
                  Text files may be comma, tab or pipe separated. Fields whose first\n\
                  value looks numeric are converted to numbers unless a type hint\n\
                  (NAME:str, NAME:num or +NAME) says otherwise."
)]
pub struct Cli {
    #[command(flatten)]
    pub import: ImportArgs,

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
}

#[derive(Args, Debug, Clone)]
pub struct ImportArgs {
    /// Delimited text file, or a `.dbf` table.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Type hints that override the header, e.g. `FIPS:str,POP:num,+AREA`.
    #[arg(long = "field-types", value_name = "HINTS", value_delimiter = ',')]
    pub field_types: Vec<String>,

    /// Text encoding of a dBase table (e.g. latin1, utf-8).
    #[arg(long = "encoding", value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Fail when a value in a numeric field cannot be read as a number.
    ///
    /// By default such values are kept as not-a-number values and reported
    /// as warnings.
    #[arg(long = "strict-numbers")]
    pub strict_numbers: bool,

    /// How to print the imported table.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Number of records to show in table output.
    #[arg(long = "rows", value_name = "N", default_value_t = 10)]
    pub rows: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
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
