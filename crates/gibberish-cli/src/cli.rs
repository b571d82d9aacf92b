//! CLI definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use gibberish_core::Column;

/// gibberish - score candidate names against a gibberish detection service
#[derive(Parser, Debug)]
#[command(
    name = "gibberish",
    version,
    about = "Score candidate names against a gibberish detection service",
    long_about = "Send a comma-separated list of names to a gibberish detection service\n\
                  and show which ones look plausible, as a sortable, exportable table."
)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score names and print the result table
    Check(CheckArgs),

    /// Print the effective client configuration as YAML
    Config(ServiceArgs),
}

/// Where the scoring service lives.
#[derive(Args, Debug, Clone, Default)]
pub struct ServiceArgs {
    /// YAML config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Service root URL; overrides the config file and GIBBERISH_SERVICE_URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Comma-separated names (one or more lines). Read from stdin when
    /// neither this nor --file is given
    pub names: Option<String>,

    /// Read names from a .csv or .txt file
    #[arg(short, long, value_name = "PATH", conflicts_with = "names")]
    pub file: Option<PathBuf>,

    /// Decision threshold, strictly between -1 and 1; service default when empty
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub threshold: String,

    /// Click a column header: name, gibberish or gibberishScore. Repeat to
    /// cycle ascending → descending → unsorted
    #[arg(short, long = "sort", value_name = "COLUMN")]
    pub sort: Vec<Column>,

    /// What to print on stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Leave the ▲/▼ sort markers out of table headers
    #[arg(long)]
    pub plain: bool,

    /// Also write the table as CSV to this file (or into this directory)
    #[arg(short, long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    #[command(flatten)]
    pub service: ServiceArgs,
}

/// Stdout format for `check`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,
    /// CSV, identical to the export file
    Csv,
    /// JSON rows
    Json,
}
