//! Command line definitions for `cellax`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cellax",
    version,
    about = "Generate ontology axioms from spreadsheet transformation rules",
    long_about = "Apply transformation rules to every cell of their spreadsheet regions,\n\
                  collect the rendered axioms, and add them to a new or the current ontology."
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

    /// Log output format.
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
    /// Run the rules against a workbook and merge the generated axioms.
    Generate(GenerateArgs),

    /// List the rules in a rule document.
    Rules(RulesArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// JSON rule document.
    #[arg(long = "rules", value_name = "JSON")]
    pub rules: PathBuf,

    /// CSV file, or directory of CSV files (one sheet per file).
    #[arg(long = "workbook", value_name = "PATH")]
    pub workbook: PathBuf,

    /// Ontology store to load; its active ontology receives the results.
    #[arg(long = "ontology", value_name = "JSON")]
    pub ontology: Option<PathBuf>,

    /// Where to write the updated store (default: back to --ontology).
    ///
    /// Without either, the changed ontology is printed to stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Merge decision to apply without asking (default: from config, else prompt).
    #[arg(long = "decision", value_enum)]
    pub decision: Option<DecisionArg>,

    /// Write the render log as JSON lines to this file.
    #[arg(long = "render-log", value_name = "PATH")]
    pub render_log: Option<PathBuf>,

    /// Settings file (default: ./cellax.toml when present).
    #[arg(long = "config", value_name = "TOML")]
    pub config: Option<PathBuf>,
}

#[derive(Parser)]
pub struct RulesArgs {
    /// JSON rule document.
    #[arg(long = "rules", value_name = "JSON")]
    pub rules: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DecisionArg {
    Prompt,
    Cancel,
    New,
    Current,
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
