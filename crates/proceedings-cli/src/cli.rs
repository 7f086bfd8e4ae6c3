//! CLI command definitions and argument parsing.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Proceedings CLI - decide whether applications' court proceedings are concluded.
#[derive(Debug, Parser)]
#[command(name = "proceedings")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PROCEEDINGS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Reference data TOML file
    #[arg(short, long, global = true, env = "PROCEEDINGS_REFERENCE_DATA")]
    pub reference_data: Option<PathBuf>,

    /// Log level when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Treat unrecognised result categories as blocking offence finality
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (verdict and reason code only)
    Quiet,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decide a single application (JSON object, or null)
    Decide(DecideArgs),

    /// Decide every application in a JSON array
    Batch(BatchArgs),

    /// Load and validate the reference data
    Check,
}

/// Arguments for the decide command.
#[derive(Debug, Parser)]
pub struct DecideArgs {
    /// Application JSON file ("-" for stdin)
    pub input: PathBuf,
}

/// Arguments for the batch command.
#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// JSON file holding an array of applications ("-" for stdin)
    pub input: PathBuf,

    /// Print a metrics summary after the decisions
    #[arg(long)]
    pub summary: bool,
}
