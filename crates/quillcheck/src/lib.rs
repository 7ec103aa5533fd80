//! Argument-parsing layer for the `quillcheck` binary.
//!
//! Everything clap-related lives here so tooling and tests can build the
//! parser without going through `main.rs`: [`Cli`] is the derive-based root
//! parser, [`Commands`] enumerates the subcommands, and [`commands`] holds
//! their implementations.

pub mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Let terminal detection decide.
    #[default]
    Auto,
    /// Force colors on.
    Always,
    /// Force colors off.
    Never,
}

impl ColorChoice {
    /// Install this choice as the process-wide color override.
    ///
    /// Meant to run once, before any output is produced.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors falls back to its own detection
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                Tracing filter, e.g. debug or quillcheck=trace
    QUILLCHECK_LOG_PATH     Exact file to log to
    QUILLCHECK_LOG_DIR      Directory for daily log files
    QUILLCHECK_LOG_LEVEL    Fallback log level (debug, info, warn, error)
";

/// Root of the command-line interface.
#[derive(Parser)]
#[command(name = "quillcheck")]
#[command(about = "Writing-quality analysis for plain-text prose", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// Which operation to run.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print the bare version string and exit
    #[arg(long)]
    pub version_only: bool,

    /// Use FILE instead of discovered configuration
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Change to DIR before doing anything else
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Silence everything below the error level
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Raise log verbosity (stackable: -v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// When to color the output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Emit machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,
}

/// Top-level operations.
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a file and report positioned diagnostics
    Check(commands::check::CheckArgs),

    /// Apply mechanical fixes and emit the corrected text
    Fix(commands::fix::FixArgs),

    /// Print the JSON Schema for analysis reports
    Schema(commands::schema::SchemaArgs),

    /// Show build and configuration details
    Info(commands::info::InfoArgs),
}

/// The assembled clap command, for completion and man-page tooling.
pub fn command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        command().debug_assert();
    }
}
