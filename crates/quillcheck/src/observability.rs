//! Logging and tracing setup for the CLI.
//!
//! Diagnostics go to stderr by default so command output on stdout stays
//! machine-readable. When a log file target is configured (via environment
//! variables or the `log_dir` config key), logs go there instead through a
//! non-blocking writer whose guard must stay alive for the process lifetime.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling;
use tracing_subscriber::EnvFilter;

/// File name used inside a log directory.
const LOG_FILE_NAME: &str = "quillcheck.log";

/// Where log output should go, resolved from the environment and config.
#[derive(Debug, Clone, Default)]
pub struct LogTargets {
    /// Exact log file path; wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rolled log files.
    pub log_dir: Option<PathBuf>,
}

impl LogTargets {
    /// Resolve targets from `QUILLCHECK_LOG_PATH` / `QUILLCHECK_LOG_DIR`,
    /// falling back to the config file's `log_dir` when the directory isn't
    /// set in the environment.
    pub fn resolve(config_log_dir: Option<PathBuf>) -> Self {
        Self {
            log_path: std::env::var_os("QUILLCHECK_LOG_PATH").map(PathBuf::from),
            log_dir: std::env::var_os("QUILLCHECK_LOG_DIR")
                .map(PathBuf::from)
                .or(config_log_dir),
        }
    }
}

/// Build the log filter from CLI flags and the configured default level.
///
/// `--quiet` wins over everything; `-v`/`-vv` raise the level to debug/trace;
/// otherwise `RUST_LOG` applies when set, with the config level as the final
/// fallback.
pub fn log_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if quiet {
        return EnvFilter::new("error");
    }
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_level)),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Initialize the global tracing subscriber.
///
/// Returns the non-blocking writer's guard when logging to a file; the caller
/// must hold it until exit or buffered log lines are lost.
pub fn init_tracing(targets: &LogTargets, filter: EnvFilter) -> anyhow::Result<Option<WorkerGuard>> {
    if let Some(ref path) = targets.log_path {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let file_name = path
            .file_name()
            .with_context(|| format!("log path has no file name: {}", path.display()))?;
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;

        let (writer, guard) = tracing_appender::non_blocking(rolling::never(dir, file_name));
        init_file_subscriber(filter, writer);
        return Ok(Some(guard));
    }

    if let Some(ref dir) = targets.log_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;

        let (writer, guard) = tracing_appender::non_blocking(rolling::daily(dir, LOG_FILE_NAME));
        init_file_subscriber(filter, writer);
        return Ok(Some(guard));
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(None)
}

fn init_file_subscriber(filter: EnvFilter, writer: NonBlocking) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
}
