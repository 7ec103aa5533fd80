//! Binary entry point: wires flags, configuration, and logging together.
#![deny(unsafe_code)]

use anyhow::{Context, anyhow};
use camino::Utf8PathBuf;
use clap::Parser;
use quillcheck::{Cli, Commands, commands};
use quillcheck_core::config::ConfigLoader;
use tracing::debug;

mod observability;

fn utf8(path: std::path::PathBuf, label: &str) -> anyhow::Result<Utf8PathBuf> {
    Utf8PathBuf::try_from(path)
        .map_err(|e| anyhow!("{label} is not valid UTF-8: {}", e.into_path_buf().display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // arg_required_else_help guarantees a subcommand or --version-only got
    // us here; without a subcommand there is nothing left to do.
    let Some(command) = cli.command else {
        return Ok(());
    };

    if let Some(dir) = &cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("could not change into {}", dir.display()))?;
    }

    let cwd = utf8(
        std::env::current_dir().context("working directory is unavailable")?,
        "working directory",
    )?;
    let mut loader = ConfigLoader::new().with_project_search(cwd);
    if let Some(path) = &cli.config {
        loader = loader.with_file(utf8(path.clone(), "config path")?);
    }
    let (config, config_sources) = loader.load().context("failed to load configuration")?;

    let targets = observability::LogTargets::resolve(
        config
            .log_dir
            .as_ref()
            .map(|dir| dir.as_std_path().to_path_buf()),
    );
    let filter = observability::log_filter(cli.quiet, cli.verbose, config.log_level.as_str());
    // The guard flushes buffered log lines; it must live until exit.
    let _guard =
        observability::init_tracing(&targets, filter).context("failed to set up logging")?;

    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        color = ?cli.color,
        chdir = ?cli.chdir,
        "command line parsed"
    );

    let max_input = (!config.disable_input_limit).then(|| {
        config
            .max_input_bytes
            .unwrap_or(quillcheck_core::DEFAULT_MAX_INPUT_BYTES)
    });

    let outcome = match command {
        Commands::Check(args) => {
            commands::check::cmd_check(args, cli.json, config.min_score, max_input)
        }
        Commands::Fix(args) => commands::fix::cmd_fix(args, cli.json, max_input),
        Commands::Schema(args) => commands::schema::cmd_schema(args),
        Commands::Info(args) => commands::info::cmd_info(args, cli.json, &config, &config_sources),
    };
    if let Err(err) = &outcome {
        tracing::error!(error = %err, "fatal error");
    }
    outcome
}
