//! Build and configuration details for the `info` subcommand.

use clap::Args;
use owo_colors::OwoColorize;
use quillcheck_core::config::{self, Config, ConfigSources};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
///
/// Empty for now; output format comes from the global `--json` flag.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {}

/// Package metadata baked in at compile time.
#[derive(Serialize)]
struct PackageDetails {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    homepage: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageDetails {
    const fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            homepage: env!("CARGO_PKG_HOMEPAGE"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

/// The effective configuration, flattened to display strings.
#[derive(Serialize)]
struct ConfigSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_config_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    disable_input_limit: bool,
}

impl ConfigSummary {
    fn summarize(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(ToString::to_string),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(ToString::to_string),
            user_config_dir: config::user_config_dir().map(|p| p.to_string()),
            min_score: config.min_score,
            max_input_bytes: config.max_input_bytes,
            disable_input_limit: config.disable_input_limit,
        }
    }
}

/// Everything `info` reports, in one serializable bundle.
#[derive(Serialize)]
struct InfoReport {
    #[serde(flatten)]
    package: PackageDetails,
    config: ConfigSummary,
}

/// Report the binary's package metadata and the configuration it resolved.
#[instrument(skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json = global_json, "rendering info");

    let report = InfoReport {
        package: PackageDetails::current(),
        config: ConfigSummary::summarize(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let pkg = &report.package;
    println!("{} {}", pkg.name.bold(), pkg.version.green());
    if !pkg.description.is_empty() {
        println!("{}", pkg.description);
    }
    if !pkg.license.is_empty() {
        labeled("License", &pkg.license);
    }
    if !pkg.repository.is_empty() {
        labeled("Repository", &pkg.repository.cyan());
    }
    if !pkg.homepage.is_empty() {
        labeled("Homepage", &pkg.homepage.cyan());
    }

    let cfg = &report.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    match &cfg.config_file {
        Some(path) => labeled("Config file", &path.cyan()),
        None => labeled("Config file", &"none loaded".yellow()),
    }
    labeled("Log level", &cfg.log_level);
    if let Some(dir) = &cfg.log_dir {
        labeled("Log directory", dir);
    }
    if let Some(dir) = &cfg.user_config_dir {
        labeled("User config dir", dir);
    }

    println!();
    println!("{}", "Limits".bold().underline());
    labeled_or_unset("Min score", cfg.min_score.as_ref());
    if cfg.disable_input_limit {
        labeled("Max input", &"disabled".yellow());
    } else {
        labeled_or_unset("Max input bytes", cfg.max_input_bytes.as_ref());
    }

    Ok(())
}

fn labeled(label: &str, value: &dyn std::fmt::Display) {
    println!("{}: {value}", label.dimmed());
}

fn labeled_or_unset<T: std::fmt::Display>(label: &str, value: Option<&T>) {
    match value {
        Some(v) => labeled(label, v),
        None => labeled(label, &"(not set)".dimmed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_mode_runs_clean() {
        let outcome = cmd_info(
            InfoArgs::default(),
            false,
            &Config::default(),
            &ConfigSources::default(),
        );
        assert!(outcome.is_ok());
    }

    #[test]
    fn json_mode_runs_clean() {
        let outcome = cmd_info(
            InfoArgs::default(),
            true,
            &Config::default(),
            &ConfigSources::default(),
        );
        assert!(outcome.is_ok());
    }

    #[test]
    fn summary_without_any_config_file() {
        let summary = ConfigSummary::summarize(&Config::default(), &ConfigSources::default());
        assert!(summary.config_file.is_none());
        assert_eq!(summary.log_level, "info");
        assert!(!summary.disable_input_limit);
    }

    #[test]
    fn json_report_nests_config_under_its_own_key() {
        let report = InfoReport {
            package: PackageDetails::current(),
            config: ConfigSummary::summarize(&Config::default(), &ConfigSources::default()),
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(value["config"]["log_level"], "info");
        assert!(value["config"]["config_file"].is_null());
    }
}
