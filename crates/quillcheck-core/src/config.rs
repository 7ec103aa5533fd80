//! Configuration discovery and merging.
//!
//! [`ConfigLoader`] assembles a [`Config`] from three kinds of sources, each
//! layered over built-in defaults: the user's XDG config file, project files
//! found by walking up from a starting directory, and any files named
//! explicitly (typically from a `--config` flag). `QUILLCHECK_*` environment
//! variables are applied last and beat everything.
//!
//! # File names and formats
//!
//! Project discovery looks for `quill` and `quillcheck` base names, each as a
//! dotfile and a plain file, with a `toml`, `yaml`, `yml`, or `json`
//! extension; the user file is `~/.config/quillcheck/config.<ext>`. Every
//! file in the closest matching directory is merged through figment, so
//! precedence within one directory is purely merge order: `quill` before
//! `quillcheck`, dotfile before plain, and `toml < yaml < yml < json` among
//! extensions.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use quillcheck_core::config::ConfigLoader;
//!
//! let cwd = Utf8PathBuf::try_from(std::env::current_dir().unwrap())
//!     .expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(cwd)
//!     .load()
//!     .unwrap();
//! println!("log level: {}", config.log_level.as_str());
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Merged application configuration.
///
/// Deserialized from whichever files discovery turned up (TOML, YAML, or
/// JSON) plus `QUILLCHECK_*` environment variables; unset keys fall back to
/// the field defaults below.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Severity threshold for log output; one of `debug`, `info` (the
    /// default), `warn`, or `error`.
    pub log_level: LogLevel,
    /// Directory for log files (file logging is off if unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// Default minimum overall score for the `check` command gate.
    ///
    /// Omit to disable the gate unless `--min-score` is passed.
    pub min_score: Option<u8>,
    /// Input size ceiling in bytes; `None` means the built-in 5 MiB cap.
    ///
    /// Keeps a stray multi-gigabyte file from being read whole. See
    /// `disable_input_limit` for turning the cap off altogether.
    pub max_input_bytes: Option<usize>,
    /// When `true`, inputs of any size are accepted and `max_input_bytes`
    /// has no effect. Off by default.
    #[serde(default)]
    pub disable_input_limit: bool,
}

/// Default severity threshold for log output.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-step diagnostics.
    Debug,
    /// Routine operational messages (the default).
    #[default]
    Info,
    /// Suspicious but non-fatal conditions.
    Warn,
    /// Failures only.
    Error,
}

impl LogLevel {
    /// The lowercase name tracing-subscriber directives use.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Record of where the loaded configuration actually came from.
///
/// [`ConfigLoader::load()`] hands this back next to the [`Config`] so a
/// command can name the files it used without running discovery twice.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project files from the walk-up search, lowest precedence first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// The user's XDG config file, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Files requested by name, e.g. through `--config`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// The single file that had the last word, if any file loaded at all.
    ///
    /// Explicit files outrank project files, which outrank the user file;
    /// within each list the last entry wins.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .or_else(|| self.project_files.last())
            .map(Utf8PathBuf::as_path)
            .or(self.user_file.as_deref())
    }
}

/// Recognized file extensions, in merge order (last wins).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Name used for the XDG config directory.
const APP_NAME: &str = "quillcheck";

/// Base names project discovery accepts, merged in this order.
const APP_NAMES: &[&str] = &["quill", "quillcheck"];

/// Builder that gathers config sources and merges them on [`load`].
///
/// [`load`]: ConfigLoader::load
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Where the project walk-up starts; no walk when unset.
    project_search_root: Option<Utf8PathBuf>,
    /// Whether the XDG user file participates.
    include_user_config: bool,
    /// Directory entry that ends the walk-up (`.git` by default).
    boundary_marker: Option<String>,
    /// Files named outright, merged after anything discovered.
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// A loader with user config enabled and a `.git` walk-up boundary.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Enable the project walk-up, starting at `path`.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Include or exclude the user's `~/.config/quillcheck/` file.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// End the walk-up at the first ancestor containing `marker`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Let the walk-up continue to the filesystem root.
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Queue a file to merge after everything discovery finds.
    ///
    /// Repeated calls stack; the file added last wins conflicts.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Merge every configured source and extract the result.
    ///
    /// Sources merge lowest precedence first: defaults, then the user file,
    /// then project files, then explicit files, then `QUILLCHECK_*`
    /// environment variables. The returned [`ConfigSources`] names the files
    /// that took part.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut fig = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_file) = self.user_config_file()
        {
            fig = Self::merge_path(fig, &user_file);
            sources.user_file = Some(user_file);
        }

        if let Some(ref root) = self.project_search_root {
            sources.project_files = self.discover_project_files(root);
            for path in &sources.project_files {
                fig = Self::merge_path(fig, path);
            }
        }

        for path in &self.explicit_files {
            fig = Self::merge_path(fig, path);
        }
        sources.explicit_files = self.explicit_files;

        // e.g. QUILLCHECK_LOG_LEVEL=debug, QUILLCHECK_MIN_SCORE=70
        fig = fig.merge(Env::prefixed("QUILLCHECK_").lowercase(true));

        let config: Config = fig
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Like [`load`](Self::load), but refuse to fall back to pure defaults.
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        let any_project = self.project_search_root.as_ref().is_some_and(|root| {
            !self.discover_project_files(root).is_empty()
        });
        let any_source = any_project
            || !self.explicit_files.is_empty()
            || (self.include_user_config && self.user_config_file().is_some());

        if any_source {
            self.load()
        } else {
            Err(ConfigError::NotFound)
        }
    }

    /// Walk up from `start` and collect config files from the first
    /// directory that has any.
    ///
    /// The result is in merge order, so the last entry wins conflicts:
    /// `quill` names come before `quillcheck` names, and within each name
    /// the dotfile variant comes before the plain one.
    fn discover_project_files(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut cursor = Some(start.to_path_buf());

        while let Some(dir) = cursor {
            let hits: Vec<Utf8PathBuf> = APP_NAMES
                .iter()
                .flat_map(|name| {
                    [".", ""].into_iter().flat_map(move |dot| {
                        CONFIG_EXTENSIONS
                            .iter()
                            .map(move |ext| format!("{dot}{name}.{ext}"))
                    })
                })
                .map(|file_name| dir.join(file_name))
                .filter(|candidate| candidate.is_file())
                .collect();

            if !hits.is_empty() {
                return hits;
            }

            // The marker check runs AFTER the file check, so a config next
            // to the marker still counts; it also never fires on the start
            // directory itself.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            cursor = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    /// The user's `config.<ext>` under the XDG config directory, if any.
    fn user_config_file(&self) -> Option<Utf8PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
        CONFIG_EXTENSIONS.iter().find_map(|ext| {
            let candidate = dirs.config_dir().join(format!("config.{ext}"));
            candidate
                .is_file()
                .then(|| Utf8PathBuf::from_path_buf(candidate).ok())
                .flatten()
        })
    }

    /// Merge one file into the figment, picking the provider by extension.
    fn merge_path(fig: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => fig.merge(Yaml::file_exact(path.as_str())),
            Some("json") => fig.merge(Json::file_exact(path.as_str())),
            // TOML, and the default for anything unrecognized.
            _ => fig.merge(Toml::file_exact(path.as_str())),
        }
    }
}

/// Platform config directory for quillcheck.
///
/// `~/.config/quillcheck/` on Linux, the `Application Support` equivalent on
/// macOS. `None` when the platform exposes no home directory, or when the
/// path is not valid UTF-8.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok()
}
