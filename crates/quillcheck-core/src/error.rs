//! Error types for quillcheck-core.
//!
//! Text analysis itself is infallible — [`crate::analyze`] returns a report
//! for any input — so the only error taxonomy here covers configuration.

use thiserror::Error;

/// What can go wrong while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A discovered or named config file refused to parse or deserialize.
    #[error("configuration is invalid: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Discovery ran everywhere it knows to look and found nothing.
    #[error("no configuration file could be found")]
    NotFound,
}

/// Shorthand result for config loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
