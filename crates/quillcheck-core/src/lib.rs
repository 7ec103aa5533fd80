//! Core library for quillcheck.
//!
//! This crate provides the analysis engine and foundational types used by
//! the `quillcheck` CLI and any downstream consumers.
//!
//! # Modules
//!
//! - [`analysis`] - Rule-based writing-quality analysis
//! - [`assistant`] - Parsers for writing-assistant replies
//! - [`config`] - Configuration loading and management
//! - [`dictionaries`] - Reference word tables
//! - [`error`] - Error types and result aliases
//! - [`text`] - Word and character counting helpers
//!
//! # Quick Start
//!
//! ```
//! use quillcheck_core::analyze;
//!
//! let report = analyze("I could of seperate it.");
//!
//! assert!(report.stats.overall_score < 100);
//! assert_eq!(report.stats.word_count, 5);
//! ```
#![deny(unsafe_code)]

pub mod analysis;

pub mod assistant;

pub mod config;

pub mod dictionaries;

pub mod error;

pub mod text;

pub use analysis::{
    AnalysisReport, AnalysisStats, Category, CategoryScores, Diagnostic, Suggestion, analyze,
};

pub use config::{Config, ConfigLoader, LogLevel};

pub use error::{ConfigError, ConfigResult};

/// Default cap on input size, in bytes.
///
/// Guards against analyzing files that were almost certainly passed by
/// mistake. Raise it with the `max_input_bytes` configuration key, or drop
/// the cap entirely with `disable_input_limit`.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
