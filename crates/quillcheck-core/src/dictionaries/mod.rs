//! Dictionaries for text analysis.
//!
//! Provides the curated word tables consumed by the analyzer's rules.

pub mod misspellings;
