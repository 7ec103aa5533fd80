//! Category scoring.
//!
//! Each scored category starts at 100 and loses a fixed penalty per matching
//! diagnostic, floored at zero. The overall score is a weighted blend of the
//! four category scores.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::diagnostic::Category;

/// Penalty per grammar diagnostic.
pub const GRAMMAR_PENALTY: u8 = 8;
/// Penalty per spelling diagnostic.
pub const SPELLING_PENALTY: u8 = 5;
/// Penalty per punctuation diagnostic.
pub const PUNCTUATION_PENALTY: u8 = 4;
/// Penalty per style diagnostic.
pub const STYLE_PENALTY: u8 = 3;

// Weights for the overall blend; they sum to 1.0.
const GRAMMAR_WEIGHT: f64 = 0.4;
const SPELLING_WEIGHT: f64 = 0.3;
const PUNCTUATION_WEIGHT: f64 = 0.2;
const STYLE_WEIGHT: f64 = 0.1;

/// Per-category quality scores, each in 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryScores {
    /// Grammar score.
    pub grammar: u8,
    /// Spelling score.
    pub spelling: u8,
    /// Punctuation score.
    pub punctuation: u8,
    /// Style score.
    pub style: u8,
}

impl Default for CategoryScores {
    fn default() -> Self {
        Self {
            grammar: 100,
            spelling: 100,
            punctuation: 100,
            style: 100,
        }
    }
}

impl CategoryScores {
    /// Deduct the fixed penalty for one diagnostic in `category`.
    ///
    /// Spacing and capitalization diagnostics carry no penalty and leave the
    /// scores untouched.
    pub const fn record(&mut self, category: Category) {
        match category {
            Category::Grammar => self.grammar = self.grammar.saturating_sub(GRAMMAR_PENALTY),
            Category::Spelling => self.spelling = self.spelling.saturating_sub(SPELLING_PENALTY),
            Category::Punctuation => {
                self.punctuation = self.punctuation.saturating_sub(PUNCTUATION_PENALTY);
            }
            Category::Style => self.style = self.style.saturating_sub(STYLE_PENALTY),
            Category::Spacing | Category::Capitalization => {}
        }
    }

    /// Weighted overall score: 0.4 grammar + 0.3 spelling + 0.2 punctuation
    /// + 0.1 style, rounded to the nearest integer and clamped to 0–100.
    pub fn overall(&self) -> u8 {
        let weighted = f64::from(self.grammar) * GRAMMAR_WEIGHT
            + f64::from(self.spelling) * SPELLING_WEIGHT
            + f64::from(self.punctuation) * PUNCTUATION_WEIGHT
            + f64::from(self.style) * STYLE_WEIGHT;
        weighted.round().clamp(0.0, 100.0) as u8
    }
}
