//! Rule-based writing-quality analysis.
//!
//! [`analyze`] scans an input text against a fixed rule table, collects
//! positioned [`Diagnostic`]s, and aggregates category sub-scores plus a
//! weighted overall score into [`AnalysisStats`]. Analysis is pure and
//! infallible: the same input always yields the same report, and no input
//! can make it fail.

mod diagnostic;
mod rules;
mod scores;

pub use diagnostic::{Category, Diagnostic, Suggestion};
pub use scores::CategoryScores;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

/// Aggregate counters and scores for one analysis pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisStats {
    /// Weighted blend of the category scores, in `[0, 100]`.
    pub overall_score: u8,
    /// Number of diagnostics reported.
    pub diagnostic_count: usize,
    /// Characters in the input, counted as Unicode scalar values.
    pub character_count: usize,
    /// Whitespace-separated words in the input.
    pub word_count: usize,
    /// Per-category sub-scores.
    pub category_scores: CategoryScores,
}

/// The full outcome of analyzing one input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// Every issue found, sorted by offset; ties keep rule-table order.
    pub diagnostics: Vec<Diagnostic>,
    /// Counters and scores for the pass.
    pub stats: AnalysisStats,
}

/// Analyze `text` against the rule table.
///
/// Each rule contributes one diagnostic per non-overlapping match, carrying
/// the matched span's byte offset and length plus a suggestion. Diagnostics
/// come back sorted by offset; equal offsets keep the rule table's order.
///
/// Empty and whitespace-only inputs short-circuit to a pristine report:
/// no diagnostics, all scores at 100, zero words.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze(text: &str) -> AnalysisReport {
    let mut diagnostics = Vec::new();
    let mut category_scores = CategoryScores::default();

    if !text::is_blank(text) {
        for rule in rules::all() {
            for (offset, matched) in rule.matches(text) {
                category_scores.record(rule.category);
                diagnostics.push(Diagnostic {
                    category: rule.category,
                    message: rule.message.to_string(),
                    offset,
                    length: matched.len(),
                    suggestions: vec![(rule.fix)(matched)],
                });
            }
        }
        // Stable sort: diagnostics at the same offset stay in rule order.
        diagnostics.sort_by_key(|d| d.offset);
    }

    let stats = AnalysisStats {
        overall_score: category_scores.overall(),
        diagnostic_count: diagnostics.len(),
        character_count: text::count_chars(text),
        word_count: text::count_words(text),
        category_scores,
    };

    tracing::debug!(
        diagnostics = stats.diagnostic_count,
        overall = stats.overall_score,
        "analysis complete"
    );

    AnalysisReport { diagnostics, stats }
}
