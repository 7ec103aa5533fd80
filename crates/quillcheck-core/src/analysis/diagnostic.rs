//! Diagnostic types for the text analyzer.
//!
//! A [`Diagnostic`] pins one detected issue to a span of the analyzed text,
//! with a message and at least one suggestion. Suggestions are either
//! mechanical (a literal replacement) or advisory (guidance only), and the
//! distinction is explicit in the type so callers never auto-apply advice.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Issue categories reported by the analyzer.
///
/// Grammar, spelling, punctuation, and style carry score penalties; spacing
/// and capitalization issues are reported without affecting scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Category {
    /// Grammatical errors (agreement, double negatives, "could of").
    Grammar,
    /// Commonly misspelled words.
    Spelling,
    /// Punctuation not followed by a space.
    Punctuation,
    /// Stylistic concerns (possible run-on sentences).
    Style,
    /// Runs of consecutive whitespace.
    Spacing,
    /// Sentences starting with a lowercase letter.
    Capitalization,
}

impl Category {
    /// Returns the category as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Grammar => "grammar",
            Self::Spelling => "spelling",
            Self::Punctuation => "punctuation",
            Self::Style => "style",
            Self::Spacing => "spacing",
            Self::Capitalization => "capitalization",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A suggested fix for a diagnostic.
///
/// `Replacement` carries a literal substring that can be substituted for the
/// diagnostic's span. `Advice` names what the writer should do but cannot be
/// applied mechanically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Suggestion {
    /// Literal replacement text, safe to apply to the span.
    Replacement(String),
    /// Free-text guidance, never applied mechanically.
    Advice(String),
}

impl Suggestion {
    /// The suggestion text, whichever kind it is.
    pub fn text(&self) -> &str {
        match self {
            Self::Replacement(text) | Self::Advice(text) => text,
        }
    }

    /// True when this suggestion is a literal replacement.
    pub const fn is_mechanical(&self) -> bool {
        matches!(self, Self::Replacement(_))
    }

    /// The replacement text, if mechanical.
    pub fn as_replacement(&self) -> Option<&str> {
        match self {
            Self::Replacement(text) => Some(text),
            Self::Advice(_) => None,
        }
    }
}

/// One detected issue in the analyzed text.
///
/// `offset` and `length` are byte positions into the exact string that was
/// analyzed; every rule matches whole characters, so spans always lie on
/// `char` boundaries. A diagnostic is invalidated by any edit to the text —
/// re-run the analysis instead of shifting offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Diagnostic {
    /// Issue category.
    pub category: Category,
    /// Human-readable description.
    pub message: String,
    /// Byte offset where the issue begins.
    pub offset: usize,
    /// Length of the issue span in bytes.
    pub length: usize,
    /// Suggested fixes, best first (always at least one).
    pub suggestions: Vec<Suggestion>,
}

impl Diagnostic {
    /// The issue span as a byte range.
    pub const fn span(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.length
    }

    /// The text this diagnostic covers, when the span still fits `text`.
    pub fn matched_text<'t>(&self, text: &'t str) -> Option<&'t str> {
        text.get(self.span())
    }

    /// Apply a mechanical suggestion, replacing this diagnostic's span in `text`.
    ///
    /// Returns the rewritten string, or `None` when the suggestion is
    /// advisory or the span no longer fits `text`. The returned string is a
    /// different text: recompute the analysis on it rather than reusing any
    /// diagnostic produced for the input.
    pub fn apply_to(&self, text: &str, suggestion: &Suggestion) -> Option<String> {
        let replacement = suggestion.as_replacement()?;
        self.matched_text(text)?;

        let mut fixed = String::with_capacity(text.len() - self.length + replacement.len());
        fixed.push_str(&text[..self.offset]);
        fixed.push_str(replacement);
        fixed.push_str(&text[self.offset + self.length..]);
        Some(fixed)
    }

    /// The first mechanical suggestion, if any.
    pub fn mechanical_suggestion(&self) -> Option<&Suggestion> {
        self.suggestions.iter().find(|s| s.is_mechanical())
    }
}
