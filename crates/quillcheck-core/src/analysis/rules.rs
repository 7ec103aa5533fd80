//! The analyzer's rule table.
//!
//! Rules are declarative records — pattern, reported span, category, message,
//! and a fix builder — iterated uniformly by [`super::analyze`]. Each rule
//! contributes every non-overlapping match of its pattern, and rules run
//! independently: two rules may flag overlapping or identical spans.

use std::sync::LazyLock;

use regex::Regex;

use super::diagnostic::{Category, Suggestion};
use crate::dictionaries::misspellings;

/// Which part of a regex match a rule reports.
#[derive(Debug, Clone, Copy)]
enum MatchSpan {
    /// The whole match.
    Whole,
    /// Capture group 1, for patterns that need context the diagnostic
    /// should not cover.
    Group1,
}

/// Builds the suggestion for one matched span.
type FixFn = fn(&str) -> Suggestion;

/// One declarative analyzer rule.
pub(super) struct Rule {
    pattern: Regex,
    span: MatchSpan,
    /// Category recorded for each match.
    pub(super) category: Category,
    /// Message attached to each diagnostic.
    pub(super) message: &'static str,
    /// Fix builder, invoked with the reported span's text.
    pub(super) fix: FixFn,
}

impl Rule {
    /// All non-overlapping matches, as (offset, matched text) pairs for the
    /// rule's reported span.
    pub(super) fn matches<'t>(&self, text: &'t str) -> Vec<(usize, &'t str)> {
        match self.span {
            MatchSpan::Whole => self
                .pattern
                .find_iter(text)
                .map(|m| (m.start(), m.as_str()))
                .collect(),
            MatchSpan::Group1 => self
                .pattern
                .captures_iter(text)
                .filter_map(|caps| caps.get(1))
                .map(|m| (m.start(), m.as_str()))
                .collect(),
        }
    }
}

/// Matches the standalone "of" inside a "could of" style window.
static OF_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bof\b").expect("valid regex"));

/// The fixed rule table, in application order.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // Punctuation directly followed by a letter. The match window takes
        // both characters so the replacement can reinsert the letter after
        // the space; the reported offset stays on the punctuation mark.
        Rule {
            pattern: Regex::new(r"[.,!?][A-Za-z]").expect("valid regex"),
            span: MatchSpan::Whole,
            category: Category::Punctuation,
            message: "Missing space after punctuation",
            fix: |matched| {
                Suggestion::Replacement(format!("{} {}", &matched[..1], &matched[1..]))
            },
        },
        // Runs of two or more whitespace characters collapse to one space.
        Rule {
            pattern: Regex::new(r"\s{2,}").expect("valid regex"),
            span: MatchSpan::Whole,
            category: Category::Spacing,
            message: "Multiple spaces detected",
            fix: |_| Suggestion::Replacement(" ".to_string()),
        },
        // Lowercase letter opening a sentence. The terminator and whitespace
        // are context only; the diagnostic covers just the letter.
        Rule {
            pattern: Regex::new(r"[.!?]\s+([a-z])").expect("valid regex"),
            span: MatchSpan::Group1,
            category: Category::Capitalization,
            message: "Sentence should start with a capital letter",
            fix: |letter| Suggestion::Replacement(letter.to_uppercase()),
        },
        Rule {
            pattern: Regex::new(r"(?i)\b(could of|would of|should of)\b").expect("valid regex"),
            span: MatchSpan::Whole,
            category: Category::Grammar,
            message: "Incorrect usage. Use \"have\" instead of \"of\"",
            fix: |matched| Suggestion::Replacement(OF_WORD.replace(matched, "have").into_owned()),
        },
        // Negation auxiliary followed by a negative-polarity word in the same
        // line (`.` stays within the line).
        Rule {
            pattern: Regex::new(
                r"(?i)\b(?:don't|doesn't|didn't|won't|wouldn't|can't|couldn't)\b.*?\b(?:no|none|nobody|nothing|nowhere)\b",
            )
            .expect("valid regex"),
            span: MatchSpan::Whole,
            category: Category::Grammar,
            message: "Double negative detected",
            fix: |_| Suggestion::Advice("Consider rephrasing to avoid double negative".to_string()),
        },
        Rule {
            pattern: Regex::new(r"(?i)\b(he|she|it)\s+(are|were|have)\b|\b(they)\s+(is|was|has)\b")
                .expect("valid regex"),
            span: MatchSpan::Whole,
            category: Category::Grammar,
            message: "Subject-verb agreement error",
            fix: |_| Suggestion::Advice("Fix subject-verb agreement".to_string()),
        },
        // Any two letters separated by whitespace (case-insensitive).
        // Deliberately broad: this fires on nearly all multi-word prose and
        // stays at that strength as a known over-trigger.
        Rule {
            pattern: Regex::new(r"(?i)[a-z]\s+[a-z]").expect("valid regex"),
            span: MatchSpan::Whole,
            category: Category::Style,
            message: "Potential run-on sentence",
            fix: |_| Suggestion::Advice("Consider breaking into shorter sentences".to_string()),
        },
        Rule {
            pattern: Regex::new(&format!(r"(?i)\b({})\b", misspellings::pattern()))
                .expect("valid regex"),
            span: MatchSpan::Whole,
            category: Category::Spelling,
            message: "Commonly misspelled word",
            fix: |word| match misspellings::correction(word) {
                Some(correction) => Suggestion::Replacement(correction.to_string()),
                None => Suggestion::Advice("Check spelling".to_string()),
            },
        },
    ]
});

/// The rule table, in application order.
pub(super) fn all() -> &'static [Rule] {
    &RULES
}
