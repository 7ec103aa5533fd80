//! Parsers for writing-assistant replies.
//!
//! An external assistant answers grammar, paraphrase, readability, and
//! AI-detection prompts in loosely structured text: labeled sections for the
//! prose prompts, bare JSON for the rest. Replies arrive here exactly as the
//! caller received them, and every parser degrades gracefully instead of
//! failing, so a malformed reply yields a usable default rather than an
//! error.
//!
//! The transport is the caller's concern. The expected contract: send a
//! prompt string, await a plain-text or JSON reply, and retry transient
//! network failures up to three times with a fixed one-second delay before
//! surfacing an error. Nothing in this module performs I/O.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Structured review extracted from a grammar-check reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GrammarReview {
    /// Percentage score the assistant claimed; 0 when absent.
    pub score: u32,
    /// Bulleted lines from the `ERRORS FOUND:` section.
    pub errors: Vec<String>,
    /// Rewritten text, or the whole reply when no usable section exists.
    pub corrected_text: String,
}

/// Readability metrics claimed by the assistant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ReadabilityReview {
    /// Flesch-Kincaid grade level.
    pub flesch_kincaid: f64,
    /// Gunning fog index.
    pub gunning_fog: f64,
    /// SMOG index.
    pub smog_index: f64,
    /// Sentences flagged as hard to read, with rewrite advice.
    pub complex_sentences: Vec<ComplexSentence>,
    /// Words flagged as difficult, with simpler alternatives.
    pub difficult_words: Vec<DifficultWord>,
    /// Blended readability score.
    pub overall_score: f64,
}

/// One sentence the assistant flagged as hard to read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ComplexSentence {
    /// The flagged sentence.
    pub sentence: String,
    /// Suggested rewrite.
    pub suggestion: String,
}

/// One word the assistant flagged as difficult.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DifficultWord {
    /// The flagged word.
    pub word: String,
    /// Simpler alternatives.
    pub synonyms: Vec<String>,
}

/// Verdict of an AI-authorship check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AiReview {
    /// Probability the text is machine-written, as a percentage.
    pub ai_probability: f64,
    /// Probability the text is human-written, as a percentage.
    pub human_probability: f64,
    /// Probability the text mixes both, as a percentage.
    pub mixed_probability: f64,
    /// Signals the verdict rests on.
    pub indicators: Vec<String>,
    /// Free-form explanation.
    pub explanation: String,
    /// The highest-probability category.
    pub content_type: ContentOrigin,
}

/// Who the assistant believes wrote the text.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum ContentOrigin {
    /// Machine-written.
    #[serde(rename = "AI")]
    Ai,
    /// Human-written.
    #[default]
    Human,
    /// A mix of both.
    Mixed,
}

static WRITING_SCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)WRITING SCORE:\s*(\d+)\s*%").expect("valid regex"));

static ERRORS_FOUND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ERRORS FOUND:").expect("valid regex"));

/// Captures the corrected text up to a `---` divider or the end of the reply.
static CORRECTED_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)CORRECTED TEXT:\s*(.*?)(?:---|$)").expect("valid regex"));

/// Extract the structured review from a grammar-check reply.
///
/// The reply is expected to carry a `WRITING SCORE: N%` line, an
/// `ERRORS FOUND:` section of `-` bullets, and a `CORRECTED TEXT:` section,
/// in any casing. Missing pieces degrade individually: the score falls back
/// to 0, the error list to empty, and the corrected text to the whole reply.
pub fn parse_grammar_review(reply: &str) -> GrammarReview {
    let score = WRITING_SCORE
        .captures(reply)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0);

    let errors = ERRORS_FOUND.find(reply).map_or_else(Vec::new, |marker| {
        let after = &reply[marker.end()..];
        let section = match CORRECTED_SECTION.find(after) {
            Some(cut) => &after[..cut.start()],
            None => after,
        };
        section
            .lines()
            .map(str::trim)
            .filter_map(|line| line.strip_prefix('-'))
            .map(|line| line.trim_start().to_string())
            .filter(|line| !line.is_empty())
            .collect()
    });

    let corrected_text = CORRECTED_SECTION
        .captures(reply)
        .map(|caps| caps[1].trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| reply.to_string());

    GrammarReview {
        score,
        errors,
        corrected_text,
    }
}

/// Extract the rewritten text from a paraphrase reply.
///
/// The paraphrase contract is stricter than the grammar one: the
/// `PARAPHRASED TEXT:` marker is case-sensitive and must end its line, and
/// the body runs until a line starting with `---`. A reply that doesn't
/// follow the contract comes back whole.
pub fn parse_paraphrase(reply: &str) -> String {
    let body = reply
        .split_once("PARAPHRASED TEXT:\n")
        .and_then(|(_, rest)| rest.split("\n---").next())
        .map_or("", str::trim);
    if body.is_empty() {
        reply.to_string()
    } else {
        body.to_string()
    }
}

/// Parse a readability reply, which is expected to be bare JSON.
///
/// Anything that doesn't deserialize cleanly yields the all-zero default.
pub fn parse_readability_review(reply: &str) -> ReadabilityReview {
    serde_json::from_str(reply).unwrap_or_default()
}

/// Parse an AI-detection reply, which is expected to be bare JSON.
///
/// Anything that doesn't deserialize cleanly yields the default verdict:
/// zero probabilities, no indicators, and a `Human` origin.
pub fn parse_ai_review(reply: &str) -> AiReview {
    serde_json::from_str(reply).unwrap_or_default()
}
