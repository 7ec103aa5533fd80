//! Text counting utilities.
//!
//! Provides the word and character counts reported in analysis stats.

/// Count words by splitting on runs of whitespace and discarding empty tokens.
///
/// An all-whitespace string counts zero words, never a single empty token.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count characters (`char`s, not bytes).
pub fn count_chars(text: &str) -> usize {
    text.chars().count()
}

/// True when the text is empty or contains only whitespace.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
