//! Commonly misspelled words.
//!
//! Backs the spelling rule: every listed word is flagged, and the three
//! entries with a known safe correction get a mechanical replacement while
//! the rest get advisory "Check spelling" guidance.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Misspelled words paired with their correction, where one is known.
///
/// Entries with `None` are flagged but have no replacement the analyzer is
/// willing to apply unattended.
pub static COMMON_MISSPELLINGS: &[(&str, Option<&str>)] = &[
    ("recieve", Some("receive")),
    ("seperate", Some("separate")),
    ("occured", Some("occurred")),
    ("accomodate", None),
    ("untill", None),
    ("begining", None),
    ("beleive", None),
    ("concious", None),
    ("definately", None),
    ("enviroment", None),
    ("existance", None),
    ("foreward", None),
    ("gaurd", None),
    ("independant", None),
    ("liason", None),
    ("occassion", None),
    ("priviledge", None),
    ("reccommend", None),
    ("relevent", None),
    ("sieze", None),
    ("suprise", None),
    ("tommorow", None),
    ("truely", None),
    ("wierd", None),
];

/// Correction lookup keyed by the lowercase misspelling.
static CORRECTIONS: LazyLock<HashMap<&'static str, Option<&'static str>>> =
    LazyLock::new(|| COMMON_MISSPELLINGS.iter().copied().collect());

/// Look up the safe correction for a misspelled word, if one is known.
///
/// Matching is case-insensitive; the correction is always lowercase.
pub fn correction(word: &str) -> Option<&'static str> {
    CORRECTIONS
        .get(word.to_lowercase().as_str())
        .copied()
        .flatten()
}

/// Alternation pattern over every word in the table, for embedding in a
/// case-insensitive, word-bounded regex.
pub fn pattern() -> String {
    COMMON_MISSPELLINGS
        .iter()
        .map(|(word, _)| *word)
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_corrections() {
        assert_eq!(correction("recieve"), Some("receive"));
        assert_eq!(correction("seperate"), Some("separate"));
        assert_eq!(correction("occured"), Some("occurred"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(correction("Seperate"), Some("separate"));
        assert_eq!(correction("RECIEVE"), Some("receive"));
    }

    #[test]
    fn flagged_without_correction() {
        assert_eq!(correction("wierd"), None);
        assert_eq!(correction("tommorow"), None);
    }

    #[test]
    fn unknown_words_have_no_correction() {
        assert_eq!(correction("hello"), None);
        assert_eq!(correction("separate"), None);
    }

    #[test]
    fn table_entries_are_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for (word, _) in COMMON_MISSPELLINGS {
            assert_eq!(*word, word.to_lowercase(), "{word} should be lowercase");
            assert!(seen.insert(*word), "{word} listed twice");
        }
    }

    #[test]
    fn pattern_lists_every_word_once() {
        let pattern = pattern();
        assert_eq!(pattern.matches("recieve").count(), 1);
        assert_eq!(pattern.matches("untill").count(), 1);
        assert_eq!(pattern.split('|').count(), COMMON_MISSPELLINGS.len());
    }
}
