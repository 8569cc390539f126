//! Candidate word extraction from free text.
//!
//! Four surface-pattern passes run over the same text:
//! - **suffix**: adjective-like endings (`-ful`, `-ous`, `-ive`, `-y`, ...)
//! - **comparative**: `-er` / `-est` shapes
//! - **compound**: hyphenated `word-word` pairs
//! - **series**: words joined by "and"/"or", including `X, Y, and Z` lists
//!
//! Results are lower-cased and unioned in pass order. Nothing here decides
//! whether a token is worth keeping; see [`super::filter`].

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static SUFFIX_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b[a-z]+(?:ing|ed|ful|ous|ive|al|ic|able|ible|less|like|ish|y)\b")
        .expect("suffix pattern is valid")
});

static COMPARATIVE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b[a-z]+(?:er|est)\b").expect("comparative pattern is valid"));

static COMPOUND_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b[a-z]+-[a-z]+\b").expect("compound pattern is valid"));

static SERIES_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b[a-z]+(?:\s*,\s*[a-z]+)*\s*,?\s+(?:and|or)\s+[a-z]+\b")
        .expect("series pattern is valid")
});

/// Scans text for descriptive word candidates.
pub struct WordExtractor;

impl WordExtractor {
    /// Extract raw candidate tokens from `text`.
    ///
    /// Returns lower-cased tokens, first occurrence order, no duplicates.
    pub fn extract(text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        let mut push = |token: &str| {
            let word = token.to_lowercase();
            if !word.is_empty() && seen.insert(word.clone()) {
                candidates.push(word);
            }
        };

        for pattern in [&*SUFFIX_PATTERN, &*COMPARATIVE_PATTERN, &*COMPOUND_PATTERN] {
            for m in pattern.find_iter(text) {
                push(m.as_str());
            }
        }

        for m in SERIES_PATTERN.find_iter(text) {
            for member in Self::series_members(m.as_str()) {
                push(member);
            }
        }

        tracing::trace!("Extracted {} candidate(s)", candidates.len());
        candidates
    }

    /// Split a matched series into its members, dropping the joining words.
    fn series_members(series: &str) -> impl Iterator<Item = &str> {
        series
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .filter(|part| !part.eq_ignore_ascii_case("and") && !part.eq_ignore_ascii_case("or"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(words: &[String], word: &str) -> bool {
        words.iter().any(|w| w == word)
    }

    #[test]
    fn test_suffix_pass() {
        let words = WordExtractor::extract("A peaceful, glowing and misty harbor");
        assert!(contains(&words, "peaceful"));
        assert!(contains(&words, "glowing"));
        assert!(contains(&words, "misty"));
    }

    #[test]
    fn test_comparative_pass() {
        let words = WordExtractor::extract("the brightest star, softer light");
        assert!(contains(&words, "brightest"));
        assert!(contains(&words, "softer"));
    }

    #[test]
    fn test_compound_pass() {
        let words = WordExtractor::extract("A Sun-Kissed, well-lit meadow");
        assert!(contains(&words, "sun-kissed"));
        assert!(contains(&words, "well-lit"));
    }

    #[test]
    fn test_pair_pass_captures_both_sides() {
        let words = WordExtractor::extract("quiet or calm water");
        assert!(contains(&words, "quiet"));
        assert!(contains(&words, "calm"));
        assert!(!contains(&words, "or"));
    }

    #[test]
    fn test_series_pass_captures_every_member() {
        let words =
            WordExtractor::extract("This is a magnificent, extraordinary, and phenomenal photograph");
        assert!(contains(&words, "magnificent"));
        assert!(contains(&words, "extraordinary"));
        assert!(contains(&words, "phenomenal"));
        assert!(!contains(&words, "and"));
    }

    #[test]
    fn test_results_are_lowercase_and_unique() {
        let words = WordExtractor::extract("Misty MISTY misty mornings");
        assert_eq!(words.iter().filter(|w| *w == "misty").count(), 1);
        assert!(words.iter().all(|w| *w == w.to_lowercase()));
    }

    #[test]
    fn test_empty_text() {
        assert!(WordExtractor::extract("").is_empty());
        assert!(WordExtractor::extract("   ").is_empty());
    }
}
