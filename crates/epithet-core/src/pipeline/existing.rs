//! Words a photo already carries before selection.
//!
//! Two sources: well-known compliments written into the title or
//! description, and tags that are already catalog words.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::{normalize, Vocabulary};
use crate::types::Photo;

static COMPLIMENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:beautiful|stunning|amazing|gorgeous|lovely|nice|great|wonderful|excellent|perfect)\b",
    )
    .expect("compliment pattern is valid")
});

/// Collect the photo's existing words: compliments first, then catalog tags.
pub fn existing_words(vocabulary: &Vocabulary, photo: &Photo) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();

    for text in [photo.title_text(), photo.description_text()].into_iter().flatten() {
        for m in COMPLIMENT_PATTERN.find_iter(text) {
            let word = m.as_str().to_lowercase();
            if seen.insert(word.clone()) {
                words.push(word);
            }
        }
    }

    for tag in &photo.tags {
        let word = normalize(tag);
        if !word.is_empty() && vocabulary.contains_word(&word) && seen.insert(word.clone()) {
            words.push(word);
        }
    }

    words
}
