//! Vocabulary acquisition and adjective selection.
//!
//! Words flow through the modules in this order when learning:
//! extract → filter → classify → vocabulary. Selection reads the vocabulary
//! and the fixed theme rules.

pub mod classify;
pub mod extract;
pub mod filter;
pub mod seed;
pub mod selector;
pub mod snapshot;
pub mod themes;
pub mod vocabulary;

pub use classify::classify;
pub use extract::WordExtractor;
pub use filter::{is_generic_word, is_valid_candidate, normalize};
pub use selector::{SelectOptions, Selector};
pub use snapshot::VocabularySnapshot;
pub use vocabulary::{Category, LearningRecord, Vocabulary};

/// Run the learning pipeline over `text` and record what survives.
///
/// Returns the words recorded, in extraction order.
pub fn learn_text(vocabulary: &mut Vocabulary, text: &str, context: &str) -> Vec<String> {
    let context = normalize(context);
    let mut learned = Vec::new();
    for candidate in WordExtractor::extract(text) {
        if !is_valid_candidate(&candidate) || is_generic_word(&candidate) {
            continue;
        }
        let category = classify(&candidate, &context);
        vocabulary.add_word(&candidate, category, &context);
        learned.push(candidate);
    }
    learned
}

/// Record a tag directly, without extraction. Returns the normalized tag if kept.
pub fn learn_tag(vocabulary: &mut Vocabulary, tag: &str) -> Option<String> {
    let word = normalize(tag);
    if !is_valid_candidate(&word) || is_generic_word(&word) {
        return None;
    }
    let category = classify(&word, classify::CONTEXT_TAG);
    vocabulary.add_word(&word, category, classify::CONTEXT_TAG);
    Some(word)
}
