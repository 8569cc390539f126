//! Adjective selection for a single photo.
//!
//! Blends three sources behind the caller's existing words:
//! 1. thematic rule bundles triggered by the photo's text
//! 2. words learned under contexts the photo actually has
//! 3. one catalog word per category, by frequency or at random
//!
//! The random draw goes through a caller-supplied `Rng` so a seeded
//! generator makes selection reproducible.

use std::cmp::Reverse;
use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::Photo;

use super::classify::{CONTEXT_DESCRIPTION, CONTEXT_TAG, CONTEXT_TITLE};
use super::filter::normalize;
use super::themes::thematic_words;
use super::vocabulary::Vocabulary;

/// Options for a selection pass.
#[derive(Debug, Clone)]
pub struct SelectOptions {
    /// Include words learned under the photo's contexts
    pub use_learning: bool,
    /// Rank learned and catalog words by frequency instead of order / chance
    pub prefer_frequent: bool,
    /// Learned words taken per context
    pub context_word_limit: usize,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            use_learning: true,
            prefer_frequent: false,
            context_word_limit: 5,
        }
    }
}

/// Ordered word list that drops repeats.
struct Picks {
    words: Vec<String>,
    seen: HashSet<String>,
}

impl Picks {
    fn new() -> Self {
        Self {
            words: Vec::new(),
            seen: HashSet::new(),
        }
    }

    fn push(&mut self, word: &str) {
        let word = normalize(word);
        if !word.is_empty() && self.seen.insert(word.clone()) {
            self.words.push(word);
        }
    }

    fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    fn into_capped(mut self, max: usize) -> Vec<String> {
        self.words.truncate(max);
        self.words
    }
}

/// Picks adjectives for photos from a vocabulary.
pub struct Selector;

impl Selector {
    /// Select up to `max` adjectives for `photo`.
    ///
    /// `existing` words lead the result in their given order. Fewer than `max`
    /// available words is not an error; everything available is returned.
    pub fn select<R: Rng + ?Sized>(
        vocabulary: &Vocabulary,
        photo: &Photo,
        existing: &[String],
        max: usize,
        options: &SelectOptions,
        rng: &mut R,
    ) -> Vec<String> {
        let mut picks = Picks::new();
        for word in existing {
            picks.push(word);
        }

        for word in thematic_words(&photo.searchable_text()) {
            picks.push(word);
        }

        if options.use_learning {
            for word in Self::context_words(vocabulary, photo, options) {
                picks.push(&word);
            }
        }

        for category in vocabulary.category_list() {
            let eligible: Vec<&String> = category
                .words
                .iter()
                .filter(|w| !picks.contains(w))
                .collect();
            let choice = if options.prefer_frequent {
                // min_by_key keeps the first of equal keys
                eligible
                    .iter()
                    .min_by_key(|w| Reverse(vocabulary.frequency(w)))
                    .copied()
            } else {
                eligible.choose(rng).copied()
            };
            if let Some(word) = choice {
                picks.push(word);
            }
        }

        let selected = picks.into_capped(max);
        tracing::debug!(
            "Selected {} adjective(s) for photo {:?}",
            selected.len(),
            photo.id
        );
        selected
    }

    /// Legacy selection: existing words, thematic words, then random catalog
    /// words until `max` is reached. Learned context words are not consulted.
    pub fn select_legacy<R: Rng + ?Sized>(
        vocabulary: &Vocabulary,
        photo: &Photo,
        existing: &[String],
        max: usize,
        rng: &mut R,
    ) -> Vec<String> {
        let mut picks = Picks::new();
        for word in existing {
            picks.push(word);
        }
        for word in thematic_words(&photo.searchable_text()) {
            picks.push(word);
        }

        let mut pool: Vec<&String> = vocabulary
            .category_list()
            .iter()
            .flat_map(|c| c.words.iter())
            .filter(|w| !picks.contains(w))
            .collect();
        pool.shuffle(rng);

        for word in pool {
            if picks.words.len() >= max {
                break;
            }
            picks.push(word);
        }

        picks.into_capped(max)
    }

    /// Learned words for every context label the photo has content for.
    ///
    /// Labels are visited in sorted order, not first-learned order.
    fn context_words(
        vocabulary: &Vocabulary,
        photo: &Photo,
        options: &SelectOptions,
    ) -> Vec<String> {
        let mut words = Vec::new();
        for (context, learned) in vocabulary.context_patterns() {
            let present = match context.as_str() {
                CONTEXT_TITLE => photo.title_text().is_some(),
                CONTEXT_DESCRIPTION => photo.description_text().is_some(),
                CONTEXT_TAG => photo.has_tags(),
                _ => false,
            };
            if !present {
                continue;
            }

            let mut contribution: Vec<&String> = learned.iter().collect();
            if options.prefer_frequent {
                contribution.sort_by_key(|w| Reverse(vocabulary.frequency(w)));
            }
            words.extend(
                contribution
                    .into_iter()
                    .take(options.context_word_limit)
                    .cloned(),
            );
        }
        words
    }
}
