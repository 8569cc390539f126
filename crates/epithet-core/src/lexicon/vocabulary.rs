//! The live vocabulary store.
//!
//! Holds the category word lists (seed, learned and custom), one learning
//! record per learned word, and the words seen under each context label.
//! Category and record order is insertion order, which keeps lookups and
//! frequency tie-breaks deterministic.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::VocabularyResult;
use crate::types::{VocabularyStats, WordFrequency};

use super::classify::{CONTEXT_DESCRIPTION, CONTEXT_TITLE, DESCRIPTIVE};
use super::filter::normalize;
use super::seed::seed_catalog;
use super::snapshot::{VocabularySnapshot, SNAPSHOT_VERSION};

/// A named bucket of words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub words: Vec<String>,
}

/// Per-word learning history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningRecord {
    /// The normalized word
    pub word: String,
    /// Category the word was first learned into
    pub category: String,
    /// Context of the most recent learn event
    pub context: String,
    /// Every distinct context the word has been learned under, first-seen order
    pub contexts: Vec<String>,
    /// Learn events so far. Never decreases.
    pub frequency: u32,
    /// Derived score in [0, 1], recomputed on every learn
    pub confidence: f64,
    /// Time of the most recent learn event
    pub last_used: DateTime<Utc>,
}

/// Compute a word's learning confidence.
///
/// `0.5 + 0.1 * distinct contexts + min(0.3, 0.05 * frequency)`, plus 0.1 when
/// the triggering context is a title or description, clamped to [0, 1].
pub fn word_confidence(distinct_contexts: usize, frequency: u32, context: &str) -> f64 {
    let mut confidence = 0.5;
    confidence += 0.1 * distinct_contexts as f64;
    confidence += (0.05 * f64::from(frequency)).min(0.3);
    if context == CONTEXT_TITLE || context == CONTEXT_DESCRIPTION {
        confidence += 0.1;
    }
    confidence.clamp(0.0, 1.0)
}

/// Mutable vocabulary state owned by one engine instance.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    categories: Vec<Category>,
    category_index: HashMap<String, usize>,
    dynamic: BTreeSet<String>,
    records: Vec<LearningRecord>,
    record_index: HashMap<String, usize>,
    context_patterns: BTreeMap<String, Vec<String>>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

impl Vocabulary {
    /// Create a vocabulary holding only the seed catalog.
    pub fn new() -> Self {
        let categories: Vec<Category> = seed_catalog()
            .iter()
            .map(|(name, words)| Category {
                name: name.to_string(),
                words: words.iter().map(|w| w.to_string()).collect(),
            })
            .collect();

        Self {
            category_index: index_categories(&categories),
            categories,
            dynamic: BTreeSet::new(),
            records: Vec::new(),
            record_index: HashMap::new(),
            context_patterns: BTreeMap::new(),
        }
    }

    /// Record one learn event for `word`.
    ///
    /// Creates `category` on first use and flags it dynamic. The category list
    /// never holds a word twice; frequency grows on every call. Returns whether
    /// the word was newly added to the category. An empty word is ignored.
    pub fn add_word(&mut self, word: &str, category: &str, context: &str) -> bool {
        let word = normalize(word);
        if word.is_empty() {
            tracing::warn!("Ignoring empty word for category {category:?}");
            return false;
        }
        let category = match normalize(category) {
            c if c.is_empty() => DESCRIPTIVE.to_string(),
            c => c,
        };
        let context = normalize(context);

        let slot = match self.category_index.get(&category) {
            Some(&i) => i,
            None => {
                tracing::debug!("Creating dynamic category {category:?}");
                self.categories.push(Category {
                    name: category.clone(),
                    words: Vec::new(),
                });
                self.category_index
                    .insert(category.clone(), self.categories.len() - 1);
                self.dynamic.insert(category.clone());
                self.categories.len() - 1
            }
        };
        let words = &mut self.categories[slot].words;
        let inserted = !words.contains(&word);
        if inserted {
            words.push(word.clone());
        }

        let now = Utc::now();
        match self.record_index.get(&word) {
            Some(&i) => {
                let record = &mut self.records[i];
                record.frequency = record.frequency.saturating_add(1);
                if !record.contexts.contains(&context) {
                    record.contexts.push(context.clone());
                }
                record.context = context.clone();
                record.confidence =
                    word_confidence(record.contexts.len(), record.frequency, &context);
                record.last_used = now;
            }
            None => {
                self.records.push(LearningRecord {
                    word: word.clone(),
                    category: category.clone(),
                    context: context.clone(),
                    contexts: vec![context.clone()],
                    frequency: 1,
                    confidence: word_confidence(1, 1, &context),
                    last_used: now,
                });
                self.record_index
                    .insert(word.clone(), self.records.len() - 1);
            }
        }

        let learned = self.context_patterns.entry(context).or_default();
        if !learned.contains(&word) {
            learned.push(word.clone());
        }

        tracing::trace!("Learned {word:?} into {category:?}");
        inserted
    }

    /// Names of all categories, seed first, then dynamic in creation order.
    pub fn categories(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    /// All categories with their words.
    pub fn category_list(&self) -> &[Category] {
        &self.categories
    }

    /// Words in `name`, or an empty slice for an unknown category.
    pub fn words_by_category(&self, name: &str) -> &[String] {
        self.category_index
            .get(&normalize(name))
            .map(|&i| self.categories[i].words.as_slice())
            .unwrap_or(&[])
    }

    /// First category, in store order, that lists `word`.
    pub fn category_of(&self, word: &str) -> Option<&str> {
        let word = normalize(word);
        self.categories
            .iter()
            .find(|c| c.words.contains(&word))
            .map(|c| c.name.as_str())
    }

    /// Whether any category lists `word`.
    pub fn contains_word(&self, word: &str) -> bool {
        self.category_of(word).is_some()
    }

    /// Names of categories created at runtime.
    pub fn dynamic_categories(&self) -> impl Iterator<Item = &str> {
        self.dynamic.iter().map(String::as_str)
    }

    /// Learning record for `word`, if it was ever learned.
    pub fn record(&self, word: &str) -> Option<&LearningRecord> {
        self.record_index
            .get(&normalize(word))
            .map(|&i| &self.records[i])
    }

    /// Usage count for `word`; zero when never learned.
    pub fn frequency(&self, word: &str) -> u32 {
        self.record(word).map(|r| r.frequency).unwrap_or(0)
    }

    /// Words learned under each context label.
    pub fn context_patterns(&self) -> &BTreeMap<String, Vec<String>> {
        &self.context_patterns
    }

    /// Live counts, recomputed on every call.
    pub fn stats(&self) -> VocabularyStats {
        let per_category: BTreeMap<String, usize> = self
            .categories
            .iter()
            .map(|c| (c.name.clone(), c.words.len()))
            .collect();

        VocabularyStats {
            total_words: per_category.values().sum(),
            category_count: self.categories.len(),
            learned_count: self.records.len(),
            dynamic_category_count: self.dynamic.len(),
            per_category,
        }
    }

    /// Learned words ranked by frequency, ties in first-learned order.
    pub fn most_frequent(&self, limit: usize) -> Vec<WordFrequency> {
        let mut ranked: Vec<&LearningRecord> = self.records.iter().collect();
        ranked.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        ranked
            .into_iter()
            .take(limit)
            .map(|r| WordFrequency {
                word: r.word.clone(),
                frequency: r.frequency,
            })
            .collect()
    }

    /// Deep copy of the full state.
    pub fn to_snapshot(&self) -> VocabularySnapshot {
        VocabularySnapshot {
            version: SNAPSHOT_VERSION,
            exported_at: Utc::now(),
            categories: self.categories.clone(),
            dynamic_categories: self.dynamic.iter().cloned().collect(),
            records: self.records.clone(),
            context_patterns: self.context_patterns.clone(),
        }
    }

    /// Build a vocabulary from a snapshot after validating it.
    pub fn from_snapshot(snapshot: VocabularySnapshot) -> VocabularyResult<Self> {
        snapshot.validate()?;

        let VocabularySnapshot {
            categories,
            dynamic_categories,
            records,
            context_patterns,
            ..
        } = snapshot;

        let record_index = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.word.clone(), i))
            .collect();

        Ok(Self {
            category_index: index_categories(&categories),
            categories,
            dynamic: dynamic_categories.into_iter().collect(),
            records,
            record_index,
            context_patterns,
        })
    }
}

fn index_categories(categories: &[Category]) -> HashMap<String, usize> {
    categories
        .iter()
        .enumerate()
        .map(|(i, c)| (c.name.clone(), i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::seed::SEED_CATEGORIES;

    #[test]
    fn test_new_has_seed_categories() {
        let vocab = Vocabulary::new();
        assert_eq!(vocab.categories(), SEED_CATEGORIES);
        assert!(vocab.words_by_category("mood").contains(&"serene".to_string()));
        assert_eq!(vocab.stats().learned_count, 0);
        assert_eq!(vocab.dynamic_categories().count(), 0);
    }

    #[test]
    fn test_add_word_twice_is_idempotent_for_membership() {
        let mut vocab = Vocabulary::new();
        assert!(vocab.add_word("Glimmering", "visual", "description"));
        assert!(!vocab.add_word("glimmering ", "visual", "description"));

        let count = vocab
            .words_by_category("visual")
            .iter()
            .filter(|w| *w == "glimmering")
            .count();
        assert_eq!(count, 1);
        assert_eq!(vocab.frequency("glimmering"), 2);
        assert_eq!(vocab.record("glimmering").unwrap().frequency, 2);
    }

    #[test]
    fn test_add_word_creates_dynamic_category() {
        let mut vocab = Vocabulary::new();
        vocab.add_word("phenomenal", "descriptive", "description");

        assert!(vocab.categories().contains(&"descriptive".to_string()));
        assert_eq!(vocab.dynamic_categories().collect::<Vec<_>>(), vec!["descriptive"]);
        assert_eq!(vocab.words_by_category("descriptive"), ["phenomenal"]);
    }

    #[test]
    fn test_add_seed_word_does_not_duplicate() {
        let mut vocab = Vocabulary::new();
        let before = vocab.words_by_category("mood").len();
        assert!(!vocab.add_word("serene", "mood", "title"));
        assert_eq!(vocab.words_by_category("mood").len(), before);
        assert_eq!(vocab.frequency("serene"), 1);
    }

    #[test]
    fn test_add_empty_word_is_ignored() {
        let mut vocab = Vocabulary::new();
        assert!(!vocab.add_word("   ", "mood", "title"));
        assert_eq!(vocab.stats().learned_count, 0);
        assert!(vocab.context_patterns().is_empty());
    }

    #[test]
    fn test_record_keeps_first_category() {
        let mut vocab = Vocabulary::new();
        vocab.add_word("hazy", "visual", "description");
        vocab.add_word("hazy", "mood", "tag");

        let record = vocab.record("hazy").unwrap();
        assert_eq!(record.category, "visual");
        assert_eq!(record.context, "tag");
        assert_eq!(record.contexts, vec!["description", "tag"]);
        // Listed in both categories; lookups return the earlier one.
        assert_eq!(vocab.category_of("hazy"), Some("mood"));
    }

    #[test]
    fn test_context_patterns_suppress_duplicates() {
        let mut vocab = Vocabulary::new();
        vocab.add_word("misty", "visual", "title");
        vocab.add_word("misty", "visual", "title");
        vocab.add_word("foggy", "visual", "title");

        assert_eq!(vocab.context_patterns()["title"], vec!["misty", "foggy"]);
    }

    #[test]
    fn test_word_confidence_formula() {
        // 0.5 + 0.1 + 0.05 + 0.1
        assert!((word_confidence(1, 1, "title") - 0.75).abs() < 1e-9);
        // 0.5 + 0.1 + 0.05
        assert!((word_confidence(1, 1, "tag") - 0.65).abs() < 1e-9);
        // frequency bonus caps at 0.3
        assert!((word_confidence(1, 100, "tag") - 0.9).abs() < 1e-9);
        // clamped
        assert_eq!(word_confidence(5, 100, "description"), 1.0);
    }

    #[test]
    fn test_confidence_monotonic_in_contexts() {
        let mut single = Vocabulary::new();
        single.add_word("gleaming", "visual", "caption");
        single.add_word("gleaming", "visual", "caption");

        let mut double = Vocabulary::new();
        double.add_word("gleaming", "visual", "caption");
        double.add_word("gleaming", "visual", "alt");

        let one = single.record("gleaming").unwrap().confidence;
        let two = double.record("gleaming").unwrap().confidence;
        assert!(two >= one);
        assert!((0.0..=1.0).contains(&two));
    }

    #[test]
    fn test_stats_are_live() {
        let mut vocab = Vocabulary::new();
        let before = vocab.stats();
        vocab.add_word("phenomenal", "descriptive", "description");
        let after = vocab.stats();

        assert_eq!(after.total_words, before.total_words + 1);
        assert_eq!(after.category_count, before.category_count + 1);
        assert_eq!(after.learned_count, 1);
        assert_eq!(after.dynamic_category_count, 1);
        assert_eq!(after.per_category["descriptive"], 1);
    }

    #[test]
    fn test_most_frequent_orders_by_count_then_insertion() {
        let mut vocab = Vocabulary::new();
        vocab.add_word("alpha", "descriptive", "tag");
        vocab.add_word("bravo", "descriptive", "tag");
        vocab.add_word("bravo", "descriptive", "tag");
        vocab.add_word("charlie", "descriptive", "tag");

        let top = vocab.most_frequent(10);
        let words: Vec<&str> = top.iter().map(|f| f.word.as_str()).collect();
        assert_eq!(words, vec!["bravo", "alpha", "charlie"]);
        assert_eq!(top[0].frequency, 2);

        assert_eq!(vocab.most_frequent(1).len(), 1);
        assert!(vocab.most_frequent(0).is_empty());
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let vocab = Vocabulary::new();
        assert!(vocab.words_by_category("nonexistent").is_empty());
        assert_eq!(vocab.category_of("nonexistent"), None);
        assert_eq!(vocab.frequency("nonexistent"), 0);
    }

    #[test]
    fn test_snapshot_roundtrip_preserves_reads() {
        let mut vocab = Vocabulary::new();
        vocab.add_word("phenomenal", "descriptive", "description");
        vocab.add_word("misty", "visual", "title");
        vocab.add_word("misty", "visual", "tag");

        let restored = Vocabulary::from_snapshot(vocab.to_snapshot()).unwrap();
        assert_eq!(restored.stats(), vocab.stats());
        assert_eq!(restored.categories(), vocab.categories());
        assert_eq!(restored.most_frequent(10), vocab.most_frequent(10));
        assert_eq!(restored.record("misty"), vocab.record("misty"));
        assert_eq!(restored.context_patterns(), vocab.context_patterns());
    }

    #[test]
    fn test_snapshot_is_a_deep_copy() {
        let mut vocab = Vocabulary::new();
        vocab.add_word("misty", "visual", "title");

        let mut snapshot = vocab.to_snapshot();
        snapshot.categories[0].words.clear();
        snapshot.records.clear();

        assert!(!vocab.words_by_category("mood").is_empty());
        assert_eq!(vocab.frequency("misty"), 1);
    }
}
