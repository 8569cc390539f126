//! Photo analysis - wires learning, selection and result assembly together.

use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use rand::Rng;

use crate::config::{AnalysisConfig, SelectionConfig};
use crate::lexicon::classify::{CONTEXT_DESCRIPTION, CONTEXT_TITLE, DESCRIPTIVE};
use crate::lexicon::{learn_tag, learn_text, SelectOptions, Selector, Vocabulary};
use crate::types::{AdjectiveResult, Photo};

use super::describe::enhance_description;
use super::existing::existing_words;

/// Options for controlling photo analysis.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Maximum number of adjectives returned
    pub max_adjectives: usize,
    /// Group adjectives by category in the result
    pub include_categories: bool,
    /// Produce an enhanced description
    pub enhance_description: bool,
    /// Learn vocabulary from the photo before selecting
    pub learn_from_input: bool,
    /// Blend learned and catalog words; false uses the legacy theme + random fill
    pub expand_vocabulary: bool,
    /// Rank learned and catalog words by frequency
    pub prefer_frequent: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self::from(&AnalysisConfig::default())
    }
}

impl From<&AnalysisConfig> for AnalyzeOptions {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            max_adjectives: config.max_adjectives,
            include_categories: config.include_categories,
            enhance_description: config.enhance_description,
            learn_from_input: config.learn_from_input,
            expand_vocabulary: config.expand_vocabulary,
            prefer_frequent: config.prefer_frequent,
        }
    }
}

/// Metadata completeness score for a photo.
///
/// 0.5 base, +0.1 title, +0.2 description, +0.1 tags, +0.1 metadata, capped at 1.0.
/// Tallied in tenths so the sums come out exact.
pub fn photo_confidence(photo: &Photo) -> f64 {
    let mut tenths: u8 = 5;
    if photo.title_text().is_some() {
        tenths += 1;
    }
    if photo.description_text().is_some() {
        tenths += 2;
    }
    if photo.has_tags() {
        tenths += 1;
    }
    if photo.metadata.is_some() {
        tenths += 1;
    }
    f64::from(tenths.min(10)) / 10.0
}

/// Group words by the first vocabulary category listing them.
pub fn group_by_category(
    vocabulary: &Vocabulary,
    words: &[String],
) -> BTreeMap<String, Vec<String>> {
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for word in words {
        let category = vocabulary.category_of(word).unwrap_or(DESCRIPTIVE);
        groups
            .entry(category.to_string())
            .or_default()
            .push(word.clone());
    }
    groups
}

/// Runs the analyze steps for one photo against a vocabulary.
pub struct PhotoAnalyzer {
    selection: SelectionConfig,
}

impl PhotoAnalyzer {
    /// Create an analyzer with the given selector tuning.
    pub fn new(selection: SelectionConfig) -> Self {
        Self { selection }
    }

    /// Analyze one photo. Never fails: absent fields only shrink the result.
    pub fn analyze<R: Rng + ?Sized>(
        &self,
        vocabulary: &mut Vocabulary,
        photo: &Photo,
        options: &AnalyzeOptions,
        rng: &mut R,
    ) -> AdjectiveResult {
        let start = std::time::Instant::now();

        if options.learn_from_input {
            let learned = Self::learn_from_photo(vocabulary, photo);
            tracing::trace!("  Learned {} word(s) from {:?}", learned, photo.id);
        }

        let existing = existing_words(vocabulary, photo);

        let adjectives = if options.expand_vocabulary {
            let select_options = SelectOptions {
                use_learning: true,
                prefer_frequent: options.prefer_frequent,
                context_word_limit: self.selection.context_word_limit,
            };
            Selector::select(
                vocabulary,
                photo,
                &existing,
                options.max_adjectives,
                &select_options,
                rng,
            )
        } else {
            Selector::select_legacy(vocabulary, photo, &existing, options.max_adjectives, rng)
        };

        let categories = options
            .include_categories
            .then(|| group_by_category(vocabulary, &adjectives));

        let enhanced_description = options
            .enhance_description
            .then(|| enhance_description(photo, &adjectives, self.selection.description_words));

        tracing::debug!(
            "Analyzed {:?} in {:?}: {} adjective(s)",
            photo.id,
            start.elapsed(),
            adjectives.len()
        );

        AdjectiveResult {
            photo_id: photo.id.clone(),
            adjectives,
            categories,
            enhanced_description,
            confidence: photo_confidence(photo),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            vocabulary_stats: vocabulary.stats(),
        }
    }

    /// Learn from title, description and tags. Returns how many words were recorded.
    fn learn_from_photo(vocabulary: &mut Vocabulary, photo: &Photo) -> usize {
        let mut count = 0;
        if let Some(title) = photo.title_text() {
            count += learn_text(vocabulary, title, CONTEXT_TITLE).len();
        }
        if let Some(description) = photo.description_text() {
            count += learn_text(vocabulary, description, CONTEXT_DESCRIPTION).len();
        }
        for tag in &photo.tags {
            if learn_tag(vocabulary, tag).is_some() {
                count += 1;
            }
        }
        count
    }
}
