//! Epithet Core - Embeddable adjective engine for photo metadata.
//!
//! Epithet assigns descriptive words to photos from their text metadata. It
//! starts from a fixed seed vocabulary and keeps learning new words from
//! every title, description and tag it sees.
//!
//! # Architecture
//!
//! One vocabulary store per engine, guarded by a mutex:
//!
//! ```text
//! Text → Extract → Filter → Classify → Vocabulary
//! Photo → Learn → Existing words → Select → Categories/Description → JSON
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use epithet_core::{AnalyzeOptions, Config, Epithet, Photo};
//!
//! fn main() -> epithet_core::Result<()> {
//!     let epithet = Epithet::new(Config::load()?);
//!
//!     let photo = Photo::new("p1").with_title("Golden Sunset");
//!     let result = epithet.analyze(&photo, &AnalyzeOptions::default());
//!     println!("Adjectives: {:?}", result.adjectives);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod lexicon;
pub mod output;
pub mod pipeline;
pub mod types;

use std::sync::{Mutex, MutexGuard};

use rand::rngs::StdRng;
use rand::SeedableRng;

// Re-exports for convenient access
pub use config::Config;
pub use error::{ConfigError, EpithetError, Result, VocabularyError, VocabularyResult};
pub use lexicon::{SelectOptions, Vocabulary, VocabularySnapshot};
pub use output::{OutputFormat, OutputWriter};
pub use pipeline::{AnalyzeOptions, PhotoAnalyzer};
pub use types::{AdjectiveResult, Photo, VocabularyStats, WordFrequency};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything behind the engine lock.
struct EngineState {
    vocabulary: Vocabulary,
    rng: StdRng,
}

/// Epithet engine - the main entry point for adjective analysis.
///
/// Owns one vocabulary store. Every operation holds the lock for its whole
/// duration, so an engine can be shared across threads by reference.
pub struct Epithet {
    config: Config,
    analyzer: PhotoAnalyzer,
    state: Mutex<EngineState>,
}

impl Epithet {
    /// Create a new engine with a freshly seeded vocabulary.
    pub fn new(config: Config) -> Self {
        tracing::debug!("Initializing Epithet v{}", VERSION);
        let rng = match config.selection.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            analyzer: PhotoAnalyzer::new(config.selection.clone()),
            state: Mutex::new(EngineState {
                vocabulary: Vocabulary::new(),
                rng,
            }),
            config,
        }
    }

    /// Create a new engine from the config file (or defaults).
    pub fn with_defaults() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self::new(config))
    }

    /// Get a reference to the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Options built from the `[analysis]` config section.
    pub fn default_options(&self) -> AnalyzeOptions {
        AnalyzeOptions::from(&self.config.analysis)
    }

    // A panic mid-operation leaves completed writes in place, same as any
    // other non-transactional learn, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, EngineState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Analyze one photo, learning from it first when enabled.
    pub fn analyze(&self, photo: &Photo, options: &AnalyzeOptions) -> AdjectiveResult {
        let mut state = self.lock();
        let EngineState { vocabulary, rng } = &mut *state;
        self.analyzer.analyze(vocabulary, photo, options, rng)
    }

    /// Analyze photos in order against the same vocabulary.
    ///
    /// Words learned from earlier photos are visible to later ones.
    pub fn analyze_batch(
        &self,
        photos: &[Photo],
        options: &AnalyzeOptions,
    ) -> Vec<AdjectiveResult> {
        tracing::debug!("Analyzing batch of {} photo(s)", photos.len());
        photos.iter().map(|p| self.analyze(p, options)).collect()
    }

    /// Learn descriptive words from free text. Returns the words recorded.
    pub fn learn_from_text(&self, text: &str, context: &str) -> Vec<String> {
        let mut state = self.lock();
        let learned = lexicon::learn_text(&mut state.vocabulary, text, context);
        tracing::debug!("Learned {} word(s) under {:?}", learned.len(), context);
        learned
    }

    /// Learn from several texts under one context, in order.
    pub fn learn_from_text_batch<S: AsRef<str>>(&self, texts: &[S], context: &str) -> Vec<String> {
        texts
            .iter()
            .flat_map(|t| self.learn_from_text(t.as_ref(), context))
            .collect()
    }

    /// Add a word to a category directly, bypassing the filters.
    ///
    /// Returns whether the word was new to the category.
    pub fn add_custom_word(&self, word: &str, category: &str, context: &str) -> bool {
        self.lock().vocabulary.add_word(word, category, context)
    }

    /// Live vocabulary counts.
    pub fn stats(&self) -> VocabularyStats {
        self.lock().vocabulary.stats()
    }

    /// All category names, seed categories first.
    pub fn all_categories(&self) -> Vec<String> {
        self.lock().vocabulary.categories()
    }

    /// Words in a category, empty when the category is unknown.
    pub fn words_by_category(&self, category: &str) -> Vec<String> {
        self.lock().vocabulary.words_by_category(category).to_vec()
    }

    /// Learned words by descending frequency.
    pub fn most_frequent(&self, limit: usize) -> Vec<WordFrequency> {
        self.lock().vocabulary.most_frequent(limit)
    }

    /// Deep copy of the current vocabulary.
    pub fn export_vocabulary(&self) -> VocabularySnapshot {
        let snapshot = self.lock().vocabulary.to_snapshot();
        tracing::info!(
            "Exported vocabulary: {} categories, {} learned word(s)",
            snapshot.categories.len(),
            snapshot.records.len()
        );
        snapshot
    }

    /// Replace the vocabulary wholesale. On error the current store is kept.
    pub fn import_vocabulary(&self, snapshot: VocabularySnapshot) -> VocabularyResult<()> {
        let vocabulary = Vocabulary::from_snapshot(snapshot)?;
        let stats = vocabulary.stats();
        self.lock().vocabulary = vocabulary;
        tracing::info!(
            "Imported vocabulary: {} categories, {} learned word(s)",
            stats.category_count,
            stats.learned_count
        );
        Ok(())
    }

    /// Import a snapshot from its JSON text.
    pub fn import_vocabulary_json(&self, json: &str) -> VocabularyResult<()> {
        self.import_vocabulary(VocabularySnapshot::from_json(json)?)
    }

    /// Run the selector directly against the live vocabulary.
    pub fn select(
        &self,
        photo: &Photo,
        existing: &[String],
        max: usize,
        options: &SelectOptions,
    ) -> Vec<String> {
        let mut state = self.lock();
        let EngineState { vocabulary, rng } = &mut *state;
        lexicon::Selector::select(vocabulary, photo, existing, max, options, rng)
    }
}
