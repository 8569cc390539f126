//! Exportable vocabulary snapshots.
//!
//! A snapshot is the whole store as a plain serializable value. Import is
//! all-or-nothing: a snapshot is validated in full before it can replace the
//! live state, so a bad file never leaves the store half-loaded.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{VocabularyError, VocabularyResult};

use super::filter::normalize;
use super::seed::{is_seed_category, SEED_CATEGORIES};
use super::vocabulary::{Category, LearningRecord};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Complete copy of a vocabulary store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularySnapshot {
    pub version: u32,
    pub exported_at: DateTime<Utc>,
    pub categories: Vec<Category>,
    #[serde(default)]
    pub dynamic_categories: Vec<String>,
    #[serde(default)]
    pub records: Vec<LearningRecord>,
    #[serde(default)]
    pub context_patterns: BTreeMap<String, Vec<String>>,
}

impl VocabularySnapshot {
    /// Serialize to JSON.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    /// Parse and validate a snapshot from JSON.
    pub fn from_json(json: &str) -> VocabularyResult<Self> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| VocabularyError::MalformedSnapshot(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check every store invariant the snapshot must satisfy to be imported.
    pub fn validate(&self) -> VocabularyResult<()> {
        if self.version != SNAPSHOT_VERSION {
            return Err(VocabularyError::UnsupportedVersion {
                found: self.version,
                expected: SNAPSHOT_VERSION,
            });
        }

        let mut names = HashSet::new();
        for category in &self.categories {
            require_normalized(&category.name, "category name")?;
            if !names.insert(category.name.as_str()) {
                return Err(malformed(format!(
                    "duplicate category {:?}",
                    category.name
                )));
            }
            let mut words = HashSet::new();
            for word in &category.words {
                require_normalized(word, "word")?;
                if !words.insert(word.as_str()) {
                    return Err(malformed(format!(
                        "word {word:?} listed twice in category {:?}",
                        category.name
                    )));
                }
            }
        }

        if let Some(missing) = SEED_CATEGORIES.iter().find(|s| !names.contains(**s)) {
            return Err(malformed(format!("seed category {missing:?} is missing")));
        }

        for name in &self.dynamic_categories {
            if !names.contains(name.as_str()) {
                return Err(malformed(format!(
                    "dynamic category {name:?} has no word list"
                )));
            }
            if is_seed_category(name) {
                return Err(malformed(format!(
                    "seed category {name:?} cannot be dynamic"
                )));
            }
        }

        let mut learned = HashSet::new();
        for record in &self.records {
            require_normalized(&record.word, "learned word")?;
            if !learned.insert(record.word.as_str()) {
                return Err(malformed(format!(
                    "duplicate learning record for {:?}",
                    record.word
                )));
            }
            let listed = self
                .categories
                .iter()
                .find(|c| c.name == record.category)
                .is_some_and(|c| c.words.contains(&record.word));
            if !listed {
                return Err(malformed(format!(
                    "learned word {:?} is not listed in its category {:?}",
                    record.word, record.category
                )));
            }
            if record.frequency == 0 {
                return Err(malformed(format!(
                    "learned word {:?} has zero frequency",
                    record.word
                )));
            }
            if !record.confidence.is_finite() || !(0.0..=1.0).contains(&record.confidence) {
                return Err(malformed(format!(
                    "learned word {:?} has confidence {} outside [0, 1]",
                    record.word, record.confidence
                )));
            }
            if record.contexts.is_empty() {
                return Err(malformed(format!(
                    "learned word {:?} has no contexts",
                    record.word
                )));
            }
        }

        for (context, words) in &self.context_patterns {
            if let Some(word) = words.iter().find(|w| w.is_empty()) {
                return Err(malformed(format!(
                    "context {context:?} holds an invalid word {word:?}"
                )));
            }
        }

        Ok(())
    }
}

fn malformed(message: String) -> VocabularyError {
    VocabularyError::MalformedSnapshot(message)
}

fn require_normalized(value: &str, what: &str) -> VocabularyResult<()> {
    if value.is_empty() || normalize(value) != value {
        return Err(malformed(format!("{what} {value:?} is empty or not normalized")));
    }
    Ok(())
}
