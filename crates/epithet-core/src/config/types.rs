//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Where callers keep the exported vocabulary snapshot between runs
    pub vocabulary_path: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            vocabulary_path: "~/.epithet/vocabulary.json".to_string(),
        }
    }
}

/// Default options applied to every `analyze` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum number of adjectives per photo
    pub max_adjectives: usize,

    /// Group the selected adjectives by category in the result
    pub include_categories: bool,

    /// Synthesize an enhanced description from the top adjectives
    pub enhance_description: bool,

    /// Learn new vocabulary from the photo's title, description and tags
    pub learn_from_input: bool,

    /// Blend learned and catalog words into the selection.
    /// When false, falls back to themes plus a random catalog fill (legacy behavior).
    pub expand_vocabulary: bool,

    /// Rank learned and catalog words by usage frequency instead of list order / chance
    pub prefer_frequent: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_adjectives: 10,
            include_categories: true,
            enhance_description: true,
            learn_from_input: true,
            expand_vocabulary: true,
            prefer_frequent: false,
        }
    }
}

/// Selector tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Learned words contributed per matching context
    pub context_word_limit: usize,

    /// Adjectives woven into the enhanced description
    pub description_words: usize,

    /// Fixed seed for the random catalog fill. Unset draws from OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            context_word_limit: 5,
            description_words: 3,
            seed: None,
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format ("json" or "jsonl")
    pub format: String,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            pretty: true,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
