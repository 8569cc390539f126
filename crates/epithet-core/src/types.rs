//! Core data types exchanged with callers.
//!
//! `Photo` is the input record; `AdjectiveResult` is what `analyze` returns.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A photo's text metadata. The engine never sees pixels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Photo {
    /// Caller-assigned identifier
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Free-form metadata; only its presence matters to the engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

impl Photo {
    /// Create a photo with just an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Title, if present and not blank.
    pub fn title_text(&self) -> Option<&str> {
        non_blank(self.title.as_deref())
    }

    /// Description, if present and not blank.
    pub fn description_text(&self) -> Option<&str> {
        non_blank(self.description.as_deref())
    }

    /// Whether at least one non-blank tag is present.
    pub fn has_tags(&self) -> bool {
        self.tags.iter().any(|t| !t.trim().is_empty())
    }

    /// Title, description and tags joined for theme scanning.
    pub fn searchable_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        parts.extend(self.title_text());
        parts.extend(self.description_text());
        parts.extend(self.tags.iter().map(|t| t.trim()).filter(|t| !t.is_empty()));
        parts.join(" ")
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Result of analyzing one photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjectiveResult {
    /// Identifier of the analyzed photo
    pub photo_id: String,

    /// Selected adjectives, most relevant first
    pub adjectives: Vec<String>,

    /// Adjectives grouped by category (when requested)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeMap<String, Vec<String>>>,

    /// Description extended with the top adjectives (when requested)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhanced_description: Option<String>,

    /// Metadata completeness score from 0.0 to 1.0
    pub confidence: f64,

    /// When the analysis ran (RFC 3339)
    pub timestamp: String,

    /// Vocabulary counts after this analysis
    pub vocabulary_stats: VocabularyStats,
}

/// Live vocabulary counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct VocabularyStats {
    /// Sum of all category list lengths
    pub total_words: usize,

    /// Seed plus dynamic categories
    pub category_count: usize,

    /// Words with a learning record
    pub learned_count: usize,

    /// Categories created at runtime
    pub dynamic_category_count: usize,

    /// Word count per category
    pub per_category: BTreeMap<String, usize>,
}

/// A learned word with its usage count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub frequency: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_deserializes_sparse_input() {
        let photo: Photo = serde_json::from_str(r#"{"id":"p1"}"#).unwrap();
        assert_eq!(photo.id, "p1");
        assert!(photo.title.is_none());
        assert!(photo.tags.is_empty());
        assert!(photo.metadata.is_none());
    }

    #[test]
    fn test_photo_blank_fields_count_as_absent() {
        let photo = Photo::new("p1")
            .with_title("   ")
            .with_description("")
            .with_tags(["", "  "]);
        assert!(photo.title_text().is_none());
        assert!(photo.description_text().is_none());
        assert!(!photo.has_tags());
        assert_eq!(photo.searchable_text(), "");
    }

    #[test]
    fn test_searchable_text_joins_fields() {
        let photo = Photo::new("p1")
            .with_title(" Golden Sunset ")
            .with_description("over the lake")
            .with_tags(["beach", "summer"]);
        assert_eq!(
            photo.searchable_text(),
            "Golden Sunset over the lake beach summer"
        );
    }

    #[test]
    fn test_result_skips_absent_sections() {
        let result = AdjectiveResult {
            photo_id: "p1".to_string(),
            adjectives: vec!["serene".to_string()],
            categories: None,
            enhanced_description: None,
            confidence: 0.5,
            timestamp: "2026-01-01T00:00:00Z".to_string(),
            vocabulary_stats: VocabularyStats::default(),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("categories"));
        assert!(!json.contains("enhanced_description"));
        assert!(json.contains("\"photo_id\":\"p1\""));
    }
}
