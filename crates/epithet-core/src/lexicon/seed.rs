//! Built-in seed catalog.
//!
//! Every fresh vocabulary starts from these five categories. They are always
//! present, even after an import, and are never flagged as dynamic.

/// Names of the seed categories, in catalog order.
pub const SEED_CATEGORIES: [&str; 5] = ["mood", "visual", "temporal", "spatial", "emotional"];

const MOOD: &[&str] = &[
    "serene",
    "peaceful",
    "tranquil",
    "calm",
    "dramatic",
    "moody",
    "melancholic",
    "whimsical",
    "nostalgic",
    "playful",
];

const VISUAL: &[&str] = &[
    "vibrant",
    "colorful",
    "bright",
    "vivid",
    "luminous",
    "crisp",
    "textured",
    "minimalist",
    "monochrome",
    "soft",
];

const TEMPORAL: &[&str] = &[
    "timeless",
    "vintage",
    "ancient",
    "fleeting",
    "seasonal",
    "nocturnal",
    "contemporary",
    "classic",
    "retro",
    "momentary",
];

const SPATIAL: &[&str] = &[
    "vast",
    "expansive",
    "intimate",
    "panoramic",
    "towering",
    "sprawling",
    "secluded",
    "layered",
    "distant",
    "enclosed",
];

const EMOTIONAL: &[&str] = &[
    "heartwarming",
    "inspiring",
    "uplifting",
    "poignant",
    "touching",
    "tender",
    "romantic",
    "hopeful",
    "passionate",
    "soulful",
];

/// Seed words for each built-in category, in catalog order.
pub fn seed_catalog() -> [(&'static str, &'static [&'static str]); 5] {
    [
        ("mood", MOOD),
        ("visual", VISUAL),
        ("temporal", TEMPORAL),
        ("spatial", SPATIAL),
        ("emotional", EMOTIONAL),
    ]
}

/// Whether `name` is one of the built-in categories.
pub fn is_seed_category(name: &str) -> bool {
    SEED_CATEGORIES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_order_matches_seed_names() {
        let names: Vec<&str> = seed_catalog().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, SEED_CATEGORIES);
    }

    #[test]
    fn test_seed_words_are_normalized_and_unique() {
        let mut seen = HashSet::new();
        for (_, words) in seed_catalog() {
            for word in words {
                assert_eq!(*word, word.trim().to_lowercase());
                assert!(seen.insert(*word), "duplicate seed word {word}");
            }
        }
    }

    #[test]
    fn test_is_seed_category() {
        assert!(is_seed_category("mood"));
        assert!(is_seed_category("emotional"));
        assert!(!is_seed_category("descriptive"));
        assert!(!is_seed_category("Mood"));
    }
}
