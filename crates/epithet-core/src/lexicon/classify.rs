//! Keyword-bucket category classification.
//!
//! This is deliberately approximate: each seed category owns a hand-picked
//! keyword list, checked in a fixed priority order. Words outside every list
//! fall back to a category derived from where they were learned.

use super::filter::normalize;

/// Context label for photo titles.
pub const CONTEXT_TITLE: &str = "title";
/// Context label for photo descriptions.
pub const CONTEXT_DESCRIPTION: &str = "description";
/// Context label for photo tags.
pub const CONTEXT_TAG: &str = "tag";

/// Fallback category for words learned from prose.
pub const DESCRIPTIVE: &str = "descriptive";
/// Fallback category for words learned from tags.
pub const CATEGORIZED: &str = "categorized";

/// Keyword buckets in priority order. First match wins.
const KEYWORD_BUCKETS: &[(&str, &[&str])] = &[
    (
        "mood",
        &[
            "serene", "peaceful", "tranquil", "calm", "quiet", "dramatic", "moody", "gloomy",
            "melancholic", "melancholy", "cheerful", "somber", "sombre", "whimsical",
            "nostalgic", "playful", "mysterious", "eerie", "dreamy", "relaxed", "restful",
            "tense", "brooding", "lively",
        ],
    ),
    (
        "visual",
        &[
            "vibrant", "colorful", "colourful", "bright", "brighter", "brightest", "vivid",
            "luminous", "radiant", "glowing", "golden", "shadowy", "crisp", "sharp", "blurry",
            "hazy", "misty", "foggy", "textured", "glossy", "matte", "minimalist", "monochrome",
            "saturated", "faded", "shimmering", "sparkling", "dark", "darker", "darkest",
            "soft", "softer", "contrasty", "sunlit", "backlit",
        ],
    ),
    (
        "temporal",
        &[
            "timeless", "vintage", "ancient", "antique", "modern", "futuristic", "historic",
            "historical", "fleeting", "seasonal", "nocturnal", "contemporary", "classic",
            "retro", "momentary", "early", "earlier", "late", "later", "eternal", "aged",
            "weathered", "wintry", "autumnal", "summery",
        ],
    ),
    (
        "spatial",
        &[
            "vast", "expansive", "intimate", "panoramic", "towering", "sprawling", "secluded",
            "remote", "layered", "distant", "enclosed", "narrow", "wide", "wider", "widest",
            "deep", "deeper", "deepest", "elevated", "aerial", "spacious", "cramped",
            "endless", "boundless", "open",
        ],
    ),
    (
        "emotional",
        &[
            "heartwarming", "inspiring", "uplifting", "poignant", "touching", "tender",
            "romantic", "hopeful", "passionate", "soulful", "joyful", "joyous", "lonely",
            "sad", "happy", "happier", "happiest", "loving", "emotional", "moving",
            "haunting", "bittersweet", "comforting", "powerful",
        ],
    ),
];

/// Assign a category to an accepted word.
///
/// Pure: consults only the word and its context, never the live vocabulary.
pub fn classify(word: &str, context: &str) -> &'static str {
    let word = normalize(word);
    KEYWORD_BUCKETS
        .iter()
        .find(|(_, keywords)| keywords.contains(&word.as_str()))
        .map(|(category, _)| *category)
        .unwrap_or_else(|| fallback_category(context))
}

/// Category used when no keyword bucket matches.
fn fallback_category(context: &str) -> &'static str {
    // title, description and caller-supplied labels all read as prose
    if normalize(context) == CONTEXT_TAG {
        CATEGORIZED
    } else {
        DESCRIPTIVE
    }
}
