//! Candidate filtering for extracted words.
//!
//! Two independent checks: `is_valid_candidate` drops tokens that cannot be a
//! descriptive word at all (too short, stray characters, function words), and
//! `is_generic_word` drops adjectives too common to say anything about a photo.
//! The generic check is only applied when learning.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Articles, conjunctions, prepositions, auxiliaries, modals, pronouns,
/// demonstratives and function adverbs.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // articles and determiners
        "the", "an", "some", "any", "every", "each", "many", "much", "few", "several", "all",
        "both", "either", "neither", "another", "other", "such",
        // conjunctions
        "and", "but", "nor", "yet", "for", "because", "although", "though", "while", "whether",
        "unless", "since", "until", "whereas",
        // prepositions
        "about", "above", "across", "after", "against", "along", "among", "around", "before",
        "behind", "below", "beneath", "beside", "between", "beyond", "during", "except", "from",
        "inside", "into", "near", "off", "onto", "out", "outside", "over", "past", "through",
        "toward", "towards", "under", "underneath", "upon", "with", "within", "without",
        "via",
        // auxiliary and modal verbs
        "are", "was", "were", "been", "being", "has", "have", "had", "having", "does", "did",
        "doing", "done", "will", "would", "shall", "should", "can", "could", "may", "might",
        "must", "ought",
        // pronouns
        "you", "she", "him", "her", "his", "hers", "its", "our", "ours", "they", "them",
        "their", "theirs", "your", "yours", "who", "whom", "whose", "which", "what",
        "myself", "yourself", "itself", "themselves", "ourselves", "everybody", "everyone",
        "everything", "anything", "something", "nothing", "nobody", "somebody", "anybody",
        // demonstratives
        "this", "that", "these", "those", "here", "there",
        // function adverbs
        "not", "very", "only", "just", "also", "too", "really", "quite", "rather", "ever",
        "never", "always", "often", "already", "again", "away", "however", "together",
        "why", "how", "when", "where", "then", "than", "thus", "hence", "perhaps", "maybe",
        "almost", "nearly", "mostly", "usually", "simply", "actually", "probably", "finally",
    ]
    .into_iter()
    .collect()
});

/// Overused adjectives that carry no descriptive weight.
static GENERIC_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // directionals
        "up", "down", "left", "right", "top", "bottom", "front", "back", "upper", "lower",
        "inner", "outer", "north", "south", "east", "west",
        // size, age and quality in base form
        "big", "small", "large", "little", "tiny", "huge", "long", "short", "tall", "high",
        "low", "old", "new", "young", "good", "bad", "fine", "great", "nice", "best",
        "better", "worse", "worst", "more", "most", "less", "least", "same", "different",
        "first", "last", "next", "real", "sure",
    ]
    .into_iter()
    .collect()
});

/// Lower-case and trim a surface token into its canonical word form.
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Whether a token can be a descriptive word at all.
///
/// Rejects tokens of two characters or fewer, tokens containing anything other
/// than ASCII letters and hyphens, and function words.
pub fn is_valid_candidate(word: &str) -> bool {
    if word.chars().count() <= 2 {
        return false;
    }
    if !word.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
        return false;
    }
    !STOP_WORDS.contains(word.to_ascii_lowercase().as_str())
}

/// Whether a token is too generic to be worth learning.
pub fn is_generic_word(word: &str) -> bool {
    GENERIC_WORDS.contains(word.to_ascii_lowercase().as_str())
}
