//! Rule-based thematic words.
//!
//! Each rule pairs a theme marker pattern with a fixed word bundle. The
//! bundles are hand-picked and kept verbatim so output stays stable across
//! vocabulary changes.

use once_cell::sync::Lazy;
use regex::Regex;

struct ThemeRule {
    marker: Regex,
    words: &'static [&'static str],
}

static THEME_RULES: Lazy<Vec<ThemeRule>> = Lazy::new(|| {
    let rule = |pattern: &str, words: &'static [&'static str]| ThemeRule {
        marker: Regex::new(pattern).expect("theme marker is valid"),
        words,
    };
    vec![
        rule(r"(?i)sunset|sunrise", &["golden", "warm", "radiant", "glowing"]),
        rule(r"(?i)night|dark", &["mysterious", "shadowy", "ethereal"]),
        rule(
            r"(?i)nature|forest|mountain",
            &["natural", "organic", "serene", "majestic"],
        ),
        rule(
            r"(?i)city|urban|street",
            &["urban", "dynamic", "bustling", "modern"],
        ),
        rule(
            r"(?i)water|ocean|river|lake",
            &["fluid", "reflective", "tranquil", "flowing"],
        ),
    ]
});

/// Words contributed by every theme whose marker appears in `text`, in rule order.
pub fn thematic_words(text: &str) -> Vec<&'static str> {
    THEME_RULES
        .iter()
        .filter(|rule| rule.marker.is_match(text))
        .flat_map(|rule| rule.words.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sunset_theme() {
        let words = thematic_words("Golden Sunset");
        assert_eq!(words, vec!["golden", "warm", "radiant", "glowing"]);
    }

    #[test]
    fn test_night_theme() {
        for text in ["Night sky", "a DARK alley"] {
            let words = thematic_words(text);
            assert!(words.starts_with(&["mysterious", "shadowy", "ethereal"]), "{text}");
        }
    }

    #[test]
    fn test_multiple_themes_fire_in_rule_order() {
        let words = thematic_words("sunrise over the lake in the mountains");
        assert_eq!(words[..4], ["golden", "warm", "radiant", "glowing"]);
        assert!(words.contains(&"majestic"));
        assert_eq!(words.last(), Some(&"flowing"));
    }

    #[test]
    fn test_no_theme() {
        assert!(thematic_words("portrait of a cat").is_empty());
        assert!(thematic_words("").is_empty());
    }
}
