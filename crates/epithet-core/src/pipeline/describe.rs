//! Enhanced description synthesis.

use crate::types::Photo;

/// Extend the photo's description with its top adjectives.
///
/// Without a description, a stand-in built from the title is used instead.
/// At most `count` adjectives are woven in.
pub fn enhance_description(photo: &Photo, adjectives: &[String], count: usize) -> String {
    let base = match (photo.description_text(), photo.title_text()) {
        (Some(description), _) => description.to_string(),
        (None, Some(title)) => format!("A photo titled \"{title}\"."),
        (None, None) => "A photo.".to_string(),
    };

    let top: Vec<&str> = adjectives.iter().take(count).map(String::as_str).collect();
    if top.is_empty() {
        return base;
    }

    let mut sentence = base;
    if !sentence.ends_with(['.', '!', '?']) {
        sentence.push('.');
    }
    sentence.push_str(" It feels ");
    sentence.push_str(&join_words(&top));
    sentence.push('.');
    sentence
}

/// "a", "a and b", "a, b, and c".
fn join_words(words: &[&str]) -> String {
    match words {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{first} and {second}"),
        [rest @ .., last] => format!("{}, and {last}", rest.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_appends_top_three_to_description() {
        let photo = Photo::new("p1").with_description("A beautiful sunset over the mountains");
        let text = enhance_description(
            &photo,
            &words(&["golden", "warm", "radiant", "glowing"]),
            3,
        );
        assert_eq!(
            text,
            "A beautiful sunset over the mountains. It feels golden, warm, and radiant."
        );
    }

    #[test]
    fn test_title_stand_in() {
        let photo = Photo::new("p1").with_title("Golden Sunset");
        let text = enhance_description(&photo, &words(&["golden", "warm"]), 3);
        assert_eq!(text, "A photo titled \"Golden Sunset\". It feels golden and warm.");
    }

    #[test]
    fn test_no_metadata_stand_in() {
        let photo = Photo::new("p1");
        assert_eq!(
            enhance_description(&photo, &words(&["serene"]), 3),
            "A photo. It feels serene."
        );
    }

    #[test]
    fn test_keeps_existing_punctuation() {
        let photo = Photo::new("p1").with_description("What a view!");
        assert_eq!(
            enhance_description(&photo, &words(&["vast"]), 3),
            "What a view! It feels vast."
        );
    }

    #[test]
    fn test_no_adjectives_returns_base() {
        let photo = Photo::new("p1").with_description("Harbor at dawn");
        assert_eq!(enhance_description(&photo, &[], 3), "Harbor at dawn");
    }
}
