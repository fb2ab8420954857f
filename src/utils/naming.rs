/// Clean a name for use in filenames
pub fn clean_name(name: &str) -> String {
    // Replace invalid filename characters with underscores
    let invalid_chars = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];
    let mut cleaned = name.to_string();

    for c in invalid_chars {
        cleaned = cleaned.replace(c, "_");
    }

    cleaned = cleaned.trim().trim_matches('.').to_string();

    if cleaned.is_empty() {
        cleaned = "Unknown".to_string();
    }

    cleaned
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Collapse a raw document excerpt into readable words
///
/// Anything that is not a word character or a hyphen becomes a space, and runs
/// of spaces collapse to one.
pub fn clean_snippet(raw: &str) -> String {
    raw.chars()
        .map(|c| if is_word_char(c) || c == '-' { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize a candidate font name, rejecting ones too short to be meaningful
pub fn clean_font_name(name: &str) -> Option<String> {
    let cleaned = name
        .chars()
        .filter(|&c| is_word_char(c) || c == '-' || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if cleaned.chars().count() > 2 {
        Some(cleaned)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_name_replaces_invalid_characters() {
        assert_eq!(clean_name("design:v2/final?.psd"), "design_v2_final_.psd");
        assert_eq!(clean_name(" ... "), "Unknown");
    }

    #[test]
    fn clean_snippet_collapses_noise() {
        assert_eq!(clean_snippet("/Name (\u{FFFD}Aviano-Sans)\n\n  Bold"), "Name Aviano-Sans Bold");
        assert_eq!(clean_snippet("\u{1}\u{2}"), "");
    }

    #[test]
    fn clean_font_name_filters() {
        assert_eq!(
            clean_font_name("  Myriad   Pro-Regular;"),
            Some("Myriad Pro-Regular".to_string())
        );
        assert_eq!(clean_font_name("(A)"), None);
    }
}
