//! Word and character counts for the editor status bar.

/// Number of whitespace-separated words in `text`.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of characters (Unicode scalar values) in `text`.
pub fn count_characters(text: &str) -> usize {
    text.chars().count()
}

/// Formats `count` with the singular or plural noun, e.g. `"1 word"`, `"3 words"`.
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_with_double_space() {
        let text = "one two  three";
        assert_eq!(count_words(text), 3);
        assert_eq!(count_characters(text), 14);
    }

    #[test]
    fn test_blank_text_has_no_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("  \n\t "), 0);
        assert_eq!(count_characters("  \n\t "), 5);
    }

    #[test]
    fn test_characters_are_not_bytes() {
        assert_eq!(count_characters("naïve ✨"), 7);
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "word", "words"), "1 word");
        assert_eq!(pluralize(0, "word", "words"), "0 words");
        assert_eq!(pluralize(14, "character", "characters"), "14 characters");
    }
}
