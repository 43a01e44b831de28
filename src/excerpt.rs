//! Excerpt derivation from markdown bodies.
//!
//! Used when a content item carries no explicit excerpt override: the body
//! is stripped of markdown punctuation and cut to a character budget.

use once_cell::sync::Lazy;
use regex::Regex;

static MARKDOWN_SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[#*`_~\[\]()]+").expect("valid markdown symbol regex"));

/// Default excerpt length in characters.
pub const DEFAULT_EXCERPT_LEN: usize = 160;

/// Derives a plain-text excerpt from a markdown body.
///
/// Strips markdown punctuation characters, trims, and returns the text
/// whole when it fits within `max_len` characters. Longer text is cut at
/// the budget, trimmed, and suffixed with `...`.
///
/// # Arguments
///
/// * `body`: Markdown source to summarize
/// * `max_len`: Character budget before truncation
///
/// # Returns
///
/// Plain-text excerpt, possibly empty for an empty body
pub fn derive_excerpt(body: &str, max_len: usize) -> String {
    let plain = MARKDOWN_SYMBOL_RE.replace_all(body, "");
    let plain = plain.trim();

    if plain.chars().count() <= max_len {
        return plain.to_string();
    }

    let cut: String = plain.chars().take(max_len).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_body_returned_whole() {
        // Arrange
        let body = "A short introduction.";

        // Act
        let excerpt = derive_excerpt(body, DEFAULT_EXCERPT_LEN);

        // Assert
        assert_eq!(excerpt, "A short introduction.");
    }

    #[test]
    fn test_markdown_punctuation_stripped() {
        // Arrange
        let body = "# Heading\n\nSome **bold** and `code` and [a link](https://example.com).";

        // Act
        let excerpt = derive_excerpt(body, DEFAULT_EXCERPT_LEN);

        // Assert
        assert!(!excerpt.contains('#'), "Headings markers stripped: {}", excerpt);
        assert!(!excerpt.contains('*'), "Emphasis markers stripped: {}", excerpt);
        assert!(!excerpt.contains('`'), "Code markers stripped: {}", excerpt);
        assert!(!excerpt.contains('['), "Link brackets stripped: {}", excerpt);
        assert!(excerpt.contains("bold"), "Text content kept: {}", excerpt);
    }

    #[test]
    fn test_long_body_truncated_with_ellipsis() {
        // Arrange
        let body = "word ".repeat(100);

        // Act
        let excerpt = derive_excerpt(&body, 20);

        // Assert
        assert!(excerpt.ends_with("..."), "Truncated excerpt ends with ellipsis");
        assert!(
            excerpt.chars().count() <= 23,
            "Excerpt respects budget plus ellipsis: {} chars",
            excerpt.chars().count()
        );
    }

    #[test]
    fn test_truncation_trims_trailing_whitespace_before_ellipsis() {
        // Arrange: budget lands on a space
        let body = "one two three four five";

        // Act
        let excerpt = derive_excerpt(body, 8);

        // Assert
        assert_eq!(excerpt, "one two...", "No space before the ellipsis");
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        // Arrange: multibyte characters near the cut must not split
        let body = "\u{e9}".repeat(200);

        // Act
        let excerpt = derive_excerpt(&body, 10);

        // Assert
        assert_eq!(excerpt.chars().count(), 13, "10 characters plus ellipsis");
    }

    #[test]
    fn test_empty_body_yields_empty_excerpt() {
        assert_eq!(derive_excerpt("", DEFAULT_EXCERPT_LEN), "");
    }
}
