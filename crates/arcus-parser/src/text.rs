//! Low-level string helpers shared by every parsing stage.
//!
//! Nothing here knows about document kinds or vocabularies.

use std::sync::LazyLock;

use regex::Regex;

static ORDINAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)(?:(?:\.\d+)+(?:[.)]\s*|\s+)|[.):]\s*)(\S.*)$")
        .expect("valid ordinal regex")
});

static LIST_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-*•+]|\d+[.)])\s+").expect("valid list marker regex"));

/// Removes markdown emphasis markers (`*`, `_`) and surrounding whitespace.
#[must_use]
pub(crate) fn strip_emphasis(s: &str) -> String {
    s.replace(['*', '_'], "").trim().to_owned()
}

/// Canonical form of a multi-line value: every line emphasis-stripped and
/// trimmed, empty lines dropped.
#[must_use]
pub(crate) fn canonicalize_lines(s: &str) -> Vec<String> {
    s.lines()
        .map(strip_emphasis)
        .filter(|l| !l.is_empty())
        .collect()
}

/// `---`, `***`, `___` and spaced variants.
#[must_use]
pub(crate) fn is_thematic_break(line: &str) -> bool {
    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    compact.len() >= 3
        && (compact.chars().all(|c| c == '-')
            || compact.chars().all(|c| c == '*')
            || compact.chars().all(|c| c == '_'))
}

/// Splits a leading ordinal off a heading: `"1. Instagram Post"` →
/// `(Some(1), "Instagram Post")`, `"2.1 Color Palette"` → `(Some(2), "Color Palette")`.
///
/// A bare number followed by a word (`"2024 Launch Plan"`) is not an ordinal,
/// and neither is a number glued to its text (`"1.5x Faster"`).
#[must_use]
pub(crate) fn split_ordinal(heading: &str) -> (Option<u32>, &str) {
    let Some(caps) = ORDINAL_RE.captures(heading) else {
        return (None, heading);
    };
    let (Some(number), Some(rest)) = (caps.get(1), caps.get(2)) else {
        return (None, heading);
    };
    let separator = &heading[number.end()..rest.start()];
    let glued = !separator.ends_with(char::is_whitespace)
        && rest.as_str().starts_with(|c: char| c.is_ascii_digit());
    if glued {
        return (None, heading);
    }
    (number.as_str().parse::<u32>().ok(), rest.as_str())
}

/// Drops a leading bullet or numbered-list marker.
#[must_use]
pub(crate) fn strip_list_marker(line: &str) -> &str {
    match LIST_MARKER_RE.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// First `max_chars` characters followed by `...`, used as a teaser line.
#[must_use]
pub(crate) fn teaser(s: &str, max_chars: usize) -> String {
    let cut = s.char_indices().nth(max_chars).map_or(s.len(), |(idx, _)| idx);
    format!("{}...", s[..cut].trim_end())
}

/// First whitespace-delimited word with surrounding punctuation removed.
#[must_use]
pub(crate) fn first_word(s: &str) -> Option<&str> {
    s.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .find(|w| !w.is_empty())
}

/// `None` for absent, empty, or whitespace-only input.
#[must_use]
pub(crate) fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_emphasis_removes_markers_and_trims() {
        assert_eq!(strip_emphasis("  **Bold** and _italic_ "), "Bold and italic");
    }

    #[test]
    fn canonicalize_lines_drops_empty_lines() {
        assert_eq!(
            canonicalize_lines("**One**\n\n  two  \n**"),
            vec!["One".to_owned(), "two".to_owned()]
        );
    }

    #[test]
    fn thematic_breaks() {
        assert!(is_thematic_break("---"));
        assert!(is_thematic_break(" * * * "));
        assert!(is_thematic_break("_____"));
        assert!(!is_thematic_break("--"));
        assert!(!is_thematic_break("-*-"));
        assert!(!is_thematic_break("- item"));
    }

    #[test]
    fn split_ordinal_dot() {
        assert_eq!(split_ordinal("1. Instagram Post"), (Some(1), "Instagram Post"));
    }

    #[test]
    fn split_ordinal_paren_and_nested() {
        assert_eq!(split_ordinal("3) Reel"), (Some(3), "Reel"));
        assert_eq!(split_ordinal("2.1 Color Palette"), (Some(2), "Color Palette"));
    }

    #[test]
    fn split_ordinal_ignores_plain_numbers() {
        assert_eq!(split_ordinal("2024 Launch Plan"), (None, "2024 Launch Plan"));
        assert_eq!(split_ordinal("Post 1"), (None, "Post 1"));
        assert_eq!(
            split_ordinal("1.5x Faster Growth"),
            (None, "1.5x Faster Growth")
        );
    }

    #[test]
    fn strip_list_marker_variants() {
        assert_eq!(strip_list_marker("- item"), "item");
        assert_eq!(strip_list_marker("• item"), "item");
        assert_eq!(strip_list_marker("12) item"), "item");
        assert_eq!(strip_list_marker("**bold**"), "**bold**");
    }

    #[test]
    fn teaser_always_ends_with_ellipsis() {
        assert_eq!(teaser("short", 50), "short...");
        assert_eq!(teaser("abcdef", 3), "abc...");
    }

    #[test]
    fn teaser_is_char_aware() {
        assert_eq!(teaser("café crème", 4), "café...");
    }

    #[test]
    fn first_word_skips_punctuation() {
        assert_eq!(first_word("  Snapchat: Story"), Some("Snapchat"));
        assert_eq!(first_word("— Pinterest"), Some("Pinterest"));
        assert_eq!(first_word("  "), None);
    }

    #[test]
    fn non_blank_filters_whitespace() {
        assert_eq!(non_blank(Some(" x ")), Some(" x "));
        assert!(non_blank(Some(" \n\t")).is_none());
        assert!(non_blank(None).is_none());
    }
}
