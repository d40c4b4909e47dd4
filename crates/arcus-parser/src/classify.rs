//! Line-local classification of section body lines.
//!
//! Each line is classified on its own, with no lookahead. Label recognition
//! goes through a [`Vocabulary`]; a `Label:` prefix the vocabulary does not
//! know is plain prose.

use std::sync::LazyLock;

use arcus_core::{FieldRole, Vocabulary};
use regex::Regex;

use crate::text::{is_thematic_break, strip_emphasis};

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{1,6})\s+(.+?)(?:\s+#+)?\s*$").expect("valid heading regex")
});

// Optional bullet, optional emphasis around the label, and the colon either
// inside (`**Caption:**`) or outside (`**Caption**:`) the emphasis.
static LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:[-*•+]|\d+[.)])\s+)?[*_]{0,3}\s*([A-Za-z][A-Za-z0-9 /&'()\-]{0,48}?)\s*(?:[*_]{1,3}\s*:|:\s*[*_]{0,3})\s*(.*)$",
    )
    .expect("valid label regex")
});

static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-*•+]|\d+[.)])\s+(.+)$").expect("valid list item regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A vocabulary label with its inline value (trimmed, possibly empty).
    FieldLabel { role: FieldRole, value: String },
    /// Text after the bullet or number marker.
    ListItem(String),
    Heading { level: u8, text: String },
    Prose(String),
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    /// The line as written, minus surrounding whitespace.
    pub raw: &'a str,
    pub kind: LineKind,
}

/// Classifies one line. Without a vocabulary no line is ever a field label.
#[must_use]
pub fn classify_line<'a>(line: &'a str, vocabulary: Option<&Vocabulary>) -> ClassifiedLine<'a> {
    let raw = line.trim();
    ClassifiedLine {
        raw,
        kind: classify_trimmed(raw, vocabulary),
    }
}

fn classify_trimmed(raw: &str, vocabulary: Option<&Vocabulary>) -> LineKind {
    if raw.is_empty() || is_thematic_break(raw) {
        return LineKind::Blank;
    }

    if let Some((level, text)) = parse_heading(raw) {
        return LineKind::Heading {
            level,
            text: text.to_owned(),
        };
    }

    if let Some(vocabulary) = vocabulary {
        if let Some((label, value)) = split_label(raw) {
            if let Some(role) = vocabulary.lookup(label) {
                return LineKind::FieldLabel {
                    role,
                    value: clean_inline_value(value),
                };
            }
        }
    }

    if let Some(caps) = LIST_ITEM_RE.captures(raw) {
        if let Some(item) = caps.get(1) {
            return LineKind::ListItem(item.as_str().trim().to_owned());
        }
    }

    LineKind::Prose(raw.to_owned())
}

/// `(level, text)` for an ATX heading. `#tag` with no space is not a heading.
#[must_use]
pub(crate) fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let caps = HEADING_RE.captures(line.trim())?;
    let hashes = caps.get(1)?.as_str();
    let text = caps.get(2)?.as_str();
    let level = u8::try_from(hashes.len()).ok()?;
    Some((level, text))
}

/// Splits `Label: value` (emphasis and bullet tolerated) into its parts.
/// The label is returned without emphasis; the value untouched.
#[must_use]
pub(crate) fn split_label(line: &str) -> Option<(&str, &str)> {
    let caps = LABEL_RE.captures(line)?;
    let label = caps.get(1)?.as_str().trim();
    let value = caps.get(2).map_or("", |m| m.as_str());
    if label.is_empty() {
        return None;
    }
    Some((label, value))
}

// A value made only of leftover emphasis markers (`**Caption:** **`) is empty.
fn clean_inline_value(value: &str) -> String {
    let value = value.trim();
    if strip_emphasis(value).is_empty() {
        String::new()
    } else {
        value.to_owned()
    }
}
