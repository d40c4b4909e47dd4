//! Font roles from brand guideline text.
//!
//! Two passes over the raw text. The first reads label/value pairs inside any
//! block whose heading mentions "typography". The second picks up
//! `Primary Font: …`-style lines anywhere else. A role seen twice keeps its
//! first value.

use std::collections::HashSet;
use std::sync::LazyLock;

use arcus_core::TypographyEntry;
use regex::Regex;

use crate::classify::{parse_heading, split_label};
use crate::text::{is_thematic_break, strip_emphasis, strip_list_marker};

static FONT_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:(?:[-•+]|\d+[.)])\s+)?((?:primary|secondary|heading|headings|body|accent|display)\s+font(?:\s+family)?)\s*:\s*(.+)$",
    )
    .expect("valid font line regex")
});

#[derive(Default)]
struct Entries {
    seen: HashSet<String>,
    entries: Vec<TypographyEntry>,
}

impl Entries {
    fn push(&mut self, role: &str, value: &str) {
        let role = strip_emphasis(role);
        let value = strip_emphasis(value);
        if role.is_empty() || value.is_empty() {
            return;
        }
        if self.seen.insert(role.to_lowercase()) {
            self.entries.push(TypographyEntry { role, value });
        }
    }
}

#[must_use]
pub fn extract_typography(text: &str) -> Vec<TypographyEntry> {
    let mut entries = Entries::default();
    typography_block_pass(text, &mut entries);
    font_line_pass(text, &mut entries);
    entries.entries
}

fn typography_block_pass(text: &str, entries: &mut Entries) {
    let mut block_level: Option<u8> = None;
    let mut pending_role: Option<String> = None;

    for line in text.lines() {
        if let Some((level, heading)) = parse_heading(line) {
            if heading.to_lowercase().contains("typography") {
                block_level = Some(level);
                pending_role = None;
            } else if block_level.is_some_and(|block| level <= block) {
                block_level = None;
                pending_role = None;
            } else if block_level.is_some() {
                // `#### Headings` inside the block names the role of the next line.
                pending_role = Some(strip_emphasis(heading));
            }
            continue;
        }

        if block_level.is_none() || line.trim().is_empty() || is_thematic_break(line) {
            continue;
        }

        if let Some((role, value)) = split_label(line.trim()) {
            if strip_emphasis(value).is_empty() {
                pending_role = Some(role.to_owned());
            } else {
                entries.push(role, value);
                pending_role = None;
            }
        } else if let Some(role) = pending_role.take() {
            entries.push(&role, strip_list_marker(line.trim()));
        }
    }
}

fn font_line_pass(text: &str, entries: &mut Entries) {
    for line in text.lines() {
        let cleaned = strip_emphasis(line);
        if let Some(caps) = FONT_LINE_RE.captures(&cleaned) {
            if let (Some(role), Some(value)) = (caps.get(1), caps.get(2)) {
                entries.push(role.as_str(), value.as_str());
            }
        }
    }
}
