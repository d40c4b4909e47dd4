//! Color swatches from free-form brand guideline text.
//!
//! A single pass over every line of the raw text, independent of sections.
//! Recognized shapes, several per line when separated by `,`, `;` or `|`:
//!
//! - `Primary: #1A2B3C` (also `=`, `-`, `–` as separator)
//! - `Ocean Blue (#1A2B3C)` and `Primary: Ocean Blue (#1A2B3C)`

use std::collections::HashSet;
use std::sync::LazyLock;

use arcus_core::{ColorSwatch, ColorType};
use regex::Regex;

static SEPARATED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:^|[,;|])\s*(?:(?:[-+•]|\d+[.)])\s+)?([A-Za-z][A-Za-z0-9 '&/\-]{0,39}?)\s*(?::|=|–|-)\s*(#(?:[0-9A-Fa-f]{3}){1,2})\b",
    )
    .expect("valid separated color regex")
});

static PARENTHESIZED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:^|[,;|])\s*(?:(?:[-+•]|\d+[.)])\s+)?(?:([A-Za-z][A-Za-z0-9 '&/\-]{0,39}?)\s*:\s*)?([A-Za-z][A-Za-z0-9 '&/\-]{0,39}?)\s*\(\s*(#(?:[0-9A-Fa-f]{3}){1,2})\s*\)",
    )
    .expect("valid parenthesized color regex")
});

static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?((?:[0-9A-Fa-f]{3}){1,2})$").expect("valid hex regex"));

struct Candidate {
    position: usize,
    name: String,
    hex: String,
    color_type: ColorType,
}

/// Every named color in `text`, first occurrence of each hex value wins.
#[must_use]
pub fn extract_palette(text: &str) -> Vec<ColorSwatch> {
    let mut seen = HashSet::new();
    let mut swatches = Vec::new();

    for line in text.lines() {
        let cleaned: String = line
            .chars()
            .filter(|c| !matches!(c, '*' | '_' | '`'))
            .collect();

        let mut candidates = separated_colors(&cleaned);
        candidates.extend(parenthesized_colors(&cleaned));
        candidates.sort_by_key(|c| c.position);

        for candidate in candidates {
            if seen.insert(candidate.hex.clone()) {
                swatches.push(ColorSwatch {
                    name: candidate.name,
                    hex: candidate.hex,
                    color_type: candidate.color_type,
                });
            }
        }
    }

    swatches
}

fn separated_colors(line: &str) -> Vec<Candidate> {
    SEPARATED_RE
        .captures_iter(line)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str().trim();
            let hex = normalize_hex(caps.get(2)?.as_str())?;
            Some(Candidate {
                position: caps.get(0)?.start(),
                name: name.to_owned(),
                hex,
                color_type: classify_color(name),
            })
        })
        .collect()
}

fn parenthesized_colors(line: &str) -> Vec<Candidate> {
    PARENTHESIZED_RE
        .captures_iter(line)
        .filter_map(|caps| {
            let label = caps.get(1).map_or("", |m| m.as_str().trim());
            let name = caps.get(2)?.as_str().trim();
            let hex = normalize_hex(caps.get(3)?.as_str())?;
            Some(Candidate {
                position: caps.get(0)?.start(),
                name: name.to_owned(),
                hex,
                color_type: classify_color(&format!("{label} {name}")),
            })
        })
        .collect()
}

/// Secondary wins over primary when a name mentions both.
#[must_use]
pub fn classify_color(name: &str) -> ColorType {
    let lower = name.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| lower.contains(w));
    if mentions(&["secondary", "accent", "neutral"]) {
        ColorType::Secondary
    } else if mentions(&["primary", "main", "brand"]) {
        ColorType::Primary
    } else {
        ColorType::Secondary
    }
}

/// `#1a2b3c`, `1A2B3C` or `#abc` → uppercase with a leading `#`.
#[must_use]
pub fn normalize_hex(raw: &str) -> Option<String> {
    let caps = HEX_RE.captures(raw.trim())?;
    Some(format!("#{}", caps.get(1)?.as_str().to_uppercase()))
}
