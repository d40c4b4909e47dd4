//! Heuristics that fill in and canonicalize extracted field values.

use std::collections::HashSet;
use std::sync::LazyLock;

use arcus_core::PlatformSource;
use regex::Regex;

use crate::text::{first_word, strip_emphasis, strip_list_marker};

static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("valid hashtag regex"));

static BRACKETED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([^\[\]]{1,40})\]$").expect("valid bracketed cta regex"));

static HEADING_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^()]+)\)\s*$").expect("valid heading suffix regex"));

pub(crate) const DEFAULT_CTA: &str = "Learn More";

/// Platforms recognized by keyword, in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Instagram,
    Facebook,
    Twitter,
    LinkedIn,
    TikTok,
    YouTube,
    Pinterest,
    Google,
}

enum Keyword {
    /// Anywhere in the text, case-insensitive.
    Substring(&'static str),
    /// A whole alphanumeric token.
    Word(&'static str),
}

impl Platform {
    pub const ALL: [Platform; 8] = [
        Platform::Instagram,
        Platform::Facebook,
        Platform::Twitter,
        Platform::LinkedIn,
        Platform::TikTok,
        Platform::YouTube,
        Platform::Pinterest,
        Platform::Google,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::Twitter => "Twitter",
            Platform::LinkedIn => "LinkedIn",
            Platform::TikTok => "TikTok",
            Platform::YouTube => "YouTube",
            Platform::Pinterest => "Pinterest",
            Platform::Google => "Google",
        }
    }

    fn keywords(self) -> &'static [Keyword] {
        match self {
            Platform::Instagram => &[Keyword::Substring("instagram"), Keyword::Word("ig")],
            Platform::Facebook => &[
                Keyword::Substring("facebook"),
                Keyword::Word("meta"),
                Keyword::Word("fb"),
            ],
            Platform::Twitter => &[
                Keyword::Substring("twitter"),
                Keyword::Substring("x.com"),
                Keyword::Substring("tweet"),
                Keyword::Word("x"),
            ],
            Platform::LinkedIn => &[Keyword::Substring("linkedin")],
            Platform::TikTok => &[Keyword::Substring("tiktok"), Keyword::Substring("tik tok")],
            Platform::YouTube => &[Keyword::Substring("youtube")],
            Platform::Pinterest => &[Keyword::Substring("pinterest")],
            Platform::Google => &[Keyword::Substring("google")],
        }
    }

    /// Looks up a platform from its label or any of its keywords.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Platform> {
        match_platform(name)
    }
}

/// First platform, in priority order, with a keyword in `text`.
#[must_use]
pub fn match_platform(text: &str) -> Option<Platform> {
    let lower = text.to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    Platform::ALL.into_iter().find(|platform| {
        platform.keywords().iter().any(|keyword| match keyword {
            Keyword::Substring(needle) => lower.contains(needle),
            Keyword::Word(word) => words.contains(word),
        })
    })
}

/// Result of platform inference for one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformMatch {
    /// A known platform.
    Matched(Platform),
    /// An explicit platform field naming something unrecognized, verbatim.
    Declared(String),
    /// First word of the heading.
    Fallback(String),
}

impl PlatformMatch {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            PlatformMatch::Matched(platform) => platform.label(),
            PlatformMatch::Declared(name) | PlatformMatch::Fallback(name) => name,
        }
    }

    #[must_use]
    pub fn source(&self) -> PlatformSource {
        match self {
            PlatformMatch::Matched(_) => PlatformSource::Matched,
            PlatformMatch::Declared(_) => PlatformSource::Declared,
            PlatformMatch::Fallback(_) => PlatformSource::Fallback,
        }
    }
}

/// Explicit field, then heading keywords, then context keywords, then the
/// heading's first word. `None` only when the heading is empty too.
#[must_use]
pub fn infer_platform(
    explicit: Option<&str>,
    heading: &str,
    context: Option<&str>,
) -> Option<PlatformMatch> {
    if let Some(explicit) = explicit {
        let declared = strip_emphasis(explicit);
        let declared = declared.trim_matches(|c: char| c == ':' || c == '-' || c.is_whitespace());
        if !declared.is_empty() {
            return Some(match match_platform(declared) {
                Some(platform) => PlatformMatch::Matched(platform),
                None => PlatformMatch::Declared(declared.to_owned()),
            });
        }
    }

    if let Some(platform) = match_platform(heading) {
        return Some(PlatformMatch::Matched(platform));
    }
    if let Some(platform) = context.and_then(match_platform) {
        return Some(PlatformMatch::Matched(platform));
    }

    first_word(heading).map(|word| PlatformMatch::Fallback(word.to_owned()))
}

/// `#\w+` matches in order, deduplicated ignoring case; the first spelling wins.
#[must_use]
pub fn extract_hashtags(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    HASHTAG_RE
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches('_'))
        .filter(|tag| tag.len() > 1)
        .filter(|tag| seen.insert(tag.to_lowercase()))
        .map(str::to_owned)
        .collect()
}

/// A line made only of hashtags, e.g. `#launch #new`.
#[must_use]
pub(crate) fn is_hashtag_line(line: &str) -> bool {
    let cleaned = strip_emphasis(strip_list_marker(line.trim()));
    let mut tokens = cleaned.split_whitespace().peekable();
    tokens.peek().is_some()
        && tokens.all(|t| t.len() > 1 && t.starts_with('#') && !t[1..].starts_with('#'))
}

/// Integer counts as written on a card: `2345`, `2,345`, `1.2k`, `3M`.
#[must_use]
pub(crate) fn parse_count(raw: &str) -> Option<u32> {
    let cleaned = strip_emphasis(raw);
    let token = cleaned.split_whitespace().next()?.replace(',', "").to_lowercase();

    let (number, multiplier) = if let Some(n) = token.strip_suffix('k') {
        (n, 1_000u32)
    } else if let Some(n) = token.strip_suffix('m') {
        (n, 1_000_000u32)
    } else {
        (token.as_str(), 1u32)
    };

    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    let mut total = whole.parse::<u32>().ok()?.checked_mul(multiplier)?;

    let mut scale = multiplier;
    for digit in fraction.chars() {
        let digit = digit.to_digit(10)?;
        scale /= 10;
        total = total.checked_add(digit * scale)?;
    }
    Some(total)
}

/// `[Get Started]` on a line of its own, read as a button label. Link-like
/// or label-like brackets are not buttons.
#[must_use]
pub(crate) fn bracketed_cta(line: &str) -> Option<String> {
    let cleaned = strip_emphasis(strip_list_marker(line.trim()));
    let caps = BRACKETED_RE.captures(&cleaned)?;
    let inner = caps.get(1)?.as_str().trim();
    if inner.is_empty() || inner.contains(':') || inner.eq_ignore_ascii_case("link") {
        return None;
    }
    Some(inner.to_owned())
}

/// `Ad 1 (Carousel)` → `Carousel`.
#[must_use]
pub(crate) fn format_from_heading(heading: &str) -> Option<String> {
    let caps = HEADING_SUFFIX_RE.captures(heading)?;
    let inner = caps.get(1)?.as_str().trim();
    (!inner.is_empty()).then(|| inner.to_owned())
}

/// Cleans a free-standing headline line: bullet, emphasis and wrapping
/// quotes removed.
#[must_use]
pub(crate) fn clean_headline(line: &str) -> String {
    strip_emphasis(strip_list_marker(line.trim()))
        .trim_matches(|c: char| matches!(c, '"' | '\'' | '“' | '”' | '‘' | '’'))
        .trim()
        .to_owned()
}

/// URLs keep their underscores; only wrapping emphasis and angle brackets go.
#[must_use]
pub(crate) fn clean_url(value: &str) -> String {
    value
        .trim()
        .trim_matches(|c: char| matches!(c, '*' | '<' | '>' | '`'))
        .trim()
        .to_owned()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
