//! Typed records produced from generated campaign deliverables.
//!
//! Every record here is a derived value: it is rebuilt from the raw text on
//! each parse call and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// The kinds of markdown deliverable the parser understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    SocialPosts,
    AdCopy,
    BrandGuidelines,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::SocialPosts => write!(f, "social_posts"),
            DocumentKind::AdCopy => write!(f, "ad_copy"),
            DocumentKind::BrandGuidelines => write!(f, "brand_guidelines"),
        }
    }
}

/// One raw deliverable blob as handed over by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawDeliverable<'a> {
    pub kind: DocumentKind,
    pub text: &'a str,
}

impl<'a> RawDeliverable<'a> {
    #[must_use]
    pub fn new(kind: DocumentKind, text: &'a str) -> Self {
        Self { kind, text }
    }
}

/// How a record's platform label was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformSource {
    /// An explicit `Platform:` field that names no known platform.
    Declared,
    /// A known platform, from an explicit field or a heading keyword.
    Matched,
    /// First word of the heading; nothing recognizable was found.
    Fallback,
}

/// Likes/comments/shares shown on a social post card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
    /// `true` when the numbers were synthesized for illustration rather than
    /// reported by the backend.
    pub estimated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialPost {
    pub platform: String,
    pub platform_source: PlatformSource,
    pub content: String,
    /// Deduplicated, first-seen order, each starting with `#`.
    pub hashtags: Vec<String>,
    pub timing: Option<String>,
    pub engagement: Option<Engagement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdCreative {
    pub platform: String,
    pub platform_source: PlatformSource,
    pub headline: String,
    pub body: String,
    pub cta: String,
    pub format: Option<String>,
    pub targeting: Option<String>,
    pub landing_url: Option<String>,
}

/// A `###` block nested under a brand guideline section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidelineSubsection {
    pub title: String,
    pub content: Vec<String>,
}

/// A `##` block of the brand guidelines document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandGuidelineSection {
    pub title: String,
    pub content: Vec<String>,
    /// Source order; titles are unique within a section.
    pub subsections: Vec<GuidelineSubsection>,
}

impl BrandGuidelineSection {
    /// Looks up a subsection by title, ignoring ASCII case.
    #[must_use]
    pub fn subsection(&self, title: &str) -> Option<&GuidelineSubsection> {
        self.subsections
            .iter()
            .find(|s| s.title.eq_ignore_ascii_case(title))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorType {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSwatch {
    pub name: String,
    /// `#` followed by 3 or 6 uppercase hex digits.
    pub hex: String,
    #[serde(rename = "type")]
    pub color_type: ColorType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypographyEntry {
    pub role: String,
    pub value: String,
}
