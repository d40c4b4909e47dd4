//! Field vocabularies: which `Label:` spellings map to which record field.
//!
//! The generator's labelling drifts between versions (`Caption:` vs `Copy:`,
//! `Primary Text:` vs `Body:`). Drift is absorbed here, as data, instead of in
//! the extraction code. Built-in tables can be replaced per kind from a YAML
//! file:
//!
//! ```yaml
//! social_posts:
//!   content_role: content
//!   joiner: newline
//!   fields:
//!     - role: content
//!       labels: [Caption, Copy]
//!     - role: hashtags
//!       labels: [Hashtags]
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::deliverable::DocumentKind;
use crate::ConfigError;

/// Canonical record field a label resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRole {
    Platform,
    Content,
    Hashtags,
    Timing,
    Likes,
    Comments,
    Shares,
    Headline,
    Body,
    Cta,
    Format,
    Targeting,
    LandingUrl,
    /// Metadata lines (`Visual:`, `Image Idea:`) that belong to no field and
    /// are dropped.
    Ignore,
}

impl std::fmt::Display for FieldRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FieldRole::Platform => "platform",
            FieldRole::Content => "content",
            FieldRole::Hashtags => "hashtags",
            FieldRole::Timing => "timing",
            FieldRole::Likes => "likes",
            FieldRole::Comments => "comments",
            FieldRole::Shares => "shares",
            FieldRole::Headline => "headline",
            FieldRole::Body => "body",
            FieldRole::Cta => "cta",
            FieldRole::Format => "format",
            FieldRole::Targeting => "targeting",
            FieldRole::LandingUrl => "landing_url",
            FieldRole::Ignore => "ignore",
        };
        f.write_str(name)
    }
}

const SOCIAL_ROLES: &[FieldRole] = &[
    FieldRole::Platform,
    FieldRole::Content,
    FieldRole::Hashtags,
    FieldRole::Timing,
    FieldRole::Likes,
    FieldRole::Comments,
    FieldRole::Shares,
    FieldRole::Ignore,
];

const AD_ROLES: &[FieldRole] = &[
    FieldRole::Platform,
    FieldRole::Headline,
    FieldRole::Body,
    FieldRole::Cta,
    FieldRole::Format,
    FieldRole::Targeting,
    FieldRole::LandingUrl,
    FieldRole::Ignore,
];

/// Separator used when a multi-line content field accumulates lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Joiner {
    #[default]
    Newline,
    Space,
}

impl Joiner {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Joiner::Newline => "\n",
            Joiner::Space => " ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLabels {
    pub role: FieldRole,
    pub labels: Vec<String>,
}

/// Label table for one document kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// The one free-text field allowed to span several lines.
    pub content_role: FieldRole,
    #[serde(default)]
    pub joiner: Joiner,
    pub fields: Vec<FieldLabels>,
}

fn labels(role: FieldRole, names: &[&str]) -> FieldLabels {
    FieldLabels {
        role,
        labels: names.iter().map(|s| (*s).to_owned()).collect(),
    }
}

impl Vocabulary {
    /// Built-in table for social media posts.
    #[must_use]
    pub fn social_posts() -> Self {
        Self {
            content_role: FieldRole::Content,
            joiner: Joiner::Newline,
            fields: vec![
                labels(FieldRole::Platform, &["Platform", "Channel", "Network"]),
                labels(
                    FieldRole::Content,
                    &["Caption", "Copy", "Content", "Post", "Post Copy", "Text", "Body"],
                ),
                labels(FieldRole::Hashtags, &["Hashtags", "Tags"]),
                labels(
                    FieldRole::Timing,
                    &[
                        "Suggested Posting Time",
                        "Posting Time",
                        "Best Time to Post",
                        "Timing",
                        "Time",
                        "Schedule",
                    ],
                ),
                labels(FieldRole::Likes, &["Likes"]),
                labels(FieldRole::Comments, &["Comments"]),
                labels(FieldRole::Shares, &["Shares"]),
                labels(
                    FieldRole::Ignore,
                    &["Visual", "Visual Suggestion", "Image Idea", "Graphic"],
                ),
            ],
        }
    }

    /// Built-in table for paid ad copy.
    #[must_use]
    pub fn ad_copy() -> Self {
        Self {
            content_role: FieldRole::Body,
            joiner: Joiner::Newline,
            fields: vec![
                labels(FieldRole::Platform, &["Platform", "Channel", "Network"]),
                labels(FieldRole::Headline, &["Headline", "Title"]),
                labels(
                    FieldRole::Body,
                    &[
                        "Body",
                        "Primary Text",
                        "Text",
                        "Copy",
                        "Ad Copy",
                        "Body Copy",
                        "Description",
                    ],
                ),
                labels(FieldRole::Cta, &["CTA", "Call to Action", "Button"]),
                labels(FieldRole::Format, &["Format", "Ad Format"]),
                labels(FieldRole::Targeting, &["Targeting", "Audience", "Target Audience"]),
                labels(FieldRole::LandingUrl, &["Final URL", "Landing Page", "URL"]),
                labels(FieldRole::Ignore, &["Visual", "Visual Suggestion", "Image Idea"]),
            ],
        }
    }

    /// Resolves a label as written in the text (`"Headline 1"`,
    /// `"call-to-action"`) to its role.
    #[must_use]
    pub fn lookup(&self, label: &str) -> Option<FieldRole> {
        let wanted = normalize_label(label);
        if wanted.is_empty() {
            return None;
        }
        self.fields
            .iter()
            .find(|f| f.labels.iter().any(|l| normalize_label(l) == wanted))
            .map(|f| f.role)
    }

    #[must_use]
    pub fn is_content(&self, role: FieldRole) -> bool {
        self.content_role == role
    }
}

/// Lowercases, folds `-`/`_` to spaces, collapses whitespace and drops a
/// trailing ordinal (`"Headline 2"` → `"headline"`).
#[must_use]
pub fn normalize_label(label: &str) -> String {
    let folded = label.to_lowercase().replace(['-', '_'], " ");
    let mut words: Vec<&str> = folded.split_whitespace().collect();
    if words.len() > 1 && words.last().is_some_and(|w| w.chars().all(|c| c.is_ascii_digit())) {
        words.pop();
    }
    words.join(" ")
}

/// Vocabularies for the record-producing document kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularySet {
    pub social_posts: Vocabulary,
    pub ad_copy: Vocabulary,
}

impl Default for VocabularySet {
    fn default() -> Self {
        Self {
            social_posts: Vocabulary::social_posts(),
            ad_copy: Vocabulary::ad_copy(),
        }
    }
}

/// On-disk override file. Kinds left out keep their built-in table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VocabularyFile {
    #[serde(default)]
    pub social_posts: Option<Vocabulary>,
    #[serde(default)]
    pub ad_copy: Option<Vocabulary>,
}

/// Load, validate and merge a vocabulary override file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_vocabulary(path: &Path) -> Result<VocabularySet, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::VocabularyFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_vocabulary(&content)
}

/// Parse, validate and merge vocabulary YAML held in memory.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_vocabulary(yaml: &str) -> Result<VocabularySet, ConfigError> {
    let file: VocabularyFile = serde_yaml::from_str(yaml).map_err(ConfigError::VocabularyFileParse)?;

    let mut set = VocabularySet::default();
    if let Some(social) = file.social_posts {
        validate_vocabulary(DocumentKind::SocialPosts, &social, SOCIAL_ROLES)?;
        set.social_posts = social;
    }
    if let Some(ads) = file.ad_copy {
        validate_vocabulary(DocumentKind::AdCopy, &ads, AD_ROLES)?;
        set.ad_copy = ads;
    }
    Ok(set)
}

fn validate_vocabulary(
    kind: DocumentKind,
    vocabulary: &Vocabulary,
    allowed: &[FieldRole],
) -> Result<(), ConfigError> {
    if vocabulary.content_role == FieldRole::Ignore
        || !allowed.contains(&vocabulary.content_role)
    {
        return Err(ConfigError::Validation(format!(
            "{kind}: content_role '{}' is not a {kind} field",
            vocabulary.content_role
        )));
    }
    if !vocabulary
        .fields
        .iter()
        .any(|f| f.role == vocabulary.content_role)
    {
        return Err(ConfigError::Validation(format!(
            "{kind}: content_role '{}' has no labels",
            vocabulary.content_role
        )));
    }

    let mut seen: HashMap<String, FieldRole> = HashMap::new();
    for field in &vocabulary.fields {
        if !allowed.contains(&field.role) {
            return Err(ConfigError::Validation(format!(
                "{kind}: role '{}' is not a {kind} field",
                field.role
            )));
        }
        if field.labels.is_empty() {
            return Err(ConfigError::Validation(format!(
                "{kind}: role '{}' must list at least one label",
                field.role
            )));
        }
        for label in &field.labels {
            let key = normalize_label(label);
            if key.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{kind}: role '{}' has an empty label",
                    field.role
                )));
            }
            if let Some(previous) = seen.insert(key, field.role) {
                return Err(ConfigError::Validation(format!(
                    "{kind}: label '{label}' is claimed by both '{previous}' and '{}'",
                    field.role
                )));
            }
        }
    }

    Ok(())
}
