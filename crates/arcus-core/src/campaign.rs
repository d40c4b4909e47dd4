//! Response shape of the campaign generation backend.
//!
//! ## Observed shape
//!
//! ### Text deliverables
//! Every markdown deliverable (`socialMedia`, `adCopy`, …) may be `null` or
//! absent when the generator skipped it. All of them are modelled as
//! `Option<String>` with `#[serde(default)]`.
//!
//! ### `images`
//! Older backends send a JSON **array** of URLs. Newer ones send an **object**
//! of named slots (`hero`, `socialPost`, `socialStory`, `emailBanner`, …)
//! whose values may be `null` while generation is still pending. Both are
//! accepted through [`ImageSet`].
//!
//! ### `brandContext.json`
//! A JSON document serialized *as a string*. It is parsed separately and may
//! be malformed; this module does not look inside it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::deliverable::{DocumentKind, RawDeliverable};

/// Top-level response from the campaign generation endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignResult {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub campaign_id: Option<String>,

    #[serde(default)]
    pub output_folder: Option<String>,

    /// Long-form brand intelligence report (markdown).
    #[serde(default)]
    pub brand_intelligence: Option<String>,

    #[serde(default)]
    pub deliverables: Deliverables,

    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deliverables {
    #[serde(default)]
    pub strategic_brief: Option<String>,

    #[serde(default)]
    pub social_media: Option<String>,

    #[serde(default)]
    pub email_sequence: Option<String>,

    #[serde(default)]
    pub blog_article: Option<String>,

    #[serde(default)]
    pub ad_copy: Option<String>,

    #[serde(default)]
    pub video_script: Option<String>,

    #[serde(default)]
    pub images: ImageSet,

    #[serde(default)]
    pub video: Option<VideoAsset>,

    #[serde(default)]
    pub brand_context: BrandContext,
}

impl Deliverables {
    /// Returns the raw text for `kind`, if the backend produced any.
    ///
    /// Brand guidelines live at `brandContext.colorsAndFonts`.
    #[must_use]
    pub fn raw(&self, kind: DocumentKind) -> Option<RawDeliverable<'_>> {
        let text = match kind {
            DocumentKind::SocialPosts => self.social_media.as_deref(),
            DocumentKind::AdCopy => self.ad_copy.as_deref(),
            DocumentKind::BrandGuidelines => self.brand_context.colors_and_fonts.as_deref(),
        }?;
        Some(RawDeliverable::new(kind, text))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandContext {
    /// Markdown brand guidelines with color and font declarations.
    #[serde(default)]
    pub colors_and_fonts: Option<String>,

    /// Structured brand data, serialized as a JSON string.
    #[serde(default)]
    pub json: Option<String>,

    /// Image URLs scraped from the analyzed website.
    #[serde(default)]
    pub extracted_images: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoAsset {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Duration in seconds.
    #[serde(default)]
    pub duration: Option<f64>,
}

/// Generated image URLs, in either of the two shapes the backend has used.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageSet {
    List(Vec<String>),
    Named(BTreeMap<String, Option<String>>),
}

impl Default for ImageSet {
    fn default() -> Self {
        ImageSet::List(Vec::new())
    }
}

impl ImageSet {
    /// All non-empty URLs. Named slots come back in key order.
    #[must_use]
    pub fn urls(&self) -> Vec<String> {
        match self {
            ImageSet::List(urls) => urls
                .iter()
                .filter(|u| !u.trim().is_empty())
                .cloned()
                .collect(),
            ImageSet::Named(slots) => slots
                .values()
                .flatten()
                .filter(|u| !u.trim().is_empty())
                .cloned()
                .collect(),
        }
    }
}
