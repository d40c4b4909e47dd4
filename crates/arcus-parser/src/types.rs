//! Parser outputs.
//!
//! ## Observed generator output
//!
//! ### Social posts
//! One `##`/`###` heading per post, usually `Post N: Platform` or
//! `N. Platform Post`. Older runs label fields (`**Caption:**`,
//! `**Hashtags:**`); newer runs write the caption as plain paragraphs with a
//! trailing hashtag line and no labels at all.
//!
//! ### Ad copy
//! Either one `##` per platform with `###` ads beneath (`## Google Search Ads`
//! then `### Ad 1`), or a flat list of `## Facebook Ad (Carousel)` headings.
//! Headlines are sometimes numbered (`Headline 1:`, `Headline 2:`); only the
//! first is kept. Unlabeled ads put the headline first, then body paragraphs,
//! then a `[Button]` line.
//!
//! ### Brand guidelines
//! A `#` title, `##` sections, `###` subsections. Colors and fonts appear both
//! inside a `### Color Palette` / `### Typography` block and scattered through
//! prose, which is why they are extracted by whole-text passes.

use arcus_core::{AdCreative, BrandGuidelineSection, ColorSwatch, SocialPost, TypographyEntry};
use serde::Serialize;

use crate::brand::BrandDataOutcome;

/// Everything extracted from the brand guidelines text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BrandGuidelines {
    pub sections: Vec<BrandGuidelineSection>,
    pub palette: Vec<ColorSwatch>,
    pub typography: Vec<TypographyEntry>,
}

/// Result of parsing one raw deliverable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "records", rename_all = "snake_case")]
pub enum ParsedDeliverable {
    SocialPosts(Vec<SocialPost>),
    AdCopy(Vec<AdCreative>),
    BrandGuidelines(BrandGuidelines),
}

impl ParsedDeliverable {
    /// Number of top-level records (posts, ads, or guideline sections).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            ParsedDeliverable::SocialPosts(posts) => posts.len(),
            ParsedDeliverable::AdCopy(ads) => ads.len(),
            ParsedDeliverable::BrandGuidelines(guidelines) => guidelines.sections.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Brand panel of the dashboard. `palette` and `typography` fall back to the
/// structured payload when the guidelines text yields none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandReport {
    pub guidelines: Vec<BrandGuidelineSection>,
    pub palette: Vec<ColorSwatch>,
    pub typography: Vec<TypographyEntry>,
    pub data: BrandDataOutcome,
    pub extracted_images: Vec<String>,
}

/// Everything the dashboard renders from one campaign response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedCampaign {
    pub campaign_id: Option<String>,
    pub social_posts: Vec<SocialPost>,
    pub ad_creatives: Vec<AdCreative>,
    pub brand: BrandReport,
    /// Generated image URLs, empty slots removed.
    pub images: Vec<String>,
    pub strategic_brief: Option<String>,
    pub email_sequence: Option<String>,
    pub blog_article: Option<String>,
    pub video_script: Option<String>,
    pub brand_intelligence: Option<String>,
}
