//! [`DeliverableParser`]: the entry point tying the stages together.

use arcus_core::{
    load_vocabulary, AdCreative, AppConfig, BrandGuidelineSection, CampaignResult, ColorSwatch,
    ConfigError, DocumentKind, PlatformSource, RawDeliverable, SocialPost, TypographyEntry,
    VocabularySet,
};

use crate::assemble::{assemble_ad_creative, assemble_social_post};
use crate::brand::{
    extract_palette, extract_typography, parse_brand_json, parse_guidelines, BrandDataOutcome,
};
use crate::engagement::{estimator_from_config, EngagementEstimator, NoEngagement};
use crate::extract::extract_fields;
use crate::hook::{ParseEvent, ParseHook, SilentHook, TracingHook};
use crate::section::split_sections;
use crate::text::non_blank;
use crate::types::{BrandGuidelines, BrandReport, ParsedCampaign, ParsedDeliverable};

/// Parses generated campaign deliverables into typed records.
///
/// Holds configuration only; every call works on local state, so one parser
/// can be shared across threads.
pub struct DeliverableParser {
    vocabularies: VocabularySet,
    estimator: Box<dyn EngagementEstimator>,
    hook: Box<dyn ParseHook>,
}

impl Default for DeliverableParser {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DeliverableParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeliverableParser")
            .field("vocabularies", &self.vocabularies)
            .finish_non_exhaustive()
    }
}

impl DeliverableParser {
    /// Built-in vocabularies, no engagement estimation, silent hook.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vocabularies: VocabularySet::default(),
            estimator: Box::new(NoEngagement),
            hook: Box::new(SilentHook),
        }
    }

    /// Applies the vocabulary override file, engagement mode and trace
    /// setting from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the vocabulary file cannot be read, parsed,
    /// or fails validation.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let vocabularies = match &config.vocabulary_path {
            Some(path) => load_vocabulary(path)?,
            None => VocabularySet::default(),
        };
        let hook: Box<dyn ParseHook> = if config.parser_trace {
            Box::new(TracingHook)
        } else {
            Box::new(SilentHook)
        };
        Ok(Self {
            vocabularies,
            estimator: estimator_from_config(config),
            hook,
        })
    }

    #[must_use]
    pub fn with_vocabularies(mut self, vocabularies: VocabularySet) -> Self {
        self.vocabularies = vocabularies;
        self
    }

    #[must_use]
    pub fn with_estimator(mut self, estimator: impl EngagementEstimator + 'static) -> Self {
        self.estimator = Box::new(estimator);
        self
    }

    #[must_use]
    pub fn with_hook(mut self, hook: impl ParseHook + 'static) -> Self {
        self.hook = Box::new(hook);
        self
    }

    #[must_use]
    pub fn vocabularies(&self) -> &VocabularySet {
        &self.vocabularies
    }

    /// Dispatches on the deliverable's kind.
    #[must_use]
    pub fn parse(&self, raw: &RawDeliverable<'_>) -> ParsedDeliverable {
        let text = Some(raw.text);
        match raw.kind {
            DocumentKind::SocialPosts => ParsedDeliverable::SocialPosts(self.social_posts(text)),
            DocumentKind::AdCopy => ParsedDeliverable::AdCopy(self.ad_creatives(text)),
            DocumentKind::BrandGuidelines => {
                ParsedDeliverable::BrandGuidelines(BrandGuidelines {
                    sections: self.brand_guidelines(text),
                    palette: self.palette(text),
                    typography: self.typography(text),
                })
            }
        }
    }

    /// Posts in section order. Posts without reported metrics get estimated
    /// ones when an estimator is configured.
    #[must_use]
    pub fn social_posts(&self, text: Option<&str>) -> Vec<SocialPost> {
        let Some(text) = non_blank(text) else {
            return Vec::new();
        };
        let vocabulary = &self.vocabularies.social_posts;
        let hook = self.hook.as_ref();

        let mut posts: Vec<SocialPost> = split_sections(text, hook)
            .iter()
            .filter_map(|section| {
                let fields = extract_fields(section, vocabulary, hook);
                match assemble_social_post(section, &fields, vocabulary) {
                    Ok(post) => {
                        self.report_fallback(&section.heading, post.platform_source, &post.platform);
                        Some(post)
                    }
                    Err(reason) => {
                        hook.on_event(&ParseEvent::SectionDropped {
                            heading: section.heading.clone(),
                            reason,
                        });
                        None
                    }
                }
            })
            .collect();

        for (position, post) in posts.iter_mut().enumerate() {
            if post.engagement.is_none() {
                post.engagement = self.estimator.estimate(&post.platform, position);
            }
        }
        posts
    }

    /// Ads in section order.
    #[must_use]
    pub fn ad_creatives(&self, text: Option<&str>) -> Vec<AdCreative> {
        let Some(text) = non_blank(text) else {
            return Vec::new();
        };
        let vocabulary = &self.vocabularies.ad_copy;
        let hook = self.hook.as_ref();

        split_sections(text, hook)
            .iter()
            .filter_map(|section| {
                let fields = extract_fields(section, vocabulary, hook);
                match assemble_ad_creative(section, &fields, vocabulary) {
                    Ok(ad) => {
                        self.report_fallback(&section.heading, ad.platform_source, &ad.platform);
                        Some(ad)
                    }
                    Err(reason) => {
                        hook.on_event(&ParseEvent::SectionDropped {
                            heading: section.heading.clone(),
                            reason,
                        });
                        None
                    }
                }
            })
            .collect()
    }

    #[must_use]
    pub fn brand_guidelines(&self, text: Option<&str>) -> Vec<BrandGuidelineSection> {
        non_blank(text).map_or_else(Vec::new, |text| parse_guidelines(text, self.hook.as_ref()))
    }

    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn palette(&self, text: Option<&str>) -> Vec<ColorSwatch> {
        non_blank(text).map_or_else(Vec::new, extract_palette)
    }

    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn typography(&self, text: Option<&str>) -> Vec<TypographyEntry> {
        non_blank(text).map_or_else(Vec::new, extract_typography)
    }

    /// Never fails; malformed payloads come back as
    /// [`BrandDataOutcome::Invalid`] and are reported to the hook.
    #[must_use]
    pub fn brand_data(&self, text: Option<&str>) -> BrandDataOutcome {
        let outcome = parse_brand_json(text);
        if let BrandDataOutcome::Invalid { message } = &outcome {
            self.hook.on_event(&ParseEvent::BrandJsonInvalid {
                message: message.clone(),
            });
        }
        outcome
    }

    /// Parses every deliverable of a campaign response. A bad brand payload
    /// affects only `brand.data`.
    #[must_use]
    pub fn campaign(&self, result: &CampaignResult) -> ParsedCampaign {
        let deliverables = &result.deliverables;
        let brand_context = &deliverables.brand_context;
        let text_of = move |kind| deliverables.raw(kind).map(|raw| raw.text);
        let guidelines_text = text_of(DocumentKind::BrandGuidelines);

        let data = self.brand_data(brand_context.json.as_deref());
        let mut palette = self.palette(guidelines_text);
        let mut typography = self.typography(guidelines_text);
        if let Some(brand) = data.data() {
            if palette.is_empty() {
                palette = brand.swatches();
            }
            if typography.is_empty() {
                typography = brand.typography_entries();
            }
        }

        ParsedCampaign {
            campaign_id: result.campaign_id.clone(),
            social_posts: self.social_posts(text_of(DocumentKind::SocialPosts)),
            ad_creatives: self.ad_creatives(text_of(DocumentKind::AdCopy)),
            brand: BrandReport {
                guidelines: self.brand_guidelines(guidelines_text),
                palette,
                typography,
                data,
                extracted_images: brand_context.extracted_images.clone(),
            },
            images: deliverables.images.urls(),
            strategic_brief: deliverables.strategic_brief.clone(),
            email_sequence: deliverables.email_sequence.clone(),
            blog_article: deliverables.blog_article.clone(),
            video_script: deliverables.video_script.clone(),
            brand_intelligence: result.brand_intelligence.clone(),
        }
    }

    fn report_fallback(&self, heading: &str, source: PlatformSource, platform: &str) {
        if source == PlatformSource::Fallback {
            self.hook.on_event(&ParseEvent::PlatformFallback {
                heading: heading.to_owned(),
                platform: platform.to_owned(),
            });
        }
    }
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
