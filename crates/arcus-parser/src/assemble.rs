//! Field maps to typed records. Pure: no hooks, no randomness.

use arcus_core::{AdCreative, Engagement, FieldRole, SocialPost, Vocabulary};

use crate::extract::FieldMap;
use crate::hook::DropReason;
use crate::normalize::{
    bracketed_cta, clean_headline, clean_url, extract_hashtags, format_from_heading,
    infer_platform, is_hashtag_line, parse_count, DEFAULT_CTA,
};
use crate::section::Section;
use crate::text::{canonicalize_lines, strip_emphasis, teaser};

const HEADLINE_TEASER_CHARS: usize = 50;

/// Builds a post, or says why the section cannot be one.
///
/// # Errors
///
/// Returns the [`DropReason`] when no platform can be inferred or when no
/// content remains after canonicalization.
pub fn assemble_social_post(
    section: &Section<'_>,
    fields: &FieldMap,
    vocabulary: &Vocabulary,
) -> Result<SocialPost, DropReason> {
    let platform = infer_platform(
        fields.get(FieldRole::Platform),
        &section.heading,
        section.context.as_deref(),
    )
    .ok_or(DropReason::MissingPlatform)?;

    let labeled_content = fields.get(vocabulary.content_role);
    let mut content_lines: Vec<&str> = match labeled_content {
        Some(value) => value.lines().collect(),
        None => fields.loose().iter().map(String::as_str).collect(),
    };

    let hashtags = match fields.get(FieldRole::Hashtags) {
        Some(value) => extract_hashtags(value),
        None => {
            let mut tag_lines = Vec::new();
            while let Some(last) = content_lines.last() {
                if !is_hashtag_line(last) {
                    break;
                }
                tag_lines.push(*last);
                content_lines.pop();
            }
            tag_lines.reverse();
            if labeled_content.is_some() {
                tag_lines.extend(
                    fields
                        .loose()
                        .iter()
                        .map(String::as_str)
                        .filter(|line| is_hashtag_line(line)),
                );
            }
            extract_hashtags(&tag_lines.join(" "))
        }
    };

    let content = content_lines
        .iter()
        .flat_map(|line| canonicalize_lines(line))
        .collect::<Vec<_>>()
        .join(vocabulary.joiner.as_str());
    if content.is_empty() {
        return Err(DropReason::MissingContent);
    }

    let timing = fields
        .get(FieldRole::Timing)
        .map(strip_emphasis)
        .filter(|t| !t.is_empty());

    Ok(SocialPost {
        platform: platform.label().to_owned(),
        platform_source: platform.source(),
        content,
        hashtags,
        timing,
        engagement: reported_engagement(fields),
    })
}

fn reported_engagement(fields: &FieldMap) -> Option<Engagement> {
    let count = |role| fields.get(role).and_then(parse_count);
    let likes = count(FieldRole::Likes);
    let comments = count(FieldRole::Comments);
    let shares = count(FieldRole::Shares);
    if likes.is_none() && comments.is_none() && shares.is_none() {
        return None;
    }
    Some(Engagement {
        likes: likes.unwrap_or(0),
        comments: comments.unwrap_or(0),
        shares: shares.unwrap_or(0),
        estimated: false,
    })
}

/// Builds an ad, or says why the section cannot be one.
///
/// # Errors
///
/// Returns the [`DropReason`] when no platform can be inferred or when both
/// headline and body are empty.
pub fn assemble_ad_creative(
    section: &Section<'_>,
    fields: &FieldMap,
    vocabulary: &Vocabulary,
) -> Result<AdCreative, DropReason> {
    let platform = infer_platform(
        fields.get(FieldRole::Platform),
        &section.heading,
        section.context.as_deref(),
    )
    .ok_or(DropReason::MissingPlatform)?;

    let mut loose: Vec<&str> = fields.loose().iter().map(String::as_str).collect();
    let joiner = vocabulary.joiner.as_str();

    let cta = match fields.get(FieldRole::Cta) {
        Some(value) => strip_emphasis(value),
        None => match loose.last().and_then(|line| bracketed_cta(line)) {
            Some(button) => {
                loose.pop();
                button
            }
            None => String::new(),
        },
    };

    let mut headline = match fields.get(FieldRole::Headline) {
        Some(value) => strip_emphasis(value),
        None if !loose.is_empty() => clean_headline(loose.remove(0)),
        None => String::new(),
    };

    let body_lines: Vec<String> = match fields.get(FieldRole::Body) {
        Some(value) => canonicalize_lines(value),
        None => loose.iter().flat_map(|line| canonicalize_lines(line)).collect(),
    };
    let body = body_lines.join(joiner);

    if headline.is_empty() && body.is_empty() {
        return Err(DropReason::MissingHeadlineAndBody);
    }
    if headline.is_empty() {
        headline = teaser(&body_lines.join(" "), HEADLINE_TEASER_CHARS);
    }

    let format = fields
        .get(FieldRole::Format)
        .map(strip_emphasis)
        .filter(|f| !f.is_empty())
        .or_else(|| format_from_heading(&section.heading));

    Ok(AdCreative {
        platform: platform.label().to_owned(),
        platform_source: platform.source(),
        headline,
        body,
        cta: if cta.is_empty() {
            DEFAULT_CTA.to_owned()
        } else {
            cta
        },
        format,
        targeting: fields
            .get(FieldRole::Targeting)
            .map(strip_emphasis)
            .filter(|t| !t.is_empty()),
        landing_url: fields
            .get(FieldRole::LandingUrl)
            .map(clean_url)
            .filter(|u| !u.is_empty()),
    })
}

#[cfg(test)]
#[path = "assemble_test.rs"]
mod tests;
