//! Whole campaign responses, as returned by the generation backend.

use arcus_core::{CampaignResult, ColorType, PlatformSource};
use arcus_parser::{BrandDataOutcome, DeliverableParser, ParsedCampaign};

const RESPONSE: &str = include_str!("fixtures/campaign.json");

fn response() -> CampaignResult {
    serde_json::from_str(RESPONSE).expect("fixture should deserialize")
}

fn parse(result: &CampaignResult) -> ParsedCampaign {
    DeliverableParser::new().campaign(result)
}

#[test]
fn response_metadata_is_carried_through() {
    let result = response();
    assert!(result.success);

    let parsed = parse(&result);
    assert_eq!(parsed.campaign_id.as_deref(), Some("campaign_1718000000000"));
    assert!(parsed
        .brand_intelligence
        .as_deref()
        .is_some_and(|report| report.starts_with("# BRAND INTELLIGENCE REPORT")));
    assert!(parsed.strategic_brief.is_some());
    assert!(parsed.email_sequence.is_some());
    assert!(parsed.blog_article.is_none());
    assert!(parsed.video_script.is_none());
}

#[test]
fn social_calendar_posts() {
    let parsed = parse(&response());
    let platforms: Vec<&str> = parsed
        .social_posts
        .iter()
        .map(|p| p.platform.as_str())
        .collect();
    assert_eq!(
        platforms,
        vec!["LinkedIn", "Twitter", "Instagram", "LinkedIn", "Facebook"]
    );

    let first = &parsed.social_posts[0];
    assert_eq!(
        first.hashtags,
        vec!["#Innovation", "#Coffee", "#DigitalTransformation"]
    );
    assert!(first.content.starts_with("🚀 Innovation meets execution"));
    assert!(!first.content.contains("#Innovation"));

    let instagram = &parsed.social_posts[2];
    assert_eq!(
        instagram.content,
        "Behind every great cup is a team dedicated to excellence."
    );
}

#[test]
fn ad_groups_resolve_platforms() {
    let parsed = parse(&response());
    let platforms: Vec<(&str, PlatformSource)> = parsed
        .ad_creatives
        .iter()
        .map(|a| (a.platform.as_str(), a.platform_source))
        .collect();
    assert_eq!(
        platforms,
        vec![
            ("Google", PlatformSource::Matched),
            ("Google", PlatformSource::Matched),
            ("Instagram", PlatformSource::Matched),
            ("Instagram", PlatformSource::Matched),
            ("LinkedIn", PlatformSource::Matched),
            ("LinkedIn", PlatformSource::Matched),
            ("Display", PlatformSource::Fallback),
        ]
    );
}

#[test]
fn search_ad_keeps_first_headline_and_joins_descriptions() {
    let parsed = parse(&response());
    let ad = &parsed.ad_creatives[0];
    assert_eq!(ad.headline, "Transform Your Morning Coffee");
    assert_eq!(
        ad.body,
        "Join 10,000+ coffee lovers getting beans roasted to order.\nFree shipping on every subscription. Cancel anytime."
    );
    assert_eq!(ad.cta, "Learn More");
    assert_eq!(ad.landing_url.as_deref(), Some("https://brewline.example"));
}

#[test]
fn social_ads_take_format_from_heading() {
    let parsed = parse(&response());
    let image = &parsed.ad_creatives[2];
    assert_eq!(image.headline, "Transform Your Morning Coffee");
    assert_eq!(image.format.as_deref(), Some("Image"));
    assert!(image.body.starts_with("Ready to upgrade your morning?"));

    let video = &parsed.ad_creatives[3];
    assert_eq!(video.headline, "Real Coffee. Real Farmers.");
    assert_eq!(video.format.as_deref(), Some("Video"));
}

#[test]
fn display_headlines_become_one_ad() {
    let parsed = parse(&response());
    let display = &parsed.ad_creatives[6];
    assert_eq!(display.headline, "The Future of Coffee is Here");
    assert!(display.body.contains("10,000+ Coffee Lovers Trust Us"));
}

#[test]
fn brand_report_reads_guide_and_payload() {
    let parsed = parse(&response());
    let brand = &parsed.brand;

    let titles: Vec<&str> = brand.guidelines.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Color Palette", "Typography", "Voice"]);

    let swatches: Vec<(&str, &str, ColorType)> = brand
        .palette
        .iter()
        .map(|s| (s.name.as_str(), s.hex.as_str(), s.color_type))
        .collect();
    assert_eq!(
        swatches,
        vec![
            ("Primary", "#1E3A5F", ColorType::Primary),
            ("Secondary", "#F4A261", ColorType::Secondary),
            ("Accent", "#2A9D8F", ColorType::Secondary),
        ]
    );

    let fonts: Vec<(&str, &str)> = brand
        .typography
        .iter()
        .map(|t| (t.role.as_str(), t.value.as_str()))
        .collect();
    assert_eq!(
        fonts,
        vec![("Heading Font", "Montserrat"), ("Body Font", "Open Sans")]
    );

    let data = brand.data.data().expect("payload should parse");
    assert_eq!(data.voice_tone, vec!["confident", "warm"]);
    assert_eq!(
        data.target_audience.as_deref(),
        Some("Home baristas aged 25-45")
    );
    assert_eq!(brand.extracted_images.len(), 2);
}

#[test]
fn named_image_slots_skip_pending_ones() {
    let parsed = parse(&response());
    assert_eq!(
        parsed.images,
        vec![
            "https://cdn.brewline.example/banner.png",
            "https://cdn.brewline.example/hero.png",
            "https://cdn.brewline.example/post.png",
        ]
    );
}

#[test]
fn malformed_brand_payload_only_affects_brand_data() {
    let mut result = response();
    result.deliverables.brand_context.json = Some("{\"colors\": {\"primary\": ".to_owned());

    let parsed = parse(&result);
    assert!(matches!(parsed.brand.data, BrandDataOutcome::Invalid { .. }));
    assert_eq!(parsed.social_posts.len(), 5);
    assert_eq!(parsed.ad_creatives.len(), 7);
    assert_eq!(parsed.brand.palette.len(), 3);
    assert_eq!(parsed.brand.typography.len(), 2);
}

#[test]
fn payload_supplies_palette_when_guide_is_missing() {
    let mut result = response();
    result.deliverables.brand_context.colors_and_fonts = None;

    let parsed = parse(&result);
    assert!(parsed.brand.guidelines.is_empty());
    let hexes: Vec<&str> = parsed.brand.palette.iter().map(|s| s.hex.as_str()).collect();
    assert_eq!(hexes, vec!["#1E3A5F", "#F4A261", "#2A9D8F"]);
    let fonts: Vec<(&str, &str)> = parsed
        .brand
        .typography
        .iter()
        .map(|t| (t.role.as_str(), t.value.as_str()))
        .collect();
    assert_eq!(
        fonts,
        vec![("Primary Font", "Open Sans"), ("Heading Font", "Montserrat")]
    );
}

#[test]
fn legacy_image_list_is_accepted() {
    let json = r#"{"success": true, "deliverables": {"images": ["https://a/1.png", " ", "https://a/2.png"]}}"#;
    let result: CampaignResult = serde_json::from_str(json).unwrap();
    let parsed = parse(&result);
    assert_eq!(parsed.images, vec!["https://a/1.png", "https://a/2.png"]);
    assert!(parsed.social_posts.is_empty());
    assert_eq!(parsed.brand.data, BrandDataOutcome::Missing);
}

#[test]
fn parsed_campaign_serializes_with_status_tag() {
    let parsed = parse(&response());
    let json = serde_json::to_value(&parsed).unwrap();
    assert_eq!(json["brand"]["data"]["status"], "parsed");
    assert_eq!(json["brand"]["data"]["voiceTone"][0], "confident");
    assert_eq!(json["social_posts"].as_array().map(Vec::len), Some(5));
}
