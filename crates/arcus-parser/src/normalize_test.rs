use super::*;

#[test]
fn platform_keywords_in_priority_order() {
    assert_eq!(match_platform("Instagram Post"), Some(Platform::Instagram));
    assert_eq!(match_platform("Facebook/Instagram Carousel"), Some(Platform::Instagram));
    assert_eq!(match_platform("Meta Ads"), Some(Platform::Facebook));
    assert_eq!(match_platform("LinkedIn Article"), Some(Platform::LinkedIn));
    assert_eq!(match_platform("TikTok Script"), Some(Platform::TikTok));
    assert_eq!(match_platform("Google Search Ads"), Some(Platform::Google));
}

#[test]
fn twitter_aliases() {
    assert_eq!(match_platform("X (Twitter) Thread"), Some(Platform::Twitter));
    assert_eq!(match_platform("Post on X"), Some(Platform::Twitter));
    assert_eq!(match_platform("x.com promo"), Some(Platform::Twitter));
    assert_eq!(match_platform("Tweet 3"), Some(Platform::Twitter));
}

#[test]
fn whole_word_keywords_do_not_match_inside_words() {
    assert_eq!(match_platform("Xmas Box"), None);
    assert_eq!(match_platform("Metadata Story"), None);
}

#[test]
fn from_name_accepts_labels() {
    assert_eq!(Platform::from_name("youtube"), Some(Platform::YouTube));
    assert_eq!(Platform::from_name("Snapchat"), None);
}

#[test]
fn explicit_platform_wins() {
    let found = infer_platform(Some("**Twitter/X**"), "Instagram Post", None).unwrap();
    assert_eq!(found, PlatformMatch::Matched(Platform::Twitter));
    assert_eq!(found.label(), "Twitter");
    assert_eq!(found.source(), PlatformSource::Matched);
}

#[test]
fn unknown_explicit_platform_is_declared_verbatim() {
    let found = infer_platform(Some("Threads"), "Post 1", None).unwrap();
    assert_eq!(found, PlatformMatch::Declared("Threads".to_owned()));
    assert_eq!(found.source(), PlatformSource::Declared);
}

#[test]
fn blank_explicit_platform_falls_through() {
    let found = infer_platform(Some(" ** "), "Facebook Post", None).unwrap();
    assert_eq!(found, PlatformMatch::Matched(Platform::Facebook));
}

#[test]
fn context_is_consulted_after_heading() {
    let found = infer_platform(None, "Ad 1", Some("Google Search Ads")).unwrap();
    assert_eq!(found, PlatformMatch::Matched(Platform::Google));
}

#[test]
fn first_word_fallback() {
    let found = infer_platform(None, "Snapchat Story", None).unwrap();
    assert_eq!(found, PlatformMatch::Fallback("Snapchat".to_owned()));
    assert_eq!(found.source(), PlatformSource::Fallback);
}

#[test]
fn empty_heading_yields_nothing() {
    assert!(infer_platform(None, "", None).is_none());
}

#[test]
fn hashtags_deduped_in_order() {
    assert_eq!(extract_hashtags("#one #two #two"), vec!["#one", "#two"]);
    assert_eq!(
        extract_hashtags("#Launch, #launch and #NewDrop!"),
        vec!["#Launch", "#NewDrop"]
    );
}

#[test]
fn hashtags_ignore_bare_hash() {
    assert!(extract_hashtags("# and ## only").is_empty());
}

#[test]
fn hashtag_lines() {
    assert!(is_hashtag_line("#launch #new"));
    assert!(is_hashtag_line("**#launch** #new"));
    assert!(!is_hashtag_line("Launch day #new"));
    assert!(!is_hashtag_line("## Heading"));
    assert!(!is_hashtag_line(""));
}

#[test]
fn counts() {
    assert_eq!(parse_count("2345"), Some(2345));
    assert_eq!(parse_count("2,345 likes"), Some(2345));
    assert_eq!(parse_count("1.2k"), Some(1200));
    assert_eq!(parse_count("**3M**"), Some(3_000_000));
    assert_eq!(parse_count("lots"), None);
    assert_eq!(parse_count(""), None);
}

#[test]
fn bracketed_cta_lines() {
    assert_eq!(bracketed_cta("[Get Started]"), Some("Get Started".to_owned()));
    assert_eq!(bracketed_cta("**[Shop Now]**"), Some("Shop Now".to_owned()));
    assert_eq!(bracketed_cta("[Link]"), None);
    assert_eq!(bracketed_cta("[Image: hero shot]"), None);
    assert_eq!(bracketed_cta("[Shop](https://example.com)"), None);
}

#[test]
fn format_suffix() {
    assert_eq!(format_from_heading("Ad 1 (Carousel)"), Some("Carousel".to_owned()));
    assert_eq!(format_from_heading("Ad 1"), None);
    assert_eq!(format_from_heading("Ad ( )"), None);
}

#[test]
fn headline_cleanup() {
    assert_eq!(clean_headline("- \"Fresh Coffee Daily\""), "Fresh Coffee Daily");
    assert_eq!(clean_headline("**“Wake Up Better”**"), "Wake Up Better");
}

#[test]
fn url_cleanup_keeps_underscores() {
    assert_eq!(
        clean_url("<https://example.com/spring_sale>"),
        "https://example.com/spring_sale"
    );
}
