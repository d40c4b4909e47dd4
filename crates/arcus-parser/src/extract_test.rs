use arcus_core::{FieldRole, Joiner, Vocabulary};

use super::*;
use crate::hook::testing::RecordingHook;
use crate::hook::SilentHook;
use crate::section::split_sections;

fn extract(text: &str, vocabulary: &Vocabulary) -> FieldMap {
    let sections = split_sections(text, &SilentHook);
    assert_eq!(sections.len(), 1, "fixture must hold exactly one section");
    extract_fields(&sections[0], vocabulary, &SilentHook)
}

#[test]
fn single_line_fields() {
    let fields = extract(
        "### Instagram Post\n**Caption:** Check this out!\n**Hashtags:** #launch #new\n**Suggested Posting Time:** 9am",
        &Vocabulary::social_posts(),
    );
    assert_eq!(fields.get(FieldRole::Content), Some("Check this out!"));
    assert_eq!(fields.get(FieldRole::Hashtags), Some("#launch #new"));
    assert_eq!(fields.get(FieldRole::Timing), Some("9am"));
    assert!(fields.loose().is_empty());
}

#[test]
fn content_capture_spans_lines_and_blank_lines() {
    let fields = extract(
        "## Post\nCaption:\nFirst line\n\n- bullet kept\nSecond line\nHashtags: #a",
        &Vocabulary::social_posts(),
    );
    assert_eq!(
        fields.get(FieldRole::Content),
        Some("First line\n- bullet kept\nSecond line")
    );
    assert_eq!(fields.get(FieldRole::Hashtags), Some("#a"));
}

#[test]
fn inline_value_starts_the_capture() {
    let fields = extract(
        "## Ad\nPrimary Text: Start here.\nand continue.\nCTA: Go",
        &Vocabulary::ad_copy(),
    );
    assert_eq!(fields.get(FieldRole::Body), Some("Start here.\nand continue."));
    assert_eq!(fields.get(FieldRole::Cta), Some("Go"));
}

#[test]
fn space_joiner() {
    let mut vocabulary = Vocabulary::social_posts();
    vocabulary.joiner = Joiner::Space;
    let fields = extract("## Post\nCaption: one\ntwo", &vocabulary);
    assert_eq!(fields.get(FieldRole::Content), Some("one two"));
}

#[test]
fn capture_ends_at_next_label() {
    let fields = extract(
        "## Post\nCaption: hello\nTiming: noon\nafterwards",
        &Vocabulary::social_posts(),
    );
    assert_eq!(fields.get(FieldRole::Content), Some("hello"));
    assert_eq!(fields.loose(), ["afterwards".to_owned()]);
}

#[test]
fn repeated_content_label_appends() {
    let fields = extract(
        "## Post\nCaption: one\nTiming: noon\nCaption: two",
        &Vocabulary::social_posts(),
    );
    assert_eq!(fields.get(FieldRole::Content), Some("one\ntwo"));
}

#[test]
fn repeated_single_line_label_keeps_first_and_reports() {
    let hook = RecordingHook::default();
    let sections = split_sections("## Ad\nHeadline: First\nHeadline 2: Second", &SilentHook);
    let fields = extract_fields(&sections[0], &Vocabulary::ad_copy(), &hook);
    assert_eq!(fields.get(FieldRole::Headline), Some("First"));
    assert_eq!(
        hook.events(),
        vec![ParseEvent::DuplicateField {
            heading: "Ad".to_owned(),
            role: FieldRole::Headline,
        }]
    );
}

#[test]
fn idle_lines_are_loose() {
    let fields = extract(
        "## Google Ad\n\"Fresh Coffee Daily\"\nOrder online in minutes.\n[Order Now]",
        &Vocabulary::ad_copy(),
    );
    assert_eq!(
        fields.loose(),
        [
            "\"Fresh Coffee Daily\"".to_owned(),
            "Order online in minutes.".to_owned(),
            "[Order Now]".to_owned(),
        ]
    );
    assert!(fields.get(FieldRole::Headline).is_none());
}

#[test]
fn empty_single_line_value_is_ignored() {
    let fields = extract("## Post\nTiming:\nCaption: hi", &Vocabulary::social_posts());
    assert!(fields.get(FieldRole::Timing).is_none());
    assert_eq!(fields.get(FieldRole::Content), Some("hi"));
}

#[test]
fn unknown_label_is_kept_as_text() {
    let fields = extract(
        "## Post\nCaption: Big news\nLearn more: https://example.com",
        &Vocabulary::social_posts(),
    );
    assert_eq!(
        fields.get(FieldRole::Content),
        Some("Big news\nLearn more: https://example.com")
    );
}

#[test]
fn field_map_is_empty_for_labels_without_values() {
    let fields = extract("## Post\nCaption:\nTiming:", &Vocabulary::social_posts());
    assert!(fields.is_empty());
}

#[test]
fn ignored_label_is_dropped_without_ending_capture() {
    let fields = extract(
        "### Instagram Post\n**Caption:** Check this out!\n**Visual:** Flat-lay photo\nSee you there.",
        &Vocabulary::social_posts(),
    );
    assert_eq!(
        fields.get(FieldRole::Content),
        Some("Check this out!\nSee you there.")
    );
    assert!(fields.get(FieldRole::Ignore).is_none());
    assert!(fields.loose().is_empty());
}
