//! Two-level section tree for the brand guidelines document.

use arcus_core::{BrandGuidelineSection, GuidelineSubsection};

use crate::classify::{classify_line, LineKind};
use crate::hook::{DropReason, ParseEvent, ParseHook};
use crate::section::{split_headings, Section};
use crate::text::strip_emphasis;

const SECTION_LEVEL: u8 = 2;
const SUBSECTION_LEVEL: u8 = 3;

/// `##` headings open sections, `###` headings open subsections of the
/// enclosing section. A `###` with no enclosing `##` becomes a section of its
/// own. Deeper headings are kept as content lines.
pub fn parse_guidelines(text: &str, hook: &dyn ParseHook) -> Vec<BrandGuidelineSection> {
    let mut sections = Vec::new();
    let mut current: Option<BrandGuidelineSection> = None;

    for section in split_headings(text, SECTION_LEVEL, Some(SUBSECTION_LEVEL), hook) {
        if section.level == SUBSECTION_LEVEL && section.context.is_some() {
            if let Some(parent) = current.as_mut() {
                add_subsection(parent, &section);
                continue;
            }
        }

        if let Some(done) = current.take() {
            keep_if_useful(done, &mut sections, hook);
        }
        current = Some(BrandGuidelineSection {
            title: section.heading.clone(),
            content: content_lines(&section),
            subsections: Vec::new(),
        });
    }

    if let Some(done) = current.take() {
        keep_if_useful(done, &mut sections, hook);
    }

    sections
}

fn add_subsection(parent: &mut BrandGuidelineSection, section: &Section<'_>) {
    let content = content_lines(section);
    if content.is_empty() {
        return;
    }
    match parent
        .subsections
        .iter_mut()
        .find(|s| s.title.eq_ignore_ascii_case(&section.heading))
    {
        Some(existing) => existing.content.extend(content),
        None => parent.subsections.push(GuidelineSubsection {
            title: section.heading.clone(),
            content,
        }),
    }
}

fn keep_if_useful(
    section: BrandGuidelineSection,
    sections: &mut Vec<BrandGuidelineSection>,
    hook: &dyn ParseHook,
) {
    if section.content.is_empty() && section.subsections.is_empty() {
        hook.on_event(&ParseEvent::SectionDropped {
            heading: section.title,
            reason: DropReason::EmptyBody,
        });
    } else {
        sections.push(section);
    }
}

/// Bullets and emphasis removed, blank lines and thematic breaks skipped.
fn content_lines(section: &Section<'_>) -> Vec<String> {
    section
        .body
        .iter()
        .filter_map(|line| {
            let text = match classify_line(line, None).kind {
                LineKind::Blank | LineKind::FieldLabel { .. } => return None,
                LineKind::Heading { text, .. }
                | LineKind::ListItem(text)
                | LineKind::Prose(text) => text,
            };
            let cleaned = strip_emphasis(&text);
            (!cleaned.is_empty()).then_some(cleaned)
        })
        .collect()
}
