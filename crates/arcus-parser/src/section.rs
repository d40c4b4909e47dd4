//! Splits a raw markdown blob into heading-delimited sections.

use crate::classify::parse_heading;
use crate::hook::{DropReason, ParseEvent, ParseHook};
use crate::text::{is_thematic_break, split_ordinal, strip_emphasis};

/// One heading and the body lines up to the next section boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    /// Heading text with ordinal prefix, emphasis and trailing colon removed.
    pub heading: String,
    pub ordinal: Option<u32>,
    pub level: u8,
    /// Text of the nearest enclosing shallower heading, if any.
    pub context: Option<String>,
    /// Raw body lines, leading and trailing blank lines trimmed.
    pub body: Vec<&'a str>,
}

impl Section<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Sections for record-producing documents: every heading at level 2 or
/// deeper opens one, empty sections are dropped.
pub fn split_sections<'a>(text: &'a str, hook: &dyn ParseHook) -> Vec<Section<'a>> {
    split_headings(text, 2, None, hook)
        .into_iter()
        .filter(|section| {
            if section.is_empty() {
                hook.on_event(&ParseEvent::SectionDropped {
                    heading: section.heading.clone(),
                    reason: DropReason::EmptyBody,
                });
                false
            } else {
                true
            }
        })
        .collect()
}

/// Generic splitter. Headings shallower than `min_level` are document titles:
/// they close the open section and reset the context. Headings deeper than
/// `max_level` stay in the body as ordinary lines. Empty sections are kept.
pub(crate) fn split_headings<'a>(
    text: &'a str,
    min_level: u8,
    max_level: Option<u8>,
    hook: &dyn ParseHook,
) -> Vec<Section<'a>> {
    let mut sections = Vec::new();
    let mut enclosing: Vec<(u8, String)> = Vec::new();
    let mut current: Option<Section<'a>> = None;
    let mut preamble = 0usize;

    for line in text.lines() {
        let heading = parse_heading(line)
            .filter(|(level, _)| max_level.is_none_or(|max| *level <= max));

        let Some((level, raw_heading)) = heading else {
            match current.as_mut() {
                Some(section) => section.body.push(line),
                None => {
                    if !line.trim().is_empty() && !is_thematic_break(line) {
                        preamble += 1;
                    }
                }
            }
            continue;
        };

        if let Some(done) = current.take() {
            sections.push(finish(done));
        }

        if level < min_level {
            hook.on_event(&ParseEvent::TitleSkipped {
                heading: clean_heading(raw_heading).1,
            });
            enclosing.clear();
            continue;
        }

        let (ordinal, heading) = clean_heading(raw_heading);
        enclosing.retain(|(l, _)| *l < level);
        let context = enclosing.last().map(|(_, text)| text.clone());
        enclosing.push((level, heading.clone()));

        current = Some(Section {
            heading,
            ordinal,
            level,
            context,
            body: Vec::new(),
        });
    }

    if let Some(done) = current.take() {
        sections.push(finish(done));
    }

    if preamble > 0 {
        hook.on_event(&ParseEvent::PreambleDiscarded { lines: preamble });
    }

    sections
}

fn clean_heading(raw: &str) -> (Option<u32>, String) {
    let unemphasized = strip_emphasis(raw);
    let (ordinal, rest) = split_ordinal(&unemphasized);
    let heading = rest.trim().trim_end_matches(':').trim_end().to_owned();
    (ordinal, heading)
}

fn finish(mut section: Section<'_>) -> Section<'_> {
    let is_blank = |line: &&str| line.trim().is_empty();
    while section.body.last().is_some_and(is_blank) {
        section.body.pop();
    }
    let leading = section.body.iter().take_while(|l| is_blank(l)).count();
    section.body.drain(..leading);
    section
}
