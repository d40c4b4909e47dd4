//! Table-driven field extraction for one section.
//!
//! A single extractor serves every record kind; the [`Vocabulary`] decides
//! which labels exist and which one is the multi-line content field.

use std::collections::HashMap;

use arcus_core::{FieldRole, Vocabulary};

use crate::classify::{classify_line, LineKind};
use crate::hook::{ParseEvent, ParseHook};
use crate::section::Section;

/// Fields found in a section, keyed by role, plus the lines that belonged to
/// no field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    values: HashMap<FieldRole, String>,
    loose: Vec<String>,
}

impl FieldMap {
    /// The value for `role`, if one was found and is not blank.
    #[must_use]
    pub fn get(&self, role: FieldRole) -> Option<&str> {
        self.values
            .get(&role)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// Non-blank lines seen while no content field was capturing.
    #[must_use]
    pub fn loose(&self) -> &[String] {
        &self.loose
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.values().all(|v| v.trim().is_empty()) && self.loose.is_empty()
    }

    fn contains(&self, role: FieldRole) -> bool {
        self.get(role).is_some()
    }

    fn append(&mut self, role: FieldRole, line: &str, joiner: &str) {
        let value = self.values.entry(role).or_default();
        if !value.is_empty() {
            value.push_str(joiner);
        }
        value.push_str(line);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Capturing(FieldRole),
}

/// Runs the capture state machine over a section body. Lines labeled with
/// a [`FieldRole::Ignore`] label are dropped without ending a capture.
pub fn extract_fields(
    section: &Section<'_>,
    vocabulary: &Vocabulary,
    hook: &dyn ParseHook,
) -> FieldMap {
    let joiner = vocabulary.joiner.as_str();
    let mut fields = FieldMap::default();
    let mut state = State::Idle;

    for line in &section.body {
        let classified = classify_line(line, Some(vocabulary));
        match classified.kind {
            LineKind::Blank
            | LineKind::FieldLabel {
                role: FieldRole::Ignore,
                ..
            } => {}
            LineKind::FieldLabel { role, value } if vocabulary.is_content(role) => {
                state = State::Capturing(role);
                if !value.is_empty() {
                    fields.append(role, &value, joiner);
                }
            }
            LineKind::FieldLabel { role, value } => {
                state = State::Idle;
                if value.is_empty() {
                    continue;
                }
                if fields.contains(role) {
                    hook.on_event(&ParseEvent::DuplicateField {
                        heading: section.heading.clone(),
                        role,
                    });
                } else {
                    fields.values.insert(role, value);
                }
            }
            LineKind::ListItem(_) | LineKind::Heading { .. } | LineKind::Prose(_) => match state {
                State::Capturing(role) => fields.append(role, classified.raw, joiner),
                State::Idle => fields.loose.push(classified.raw.to_owned()),
            },
        }
    }

    fields
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
