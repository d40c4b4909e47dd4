//! Diagnostics for things the parser recovered from.
//!
//! Parsing never fails on malformed markdown; it drops or guesses instead.
//! Those decisions are reported through a [`ParseHook`] so callers can see
//! them without the parser logging unconditionally.

use std::fmt;

use arcus_core::FieldRole;

/// Why a section produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    EmptyBody,
    MissingPlatform,
    MissingContent,
    MissingHeadlineAndBody,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            DropReason::EmptyBody => "empty body",
            DropReason::MissingPlatform => "no platform could be inferred",
            DropReason::MissingContent => "no content",
            DropReason::MissingHeadlineAndBody => "neither headline nor body",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEvent {
    /// Lines before the first section heading (or under a document title).
    PreambleDiscarded { lines: usize },
    /// A heading above section level, treated as a document title.
    TitleSkipped { heading: String },
    SectionDropped { heading: String, reason: DropReason },
    /// A single-line field appeared twice; the first value was kept.
    DuplicateField { heading: String, role: FieldRole },
    /// No platform keyword matched; the heading's first word was used.
    PlatformFallback { heading: String, platform: String },
    BrandJsonInvalid { message: String },
}

/// Receives recovery events. Implementations must be cheap; they are called
/// inline from the parse loop.
pub trait ParseHook: Send + Sync {
    fn on_event(&self, event: &ParseEvent);
}

impl<H: ParseHook + ?Sized> ParseHook for std::sync::Arc<H> {
    fn on_event(&self, event: &ParseEvent) {
        (**self).on_event(event);
    }
}

/// Default hook: ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentHook;

impl ParseHook for SilentHook {
    fn on_event(&self, _event: &ParseEvent) {}
}

/// Forwards every event to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHook;

impl ParseHook for TracingHook {
    fn on_event(&self, event: &ParseEvent) {
        match event {
            ParseEvent::PreambleDiscarded { lines } => {
                tracing::debug!(lines, "discarded preamble lines");
            }
            ParseEvent::TitleSkipped { heading } => {
                tracing::debug!(heading = %heading, "skipped document title");
            }
            ParseEvent::SectionDropped { heading, reason } => {
                tracing::debug!(heading = %heading, reason = %reason, "section dropped");
            }
            ParseEvent::DuplicateField { heading, role } => {
                tracing::debug!(heading = %heading, role = %role, "duplicate field ignored");
            }
            ParseEvent::PlatformFallback { heading, platform } => {
                tracing::debug!(
                    heading = %heading,
                    platform = %platform,
                    "no platform keyword matched; using heading word"
                );
            }
            ParseEvent::BrandJsonInvalid { message } => {
                tracing::debug!(error = %message, "brand data JSON was invalid");
            }
        }
    }
}
