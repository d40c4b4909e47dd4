//! Command handlers for the CLI.
//!
//! Each handler reads its input, runs the parser and prints the result to
//! stdout. Logs go to stderr so the output stays pipeable.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use arcus_core::{CampaignResult, DocumentKind, RawDeliverable};
use arcus_parser::DeliverableParser;

/// Reads `path`, or all of stdin when `None`.
pub(crate) fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Parse a single raw deliverable and print the records as JSON.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be
/// serialized. Unparseable sections are skipped, not reported as errors.
pub(crate) fn run_parse(
    parser: &DeliverableParser,
    kind: DocumentKind,
    path: Option<&Path>,
) -> anyhow::Result<()> {
    let text = read_input(path)?;
    let parsed = parser.parse(&RawDeliverable::new(kind, &text));
    tracing::info!(kind = %kind, records = parsed.len(), "parsed deliverable");
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}

/// Parse a saved campaign response and print the `ParsedCampaign` as JSON.
///
/// # Errors
///
/// Returns an error if the input cannot be read, is not a campaign response,
/// or the output cannot be serialized. A malformed brand payload inside a
/// valid response is not an error.
pub(crate) fn run_campaign(parser: &DeliverableParser, path: Option<&Path>) -> anyhow::Result<()> {
    let text = read_input(path)?;
    let result: CampaignResult =
        serde_json::from_str(&text).context("input is not a campaign response")?;
    if !result.success {
        tracing::warn!(
            error = result.error.as_deref().unwrap_or("unknown"),
            "campaign response reports failure; parsing whatever is present"
        );
    }

    let parsed = parser.campaign(&result);
    tracing::info!(
        campaign = parsed.campaign_id.as_deref().unwrap_or("-"),
        social_posts = parsed.social_posts.len(),
        ad_creatives = parsed.ad_creatives.len(),
        swatches = parsed.brand.palette.len(),
        "parsed campaign"
    );
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}

/// Print the vocabularies in effect, including any override file.
///
/// # Errors
///
/// Returns an error if the tables cannot be serialized.
pub(crate) fn run_vocabulary(parser: &DeliverableParser) -> anyhow::Result<()> {
    print!("{}", serde_yaml::to_string(parser.vocabularies())?);
    Ok(())
}
