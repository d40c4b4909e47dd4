//! The structured brand payload (`brandContext.json`).
//!
//! This path must fail soft: a malformed payload becomes
//! [`BrandDataOutcome::Invalid`] and never takes the rest of the campaign
//! down with it.

use arcus_core::{ColorSwatch, ColorType, TypographyEntry};
use serde::{Deserialize, Deserializer, Serialize};

use crate::brand::palette::normalize_hex;
use crate::error::ParseError;
use crate::text::non_blank;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandColors {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandTypography {
    pub primary_font: Option<String>,
    pub heading_font: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandData {
    pub colors: BrandColors,
    pub typography: BrandTypography,
    #[serde(deserialize_with = "lenient_string_list")]
    pub voice_tone: Vec<String>,
    pub target_audience: Option<String>,
}

impl BrandData {
    /// Primary maps to a primary swatch, secondary and accent to secondary
    /// ones. Values that are not hex colors are skipped.
    #[must_use]
    pub fn swatches(&self) -> Vec<ColorSwatch> {
        [
            ("Primary", self.colors.primary.as_deref(), ColorType::Primary),
            ("Secondary", self.colors.secondary.as_deref(), ColorType::Secondary),
            ("Accent", self.colors.accent.as_deref(), ColorType::Secondary),
        ]
        .into_iter()
        .filter_map(|(name, value, color_type)| {
            Some(ColorSwatch {
                name: name.to_owned(),
                hex: normalize_hex(value?)?,
                color_type,
            })
        })
        .collect()
    }

    #[must_use]
    pub fn typography_entries(&self) -> Vec<TypographyEntry> {
        [
            ("Primary Font", self.typography.primary_font.as_deref()),
            ("Heading Font", self.typography.heading_font.as_deref()),
        ]
        .into_iter()
        .filter_map(|(role, value)| {
            let value = value?.trim();
            (!value.is_empty()).then(|| TypographyEntry {
                role: role.to_owned(),
                value: value.to_owned(),
            })
        })
        .collect()
    }
}

/// Anything other than an array of strings reads as an empty list; non-string
/// array items are skipped.
fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Outcome of reading the brand payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BrandDataOutcome {
    /// No payload, or only whitespace.
    Missing,
    Parsed(BrandData),
    Invalid { message: String },
}

impl BrandDataOutcome {
    #[must_use]
    pub fn data(&self) -> Option<&BrandData> {
        match self {
            BrandDataOutcome::Parsed(data) => Some(data),
            BrandDataOutcome::Missing | BrandDataOutcome::Invalid { .. } => None,
        }
    }
}

/// Total variant: never fails, never panics.
#[must_use]
pub fn parse_brand_json(text: Option<&str>) -> BrandDataOutcome {
    let Some(text) = non_blank(text) else {
        return BrandDataOutcome::Missing;
    };
    match try_parse_brand_json(text) {
        Ok(data) => BrandDataOutcome::Parsed(data),
        Err(err) => BrandDataOutcome::Invalid {
            message: err.to_string(),
        },
    }
}

/// Parses the payload. Valid JSON that is not an object yields empty
/// [`BrandData`].
///
/// # Errors
///
/// Returns [`ParseError::InvalidBrandJson`] when the text is not valid JSON or
/// an object field has the wrong type.
pub fn try_parse_brand_json(text: &str) -> Result<BrandData, ParseError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if !value.is_object() {
        return Ok(BrandData::default());
    }
    Ok(serde_json::from_value(value)?)
}
