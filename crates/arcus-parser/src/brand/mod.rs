//! Brand guideline parsing: section tree, palette, typography, and the
//! structured brand payload.

pub mod guidelines;
pub mod json;
pub mod palette;
pub mod typography;

pub use guidelines::parse_guidelines;
pub use json::{
    parse_brand_json, try_parse_brand_json, BrandColors, BrandData, BrandDataOutcome,
    BrandTypography,
};
pub use palette::{classify_color, extract_palette, normalize_hex};
pub use typography::extract_typography;
