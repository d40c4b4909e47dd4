pub mod assemble;
pub mod brand;
pub mod classify;
pub mod engagement;
pub mod error;
pub mod extract;
pub mod hook;
pub mod normalize;
pub mod parser;
pub mod section;
mod text;
pub mod types;

pub use brand::{parse_brand_json, try_parse_brand_json, BrandData, BrandDataOutcome};
pub use engagement::{
    estimator_from_config, EngagementEstimator, NoEngagement, RandomEngagement, SeededEngagement,
};
pub use error::ParseError;
pub use hook::{DropReason, ParseEvent, ParseHook, SilentHook, TracingHook};
pub use normalize::{Platform, PlatformMatch};
pub use parser::DeliverableParser;
pub use types::{BrandGuidelines, BrandReport, ParsedCampaign, ParsedDeliverable};
