pub mod app_config;
pub mod campaign;
pub mod config;
pub mod deliverable;
pub mod vocabulary;

use thiserror::Error;

pub use app_config::{AppConfig, EngagementMode, Environment};
pub use campaign::{BrandContext, CampaignResult, Deliverables, ImageSet, VideoAsset};
pub use config::{load_app_config, load_app_config_from_env};
pub use deliverable::{
    AdCreative, BrandGuidelineSection, ColorSwatch, ColorType, DocumentKind, Engagement,
    GuidelineSubsection, PlatformSource, RawDeliverable, SocialPost, TypographyEntry,
};
pub use vocabulary::{
    load_vocabulary, parse_vocabulary, FieldLabels, FieldRole, Joiner, Vocabulary, VocabularySet,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read vocabulary file {path}: {source}")]
    VocabularyFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse vocabulary file: {0}")]
    VocabularyFileParse(#[source] serde_yaml::Error),

    #[error("vocabulary validation failed: {0}")]
    Validation(String),
}
