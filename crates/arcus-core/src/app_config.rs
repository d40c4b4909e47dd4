use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Which engagement figures accompany social posts that carry none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementMode {
    /// No synthetic figures.
    Off,
    /// Deterministic figures derived from `engagement_seed`.
    Seeded,
    /// Fresh random figures on every parse.
    Random,
}

impl std::fmt::Display for EngagementMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngagementMode::Off => write!(f, "off"),
            EngagementMode::Seeded => write!(f, "seeded"),
            EngagementMode::Random => write!(f, "random"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub vocabulary_path: Option<PathBuf>,
    pub engagement: EngagementMode,
    pub engagement_seed: u64,
    pub parser_trace: bool,
}
