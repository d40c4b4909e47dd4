use crate::app_config::{AppConfig, EngagementMode, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can use a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("ARCUS_ENV", "development"))?;
    let log_level = or_default("ARCUS_LOG_LEVEL", "info");
    let vocabulary_path = lookup("ARCUS_VOCABULARY_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let engagement = parse_engagement_mode(&or_default("ARCUS_ENGAGEMENT", "off"))?;
    let engagement_seed = or_default("ARCUS_ENGAGEMENT_SEED", "0")
        .parse::<u64>()
        .map_err(|e| invalid("ARCUS_ENGAGEMENT_SEED", e.to_string()))?;

    let parser_trace = parse_bool(&or_default("ARCUS_PARSER_TRACE", "false"))
        .ok_or_else(|| invalid("ARCUS_PARSER_TRACE", "expected true or false".to_string()))?;

    Ok(AppConfig {
        env,
        log_level,
        vocabulary_path,
        engagement,
        engagement_seed,
        parser_trace,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "ARCUS_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

fn parse_engagement_mode(s: &str) -> Result<EngagementMode, ConfigError> {
    match s.to_ascii_lowercase().as_str() {
        "off" | "none" => Ok(EngagementMode::Off),
        "seeded" => Ok(EngagementMode::Seeded),
        "random" => Ok(EngagementMode::Random),
        other => Err(ConfigError::InvalidEnvVar {
            var: "ARCUS_ENGAGEMENT".to_string(),
            reason: format!("unknown engagement mode '{other}'"),
        }),
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
