use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_FEED_URL: &str =
    "https://cgi.csc.liv.ac.uk/~phil/Teaching/COMP228/eating_venues/data.json";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("VENUEFEED_ENV", "development"))?;
    let log_level = or_default("VENUEFEED_LOG_LEVEL", env.default_log_level());

    let feed_url = or_default("VENUEFEED_FEED_URL", DEFAULT_FEED_URL);
    if !(feed_url.starts_with("http://") || feed_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "VENUEFEED_FEED_URL".to_string(),
            reason: format!("\"{feed_url}\" is not an http(s) URL"),
        });
    }

    let data_dir = or_default("VENUEFEED_DATA_DIR", "./data");
    if data_dir.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "VENUEFEED_DATA_DIR".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let user_agent = or_default("VENUEFEED_USER_AGENT", "venuefeed/0.1 (campus-dining)");

    Ok(AppConfig {
        env,
        log_level,
        feed_url,
        data_dir: PathBuf::from(data_dir),
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "VENUEFEED_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
