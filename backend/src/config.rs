//! Runtime configuration read from the environment (and `.env`).

use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use tracing::{debug, info};

use crate::error::ConfigError;
use crate::store::DEFAULT_DATA_DIR;

/// Model used when `GEMINI_MODEL` is not set
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Base URL of the Generative Language API
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Admin portal credentials
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

/// Settings for the lead scoring client
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    /// `None` means wait as long as the API takes
    pub timeout: Option<Duration>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            timeout: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub data_dir: PathBuf,
    pub scoring: ScoringConfig,
    pub admin: Option<AdminCredentials>,
    pub demo_admin_bypass: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let timeout = match optional("SCORING_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(parse("SCORING_TIMEOUT_SECS", &raw)?)),
            None => None,
        };

        let admin = match (optional("ADMIN_EMAIL"), optional("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminCredentials {
                email: email.trim().to_lowercase(),
                password,
            }),
            _ => {
                info!("ADMIN_EMAIL/ADMIN_PASSWORD not set, admin login disabled");
                None
            }
        };

        Ok(Self {
            port: try_load("PORT", "3000")?,
            data_dir: try_load("DATA_DIR", DEFAULT_DATA_DIR)?,
            scoring: ScoringConfig {
                api_key: optional("GEMINI_API_KEY"),
                model: optional("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                endpoint: optional("GEMINI_ENDPOINT")
                    .unwrap_or_else(|| DEFAULT_GEMINI_ENDPOINT.to_string()),
                timeout,
            },
            admin,
            demo_admin_bypass: try_load("DEMO_ADMIN_BYPASS", "false")?,
        })
    }
}

/// Non-empty value of `key`, if set
fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let raw = optional(key).unwrap_or_else(|| {
        debug!("{key} not set, using default: {default}");
        default.to_string()
    });
    parse(key, &raw)
}

fn parse<T: FromStr>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reports_key() {
        let err = parse::<u16>("PORT", "eighty").unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_parse_trims() {
        let port: u16 = parse("PORT", " 8080 ").unwrap();
        assert_eq!(port, 8080);
        let flag: bool = parse("DEMO_ADMIN_BYPASS", "true").unwrap();
        assert!(flag);
    }

    #[test]
    fn test_scoring_defaults() {
        let scoring = ScoringConfig::default();
        assert_eq!(scoring.model, "gemini-3-flash-preview");
        assert!(scoring.api_key.is_none());
        assert!(scoring.timeout.is_none());
    }
}
