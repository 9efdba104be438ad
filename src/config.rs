//! Configuration for TokenLabs.
//!
//! Values are loaded with priority: env var > default. `GEMINI_API_KEY`
//! may live in a `.env` file (loaded via dotenvy early in startup).

use std::time::Duration;

use secrecy::SecretString;

use crate::error::ConfigError;

const DEFAULT_ADVISORY_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_ADVISORY_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_ADVISORY_TIMEOUT_SECS: u64 = 30;

/// Read an env var, treating unset and blank as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Configuration for the advisory (generative-text) service boundary.
#[derive(Debug, Clone)]
pub struct AdvisoryConfig {
    /// API key for the generation service. Absent keys are not an error:
    /// requests simply fail and the advisory fallbacks kick in.
    pub api_key: Option<SecretString>,
    /// Base URL of the generation API.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Request timeout. The only timeout applied to advisory calls.
    pub timeout: Duration,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_ADVISORY_BASE_URL.to_string(),
            model: DEFAULT_ADVISORY_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_ADVISORY_TIMEOUT_SECS),
        }
    }
}

impl AdvisoryConfig {
    /// Load from the environment, falling back to defaults per field.
    pub fn from_env() -> Result<Self, ConfigError> {
        let timeout = match optional_env("ADVISORY_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "ADVISORY_TIMEOUT_SECS".to_string(),
                    message: format!("expected an integer number of seconds, got '{raw}'"),
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_ADVISORY_TIMEOUT_SECS),
        };

        Ok(Self {
            api_key: optional_env("GEMINI_API_KEY").map(SecretString::from),
            base_url: optional_env("ADVISORY_BASE_URL")
                .unwrap_or_else(|| DEFAULT_ADVISORY_BASE_URL.to_string()),
            model: optional_env("ADVISORY_MODEL")
                .unwrap_or_else(|| DEFAULT_ADVISORY_MODEL.to_string()),
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_gemini() {
        let config = AdvisoryConfig::default();
        assert!(config.base_url.contains("generativelanguage"));
        assert_eq!(config.model, "gemini-3-flash-preview");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.api_key.is_none());
    }
}
