//! # Application Configuration
//!
//! Settings loaded from environment variables (and `.env` when present).
//! Validated on startup so a bad URL fails fast instead of on the first search.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `SCREENER_API_URL` | `http://127.0.0.1:8000` | Base URL of the screener API |
//! | `SCREENER_HTTP_TIMEOUT_SECS` | `30` | Per-request timeout (1..=300) |

use std::env;
use std::time::Duration;

use crate::core::{AppError, Result};

/// Default API location when nothing is configured
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MAX_TIMEOUT_SECS: u64 = 300;

/// Client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenerConfig {
    /// Base URL without trailing slash
    pub api_url: String,
    /// Timeout applied to every HTTP request
    pub request_timeout: Duration,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ScreenerConfig {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is read first; variables already
    /// set in the environment take precedence.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("SCREENER_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let request_timeout = match lookup("SCREENER_HTTP_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|e| {
                    AppError::Config(format!(
                        "SCREENER_HTTP_TIMEOUT_SECS must be a whole number of seconds: {}",
                        e
                    ))
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let config = Self {
            api_url,
            request_timeout,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.api_url.is_empty() {
            return Err(AppError::Config("SCREENER_API_URL is empty".to_string()));
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "SCREENER_API_URL must start with http:// or https://, got {}",
                self.api_url
            )));
        }

        let secs = self.request_timeout.as_secs();
        if secs == 0 || secs > MAX_TIMEOUT_SECS {
            return Err(AppError::Config(format!(
                "SCREENER_HTTP_TIMEOUT_SECS must be between 1 and {}",
                MAX_TIMEOUT_SECS
            )));
        }

        Ok(())
    }
}
