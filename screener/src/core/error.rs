//! # Common Error Types
//!
//! Consolidated error handling for the screener client.
//!
//! ## Error Categories
//!
//! - **Network**: The request never produced a response (connection refused, DNS, timeout)
//! - **Status**: The server answered with a non-success HTTP status
//! - **Decode**: The response body was not the expected JSON
//! - **Config**: Startup configuration is invalid
//!
//! Network, Status and Decode all count as a failed call from the user's point
//! of view. The screen shows one message per operation while the full error is
//! written to the log.
//!
//! ```rust
//! use screener::core::error::AppError;
//!
//! let err = AppError::Status(503);
//! assert_eq!(err.to_string(), "Server responded with status 503");
//! assert!(err.is_request_failure());
//! ```

use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Transport failure before any response was received.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx HTTP status.
    #[error("Server responded with status {0}")]
    Status(u16),

    /// Malformed or unexpected response body.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Whether this error came from talking to the screener API.
    pub fn is_request_failure(&self) -> bool {
        matches!(self, AppError::Network(_) | AppError::Status(_) | AppError::Decode(_))
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            AppError::Status(status.as_u16())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            AppError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(
            AppError::Decode("missing field `results`".to_string()).to_string(),
            "Failed to parse response: missing field `results`"
        );
        assert_eq!(
            AppError::Config("SCREENER_API_URL is empty".to_string()).to_string(),
            "Configuration error: SCREENER_API_URL is empty"
        );
    }

    #[test]
    fn test_request_failure_kinds() {
        assert!(AppError::Network(String::new()).is_request_failure());
        assert!(AppError::Status(500).is_request_failure());
        assert!(AppError::Decode(String::new()).is_request_failure());
        assert!(!AppError::Config(String::new()).is_request_failure());
    }
}
