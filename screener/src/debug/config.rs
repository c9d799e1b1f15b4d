//! Logging configuration from environment variables

use std::path::PathBuf;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "screener=info,warn";

/// Rotated log file name prefix
pub const LOG_FILE_NAME: &str = "screener.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    /// Log level filter (e.g., "screener=debug,info")
    pub log_level: String,
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Mirror logs to stderr
    pub log_to_stdout: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: PathBuf::from("logs"),
            log_to_stdout: false,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            log_level: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_dir: lookup("SCREENER_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("logs")),
            log_to_stdout: lookup("SCREENER_LOG_STDOUT")
                .map(|v| v == "1")
                .unwrap_or(false),
        }
    }

    /// Path of today's log file prefix
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
