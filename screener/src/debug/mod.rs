//! # Logging Infrastructure
//!
//! File-based structured logging for the screener GUI. A desktop app has no
//! useful console on most platforms, so logs go to `logs/screener.log`
//! (daily rotation) and panics are captured there too.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `screener=info,warn`)
//! - `SCREENER_LOG_DIR`: Log directory (default `logs`)
//! - `SCREENER_LOG_STDOUT`: Also log to stderr (`1` = on)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init as init_logger;

/// Initialize logging. Call once at startup, before anything else logs.
pub fn init() {
    init_logger();
}
