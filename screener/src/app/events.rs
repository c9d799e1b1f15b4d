//! # Application Events
//!
//! Results sent from background tasks to the main thread.

use shared::dto::screener::ScreenerResponse;

use crate::core::AppError;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Liveness probe finished
    ConnectivityChecked(Result<(), AppError>),
    /// Screener request finished (always sent once per submit)
    ScreenerResult(Result<ScreenerResponse, AppError>),
}
