//! # Service Traits
//!
//! The seam between the screener view and the HTTP API, so the view can be
//! driven by a stub in tests.

use async_trait::async_trait;
use shared::dto::screener::{FilterCriteria, ScreenerResponse};

use super::error::Result;

/// Screener API operations
#[async_trait]
pub trait ScreenerService: Send + Sync {
    /// Liveness probe against the API root
    async fn ping(&self) -> Result<()>;

    /// Run the screener with the given criteria
    async fn screen(&self, criteria: &FilterCriteria) -> Result<ScreenerResponse>;

    /// Base URL requests go to, for display
    fn base_url(&self) -> &str;
}
