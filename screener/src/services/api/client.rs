//! # API Client
//!
//! HTTP client for the screener API.

use async_trait::async_trait;
use reqwest::Client;
use shared::dto::screener::{FilterCriteria, ScreenerResponse};

use crate::config::ScreenerConfig;
use crate::core::{AppError, Result, ScreenerService};

/// HTTP client for communicating with the screener API server.
///
/// Holds a pooled `reqwest::Client`; cloning is cheap.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the configured base URL.
    ///
    /// Every request is bounded by `config.request_timeout`.
    pub fn new(config: &ScreenerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build an absolute URL for an API path such as `/screener`.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ScreenerService for ApiClient {
    async fn ping(&self) -> Result<()> {
        super::screener::ping(self).await
    }

    async fn screen(&self, criteria: &FilterCriteria) -> Result<ScreenerResponse> {
        super::screener::screen(self, criteria).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
