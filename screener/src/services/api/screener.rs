//! # Screener Endpoints
//!
//! `GET /` (liveness) and `GET /screener` (filter run).

use std::time::Instant;

use shared::dto::screener::{FilterCriteria, HealthResponse, ScreenerResponse};

use super::client::ApiClient;
use crate::core::{AppError, Result};

/// Probe the API root.
///
/// Any 2xx counts as alive; the body is optional and only logged.
#[tracing::instrument(skip(client))]
pub async fn ping(client: &ApiClient) -> Result<()> {
    let start = Instant::now();
    let url = client.url("/");

    let response = client.client.get(&url).send().await.map_err(|e| {
        tracing::error!(error = %e, url = %url, "API root unreachable");
        AppError::Network(e.to_string())
    })?;

    let status = response.status();
    let duration = start.elapsed();

    if !status.is_success() {
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "API root answered with non-success status"
        );
        return Err(AppError::Status(status.as_u16()));
    }

    match response.json::<HealthResponse>().await {
        Ok(health) => tracing::info!(
            status = %health.status,
            message = %health.message,
            duration_ms = duration.as_millis(),
            "API connection successful"
        ),
        Err(_) => tracing::info!(
            duration_ms = duration.as_millis(),
            "API connection successful (no health body)"
        ),
    }

    Ok(())
}

/// Run the screener with `criteria` encoded as query parameters.
#[tracing::instrument(skip(client, criteria), fields(trend = ?criteria.trend, mode = ?criteria.mode))]
pub async fn screen(client: &ApiClient, criteria: &FilterCriteria) -> Result<ScreenerResponse> {
    let start = Instant::now();
    let url = client.url("/screener");

    tracing::debug!(url = %url, criteria = ?criteria, "Requesting screener results");

    let response = client
        .client
        .get(&url)
        .query(criteria)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, url = %url, "Screener request network error");
            AppError::Network(e.to_string())
        })?;

    let status = response.status();
    let duration = start.elapsed();

    if !status.is_success() {
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Screener request failed with non-success status"
        );
        return Err(AppError::Status(status.as_u16()));
    }

    let body = response.json::<ScreenerResponse>().await.map_err(|e| {
        tracing::error!(error = %e, duration_ms = duration.as_millis(), "Screener response parse error");
        AppError::Decode(e.to_string())
    })?;

    if let Some(errors) = body.errors.as_ref().filter(|e| !e.is_empty()) {
        tracing::warn!(count = errors.len(), errors = ?errors, "API warnings");
    }

    tracing::debug!(
        result_count = body.results.len(),
        total_found = ?body.total_found,
        status = status.as_u16(),
        duration_ms = duration.as_millis(),
        "Screener results fetched successfully"
    );

    Ok(body)
}
