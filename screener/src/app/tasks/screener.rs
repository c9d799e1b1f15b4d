//! # Screener Tasks
//!
//! Liveness probe and screener request.

use std::sync::Arc;
use std::time::Instant;

use async_channel::Sender;
use parking_lot::RwLock;
use tokio::spawn;
use tracing::{debug, info, warn, Instrument};
use uuid::Uuid;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::AppError;

/// Probe the API root once.
pub(crate) fn check_connectivity(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = {
        let state = state.read();
        state.api_client.clone()
    };

    let Some(api_client) = api_client else {
        warn!("No API client configured - skipping connectivity check");
        return;
    };

    spawn(async move {
        let result = api_client.ping().await;
        let _ = event_tx.send(AppEvent::ConnectivityChecked(result)).await;
    });
}

/// Sends exactly one `ScreenerResult` per request, even if the task unwinds.
struct ScreenerCompletion {
    event_tx: Sender<AppEvent>,
    sent: bool,
}

impl ScreenerCompletion {
    fn new(event_tx: Sender<AppEvent>) -> Self {
        Self { event_tx, sent: false }
    }

    fn finish(mut self, result: Result<shared::dto::screener::ScreenerResponse, AppError>) {
        self.sent = true;
        let _ = self.event_tx.try_send(AppEvent::ScreenerResult(result));
    }
}

impl Drop for ScreenerCompletion {
    fn drop(&mut self) {
        if !self.sent {
            let _ = self.event_tx.try_send(AppEvent::ScreenerResult(Err(AppError::Network(
                "screener request aborted".to_string(),
            ))));
        }
    }
}

/// Enter the loading state and request results for the current filters.
///
/// No de-duplication: a second submit while one is in flight issues a second
/// request, and whichever finishes last wins.
pub(crate) fn submit_filters(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, criteria) = {
        let mut state = state.write();
        state.view.loading = true;
        state.view.error = None;
        (state.api_client.clone(), state.filters.clone())
    };

    let completion = ScreenerCompletion::new(event_tx);

    let Some(api_client) = api_client else {
        warn!("No API client configured - screener request not sent");
        completion.finish(Err(AppError::Config("no API client configured".to_string())));
        return;
    };

    let request_id = Uuid::new_v4();
    info!(
        request_id = %request_id,
        volume = criteria.volume,
        max_ratr = criteria.max_ratr,
        trend = ?criteria.trend,
        mode = ?criteria.mode,
        thresholds = ?criteria.active_thresholds(),
        "Submitting screener filters"
    );

    let span = tracing::info_span!("screener_request", request_id = %request_id);
    spawn(
        async move {
            let start = Instant::now();
            let result = api_client.screen(&criteria).await;

            match &result {
                Ok(response) => debug!(
                    result_count = response.results.len(),
                    duration_ms = start.elapsed().as_millis(),
                    "Screener request completed"
                ),
                Err(e) => warn!(
                    error = %e,
                    duration_ms = start.elapsed().as_millis(),
                    "Screener request failed"
                ),
            }

            completion.finish(result);
        }
        .instrument(span),
    );
}
