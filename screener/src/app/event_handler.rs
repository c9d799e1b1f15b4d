//! # Event Handler
//!
//! Applies background task results to the application state.

use shared::dto::screener::ScreenerResponse;

use crate::app::state::{ApiStatus, CONNECTIVITY_ERROR_MESSAGE, FETCH_ERROR_MESSAGE};
use crate::app::{App, AppEvent};
use crate::core::AppError;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::ConnectivityChecked(result) => self.handle_connectivity_checked(result),
            AppEvent::ScreenerResult(result) => self.handle_screener_result(result),
        }
    }
}

impl App {
    fn handle_connectivity_checked(&mut self, result: Result<(), AppError>) {
        let mut state = self.state.write();
        match result {
            Ok(()) => {
                state.api_status = ApiStatus::Online;
                tracing::info!(api_url = %state.api_url(), "API connection verified");
            }
            Err(e) => {
                state.api_status = ApiStatus::Offline;
                state.view.error = Some(CONNECTIVITY_ERROR_MESSAGE.to_string());
                tracing::error!(error = %e, api_url = %state.api_url(), "Cannot connect to the API");
            }
        }
    }

    fn handle_screener_result(&mut self, result: Result<ScreenerResponse, AppError>) {
        let mut state = self.state.write();
        state.view.loading = false;

        match result {
            Ok(response) => {
                tracing::info!(
                    result_count = response.results.len(),
                    total_found = ?response.total_found,
                    "Screener results received"
                );
                state.api_status = ApiStatus::Online;
                state.results = response.results;
                state.last_updated = Some(chrono::Local::now());
                state.view.current_page = 1;
                state.view_dirty = true;
            }
            Err(e) => {
                // Previous results stay on screen
                tracing::error!(
                    error = %e,
                    retained_rows = state.results.len(),
                    "Failed to fetch screener results"
                );
                if matches!(e, AppError::Network(_)) {
                    state.api_status = ApiStatus::Offline;
                }
                state.view.error = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }
    }
}
