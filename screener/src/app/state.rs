//! # Application State Types
//!
//! The screener view's state: filter form, server results, and the derived
//! table view.

use std::sync::Arc;

use chrono::{DateTime, Local};
use shared::dto::screener::{FilterCriteria, StockResult};

use super::view::{self, PriceRange, SortDirection, SortField, PAGE_SIZE};
use crate::core::ScreenerService;

/// Message shown when a screener call fails
pub const FETCH_ERROR_MESSAGE: &str =
    "An error occurred while fetching data. Please try again later.";

/// Message shown when the liveness probe fails
pub const CONNECTIVITY_ERROR_MESSAGE: &str =
    "Cannot connect to the API. Check that the backend is running.";

/// Result of the most recent liveness probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiStatus {
    #[default]
    Unknown,
    Online,
    Offline,
}

/// Observable phase of the screener view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing requested yet, or the last request returned no visible rows
    Idle,
    /// A screener request is in flight
    Loading,
    /// Rows are on screen
    ResultsShown,
    /// The error message is on screen
    ErrorShown,
}

/// Table presentation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// `None` after a click on an unknown column: rows keep their order
    pub sort_field: Option<SortField>,
    pub sort_direction: SortDirection,
    /// 1-based
    pub current_page: usize,
    pub page_size: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            sort_field: Some(SortField::Symbol),
            sort_direction: SortDirection::Ascending,
            current_page: 1,
            page_size: PAGE_SIZE,
            loading: false,
            error: None,
        }
    }
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Criteria sent with the next search
    pub filters: FilterCriteria,
    /// Client-side last price bounds
    pub price_range: PriceRange,
    /// Rows exactly as the server returned them
    pub results: Vec<StockResult>,
    /// `sort(filter(results, price_range))`, rebuilt by [`AppState::refresh_view`]
    pub rows: Vec<StockResult>,
    pub view: ViewState,
    /// Set by handlers; the next tick rebuilds `rows`
    pub view_dirty: bool,
    pub api_status: ApiStatus,
    /// When the last successful search completed
    pub last_updated: Option<DateTime<Local>>,
    /// Screener API client
    pub api_client: Option<Arc<dyn ScreenerService>>,
}

impl AppState {
    pub fn new(api_client: Option<Arc<dyn ScreenerService>>) -> Self {
        Self {
            filters: FilterCriteria::default(),
            price_range: PriceRange::default(),
            results: Vec::new(),
            rows: Vec::new(),
            view: ViewState::default(),
            view_dirty: false,
            api_status: ApiStatus::Unknown,
            last_updated: None,
            api_client,
        }
    }

    /// Rebuild the visible rows and pull the current page back into range.
    pub fn refresh_view(&mut self) {
        self.rows = view::derive_rows(
            &self.results,
            self.price_range,
            self.view.sort_field,
            self.view.sort_direction,
        );
        let last = self.total_pages().max(1);
        self.view.current_page = self.view.current_page.clamp(1, last);
        self.view_dirty = false;
    }

    pub fn total_pages(&self) -> usize {
        view::total_pages(self.rows.len())
    }

    /// Rows on the current page
    pub fn page_rows(&self) -> &[StockResult] {
        view::page_slice(&self.rows, self.view.current_page)
    }

    pub fn has_previous_page(&self) -> bool {
        self.view.current_page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.view.current_page < self.total_pages()
    }

    pub fn phase(&self) -> Phase {
        if self.view.loading {
            Phase::Loading
        } else if self.view.error.is_some() {
            Phase::ErrorShown
        } else if !self.rows.is_empty() {
            Phase::ResultsShown
        } else {
            Phase::Idle
        }
    }

    /// Base URL for the status bar
    pub fn api_url(&self) -> &str {
        self.api_client
            .as_ref()
            .map(|c| c.base_url())
            .unwrap_or("not configured")
    }
}
