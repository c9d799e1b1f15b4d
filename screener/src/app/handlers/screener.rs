//! # Screener Handlers
//!
//! Sort, paging and filter edits. Handlers only change state and mark the
//! view dirty; the table is rebuilt on the next tick.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::dto::screener::FilterCriteria;

use crate::app::state::AppState;
use crate::app::view::{self, PageDirection, PriceRange, SortDirection, SortField};

/// Header click: same column toggles direction, another column sorts ascending.
pub fn handle_sort(state: Arc<RwLock<AppState>>, field: Option<SortField>) {
    let mut state = state.write();
    if state.view.sort_field == field {
        state.view.sort_direction = state.view.sort_direction.toggled();
    } else {
        state.view.sort_field = field;
        state.view.sort_direction = SortDirection::Ascending;
    }
    state.view_dirty = true;

    tracing::debug!(
        field = ?state.view.sort_field,
        direction = ?state.view.sort_direction,
        "Sort changed"
    );
}

/// Previous/next page, clamped to the available pages.
pub fn handle_page_change(state: Arc<RwLock<AppState>>, direction: PageDirection) {
    let mut state = state.write();
    let pages = state.total_pages();
    state.view.current_page = view::step_page(state.view.current_page, direction, pages);
}

/// New client-side price bounds.
pub fn handle_price_range_change(state: Arc<RwLock<AppState>>, range: PriceRange) {
    let mut state = state.write();
    if state.price_range != range {
        state.price_range = range;
        state.view_dirty = true;
    }
}

/// New server-side criteria for the next search.
pub fn handle_filters_change(state: Arc<RwLock<AppState>>, criteria: FilterCriteria) {
    let mut state = state.write();
    state.filters = criteria;
}
