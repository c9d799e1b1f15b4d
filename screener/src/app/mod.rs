//! # Application Orchestrator
//!
//! The [`App`] struct coordinates the egui frame loop, background HTTP tasks
//! and the screener state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  App                                                        │
//! │  - on_tick()        drain events, rebuild dirty table view  │
//! │  - submit_filters() / sort_by() / change_page()             │
//! │               │                                             │
//! │  State: Arc<RwLock<AppState>>                               │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Tokio tasks                                    │
//! │  - check_connectivity()  GET /                              │
//! │  - submit_filters()      GET /screener                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Machine
//!
//! `Idle → Loading → {ResultsShown | ErrorShown}`, re-entered on every
//! submit. See [`Phase`].
//!
//! ## Derived View
//!
//! User actions only change inputs (sort, page, price range) and mark the
//! view dirty. [`App::on_tick`] rebuilds the visible rows afterwards, so the
//! table always equals `sort(filter(results, price_range))` sliced to the
//! current page.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use screener::app::App;
//! use screener::config::ScreenerConfig;
//!
//! # fn main() -> screener::Result<()> {
//! let _rt = screener::utils::runtime::TOKIO_RT.enter();
//! let mut app = App::new(&ScreenerConfig::default())?;
//!
//! // In egui update loop:
//! app.on_tick();
//! app.submit_filters();
//! # Ok(())
//! # }
//! ```

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;
pub mod view;

pub use events::AppEvent;
pub use state::*;
pub use view::{PageDirection, PriceRange, SortDirection, SortField, PAGE_SIZE};

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::dto::screener::FilterCriteria;

use crate::config::ScreenerConfig;
use crate::core::{Result, ScreenerService};
use crate::services::api::ApiClient;

/// Main application orchestrator.
///
/// Must be created inside a Tokio runtime context: construction spawns the
/// connectivity check.
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// Hold locks briefly; rendering works on a cloned snapshot.
    pub state: Arc<RwLock<AppState>>,

    /// Results from background tasks, polled in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,

    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create the app against the configured API.
    pub fn new(config: &ScreenerConfig) -> Result<Self> {
        let api_client = ApiClient::new(config)?;
        Ok(Self::with_service(Arc::new(api_client)))
    }

    /// Create the app with an arbitrary service implementation.
    pub fn with_service(service: Arc<dyn ScreenerService>) -> Self {
        let (event_tx, event_rx) = unbounded();

        let app = App {
            state: Arc::new(RwLock::new(AppState::new(Some(service)))),
            event_rx,
            event_tx,
        };

        tasks::screener::check_connectivity(app.state.clone(), app.event_tx.clone());

        tracing::info!(
            api_url = %app.state.read().api_url(),
            "App state initialized - connectivity check started"
        );

        app
    }

    /// Called every frame: apply pending task results, then rebuild the
    /// table view if anything changed.
    pub fn on_tick(&mut self) {
        let mut events_processed = 0u32;
        while let Ok(event) = self.event_rx.try_recv() {
            events_processed += 1;
            self.handle_event(event);
        }

        if events_processed > 0 {
            tracing::debug!(events_processed, "on_tick: processed events");
        }

        let mut state = self.state.write();
        if state.view_dirty {
            state.refresh_view();
        }
    }

    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    /// Search button: send the current filters to the API.
    pub fn submit_filters(&mut self) {
        tasks::screener::submit_filters(self.state.clone(), self.event_tx.clone());
    }

    /// Header click on a known column.
    pub fn sort_by(&mut self, field: SortField) {
        handlers::screener::handle_sort(self.state.clone(), Some(field));
    }

    /// Header click by column key; unknown keys disable ordering.
    pub fn sort_by_column(&mut self, column: &str) {
        handlers::screener::handle_sort(self.state.clone(), SortField::from_column(column));
    }

    /// Previous/next page.
    pub fn change_page(&mut self, direction: PageDirection) {
        handlers::screener::handle_page_change(self.state.clone(), direction);
    }

    /// Edit the client-side price bounds.
    pub fn set_price_range(&mut self, range: PriceRange) {
        handlers::screener::handle_price_range_change(self.state.clone(), range);
    }

    /// Edit the server-side filter criteria.
    pub fn set_filters(&mut self, criteria: FilterCriteria) {
        handlers::screener::handle_filters_change(self.state.clone(), criteria);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::view::tests::{numbered, stock};
    use crate::core::AppError;
    use async_trait::async_trait;
    use shared::dto::screener::{ScreenerResponse, SmaMode};
    use shared::utils::{format_price, format_ratio, format_update_date, format_volume};
    use std::collections::VecDeque;
    use std::time::Duration;

    /// Scripted screener API
    struct StubService {
        ping: Result<()>,
        responses: parking_lot::Mutex<VecDeque<Result<ScreenerResponse>>>,
        seen: parking_lot::Mutex<Vec<FilterCriteria>>,
        panic_on_screen: bool,
    }

    impl StubService {
        fn new(ping: Result<()>, responses: Vec<Result<ScreenerResponse>>) -> Self {
            Self {
                ping,
                responses: parking_lot::Mutex::new(responses.into()),
                seen: parking_lot::Mutex::new(Vec::new()),
                panic_on_screen: false,
            }
        }

        fn online(responses: Vec<Result<ScreenerResponse>>) -> Self {
            Self::new(Ok(()), responses)
        }
    }

    #[async_trait]
    impl ScreenerService for StubService {
        async fn ping(&self) -> Result<()> {
            self.ping.clone()
        }

        async fn screen(&self, criteria: &FilterCriteria) -> Result<ScreenerResponse> {
            if self.panic_on_screen {
                panic!("stub exploded");
            }
            self.seen.lock().push(criteria.clone());
            self.responses
                .lock()
                .pop_front()
                .unwrap_or_else(|| Err(AppError::Network("no scripted response".to_string())))
        }

        fn base_url(&self) -> &str {
            "http://stub"
        }
    }

    fn ok(rows: Vec<shared::dto::screener::StockResult>) -> Result<ScreenerResponse> {
        Ok(ScreenerResponse {
            results: rows,
            errors: None,
            total_found: None,
        })
    }

    fn network_error() -> Result<ScreenerResponse> {
        Err(AppError::Network("connection refused".to_string()))
    }

    /// Handle the next event and tick
    async fn pump(app: &mut App) -> AppEvent {
        let event = tokio::time::timeout(Duration::from_secs(5), app.event_rx.recv())
            .await
            .expect("timed out waiting for event")
            .expect("event channel closed");
        app.handle_event(event.clone());
        app.on_tick();
        event
    }

    /// App with the initial connectivity check already applied
    async fn started(stub: StubService) -> (App, Arc<StubService>) {
        let stub = Arc::new(stub);
        let mut app = App::with_service(stub.clone());
        let event = pump(&mut app).await;
        assert!(matches!(event, AppEvent::ConnectivityChecked(_)));
        (app, stub)
    }

    async fn submit(app: &mut App) {
        app.submit_filters();
        let event = pump(app).await;
        assert!(matches!(event, AppEvent::ScreenerResult(_)));
    }

    fn symbols(app: &App) -> Vec<String> {
        app.state.read().rows.iter().map(|r| r.symbol.clone()).collect()
    }

    #[tokio::test]
    async fn test_connectivity_success() {
        let (app, _) = started(StubService::online(vec![])).await;
        let state = app.state.read();
        assert_eq!(state.api_status, ApiStatus::Online);
        assert!(state.view.error.is_none());
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn test_connectivity_failure_sets_error() {
        let stub = StubService::new(Err(AppError::Network("refused".to_string())), vec![]);
        let (app, _) = started(stub).await;
        let state = app.state.read();
        assert_eq!(state.api_status, ApiStatus::Offline);
        assert_eq!(state.view.error.as_deref(), Some(CONNECTIVITY_ERROR_MESSAGE));
        assert_eq!(state.phase(), Phase::ErrorShown);
    }

    #[tokio::test]
    async fn test_submit_after_failed_probe_clears_error() {
        let stub = StubService::new(
            Err(AppError::Status(502)),
            vec![ok(vec![stock("AAA", 1_000_000, 5.2, 150.0, "2024-01-01")])],
        );
        let (mut app, _) = started(stub).await;
        submit(&mut app).await;

        let state = app.state.read();
        assert!(state.view.error.is_none());
        assert_eq!(state.api_status, ApiStatus::Online);
        assert_eq!(state.phase(), Phase::ResultsShown);
    }

    #[tokio::test]
    async fn test_default_filters_single_row() {
        let (mut app, stub) =
            started(StubService::online(vec![ok(vec![stock("AAA", 1_000_000, 5.2, 150.0, "2024-01-01")])])).await;

        app.submit_filters();
        {
            let state = app.state.read();
            assert!(state.view.loading);
            assert_eq!(state.phase(), Phase::Loading);
        }
        pump(&mut app).await;

        let state = app.state.read();
        assert!(!state.view.loading);
        assert_eq!(stub.seen.lock().as_slice(), &[FilterCriteria::default()]);

        let rows = state.page_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].symbol, "AAA");
        assert_eq!(format_volume(rows[0].avg_1yr_volume), "1,000,000");
        assert_eq!(format_ratio(rows[0].atr_ratio), "5.20%");
        assert_eq!(format_price(rows[0].last_price), "$150.00");
        assert_eq!(format_update_date(&rows[0]), "2024-01-01");
    }

    #[tokio::test]
    async fn test_network_error_retains_previous_results() {
        let (mut app, _) = started(StubService::online(vec![ok(numbered(3)), network_error()])).await;
        submit(&mut app).await;
        assert_eq!(app.state.read().rows.len(), 3);

        submit(&mut app).await;

        let state = app.state.read();
        assert!(!state.view.loading);
        assert_eq!(state.view.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
        assert_eq!(state.results.len(), 3);
        assert_eq!(state.rows.len(), 3);
        assert_eq!(state.phase(), Phase::ErrorShown);
    }

    #[tokio::test]
    async fn test_first_submit_failure_shows_error_only() {
        let (mut app, _) = started(StubService::online(vec![network_error()])).await;
        submit(&mut app).await;

        let state = app.state.read();
        assert!(!state.view.loading);
        assert!(state.rows.is_empty());
        assert_eq!(state.view.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn test_panicking_request_still_clears_loading() {
        let mut stub = StubService::online(vec![]);
        stub.panic_on_screen = true;
        let (mut app, _) = started(stub).await;

        submit(&mut app).await;

        let state = app.state.read();
        assert!(!state.view.loading);
        assert_eq!(state.view.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn test_submit_sends_edited_filters() {
        let (mut app, stub) = started(StubService::online(vec![ok(vec![])])).await;
        let criteria = FilterCriteria {
            volume: 2_000_000,
            mode: SmaMode::EntireYear,
            sma_pct_entire: 90.0,
            ..Default::default()
        };
        app.set_filters(criteria.clone());
        submit(&mut app).await;

        assert_eq!(stub.seen.lock().as_slice(), &[criteria]);
    }

    #[tokio::test]
    async fn test_symbol_header_twice_reverses() {
        let rows = vec![
            stock("CCC", 1, 1.0, 1.0, "2024-01-01"),
            stock("AAA", 2, 2.0, 2.0, "2024-01-02"),
            stock("BBB", 3, 3.0, 3.0, "2024-01-03"),
        ];
        let (mut app, _) = started(StubService::online(vec![ok(rows)])).await;
        submit(&mut app).await;
        assert_eq!(symbols(&app), vec!["AAA", "BBB", "CCC"]);

        // Default sort is symbol ascending, so the first click flips it
        app.sort_by_column("volume");
        app.on_tick();
        app.sort_by(SortField::Symbol);
        app.on_tick();
        assert_eq!(app.state.read().view.sort_direction, SortDirection::Ascending);
        assert_eq!(symbols(&app), vec!["AAA", "BBB", "CCC"]);

        app.sort_by(SortField::Symbol);
        assert_eq!(app.state.read().view.sort_direction, SortDirection::Descending);
        // Rebuilt on the next tick, not in the click handler
        assert_eq!(symbols(&app), vec!["AAA", "BBB", "CCC"]);
        app.on_tick();
        assert_eq!(symbols(&app), vec!["CCC", "BBB", "AAA"]);
    }

    #[tokio::test]
    async fn test_unknown_column_keeps_server_order() {
        let rows = vec![
            stock("CCC", 1, 1.0, 1.0, "2024-01-01"),
            stock("AAA", 2, 2.0, 2.0, "2024-01-02"),
        ];
        let (mut app, _) = started(StubService::online(vec![ok(rows)])).await;
        submit(&mut app).await;

        app.sort_by_column("sector");
        app.on_tick();

        assert_eq!(app.state.read().view.sort_field, None);
        assert_eq!(symbols(&app), vec!["CCC", "AAA"]);
    }

    #[tokio::test]
    async fn test_pagination_25_rows() {
        let (mut app, _) = started(StubService::online(vec![ok(numbered(25))])).await;
        submit(&mut app).await;
        assert_eq!(app.state.read().total_pages(), 3);

        app.change_page(PageDirection::Next);
        app.change_page(PageDirection::Next);
        {
            let state = app.state.read();
            assert_eq!(state.view.current_page, 3);
            let page: Vec<&str> = state.page_rows().iter().map(|r| r.symbol.as_str()).collect();
            assert_eq!(page, vec!["S21", "S22", "S23", "S24", "S25"]);
            assert!(!state.has_next_page());
        }

        app.change_page(PageDirection::Next);
        assert_eq!(app.state.read().view.current_page, 3);

        for _ in 0..5 {
            app.change_page(PageDirection::Previous);
        }
        assert_eq!(app.state.read().view.current_page, 1);
    }

    #[tokio::test]
    async fn test_new_results_reset_to_first_page() {
        let (mut app, _) = started(StubService::online(vec![ok(numbered(25)), ok(numbered(25))])).await;
        submit(&mut app).await;
        app.change_page(PageDirection::Next);
        assert_eq!(app.state.read().view.current_page, 2);

        submit(&mut app).await;
        assert_eq!(app.state.read().view.current_page, 1);
    }

    #[tokio::test]
    async fn test_price_range_refilters_without_touching_results() {
        let (mut app, _) = started(StubService::online(vec![ok(numbered(25))])).await;
        submit(&mut app).await;

        app.set_price_range(PriceRange { min: 5.0, max: 7.0 });
        app.on_tick();
        assert_eq!(symbols(&app), vec!["S05", "S06", "S07"]);
        assert_eq!(app.state.read().results, numbered(25));

        app.set_price_range(PriceRange::default());
        app.on_tick();
        assert_eq!(app.state.read().rows.len(), 25);
    }

    #[tokio::test]
    async fn test_price_range_applies_to_incoming_results() {
        let (mut app, _) = started(StubService::online(vec![ok(numbered(25))])).await;
        app.set_price_range(PriceRange { min: 20.0, max: 100.0 });
        submit(&mut app).await;

        assert_eq!(app.state.read().rows.len(), 6);
        assert_eq!(app.state.read().results.len(), 25);
    }
}
