//! # Stock Screener - Library Root
//!
//! A **native desktop GUI** for a stock screener API. The user sets volume,
//! volatility and SMA trend filters, the server returns matching stocks, and
//! the client filters them by price, sorts and pages them locally.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              screener (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe - Immediate-mode GUI and native window  │
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP (GET / and GET /screener)
//!          ▼
//! ┌─────────────────┐
//! │  Screener API   │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: State, events, handlers and background tasks
//! - **config**: Environment-driven client settings
//! - **core**: Error type and the `ScreenerService` trait
//! - **debug**: File logging and panic capture
//! - **services**: HTTP client for the screener API
//! - **ui**: egui rendering (screen, widgets, theme)
//! - **utils**: Tokio runtime shared with the GUI thread
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (state, events, handlers, tasks)
//!   │   └── services::api (HTTP requests)
//!   │
//!   └── ui (rendering)
//!       ├── screens::screener
//!       ├── widgets::{forms, tables}
//!       └── theme
//! ```
//!
//! ## Core Concepts
//!
//! Network calls run on Tokio tasks and report back to the GUI thread through
//! an unbounded channel of [`AppEvent`]s, drained once per frame. State lives
//! in `Arc<RwLock<AppState>>` and is locked only briefly.
//!
//! ## Usage
//!
//! ```bash
//! SCREENER_API_URL=http://127.0.0.1:8000 cargo run --bin screener
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, AppState};
pub use config::ScreenerConfig;
pub use core::{AppError, Result};
