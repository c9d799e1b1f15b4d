//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the screener API over HTTP.
//!
//! ## Module Organization
//!
//! - [`screener`] - Filter criteria (query parameters), result rows, health probe
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: Serialize to snake_case strings using `#[serde(rename_all = "snake_case")]`
//!
//! ## Example Exchange
//!
//! ```text
//! GET /screener?volume=500000&max_ratr=999&trend=long&mode=two_halves&sma_pct_first=80&sma_pct_second=100&sma_pct_entire=100
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "results": [
//!     {
//!       "symbol": "AAPL",
//!       "avg_1yr_volume": 54000000,
//!       "atr_ratio": 1.84,
//!       "last_price": 227.5,
//!       "last_update": "2024-10-18"
//!     }
//!   ],
//!   "errors": ["Error bij TSLA: rate limit"],
//!   "total_found": 1
//! }
//! ```

pub mod screener;

pub use screener::*;
