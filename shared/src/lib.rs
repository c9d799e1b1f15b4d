//! # Shared Screener Types
//!
//! This library defines the contract between the screener desktop client and
//! the screener API server. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::screener`]**: Filter criteria, result rows, response envelopes
//! - **[`utils`]**: Display formatting for result rows
//!   - **[`utils::format_volume`]**: Thousands-separated integers
//!   - **[`utils::format_ratio`]**: Two-decimal percentages
//!   - **[`utils::format_price`]**: Dollar prices
//!   - **[`utils::format_update_date`]**: Calendar date of the last update
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shared::dto::screener::{FilterCriteria, ScreenerResponse};
//! use shared::utils::format_price;
//!
//! # async fn run() -> Result<(), reqwest::Error> {
//! let criteria = FilterCriteria::default();
//!
//! let response: ScreenerResponse = reqwest::Client::new()
//!     .get("http://127.0.0.1:8000/screener")
//!     .query(&criteria)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//!
//! for row in &response.results {
//!     println!("{} {}", row.symbol, format_price(row.last_price));
//! }
//! # Ok(())
//! # }
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library and everything in it is public API
pub use dto::*;
pub use utils::*;
