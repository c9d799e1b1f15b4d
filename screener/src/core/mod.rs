//! # Core Abstractions
//!
//! Error types and the service trait shared by the app and services layers.
//!
//! - **[`error`]**: Application error type (`AppError`, `Result<T>`)
//! - **[`service`]**: Service trait for dependency injection (`ScreenerService`)
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use screener::core::ScreenerService;
//!
//! // In production: the reqwest-backed client
//! let api: Arc<dyn ScreenerService> = Arc::new(ApiClient::new(&config)?);
//!
//! // In tests: a stub
//! let api: Arc<dyn ScreenerService> = Arc::new(StubService::ok(rows));
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::ScreenerService;
