//! # Screener API Client Module
//!
//! HTTP client for the screener API server.
//!
//! ```text
//! api/
//! ├── mod.rs       - Module exports
//! ├── client.rs    - ApiClient struct, ScreenerService impl
//! └── screener.rs  - GET / and GET /screener
//! ```

pub mod client;
pub mod screener;


pub use client::ApiClient;
