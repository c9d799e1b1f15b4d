//! # External Services
//!
//! - **[`api`]**: HTTP client for the screener API

pub mod api;
