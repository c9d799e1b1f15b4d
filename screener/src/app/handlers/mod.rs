//! # User Action Handlers
//!
//! State transitions triggered from the UI.

pub mod screener;
