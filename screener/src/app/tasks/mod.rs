//! # Async Tasks
//!
//! Network calls spawned on the Tokio runtime; results come back as `AppEvent`s.

pub mod screener;
