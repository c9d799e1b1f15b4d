//! # Utility Functions
//!
//! - **[`runtime`]**: Process-wide Tokio runtime
//!
//! Display formatting lives in [`shared::utils`].

pub mod runtime;
