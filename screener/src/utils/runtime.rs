//! Global Tokio runtime for async HTTP operations
//!
//! eframe owns the main thread and never polls futures, but reqwest needs a
//! Tokio reactor. Entering this runtime before the window opens lets
//! `tokio::spawn` work from egui callbacks; results come back through the
//! app's event channel.
//!
//! Usage:
//! ```rust,no_run
//! use screener::utils::runtime::TOKIO_RT;
//!
//! let _guard = TOKIO_RT.enter();
//! tokio::spawn(async move {
//!     // HTTP call, then send an AppEvent
//! });
//! ```

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

#[allow(clippy::expect_used)]
pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async HTTP operations")
});
