//! File-based logging initialization

use std::fs;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use super::config::{DebugConfig, DEFAULT_LOG_LEVEL, LOG_FILE_NAME};

/// Initialize the logging system
///
/// - Daily rotation of `screener.log` in the log directory
/// - Non-blocking writes so the UI thread never waits on disk
/// - Optional stderr mirror
/// - Panic hook that records panics in the log
///
/// If the log directory cannot be created, logging is left uninitialized and
/// the app keeps running.
pub fn init() {
    let config = DebugConfig::from_env();

    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    let stdout_layer = config
        .log_to_stdout
        .then(|| fmt::layer().with_writer(std::io::stderr).with_target(true).boxed());

    let initialized = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .try_init();

    if let Err(e) = initialized {
        eprintln!("Warning: Logging already initialized: {}", e);
        return;
    }

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        stdout = config.log_to_stdout,
        "Logging initialized"
    );

    setup_panic_hook();

    // Flush thread lives for the whole process
    std::mem::forget(guard);
}

/// Log panics with location and backtrace before the default handler runs
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        let backtrace = std::backtrace::Backtrace::force_capture();
        tracing::error!(
            location = %location,
            message = %message,
            "Application panic"
        );
        tracing::error!(backtrace = %backtrace, "Panic backtrace");

        default_panic(panic_info);
    }));
}
