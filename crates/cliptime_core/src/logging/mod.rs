//! Logging setup for the clip time engine.
//!
//! The engine itself only emits `tracing` events. Hosts embedding it call
//! [`init_tracing`] once at startup to get them on stderr.
//!
//! # Example
//!
//! ```no_run
//! use cliptime_core::logging::{init_tracing, LogLevel};
//!
//! init_tracing(LogLevel::Debug);
//! tracing::info!("engine ready");
//! ```

mod types;

pub use types::LogLevel;

use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
fn default_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level.to_tracing_level()).into())
        .parse_lossy("")
}

/// Initialize global tracing subscriber for application-wide logging.
///
/// This sets up a subscriber that:
/// - Respects RUST_LOG environment variable
/// - Falls back to the provided default level
/// - Outputs to stderr with timestamps
///
/// Should be called once at application startup.
pub fn init_tracing(default_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(default_level));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .with(filter)
        .init();
}

/// Initialize tracing for tests (only logs warnings and above).
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}
