//! Logging setup for applications embedding the engine.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the application.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with an `info` default.
///
/// Sets up tracing-subscriber with:
/// - Environment filter (RUST_LOG)
/// - Compact format suitable for terminal output
pub fn init() -> Result<(), TryInitError> {
    init_with_filter("info")
}

/// Initialize tracing with a custom default filter, e.g. `fuzzrank=trace`.
pub fn init_with_filter(default_filter: &str) -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init()
}
