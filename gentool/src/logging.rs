//! Tracing setup for the gentool binary.
//!
//! - **Tracing (this module)**: diagnostics via `RUST_LOG`, output to stderr.
//! - **Tool outcome lines (`io/measure`)**: emitted as `tracing` events with a
//!   `tool` field, so they share this subscriber.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `info` if unset so tool outcomes are shown.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=gentool=debug gentool map-transform
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
