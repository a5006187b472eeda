//! Tracing subscriber setup for the binary
//!
//! Log lines go to stderr so they never interleave with game output.

use std::io::IsTerminal;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt};

/// Install the global subscriber
///
/// The filter comes from `RUST_LOG`, falling back to `default_filter`.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(default_filter: &str) -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal());

    Registry::default().with(filter).with(fmt_layer).try_init()
}
