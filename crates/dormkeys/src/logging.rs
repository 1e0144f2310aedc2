//! Tracing subscriber setup for operator-facing binaries.
//!
//! Logs go to stderr so that reports printed on stdout stay clean.
//! `RUST_LOG` overrides the default filter.

use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt};

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "dormkeys=debug" } else { "dormkeys=warn" }
}

/// Installs the global subscriber.
///
/// # Errors
/// Fails if a global subscriber has already been installed.
pub fn init(verbose: bool) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
}
