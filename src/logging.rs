//! Tracing setup for the binary.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_FILTER: &str = "warn";

/// Picks the log filter: `RUST_LOG` first, then the configured filter.
///
/// A configured filter that does not parse falls back to [`DEFAULT_FILTER`].
#[must_use]
pub fn resolve_filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        configured
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
    })
}

/// Initializes tracing to stderr, leaving stdout for JSON output.
///
/// Does nothing if a global subscriber is already installed.
pub fn init_tracing(configured: Option<&str>) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    // Ignore the error: a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(resolve_filter(configured))
        .with(layer)
        .try_init();
}
