//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set; otherwise the supplied default directive is used.
//!
//! ```ignore
//! folio_core::logging::init("info,folio=debug");
//! tracing::info!("page mounted");
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Directive used when neither `RUST_LOG` nor the caller provides one.
pub const DEFAULT_FILTER: &str = "info";

/// Build the filter from `RUST_LOG`, falling back to `default_filter`.
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber (console `fmt` layer behind an `EnvFilter`).
///
/// Returns `false` if a subscriber was already installed, which is harmless
/// in tests that call this more than once.
pub fn init(default_filter: &str) -> bool {
    tracing_subscriber::registry()
        .with(env_filter(default_filter))
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .is_ok()
}
