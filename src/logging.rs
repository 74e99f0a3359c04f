//! Diagnostic logging setup
//!
//! Log output goes to stderr through `tracing-subscriber`. `RUST_LOG`
//! overrides the default filter.

use tracing_subscriber::EnvFilter;

/// Default directive when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "telekg=info";

pub fn build_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { "telekg=debug" } else { DEFAULT_FILTER };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_target(false)
        .try_init();
}
