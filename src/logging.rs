//! Logging setup for the command-line binary
//!
//! The library only emits `tracing` events; installing a subscriber is left to the binary.
//! Logs go to stderr so that previews written to stdout stay machine-readable.

use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` wins, otherwise `level` (or `warn` when `quiet`)
pub fn env_filter(level: &str, quiet: bool) -> EnvFilter {
    let effective_level = if quiet { "warn" } else { level };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level))
}

/// Install the global subscriber. Call once at startup.
pub fn init(level: &str, quiet: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level, quiet))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
