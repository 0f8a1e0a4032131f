//! Process-wide tracing/logging setup shared by tests and dev binaries.

use tracing_subscriber::EnvFilter;

/// Install the process-wide subscriber: env-filtered (`RUST_LOG`,
/// defaulting to `info`), JSON-formatted log lines.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_current_span(false)
        .try_init();
}
