//! Process-wide observability setup (tracing/logging).

/// Initialize tracing/logging for the process.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init() {
    tracing::init();
}

/// Tracing subscriber configuration.
pub mod tracing {
    use tracing_subscriber::EnvFilter;

    /// Install the global subscriber: JSON lines to stdout, level filtering
    /// via `RUST_LOG` (default `info`).
    pub fn init() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false)
            .try_init();
    }
}
