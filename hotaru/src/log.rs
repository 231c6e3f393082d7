use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber, filtered by `RUST_LOG` (default `info`).
///
/// Hosts that bring their own subscriber should skip this.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
