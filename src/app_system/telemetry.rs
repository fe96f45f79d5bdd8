/// Installs the process-wide tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` applies. Calling this
/// again after a subscriber is installed is a no-op.
pub fn setup_tracing(default_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .try_init();
}
