use tracing_subscriber::EnvFilter;

/// Stdout-only tracing setup; `RUST_LOG` overrides the default level.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}
