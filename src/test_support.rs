use tracing_subscriber::EnvFilter;

/// Route `tracing` output through the test harness; `RUST_LOG` overrides the filter.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "pagekeeper=debug".into()),
        )
        .with_test_writer()
        .try_init();
}
