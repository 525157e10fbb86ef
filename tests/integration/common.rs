//! Shared helpers for integration tests.

/// Installs a test subscriber once so classification events show up with
/// `--nocapture`.
#[cfg(feature = "tracing")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("marketguard=debug")),
        )
        .with_test_writer()
        .try_init();
}

/// No-op without the `tracing` feature.
#[cfg(not(feature = "tracing"))]
pub fn init_tracing() {}
