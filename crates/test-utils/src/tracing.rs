use tracing_subscriber::EnvFilter;

/// Routes `tracing` output of the kernel to the test harness.
///
/// Filtered by `RUST_LOG`, silent by default. Safe to call from every test.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
