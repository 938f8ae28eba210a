//! Shared test infrastructure.

/// Unbounded-precision reference model of the operation table.
pub mod reference;

/// Installs a test-writer `tracing` subscriber once per process.
///
/// Repeated calls are no-ops, so any test may call it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("trace"))
        .with_test_writer()
        .try_init();
}
