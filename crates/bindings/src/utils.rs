//! Utility functions exposed to Python.
//!
//! Provides version and logging helpers for the `simple_alu` module.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use tracing_subscriber::EnvFilter;

/// Returns the package version string (e.g., for scripting or diagnostics).
#[pyfunction]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Installs a stderr `tracing` subscriber with the given filter.
///
/// Only the first successful call installs a subscriber; later calls are ignored.
///
/// # Arguments
///
/// * `filter` - An `EnvFilter` directive such as `"simple_alu::exec=trace"`.
///
/// # Errors
///
/// Raises `ValueError` if the filter directive cannot be parsed.
#[pyfunction]
#[pyo3(signature = (filter="info"))]
pub fn init_logging(filter: &str) -> PyResult<()> {
    let filter = EnvFilter::try_new(filter)
        .map_err(|e| PyValueError::new_err(format!("Invalid log filter: {e}")))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    Ok(())
}
