//! Execution unit Python binding.
//!
//! Wraps `ExecutionUnit` so a Python driver gets tracing and statistics on top
//! of plain evaluation.

use pyo3::prelude::*;
use simple_alu_core::{Config, ExecutionUnit};

use crate::alu::{PyAluResult, selector};
use crate::conversion::py_dict_to_config;
use crate::stats::PyStats;

/// Python-exposed execution unit.
#[pyclass(name = "ExecutionUnit")]
#[derive(Debug)]
pub struct PyExecutionUnit {
    /// The wrapped unit.
    pub inner: ExecutionUnit,
}

#[pymethods]
impl PyExecutionUnit {
    /// Creates an execution unit from an optional config dict.
    ///
    /// # Errors
    /// Returns a `ValueError` if the dict does not match the config schema.
    #[new]
    #[pyo3(signature = (config=None))]
    fn new(py: Python<'_>, config: Option<&Bound<'_, PyAny>>) -> PyResult<Self> {
        let config = config.map_or_else(
            || Ok(Config::default()),
            |dict| py_dict_to_config(py, dict),
        )?;
        Ok(Self {
            inner: ExecutionUnit::new(&config),
        })
    }

    /// Evaluates one triple and records it.
    fn execute(&mut self, a: u32, b: u32, op: u64) -> PyAluResult {
        self.inner.execute(a, b, selector(op)).into()
    }

    /// Snapshot of the statistics collected so far.
    #[getter]
    fn stats(&self) -> PyStats {
        PyStats {
            inner: self.inner.stats().clone(),
        }
    }

    /// Clears the statistics.
    fn reset_stats(&mut self) {
        self.inner.reset_stats();
    }

    /// Enable or disable per-evaluation tracing.
    fn set_trace(&mut self, enabled: bool) {
        self.inner.set_trace(enabled);
    }
}
