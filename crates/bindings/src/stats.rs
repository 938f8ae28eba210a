//! Statistics Python binding.
//!
//! Exposes evaluation statistics to Python: getters for totals and flag counts,
//! per-selector counts, `print` / `print_sections` for human-readable output, and
//! `to_json` for export.

use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;
use simple_alu_core::stats::AluStats;

use crate::alu::selector;

/// Python-exposed statistics: wraps `AluStats` for read and print from Python.
#[pyclass(name = "AluStats")]
#[derive(Clone, Debug)]
pub struct PyStats {
    /// The wrapped counters.
    pub inner: AluStats,
}

#[pymethods]
impl PyStats {
    #[getter]
    fn evaluations(&self) -> u64 {
        self.inner.evaluations
    }
    #[getter]
    fn undefined(&self) -> u64 {
        self.inner.undefined
    }
    #[getter]
    fn zero_set(&self) -> u64 {
        self.inner.zero_set
    }
    #[getter]
    fn carry_set(&self) -> u64 {
        self.inner.carry_set
    }
    #[getter]
    fn overflow_set(&self) -> u64 {
        self.inner.overflow_set
    }

    /// Number of evaluations recorded for a selector (low 4 bits used).
    fn count(&self, op: u64) -> u64 {
        self.inner.count(selector(op))
    }

    /// Print all stats (full dump).
    fn print(&self) {
        self.inner.print();
    }

    /// Print only the given sections. Options: "summary", "opcode_mix", "flags".
    /// Pass an empty list for full dump.
    fn print_sections(&self, sections: Vec<String>) {
        self.inner.print_sections(&sections);
    }

    /// JSON export of every counter.
    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner)
            .map_err(|e| PyRuntimeError::new_err(format!("Failed to serialize stats: {e}")))
    }
}
