//! Python↔Rust configuration conversion.
//!
//! Converts Python dicts into the core `Config` type via JSON serialization, so the
//! same schema is used from Python, configuration files and the CLI.

use pyo3::prelude::*;
use simple_alu_core::Config;

/// Converts a Python dict to a `Config`.
///
/// The dict is serialized to JSON and then deserialized into `Config`. Keys must match
/// the Rust config structure (`general`, `report`); absent keys take their defaults.
///
/// # Arguments
///
/// * `py` - Python interpreter handle.
/// * `dict` - A Python dict such as `{"general": {"trace_evaluations": True}}`.
///
/// # Returns
///
/// The deserialized `Config`, or a `PyErr` if the dict is invalid.
pub fn py_dict_to_config(py: Python<'_>, dict: &Bound<'_, PyAny>) -> PyResult<Config> {
    let json = py.import("json")?;
    let dumps = json.getattr("dumps")?;
    let json_str_obj = dumps.call1((dict,))?;
    let json_str: String = json_str_obj.extract()?;

    Config::from_json(&json_str).map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("Invalid config: {e}"))
    })
}
