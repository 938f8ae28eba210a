//! Python bindings for the simple-alu execution unit.
//!
//! This crate exposes the ALU to Python via PyO3, so a Python test driver can
//! call it directly instead of driving a simulated circuit. It provides:
//! 1. **Evaluation:** `evaluate(a, b, op)` returning an `AluResult`.
//! 2. **Execution unit:** `ExecutionUnit` with tracing and `AluStats` counters.
//! 3. **Opcodes:** `ALU_ADD` … `ALU_NAND` constants, `mnemonic`, `parse_opcode`.
//! 4. **Utilities:** Version string, logging setup, Python dict to `Config` conversion.

use pyo3::prelude::*;
use simple_alu_core::AluOp;

/// `evaluate`, `AluResult` and opcode helpers.
pub mod alu;
/// Python dict to Rust `Config` conversion.
pub mod conversion;
/// Execution unit binding (`PyExecutionUnit`).
pub mod exec;
/// Statistics binding (`PyStats`).
pub mod stats;
/// Utility functions (version, logging).
pub mod utils;

/// Registers all ALU classes, functions and constants onto the given Python module.
///
/// # Arguments
///
/// * `m` - The Python module to register types and functions on.
///
/// # Returns
///
/// `Ok(())` on success, or a `PyErr` if registration fails.
pub fn register_alu_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<alu::PyAluResult>()?;
    m.add_class::<exec::PyExecutionUnit>()?;
    m.add_class::<stats::PyStats>()?;

    m.add_function(wrap_pyfunction!(alu::evaluate, m)?)?;
    m.add_function(wrap_pyfunction!(alu::mnemonic, m)?)?;
    m.add_function(wrap_pyfunction!(alu::parse_opcode, m)?)?;
    m.add_function(wrap_pyfunction!(utils::version, m)?)?;
    m.add_function(wrap_pyfunction!(utils::init_logging, m)?)?;

    for op in AluOp::ALL {
        m.add(format!("ALU_{}", op.mnemonic()).as_str(), op as u8)?;
    }

    Ok(())
}

#[pymodule]
#[pyo3(name = "_core")]
fn simple_alu(m: &Bound<'_, PyModule>) -> PyResult<()> {
    register_alu_module(m)?;
    Ok(())
}
