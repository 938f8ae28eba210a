//! ALU Python binding.
//!
//! Exposes the pure evaluation function and its result bundle. Selectors are
//! taken as plain ints and truncated to 4 bits, like a wider signal driving the
//! ALU's opcode input.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use simple_alu_core::common::constants::OPCODE_MASK;
use simple_alu_core::{AluOutput, Opcode};

/// Python-exposed evaluation result: the result word and its three flags.
#[pyclass(name = "AluResult")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PyAluResult {
    /// The 32-bit result pattern.
    #[pyo3(get)]
    pub result: u32,
    /// Set iff `result == 0`.
    #[pyo3(get)]
    pub zero: bool,
    /// Carry-out (ADD) or borrow (SUB).
    #[pyo3(get)]
    pub carry: bool,
    /// Signed overflow (ADD/SUB).
    #[pyo3(get)]
    pub overflow: bool,
}

impl From<AluOutput> for PyAluResult {
    fn from(out: AluOutput) -> Self {
        Self {
            result: out.result,
            zero: out.zero,
            carry: out.carry,
            overflow: out.overflow,
        }
    }
}

#[pymethods]
impl PyAluResult {
    /// `(result, zero, carry, overflow)`.
    fn as_tuple(&self) -> (u32, bool, bool, bool) {
        (self.result, self.zero, self.carry, self.overflow)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self == other
    }

    fn __repr__(&self) -> String {
        format!(
            "AluResult(result={:#010x}, zero={}, carry={}, overflow={})",
            self.result,
            u8::from(self.zero),
            u8::from(self.carry),
            u8::from(self.overflow)
        )
    }
}

/// Drives the 4-bit selector port from a Python int; only the low 4 bits are kept.
pub const fn selector(op: u64) -> Opcode {
    Opcode::new((op & OPCODE_MASK as u64) as u8)
}

/// Evaluates one `(a, b, op)` triple.
///
/// # Arguments
///
/// * `a`  - First operand (0 ..= 2**32 - 1).
/// * `b`  - Second operand (0 ..= 2**32 - 1).
/// * `op` - Selector (0 ..= 2**64 - 1); only the low 4 bits are used.
#[pyfunction]
pub fn evaluate(a: u32, b: u32, op: u64) -> PyAluResult {
    simple_alu_core::evaluate(a, b, selector(op)).into()
}

/// Returns the mnemonic for a selector, e.g. `"SLTU"` or `"UNDEF(0xc)"`.
#[pyfunction]
pub fn mnemonic(op: u64) -> String {
    selector(op).to_string()
}

/// Parses a mnemonic or selector number into a selector value.
///
/// # Errors
///
/// Raises `ValueError` for unknown mnemonics or numbers above 15.
#[pyfunction]
pub fn parse_opcode(text: &str) -> PyResult<u8> {
    text.parse::<Opcode>()
        .map(u8::from)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}
