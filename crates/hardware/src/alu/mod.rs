//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 32-bit combinational execution unit. It has no
//! state, no clock and no failure path: every `(a, b, op)` triple, including
//! the four reserved selectors, maps to exactly one output.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub (the only operations that drive carry and overflow)
//! - [`logic`]:      And, Or, Xor, Nor, Nand, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations (add, subtract) and their flags.
pub mod arithmetic;

/// Bitwise logical and comparison operations (and, or, xor, nor, nand, slt).
pub mod logic;

/// Result and flag bundle.
pub mod output;

/// Shift operations (sll, srl, sra).
pub mod shifts;

pub use output::AluOutput;

use crate::isa::{AluOp, Opcode};

/// Arithmetic Logic Unit for 32-bit integer operations.
#[derive(Clone, Copy, Debug, Default)]
pub struct Alu;

impl Alu {
    /// Executes a decoded ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation type.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand (the low five bits are the shift distance for shifts)
    ///
    /// # Returns
    ///
    /// The 32-bit result with its zero, carry and overflow flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_alu_core::alu::Alu;
    /// use simple_alu_core::isa::AluOp;
    ///
    /// // Unsigned wrap sets carry
    /// let out = Alu::execute(AluOp::Add, 0xFFFF_FFFF, 1);
    /// assert_eq!(out.result, 0);
    /// assert!(out.zero && out.carry && !out.overflow);
    ///
    /// // Signed wrap sets overflow
    /// let out = Alu::execute(AluOp::Add, 0x7FFF_FFFF, 1);
    /// assert_eq!(out.result, 0x8000_0000);
    /// assert!(!out.carry && out.overflow);
    ///
    /// // Signed comparison
    /// let out = Alu::execute(AluOp::Slt, -5_i32 as u32, 10);
    /// assert_eq!(out.result, 1);
    /// ```
    pub const fn execute(op: AluOp, a: u32, b: u32) -> AluOutput {
        match op {
            AluOp::Add => arithmetic::add(a, b),
            AluOp::Sub => arithmetic::sub(a, b),

            AluOp::And => logic::and(a, b),
            AluOp::Or => logic::or(a, b),
            AluOp::Xor => logic::xor(a, b),
            AluOp::Nor => logic::nor(a, b),
            AluOp::Nand => logic::nand(a, b),
            AluOp::Slt => logic::slt(a, b),
            AluOp::Sltu => logic::sltu(a, b),

            AluOp::Sll => shifts::sll(a, b),
            AluOp::Srl => shifts::srl(a, b),
            AluOp::Sra => shifts::sra(a, b),
        }
    }

    /// Evaluates a raw selector; reserved selectors yield [`AluOutput::UNDEFINED`].
    #[inline]
    pub const fn evaluate(a: u32, b: u32, op: Opcode) -> AluOutput {
        match AluOp::decode(op) {
            Some(op) => Self::execute(op, a, b),
            None => AluOutput::UNDEFINED,
        }
    }
}

/// Evaluates one `(a, b, op)` triple.
///
/// Pure and total over all 2^68 inputs: selectors `0xC`-`0xF` return
/// `(0, zero, no carry, no overflow)` instead of failing.
///
/// # Examples
///
/// ```
/// use simple_alu_core::{Opcode, evaluate};
///
/// let out = evaluate(0x1234_5678, 0x8765_4321, Opcode::ADD);
/// assert_eq!(out.as_tuple(), (0x9999_9999, false, false, false));
///
/// let out = evaluate(0x1234_5678, 0x8765_4321, Opcode::new(0xE));
/// assert_eq!(out.as_tuple(), (0, true, false, false));
/// ```
#[inline]
pub const fn evaluate(a: u32, b: u32, op: Opcode) -> AluOutput {
    Alu::evaluate(a, b, op)
}
