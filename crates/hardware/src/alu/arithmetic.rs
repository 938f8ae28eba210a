//! ALU arithmetic operations.
//!
//! Implements 32-bit wrapping addition and subtraction together with the two
//! arithmetic flags:
//! - **carry:** unsigned carry-out for ADD (`a + b >= 2^32`), borrow for SUB (`a < b`).
//! - **overflow:** the signed result left `[-2^31, 2^31 - 1]`.
//!
//! ADD overflows iff both operands share a sign and the result's sign differs.
//! SUB overflows iff the operands' signs differ and the result's sign differs
//! from the minuend's.

use super::output::AluOutput;
use crate::common::word::to_signed;

/// Wrapping addition with carry-out and signed overflow.
#[inline]
pub const fn add(a: u32, b: u32) -> AluOutput {
    let (result, carry) = a.overflowing_add(b);
    let (_, overflow) = to_signed(a).overflowing_add(to_signed(b));
    AluOutput::with_flags(result, carry, overflow)
}

/// Wrapping subtraction with borrow and signed overflow.
#[inline]
pub const fn sub(a: u32, b: u32) -> AluOutput {
    let (result, borrow) = a.overflowing_sub(b);
    let (_, overflow) = to_signed(a).overflowing_sub(to_signed(b));
    AluOutput::with_flags(result, borrow, overflow)
}
