//! ALU logical and comparison operations.
//!
//! Implements bitwise AND, OR, XOR, NOR and NAND over the full 32-bit word,
//! and set-less-than in its signed and unsigned forms.
//!
//! None of these drive carry or overflow. Comparisons produce 0 or 1, so their
//! zero flag is set exactly when the comparison is false.

use super::output::AluOutput;
use crate::common::word::to_signed;

/// Bitwise AND.
#[inline]
pub const fn and(a: u32, b: u32) -> AluOutput {
    AluOutput::from_result(a & b)
}

/// Bitwise OR.
#[inline]
pub const fn or(a: u32, b: u32) -> AluOutput {
    AluOutput::from_result(a | b)
}

/// Bitwise XOR.
#[inline]
pub const fn xor(a: u32, b: u32) -> AluOutput {
    AluOutput::from_result(a ^ b)
}

/// Bitwise NOR.
#[inline]
pub const fn nor(a: u32, b: u32) -> AluOutput {
    AluOutput::from_result(!(a | b))
}

/// Bitwise NAND.
#[inline]
pub const fn nand(a: u32, b: u32) -> AluOutput {
    AluOutput::from_result(!(a & b))
}

/// 1 if `a < b` as two's-complement integers, else 0.
#[inline]
pub const fn slt(a: u32, b: u32) -> AluOutput {
    AluOutput::from_result((to_signed(a) < to_signed(b)) as u32)
}

/// 1 if `a < b` as unsigned integers, else 0.
#[inline]
pub const fn sltu(a: u32, b: u32) -> AluOutput {
    AluOutput::from_result((a < b) as u32)
}
