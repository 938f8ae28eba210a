//! ALU shift operations.
//!
//! Implements shift-left logical (SLL), shift-right logical (SRL), and
//! shift-right arithmetic (SRA).
//!
//! The shift distance is the low five bits of operand B (0-31); the upper
//! 27 bits are ignored, never rejected. Shifts leave carry and overflow clear.

use super::output::AluOutput;
use crate::common::constants::SHAMT_MASK;
use crate::common::word::{to_signed, to_unsigned};

/// Extracts the shift distance from operand B.
#[inline(always)]
pub const fn shamt(b: u32) -> u32 {
    b & SHAMT_MASK
}

/// Shift left logical; bits shifted past bit 31 are lost.
#[inline]
pub const fn sll(a: u32, b: u32) -> AluOutput {
    AluOutput::from_result(a << shamt(b))
}

/// Shift right logical; vacated high bits are zero.
#[inline]
pub const fn srl(a: u32, b: u32) -> AluOutput {
    AluOutput::from_result(a >> shamt(b))
}

/// Shift right arithmetic; vacated high bits copy the sign bit.
#[inline]
pub const fn sra(a: u32, b: u32) -> AluOutput {
    AluOutput::from_result(to_unsigned(to_signed(a) >> shamt(b)))
}
