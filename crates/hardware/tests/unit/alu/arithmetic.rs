//! ALU Arithmetic Operation Tests
//!
//! Deterministic edge-case tests for ADD and SUB. Each group covers:
//!   - Boundary values (0, 1, -1, MAX, MIN)
//!   - Unsigned wrap (carry / borrow) without signed overflow
//!   - Signed overflow without unsigned wrap
//!   - Both at once, and neither

use pretty_assertions::assert_eq;
use simple_alu_core::alu::arithmetic;
use simple_alu_core::{AluOutput, Opcode, evaluate};

// ─── Constants ───────────────────────────────────────────────────────────────

const ZERO: u32 = 0;
const ONE: u32 = 1;
const NEG1: u32 = 0xFFFF_FFFF;

const I32_MAX: u32 = 0x7FFF_FFFF;
const I32_MIN: u32 = 0x8000_0000;

// ─── Helper ──────────────────────────────────────────────────────────────────

/// `(result, zero, carry, overflow)` of one evaluation.
fn alu(op: Opcode, a: u32, b: u32) -> (u32, bool, bool, bool) {
    evaluate(a, b, op).as_tuple()
}

// ═════════════════════════════════════════════════════════════════════════════
//  ADD
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn add_zero_plus_zero() {
    assert_eq!(alu(Opcode::ADD, ZERO, ZERO), (0, true, false, false));
}

#[test]
fn add_identity() {
    assert_eq!(alu(Opcode::ADD, 42, ZERO), (42, false, false, false));
    assert_eq!(alu(Opcode::ADD, ZERO, 42), (42, false, false, false));
}

#[test]
fn add_neg1_plus_1_carries_without_overflow() {
    // -1 + 1 = 0: unsigned wrap, signed in range
    assert_eq!(alu(Opcode::ADD, NEG1, ONE), (0, true, true, false));
}

#[test]
fn add_max_plus_1_overflows_without_carry() {
    assert_eq!(alu(Opcode::ADD, I32_MAX, ONE), (I32_MIN, false, false, true));
}

#[test]
fn add_min_plus_min_carries_and_overflows() {
    // 0x8000_0000 + 0x8000_0000 = 2^32: result 0, both flags
    assert_eq!(alu(Opcode::ADD, I32_MIN, I32_MIN), (0, true, true, true));
}

#[test]
fn add_negative_plus_negative_in_range() {
    // -1 + -1 = -2
    assert_eq!(alu(Opcode::ADD, NEG1, NEG1), (0xFFFF_FFFE, false, true, false));
}

#[test]
fn add_positive_plus_negative_never_overflows() {
    assert_eq!(alu(Opcode::ADD, I32_MAX, I32_MIN), (NEG1, false, false, false));
    assert_eq!(alu(Opcode::ADD, 10, -3_i32 as u32), (7, false, true, false));
}

#[test]
fn add_is_commutative_on_boundaries() {
    for &(a, b) in &[(I32_MAX, ONE), (NEG1, ONE), (I32_MIN, NEG1), (0x1234_5678, 0x8765_4321)] {
        assert_eq!(evaluate(a, b, Opcode::ADD), evaluate(b, a, Opcode::ADD));
    }
}

#[test]
fn add_matches_submodule() {
    assert_eq!(
        evaluate(0xDEAD_BEEF, 0xCAFE_BABE, Opcode::ADD),
        arithmetic::add(0xDEAD_BEEF, 0xCAFE_BABE)
    );
}

// ═════════════════════════════════════════════════════════════════════════════
//  SUB
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn sub_equal_operands_is_zero() {
    assert_eq!(alu(Opcode::SUB, ZERO, ZERO), (0, true, false, false));
    assert_eq!(alu(Opcode::SUB, NEG1, NEG1), (0, true, false, false));
    assert_eq!(alu(Opcode::SUB, I32_MIN, I32_MIN), (0, true, false, false));
}

#[test]
fn sub_zero_minus_one_borrows() {
    // 0 - 1 = -1: borrow, signed in range
    assert_eq!(alu(Opcode::SUB, ZERO, ONE), (NEG1, false, true, false));
}

#[test]
fn sub_one_minus_neg1_borrows_without_overflow() {
    // 1 - (-1) = 2 signed; unsigned 1 < 0xFFFF_FFFF borrows
    assert_eq!(alu(Opcode::SUB, ONE, NEG1), (2, false, true, false));
}

#[test]
fn sub_min_minus_one_overflows() {
    assert_eq!(alu(Opcode::SUB, I32_MIN, ONE), (I32_MAX, false, false, true));
}

#[test]
fn sub_max_minus_neg1_overflows_and_borrows() {
    // 0x7FFF_FFFF - (-1) = 2^31, out of signed range; unsigned a < b
    assert_eq!(alu(Opcode::SUB, I32_MAX, NEG1), (I32_MIN, false, true, true));
}

#[test]
fn sub_zero_minus_min_overflows() {
    // 0 - (-2^31) = 2^31
    assert_eq!(alu(Opcode::SUB, ZERO, I32_MIN), (I32_MIN, false, true, true));
}

#[test]
fn sub_borrow_is_unsigned_order_not_signed() {
    // -1 > 1 unsigned: no borrow even though -1 < 1 signed
    assert_eq!(alu(Opcode::SUB, NEG1, ONE), (0xFFFF_FFFE, false, false, false));
}

#[test]
fn sub_overflow_output_shape() {
    assert_eq!(
        evaluate(I32_MIN, ONE, Opcode::SUB),
        AluOutput::with_flags(I32_MAX, false, true)
    );
}
