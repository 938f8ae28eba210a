//! ALU Logic & Comparison Operation Tests
//!
//! Deterministic edge-case tests for bitwise logic (AND, OR, XOR, NOR, NAND)
//! and set-less-than comparisons (SLT, SLTU). Covers:
//!   - Identity / annihilation laws
//!   - Alternating and single-bit patterns
//!   - Sign boundaries for comparisons
//!   - Carry and overflow staying clear regardless of operands

use rstest::rstest;
use simple_alu_core::{Opcode, evaluate};

// ─── Constants ───────────────────────────────────────────────────────────────

const ZERO: u32 = 0;
const NEG1: u32 = 0xFFFF_FFFF;

const I32_MAX: u32 = 0x7FFF_FFFF;
const I32_MIN: u32 = 0x8000_0000;

const ALTERNATING_A: u32 = 0xAAAA_AAAA;
const ALTERNATING_5: u32 = 0x5555_5555;

// ─── Helper ──────────────────────────────────────────────────────────────────

fn result(op: Opcode, a: u32, b: u32) -> u32 {
    evaluate(a, b, op).result
}

// ═════════════════════════════════════════════════════════════════════════════
//  AND / OR / XOR
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn and_identity_and_annihilation() {
    assert_eq!(result(Opcode::AND, 0xDEAD_BEEF, NEG1), 0xDEAD_BEEF);
    assert_eq!(result(Opcode::AND, 0xDEAD_BEEF, ZERO), 0);
}

#[test]
fn and_of_complementary_patterns_sets_zero() {
    let out = evaluate(ALTERNATING_A, ALTERNATING_5, Opcode::AND);
    assert_eq!(out.result, 0);
    assert!(out.zero);
}

#[test]
fn or_identity_and_saturation() {
    assert_eq!(result(Opcode::OR, 0xDEAD_BEEF, ZERO), 0xDEAD_BEEF);
    assert_eq!(result(Opcode::OR, 0xDEAD_BEEF, NEG1), NEG1);
    assert_eq!(result(Opcode::OR, ALTERNATING_A, ALTERNATING_5), NEG1);
}

#[test]
fn xor_self_is_zero() {
    let out = evaluate(0x1234_5678, 0x1234_5678, Opcode::XOR);
    assert_eq!(out.result, 0);
    assert!(out.zero);
}

#[test]
fn xor_with_ones_inverts() {
    assert_eq!(result(Opcode::XOR, 0x0F0F_0F0F, NEG1), 0xF0F0_F0F0);
}

// ═════════════════════════════════════════════════════════════════════════════
//  NOR / NAND
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn nor_of_zeros_is_all_ones() {
    assert_eq!(result(Opcode::NOR, ZERO, ZERO), NEG1);
}

#[test]
fn nor_of_complementary_patterns_is_zero() {
    let out = evaluate(ALTERNATING_A, ALTERNATING_5, Opcode::NOR);
    assert_eq!(out.result, 0);
    assert!(out.zero);
}

#[test]
fn nand_of_ones_is_zero() {
    let out = evaluate(NEG1, NEG1, Opcode::NAND);
    assert_eq!(out.result, 0);
    assert!(out.zero);
}

#[test]
fn nand_of_complementary_patterns_is_all_ones() {
    assert_eq!(result(Opcode::NAND, ALTERNATING_A, ALTERNATING_5), NEG1);
}

#[test]
fn nor_and_nand_are_negated_or_and_and() {
    let (a, b) = (0x1357_9BDF, 0x0246_8ACE);
    assert_eq!(result(Opcode::NOR, a, b), !result(Opcode::OR, a, b));
    assert_eq!(result(Opcode::NAND, a, b), !result(Opcode::AND, a, b));
}

#[rstest]
fn logical_ops_never_raise_carry_or_overflow(
    #[values(Opcode::AND, Opcode::OR, Opcode::XOR, Opcode::NOR, Opcode::NAND)] op: Opcode,
    #[values(ZERO, NEG1, I32_MAX, I32_MIN, ALTERNATING_A)] a: u32,
    #[values(ZERO, NEG1, I32_MIN, ALTERNATING_5)] b: u32,
) {
    let out = evaluate(a, b, op);
    assert!(!out.carry, "{op} raised carry for {a:#x}, {b:#x}");
    assert!(!out.overflow, "{op} raised overflow for {a:#x}, {b:#x}");
    assert_eq!(out.zero, out.result == 0);
}

// ═════════════════════════════════════════════════════════════════════════════
//  SLT / SLTU
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
#[case::negative_below_positive(NEG1, 1, 1)]
#[case::positive_above_negative(1, NEG1, 0)]
#[case::min_below_max(I32_MIN, I32_MAX, 1)]
#[case::max_above_min(I32_MAX, I32_MIN, 0)]
#[case::equal(0x1234_5678, 0x1234_5678, 0)]
#[case::min_below_neg1(I32_MIN, NEG1, 1)]
#[case::zero_above_neg1(ZERO, NEG1, 0)]
fn slt_signed_order(#[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    let out = evaluate(a, b, Opcode::SLT);
    assert_eq!(out.result, expected);
    assert_eq!(out.zero, expected == 0);
    assert!(!out.carry && !out.overflow);
}

#[rstest]
#[case::neg1_is_largest(NEG1, 1, 0)]
#[case::one_below_neg1(1, NEG1, 1)]
#[case::max_below_min(I32_MAX, I32_MIN, 1)]
#[case::min_above_max(I32_MIN, I32_MAX, 0)]
#[case::equal(I32_MIN, I32_MIN, 0)]
#[case::zero_below_everything(ZERO, 1, 1)]
fn sltu_unsigned_order(#[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    let out = evaluate(a, b, Opcode::SLTU);
    assert_eq!(out.result, expected);
    assert_eq!(out.zero, expected == 0);
    assert!(!out.carry && !out.overflow);
}

#[test]
fn slt_and_sltu_disagree_across_the_sign_boundary() {
    assert_eq!(result(Opcode::SLT, 0x8765_4321, 0x1234_5678), 1);
    assert_eq!(result(Opcode::SLTU, 0x8765_4321, 0x1234_5678), 0);
}
