//! Reserved Selector Tests
//!
//! Selectors `0xC`-`0xF` name no operation. They are still valid inputs and
//! must produce `(result 0, zero 1, carry 0, overflow 0)` for any operands.

use rstest::rstest;
use simple_alu_core::{Alu, AluOutput, Opcode, evaluate};

#[rstest]
fn reserved_selectors_yield_the_fixed_output(
    #[values(0xC, 0xD, 0xE, 0xF)] bits: u8,
    #[values(0, 1, 0x1234_5678, 0x8000_0000, 0xFFFF_FFFF)] a: u32,
    #[values(0, 0x8765_4321, 0xFFFF_FFFF)] b: u32,
) {
    let out = evaluate(a, b, Opcode::new(bits));
    assert_eq!(out.as_tuple(), (0, true, false, false));
    assert_eq!(out, AluOutput::UNDEFINED);
}

#[test]
fn reserved_selectors_are_not_decoded() {
    for op in Opcode::ALL.into_iter().filter(|op| !op.is_defined()) {
        assert_eq!(op.op(), None);
        assert_eq!(Alu::evaluate(0x1234_5678, 0x8765_4321, op), AluOutput::UNDEFINED);
    }
}

#[test]
fn wide_selector_is_truncated_to_four_bits() {
    // 0x1C drives the bus as 0xC
    assert_eq!(evaluate(3, 4, Opcode::new(0x1C)), AluOutput::UNDEFINED);
    // 0x10 drives the bus as ADD
    assert_eq!(evaluate(3, 4, Opcode::new(0x10)).result, 7);
}
