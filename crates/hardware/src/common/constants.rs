//! Global Datapath Constants.
//!
//! This module defines the word and selector geometry used across the crate. It includes:
//! 1. **Word Constants:** Width, full-word mask and sign bit of a 32-bit operand.
//! 2. **Shift Constants:** The mask selecting the shift distance from operand B.
//! 3. **Selector Constants:** Width and mask of the 4-bit opcode selector.

/// Number of bits in a datapath word.
pub const WORD_BITS: u32 = 32;

/// All-ones mask of a datapath word, widened for unbounded-precision arithmetic.
pub const WORD_MASK: u64 = 0xFFFF_FFFF;

/// Most significant bit of a word; set for negative two's-complement values.
pub const SIGN_BIT: u32 = 0x8000_0000;

/// Mask for the shift distance in operand B (5 bits: 0-31).
pub const SHAMT_MASK: u32 = 0x1F;

/// Number of bits in the opcode selector.
pub const OPCODE_BITS: u32 = 4;

/// Mask for the opcode selector.
pub const OPCODE_MASK: u8 = 0xF;

/// Number of distinct selector patterns (defined and undefined).
pub const OPCODE_COUNT: usize = 1 << OPCODE_BITS;

/// Number of defined operations; selectors at or above this value are undefined.
pub const DEFINED_OPS: usize = 12;
