//! Common utilities and types used throughout the ALU model.
//!
//! This module provides the building blocks shared across the crate. It includes:
//! 1. **Constants:** Word width, sign bit, shift-amount and opcode masks.
//! 2. **Words:** Two's-complement signed/unsigned reinterpretation and operand parsing.
//! 3. **Error Handling:** Error types for opcode, operand and configuration input.

/// Word geometry and selector constants.
pub mod constants;

/// Error types for consumer-facing parsing and loading.
pub mod error;

/// Two's-complement word helpers.
pub mod word;

pub use constants::{OPCODE_MASK, SHAMT_MASK, SIGN_BIT, WORD_BITS, WORD_MASK};
pub use error::{ConfigError, OpcodeError, OperandError};
pub use word::{is_negative, parse_word, to_signed, to_unsigned};
