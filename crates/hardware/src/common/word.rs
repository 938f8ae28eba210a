//! Two's-complement word helpers.
//!
//! An operand is a bare 32-bit pattern; each operation picks its own reading
//! of it. This module holds the two readings and the conversions between them:
//! 1. **Signed view:** `v` if `v < 2^31`, else `v - 2^32`.
//! 2. **Unsigned view:** `s` if `s >= 0`, else `s + 2^32`, masked to 32 bits.
//! 3. **Parsing:** Hex, binary, decimal and negative decimal operand text.

use std::num::IntErrorKind;

use super::constants::{SIGN_BIT, WORD_MASK};
use super::error::OperandError;

/// Reads a word as a two's-complement signed integer.
#[inline(always)]
pub const fn to_signed(v: u32) -> i32 {
    v as i32
}

/// Reads a signed integer back as its 32-bit two's-complement pattern.
#[inline(always)]
pub const fn to_unsigned(s: i32) -> u32 {
    s as u32
}

/// Returns true if the word's sign bit is set.
#[inline(always)]
pub const fn is_negative(v: u32) -> bool {
    v & SIGN_BIT != 0
}

/// Parses operand text into a word.
///
/// Accepts `0x` hex, `0b` binary and decimal digits, with `_` separators and an
/// optional leading `-` or `+`. Negative values are stored as their
/// two's-complement pattern, so `-1` parses to `0xFFFF_FFFF`.
///
/// # Errors
///
/// [`OperandError::Invalid`] if the text is not a number, and
/// [`OperandError::OutOfRange`] if it lies outside `[-2^31, 2^32 - 1]`.
///
/// # Examples
///
/// ```
/// use simple_alu_core::common::parse_word;
///
/// assert_eq!(parse_word("0x8765_4321"), Ok(0x8765_4321));
/// assert_eq!(parse_word("-5"), Ok(0xFFFF_FFFB));
/// assert!(parse_word("0x1_0000_0000").is_err());
/// ```
pub fn parse_word(text: &str) -> Result<u32, OperandError> {
    let cleaned: String = text.trim().chars().filter(|&c| c != '_').collect();
    let (negative, unsigned) = cleaned.strip_prefix('-').map_or_else(
        || (false, cleaned.strip_prefix('+').unwrap_or(&cleaned)),
        |rest| (true, rest),
    );

    let (radix, digits) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .map(|hex| (16, hex))
        .or_else(|| {
            unsigned
                .strip_prefix("0b")
                .or_else(|| unsigned.strip_prefix("0B"))
                .map(|bin| (2, bin))
        })
        .unwrap_or((10, unsigned));

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(OperandError::Invalid(text.to_string()));
    }

    let magnitude = u64::from_str_radix(digits, radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => OperandError::OutOfRange(text.to_string()),
        _ => OperandError::Invalid(text.to_string()),
    })?;

    if negative {
        if magnitude > u64::from(SIGN_BIT) {
            return Err(OperandError::OutOfRange(text.to_string()));
        }
        Ok(to_unsigned(-(magnitude as i64) as i32))
    } else if magnitude > WORD_MASK {
        Err(OperandError::OutOfRange(text.to_string()))
    } else {
        Ok(magnitude as u32)
    }
}
