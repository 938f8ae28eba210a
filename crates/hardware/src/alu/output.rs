//! ALU output bundle.
//!
//! Groups the 32-bit result with the three status flags. Flags are never set
//! independently of the result: every constructor derives `zero` from it.

use serde::Serialize;

/// Result word and status flags of one evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct AluOutput {
    /// The 32-bit result pattern.
    pub result: u32,
    /// Set iff `result == 0`.
    pub zero: bool,
    /// Unsigned carry-out (ADD) or borrow (SUB); clear for every other operation.
    pub carry: bool,
    /// Signed two's-complement overflow (ADD/SUB); clear for every other operation.
    pub overflow: bool,
}

impl AluOutput {
    /// Output of a reserved selector: result 0, hence zero set, carry and overflow clear.
    pub const UNDEFINED: Self = Self::from_result(0);

    /// Builds an output whose only flag is the derived zero flag.
    #[inline(always)]
    pub const fn from_result(result: u32) -> Self {
        Self::with_flags(result, false, false)
    }

    /// Builds an output with explicit carry and overflow; zero is derived.
    #[inline(always)]
    pub const fn with_flags(result: u32, carry: bool, overflow: bool) -> Self {
        Self {
            result,
            zero: result == 0,
            carry,
            overflow,
        }
    }

    /// Returns `(result, zero, carry, overflow)`.
    pub const fn as_tuple(self) -> (u32, bool, bool, bool) {
        (self.result, self.zero, self.carry, self.overflow)
    }
}
