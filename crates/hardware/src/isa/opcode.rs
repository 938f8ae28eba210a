//! Opcode selector and operation types.
//!
//! This module defines the signals that select an ALU operation. It performs:
//! 1. **Selector Modeling:** A 4-bit [`Opcode`] that can carry any of the 16 patterns.
//! 2. **Decoding:** Mapping a selector onto one of the twelve [`AluOp`] variants.
//! 3. **Classification:** Grouping operations into arithmetic, logical, shift and compare.
//! 4. **Naming:** Mnemonics for display and parsing.

use std::fmt;
use std::str::FromStr;

use crate::common::constants::{DEFINED_OPS, OPCODE_COUNT, OPCODE_MASK};
use crate::common::error::OpcodeError;

/// A 4-bit operation selector.
///
/// Every pattern is a valid input to the ALU. Patterns `0x0`-`0xB` select an
/// operation; `0xC`-`0xF` are reserved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Opcode(u8);

impl Opcode {
    /// Addition.
    pub const ADD: Self = Self(0x0);
    /// Subtraction.
    pub const SUB: Self = Self(0x1);
    /// Bitwise AND.
    pub const AND: Self = Self(0x2);
    /// Bitwise OR.
    pub const OR: Self = Self(0x3);
    /// Bitwise XOR.
    pub const XOR: Self = Self(0x4);
    /// Shift left logical.
    pub const SLL: Self = Self(0x5);
    /// Shift right logical.
    pub const SRL: Self = Self(0x6);
    /// Shift right arithmetic.
    pub const SRA: Self = Self(0x7);
    /// Set less than (signed).
    pub const SLT: Self = Self(0x8);
    /// Set less than (unsigned).
    pub const SLTU: Self = Self(0x9);
    /// Bitwise NOR.
    pub const NOR: Self = Self(0xA);
    /// Bitwise NAND.
    pub const NAND: Self = Self(0xB);

    /// Every selector pattern, defined and reserved, in ascending order.
    pub const ALL: [Self; OPCODE_COUNT] = {
        let mut all = [Self(0); OPCODE_COUNT];
        let mut i = 0;
        while i < OPCODE_COUNT {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    /// Builds a selector from the low four bits of `bits`.
    ///
    /// Higher bits are dropped, as when a wider value drives a 4-bit bus.
    /// Use [`Opcode::try_from`] to reject them instead.
    #[inline(always)]
    pub const fn new(bits: u8) -> Self {
        Self(bits & OPCODE_MASK)
    }

    /// Returns the raw 4-bit pattern.
    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if this selector names one of the twelve operations.
    #[inline(always)]
    pub const fn is_defined(self) -> bool {
        (self.0 as usize) < DEFINED_OPS
    }

    /// Decodes the selector; `None` for reserved patterns.
    #[inline(always)]
    pub const fn op(self) -> Option<AluOp> {
        AluOp::decode(self)
    }

    /// Reads a selector number in decimal or `0x` hex.
    fn parse_selector(s: &str) -> Result<Self, OpcodeError> {
        let text = s.trim();
        text.strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .map_or_else(|| text.parse::<u8>(), |hex| u8::from_str_radix(hex, 16))
            .map_or_else(
                |_| Err(OpcodeError::UnknownMnemonic(s.to_string())),
                Self::try_from,
            )
    }
}

impl TryFrom<u8> for Opcode {
    type Error = OpcodeError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        if bits > OPCODE_MASK {
            Err(OpcodeError::OutOfRange(bits))
        } else {
            Ok(Self(bits))
        }
    }
}

impl From<AluOp> for Opcode {
    fn from(op: AluOp) -> Self {
        op.opcode()
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> Self {
        op.0
    }
}

impl FromStr for Opcode {
    type Err = OpcodeError;

    /// Parses a mnemonic (`"sltu"`) or a selector number (`"9"`, `"0xC"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<AluOp>()
            .map_or_else(|_| Self::parse_selector(s), |op| Ok(op.opcode()))
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op() {
            Some(op) => fmt::Display::fmt(&op, f),
            None => f.pad(&format!("UNDEF({:#x})", self.0)),
        }
    }
}

/// The twelve defined ALU operations, with their selector encodings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AluOp {
    /// Wrapping addition with carry-out and signed overflow.
    #[default]
    Add = 0x0,

    /// Wrapping subtraction with borrow and signed overflow.
    Sub = 0x1,

    /// Bitwise AND.
    And = 0x2,

    /// Bitwise OR.
    Or = 0x3,

    /// Bitwise XOR.
    Xor = 0x4,

    /// Shift left logical.
    Sll = 0x5,

    /// Shift right logical (zero fill).
    Srl = 0x6,

    /// Shift right arithmetic (sign fill).
    Sra = 0x7,

    /// Set less than, signed.
    Slt = 0x8,

    /// Set less than, unsigned.
    Sltu = 0x9,

    /// Bitwise NOR.
    Nor = 0xA,

    /// Bitwise NAND.
    Nand = 0xB,
}

impl AluOp {
    /// Every defined operation in selector order.
    pub const ALL: [Self; DEFINED_OPS] = [
        Self::Add,
        Self::Sub,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Sll,
        Self::Srl,
        Self::Sra,
        Self::Slt,
        Self::Sltu,
        Self::Nor,
        Self::Nand,
    ];

    /// Decodes a selector into an operation; `None` for `0xC`-`0xF`.
    pub const fn decode(op: Opcode) -> Option<Self> {
        match op.0 {
            0x0 => Some(Self::Add),
            0x1 => Some(Self::Sub),
            0x2 => Some(Self::And),
            0x3 => Some(Self::Or),
            0x4 => Some(Self::Xor),
            0x5 => Some(Self::Sll),
            0x6 => Some(Self::Srl),
            0x7 => Some(Self::Sra),
            0x8 => Some(Self::Slt),
            0x9 => Some(Self::Sltu),
            0xA => Some(Self::Nor),
            0xB => Some(Self::Nand),
            _ => None,
        }
    }

    /// Returns the selector that encodes this operation.
    #[inline(always)]
    pub const fn opcode(self) -> Opcode {
        Opcode(self as u8)
    }

    /// Returns the upper-case mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Sll => "SLL",
            Self::Srl => "SRL",
            Self::Sra => "SRA",
            Self::Slt => "SLT",
            Self::Sltu => "SLTU",
            Self::Nor => "NOR",
            Self::Nand => "NAND",
        }
    }

    /// ADD and SUB: the only operations that drive carry and overflow.
    pub const fn is_arithmetic(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// AND, OR, XOR, NOR, NAND.
    pub const fn is_logical(self) -> bool {
        matches!(
            self,
            Self::And | Self::Or | Self::Xor | Self::Nor | Self::Nand
        )
    }

    /// SLL, SRL, SRA.
    pub const fn is_shift(self) -> bool {
        matches!(self, Self::Sll | Self::Srl | Self::Sra)
    }

    /// SLT, SLTU.
    pub const fn is_compare(self) -> bool {
        matches!(self, Self::Slt | Self::Sltu)
    }
}

impl FromStr for AluOp {
    type Err = OpcodeError;

    /// Parses a mnemonic, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(text))
            .ok_or_else(|| OpcodeError::UnknownMnemonic(s.to_string()))
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.mnemonic())
    }
}
