//! Instruction Set Definitions.
//!
//! Contains the 4-bit opcode selector and the twelve operations it encodes.
//!
//! # Encoding
//!
//! | Selector | Operation | Selector | Operation |
//! |---|---|---|---|
//! | `0x0` | ADD | `0x6` | SRL |
//! | `0x1` | SUB | `0x7` | SRA |
//! | `0x2` | AND | `0x8` | SLT |
//! | `0x3` | OR  | `0x9` | SLTU |
//! | `0x4` | XOR | `0xA` | NOR |
//! | `0x5` | SLL | `0xB` | NAND |
//!
//! Selectors `0xC`-`0xF` are reserved and evaluate to the undefined-opcode result.

/// Opcode selector and operation encodings.
pub mod opcode;

pub use opcode::{AluOp, Opcode};
