//! Error definitions.
//!
//! The ALU itself is total: every operand pair and every selector pattern has a
//! defined output, so nothing here is ever produced by [`crate::alu::evaluate`].
//! These types cover the edges where text, numbers or files enter the crate:
//! 1. **Opcodes:** Mnemonics that name no operation, selectors wider than 4 bits.
//! 2. **Operands:** Text that is not a number, numbers that do not fit in a word.
//! 3. **Configuration:** Unreadable or malformed JSON configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a number or mnemonic into an opcode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpcodeError {
    /// The selector value does not fit in the 4-bit opcode field.
    #[error("opcode {0:#x} does not fit in 4 bits")]
    OutOfRange(u8),

    /// The text is neither a known mnemonic nor a selector number.
    #[error("unknown ALU operation `{0}`")]
    UnknownMnemonic(String),
}

/// Failure to parse an operand from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperandError {
    /// The text is not a number in any accepted radix.
    #[error("invalid operand `{0}`")]
    Invalid(String),

    /// The number is outside `[-2^31, 2^32 - 1]`.
    #[error("operand `{0}` does not fit in 32 bits")]
    OutOfRange(String),
}

/// Failure to load a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid JSON for [`crate::config::Config`].
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
