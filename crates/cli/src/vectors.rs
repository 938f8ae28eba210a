//! Test-vector files for `alu check`.
//!
//! A vector file is a JSON document holding a list of `(op, a, b)` triples and
//! the outputs they are expected to produce:
//!
//! ```json
//! { "vectors": [
//!   { "op": "add", "a": "0x7fffffff", "b": 1,
//!     "expect": { "result": "0x80000000", "carry": false, "overflow": true } }
//! ] }
//! ```
//!
//! Operands and expected results are JSON numbers (negative values are read as
//! two's complement) or strings in `parse_word` syntax. Each `expect` field is
//! optional and omitted fields are not compared.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use simple_alu_core::AluOutput;
use simple_alu_core::Opcode;
use simple_alu_core::common::error::{ConfigError, OpcodeError, OperandError};
use simple_alu_core::common::word::{parse_word, to_unsigned};
use thiserror::Error;

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// A vector file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A vector file is not valid JSON or does not match the schema.
    #[error("invalid vector file: {0}")]
    Json(#[from] serde_json::Error),

    /// A vector names an opcode that cannot be decoded.
    #[error("vector {index}: {source}")]
    Opcode {
        /// Zero-based position in the file.
        index: usize,
        /// Decode failure.
        #[source]
        source: OpcodeError,
    },

    /// A vector carries an operand or expected result that is not a 32-bit word.
    #[error("vector {index}: {source}")]
    Operand {
        /// Zero-based position in the file.
        index: usize,
        /// Parse failure.
        #[source]
        source: OperandError,
    },

    /// The configuration file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A 32-bit word as written in a vector file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WordSpec {
    /// Plain JSON number, unsigned or signed.
    Number(i64),
    /// Text such as `"0x8000_0000"`, `"-1"` or `"0b101"`.
    Text(String),
}

impl WordSpec {
    /// Resolves to the 32-bit pattern.
    ///
    /// # Errors
    ///
    /// Returns `OperandError` when the value is malformed or outside both the
    /// unsigned and signed 32-bit ranges.
    pub fn resolve(&self) -> Result<u32, OperandError> {
        match self {
            Self::Number(n) => word_from_number(*n),
            Self::Text(text) => parse_word(text),
        }
    }
}

fn word_from_number(n: i64) -> Result<u32, OperandError> {
    if let Ok(v) = u32::try_from(n) {
        return Ok(v);
    }
    i32::try_from(n)
        .map(to_unsigned)
        .map_err(|_| OperandError::OutOfRange(n.to_string()))
}

/// An opcode as written in a vector file: a mnemonic or a selector number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OpSpec {
    /// Selector value, 0 to 15.
    Number(u8),
    /// Mnemonic (`"sltu"`) or selector text (`"0xc"`).
    Text(String),
}

impl OpSpec {
    /// Resolves to an opcode.
    ///
    /// # Errors
    ///
    /// Returns `OpcodeError` for unknown mnemonics or selectors above 15.
    pub fn resolve(&self) -> Result<Opcode, OpcodeError> {
        match self {
            Self::Number(n) => Opcode::try_from(*n),
            Self::Text(text) => text.parse(),
        }
    }
}

/// Expected outputs as written in a vector file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpectSpec {
    #[serde(default)]
    result: Option<WordSpec>,
    #[serde(default)]
    zero: Option<bool>,
    #[serde(default)]
    carry: Option<bool>,
    #[serde(default)]
    overflow: Option<bool>,
}

/// One entry of a vector file as written.
#[derive(Debug, Clone, Deserialize)]
pub struct VectorSpec {
    /// Optional label printed in place of the mnemonic.
    #[serde(default)]
    pub name: Option<String>,
    /// Operation.
    pub op: OpSpec,
    /// First operand.
    pub a: WordSpec,
    /// Second operand.
    pub b: WordSpec,
    /// Expected outputs; absent means "evaluate only".
    #[serde(default)]
    pub expect: ExpectSpec,
}

/// Top-level vector file.
#[derive(Debug, Clone, Deserialize)]
pub struct VectorFile {
    /// Entries, checked in order.
    pub vectors: Vec<VectorSpec>,
}

/// The comparisons a vector asks for. `None` fields are not checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Expectation {
    /// Expected result word.
    pub result: Option<u32>,
    /// Expected zero flag.
    pub zero: Option<bool>,
    /// Expected carry flag.
    pub carry: Option<bool>,
    /// Expected overflow flag.
    pub overflow: Option<bool>,
}

/// A fully resolved test vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    /// Label used in mismatch messages.
    pub label: String,
    /// Operation.
    pub op: Opcode,
    /// First operand.
    pub a: u32,
    /// Second operand.
    pub b: u32,
    /// Expected outputs.
    pub expect: Expectation,
}

/// One field that did not match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Vector label.
    pub label: String,
    /// Output field name (`result`, `zero`, `carry`, `overflow`).
    pub field: &'static str,
    /// Expected value, rendered.
    pub expected: String,
    /// Observed value, rendered.
    pub got: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {} {}, got {}",
            self.label, self.field, self.expected, self.got
        )
    }
}

impl VectorFile {
    /// Parses a vector file from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Json` if the text does not match the schema.
    pub fn parse(text: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a vector file.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Io` if the file cannot be read, or `CliError::Json`
    /// if it is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CliError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Resolves every entry into a `Case`.
    ///
    /// # Errors
    ///
    /// Fails on the first entry whose opcode or words cannot be resolved.
    pub fn cases(&self) -> Result<Vec<Case>, CliError> {
        self.vectors
            .iter()
            .enumerate()
            .map(|(index, v)| v.resolve(index))
            .collect()
    }
}

impl VectorSpec {
    fn resolve(&self, index: usize) -> Result<Case, CliError> {
        let operand = |source| CliError::Operand { index, source };
        let op = self
            .op
            .resolve()
            .map_err(|source| CliError::Opcode { index, source })?;
        let a = self.a.resolve().map_err(operand)?;
        let b = self.b.resolve().map_err(operand)?;
        let result = self
            .expect
            .result
            .as_ref()
            .map(WordSpec::resolve)
            .transpose()
            .map_err(operand)?;

        Ok(Case {
            label: self.name.clone().unwrap_or_else(|| op.to_string()),
            op,
            a,
            b,
            expect: Expectation {
                result,
                zero: self.expect.zero,
                carry: self.expect.carry,
                overflow: self.expect.overflow,
            },
        })
    }
}

impl Case {
    /// Compares an observed output against the fields this case specifies.
    pub fn compare(&self, out: &AluOutput) -> Vec<Mismatch> {
        let mut mismatches = Vec::new();
        let mut push = |field, expected: String, got: String| {
            mismatches.push(Mismatch {
                label: self.label.clone(),
                field,
                expected,
                got,
            });
        };

        if let Some(want) = self.expect.result.filter(|&want| want != out.result) {
            push("result", format!("{want:#010x}"), format!("{:#010x}", out.result));
        }
        let flags = [
            ("zero", self.expect.zero, out.zero),
            ("carry", self.expect.carry, out.carry),
            ("overflow", self.expect.overflow, out.overflow),
        ];
        for (field, want, got) in flags {
            if let Some(want) = want.filter(|&want| want != got) {
                push(field, u8::from(want).to_string(), u8::from(got).to_string());
            }
        }
        mismatches
    }
}
