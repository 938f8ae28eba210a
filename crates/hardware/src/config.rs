//! Configuration system for the ALU model.
//!
//! This module defines the configuration structures used by the execution unit
//! and its consumers. It provides:
//! 1. **Defaults:** Baseline settings when a field is absent.
//! 2. **Structures:** Hierarchical config for general behavior and reporting.
//! 3. **Enums:** Output radix for result rows.
//!
//! Configuration is supplied as JSON (from a file, the CLI, or a Python dict via
//! the bindings); use `Config::default()` otherwise. The evaluation semantics are
//! not configurable: nothing here changes what `evaluate` returns.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::error::ConfigError;

/// Default configuration constants.
mod defaults {
    use super::Radix;

    /// Evaluation tracing is off unless requested.
    pub const TRACE_EVALUATIONS: bool = false;

    /// Results are printed as zero-padded hex words.
    pub const RADIX: Radix = Radix::Hex;

    /// Signed readings are not appended to result rows.
    pub const SHOW_SIGNED: bool = false;
}

/// Number base used when printing words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    /// `0x` prefix, 8 hex digits.
    #[default]
    Hex,
    /// Unsigned decimal.
    Dec,
    /// `0b` prefix, 32 binary digits.
    Bin,
}

impl Radix {
    /// Formats a word in this radix.
    pub fn format(self, value: u32) -> String {
        match self {
            Self::Hex => format!("{value:#010x}"),
            Self::Dec => value.to_string(),
            Self::Bin => format!("{value:#034b}"),
        }
    }
}

impl std::str::FromStr for Radix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "dec" => Ok(Self::Dec),
            "bin" => Ok(Self::Bin),
            other => Err(format!("unknown radix `{other}` (expected hex, dec or bin)")),
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// General behavior.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Result and statistics reporting.
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Parses a configuration from JSON text. Absent fields take their defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] if the text is not valid JSON for this schema.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, [`ConfigError::Parse`] if
    /// its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `tracing` event for every evaluation made through the execution unit.
    #[serde(default = "GeneralConfig::default_trace_evaluations")]
    pub trace_evaluations: bool,
}

impl GeneralConfig {
    const fn default_trace_evaluations() -> bool {
        defaults::TRACE_EVALUATIONS
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_evaluations: defaults::TRACE_EVALUATIONS,
        }
    }
}

/// Reporting settings for result rows and statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Radix for operands and results.
    #[serde(default = "ReportConfig::default_radix")]
    pub radix: Radix,

    /// Append the signed reading of the result to each row.
    #[serde(default = "ReportConfig::default_show_signed")]
    pub show_signed: bool,

    /// Statistics sections to print (`summary`, `opcode_mix`, `flags`); empty prints all.
    #[serde(default)]
    pub stats_sections: Vec<String>,
}

impl ReportConfig {
    const fn default_radix() -> Radix {
        defaults::RADIX
    }

    const fn default_show_signed() -> bool {
        defaults::SHOW_SIGNED
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            radix: defaults::RADIX,
            show_signed: defaults::SHOW_SIGNED,
            stats_sections: Vec::new(),
        }
    }
}
