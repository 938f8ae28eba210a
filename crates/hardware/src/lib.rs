//! 32-bit combinational ALU model.
//!
//! This crate implements the execution unit of a simple 32-bit datapath with the following:
//! 1. **ALU:** A pure `evaluate(a, b, op)` over twelve operations producing a result and
//!    zero / carry / overflow flags.
//! 2. **ISA:** The 4-bit opcode selector, its twelve defined encodings and mnemonics.
//! 3. **Common:** Word geometry constants, two's-complement helpers and error types.
//! 4. **Execution:** A stateful wrapper that traces evaluations and collects statistics.
//! 5. **Configuration and reporting:** JSON configuration and human-readable result rows.

/// Arithmetic Logic Unit (add, sub, logic, shifts, comparisons, flags).
pub mod alu;
/// Common types and constants (word geometry, conversions, errors).
pub mod common;
/// Configuration (tracing, report radix, statistics sections).
pub mod config;
/// Execution unit wrapper (tracing and statistics around `evaluate`).
pub mod exec;
/// Instruction set (opcode selector, operation encodings, mnemonics).
pub mod isa;
/// Human-readable formatting of evaluation results.
pub mod report;
/// Evaluation statistics collection and reporting.
pub mod stats;

/// Evaluate one `(a, b, op)` triple; the crate's single behavioral contract.
pub use crate::alu::{Alu, AluOutput, evaluate};
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Stateful execution unit; construct with `ExecutionUnit::new`.
pub use crate::exec::ExecutionUnit;
/// Opcode selector and decoded operation.
pub use crate::isa::{AluOp, Opcode};
