//! Execution unit wrapper.
//!
//! [`crate::alu::evaluate`] is a pure function. Drivers that want to see what
//! the unit is doing go through [`ExecutionUnit`] instead, which calls the same
//! function and additionally:
//! 1. **Traces:** Emits a `tracing` event per evaluation when enabled in the config.
//! 2. **Counts:** Records every evaluation in [`AluStats`].
//!
//! The wrapper never alters an output.

use tracing::{debug, trace};

use crate::alu::{AluOutput, evaluate};
use crate::config::Config;
use crate::isa::Opcode;
use crate::stats::AluStats;

/// Stateful shell around the ALU for tracing and statistics.
#[derive(Clone, Debug, Default)]
pub struct ExecutionUnit {
    trace_evaluations: bool,
    stats: AluStats,
}

impl ExecutionUnit {
    /// Creates an execution unit with empty statistics.
    pub fn new(config: &Config) -> Self {
        Self {
            trace_evaluations: config.general.trace_evaluations,
            stats: AluStats::default(),
        }
    }

    /// Evaluates one triple, recording and optionally tracing it.
    pub fn execute(&mut self, a: u32, b: u32, op: Opcode) -> AluOutput {
        let out = evaluate(a, b, op);
        self.stats.record(op, &out);

        if self.trace_evaluations {
            trace!(
                target: "simple_alu::exec",
                op = %op,
                a = format_args!("{a:#010x}"),
                b = format_args!("{b:#010x}"),
                result = format_args!("{:#010x}", out.result),
                zero = out.zero,
                carry = out.carry,
                overflow = out.overflow,
                "evaluate"
            );
        }
        if !op.is_defined() {
            debug!(
                target: "simple_alu::exec",
                selector = op.bits(),
                "reserved opcode selected, result forced to zero"
            );
        }
        out
    }

    /// Returns the statistics collected so far.
    pub const fn stats(&self) -> &AluStats {
        &self.stats
    }

    /// Clears the statistics.
    pub fn reset_stats(&mut self) {
        self.stats = AluStats::default();
    }

    /// Enables or disables per-evaluation tracing.
    pub const fn set_trace(&mut self, enabled: bool) {
        self.trace_evaluations = enabled;
    }
}
