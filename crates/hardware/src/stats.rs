//! Evaluation statistics collection and reporting.
//!
//! This module tracks what an execution unit has been asked to do. It provides:
//! 1. **Totals:** Evaluations performed and how many hit a reserved selector.
//! 2. **Opcode mix:** Counts for each of the 16 selector patterns.
//! 3. **Flags:** How often zero, carry and overflow were raised.

use std::fmt;

use serde::Serialize;

use crate::alu::AluOutput;
use crate::common::constants::OPCODE_COUNT;
use crate::isa::Opcode;

/// Counters accumulated by an [`crate::exec::ExecutionUnit`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AluStats {
    /// Total evaluations recorded.
    pub evaluations: u64,
    /// Evaluations per selector pattern, indexed by `Opcode::bits()`.
    pub per_opcode: [u64; OPCODE_COUNT],
    /// Evaluations that used a reserved selector (`0xC`-`0xF`).
    pub undefined: u64,
    /// Outputs with the zero flag set.
    pub zero_set: u64,
    /// Outputs with the carry flag set.
    pub carry_set: u64,
    /// Outputs with the overflow flag set.
    pub overflow_set: u64,
}

impl AluStats {
    /// Records one evaluation.
    pub fn record(&mut self, op: Opcode, out: &AluOutput) {
        self.evaluations += 1;
        self.per_opcode[op.bits() as usize] += 1;
        if !op.is_defined() {
            self.undefined += 1;
        }
        self.zero_set += u64::from(out.zero);
        self.carry_set += u64::from(out.carry);
        self.overflow_set += u64::from(out.overflow);
    }

    /// Returns the number of evaluations recorded for one selector.
    pub const fn count(&self, op: Opcode) -> u64 {
        self.per_opcode[op.bits() as usize]
    }

    /// Adds another set of counters into this one.
    pub fn merge(&mut self, other: &Self) {
        self.evaluations += other.evaluations;
        for (mine, theirs) in self.per_opcode.iter_mut().zip(other.per_opcode) {
            *mine += theirs;
        }
        self.undefined += other.undefined;
        self.zero_set += other.zero_set;
        self.carry_set += other.carry_set;
        self.overflow_set += other.overflow_set;
    }

    /// Prints only the requested sections to stdout.
    ///
    /// Valid section names are `summary`, `opcode_mix` and `flags`. An empty
    /// slice prints every section.
    pub fn print_sections(&self, sections: &[String]) {
        print!("{}", self.render_sections(sections));
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }

    /// Renders the requested sections as the text `print_sections` writes.
    pub fn render_sections(&self, sections: &[String]) -> String {
        let mut out = String::new();
        let _ = self.write_sections(&mut out, sections);
        out
    }

    fn write_sections(&self, out: &mut impl fmt::Write, sections: &[String]) -> fmt::Result {
        let want = |name: &str| sections.is_empty() || sections.iter().any(|s| s == name);
        let total = if self.evaluations == 0 {
            1.0
        } else {
            self.evaluations as f64
        };
        let pct = |n: u64| (n as f64 / total) * 100.0;

        writeln!(out, "\n==========================================================")?;
        writeln!(out, "ALU EVALUATION STATISTICS")?;
        writeln!(out, "==========================================================")?;
        if want("summary") {
            writeln!(out, "evaluations              {}", self.evaluations)?;
            writeln!(
                out,
                "undefined_opcodes        {} ({:.2}%)",
                self.undefined,
                pct(self.undefined)
            )?;
            writeln!(out, "----------------------------------------------------------")?;
        }
        if want("opcode_mix") {
            writeln!(out, "OPCODE MIX")?;
            for op in Opcode::ALL {
                let n = self.count(op);
                if n == 0 {
                    continue;
                }
                let label = format!("op.{}", op.to_string().to_ascii_lowercase());
                writeln!(out, "  {label:<22} {n} ({:.2}%)", pct(n))?;
            }
            writeln!(out, "----------------------------------------------------------")?;
        }
        if want("flags") {
            writeln!(out, "FLAGS")?;
            let flags = [
                ("zero", self.zero_set),
                ("carry", self.carry_set),
                ("overflow", self.overflow_set),
            ];
            for (name, n) in flags {
                let label = format!("flag.{name}");
                writeln!(out, "  {label:<22} {n} ({:.2}%)", pct(n))?;
            }
        }
        writeln!(out, "==========================================================")
    }
}
