//! Human-readable result rows.
//!
//! One evaluation renders as a single line:
//!
//! ```text
//! ADD    a=0x7fffffff b=0x00000001 -> 0x80000000 [z=0 c=0 v=1]
//! ```

use std::fmt::Write;

use crate::alu::AluOutput;
use crate::common::word::to_signed;
use crate::config::ReportConfig;
use crate::isa::Opcode;

/// Formats one evaluation according to the report settings.
pub fn format_line(a: u32, b: u32, op: Opcode, out: &AluOutput, cfg: &ReportConfig) -> String {
    let radix = cfg.radix;
    let mut line = format!(
        "{op:<10} a={} b={} -> {} [z={} c={} v={}]",
        radix.format(a),
        radix.format(b),
        radix.format(out.result),
        u8::from(out.zero),
        u8::from(out.carry),
        u8::from(out.overflow),
    );
    if cfg.show_signed {
        let _ = write!(line, " (signed {})", to_signed(out.result));
    }
    line
}
