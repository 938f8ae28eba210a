//! Reference model.
//!
//! Computes expected outputs the long way: operands are widened to 64 bits,
//! arithmetic is done without wrapping, and the result is then reduced to a
//! 32-bit pattern. Signed readings use the textbook `v - 2^32` rule rather
//! than Rust casts, so a cast mistake in the crate cannot hide here.

use simple_alu_core::AluOutput;

const TWO_32: i64 = 1 << 32;
const TWO_31: u64 = 1 << 31;
const MAX_VAL: u64 = 0xFFFF_FFFF;

/// Signed reading of a 32-bit pattern.
pub fn signed(v: u32) -> i64 {
    let v = u64::from(v);
    if v >= TWO_31 {
        v as i64 - TWO_32
    } else {
        v as i64
    }
}

/// 32-bit pattern of a signed value.
pub fn unsigned(s: i64) -> u32 {
    if s < 0 {
        ((s + TWO_32) as u64 & MAX_VAL) as u32
    } else {
        (s as u64 & MAX_VAL) as u32
    }
}

fn out(result: u32, carry: bool, overflow: bool) -> AluOutput {
    AluOutput {
        result,
        zero: result == 0,
        carry,
        overflow,
    }
}

/// Expected output for a raw selector (only its low four bits are meaningful).
pub fn expected(a: u32, b: u32, op: u8) -> AluOutput {
    let wa = u64::from(a);
    let wb = u64::from(b);
    let shamt = b & 0x1F;

    match op & 0xF {
        // ADD
        0x0 => {
            let sum = wa + wb;
            let result = (sum & MAX_VAL) as u32;
            let (sa, sb, sr) = (signed(a), signed(b), signed(result));
            let overflow = (sa >= 0 && sb >= 0 && sr < 0) || (sa < 0 && sb < 0 && sr >= 0);
            out(result, sum > MAX_VAL, overflow)
        }
        // SUB
        0x1 => {
            let diff = wa as i64 - wb as i64;
            let result = unsigned(diff.rem_euclid(TWO_32));
            let (sa, sb, sr) = (signed(a), signed(b), signed(result));
            let overflow = (sa >= 0 && sb < 0 && sr < 0) || (sa < 0 && sb >= 0 && sr >= 0);
            out(result, a < b, overflow)
        }
        0x2 => out(a & b, false, false),
        0x3 => out(a | b, false, false),
        0x4 => out(a ^ b, false, false),
        0x5 => out(((wa << shamt) & MAX_VAL) as u32, false, false),
        0x6 => out((wa >> shamt) as u32, false, false),
        0x7 => out(unsigned(signed(a) >> shamt), false, false),
        0x8 => out(u32::from(signed(a) < signed(b)), false, false),
        0x9 => out(u32::from(a < b), false, false),
        0xA => out((!(wa | wb) & MAX_VAL) as u32, false, false),
        0xB => out((!(wa & wb) & MAX_VAL) as u32, false, false),
        _ => out(0, false, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_follow_the_textbook_rule() {
        assert_eq!(signed(0x7FFF_FFFF), 2_147_483_647);
        assert_eq!(signed(0x8000_0000), -2_147_483_648);
        assert_eq!(unsigned(-1), 0xFFFF_FFFF);
        assert_eq!(unsigned(-2_147_483_648), 0x8000_0000);
    }
}
