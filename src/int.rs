//! Fast, minimal integer parsing.

use crate::classify::{is_digit, is_space};
use crate::num::Int;

/// Parse an integer from the front of `input` in the given base.
///
/// Returns the value and the number of bytes consumed. Scanning covers
/// optional whitespace, an optional `+`/`-`, and a run of decimal digits;
/// accumulation is `value * base + digit` with wrapping arithmetic, so
/// out-of-range magnitudes wrap rather than error. Input with no digits
/// yields zero.
///
/// Only bases up to 10 are supported: digits are always taken from
/// `0`-`9`, so a larger base can never see its upper digits.
///
/// ```
/// assert_eq!(numscan::parse_int::<i32>(b"-17 4", 10), (-17, 3));
/// assert_eq!(numscan::parse_int::<u64>(b"101", 2), (5, 3));
/// ```
pub fn parse_int<I: Int>(input: &[u8], base: u8) -> (I, usize) {
    let mut pos = 0;
    while pos < input.len() && is_space(input[pos]) {
        pos += 1;
    }

    let mut negative = false;
    match input.get(pos) {
        Some(&b'-') => {
            negative = true;
            pos += 1;
        }
        Some(&b'+') => {
            pos += 1;
        }
        _ => {}
    }

    let base = I::from_digit(base);
    let mut value = I::ZERO;
    while let Some(&c) = input.get(pos) {
        if !is_digit(c) {
            break;
        }
        value = value.wrapping_mul(base).wrapping_add(I::from_digit(c - b'0'));
        pos += 1;
    }

    (if negative { value.wrapping_neg() } else { value }, pos)
}

/// Parse an unsigned 64-bit integer in the given base.
///
/// Convenience wrapper over [`parse_int`] for the widest unsigned case.
#[inline]
pub fn parse_u64(input: &[u8], base: u8) -> (u64, usize) {
    parse_int(input, base)
}

/// Parse a signed 64-bit integer in base 10.
///
/// Convenience wrapper over [`parse_int`] for the common decimal case.
#[inline]
pub fn parse_i64(input: &[u8]) -> (i64, usize) {
    parse_int(input, 10)
}
