//! Fast, minimal float parsing.
//!
//! One left-to-right scan, no backtracking, no error channel. Accuracy is
//! best-effort: the integer digits accumulate directly in f32 and the
//! exponent is applied by repeated multiplication, so values round-trip to
//! within a small relative tolerance rather than to the nearest
//! representable float.

use crate::classify::{is_digit, is_space};

/// Largest exponent magnitude honored by the scale loop. Anything bigger
/// saturates here, which bounds the multiplication count and keeps the
/// result finite and deterministic.
const MAX_EXPONENT: u32 = 38;

/// Parse a decimal float from the front of `input`.
///
/// Returns the value and the number of bytes consumed; the offset points at
/// the first byte that is not part of the number, so sequential fields can
/// be parsed by slicing past it. Grammar, in scan order: optional
/// whitespace, optional `+`/`-`, integer digits, optional `.` and fraction
/// digits, optional `e`/`E` with optional sign and exponent digits.
///
/// Input with no digits yields `0.0`. `inf`, `NaN`, and hexadecimal float
/// notation are not recognized and parse as digitless input would.
///
/// ```
/// assert_eq!(numscan::parse_f32(b"-1.5e2,"), (-150.0, 6));
/// assert_eq!(numscan::parse_f32(b"abc"), (0.0, 0));
/// ```
pub fn parse_f32(input: &[u8]) -> (f32, usize) {
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

    // Integer part, accumulated directly in the output type.
    let mut value: f32 = 0.0;
    while let Some(&c) = input.get(pos) {
        if !is_digit(c) {
            break;
        }
        value = value * 10.0 + f32::from(c - b'0');
        pos += 1;
    }

    // Fraction part: separate integer accumulator plus power-of-ten divisor.
    // Both wrap on absurdly long fractions; trusted input never gets there.
    if input.get(pos) == Some(&b'.') {
        pos += 1;
        let mut fraction: u32 = 0;
        let mut pow10: u32 = 1;
        while let Some(&c) = input.get(pos) {
            if !is_digit(c) {
                break;
            }
            fraction = fraction.wrapping_mul(10).wrapping_add(u32::from(c - b'0'));
            pow10 = pow10.wrapping_mul(10);
            pos += 1;
        }
        value += fraction as f32 / pow10 as f32;
    }

    // Exponent. The marker and its sign are consumed even when no digits
    // follow, in which case the scale stays 1.
    if matches!(input.get(pos), Some(&b'e') | Some(&b'E')) {
        pos += 1;
        let mut divide = false;
        match input.get(pos) {
            Some(&b'-') => {
                divide = true;
                pos += 1;
            }
            Some(&b'+') => {
                pos += 1;
            }
            _ => {}
        }

        let mut exponent: u32 = 0;
        while let Some(&c) = input.get(pos) {
            if !is_digit(c) {
                break;
            }
            exponent = exponent
                .saturating_mul(10)
                .saturating_add(u32::from(c - b'0'));
            pos += 1;
        }
        if exponent > MAX_EXPONENT {
            exponent = MAX_EXPONENT;
        }

        // Build the scale in chunks of 1e8, then by tens, to bound the
        // number of multiplications.
        let mut scale: f32 = 1.0;
        while exponent >= 8 {
            scale *= 1e8;
            exponent -= 8;
        }
        while exponent > 0 {
            scale *= 10.0;
            exponent -= 1;
        }
        value = if divide { value / scale } else { value * scale };
    }

    (if negative { -value } else { value }, pos)
}
