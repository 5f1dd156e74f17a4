//! Parsing of `v1[:v2]` fields.
//!
//! Sparse data formats write a feature as `index:value`; a label column is a
//! bare number. [`parse_pair`] handles both shapes in one pass over a
//! bounded byte range.

use crate::classify::{is_blank, is_digit_like};
use crate::num::FromAscii;

/// Outcome of [`parse_pair`]: how much of the `v1[:v2]` form was present.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Pair<A, B> {
    /// No numeric token before the end of input.
    None,
    /// A bare `v1` with no `:` after it.
    One(A),
    /// Both halves of `v1:v2`.
    Two(A, B),
}

impl<A, B> Pair<A, B> {
    /// Number of values parsed, 0 through 2.
    pub fn count(&self) -> usize {
        match self {
            Pair::None => 0,
            Pair::One(_) => 1,
            Pair::Two(..) => 2,
        }
    }
}

/// Parse a `v1` or `v1:v2` field from `input`.
///
/// Leading bytes that are not digit-like (not in `0`-`9`, `+`, `-`, `.`)
/// are skipped to find the start of `v1`; blanks may separate `v1` from the
/// `:`, and anything non-digit-like may sit between the `:` and `v2`. Each
/// half is converted from exactly its digit-like run, so a field never
/// bleeds into its neighbor. Returns the parsed values and the offset of
/// the first byte not consumed.
///
/// Because the skip step treats `:` itself as a non-digit-like byte, input
/// like `":9"` parses the 9 as `v1`, not as a second value.
///
/// ```
/// use numscan::{parse_pair, Pair};
///
/// assert_eq!(parse_pair::<u32, f32>(b"3:0.5"), (Pair::Two(3, 0.5), 5));
/// assert_eq!(parse_pair::<u32, f32>(b"7,"), (Pair::One(7), 1));
/// assert_eq!(parse_pair::<u32, u32>(b"xyz"), (Pair::None, 3));
/// ```
pub fn parse_pair<A, B>(input: &[u8]) -> (Pair<A, B>, usize)
where
    A: FromAscii,
    B: FromAscii,
{
    let end = input.len();

    let mut p = 0;
    while p != end && !is_digit_like(input[p]) {
        p += 1;
    }
    if p == end {
        return (Pair::None, end);
    }

    let mut q = p;
    while q != end && is_digit_like(input[q]) {
        q += 1;
    }
    let v1 = A::from_ascii(&input[p..q]);

    p = q;
    while p != end && is_blank(input[p]) {
        p += 1;
    }
    if p == end || input[p] != b':' {
        return (Pair::One(v1), p);
    }
    p += 1;

    while p != end && !is_digit_like(input[p]) {
        p += 1;
    }
    q = p;
    while q != end && is_digit_like(input[q]) {
        q += 1;
    }
    let v2 = B::from_ascii(&input[p..q]);

    (Pair::Two(v1, v2), q)
}
