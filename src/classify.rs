//! Byte classifiers used to delimit numeric tokens in ASCII text.

/// Returns true for the whitespace bytes the parsers skip before a number:
/// space, tab, carriage return, line feed, and form feed.
#[inline]
pub fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\r' | b'\n' | b'\x0c')
}

/// Returns true for space and tab only.
#[inline]
pub fn is_blank(c: u8) -> bool {
    matches!(c, b' ' | b'\t')
}

/// Returns true for ASCII `0`-`9`.
#[inline]
pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Returns true for ASCII `0`-`9`, `+`, `-`, and `.`.
///
/// This locates the extent of a numeric token inside mixed text; it does not
/// validate well-formedness. A run of digit-like bytes such as `1.2.3` is one
/// token by this measure, and what the parsers make of it is best-effort.
#[inline]
pub fn is_digit_like(c: u8) -> bool {
    c.is_ascii_digit() || matches!(c, b'+' | b'-' | b'.')
}
