//! Numeric type traits behind the parsers.
//!
//! Both traits here are sealed: the integer parser targets exactly
//! {i32, u32, i64, u64}, and typed field parsing additionally covers f32.
//! Supporting another output type means adding an explicit impl in this
//! module, not implementing the trait downstream.

use crate::float::parse_f32;
use crate::int::parse_int;

mod private {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for i64 {}
    impl Sealed for u64 {}
    impl Sealed for f32 {}
}

/// Integer types the digit-accumulation loop can target.
///
/// The arithmetic is wrapping by contract: out-of-range magnitudes wrap
/// silently rather than being detected, and negating an unsigned value
/// produces its two's complement.
pub trait Int: Copy + private::Sealed {
    /// Literal zero, the value of a digitless parse.
    const ZERO: Self;

    /// Widen one decimal digit (or the base) into this type.
    fn from_digit(digit: u8) -> Self;

    /// Wrapping multiplication.
    fn wrapping_mul(self, other: Self) -> Self;

    /// Wrapping addition.
    fn wrapping_add(self, other: Self) -> Self;

    /// Wrapping negation.
    fn wrapping_neg(self) -> Self;
}

macro_rules! int_impl {
    ($($t:ty)*) => ($(
        impl Int for $t {
            const ZERO: Self = 0;

            #[inline]
            fn from_digit(digit: u8) -> Self {
                digit as $t
            }

            #[inline]
            fn wrapping_mul(self, other: Self) -> Self {
                <$t>::wrapping_mul(self, other)
            }

            #[inline]
            fn wrapping_add(self, other: Self) -> Self {
                <$t>::wrapping_add(self, other)
            }

            #[inline]
            fn wrapping_neg(self) -> Self {
                <$t>::wrapping_neg(self)
            }
        }
    )*)
}

int_impl! { i32 u32 i64 u64 }

/// Types a numeric field can be parsed into.
///
/// This is the closed dispatch set for [`parse_pair`] and for any caller
/// that selects the output type statically: i32, u32, i64, u64 as decimal
/// integers, and f32 as a decimal float.
///
/// [`parse_pair`]: crate::parse_pair
pub trait FromAscii: Sized + private::Sealed {
    /// Best-effort parse from the front of `bytes`.
    ///
    /// Never fails: input with no digits yields zero. Bytes past the first
    /// non-matching one are ignored.
    fn from_ascii(bytes: &[u8]) -> Self;
}

macro_rules! from_ascii_int_impl {
    ($($t:ty)*) => ($(
        impl FromAscii for $t {
            #[inline]
            fn from_ascii(bytes: &[u8]) -> Self {
                parse_int::<$t>(bytes, 10).0
            }
        }
    )*)
}

from_ascii_int_impl! { i32 u32 i64 u64 }

impl FromAscii for f32 {
    #[inline]
    fn from_ascii(bytes: &[u8]) -> Self {
        parse_f32(bytes).0
    }
}
