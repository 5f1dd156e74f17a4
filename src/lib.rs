//! Fast, allocation-free, best-effort parsing of numeric fields from ASCII
//! text.
//!
//! This crate exists for one workload: pulling millions of numeric fields out
//! of delimited data files. The general-purpose conversions in the standard
//! library validate their input, detect overflow, and report errors; for
//! trusted, pre-validated data that overhead buys nothing. The parsers here
//! make the opposite trade — a single left-to-right scan, no validation, no
//! error channel — and in exchange every call is a bounded, allocation-free
//! walk over the input bytes.
//!
//! # Contract
//!
//! Every parser in this crate always "succeeds". Input with no digits yields
//! the neutral value zero; scanning stops at the first byte that cannot
//! extend the number, and the offset of that byte is reported so that
//! sequential fields can be parsed by chaining calls. There is no `Result`
//! anywhere: callers that need strict validation must validate before
//! parsing.
//!
//! Unsupported input classes, documented rather than detected: `inf` and
//! `NaN` literals, hexadecimal float notation, integer bases above 10, and
//! magnitudes outside the target type's range (integer accumulation wraps;
//! float accumulation loses precision). Such input produces a garbage value,
//! never a panic.
//!
//! # Examples
//!
//! Parsing a float and continuing after it:
//!
//! ```
//! let (value, len) = numscan::parse_f32(b"3.25 rest");
//! assert_eq!(value, 3.25);
//! assert_eq!(len, 4);
//! ```
//!
//! Parsing an `index:value` field the way sparse matrix formats write them:
//!
//! ```
//! use numscan::Pair;
//!
//! let (pair, len) = numscan::parse_pair::<u32, f32>(b"127:0.5");
//! assert_eq!(pair, Pair::Two(127, 0.5));
//! assert_eq!(len, 7);
//! ```

#![no_std]
#![deny(missing_docs)]

mod classify;
mod float;
mod int;
mod num;
mod pair;

pub use self::classify::{is_blank, is_digit, is_digit_like, is_space};
pub use self::float::parse_f32;
pub use self::int::{parse_i64, parse_int, parse_u64};
pub use self::num::{FromAscii, Int};
pub use self::pair::{parse_pair, Pair};
