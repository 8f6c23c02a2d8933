//! Big Integer \
//! This crate provides [`BigInt`]: arbitrary-precision signed integers kept
//! in two's-complement notation over 32-bit limbs, with the full arithmetic,
//! bitwise, shift and comparison operator set and decimal string conversion.
//!
//! Fallible operations return [`Result`] with a [`BigIntError`]; the `/` and
//! `%` operators panic on a zero divisor like the primitive integers do.

mod big_int;
mod big_int_div;
mod big_int_string;
mod big_num_cache;
mod big_num_constants;
mod error;

pub use big_int::BigInt;
pub use error::{BigIntError, Result};
