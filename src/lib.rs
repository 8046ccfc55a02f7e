//! Shortest round-trip decimal conversion for binary floating point,
//! using the Schubfach algorithm described in
//!
//! Raffaello Giulietti, "The Schubfach way to render doubles",
//! <https://drive.google.com/open?id=1luHhyQF9zKlM8yJ1nebU0OgVYhfC6CBN>
//!
//! Exposes the decimal significand/exponent representation only.
//! Rendering the pair as text (decimal point placement, exponent
//! letter, padding) is the caller's job, as is special-casing zero,
//! infinity and NaN before calling in: those inputs are outside the
//! conversion's domain and are rejected by debug assertions only.
//!
//! Part of the [f2rust](https://github.com/zaynar/f2rust) project.

#![no_std]

mod convert;
mod layout;
mod pow10;
mod wide;

pub use crate::convert::{decompose, to_decimal, BinaryTriple, DecimalTriple};
pub use crate::layout::RawFloat;
pub use crate::wide::CarrierUint;

/// Shortest round-trip decimal triple for a finite nonzero `f32`.
#[cfg_attr(feature = "no-panic", no_panic::no_panic)]
pub fn f2d(value: f32) -> DecimalTriple<u32> {
    to_decimal(decompose(value))
}

/// Shortest round-trip decimal triple for a finite nonzero `f64`.
#[cfg_attr(feature = "no-panic", no_panic::no_panic)]
pub fn d2d(value: f64) -> DecimalTriple<u64> {
    to_decimal(decompose(value))
}
