//! Decomposition of a bit pattern into a binary triple, and the
//! Schubfach conversion of that triple into decimal.

use crate::layout::RawFloat;
use crate::wide::{compute_k, floor_log2_pow10, CarrierUint};

/// A finite nonzero binary value `sign * significand * 2^exponent`, with
/// the leading significand bit materialized at position
/// `SIGNIFICAND_WIDTH - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryTriple<T> {
    pub significand: T,
    pub exponent: i32,
    pub sign: i8,
}

/// A decimal value `sign * significand * 10^exponent`. The significand
/// carries no trailing zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalTriple<T> {
    pub significand: T,
    pub exponent: i32,
    pub sign: i8,
}

/// Extracts the normalized binary triple from a finite nonzero value.
///
/// Subnormals are promoted to normal form by shifting the significand
/// up until its leading bit reaches the hidden-bit position. Zero,
/// infinity and NaN are caller-side preconditions.
pub fn decompose<F: RawFloat>(value: F) -> BinaryTriple<F::Bits> {
    let zero = F::Bits::from_u32(0);
    let bits = value.to_bits();
    debug_assert!(
        (bits & F::exponent_mask()) != F::exponent_mask(),
        "infinity and NaN must be handled before decomposition"
    );
    debug_assert!(
        (bits & (F::exponent_mask() | F::significand_mask())) != zero,
        "zero must be handled before decomposition"
    );

    let sign = if (bits & F::sign_mask()) == zero { 1 } else { -1 };
    let raw_exponent = ((bits & F::exponent_mask()) >> F::EXPONENT_SHIFT).to_u32() as i32;
    let mut significand = bits & F::significand_mask();
    let exponent;

    if raw_exponent == 0 {
        // Subnormal: renormalize so the leading bit sits where the
        // hidden bit would be.
        let shift = significand.leading_zeros() + F::SIGNIFICAND_WIDTH - F::Bits::BITS;
        significand = significand << shift;
        exponent = 1 - F::EXPONENT_BIAS - shift as i32;
    } else {
        if F::HAS_HIDDEN_BIT {
            significand = significand | F::hidden_bit();
        }
        exponent = raw_exponent - F::EXPONENT_BIAS;
    }

    BinaryTriple {
        significand,
        exponent,
        sign,
    }
}

/// Converts a normalized binary triple into the shortest decimal triple
/// that parses back to the same bit pattern under round-to-nearest-even.
pub fn to_decimal<T: CarrierUint>(bin: BinaryTriple<T>) -> DecimalTriple<T> {
    let zero = T::from_u32(0);
    let one = T::from_u32(1);
    let two = T::from_u32(2);
    let four = T::from_u32(4);
    let ten = T::from_u32(10);
    let forty = T::from_u32(40);

    let c = bin.significand;
    let q = bin.exponent;

    // Under round-to-nearest-even, an even significand owns both of its
    // interval boundaries inclusively; an odd one owns neither.
    let is_even = (c & one) == zero;
    let accept_lower = is_even;
    let accept_upper = is_even;

    // At the bottom of a binade the gap to the next lower representable
    // value is half the gap to the next higher one.
    let lower_boundary_is_closer = c.count_ones() == 1;

    // Boundary-adjacent candidates at 4x precision.
    let cbl = four * c - two + T::from_u32(lower_boundary_is_closer as u32);
    let cb = four * c;
    let cbr = four * c + two;

    let k = compute_k(q, lower_boundary_is_closer);
    let h = q + floor_log2_pow10(-k) + 1;
    debug_assert!(1 <= h && h <= 4);

    let pow10 = T::pow10(-k);
    let vbl = T::round_to_odd(pow10, cbl << h as u32);
    let vb = T::round_to_odd(pow10, cb << h as u32);
    let vbr = T::round_to_odd(pow10, cbr << h as u32);

    let lower = vbl + if accept_lower { zero } else { one };
    let upper = vbr - if accept_upper { zero } else { one };

    let s = vb / four;

    // One decimal digit fewer suffices when exactly one of the two
    // shortened neighbors stays inside the rounding interval.
    if s >= ten {
        let sp = s / ten;
        let up_inside = lower <= forty * sp;
        let wp_inside = forty * sp + forty <= upper;
        if up_inside != wp_inside {
            return strip_trailing_zeros(DecimalTriple {
                significand: sp + T::from_u32(wp_inside as u32),
                exponent: k + 1,
                sign: bin.sign,
            });
        }
    }

    let u_inside = lower <= four * s;
    let w_inside = four * s + four <= upper;
    if u_inside != w_inside {
        return strip_trailing_zeros(DecimalTriple {
            significand: s + T::from_u32(w_inside as u32),
            exponent: k,
            sign: bin.sign,
        });
    }

    // Both candidates are inside: round to the nearer one, breaking an
    // exact tie toward the even significand.
    let mid = four * s + two;
    let round_up = vb > mid || (vb == mid && (s & one) == one);

    strip_trailing_zeros(DecimalTriple {
        significand: s + T::from_u32(round_up as u32),
        exponent: k,
        sign: bin.sign,
    })
}

/// Canonicalizes the significand by dropping trailing decimal zeros, so
/// the digit count is minimal. Bounded by the significand's digit count.
fn strip_trailing_zeros<T: CarrierUint>(mut dec: DecimalTriple<T>) -> DecimalTriple<T> {
    let zero = T::from_u32(0);
    let ten = T::from_u32(10);
    while dec.significand % ten == zero {
        dec.significand = dec.significand / ten;
        dec.exponent += 1;
    }
    dec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decompose_normal() {
        let t = decompose(1.0f64);
        assert_eq!(t.significand, 1u64 << 52);
        assert_eq!(t.exponent, -52);
        assert_eq!(t.sign, 1);

        let t = decompose(-1.5f64);
        assert_eq!(t.significand, 3u64 << 51);
        assert_eq!(t.exponent, -52);
        assert_eq!(t.sign, -1);

        let t = decompose(1.0f32);
        assert_eq!(t.significand, 1u32 << 23);
        assert_eq!(t.exponent, -23);
        assert_eq!(t.sign, 1);
    }

    #[test]
    fn decompose_subnormal() {
        // Smallest positive subnormals renormalize with a full shift.
        let t = decompose(f64::from_bits(1));
        assert_eq!(t.significand, 1u64 << 52);
        assert_eq!(t.exponent, -1126);
        assert_eq!(t.sign, 1);

        let t = decompose(f32::from_bits(1));
        assert_eq!(t.significand, 1u32 << 23);
        assert_eq!(t.exponent, -172);
        assert_eq!(t.sign, 1);

        // Largest subnormal: a single-position shift.
        let t = decompose(f64::from_bits((1u64 << 52) - 1));
        assert_eq!(t.significand, ((1u64 << 52) - 1) << 1);
        assert_eq!(t.exponent, -1075);
    }

    #[test]
    fn ties_round_to_even_significand() {
        // vb == mid for this pattern; the final digit must come out even.
        let t = to_decimal(decompose(f64::from_bits(0x431C_B6AA_4FB2_CDDF)));
        assert_eq!(t.significand, 20205354864280238);
        assert_eq!(t.exponent, -1);

        let t = to_decimal(decompose(f64::from_bits(0x4307_0E58_4154_9932)));
        assert_eq!(t.significand, 8112120850399102);
        assert_eq!(t.exponent, -1);

        let t = to_decimal(decompose(f32::from_bits(0x4A72_2829)));
        assert_eq!(t.significand, 39674982);
        assert_eq!(t.exponent, -1);
    }

    #[test]
    fn lower_boundary_is_closer_cases() {
        // Powers of two sit at the bottom of their binade; the narrower
        // lower gap shifts which boundary is admissible.
        let t = to_decimal(decompose(1.0f64));
        assert_eq!((t.significand, t.exponent, t.sign), (1, 0, 1));

        let t = to_decimal(decompose(0.5f64));
        assert_eq!((t.significand, t.exponent, t.sign), (5, -1, 1));

        let t = to_decimal(decompose(1024.0f64));
        assert_eq!((t.significand, t.exponent, t.sign), (1024, 0, 1));

        let t = to_decimal(decompose(0.5f32));
        assert_eq!((t.significand, t.exponent, t.sign), (5, -1, 1));
    }
}
