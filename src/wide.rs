//! Fixed-width unsigned arithmetic for the conversion core.

use core::ops::{Add, BitAnd, BitOr, Div, Mul, Rem, Shl, Shr, Sub};

use crate::pow10;

/// Largest `f` with `2^f <= 10^e`, via a fixed-point multiply.
///
/// Exact for `|e| <= 500`, which covers both table ranges.
#[inline]
pub(crate) fn floor_log2_pow10(e: i32) -> i32 {
    debug_assert!(-500 <= e && e <= 500);
    (e * 1741647) >> 19
}

/// Decimal exponent selection: `floor(log10(2^q))`, or
/// `floor(log10(3/4 * 2^q))` when the lower boundary is closer.
///
/// Exact for `|q| <= 1200`, which covers the binary exponent range of
/// both supported formats, normalized subnormals included.
#[inline]
pub(crate) fn compute_k(q: i32, lower_boundary_is_closer: bool) -> i32 {
    debug_assert!(-1200 <= q && q <= 1200);
    let adjustment = if lower_boundary_is_closer { 524031 } else { 0 };
    (q * 1262611 - adjustment) >> 22
}

/// Unsigned storage integer of a supported float format.
///
/// Supplies the width-specific pieces of the conversion: the
/// double-width power-of-ten approximation and the round-to-odd
/// reduction that folds a `2w x w`-bit product back into `w` bits.
/// Implemented for `u32` and `u64`; a new float width needs an
/// implementation here plus a power-of-ten table covering that width's
/// reachable decimal exponent range.
pub trait CarrierUint:
    Copy
    + Eq
    + Ord
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Double-width unsigned type holding a power-of-ten approximation.
    type Wide: Copy;

    /// Bit width of the storage type.
    const BITS: u32;

    /// Inclusive bounds of the power-of-ten table for this width.
    const POW10_MIN: i32;
    const POW10_MAX: i32;

    fn from_u32(n: u32) -> Self;
    fn to_u32(self) -> u32;
    fn leading_zeros(self) -> u32;
    fn count_ones(self) -> u32;

    /// Top `2 * BITS` bits of `ceil(10^k)`, normalized so the most
    /// significant bit is set. `k` outside `POW10_MIN..=POW10_MAX` is a
    /// contract violation.
    fn pow10(k: i32) -> Self::Wide;

    /// High word of `g * cp`, with the lowest bit forced to 1 whenever
    /// the bits beyond the top bit of the low word were nonzero. The
    /// sticky bit lets later comparisons distinguish strictly-above
    /// from strictly-below without keeping the full product.
    fn round_to_odd(g: Self::Wide, cp: Self) -> Self;
}

impl CarrierUint for u32 {
    type Wide = u64;

    const BITS: u32 = 32;
    const POW10_MIN: i32 = pow10::POW10_32_MIN;
    const POW10_MAX: i32 = pow10::POW10_32_MAX;

    #[inline]
    fn from_u32(n: u32) -> u32 {
        n
    }

    #[inline]
    fn to_u32(self) -> u32 {
        self
    }

    #[inline]
    fn leading_zeros(self) -> u32 {
        u32::leading_zeros(self)
    }

    #[inline]
    fn count_ones(self) -> u32 {
        u32::count_ones(self)
    }

    #[inline]
    fn pow10(k: i32) -> u64 {
        pow10::pow10_32(k)
    }

    #[inline]
    fn round_to_odd(g: u64, cp: u32) -> u32 {
        // 64 x 32 -> 96 bit product.
        let p = u128::from(g) * u128::from(cp);

        let y1 = (p >> 64) as u32;
        let y0 = (p >> 32) as u32;

        y1 | u32::from(y0 > 1)
    }
}

impl CarrierUint for u64 {
    type Wide = u128;

    const BITS: u32 = 64;
    const POW10_MIN: i32 = pow10::POW10_64_MIN;
    const POW10_MAX: i32 = pow10::POW10_64_MAX;

    #[inline]
    fn from_u32(n: u32) -> u64 {
        u64::from(n)
    }

    #[inline]
    fn to_u32(self) -> u32 {
        self as u32
    }

    #[inline]
    fn leading_zeros(self) -> u32 {
        u64::leading_zeros(self)
    }

    #[inline]
    fn count_ones(self) -> u32 {
        u64::count_ones(self)
    }

    #[inline]
    fn pow10(k: i32) -> u128 {
        pow10::pow10_64(k)
    }

    #[inline]
    fn round_to_odd(g: u128, cp: u64) -> u64 {
        // 128 x 64 -> 192 bit product, in two 64-bit limbs.
        let g_lo = g as u64;
        let g_hi = (g >> 64) as u64;
        let p_lo = u128::from(g_lo) * u128::from(cp);
        let p_hi = u128::from(g_hi) * u128::from(cp) + (p_lo >> 64);

        // p_hi holds bits 64..192 of the product.
        let y1 = (p_hi >> 64) as u64;
        let y0 = p_hi as u64;

        y1 | u64::from(y0 > 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cmp::Ordering;
    use num_bigint::BigUint;
    use num_traits::Pow;

    /// Compares `a * 10^k` with `b * 2^q` exactly.
    fn cmp_pow(a: u32, k: i32, b: u32, q: i32) -> Ordering {
        let s10 = (-k).max(0) as u32;
        let s2 = (-q).max(0) as u32;
        let lhs = (BigUint::from(a) * BigUint::from(10u32).pow((k + s10 as i32) as u32)) << s2;
        let rhs = (BigUint::from(b) * BigUint::from(10u32).pow(s10)) << ((q + s2 as i32) as u32);
        lhs.cmp(&rhs)
    }

    #[test]
    fn floor_log2_pow10_exact_over_range() {
        for e in -350..=350 {
            let f = floor_log2_pow10(e);
            // 2^f <= 10^e < 2^(f+1)
            assert_ne!(cmp_pow(1, e, 1, f), Ordering::Less, "e={}", e);
            assert_eq!(cmp_pow(1, e, 1, f + 1), Ordering::Less, "e={}", e);
        }
    }

    #[test]
    fn compute_k_exact_over_range() {
        for q in -1200..=1200 {
            let k = compute_k(q, false);
            // 10^k <= 2^q < 10^(k+1)
            assert_ne!(cmp_pow(1, k, 1, q), Ordering::Greater, "q={}", q);
            assert_eq!(cmp_pow(1, k + 1, 1, q), Ordering::Greater, "q={}", q);

            let k = compute_k(q, true);
            // 4 * 10^k <= 3 * 2^q < 4 * 10^(k+1)
            assert_ne!(cmp_pow(4, k, 3, q), Ordering::Greater, "q={}", q);
            assert_eq!(cmp_pow(4, k + 1, 3, q), Ordering::Greater, "q={}", q);
        }
    }

    #[test]
    fn log_approximations_at_pinned_points() {
        assert_eq!(floor_log2_pow10(0), 0);
        assert_eq!(floor_log2_pow10(1), 3);
        assert_eq!(floor_log2_pow10(14), 46);
        assert_eq!(floor_log2_pow10(-1), -4);
        assert_eq!(floor_log2_pow10(340), 1129);
        assert_eq!(floor_log2_pow10(-292), -971);

        assert_eq!(compute_k(0, false), 0);
        assert_eq!(compute_k(10, false), 3);
        assert_eq!(compute_k(-10, false), -4);
        // floor(log10(3/4 * 2^0)) = -1
        assert_eq!(compute_k(0, true), -1);
        assert_eq!(compute_k(-52, true), -16);
        assert_eq!(compute_k(-1126, true), -340);
        assert_eq!(compute_k(971, false), 292);
    }

    #[test]
    fn round_to_odd_sticky_bit() {
        // Exact product: 2^63 * 8 = 2^66, no discarded bits.
        assert_eq!(u32::round_to_odd(1 << 63, 8), 4);
        // 8 * (2^63 - 1) = 2^66 - 8: high word 3, discarded bits set.
        assert_eq!(u32::round_to_odd((1 << 63) - 1, 8), 3 | 1);
        // A discarded low word of exactly 1 must not set the sticky bit.
        assert_eq!(u32::round_to_odd(1 << 32, 1), 0);

        assert_eq!(u64::round_to_odd(1 << 127, 8), 4);
        let g = (1u128 << 127) + (1u128 << 64);
        // Middle word is 8 after the multiply, so the result turns odd.
        assert_eq!(u64::round_to_odd(g, 8), 4 | 1);
    }

    #[test]
    fn round_to_odd_matches_schoolbook_product() {
        // Cross-check the two-limb path against a direct 96-bit product
        // computed through the u32 carrier.
        let g32 = 0xD1B7_1758_E219_652Cu64; // 10^-4 entry
        let cp = 0x0123_4567u32;
        let p = u128::from(g32) * u128::from(cp);
        let expect = ((p >> 64) as u32) | u32::from(((p >> 32) as u32) > 1);
        assert_eq!(u32::round_to_odd(g32, cp), expect);
    }
}
