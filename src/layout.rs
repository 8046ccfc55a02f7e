//! Compile-time bit-layout description of IEEE-754-style formats.

use crate::wide::CarrierUint;

/// Static configuration record for an IEEE-754-style binary format.
///
/// An implementation supplies only the storage type, the two field
/// widths and the bit-pattern accessor; everything else (hidden-bit
/// rule, storage width, bias, shifts, masks) is derived here, matching
/// the IEEE-754 interchange format for those widths.
pub trait RawFloat: Copy {
    /// Minimal unsigned type wide enough to hold the bit pattern.
    type Bits: CarrierUint;

    /// Significand width in bits, counting the hidden bit.
    const SIGNIFICAND_WIDTH: u32;
    /// Exponent field width in bits.
    const EXPONENT_WIDTH: u32;
    /// Sign field width; 1 for every interchange format.
    const SIGN_WIDTH: u32 = 1;

    /// Formats whose stored fields fill a whole number of bytes keep
    /// the leading significand bit implicit.
    const HAS_HIDDEN_BIT: bool =
        (Self::SIGN_WIDTH + Self::EXPONENT_WIDTH + Self::SIGNIFICAND_WIDTH) % 8 != 0;

    /// Stored width: the hidden bit, if any, is not materialized.
    const STORAGE_WIDTH: u32 = Self::SIGN_WIDTH + Self::EXPONENT_WIDTH + Self::SIGNIFICAND_WIDTH
        - Self::HAS_HIDDEN_BIT as u32;

    /// Bias such that the value is `significand * 2^(raw_exponent - bias)`
    /// with an integral significand.
    const EXPONENT_BIAS: i32 =
        (1 << (Self::EXPONENT_WIDTH - 1)) + Self::SIGNIFICAND_WIDTH as i32 - 2;

    const EXPONENT_SHIFT: u32 = Self::STORAGE_WIDTH - Self::SIGN_WIDTH - Self::EXPONENT_WIDTH;
    const SIGN_SHIFT: u32 = Self::STORAGE_WIDTH - Self::SIGN_WIDTH;

    /// Raw bit pattern of the value.
    fn to_bits(self) -> Self::Bits;

    #[inline]
    fn significand_mask() -> Self::Bits {
        let one = Self::Bits::from_u32(1);
        (one << (Self::SIGNIFICAND_WIDTH - Self::HAS_HIDDEN_BIT as u32)) - one
    }

    #[inline]
    fn exponent_mask() -> Self::Bits {
        let one = Self::Bits::from_u32(1);
        ((one << Self::EXPONENT_WIDTH) - one) << Self::EXPONENT_SHIFT
    }

    #[inline]
    fn sign_mask() -> Self::Bits {
        Self::Bits::from_u32(1) << Self::SIGN_SHIFT
    }

    /// Position of the implicit leading significand bit.
    #[inline]
    fn hidden_bit() -> Self::Bits {
        Self::Bits::from_u32(1) << (Self::SIGNIFICAND_WIDTH - 1)
    }
}

impl RawFloat for f32 {
    type Bits = u32;

    const SIGNIFICAND_WIDTH: u32 = 24;
    const EXPONENT_WIDTH: u32 = 8;

    #[inline]
    fn to_bits(self) -> u32 {
        f32::to_bits(self)
    }
}

impl RawFloat for f64 {
    type Bits = u64;

    const SIGNIFICAND_WIDTH: u32 = 53;
    const EXPONENT_WIDTH: u32 = 11;

    #[inline]
    fn to_bits(self) -> u64 {
        f64::to_bits(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_geometry<F: RawFloat>() {
        assert_eq!(
            F::SIGN_WIDTH + F::EXPONENT_WIDTH + F::SIGNIFICAND_WIDTH
                - F::HAS_HIDDEN_BIT as u32,
            F::STORAGE_WIDTH
        );
        assert_eq!(F::STORAGE_WIDTH, F::Bits::BITS);
    }

    #[test]
    fn derived_geometry() {
        check_geometry::<f32>();
        check_geometry::<f64>();

        assert!(<f32 as RawFloat>::HAS_HIDDEN_BIT);
        assert!(<f64 as RawFloat>::HAS_HIDDEN_BIT);
        assert_eq!(<f32 as RawFloat>::EXPONENT_BIAS, 150);
        assert_eq!(<f64 as RawFloat>::EXPONENT_BIAS, 1075);
        assert_eq!(<f32 as RawFloat>::EXPONENT_SHIFT, 23);
        assert_eq!(<f64 as RawFloat>::EXPONENT_SHIFT, 52);
    }

    #[test]
    fn masks() {
        assert_eq!(<f64 as RawFloat>::significand_mask(), (1u64 << 52) - 1);
        assert_eq!(<f64 as RawFloat>::exponent_mask(), 0x7FF0_0000_0000_0000);
        assert_eq!(<f64 as RawFloat>::sign_mask(), 0x8000_0000_0000_0000);
        assert_eq!(<f64 as RawFloat>::hidden_bit(), 1u64 << 52);

        assert_eq!(<f32 as RawFloat>::significand_mask(), 0x007F_FFFF);
        assert_eq!(<f32 as RawFloat>::exponent_mask(), 0x7F80_0000);
        assert_eq!(<f32 as RawFloat>::sign_mask(), 0x8000_0000);
        assert_eq!(<f32 as RawFloat>::hidden_bit(), 1u32 << 23);
    }
}
