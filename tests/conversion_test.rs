use num_bigint::BigUint;
use num_traits::Pow;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use schubfach_triple::{d2d, f2d, DecimalTriple};

fn assert_roundtrip64(v: f64) {
    let d = d2d(v);
    let s = format!("{}e{}", d.significand, d.exponent);
    let parsed = s.parse::<f64>().unwrap();
    let parsed = if d.sign < 0 { -parsed } else { parsed };
    assert_eq!(parsed.to_bits(), v.to_bits(), "v={:e} decimal={}", v, s);
}

fn assert_roundtrip32(v: f32) {
    let d = f2d(v);
    let s = format!("{}e{}", d.significand, d.exponent);
    let parsed = s.parse::<f32>().unwrap();
    let parsed = if d.sign < 0 { -parsed } else { parsed };
    assert_eq!(parsed.to_bits(), v.to_bits(), "v={:e} decimal={}", v, s);
}

fn triple64(v: f64) -> (u64, i32, i8) {
    let d = d2d(v);
    (d.significand, d.exponent, d.sign)
}

fn triple32(v: f32) -> (u32, i32, i8) {
    let d = f2d(v);
    (d.significand, d.exponent, d.sign)
}

#[test]
fn simple_values() {
    assert_eq!(triple64(1.0), (1, 0, 1));
    assert_eq!(triple64(-1.0), (1, 0, -1));
    assert_eq!(triple64(0.1), (1, -1, 1));
    assert_eq!(triple64(0.3), (3, -1, 1));
    assert_eq!(triple64(3.0), (3, 0, 1));

    assert_eq!(triple32(1.0), (1, 0, 1));
    assert_eq!(triple32(0.1), (1, -1, 1));
    assert_eq!(triple32(-1.2345678), (12345678, -7, -1));
}

#[test]
fn trailing_zeros_shorten_to_one_digit() {
    // Integral powers of ten must come out with a one-digit significand.
    assert_eq!(triple64(100.0), (1, 2, 1));
    assert_eq!(triple64(1000.0), (1, 3, 1));
    assert_eq!(triple32(100.0), (1, 2, 1));
    assert_eq!(triple32(1000.0), (1, 3, 1));
    assert_eq!(triple64(1e22), (1, 22, 1));
}

#[test]
fn extreme_magnitudes() {
    assert_eq!(triple64(f64::MAX), (17976931348623157, 292, 1));
    assert_eq!(
        triple64(2.2250738585072014e-308), // smallest normal
        (22250738585072014, -324, 1)
    );
    // Smallest subnormals take the renormalization path; their decimal
    // exponents sit past the range reachable from normal values.
    assert_eq!(triple64(f64::from_bits(1)), (49406564584124654, -340, 1));
    assert_eq!(triple32(f32::from_bits(1)), (14012985, -52, 1));
}

#[test]
fn subnormal_roundtrip_sweep() {
    for bits in 1u64..2000 {
        assert_roundtrip64(f64::from_bits(bits));
        assert_roundtrip64(f64::from_bits(bits | 1 << 63));
    }
    // Scatter across the whole f64 subnormal range.
    let mut bits = 1u64;
    for _ in 0..5000 {
        assert_roundtrip64(f64::from_bits(bits));
        bits = bits.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407)
            & ((1 << 52) - 1);
        if bits == 0 {
            bits = 1;
        }
    }
    // The f32 subnormal range is small enough to stride densely.
    for bits in (1u32..1 << 23).step_by(509) {
        assert_roundtrip32(f32::from_bits(bits));
        assert_roundtrip32(f32::from_bits(bits | 1 << 31));
    }
}

#[test]
fn random_roundtrip_f64() {
    let mut rng = StdRng::seed_from_u64(0x4215_6275);
    for _ in 0..1_000_000 {
        let v = f64::from_bits(rng.gen::<u64>());
        if !v.is_finite() || v == 0.0 {
            continue;
        }
        assert_roundtrip64(v);
    }
}

#[test]
fn random_roundtrip_f32() {
    let mut rng = StdRng::seed_from_u64(0x3f80_0000);
    for _ in 0..1_000_000 {
        let v = f32::from_bits(rng.gen::<u32>());
        if !v.is_finite() || v == 0.0 {
            continue;
        }
        assert_roundtrip32(v);
    }
}

#[test]
fn no_shorter_decimal_roundtrips_for_normals() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut checked = 0;
    while checked < 20_000 {
        let v = f64::from_bits(rng.gen::<u64>());
        if !v.is_normal() {
            continue;
        }
        checked += 1;
        let d = d2d(v);
        if d.significand < 10 {
            continue; // already a single digit
        }
        // Any decimal with one digit fewer lies on the 10^(e+1) grid;
        // only the few points nearest v can fall in its interval.
        let sp = d.significand / 10;
        for cand in &[sp - 1, sp, sp + 1] {
            if *cand == 0 {
                continue;
            }
            let s = format!("{}e{}", cand, d.exponent + 1);
            let parsed = s.parse::<f64>().unwrap();
            let parsed = if d.sign < 0 { -parsed } else { parsed };
            assert_ne!(
                parsed.to_bits(),
                v.to_bits(),
                "shorter decimal {} round-trips for {:e}",
                s,
                v
            );
        }
    }
}

/// Exact comparison of two positive decimal triples via big integers.
fn decimal_lt(a: &DecimalTriple<u64>, b: &DecimalTriple<u64>) -> bool {
    let min_exp = a.exponent.min(b.exponent);
    let scale = |d: &DecimalTriple<u64>| {
        BigUint::from(d.significand) * BigUint::from(10u32).pow((d.exponent - min_exp) as u32)
    };
    scale(a) < scale(b)
}

#[test]
fn monotonic_across_binade_boundaries() {
    for &center in &[1.0f64, 2.0, 2.0f64.powi(100), 2.0f64.powi(-100)] {
        let base = center.to_bits();
        let mut prev: Option<DecimalTriple<u64>> = None;
        for bits in base - 3..=base + 3 {
            let d = d2d(f64::from_bits(bits));
            assert_eq!(d.sign, 1);
            if let Some(p) = &prev {
                assert!(
                    decimal_lt(p, &d),
                    "inversion at bits {:#x}: {}e{} !< {}e{}",
                    bits,
                    p.significand,
                    p.exponent,
                    d.significand,
                    d.exponent
                );
            }
            prev = Some(d);
        }
    }
}

#[test]
fn halfway_values_resolve_ties_to_even() {
    // These bit patterns scale to a value exactly halfway between two
    // 17-digit decimals; the even neighbor must win.
    for &(bits, sig, exp) in &[
        (0x431C_B6AA_4FB2_CDDFu64, 20205354864280238u64, -1),
        (0x4307_0E58_4154_9932, 8112120850399102, -1),
        (0x430F_47BB_51D8_586E, 11005742669524618, -1),
    ] {
        assert_eq!(triple64(f64::from_bits(bits)), (sig, exp, 1));
        assert_eq!(sig % 2, 0);
        assert_roundtrip64(f64::from_bits(bits));
    }
}
