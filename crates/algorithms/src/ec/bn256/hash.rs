//! Hashing byte strings to G₁.
//!
//! Messages are first expanded into a base field element with
//! HKDF-SHA256, then mapped onto the curve either with the Fouque–Tibouchi
//! encoding (constant time, the default) or by try-and-increment.

use hkdf::Hkdf;
use sha2::Sha256;
use subtle::ConditionallySelectable;
use tracing::trace;

use bn256_params::curve::bn256::BN256_FIELD_WIDE_SIZE;
use bn256_params::utils::hash::{HASH_TO_BASE_INFO, HASH_TO_G1_DEFAULT_DST};

use super::field::fp::Fp;
use super::field::fp6::XI_TO_2P_SQUARED_MINUS_2_OVER_3;
use super::g1::{G1Affine, G1Projective, B};
use crate::error::{Error, Result};

/// √-3 in Montgomery form.
const SQRT_MINUS_3: Fp = Fp::from_raw_unchecked([
    0x236e_6759_56be_783b,
    0x0539_57e6_f379_ab64,
    0xe607_89a7_68f4_a5c4,
    0x04f8_979d_d8ba_d754,
]);

/// (√-3 - 1)/2, a primitive cube root of unity.
const SQRT_MINUS_3_MINUS_1_OVER_2: Fp = XI_TO_2P_SQUARED_MINUS_2_OVER_3;

/// Expands `msg` into a field element: HKDF-SHA256 with `dst` as salt,
/// 48 bytes of output reduced modulo p.
pub fn hash_to_base(msg: &[u8], dst: &[u8]) -> Result<Fp> {
    let hk = Hkdf::<Sha256>::new(Some(dst), msg);
    let mut okm = [0u8; BN256_FIELD_WIDE_SIZE];
    hk.expand(HASH_TO_BASE_INFO, &mut okm)
        .map_err(|_| Error::Processing {
            operation: "hash_to_base",
            details: "HKDF output length rejected",
        })?;
    Ok(Fp::from_bytes_wide(&okm))
}

/// x³ + 3
#[inline]
fn curve_rhs(x: &Fp) -> Fp {
    x.square() * x + B
}

/// Fouque–Tibouchi encoding of a field element onto the curve.
///
/// Of the three candidate x-coordinates the first with a non-zero square
/// x³ + 3 is taken, falling back to the third. The sign of y follows the
/// quadratic character of `t`. Runs in constant time.
pub fn map_to_curve(t: &Fp) -> G1Affine {
    let one = Fp::one();

    // inversion of zero yields zero
    let w = SQRT_MINUS_3 * t * (one + B + t.square()).invert().unwrap_or(Fp::zero());
    let x1 = SQRT_MINUS_3_MINUS_1_OVER_2 - t * w;
    let x2 = -one - x1;
    let x3 = one + w.square().invert().unwrap_or(Fp::zero());

    let usable = |x: &Fp| {
        let v = curve_rhs(x);
        v.is_square() & !v.is_zero()
    };

    let x = Fp::conditional_select(&x3, &x2, usable(&x2));
    let x = Fp::conditional_select(&x, &x1, usable(&x1));

    let y = curve_rhs(&x).sqrt().unwrap_or(Fp::zero());
    let y = Fp::conditional_select(&y, &-y, !t.is_square());

    G1Affine::from_xy_unchecked(x, y)
}

/// Hashes `msg` to G1 under the default domain separation tag.
pub fn hash_to_curve(msg: &[u8]) -> Result<G1Projective> {
    hash_to_curve_with_dst(msg, HASH_TO_G1_DEFAULT_DST)
}

/// Hashes `msg` to G1 under a caller-chosen domain separation tag.
pub fn hash_to_curve_with_dst(msg: &[u8], dst: &[u8]) -> Result<G1Projective> {
    let t = hash_to_base(msg, dst)?;
    Ok(G1Projective::from(map_to_curve(&t)))
}

/// Hashes `msg` to G1 by incrementing x from `hash_to_base` until x³ + 3
/// is a non-zero square.
///
/// **Variable time.** The number of steps depends on the message.
pub fn hash_to_curve_try_increment(msg: &[u8], dst: &[u8]) -> Result<G1Projective> {
    let mut x = hash_to_base(msg, dst)?;
    loop {
        let rhs = curve_rhs(&x);
        if rhs.legendre() == 1 {
            let y = rhs.sqrt().unwrap_or(Fp::zero());
            return Ok(G1Projective::from(G1Affine::from_xy_unchecked(x, y)));
        }
        trace!("x³ + 3 is not a square, incrementing x");
        x += Fp::one();
    }
}
