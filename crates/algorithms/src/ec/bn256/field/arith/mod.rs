//! Raw 4-limb arithmetic modulo p in Montgomery form.
//!
//! Two interchangeable backends implement [`FieldArithmetic`]: a fully
//! unrolled one (the default) and a portable loop-based one selected with the
//! `generic-field` feature. Test builds compile both and compare them.

#[cfg(any(test, feature = "generic-field"))]
mod generic;
#[cfg(any(test, not(feature = "generic-field")))]
mod unrolled;

#[cfg(any(test, feature = "generic-field"))]
pub(crate) use generic::Generic;
#[cfg(any(test, not(feature = "generic-field")))]
pub(crate) use unrolled::Unrolled;

/// Backend used by [`super::fp::Fp`].
#[cfg(feature = "generic-field")]
pub(crate) type Backend = Generic;

/// Backend used by [`super::fp::Fp`].
#[cfg(not(feature = "generic-field"))]
pub(crate) type Backend = Unrolled;

// ============================================================================
// Arithmetic Helper Functions
// ============================================================================

/// Compute a + b + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a - (b + borrow), returning (result, borrow)
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a + (b * c) + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

// ============================================================================
// Field Constants
// ============================================================================

/// Field modulus p
pub(crate) const MODULUS: [u64; 4] = [
    0x185c_ac6c_5e08_9667,
    0xee5b_88d1_20b5_b59e,
    0xaa6f_ecb8_6184_dc21,
    0x8fb5_01e3_4aa3_87f9,
];

/// INV = -(p^{-1} mod 2^64) mod 2^64
pub(crate) const INV: u64 = 0x2387_f900_7f17_daa9;

/// Conditionally subtract p from a value carried over five limbs.
///
/// `carry` is the bit above the top limb; p exceeds 2^255 so sums and
/// Montgomery products can spill into it.
#[inline(always)]
pub(crate) const fn subtract_p(r: [u64; 4], carry: u64) -> [u64; 4] {
    let (d0, borrow) = sbb(r[0], MODULUS[0], 0);
    let (d1, borrow) = sbb(r[1], MODULUS[1], borrow);
    let (d2, borrow) = sbb(r[2], MODULUS[2], borrow);
    let (d3, borrow) = sbb(r[3], MODULUS[3], borrow);
    let (_, borrow) = sbb(carry, 0, borrow);

    // borrow is all ones when the value was already below p
    [
        (r[0] & borrow) | (d0 & !borrow),
        (r[1] & borrow) | (d1 & !borrow),
        (r[2] & borrow) | (d2 & !borrow),
        (r[3] & borrow) | (d3 & !borrow),
    ]
}

/// Limb-level operations on canonical Montgomery residues.
///
/// Inputs must be fully reduced (below p); outputs always are.
pub(crate) trait FieldArithmetic {
    /// a + b mod p
    fn add(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4];
    /// a - b mod p
    fn sub(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4];
    /// -a mod p
    fn neg(a: &[u64; 4]) -> [u64; 4];
    /// a * b * R^{-1} mod p
    fn mul(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4];
    /// a * a * R^{-1} mod p
    fn square(a: &[u64; 4]) -> [u64; 4];
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use num_traits::One;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn random_residue(rng: &mut ChaCha20Rng) -> [u64; 4] {
        loop {
            let mut limbs = [0u64; 4];
            for limb in limbs.iter_mut() {
                *limb = rng.next_u64();
            }
            // Keep values below p with a plain comparison from the top limb
            let below = limbs
                .iter()
                .rev()
                .zip(MODULUS.iter().rev())
                .find(|(a, m)| a != m)
                .map(|(a, m)| a < m)
                .unwrap_or(false);
            if below {
                return limbs;
            }
        }
    }

    #[test]
    fn test_backends_agree() {
        let mut rng = ChaCha20Rng::seed_from_u64(0x6e62_3235_3621);
        let edge = [
            [0u64; 4],
            [1, 0, 0, 0],
            [
                MODULUS[0] - 1,
                MODULUS[1],
                MODULUS[2],
                MODULUS[3],
            ],
        ];

        let mut inputs: Vec<[u64; 4]> = edge.to_vec();
        for _ in 0..10_000 {
            inputs.push(random_residue(&mut rng));
        }

        for pair in inputs.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert_eq!(Unrolled::add(a, b), Generic::add(a, b));
            assert_eq!(Unrolled::sub(a, b), Generic::sub(a, b));
            assert_eq!(Unrolled::neg(a), Generic::neg(a));
            assert_eq!(Unrolled::mul(a, b), Generic::mul(a, b));
            assert_eq!(Unrolled::square(a), Generic::square(a));
            assert_eq!(Unrolled::square(a), Unrolled::mul(a, a));
        }

        for e in edge.iter() {
            for f in edge.iter() {
                assert_eq!(Unrolled::mul(e, f), Generic::mul(e, f));
                assert_eq!(Unrolled::sub(e, f), Generic::sub(e, f));
            }
        }
    }

    fn to_big(limbs: &[u64; 4]) -> BigUint {
        let mut bytes = [0u8; 32];
        bn256_internal::endian::limbs_to_be_bytes(limbs, &mut bytes);
        BigUint::from_bytes_be(&bytes)
    }

    // Montgomery products carry a factor R^{-1}; compare against that
    fn check_against_bigint<B: FieldArithmetic>(seed: u64) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let p = to_big(&MODULUS);
        let r_inv = (BigUint::one() << 256u32).modpow(&(&p - 2u32), &p);

        for _ in 0..10_000 {
            let (a, b) = (random_residue(&mut rng), random_residue(&mut rng));
            let (x, y) = (to_big(&a), to_big(&b));

            assert_eq!(to_big(&B::add(&a, &b)), (&x + &y) % &p);
            assert_eq!(to_big(&B::sub(&a, &b)), (&x + &p - &y) % &p);
            assert_eq!(to_big(&B::neg(&a)), (&p - &x) % &p);
            assert_eq!(to_big(&B::mul(&a, &b)), (&x * &y * &r_inv) % &p);
            assert_eq!(to_big(&B::square(&a)), (&x * &x * &r_inv) % &p);
        }
    }

    #[test]
    fn test_unrolled_matches_bigint() {
        check_against_bigint::<Unrolled>(0x756e_726f);
    }

    #[test]
    fn test_generic_matches_bigint() {
        check_against_bigint::<Generic>(0x6765_6e65);
    }

    #[test]
    fn test_subtract_p_uses_carry() {
        // 2^256 + 0 is above p, so the reduction must fire even though the
        // low limbs are all zero
        let r = subtract_p([0, 0, 0, 0], 1);
        let (e0, b) = sbb(0, MODULUS[0], 0);
        let (e1, b) = sbb(0, MODULUS[1], b);
        let (e2, b) = sbb(0, MODULUS[2], b);
        let (e3, _) = sbb(0, MODULUS[3], b);
        assert_eq!(r, [e0, e1, e2, e3]);

        assert_eq!(subtract_p(MODULUS, 0), [0, 0, 0, 0]);
        assert_eq!(subtract_p([5, 0, 0, 0], 0), [5, 0, 0, 0]);
    }
}
