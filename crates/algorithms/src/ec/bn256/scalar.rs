//! Scalars for BN256 are plain `BigUint`s; this module holds the glue between
//! them and the fixed-width limb representation used by the ladders.

use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use tracing::{trace, warn};

use bn256_internal::endian::limbs_to_be_bytes;
use bn256_params::curve::bn256::BN256_SCALAR_SIZE;

use crate::error::{Error, Result};

/// n, the order of G1, G2 and GT, little-endian limbs.
pub(crate) const ORDER_LIMBS: [u64; 4] = [
    0x1a2e_f45b_57ac_7261,
    0x2e8d_8e12_f82b_3924,
    0xaa6f_ecb8_6184_dc21,
    0x8fb5_01e3_4aa3_87f9,
];

/// The group order n as a `BigUint`.
pub fn order() -> BigUint {
    let mut bytes = [0u8; BN256_SCALAR_SIZE];
    limbs_to_be_bytes(&ORDER_LIMBS, &mut bytes);
    BigUint::from_bytes_be(&bytes)
}

/// Little-endian limbs of `k`.
///
/// Scalars that fit in 256 bits are used as given so that `P * k` really is
/// k additions of P; anything wider is reduced modulo n first.
pub(crate) fn to_limbs(k: &BigUint) -> [u64; 4] {
    let mut limbs = [0u64; 4];
    let digits = if k.bits() > 256 {
        (k % order()).to_u64_digits()
    } else {
        k.to_u64_digits()
    };
    for (limb, digit) in limbs.iter_mut().zip(digits.iter()) {
        *limb = *digit;
    }
    limbs
}

/// Samples a scalar uniformly from [1, n-1].
pub fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Result<BigUint> {
    let n = order();
    loop {
        let mut bytes = [0u8; BN256_SCALAR_SIZE];
        rng.try_fill_bytes(&mut bytes).map_err(|_| {
            warn!("random source failed while sampling a scalar");
            Error::Entropy {
                context: "random_scalar",
            }
        })?;

        let k = BigUint::from_bytes_be(&bytes);
        if !k.is_zero() && k < n {
            return Ok(k);
        }
        trace!("scalar candidate outside [1, n-1], resampling");
    }
}
