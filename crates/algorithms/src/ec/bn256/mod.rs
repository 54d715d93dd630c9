//! BN256: a Barreto–Naehrig pairing-friendly curve at the 128-bit security level.
//!
//! The curve is y² = x³ + 3 over a 256-bit prime field, with G₂ living on the
//! sextic twist over Fp2 and the optimal Ate pairing landing in a subgroup of
//! Fp12. Scalars are arbitrary-precision unsigned integers.
//!
//! **Warning:** Unaudited implementation. Use at your own risk.

#[macro_use]
mod macros;

pub mod field;
mod g1;
mod g2;
mod hash;
mod lattice;
mod pairings;
mod scalar;

#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(test)]
mod tests;

pub use field::fp::Fp;
pub use field::fp12::Fp12;
pub use field::fp2::Fp2;
pub use field::fp6::Fp6;
pub use g1::{G1Affine, G1Projective};
pub use g2::{G2Affine, G2Projective};
pub use hash::{
    hash_to_base, hash_to_curve, hash_to_curve_try_increment, hash_to_curve_with_dst,
    map_to_curve,
};
pub use lattice::{curve_lattice, target_lattice, Lattice};
pub use pairings::{miller_loop, multi_miller_loop, pairing, Gt, MillerLoopResult};
pub use scalar::{order, random_scalar};
