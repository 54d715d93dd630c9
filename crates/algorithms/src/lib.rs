//! Pairing-based cryptography primitives with constant-time implementation
//!
//! This crate implements the BN256 (Barreto–Naehrig, 128-bit security)
//! pairing-friendly curve: the Fp ⊂ Fp2 ⊂ Fp6 ⊂ Fp12 field tower, the
//! groups G1, G2 and GT, the optimal Ate pairing, hashing to G1 and GLV
//! lattice decomposition for faster scalar multiplication.
//! The library is usable in `no_std` environments; the curve module needs
//! an allocator for its big-integer scalars.
//!
//! # Security Features
//!
//! - Constant-time field arithmetic, ladders and table lookups
//! - Automatic zeroization support for field and group elements
//! - Full validation of every decoded point, including subgroup checks

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Elliptic Curve primitives
#[cfg(feature = "alloc")]
pub mod ec;
#[cfg(feature = "alloc")]
pub use ec::bn256;
#[cfg(feature = "alloc")]
pub use ec::bn256::{
    hash_to_curve, pairing, G1Affine, G1Projective, G2Affine, G2Projective, Gt,
    MillerLoopResult,
};
