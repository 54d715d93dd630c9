// File: crates/algorithms/src/ec/mod.rs
//! Elliptic Curve Primitives
//!
//! This module provides the BN256 pairing-friendly curve: its field tower,
//! the groups G1, G2 and GT, the optimal Ate pairing and hashing into G1.
//! Group operations are written to be resistant to timing attacks; the few
//! variable-time helpers say so in their documentation.

pub mod bn256;

pub use bn256::{
    pairing as bn256_pairing, G1Affine as Bn256G1Affine, G1Projective as Bn256G1,
    G2Affine as Bn256G2Affine, G2Projective as Bn256G2, Gt as Bn256Gt,
};
