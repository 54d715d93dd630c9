//! # bn256
//!
//! A 256-bit Barreto–Naehrig pairing-friendly curve for Rust.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bn256 = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `alloc`: heap-backed scalars and pairing on `no_std` targets
//! - `generic-field`: portable loop-based base field arithmetic
//! - `serde`: serialize group elements as fixed-width byte strings
//! - `full`: all of the above
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`bn256-api`]: error taxonomy and the `Marshal` trait
//! - [`bn256-internal`]: endian and constant-time helpers
//! - [`bn256-params`]: curve constants
//! - [`bn256-algorithms`]: field tower, groups, pairing and hashing
//!
//! ```
//! use bn256::prelude::*;
//! use num_bigint::BigUint;
//!
//! let a = BigUint::from(5u32);
//! let p = G1Affine::from(G1Projective::generator() * &a);
//! let lhs = pairing(&p, &G2Affine::generator());
//! let rhs = Gt::generator() * &a;
//! assert_eq!(lhs, rhs);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub use bn256_algorithms as algorithms;
pub use bn256_api as api;
pub use bn256_internal as internal;
pub use bn256_params as params;

/// Common imports for bn256 users
pub mod prelude {
    pub use crate::api::{Error, Marshal, Result};

    #[cfg(feature = "alloc")]
    pub use crate::algorithms::bn256::{
        hash_to_curve, hash_to_curve_with_dst, multi_miller_loop, pairing, random_scalar,
        G1Affine, G1Projective, G2Affine, G2Projective, Gt, MillerLoopResult,
    };
}
