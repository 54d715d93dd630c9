//! Constant values for the bn256 library
//!
//! Curve parameters, encoding widths, the lattice bases used for scalar
//! decomposition and the hash-to-curve domain constants. Everything here is
//! plain data; the arithmetic lives in `bn256-algorithms`.

#![no_std]

pub mod curve;
pub mod utils;
