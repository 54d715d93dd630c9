//! Internal utilities for the bn256 library
//!
//! Nothing in here is part of the stable API: these are the byte/limb
//! conversions and constant-time helpers the curve arithmetic is built on.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;

pub use constant_time::{ct_is_zero, ct_lookup};
