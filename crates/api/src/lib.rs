//! Public API traits and types for the bn256 library
//!
//! This crate provides the error taxonomy shared by every bn256 crate and the
//! serialization trait implemented by the group element types.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::Marshal;

// Re-export trait modules for direct access
pub use traits::serialize;
