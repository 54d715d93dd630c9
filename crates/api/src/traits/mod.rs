//! Public traits shared across the bn256 crates

pub mod serialize;

pub use serialize::Marshal;
