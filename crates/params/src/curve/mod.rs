//! Constants for the BN curve and its lattices

pub mod bn256;
pub mod lattice;
