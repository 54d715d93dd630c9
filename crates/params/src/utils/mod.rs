//! Constants shared by utility layers

pub mod hash;
