//! Testing utilities for the bn256 library
//!
//! Integration tests under `tests/` drive the public surface of
//! `bn256-algorithms` against the known-answer vectors shipped in
//! `src/vectors/`.

pub mod logging;
pub mod vectors;
