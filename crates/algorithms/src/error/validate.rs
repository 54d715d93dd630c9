//! Validation utilities for curve and pairing primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a minimum length
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::Length {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate that a decoded point satisfies its invariants
#[inline(always)]
pub fn point(is_valid: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !is_valid {
        return Err(Error::point(context, reason));
    }
    Ok(())
}
