//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time check that every byte of `bytes` is zero
///
/// Runs over the whole slice regardless of where the first non-zero byte is.
pub fn ct_is_zero(bytes: &[u8]) -> Choice {
    let acc = bytes.iter().fold(0u8, |acc, b| acc | b);
    acc.ct_eq(&0)
}

/// Constant-time table lookup
///
/// Returns `table[index]`, touching every entry of the table. An
/// out-of-range index yields `T::default()`.
pub fn ct_lookup<T>(table: &[T], index: usize) -> T
where
    T: ConditionallySelectable + Default,
{
    let mut out = T::default();
    for (i, entry) in table.iter().enumerate() {
        let hit = (i as u64).ct_eq(&(index as u64));
        out.conditional_assign(entry, hit);
    }
    out
}
