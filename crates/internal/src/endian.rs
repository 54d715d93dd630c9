//! Endianness utility functions for multi-limb integers
//!
//! Field elements are stored as little-endian arrays of 64-bit limbs while
//! every wire format in this library is big-endian.

/// Convert a u64 from big-endian byte order to native byte order
pub fn u64_from_be_bytes(bytes: &[u8]) -> u64 {
    u64::from_be_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Read `N` little-endian limbs from `8 * N` big-endian bytes.
///
/// The first eight bytes become the most significant limb.
pub fn limbs_from_be_bytes<const N: usize>(bytes: &[u8]) -> [u64; N] {
    debug_assert_eq!(bytes.len(), 8 * N);
    let mut limbs = [0u64; N];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let start = 8 * (N - 1 - i);
        *limb = u64_from_be_bytes(&bytes[start..start + 8]);
    }
    limbs
}

/// Write little-endian limbs into `out` as one big-endian integer.
///
/// `out` must be exactly `8 * limbs.len()` bytes long.
pub fn limbs_to_be_bytes(limbs: &[u64], out: &mut [u8]) {
    debug_assert_eq!(out.len(), 8 * limbs.len());
    let n = limbs.len();
    for (i, limb) in limbs.iter().enumerate() {
        let start = 8 * (n - 1 - i);
        out[start..start + 8].copy_from_slice(&limb.to_be_bytes());
    }
}
