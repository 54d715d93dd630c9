//! Constants for hashing into the base field

/// HKDF `info` string used by hash-to-base
pub const HASH_TO_BASE_INFO: &[u8] = b"H2C\x00\x01";

/// Default domain separation tag for hashing into G1
pub const HASH_TO_G1_DEFAULT_DST: &[u8] = b"BN256G1_XMD:SHA-256_FT_RO_";
