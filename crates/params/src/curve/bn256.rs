//! Constants for the 256-bit Barreto-Naehrig curve
//!
//! Every parameter is derived from the single integer u:
//! p = 36u⁴ + 36u³ + 24u² + 6u + 1 and n = 36u⁴ + 36u³ + 18u² + 6u + 1.

/// The BN parameter u
pub const BN_U: u64 = 6_518_589_491_078_791_937;

/// Cube root of u, the exponent driving the addition chain for f^u
pub const BN_U_CUBE_ROOT: u64 = 1_868_033;

/// Base field modulus p, in decimal
pub const BN256_P_DECIMAL: &str =
    "65000549695646603732796438742359905742825358107623003571877145026864184071783";

/// Order n of G1, G2 and GT, in decimal
pub const BN256_ORDER_DECIMAL: &str =
    "65000549695646603732796438742359905742570406053903786389881062969044166799969";

/// Coefficient b of the curve y² = x³ + b
pub const BN256_CURVE_B: u64 = 3;

/// Size of a base field element in bytes
pub const BN256_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of the wide input reduced into a field element by hash-to-base
pub const BN256_FIELD_WIDE_SIZE: usize = 48;

/// Size of a scalar in bytes
pub const BN256_SCALAR_SIZE: usize = 32;

/// Size of an encoded G1 point (x ‖ y)
pub const BN256_G1_SIZE: usize = 2 * BN256_FIELD_ELEMENT_SIZE;

/// Size of an encoded G2 point (x.i ‖ x.real ‖ y.i ‖ y.real)
pub const BN256_G2_SIZE: usize = 4 * BN256_FIELD_ELEMENT_SIZE;

/// Size of an encoded GT element (twelve base field elements)
pub const BN256_GT_SIZE: usize = 12 * BN256_FIELD_ELEMENT_SIZE;

/// Signed-digit (non-adjacent form) expansion of 6u + 2, least significant
/// digit first
pub const SIX_U_PLUS_2_NAF: [i8; 66] = [
    0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0,
    -1, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, -1,
    0, 1, 0, 0, 0, 1, 0, -1, 0, 0, 0, -1, 0, 1, 0, 0,
    0, 0, 0, 1, 0, 0, -1, 0, -1, 0, 0, 0, 0, 1, 0, 0,
    0, 1,
];
