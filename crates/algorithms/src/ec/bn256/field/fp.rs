//! BN256 base field `GF(p)` where p = 0x8fb501e34aa387f9aa6fecb86184dc21ee5b88d120b5b59e185cac6c5e089667

// Standard library imports
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

// External crate imports
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use bn256_internal::endian::{limbs_from_be_bytes, limbs_to_be_bytes};

use super::arith::{sbb, Backend, FieldArithmetic, MODULUS};

// ============================================================================
// Field Constants
// ============================================================================

/// R = 2^256 mod p
const R: Fp = Fp([
    0xe7a3_5393_a1f7_6999,
    0x11a4_772e_df4a_4a61,
    0x5590_1347_9e7b_23de,
    0x704a_fe1c_b55c_7806,
]);

/// R2 = 2^(256*2) mod p
const R2: Fp = Fp([
    0x9c21_c3ff_7e44_4f56,
    0x409e_d151_b2ef_b0c2,
    0x0c6d_c37b_80fb_1651,
    0x7c36_e0e6_2c23_80b7,
]);

/// R3 = 2^(256*3) mod p
const R3: Fp = Fp([
    0x2af2_dfb9_324a_5bb8,
    0x388f_8990_54f5_38a4,
    0xdf2f_f663_96b1_07a7,
    0x24eb_bbb3_a252_9292,
]);

/// p - 2, the inversion exponent
const P_MINUS_2: [u64; 4] = [
    0x185c_ac6c_5e08_9665,
    0xee5b_88d1_20b5_b59e,
    0xaa6f_ecb8_6184_dc21,
    0x8fb5_01e3_4aa3_87f9,
];

/// (p + 1) / 4, the square root exponent (p ≡ 3 mod 4)
const P_PLUS_1_OVER_4: [u64; 4] = [
    0x8617_2b1b_1782_259a,
    0x7b96_e234_482d_6d67,
    0x6a9b_fb2e_1861_3708,
    0x23ed_4078_d2a8_e1fe,
];

/// (p - 1) / 2, Euler's criterion exponent
const P_MINUS_1_OVER_2: [u64; 4] = [
    0x0c2e_5636_2f04_4b33,
    0xf72d_c468_905a_dacf,
    0xd537_f65c_30c2_6e10,
    0x47da_80f1_a551_c3fc,
];

// ============================================================================
// Field Element Definition
// ============================================================================

/// Element of the base field, stored as a·R mod p in little-endian limbs.
#[derive(Copy, Clone)]
pub struct Fp(pub(crate) [u64; 4]);

impl Fp {
    /// Additive identity.
    #[inline]
    pub const fn zero() -> Fp {
        Fp([0, 0, 0, 0])
    }

    /// Multiplicative identity.
    #[inline]
    pub const fn one() -> Fp {
        R
    }

    /// Check if element is zero.
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Fp::zero())
    }

    /// Create from Montgomery form limbs (no reduction).
    pub const fn from_raw_unchecked(v: [u64; 4]) -> Fp {
        Fp(v)
    }

    /// Encode a small integer.
    pub fn from_u64(v: u64) -> Fp {
        Fp([v, 0, 0, 0]) * R2
    }

    /// Decode from the plain residue's little-endian limbs, reducing the
    /// value if it is not below p.
    pub fn from_raw(v: [u64; 4]) -> Fp {
        Fp(v) * R2
    }

    /// Plain residue as little-endian limbs (leaves Montgomery form).
    pub fn to_raw(&self) -> [u64; 4] {
        Backend::mul(&self.0, &[1, 0, 0, 0])
    }
}

// ============================================================================
// Core Arithmetic
// ============================================================================

impl Fp {
    /// Field addition.
    #[inline]
    pub fn add(&self, rhs: &Fp) -> Fp {
        Fp(Backend::add(&self.0, &rhs.0))
    }

    /// Field subtraction.
    #[inline]
    pub fn sub(&self, rhs: &Fp) -> Fp {
        Fp(Backend::sub(&self.0, &rhs.0))
    }

    /// Field negation.
    #[inline]
    pub fn neg(&self) -> Fp {
        Fp(Backend::neg(&self.0))
    }

    /// Field multiplication.
    #[inline]
    pub fn mul(&self, rhs: &Fp) -> Fp {
        Fp(Backend::mul(&self.0, &rhs.0))
    }

    /// Squares this element.
    #[inline]
    pub fn square(&self) -> Fp {
        Fp(Backend::square(&self.0))
    }

    /// Doubles this element.
    #[inline]
    pub fn double(&self) -> Fp {
        self.add(self)
    }

    /// Exponentiation by a 256-bit little-endian exponent.
    ///
    /// Runs a fixed 256-step square-and-multiply ladder; the running time
    /// depends on neither the base nor the exponent.
    pub fn pow(&self, by: &[u64; 4]) -> Fp {
        let mut res = Fp::one();
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                let tmp = res * self;
                res.conditional_assign(&tmp, Choice::from(((*e >> i) & 1) as u8));
            }
        }
        res
    }

    /// Exponentiation that skips leading zero bits.
    ///
    /// **Variable time in the exponent.** Use only for public exponents.
    pub fn pow_vartime(&self, by: &[u64; 4]) -> Fp {
        let mut res = Fp::one();
        let mut started = false;
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                if started {
                    res = res.square();
                }
                if ((*e >> i) & 1) == 1 {
                    res *= self;
                    started = true;
                }
            }
        }
        res
    }

    /// Multiplicative inverse via Fermat, a^(p-2).
    ///
    /// None for zero.
    pub fn invert(&self) -> CtOption<Self> {
        let t = self.pow(&P_MINUS_2);
        CtOption::new(t, !self.is_zero())
    }

    /// Square root via a^((p+1)/4).
    ///
    /// None when the element is not a quadratic residue.
    pub fn sqrt(&self) -> CtOption<Self> {
        let sqrt = self.pow(&P_PLUS_1_OVER_4);
        CtOption::new(sqrt, sqrt.square().ct_eq(self))
    }

    /// Legendre symbol: 1 for a non-zero square, -1 for a non-square and 0
    /// for zero.
    pub fn legendre(&self) -> i8 {
        let e = self.pow(&P_MINUS_1_OVER_2);
        if bool::from(e.ct_eq(&Fp::one())) {
            1
        } else if bool::from(e.is_zero()) {
            0
        } else {
            -1
        }
    }

    /// Constant-time quadratic-residue test (zero counts as a residue).
    pub fn is_square(&self) -> Choice {
        let e = self.pow(&P_MINUS_1_OVER_2);
        e.ct_eq(&Fp::one()) | e.is_zero()
    }
}

// ============================================================================
// Serialization
// ============================================================================

impl Fp {
    /// Decode 32 big-endian bytes. Fails unless the value is below p.
    pub fn from_bytes(bytes: &[u8; 32]) -> CtOption<Fp> {
        let tmp: [u64; 4] = limbs_from_be_bytes(bytes);

        // Try to subtract p; a borrow means tmp was already canonical
        let (_, borrow) = sbb(tmp[0], MODULUS[0], 0);
        let (_, borrow) = sbb(tmp[1], MODULUS[1], borrow);
        let (_, borrow) = sbb(tmp[2], MODULUS[2], borrow);
        let (_, borrow) = sbb(tmp[3], MODULUS[3], borrow);
        let is_some = (borrow as u8) & 1;

        // Convert to Montgomery form: tmp * R^2 * R^-1 = tmp * R
        CtOption::new(Fp(tmp) * R2, Choice::from(is_some))
    }

    /// Encode as 32 big-endian bytes of the plain residue.
    pub fn to_bytes(&self) -> [u8; 32] {
        let tmp = self.to_raw();
        let mut res = [0u8; 32];
        limbs_to_be_bytes(&tmp, &mut res);
        res
    }

    /// Reduce a 48-byte big-endian integer modulo p.
    ///
    /// The integer is split as hi·2^256 + lo with a 128-bit hi, so
    /// hi·R3 + lo·R2 lands on the Montgomery form of the whole value.
    pub fn from_bytes_wide(bytes: &[u8; 48]) -> Fp {
        let hi: [u64; 2] = limbs_from_be_bytes(&bytes[..16]);
        let lo: [u64; 4] = limbs_from_be_bytes(&bytes[16..]);

        let d1 = Fp([hi[0], hi[1], 0, 0]);
        let d0 = Fp(lo);

        d0 * R2 + d1 * R3
    }

    /// Uniformly random element (48 bytes of entropy reduced mod p).
    pub fn random(mut rng: impl RngCore) -> Fp {
        let mut bytes = [0u8; 48];
        rng.fill_bytes(&mut bytes);
        Fp::from_bytes_wide(&bytes)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tmp = self.to_bytes();
        write!(f, "0x")?;
        for &b in tmp.iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Display for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Default for Fp {
    fn default() -> Self {
        Fp::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp {}

impl ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
    }
}

impl Eq for Fp {}
impl PartialEq for Fp {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
        ])
    }
}

// Binary operation trait implementations
impl<'a> Neg for &'a Fp {
    type Output = Fp;
    #[inline]
    fn neg(self) -> Fp {
        Fp::neg(self)
    }
}

impl Neg for Fp {
    type Output = Fp;
    #[inline]
    fn neg(self) -> Fp {
        Fp::neg(&self)
    }
}

impl<'a, 'b> Sub<&'b Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn sub(self, rhs: &'b Fp) -> Fp {
        Fp::sub(self, rhs)
    }
}

impl<'a, 'b> Add<&'b Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn add(self, rhs: &'b Fp) -> Fp {
        Fp::add(self, rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn mul(self, rhs: &'b Fp) -> Fp {
        Fp::mul(self, rhs)
    }
}

impl_binops_additive!(Fp, Fp);
impl_binops_multiplicative!(Fp, Fp);
