//! Cubic extension `Fp6 = Fp2[τ]/(τ³ - ξ)` with ξ = i + 3.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp::Fp;
use super::fp2::Fp2;

/// ξ^((p-1)/3)
pub(crate) const XI_TO_P_MINUS_1_OVER_3: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0xf860_6916_d381_6f2c,
        0x1e5c_0d79_26de_927e,
        0xbc45_f394_6d81_185e,
        0x8075_2a25_aa73_8091,
    ]),
    c1: Fp::from_raw_unchecked([
        0x4f59_e37c_0183_2e57,
        0xae6b_e39a_c2bb_bfe4,
        0xe04e_a1bb_6975_12f8,
        0x3097_caa8_fc40_e10e,
    ]),
};

/// ξ^((2p-2)/3)
pub(crate) const XI_TO_2P_MINUS_2_OVER_3: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0x4d2e_a218_872f_3d2c,
        0x2fcb_27fc_4abe_7b69,
        0xd31d_972f_0e88_ced9,
        0x53ad_c04a_00a7_3b15,
    ]),
    c1: Fp::from_raw_unchecked([
        0x5167_8e74_69b3_c52a,
        0x4fb9_8f8b_1331_9fc9,
        0x29b2_254d_b3f1_df75,
        0x1c04_4935_a3d2_2fb2,
    ]),
};

/// ξ^((p²-1)/3), a primitive cube root of unity in Fp
pub(crate) const XI_TO_P_SQUARED_MINUS_1_OVER_3: Fp = Fp::from_raw_unchecked([
    0x12d3_cef5_e1ad_a57d,
    0xe2ec_a146_3753_babb,
    0x0ca4_1e40_ddcc_f750,
    0x5513_3706_0397_e04c,
]);

/// ξ^((2p²-2)/3), the square of the previous constant
pub(crate) const XI_TO_2P_SQUARED_MINUS_2_OVER_3: Fp = Fp::from_raw_unchecked([
    0x3642_364f_386c_1db8,
    0xe825_f92d_2acd_661f,
    0xf2ab_a7e8_46c1_9d14,
    0x5a0b_cea3_dc52_b7a0,
]);

/// Element c0 + c1·τ + c2·τ² of the cubic extension.
#[derive(Copy, Clone)]
pub struct Fp6 {
    /// Constant coefficient
    pub c0: Fp2,
    /// Coefficient of τ
    pub c1: Fp2,
    /// Coefficient of τ²
    pub c2: Fp2,
}

impl From<Fp> for Fp6 {
    fn from(f: Fp) -> Fp6 {
        Fp6::from(Fp2::from(f))
    }
}

impl From<Fp2> for Fp6 {
    fn from(f: Fp2) -> Fp6 {
        Fp6 {
            c0: f,
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }
}

impl PartialEq for Fp6 {
    fn eq(&self, other: &Fp6) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Fp6 {}

impl Default for Fp6 {
    fn default() -> Self {
        Fp6::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp6 {}

impl fmt::Debug for Fp6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + ({:?})*t + ({:?})*t^2", self.c0, self.c1, self.c2)
    }
}

impl ConditionallySelectable for Fp6 {
    #[inline(always)]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp6 {
            c0: Fp2::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp2::conditional_select(&a.c1, &b.c1, choice),
            c2: Fp2::conditional_select(&a.c2, &b.c2, choice),
        }
    }
}

impl ConstantTimeEq for Fp6 {
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}

impl Fp6 {
    /// Additive identity.
    #[inline]
    pub const fn zero() -> Self {
        Fp6 {
            c0: Fp2::zero(),
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }

    /// Multiplicative identity.
    #[inline]
    pub const fn one() -> Self {
        Fp6 {
            c0: Fp2::one(),
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }

    /// Uniformly random element.
    pub fn random(mut rng: impl RngCore) -> Self {
        Fp6 {
            c0: Fp2::random(&mut rng),
            c1: Fp2::random(&mut rng),
            c2: Fp2::random(&mut rng),
        }
    }

    /// Check if element is zero.
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero() & self.c2.is_zero()
    }

    /// Multiply by τ: (c0, c1, c2) ↦ (ξ·c2, c0, c1).
    #[inline(always)]
    pub fn mul_by_nonresidue(&self) -> Self {
        Fp6 {
            c0: self.c2.mul_by_nonresidue(),
            c1: self.c0,
            c2: self.c1,
        }
    }

    /// Scale every coefficient by an Fp2 element.
    #[inline]
    pub fn mul_by_fp2(&self, rhs: &Fp2) -> Self {
        Fp6 {
            c0: self.c0 * rhs,
            c1: self.c1 * rhs,
            c2: self.c2 * rhs,
        }
    }

    /// Scale every coefficient by a base field element.
    #[inline]
    pub fn mul_by_fp(&self, rhs: &Fp) -> Self {
        Fp6 {
            c0: self.c0.mul_by_fp(rhs),
            c1: self.c1.mul_by_fp(rhs),
            c2: self.c2.mul_by_fp(rhs),
        }
    }

    /// Raises this element to p.
    #[inline(always)]
    pub fn frobenius_map(&self) -> Self {
        Fp6 {
            c0: self.c0.frobenius_map(),
            c1: self.c1.frobenius_map() * XI_TO_P_MINUS_1_OVER_3,
            c2: self.c2.frobenius_map() * XI_TO_2P_MINUS_2_OVER_3,
        }
    }

    /// Raises this element to p².
    #[inline(always)]
    pub fn frobenius_map_p2(&self) -> Self {
        Fp6 {
            c0: self.c0,
            c1: self.c1.mul_by_fp(&XI_TO_P_SQUARED_MINUS_1_OVER_3),
            c2: self.c2.mul_by_fp(&XI_TO_2P_SQUARED_MINUS_2_OVER_3),
        }
    }

    /// Raises this element to p³.
    #[inline]
    pub fn frobenius_map_p3(&self) -> Self {
        self.frobenius_map_p2().frobenius_map()
    }

    /// Raises this element to p⁴.
    #[inline(always)]
    pub fn frobenius_map_p4(&self) -> Self {
        Fp6 {
            c0: self.c0,
            c1: self.c1.mul_by_fp(&XI_TO_2P_SQUARED_MINUS_2_OVER_3),
            c2: self.c2.mul_by_fp(&XI_TO_P_SQUARED_MINUS_1_OVER_3),
        }
    }

    /// Karatsuba multiplication.
    #[inline]
    pub fn mul(&self, b: &Fp6) -> Fp6 {
        let a = self;
        let v0 = a.c0 * b.c0;
        let v1 = a.c1 * b.c1;
        let v2 = a.c2 * b.c2;

        let c0 = ((a.c1 + a.c2) * (b.c1 + b.c2) - v1 - v2).mul_by_nonresidue() + v0;
        let c1 = (a.c0 + a.c1) * (b.c0 + b.c1) - v0 - v1 + v2.mul_by_nonresidue();
        let c2 = (a.c0 + a.c2) * (b.c0 + b.c2) - v0 + v1 - v2;

        Fp6 { c0, c1, c2 }
    }

    /// Squaring with three Fp2 squarings for the diagonal.
    pub fn square(&self) -> Self {
        let v0 = self.c0.square();
        let v1 = self.c1.square();
        let v2 = self.c2.square();

        let c0 = ((self.c1 + self.c2).square() - v1 - v2).mul_by_nonresidue() + v0;
        let c1 = (self.c0 + self.c1).square() - v0 - v1 + v2.mul_by_nonresidue();
        let c2 = (self.c0 + self.c2).square() - v0 + v1 - v2;

        Fp6 { c0, c1, c2 }
    }

    /// Inverse through the norm to Fp2. None for zero.
    #[inline]
    pub fn invert(&self) -> CtOption<Self> {
        let c0 = self.c0.square() - (self.c1 * self.c2).mul_by_nonresidue();
        let c1 = self.c2.square().mul_by_nonresidue() - self.c0 * self.c1;
        let c2 = self.c1.square() - self.c0 * self.c2;

        let t = (self.c1 * c2 + self.c2 * c1).mul_by_nonresidue() + self.c0 * c0;

        t.invert().map(|t| Fp6 {
            c0: t * c0,
            c1: t * c1,
            c2: t * c2,
        })
    }

    /// Doubling.
    #[inline]
    pub fn double(&self) -> Self {
        self + self
    }
}

impl<'a, 'b> Mul<&'b Fp6> for &'a Fp6 {
    type Output = Fp6;

    #[inline]
    fn mul(self, other: &'b Fp6) -> Self::Output {
        self.mul(other)
    }
}

impl<'a, 'b> Add<&'b Fp6> for &'a Fp6 {
    type Output = Fp6;

    #[inline]
    fn add(self, rhs: &'b Fp6) -> Self::Output {
        Fp6 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
            c2: self.c2 + rhs.c2,
        }
    }
}

impl<'a> Neg for &'a Fp6 {
    type Output = Fp6;

    #[inline]
    fn neg(self) -> Self::Output {
        Fp6 {
            c0: -self.c0,
            c1: -self.c1,
            c2: -self.c2,
        }
    }
}

impl Neg for Fp6 {
    type Output = Fp6;

    #[inline]
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<'a, 'b> Sub<&'b Fp6> for &'a Fp6 {
    type Output = Fp6;

    #[inline]
    fn sub(self, rhs: &'b Fp6) -> Self::Output {
        Fp6 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
            c2: self.c2 - rhs.c2,
        }
    }
}

impl_binops_additive!(Fp6, Fp6);
impl_binops_multiplicative!(Fp6, Fp6);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_tau_cubed_is_xi() {
        let tau = Fp6 {
            c0: Fp2::zero(),
            c1: Fp2::one(),
            c2: Fp2::zero(),
        };
        let xi = Fp2 {
            c0: Fp::from_u64(3),
            c1: Fp::one(),
        };
        assert_eq!(tau * tau * tau, Fp6::from(xi));
    }

    #[test]
    fn test_mul_by_nonresidue_is_mul_by_tau() {
        let mut rng = ChaCha20Rng::seed_from_u64(6);
        let tau = Fp6 {
            c0: Fp2::zero(),
            c1: Fp2::one(),
            c2: Fp2::zero(),
        };
        for _ in 0..10 {
            let a = Fp6::random(&mut rng);
            assert_eq!(a.mul_by_nonresidue(), a * tau);
            assert_eq!(a.square(), a * a);
        }
    }
}
