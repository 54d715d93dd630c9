//! Quadratic extension `Fp12 = Fp6[ω]/(ω² - τ)`, home of the pairing target group.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use bn256_params::curve::bn256::BN_U_CUBE_ROOT;

use super::fp::Fp;
use super::fp2::Fp2;
use super::fp6::{Fp6, XI_TO_P_SQUARED_MINUS_1_OVER_3};

/// ξ^((p-1)/6)
const XI_TO_P_MINUS_1_OVER_6: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0x7407_634d_d9cc_a958,
        0x36d5_bd6c_7afb_8f26,
        0xf4b1_c32c_ebd8_80fa,
        0x06aa_7869_306f_455f,
    ]),
    c1: Fp::from_raw_unchecked([
        0x25af_5298_8477_cdb7,
        0x3d81_a455_ddce_d86a,
        0x227d_012e_872c_2431,
        0x0179_198d_3ea6_5d05,
    ]),
};

/// ξ^((p²-1)/6)
const XI_TO_P_SQUARED_MINUS_1_OVER_6: Fp = Fp::from_raw_unchecked([
    0xe21a_761d_259c_78af,
    0x0635_8fa3_f5e8_4f7e,
    0xb7c4_44d0_1ac3_3f0d,
    0x35a9_333f_6e50_d058,
]);

/// Element c0 + c1·ω of the degree-12 extension.
#[derive(Copy, Clone)]
pub struct Fp12 {
    /// Constant coefficient
    pub c0: Fp6,
    /// Coefficient of ω
    pub c1: Fp6,
}

impl From<Fp> for Fp12 {
    fn from(f: Fp) -> Fp12 {
        Fp12 {
            c0: Fp6::from(f),
            c1: Fp6::zero(),
        }
    }
}

impl From<Fp6> for Fp12 {
    fn from(f: Fp6) -> Fp12 {
        Fp12 {
            c0: f,
            c1: Fp6::zero(),
        }
    }
}

impl PartialEq for Fp12 {
    fn eq(&self, other: &Fp12) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Fp12 {}

impl Default for Fp12 {
    fn default() -> Self {
        Fp12::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp12 {}

impl fmt::Debug for Fp12 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + ({:?})*w", self.c0, self.c1)
    }
}

impl ConditionallySelectable for Fp12 {
    #[inline(always)]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp12 {
            c0: Fp6::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp6::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl ConstantTimeEq for Fp12 {
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Fp12 {
    /// Additive identity.
    #[inline]
    pub const fn zero() -> Self {
        Fp12 {
            c0: Fp6::zero(),
            c1: Fp6::zero(),
        }
    }

    /// Multiplicative identity.
    #[inline]
    pub const fn one() -> Self {
        Fp12 {
            c0: Fp6::one(),
            c1: Fp6::zero(),
        }
    }

    /// Uniformly random element.
    pub fn random(mut rng: impl RngCore) -> Self {
        Fp12 {
            c0: Fp6::random(&mut rng),
            c1: Fp6::random(&mut rng),
        }
    }

    /// Check if element is zero.
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Check if element is one.
    pub fn is_one(&self) -> Choice {
        self.ct_eq(&Fp12::one())
    }

    /// c0 - c1·ω, which is x^(p⁶). Inverts elements of the cyclotomic subgroup.
    #[inline(always)]
    pub fn conjugate(&self) -> Self {
        Fp12 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// Raises this element to p.
    #[inline(always)]
    pub fn frobenius_map(&self) -> Self {
        Fp12 {
            c0: self.c0.frobenius_map(),
            c1: self.c1.frobenius_map().mul_by_fp2(&XI_TO_P_MINUS_1_OVER_6),
        }
    }

    /// Raises this element to p².
    #[inline(always)]
    pub fn frobenius_map_p2(&self) -> Self {
        Fp12 {
            c0: self.c0.frobenius_map_p2(),
            c1: self.c1.frobenius_map_p2().mul_by_fp(&XI_TO_P_SQUARED_MINUS_1_OVER_6),
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
        Fp12 {
            c0: self.c0.frobenius_map_p4(),
            c1: self.c1.frobenius_map_p4().mul_by_fp(&XI_TO_P_SQUARED_MINUS_1_OVER_3),
        }
    }

    /// Karatsuba multiplication.
    #[inline]
    pub fn mul(&self, other: &Fp12) -> Fp12 {
        let aa = self.c0 * other.c0;
        let bb = self.c1 * other.c1;
        let o = other.c0 + other.c1;
        let c1 = (self.c1 + self.c0) * o - aa - bb;
        let c0 = bb.mul_by_nonresidue() + aa;

        Fp12 { c0, c1 }
    }

    /// Complex squaring.
    pub fn square(&self) -> Self {
        let ab = self.c0 * self.c1;
        let c0c1 = self.c0 + self.c1;
        let c0 = self.c1.mul_by_nonresidue() + self.c0;
        let c0 = c0 * c0c1 - ab - ab.mul_by_nonresidue();
        let c1 = ab + ab;

        Fp12 { c0, c1 }
    }

    /// Inverse through the norm to Fp6. None for zero.
    pub fn invert(&self) -> CtOption<Self> {
        (self.c0.square() - self.c1.square().mul_by_nonresidue())
            .invert()
            .map(|t| Fp12 {
                c0: self.c0 * t,
                c1: self.c1 * -t,
            })
    }

    /// Squaring specialised to the cyclotomic subgroup.
    ///
    /// Only valid for elements of the cyclotomic subgroup, i.e. anything that
    /// has been through the easy part of the final exponentiation.
    /// The element is viewed over Fp4 = Fp2[s]/(s² - ξ) as A + B·ω + C·ω².
    pub fn cyclotomic_square(&self) -> Self {
        // Squaring in Fp4 returns both coordinates of (a0 + a1·s)²
        #[inline(always)]
        fn fp4_square(a0: Fp2, a1: Fp2) -> (Fp2, Fp2) {
            let t0 = a0.square();
            let t1 = a1.square();
            let c0 = t1.mul_by_nonresidue() + t0;
            let c1 = (a0 + a1).square() - t0 - t1;
            (c0, c1)
        }

        // 3t - 2a and 3t + 2a
        #[inline(always)]
        fn triple_minus_double(t: Fp2, a: Fp2) -> Fp2 {
            let d = t - a;
            d.double() + t
        }
        #[inline(always)]
        fn triple_plus_double(t: Fp2, a: Fp2) -> Fp2 {
            let d = t + a;
            d.double() + t
        }

        let (a0, a1) = fp4_square(self.c0.c0, self.c1.c1);
        let (b0, b1) = fp4_square(self.c1.c0, self.c0.c2);
        let (c0, c1) = fp4_square(self.c0.c1, self.c1.c2);

        Fp12 {
            c0: Fp6 {
                c0: triple_minus_double(a0, self.c0.c0),
                c1: triple_minus_double(b0, self.c0.c1),
                c2: triple_minus_double(c0, self.c0.c2),
            },
            c1: Fp6 {
                c0: triple_plus_double(c1.mul_by_nonresidue(), self.c1.c0),
                c1: triple_plus_double(a1, self.c1.c1),
                c2: triple_plus_double(b1, self.c1.c2),
            },
        }
    }

    /// f^(u0) for u0 = ∛u = 0b111001000000100000001 in the cyclotomic subgroup,
    /// using 20 cyclotomic squarings and 5 multiplications.
    fn cyclotomic_exp_by_u_cube_root(&self) -> Self {
        debug_assert_eq!(BN_U_CUBE_ROOT, 0b1_1100_1000_0001_0000_0001);

        let mut t = self.cyclotomic_square() * self; // 11
        t = t.cyclotomic_square() * self; // 111
        for _ in 0..3 {
            t = t.cyclotomic_square();
        }
        t *= self; // 111001
        for _ in 0..7 {
            t = t.cyclotomic_square();
        }
        t *= self; // 1110010000001
        for _ in 0..8 {
            t = t.cyclotomic_square();
        }
        t * self
    }

    /// f^u for elements of the cyclotomic subgroup, as three rounds of the
    /// ∛u addition chain.
    pub fn cyclotomic_exp_by_u(&self) -> Self {
        self.cyclotomic_exp_by_u_cube_root()
            .cyclotomic_exp_by_u_cube_root()
            .cyclotomic_exp_by_u_cube_root()
    }

    /// Constant-time exponentiation by a 256-bit little-endian exponent in
    /// the cyclotomic subgroup.
    pub fn cyclotomic_pow(&self, by: &[u64; 4]) -> Self {
        let mut res = Fp12::one();
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.cyclotomic_square();
                let tmp = res * self;
                res.conditional_assign(&tmp, Choice::from(((*e >> i) & 1) as u8));
            }
        }
        res
    }

    /// Generic exponentiation, variable time in `by`. Works on any element.
    pub fn pow_vartime(&self, by: &[u64]) -> Self {
        let mut res = Fp12::one();
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res *= self;
                }
            }
        }
        res
    }
}

impl<'a, 'b> Mul<&'b Fp12> for &'a Fp12 {
    type Output = Fp12;

    #[inline]
    fn mul(self, other: &'b Fp12) -> Self::Output {
        self.mul(other)
    }
}

impl<'a, 'b> Add<&'b Fp12> for &'a Fp12 {
    type Output = Fp12;

    #[inline]
    fn add(self, rhs: &'b Fp12) -> Self::Output {
        Fp12 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
        }
    }
}

impl<'a> Neg for &'a Fp12 {
    type Output = Fp12;

    #[inline]
    fn neg(self) -> Self::Output {
        Fp12 {
            c0: -self.c0,
            c1: -self.c1,
        }
    }
}

impl Neg for Fp12 {
    type Output = Fp12;

    #[inline]
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<'a, 'b> Sub<&'b Fp12> for &'a Fp12 {
    type Output = Fp12;

    #[inline]
    fn sub(self, rhs: &'b Fp12) -> Self::Output {
        Fp12 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
        }
    }
}

impl_binops_additive!(Fp12, Fp12);
impl_binops_multiplicative!(Fp12, Fp12);
