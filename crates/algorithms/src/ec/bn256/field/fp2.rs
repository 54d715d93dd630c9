//! Quadratic extension `Fp2 = Fp[i]/(i² + 1)`.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp::Fp;

/// Element c0 + c1·i of the quadratic extension.
#[derive(Copy, Clone)]
pub struct Fp2 {
    /// Real part
    pub c0: Fp,
    /// Coefficient of i
    pub c1: Fp,
}

impl fmt::Debug for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + {:?}*i", self.c0, self.c1)
    }
}

impl Default for Fp2 {
    fn default() -> Self {
        Fp2::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp2 {}

impl From<Fp> for Fp2 {
    fn from(f: Fp) -> Fp2 {
        Fp2 {
            c0: f,
            c1: Fp::zero(),
        }
    }
}

impl ConstantTimeEq for Fp2 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp2 {}
impl PartialEq for Fp2 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp2 {
            c0: Fp::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl<'a> Neg for &'a Fp2 {
    type Output = Fp2;

    #[inline]
    fn neg(self) -> Fp2 {
        self.neg()
    }
}

impl Neg for Fp2 {
    type Output = Fp2;

    #[inline]
    fn neg(self) -> Fp2 {
        -&self
    }
}

impl<'a, 'b> Sub<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;

    #[inline]
    fn sub(self, rhs: &'b Fp2) -> Fp2 {
        self.sub(rhs)
    }
}

impl<'a, 'b> Add<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;

    #[inline]
    fn add(self, rhs: &'b Fp2) -> Fp2 {
        self.add(rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;

    #[inline]
    fn mul(self, rhs: &'b Fp2) -> Fp2 {
        self.mul(rhs)
    }
}

impl_binops_additive!(Fp2, Fp2);
impl_binops_multiplicative!(Fp2, Fp2);

impl Fp2 {
    /// Additive identity.
    #[inline]
    pub const fn zero() -> Fp2 {
        Fp2 {
            c0: Fp::zero(),
            c1: Fp::zero(),
        }
    }

    /// Multiplicative identity.
    #[inline]
    pub const fn one() -> Fp2 {
        Fp2 {
            c0: Fp::one(),
            c1: Fp::zero(),
        }
    }

    /// Check if element is zero.
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Uniformly random element.
    pub fn random(mut rng: impl RngCore) -> Fp2 {
        Fp2 {
            c0: Fp::random(&mut rng),
            c1: Fp::random(&mut rng),
        }
    }

    /// Raises to the power p. For a quadratic extension this is conjugation.
    #[inline(always)]
    pub fn frobenius_map(&self) -> Self {
        self.conjugate()
    }

    /// c0 - c1·i
    #[inline(always)]
    pub fn conjugate(&self) -> Self {
        Fp2 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// Multiply by the non-residue ξ = i + 3 used to build Fp6.
    #[inline(always)]
    pub fn mul_by_nonresidue(&self) -> Fp2 {
        // (c0 + c1·i)(3 + i) = (3·c0 - c1) + (3·c1 + c0)·i
        let t0 = self.c0.double() + self.c0;
        let t1 = self.c1.double() + self.c1;
        Fp2 {
            c0: t0 - self.c1,
            c1: t1 + self.c0,
        }
    }

    /// Scale both coefficients by a base field element.
    #[inline]
    pub fn mul_by_fp(&self, rhs: &Fp) -> Fp2 {
        Fp2 {
            c0: self.c0 * rhs,
            c1: self.c1 * rhs,
        }
    }

    /// Complex squaring: (c0 + c1)(c0 - c1) + 2·c0·c1·i.
    pub fn square(&self) -> Fp2 {
        let a = self.c0 + self.c1;
        let b = self.c0 - self.c1;
        let c = self.c0.double();

        Fp2 {
            c0: a * b,
            c1: c * self.c1,
        }
    }

    /// Karatsuba multiplication.
    pub fn mul(&self, rhs: &Fp2) -> Fp2 {
        let v0 = self.c0 * rhs.c0;
        let v1 = self.c1 * rhs.c1;
        let t = (self.c0 + self.c1) * (rhs.c0 + rhs.c1);

        Fp2 {
            c0: v0 - v1,
            c1: t - v0 - v1,
        }
    }

    /// Addition.
    pub fn add(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
        }
    }

    /// Subtraction.
    pub fn sub(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
        }
    }

    /// Negation.
    pub fn neg(&self) -> Fp2 {
        Fp2 {
            c0: -self.c0,
            c1: -self.c1,
        }
    }

    /// Doubling.
    #[inline]
    pub fn double(&self) -> Fp2 {
        self.add(self)
    }

    /// Inverse through the norm c0² + c1² in Fp. None for zero.
    pub fn invert(&self) -> CtOption<Self> {
        (self.c0.square() + self.c1.square()).invert().map(|t| Fp2 {
            c0: self.c0 * t,
            c1: self.c1 * -t,
        })
    }

    /// Exponentiation by a little-endian exponent, variable time in `by`.
    pub fn pow_vartime(&self, by: &[u64]) -> Self {
        let mut res = Self::one();
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
