//! G₁ group implementation for BN256: the curve y² = x³ + 3 over Fp.
//!
//! G₁ has cofactor one, so every point on the curve is in the group.

use crate::error::{to_core_result, validate, Error, Result};
use core::borrow::Borrow;
use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul, Neg, Sub};

use bn256_api::Marshal;
use bn256_internal::ct_lookup;
use bn256_internal::constant_time::ct_is_zero;
use bn256_params::curve::bn256::{BN256_FIELD_ELEMENT_SIZE, BN256_G1_SIZE};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use tracing::debug;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::field::fp::Fp;
use super::field::fp6::XI_TO_2P_SQUARED_MINUS_2_OVER_3;
use super::lattice::{curve_lattice, precompute};
use super::scalar::{order, random_scalar, to_limbs};

/// b = 3 in Montgomery form.
pub(crate) const B: Fp = Fp::from_raw_unchecked([
    0x8630_a1e2_29d5_0ffd,
    0x5836_53ea_5c73_73e9,
    0xabd0_6066_1867_b356,
    0x3176_f68f_8ace_581f,
]);

/// Cube root of unity β with λ·(x, y) = (β·x, y).
const BETA: Fp = XI_TO_2P_SQUARED_MINUS_2_OVER_3;

/// G₁ affine point representation.
#[derive(Copy, Clone, Debug)]
pub struct G1Affine {
    pub(crate) x: Fp,
    pub(crate) y: Fp,
    infinity: Choice,
}

impl Default for G1Affine {
    fn default() -> G1Affine {
        G1Affine::identity()
    }
}

impl zeroize::DefaultIsZeroes for G1Affine {}

impl fmt::Display for G1Affine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if bool::from(self.infinity) {
            write!(f, "bn256.G1(infinity)")
        } else {
            write!(f, "bn256.G1({}, {})", self.x, self.y)
        }
    }
}

impl<'a> From<&'a G1Projective> for G1Affine {
    fn from(p: &'a G1Projective) -> G1Affine {
        let zinv = p.z.invert().unwrap_or(Fp::zero());
        let zinv2 = zinv.square();
        let x = p.x * zinv2;
        let y = p.y * zinv2 * zinv;

        let tmp = G1Affine {
            x,
            y,
            infinity: Choice::from(0u8),
        };

        G1Affine::conditional_select(&tmp, &G1Affine::identity(), zinv.is_zero())
    }
}

impl From<G1Projective> for G1Affine {
    fn from(p: G1Projective) -> G1Affine {
        G1Affine::from(&p)
    }
}

impl ConstantTimeEq for G1Affine {
    fn ct_eq(&self, other: &Self) -> Choice {
        (self.infinity & other.infinity)
            | ((!self.infinity)
                & (!other.infinity)
                & self.x.ct_eq(&other.x)
                & self.y.ct_eq(&other.y))
    }
}

impl ConditionallySelectable for G1Affine {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        G1Affine {
            x: Fp::conditional_select(&a.x, &b.x, choice),
            y: Fp::conditional_select(&a.y, &b.y, choice),
            infinity: Choice::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl Eq for G1Affine {}
impl PartialEq for G1Affine {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a> Neg for &'a G1Affine {
    type Output = G1Affine;

    #[inline]
    fn neg(self) -> G1Affine {
        G1Affine {
            x: self.x,
            y: Fp::conditional_select(&-self.y, &Fp::one(), self.infinity),
            infinity: self.infinity,
        }
    }
}

impl Neg for G1Affine {
    type Output = G1Affine;

    #[inline]
    fn neg(self) -> G1Affine {
        -&self
    }
}

impl<'a, 'b> Add<&'b G1Affine> for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn add(self, rhs: &'b G1Affine) -> G1Projective {
        self.add(&G1Projective::from(rhs))
    }
}

impl<'a, 'b> Sub<&'b G1Affine> for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn sub(self, rhs: &'b G1Affine) -> G1Projective {
        self + &(-rhs)
    }
}

impl_binops_additive!(G1Projective, G1Affine);

impl G1Affine {
    /// Point at infinity.
    pub fn identity() -> G1Affine {
        G1Affine {
            x: Fp::zero(),
            y: Fp::one(),
            infinity: Choice::from(1u8),
        }
    }

    /// Fixed generator (1, -2).
    pub fn generator() -> G1Affine {
        G1Affine {
            x: Fp::one(),
            y: Fp::from_raw_unchecked([
                0x6172_b1b1_7822_599c,
                0xb96e_2344_82d6_d678,
                0xa9bf_b2e1_8613_7087,
                0x3ed4_078d_2a8e_1fe6,
            ]),
            infinity: Choice::from(0u8),
        }
    }

    /// Finite point from coordinates already known to satisfy the curve
    /// equation.
    pub(crate) fn from_xy_unchecked(x: Fp, y: Fp) -> G1Affine {
        G1Affine {
            x,
            y,
            infinity: Choice::from(0u8),
        }
    }

    /// Check if point at infinity.
    #[inline]
    pub fn is_identity(&self) -> Choice {
        self.infinity
    }

    /// Curve membership check.
    pub fn is_on_curve(&self) -> Choice {
        (self.y.square() - (self.x.square() * self.x)).ct_eq(&B) | self.infinity
    }

    /// Affine x-coordinate; zero for the identity.
    pub fn x(&self) -> Fp {
        Fp::conditional_select(&self.x, &Fp::zero(), self.infinity)
    }

    /// Affine y-coordinate; zero for the identity.
    pub fn y(&self) -> Fp {
        Fp::conditional_select(&self.y, &Fp::zero(), self.infinity)
    }

    /// Serialize to 64 bytes: big-endian x followed by big-endian y.
    /// The identity encodes as all zeros.
    pub fn to_bytes(&self) -> [u8; BN256_G1_SIZE] {
        let mut res = [0u8; BN256_G1_SIZE];
        res[..BN256_FIELD_ELEMENT_SIZE].copy_from_slice(&self.x().to_bytes());
        res[BN256_FIELD_ELEMENT_SIZE..].copy_from_slice(&self.y().to_bytes());
        res
    }

    /// Decode a point from the front of `bytes`, returning it together with
    /// the unconsumed tail.
    pub fn from_slice(bytes: &[u8]) -> Result<(Self, &[u8])> {
        validate::min_length("G1", bytes.len(), BN256_G1_SIZE)?;
        let (head, rest) = bytes.split_at(BN256_G1_SIZE);

        if bool::from(ct_is_zero(head)) {
            return Ok((G1Affine::identity(), rest));
        }

        let x = decode_fp(&head[..BN256_FIELD_ELEMENT_SIZE]);
        let y = decode_fp(&head[BN256_FIELD_ELEMENT_SIZE..]);
        let (x, y) = match (x, y) {
            (Some(x), Some(y)) => (x, y),
            _ => {
                debug!("rejecting G1 encoding: coordinate not below p");
                return Err(Error::point("G1", "malformed point"));
            }
        };

        let p = G1Affine::from_xy_unchecked(x, y);
        validate::point(p.is_on_curve().into(), "G1", "malformed point")
            .inspect_err(|_| debug!("rejecting G1 encoding: point not on curve"))?;

        Ok((p, rest))
    }
}

/// Canonical field element from a 32-byte big-endian slice.
pub(crate) fn decode_fp(bytes: &[u8]) -> Option<Fp> {
    let mut buf = [0u8; BN256_FIELD_ELEMENT_SIZE];
    buf.copy_from_slice(bytes);
    Fp::from_bytes(&buf).into()
}

impl Marshal for G1Affine {
    const SIZE: usize = BN256_G1_SIZE;

    #[cfg(feature = "alloc")]
    fn marshal(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }

    fn unmarshal(bytes: &[u8]) -> bn256_api::Result<(Self, &[u8])> {
        to_core_result(G1Affine::from_slice(bytes), "G1")
    }
}

/// G₁ point in Jacobian coordinates: (x, y, z) stands for (x/z², y/z³) and
/// `t` caches z².
#[derive(Copy, Clone, Debug)]
pub struct G1Projective {
    pub(crate) x: Fp,
    pub(crate) y: Fp,
    pub(crate) z: Fp,
    pub(crate) t: Fp,
}

impl Default for G1Projective {
    fn default() -> G1Projective {
        G1Projective::identity()
    }
}

impl zeroize::DefaultIsZeroes for G1Projective {}

impl fmt::Display for G1Projective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", G1Affine::from(self))
    }
}

impl<'a> From<&'a G1Affine> for G1Projective {
    fn from(p: &'a G1Affine) -> G1Projective {
        let z = Fp::conditional_select(&Fp::one(), &Fp::zero(), p.infinity);
        G1Projective {
            x: p.x,
            y: p.y,
            z,
            t: z,
        }
    }
}

impl From<G1Affine> for G1Projective {
    fn from(p: G1Affine) -> G1Projective {
        G1Projective::from(&p)
    }
}

impl ConstantTimeEq for G1Projective {
    fn ct_eq(&self, other: &Self) -> Choice {
        // x1·z2² = x2·z1² and y1·z2³ = y2·z1³
        let x1 = self.x * other.t;
        let x2 = other.x * self.t;
        let y1 = self.y * other.t * other.z;
        let y2 = other.y * self.t * self.z;

        let self_is_zero = self.z.is_zero();
        let other_is_zero = other.z.is_zero();

        (self_is_zero & other_is_zero)
            | ((!self_is_zero) & (!other_is_zero) & x1.ct_eq(&x2) & y1.ct_eq(&y2))
    }
}

impl ConditionallySelectable for G1Projective {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        G1Projective {
            x: Fp::conditional_select(&a.x, &b.x, choice),
            y: Fp::conditional_select(&a.y, &b.y, choice),
            z: Fp::conditional_select(&a.z, &b.z, choice),
            t: Fp::conditional_select(&a.t, &b.t, choice),
        }
    }
}

impl Eq for G1Projective {}
impl PartialEq for G1Projective {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a> Neg for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn neg(self) -> G1Projective {
        G1Projective {
            x: self.x,
            y: -self.y,
            z: self.z,
            t: self.t,
        }
    }
}

impl Neg for G1Projective {
    type Output = G1Projective;

    #[inline]
    fn neg(self) -> G1Projective {
        -&self
    }
}

impl<'a, 'b> Add<&'b G1Projective> for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn add(self, rhs: &'b G1Projective) -> G1Projective {
        self.add(rhs)
    }
}

impl<'a, 'b> Sub<&'b G1Projective> for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn sub(self, rhs: &'b G1Projective) -> G1Projective {
        self + &(-rhs)
    }
}

impl<'a, 'b> Mul<&'b BigUint> for &'a G1Projective {
    type Output = G1Projective;

    fn mul(self, k: &'b BigUint) -> Self::Output {
        self.multiply(&to_limbs(k))
    }
}

impl<'a, 'b> Mul<&'b BigUint> for &'a G1Affine {
    type Output = G1Projective;

    fn mul(self, k: &'b BigUint) -> Self::Output {
        G1Projective::from(self).multiply(&to_limbs(k))
    }
}

impl_binops_additive!(G1Projective, G1Projective);
impl_binops_multiplicative_mixed!(G1Projective, BigUint, G1Projective);
impl_binops_multiplicative_mixed!(G1Affine, BigUint, G1Projective);

impl<T> Sum<T> for G1Projective
where
    T: Borrow<G1Projective>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::identity(), |acc, item| acc + item.borrow())
    }
}

impl G1Projective {
    /// Point at infinity.
    pub fn identity() -> G1Projective {
        G1Projective {
            x: Fp::one(),
            y: Fp::one(),
            z: Fp::zero(),
            t: Fp::zero(),
        }
    }

    /// Fixed generator.
    pub fn generator() -> G1Projective {
        G1Projective::from(G1Affine::generator())
    }

    /// Random group element together with its discrete log to the generator.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<(BigUint, Self)> {
        let k = random_scalar(rng)?;
        let p = G1Projective::mul_base(&k);
        Ok((k, p))
    }

    /// k·G for the fixed generator.
    pub fn mul_base(k: &BigUint) -> G1Projective {
        G1Projective::generator() * k
    }

    /// Check if point at infinity.
    #[inline]
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Curve membership check: y² = x³ + 3·z⁶.
    pub fn is_on_curve(&self) -> Choice {
        let z6 = self.t.square() * self.t;
        (self.y.square()).ct_eq(&(self.x.square() * self.x + z6 * B)) | self.z.is_zero()
    }

    /// Convert to affine coordinates.
    pub fn to_affine(&self) -> G1Affine {
        G1Affine::from(self)
    }

    /// Point doubling (dbl-2009-l).
    pub fn double(&self) -> G1Projective {
        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();

        let d = ((self.x + b).square() - a - c).double();
        let e = a.double() + a;
        let f = e.square();

        let x = f - d.double();
        let y = e * (d - x) - c.double().double().double();
        let z = (self.y * self.z).double();

        G1Projective {
            x,
            y,
            z,
            t: z.square(),
        }
    }

    /// Point addition (add-2007-bl) with the exceptional cases resolved in
    /// constant time.
    pub fn add(&self, rhs: &G1Projective) -> G1Projective {
        let u1 = self.x * rhs.t;
        let u2 = rhs.x * self.t;
        let s1 = self.y * rhs.z * rhs.t;
        let s2 = rhs.y * self.z * self.t;

        let h = u2 - u1;
        let i = h.double().square();
        let j = h * i;
        let r = (s2 - s1).double();
        let v = u1 * i;

        let x = r.square() - j - v.double();
        let y = r * (v - x) - (s1 * j).double();
        let z = ((self.z + rhs.z).square() - self.t - rhs.t) * h;

        let sum = G1Projective {
            x,
            y,
            z,
            t: z.square(),
        };

        let lhs_is_zero = self.is_identity();
        let rhs_is_zero = rhs.is_identity();
        // h = 0 and r = 0 means self == rhs; h = 0 alone gives z = 0 already
        let same = h.is_zero() & r.is_zero() & !lhs_is_zero & !rhs_is_zero;

        let res = G1Projective::conditional_select(&sum, &self.double(), same);
        let res = G1Projective::conditional_select(&res, rhs, lhs_is_zero);
        G1Projective::conditional_select(&res, self, rhs_is_zero)
    }

    /// Constant-time double-and-add over a 256-bit little-endian scalar.
    pub(crate) fn multiply(&self, by: &[u64; 4]) -> G1Projective {
        let mut acc = G1Projective::identity();
        for limb in by.iter().rev() {
            for i in (0..64).rev() {
                acc = acc.double();
                let bit = Choice::from(((limb >> i) & 1) as u8);
                acc = G1Projective::conditional_select(&acc, &(acc + self), bit);
            }
        }
        acc
    }

    /// λ·P = (β·x, y).
    pub(crate) fn endomorphism(&self) -> G1Projective {
        G1Projective {
            x: self.x * BETA,
            ..*self
        }
    }

    /// k·P through the 2-dimensional lattice decomposition of k.
    ///
    /// Agrees with `self * k` for every k.
    pub fn mul_glv(&self, k: &BigUint) -> Result<G1Projective> {
        let k = k % order();
        let digits = curve_lattice()?.multi(&k)?;
        let table = precompute(
            &[*self, self.endomorphism()],
            G1Projective::identity(),
            |a, b| a + b,
        );

        let mut acc = G1Projective::identity();
        for digit in digits.iter().rev() {
            acc = acc.double();
            acc += ct_lookup(&table, *digit as usize);
        }
        Ok(acc)
    }
}
