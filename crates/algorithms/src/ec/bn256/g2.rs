//! G₂ group implementation for BN256: the order-n subgroup of the sextic
//! twist y² = x³ + 3/ξ over Fp2.

use crate::error::{to_core_result, validate, Error, Result};
use core::borrow::Borrow;
use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul, Neg, Sub};

use bn256_api::Marshal;
use bn256_internal::constant_time::ct_is_zero;
use bn256_internal::ct_lookup;
use bn256_params::curve::bn256::{BN256_FIELD_ELEMENT_SIZE, BN256_G2_SIZE};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use tracing::debug;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::field::fp::Fp;
use super::field::fp2::Fp2;
use super::field::fp6::XI_TO_P_SQUARED_MINUS_1_OVER_3;
use super::g1::decode_fp;
use super::lattice::{curve_lattice, precompute};
use super::scalar::{order, random_scalar, to_limbs, ORDER_LIMBS};

/// Twist coefficient b' = 3/ξ.
pub(crate) const TWIST_B: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0xb94f_760f_b4c5_ee14,
        0xdae9_f8f2_4c3b_6eb4,
        0x77a6_75d2_e52f_4fe4,
        0x736f_31b0_9116_c66b,
    ]),
    c1: Fp::from_raw_unchecked([
        0x7504_6774_386b_8d71,
        0x5bd0_854a_46d3_6cf8,
        0x6643_27a1_d41c_8414,
        0x096c_9abb_932e_eb2f,
    ]),
};

/// G₂ affine point representation.
#[derive(Copy, Clone, Debug)]
pub struct G2Affine {
    pub(crate) x: Fp2,
    pub(crate) y: Fp2,
    infinity: Choice,
}

impl Default for G2Affine {
    fn default() -> G2Affine {
        G2Affine::identity()
    }
}

impl zeroize::DefaultIsZeroes for G2Affine {}

impl fmt::Display for G2Affine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if bool::from(self.infinity) {
            write!(f, "bn256.G2(infinity)")
        } else {
            write!(
                f,
                "bn256.G2(({}, {}), ({}, {}))",
                self.x.c1, self.x.c0, self.y.c1, self.y.c0
            )
        }
    }
}

impl<'a> From<&'a G2Projective> for G2Affine {
    fn from(p: &'a G2Projective) -> G2Affine {
        let zinv = p.z.invert().unwrap_or(Fp2::zero());
        let zinv2 = zinv.square();
        let x = p.x * zinv2;
        let y = p.y * zinv2 * zinv;

        let tmp = G2Affine {
            x,
            y,
            infinity: Choice::from(0u8),
        };

        G2Affine::conditional_select(&tmp, &G2Affine::identity(), zinv.is_zero())
    }
}

impl From<G2Projective> for G2Affine {
    fn from(p: G2Projective) -> G2Affine {
        G2Affine::from(&p)
    }
}

impl ConstantTimeEq for G2Affine {
    fn ct_eq(&self, other: &Self) -> Choice {
        (self.infinity & other.infinity)
            | ((!self.infinity)
                & (!other.infinity)
                & self.x.ct_eq(&other.x)
                & self.y.ct_eq(&other.y))
    }
}

impl ConditionallySelectable for G2Affine {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        G2Affine {
            x: Fp2::conditional_select(&a.x, &b.x, choice),
            y: Fp2::conditional_select(&a.y, &b.y, choice),
            infinity: Choice::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl Eq for G2Affine {}
impl PartialEq for G2Affine {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a> Neg for &'a G2Affine {
    type Output = G2Affine;

    #[inline]
    fn neg(self) -> G2Affine {
        G2Affine {
            x: self.x,
            y: Fp2::conditional_select(&-self.y, &Fp2::one(), self.infinity),
            infinity: self.infinity,
        }
    }
}

impl Neg for G2Affine {
    type Output = G2Affine;

    #[inline]
    fn neg(self) -> G2Affine {
        -&self
    }
}

impl<'a, 'b> Add<&'b G2Affine> for &'a G2Projective {
    type Output = G2Projective;

    #[inline]
    fn add(self, rhs: &'b G2Affine) -> G2Projective {
        self.add(&G2Projective::from(rhs))
    }
}

impl<'a, 'b> Sub<&'b G2Affine> for &'a G2Projective {
    type Output = G2Projective;

    #[inline]
    fn sub(self, rhs: &'b G2Affine) -> G2Projective {
        self + &(-rhs)
    }
}

impl_binops_additive!(G2Projective, G2Affine);

impl G2Affine {
    /// Point at infinity.
    pub fn identity() -> G2Affine {
        G2Affine {
            x: Fp2::zero(),
            y: Fp2::one(),
            infinity: Choice::from(1u8),
        }
    }

    /// Fixed generator.
    pub fn generator() -> G2Affine {
        G2Affine {
            x: Fp2 {
                c0: Fp::from_raw_unchecked([
                    0x7a80_be24_a6e9_0a16,
                    0xfde4_755f_c2e4_1f6c,
                    0x5b6f_4a91_9876_3256,
                    0x72c3_0048_98fb_a81f,
                ]),
                c1: Fp::from_raw_unchecked([
                    0x6f53_41c2_ca3b_c5e0,
                    0xf694_4260_e391_b942,
                    0xfcc1_f7ae_a6e3_5601,
                    0x4fdc_3e46_1645_4d92,
                ]),
            },
            y: Fp2 {
                c0: Fp::from_raw_unchecked([
                    0x382e_1937_f0c8_b7d0,
                    0x1a29_e6e0_4e87_5d3d,
                    0x3fea_97d0_3f27_2294,
                    0x2d51_3bcb_93d4_4a17,
                ]),
                c1: Fp::from_raw_unchecked([
                    0x77eb_d80d_cc8c_5a70,
                    0x0685_42a0_9f5e_401b,
                    0x6146_6977_c073_4e5d,
                    0x7351_7063_eb3e_9dd9,
                ]),
            },
            infinity: Choice::from(0u8),
        }
    }

    /// Check if point at infinity.
    #[inline]
    pub fn is_identity(&self) -> Choice {
        self.infinity
    }

    /// Twist membership check.
    pub fn is_on_curve(&self) -> Choice {
        (self.y.square() - (self.x.square() * self.x)).ct_eq(&TWIST_B) | self.infinity
    }

    /// n·Q = O. The twist has a large cofactor, so being on the curve is
    /// not enough.
    pub fn is_torsion_free(&self) -> Choice {
        G2Projective::from(self).multiply(&ORDER_LIMBS).is_identity()
    }

    /// Affine x-coordinate; zero for the identity.
    pub fn x(&self) -> Fp2 {
        Fp2::conditional_select(&self.x, &Fp2::zero(), self.infinity)
    }

    /// Affine y-coordinate; zero for the identity.
    pub fn y(&self) -> Fp2 {
        Fp2::conditional_select(&self.y, &Fp2::zero(), self.infinity)
    }

    /// Serialize to 128 bytes: x.i ‖ x.real ‖ y.i ‖ y.real, each big-endian.
    /// The identity encodes as all zeros.
    pub fn to_bytes(&self) -> [u8; BN256_G2_SIZE] {
        let x = self.x();
        let y = self.y();
        let mut res = [0u8; BN256_G2_SIZE];
        for (chunk, fe) in res
            .chunks_exact_mut(BN256_FIELD_ELEMENT_SIZE)
            .zip([x.c1, x.c0, y.c1, y.c0].iter())
        {
            chunk.copy_from_slice(&fe.to_bytes());
        }
        res
    }

    /// Decode a point from the front of `bytes`, returning it together with
    /// the unconsumed tail. Rejects points outside the order-n subgroup.
    pub fn from_slice(bytes: &[u8]) -> Result<(Self, &[u8])> {
        validate::min_length("G2", bytes.len(), BN256_G2_SIZE)?;
        let (head, rest) = bytes.split_at(BN256_G2_SIZE);

        if bool::from(ct_is_zero(head)) {
            return Ok((G2Affine::identity(), rest));
        }

        let mut coords = [Fp::zero(); 4];
        for (c, chunk) in coords.iter_mut().zip(head.chunks_exact(BN256_FIELD_ELEMENT_SIZE)) {
            *c = decode_fp(chunk).ok_or_else(|| {
                debug!("rejecting G2 encoding: coordinate not below p");
                Error::point("G2", "malformed point")
            })?;
        }

        let p = G2Affine {
            x: Fp2 {
                c0: coords[1],
                c1: coords[0],
            },
            y: Fp2 {
                c0: coords[3],
                c1: coords[2],
            },
            infinity: Choice::from(0u8),
        };
        validate::point(p.is_on_curve().into(), "G2", "malformed point")
            .inspect_err(|_| debug!("rejecting G2 encoding: point not on curve"))?;
        validate::point(p.is_torsion_free().into(), "G2", "malformed point")
            .inspect_err(|_| debug!("rejecting G2 encoding: point outside the order-n subgroup"))?;

        Ok((p, rest))
    }
}

impl Marshal for G2Affine {
    const SIZE: usize = BN256_G2_SIZE;

    #[cfg(feature = "alloc")]
    fn marshal(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }

    fn unmarshal(bytes: &[u8]) -> bn256_api::Result<(Self, &[u8])> {
        to_core_result(G2Affine::from_slice(bytes), "G2")
    }
}

/// G₂ point in Jacobian coordinates over Fp2, `t` caching z².
#[derive(Copy, Clone, Debug)]
pub struct G2Projective {
    pub(crate) x: Fp2,
    pub(crate) y: Fp2,
    pub(crate) z: Fp2,
    pub(crate) t: Fp2,
}

impl Default for G2Projective {
    fn default() -> G2Projective {
        G2Projective::identity()
    }
}

impl zeroize::DefaultIsZeroes for G2Projective {}

impl fmt::Display for G2Projective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", G2Affine::from(self))
    }
}

impl<'a> From<&'a G2Affine> for G2Projective {
    fn from(p: &'a G2Affine) -> G2Projective {
        let z = Fp2::conditional_select(&Fp2::one(), &Fp2::zero(), p.infinity);
        G2Projective {
            x: p.x,
            y: p.y,
            z,
            t: z,
        }
    }
}

impl From<G2Affine> for G2Projective {
    fn from(p: G2Affine) -> G2Projective {
        G2Projective::from(&p)
    }
}

impl ConstantTimeEq for G2Projective {
    fn ct_eq(&self, other: &Self) -> Choice {
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

impl ConditionallySelectable for G2Projective {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        G2Projective {
            x: Fp2::conditional_select(&a.x, &b.x, choice),
            y: Fp2::conditional_select(&a.y, &b.y, choice),
            z: Fp2::conditional_select(&a.z, &b.z, choice),
            t: Fp2::conditional_select(&a.t, &b.t, choice),
        }
    }
}

impl Eq for G2Projective {}
impl PartialEq for G2Projective {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a> Neg for &'a G2Projective {
    type Output = G2Projective;

    #[inline]
    fn neg(self) -> G2Projective {
        G2Projective {
            x: self.x,
            y: -self.y,
            z: self.z,
            t: self.t,
        }
    }
}

impl Neg for G2Projective {
    type Output = G2Projective;

    #[inline]
    fn neg(self) -> G2Projective {
        -&self
    }
}

impl<'a, 'b> Add<&'b G2Projective> for &'a G2Projective {
    type Output = G2Projective;

    #[inline]
    fn add(self, rhs: &'b G2Projective) -> G2Projective {
        self.add(rhs)
    }
}

impl<'a, 'b> Sub<&'b G2Projective> for &'a G2Projective {
    type Output = G2Projective;

    #[inline]
    fn sub(self, rhs: &'b G2Projective) -> G2Projective {
        self + &(-rhs)
    }
}

impl<'a, 'b> Mul<&'b BigUint> for &'a G2Projective {
    type Output = G2Projective;

    fn mul(self, k: &'b BigUint) -> Self::Output {
        self.multiply(&to_limbs(k))
    }
}

impl<'a, 'b> Mul<&'b BigUint> for &'a G2Affine {
    type Output = G2Projective;

    fn mul(self, k: &'b BigUint) -> Self::Output {
        G2Projective::from(self).multiply(&to_limbs(k))
    }
}

impl_binops_additive!(G2Projective, G2Projective);
impl_binops_multiplicative_mixed!(G2Projective, BigUint, G2Projective);
impl_binops_multiplicative_mixed!(G2Affine, BigUint, G2Projective);

impl<T> Sum<T> for G2Projective
where
    T: Borrow<G2Projective>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::identity(), |acc, item| acc + item.borrow())
    }
}

impl G2Projective {
    /// Point at infinity.
    pub fn identity() -> G2Projective {
        G2Projective {
            x: Fp2::one(),
            y: Fp2::one(),
            z: Fp2::zero(),
            t: Fp2::zero(),
        }
    }

    /// Fixed generator.
    pub fn generator() -> G2Projective {
        G2Projective::from(G2Affine::generator())
    }

    /// Random group element together with its discrete log to the generator.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<(BigUint, Self)> {
        let k = random_scalar(rng)?;
        let p = G2Projective::mul_base(&k);
        Ok((k, p))
    }

    /// k·G for the fixed generator.
    pub fn mul_base(k: &BigUint) -> G2Projective {
        G2Projective::generator() * k
    }

    /// Check if point at infinity.
    #[inline]
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Twist membership check: y² = x³ + b'·z⁶.
    pub fn is_on_curve(&self) -> Choice {
        let z6 = self.t.square() * self.t;
        (self.y.square()).ct_eq(&(self.x.square() * self.x + z6 * TWIST_B)) | self.z.is_zero()
    }

    /// Convert to affine coordinates.
    pub fn to_affine(&self) -> G2Affine {
        G2Affine::from(self)
    }

    /// Point doubling (dbl-2009-l).
    pub fn double(&self) -> G2Projective {
        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();

        let d = ((self.x + b).square() - a - c).double();
        let e = a.double() + a;
        let f = e.square();

        let x = f - d.double();
        let y = e * (d - x) - c.double().double().double();
        let z = (self.y * self.z).double();

        G2Projective {
            x,
            y,
            z,
            t: z.square(),
        }
    }

    /// Point addition (add-2007-bl) with the exceptional cases resolved in
    /// constant time.
    pub fn add(&self, rhs: &G2Projective) -> G2Projective {
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

        let sum = G2Projective {
            x,
            y,
            z,
            t: z.square(),
        };

        let lhs_is_zero = self.is_identity();
        let rhs_is_zero = rhs.is_identity();
        let same = h.is_zero() & r.is_zero() & !lhs_is_zero & !rhs_is_zero;

        let res = G2Projective::conditional_select(&sum, &self.double(), same);
        let res = G2Projective::conditional_select(&res, rhs, lhs_is_zero);
        G2Projective::conditional_select(&res, self, rhs_is_zero)
    }

    pub(crate) fn multiply(&self, by: &[u64; 4]) -> G2Projective {
        let mut acc = G2Projective::identity();
        for limb in by.iter().rev() {
            for i in (0..64).rev() {
                acc = acc.double();
                let bit = Choice::from(((limb >> i) & 1) as u8);
                acc = G2Projective::conditional_select(&acc, &(acc + self), bit);
            }
        }
        acc
    }

    /// λ·Q = (ξ^((p²-1)/3)·x, y).
    pub(crate) fn endomorphism(&self) -> G2Projective {
        G2Projective {
            x: self.x.mul_by_fp(&XI_TO_P_SQUARED_MINUS_1_OVER_3),
            ..*self
        }
    }

    /// k·Q through the 2-dimensional lattice decomposition of k.
    ///
    /// Agrees with `self * k` for every point of the order-n subgroup.
    pub fn mul_glv(&self, k: &BigUint) -> Result<G2Projective> {
        let k = k % order();
        let digits = curve_lattice()?.multi(&k)?;
        let table = precompute(
            &[*self, self.endomorphism()],
            G2Projective::identity(),
            |a, b| a + b,
        );

        let mut acc = G2Projective::identity();
        for digit in digits.iter().rev() {
            acc = acc.double();
            acc += ct_lookup(&table, *digit as usize);
        }
        Ok(acc)
    }
}
