//! Optimal Ate pairing and the target group GT.

use crate::error::{to_core_result, validate, Error, Result};
use core::borrow::Borrow;
use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul, Neg, Sub};

use bn256_api::Marshal;
use bn256_internal::ct_lookup;
use bn256_params::curve::bn256::{BN256_FIELD_ELEMENT_SIZE, BN256_GT_SIZE, SIX_U_PLUS_2_NAF};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use tracing::{debug, instrument};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::field::fp::Fp;
use super::field::fp12::Fp12;
use super::field::fp2::Fp2;
use super::field::fp6::{Fp6, XI_TO_P_MINUS_1_OVER_3, XI_TO_P_SQUARED_MINUS_1_OVER_3};
use super::g1::{decode_fp, G1Affine};
use super::g2::{G2Affine, G2Projective};
use super::lattice::{precompute, target_lattice};
use super::scalar::{order, random_scalar, to_limbs, ORDER_LIMBS};

/// ξ^((p-1)/2), the y-coordinate twist of the p-power Frobenius on E'.
const XI_TO_P_MINUS_1_OVER_2: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0x18db_ee03_fb77_08fa,
        0x1e76_01a6_02c8_43c7,
        0x5dde_0688_cdb2_31cb,
        0x86db_5cf2_c605_a524,
    ]),
    c1: Fp::from_raw_unchecked([
        0x19da_7133_3653_ee20,
        0x7eaa_f34f_c6ed_6019,
        0xc4ba_3a29_a60c_dd1d,
        0x7528_1311_bcc9_df79,
    ]),
};

/// Result of the Miller loop, before the final exponentiation.
#[derive(Copy, Clone, Debug)]
pub struct MillerLoopResult(pub(crate) Fp12);

impl Default for MillerLoopResult {
    fn default() -> Self {
        MillerLoopResult(Fp12::one())
    }
}

impl ConditionallySelectable for MillerLoopResult {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        MillerLoopResult(Fp12::conditional_select(&a.0, &b.0, choice))
    }
}

impl<'a, 'b> Add<&'b MillerLoopResult> for &'a MillerLoopResult {
    type Output = MillerLoopResult;

    #[inline]
    fn add(self, rhs: &'b MillerLoopResult) -> MillerLoopResult {
        MillerLoopResult(self.0 * rhs.0)
    }
}

impl_add_binop_specify_output!(MillerLoopResult, MillerLoopResult, MillerLoopResult);

impl MillerLoopResult {
    /// Raises the loop output to (p¹² - 1)/n, landing in GT.
    ///
    /// The easy part (p⁶ - 1)(p² + 1) moves the value into the cyclotomic
    /// subgroup; the hard part (p⁴ - p² + 1)/n is evaluated with the
    /// Devegili–Scott–Dahab addition chain in powers of u.
    pub fn final_exponentiation(&self) -> Gt {
        let f = self.0;

        // f^(p⁶ - 1), then ^(p² + 1)
        let mut t1 = f.conjugate() * f.invert().unwrap_or(Fp12::zero());
        t1 *= t1.frobenius_map_p2();

        let fp = t1.frobenius_map();
        let fp2 = t1.frobenius_map_p2();
        let fp3 = fp2.frobenius_map();

        let fu = t1.cyclotomic_exp_by_u();
        let fu2 = fu.cyclotomic_exp_by_u();
        let fu3 = fu2.cyclotomic_exp_by_u();

        let y3 = fu.frobenius_map().conjugate();
        let fu2p = fu2.frobenius_map();
        let fu3p = fu3.frobenius_map();
        let y2 = fu2.frobenius_map_p2();

        let y0 = fp * fp2 * fp3;
        let y1 = t1.conjugate();
        let y5 = fu2.conjugate();
        let y4 = (fu * fu2p).conjugate();
        let y6 = (fu3 * fu3p).conjugate();

        let mut t0 = y6.cyclotomic_square() * y4 * y5;
        let mut t1 = y3 * y5 * t0;
        t0 *= y2;
        t1 = (t1.cyclotomic_square() * t0).cyclotomic_square();
        t0 = t1 * y1;
        t1 *= y0;

        Gt(t0.cyclotomic_square() * t1)
    }
}

/// Multiplies f by the sparse line c + (b + a·τ)·ω.
fn mul_by_line(f: &Fp12, a: &Fp2, b: &Fp2, c: &Fp2) -> Fp12 {
    let line = Fp6 {
        c0: *b,
        c1: *a,
        c2: Fp2::zero(),
    };
    let a2 = f.c1 * line;
    let t3 = f.c0.mul_by_fp2(c);
    let t2 = Fp6 {
        c0: b + c,
        c1: *a,
        c2: Fp2::zero(),
    };

    Fp12 {
        c0: t3 + a2.mul_by_nonresidue(),
        c1: (f.c1 + f.c0) * t2 - a2 - t3,
    }
}

/// Tangent at r evaluated at p; doubles r in place.
fn line_double(r: &mut G2Projective, p: &G1Affine) -> (Fp2, Fp2, Fp2) {
    let a = r.x.square();
    let b = r.y.square();
    let c = b.square();

    let d = ((r.x + b).square() - a - c).double();
    let e = a.double() + a;
    let g = e.square();

    let x = g - d.double();
    let z = (r.y + r.z).square() - b - r.t;
    let y = (d - x) * e - c.double().double().double();

    let lb = (-(e * r.t).double()).mul_by_fp(&p.x);
    let la = (r.x + e).square() - a - g - b.double().double();
    let lc = (z * r.t).double().mul_by_fp(&p.y);

    *r = G2Projective {
        x,
        y,
        z,
        t: z.square(),
    };
    (la, lb, lc)
}

/// Chord through r and the affine twist point (qx, qy), evaluated at p;
/// adds the point to r in place. `r2` is qy².
fn line_add(r: &mut G2Projective, qx: &Fp2, qy: &Fp2, p: &G1Affine, r2: &Fp2) -> (Fp2, Fp2, Fp2) {
    let b = qx * r.t;
    let d = ((qy + r.z).square() - r2 - r.t) * r.t;
    let h = b - r.x;
    let i = h.square();
    let e = i.double().double();
    let j = h * e;
    let l1 = d - r.y.double();
    let v = r.x * e;

    let x = l1.square() - j - v.double();
    let z = (r.z + h).square() - r.t - i;
    let y = (v - x) * l1 - (r.y * j).double();
    let t = z.square();

    let la = (l1 * qx).double() - ((qy + z).square() - r2 - t);
    let lb = (-l1).double().mul_by_fp(&p.x);
    let lc = z.double().mul_by_fp(&p.y);

    *r = G2Projective { x, y, z, t };
    (la, lb, lc)
}

fn ell(p: &G1Affine, q: &G2Affine) -> Fp12 {
    let minus_qy = -q.y;
    let r2 = q.y.square();
    let mut r = G2Projective::from(q);
    let mut f = Fp12::one();

    let top = SIX_U_PLUS_2_NAF.len() - 1;
    for i in (1..=top).rev() {
        let (a, b, c) = line_double(&mut r, p);
        if i != top {
            f = f.square();
        }
        f = mul_by_line(&f, &a, &b, &c);

        let (a, b, c) = match SIX_U_PLUS_2_NAF[i - 1] {
            1 => line_add(&mut r, &q.x, &q.y, p, &r2),
            -1 => line_add(&mut r, &q.x, &minus_qy, p, &r2),
            _ => continue,
        };
        f = mul_by_line(&f, &a, &b, &c);
    }

    // Q1 = π(Q) and -Q2 = -π²(Q)
    let q1x = q.x.conjugate() * XI_TO_P_MINUS_1_OVER_3;
    let q1y = q.y.conjugate() * XI_TO_P_MINUS_1_OVER_2;
    let (a, b, c) = line_add(&mut r, &q1x, &q1y, p, &q1y.square());
    f = mul_by_line(&f, &a, &b, &c);

    let q2x = q.x.mul_by_fp(&XI_TO_P_SQUARED_MINUS_1_OVER_3);
    let (a, b, c) = line_add(&mut r, &q2x, &q.y, p, &r2);
    mul_by_line(&f, &a, &b, &c)
}

/// Miller loop of the optimal Ate pairing for 6u + 2.
///
/// Either input being the identity yields one.
pub fn miller_loop(p: &G1Affine, q: &G2Affine) -> MillerLoopResult {
    let either_identity = p.is_identity() | q.is_identity();
    let p = G1Affine::conditional_select(p, &G1Affine::generator(), either_identity);
    let q = G2Affine::conditional_select(q, &G2Affine::generator(), either_identity);

    let f = ell(&p, &q);
    MillerLoopResult(Fp12::conditional_select(&f, &Fp12::one(), either_identity))
}

/// Product of Miller loops sharing one final exponentiation.
#[cfg(feature = "alloc")]
pub fn multi_miller_loop(terms: &[(&G1Affine, &G2Affine)]) -> MillerLoopResult {
    terms
        .iter()
        .fold(MillerLoopResult::default(), |acc, (p, q)| acc + miller_loop(p, q))
}

/// e(P, Q).
#[instrument(level = "trace", skip_all)]
pub fn pairing(p: &G1Affine, q: &G2Affine) -> Gt {
    miller_loop(p, q).final_exponentiation()
}

/// Element of the order-n subgroup of Fp12*.
///
/// Written additively to match G1 and G2: `+` is the field product, `-` is
/// inversion and multiplying by a scalar is exponentiation.
#[derive(Copy, Clone, Debug)]
pub struct Gt(pub(crate) Fp12);

impl Default for Gt {
    fn default() -> Self {
        Self::identity()
    }
}

impl zeroize::DefaultIsZeroes for Gt {}

impl fmt::Display for Gt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bn256.GT(")?;
        for (i, c) in coefficients(&self.0).iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

impl ConstantTimeEq for Gt {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for Gt {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Gt(Fp12::conditional_select(&a.0, &b.0, choice))
    }
}

impl Eq for Gt {}
impl PartialEq for Gt {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a> Neg for &'a Gt {
    type Output = Gt;

    #[inline]
    fn neg(self) -> Gt {
        // unitary, so the conjugate is the inverse
        Gt(self.0.conjugate())
    }
}

impl Neg for Gt {
    type Output = Gt;

    #[inline]
    fn neg(self) -> Gt {
        -&self
    }
}

impl<'a, 'b> Add<&'b Gt> for &'a Gt {
    type Output = Gt;

    #[inline]
    fn add(self, rhs: &'b Gt) -> Gt {
        Gt(self.0 * rhs.0)
    }
}

impl<'a, 'b> Sub<&'b Gt> for &'a Gt {
    type Output = Gt;

    #[inline]
    fn sub(self, rhs: &'b Gt) -> Gt {
        self + &(-rhs)
    }
}

impl<'a, 'b> Mul<&'b BigUint> for &'a Gt {
    type Output = Gt;

    fn mul(self, k: &'b BigUint) -> Self::Output {
        Gt(self.0.cyclotomic_pow(&to_limbs(k)))
    }
}

impl_binops_additive!(Gt, Gt);
impl_binops_multiplicative_mixed!(Gt, BigUint, Gt);

impl<T> Sum<T> for Gt
where
    T: Borrow<Gt>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::identity(), |acc, item| acc + item.borrow())
    }
}

impl Gt {
    /// The multiplicative identity.
    pub fn identity() -> Gt {
        Gt(Fp12::one())
    }

    /// e(G1, G2) for the fixed generators.
    pub fn generator() -> Gt {
        from_coefficients(&GT_GENERATOR.map(Fp::from_raw_unchecked))
    }

    /// Check if this is the identity.
    pub fn is_identity(&self) -> Choice {
        self.0.is_one()
    }

    /// Squaring, written as doubling.
    pub fn double(&self) -> Gt {
        Gt(self.0.cyclotomic_square())
    }

    /// Random element together with its discrete log to the generator.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<(BigUint, Self)> {
        let k = random_scalar(rng)?;
        let g = Gt::generator() * &k;
        Ok((k, g))
    }

    /// Exponentiation through the 4-dimensional lattice decomposition of
    /// k, using the Frobenius powers of this element as bases.
    ///
    /// Agrees with `self * k` for every k.
    pub fn mul_glv(&self, k: &BigUint) -> Result<Gt> {
        let k = k % order();
        let digits = target_lattice()?.multi(&k)?;
        let bases = [
            *self,
            Gt(self.0.frobenius_map()),
            Gt(self.0.frobenius_map_p2()),
            Gt(self.0.frobenius_map_p3()),
        ];
        let table = precompute(&bases, Gt::identity(), |a, b| a + b);

        let mut acc = Gt::identity();
        for digit in digits.iter().rev() {
            acc = acc.double();
            acc += ct_lookup(&table, *digit as usize);
        }
        Ok(acc)
    }

    /// Serialize to 384 bytes, twelve big-endian base field elements with
    /// the ω·τ²·i coefficient first.
    pub fn to_bytes(&self) -> [u8; BN256_GT_SIZE] {
        let mut res = [0u8; BN256_GT_SIZE];
        for (chunk, c) in res
            .chunks_exact_mut(BN256_FIELD_ELEMENT_SIZE)
            .zip(coefficients(&self.0).iter())
        {
            chunk.copy_from_slice(&c.to_bytes());
        }
        res
    }

    /// Decode an element from the front of `bytes`, returning it together
    /// with the unconsumed tail. Rejects anything outside the order-n
    /// subgroup.
    pub fn from_slice(bytes: &[u8]) -> Result<(Self, &[u8])> {
        validate::min_length("GT", bytes.len(), BN256_GT_SIZE)?;
        let (head, rest) = bytes.split_at(BN256_GT_SIZE);

        let mut coeffs = [Fp::zero(); 12];
        for (c, chunk) in coeffs.iter_mut().zip(head.chunks_exact(BN256_FIELD_ELEMENT_SIZE)) {
            *c = decode_fp(chunk).ok_or_else(|| {
                debug!("rejecting GT encoding: coefficient not below p");
                Error::point("GT", "malformed point")
            })?;
        }

        let g = from_coefficients(&coeffs);
        let in_subgroup = g.0.pow_vartime(&ORDER_LIMBS).is_one();
        validate::point(in_subgroup.into(), "GT", "malformed point")
            .inspect_err(|_| debug!("rejecting GT encoding: element outside the order-n subgroup"))?;

        Ok((g, rest))
    }
}

impl Marshal for Gt {
    const SIZE: usize = BN256_GT_SIZE;

    #[cfg(feature = "alloc")]
    fn marshal(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }

    fn unmarshal(bytes: &[u8]) -> bn256_api::Result<(Self, &[u8])> {
        to_core_result(Gt::from_slice(bytes), "GT")
    }
}

/// Base field coefficients in wire order.
fn coefficients(f: &Fp12) -> [Fp; 12] {
    [
        f.c1.c2.c1, f.c1.c2.c0, f.c1.c1.c1, f.c1.c1.c0, f.c1.c0.c1, f.c1.c0.c0,
        f.c0.c2.c1, f.c0.c2.c0, f.c0.c1.c1, f.c0.c1.c0, f.c0.c0.c1, f.c0.c0.c0,
    ]
}

fn from_coefficients(c: &[Fp; 12]) -> Gt {
    let fp2 = |i: usize| Fp2 {
        c0: c[i + 1],
        c1: c[i],
    };
    Gt(Fp12 {
        c0: Fp6 {
            c0: fp2(10),
            c1: fp2(8),
            c2: fp2(6),
        },
        c1: Fp6 {
            c0: fp2(4),
            c1: fp2(2),
            c2: fp2(0),
        },
    })
}

/// Montgomery limbs of e(G1, G2) in wire order.
const GT_GENERATOR: [[u64; 4]; 12] = [
    [0xfca3_94dd_c9e1_7e43, 0x7f5c_f9a9_e4ac_aca6, 0xd88d_adc3_1f63_027a, 0x3517_48b5_b2d7_7375],
    [0x0f0e_1c83_9a1b_bc6c, 0x3d8e_467e_e72d_01e9, 0x318f_76ce_ad20_3955, 0x4560_1d4a_bc69_830e],
    [0xdcec_71c4_c981_71a8, 0x73d1_31fa_07ef_d94c, 0x2910_178c_7354_e9a1, 0x4c7d_f097_4e70_4019],
    [0x2856_6f32_c83f_50db, 0x4b23_5a0d_103a_637c, 0xe0a4_8859_bbd6_28d2, 0x24a7_eaea_d700_23bf],
    [0xfe3a_243d_735a_8724, 0x63a3_e647_a8c2_3113, 0x4f28_afdd_4c06_48b2, 0x4f07_88a4_b4b0_34f3],
    [0xdf1a_df88_1781_2f5f, 0x2ee7_8547_fd89_4d5d, 0x3108_00a5_a5ef_36c7, 0x51e4_6eba_5b74_3c2f],
    [0x6b1e_cb5a_0cba_969f, 0x2610_6f0a_fe4b_9553, 0x5a25_d206_e062_ca2a, 0x0393_718a_2d87_ceb2],
    [0xdb4b_1b39_9010_844a, 0x0e3e_22ba_a292_f58b, 0xefd7_a7a2_b8d5_0e2e, 0x32a9_0d49_425e_f585],
    [0x496c_2a50_5f07_dbd1, 0x2d9d_0f56_346c_cf8a, 0x9a29_8b02_dd31_7714, 0x68ed_3132_f4a9_949e],
    [0x4c54_30b2_0ce7_25a6, 0x7dbd_4382_a0b5_4432, 0x7b97_83a3_66ba_f2d5, 0x14e3_a714_53d4_1b44],
    [0xe4e3_5522_2f98_8da6, 0x557d_2213_8238_203f, 0xd0a2_cbc8_c0a8_d6b7, 0x85b2_6a0d_2fce_a0a4],
    [0x1afc_d756_04e4_b7a2, 0xbeec_594d_2566_bac2, 0x849a_c9cf_e136_4f5e, 0x72c6_8afe_b6e7_473e],
];
