//! GLV-style lattice decomposition of scalars.
//!
//! A scalar k is rewritten as short coefficients (k₀, …, k_{m-1}) with
//! Σ kᵢ·λⁱ ≡ k (mod n), where λ is the eigenvalue of an efficient
//! endomorphism. Multiplying by k then becomes a simultaneous
//! multi-exponentiation over m bases with roughly 1/m of the doublings.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::One;
use once_cell::race::OnceBox;
use tracing::debug;

use bn256_params::curve::lattice::{
    CURVE_LATTICE_DET, CURVE_LATTICE_INVERSE, CURVE_LATTICE_VECTORS, TARGET_LATTICE_DET,
    TARGET_LATTICE_INVERSE, TARGET_LATTICE_VECTORS,
};

use super::scalar::order;
use crate::error::{validate, Error, Result};

/// A reduced lattice basis together with the data needed to round scalars
/// onto it.
#[derive(Clone, Debug)]
pub struct Lattice {
    vectors: Vec<Vec<BigInt>>,
    inverse: Vec<BigInt>,
    det: BigInt,
    half: BigInt,
}

static CURVE_LATTICE: OnceBox<Lattice> = OnceBox::new();
static TARGET_LATTICE: OnceBox<Lattice> = OnceBox::new();

/// The 2-dimensional lattice used for G1 and G2 multiplication.
pub fn curve_lattice() -> Result<&'static Lattice> {
    CURVE_LATTICE.get_or_try_init(|| {
        debug!("initialising curve lattice");
        Lattice::from_decimal(&CURVE_LATTICE_VECTORS, &CURVE_LATTICE_INVERSE, CURVE_LATTICE_DET)
            .map(Box::new)
    })
}

/// The 4-dimensional lattice used for GT exponentiation.
pub fn target_lattice() -> Result<&'static Lattice> {
    TARGET_LATTICE.get_or_try_init(|| {
        debug!("initialising target lattice");
        Lattice::from_decimal(&TARGET_LATTICE_VECTORS, &TARGET_LATTICE_INVERSE, TARGET_LATTICE_DET)
            .map(Box::new)
    })
}

fn parse(s: &str) -> Result<BigInt> {
    BigInt::parse_bytes(s.as_bytes(), 10).ok_or(Error::Processing {
        operation: "lattice setup",
        details: "invalid decimal constant",
    })
}

impl Lattice {
    fn from_decimal<const M: usize>(
        vectors: &[[&str; M]; M],
        inverse: &[&str; M],
        det: &str,
    ) -> Result<Self> {
        let vectors = vectors
            .iter()
            .map(|row| row.iter().map(|s| parse(s)).collect::<Result<Vec<_>>>())
            .collect::<Result<Vec<_>>>()?;
        let inverse = inverse.iter().map(|s| parse(s)).collect::<Result<Vec<_>>>()?;
        let det = parse(det)?;
        let half = BigInt::from_biguint(Sign::Plus, order() >> 1u32);

        Ok(Lattice {
            vectors,
            inverse,
            det,
            half,
        })
    }

    /// Number of coefficients a scalar is split into.
    pub fn dimension(&self) -> usize {
        self.inverse.len()
    }

    /// ⌊num / det⌉, rounding remainders above n/2 up.
    fn round(&self, num: &BigInt) -> BigInt {
        let (mut q, r) = num.div_mod_floor(&self.det);
        if r > self.half {
            q += BigInt::one();
        }
        q
    }

    /// Splits `k` into short non-negative coefficients.
    ///
    /// `k` must be below the group order.
    pub fn decompose(&self, k: &BigUint) -> Result<Vec<BigUint>> {
        validate::parameter(*k < order(), "k", "scalar must be below the group order")?;

        let k = BigInt::from_biguint(Sign::Plus, k.clone());
        let m = self.dimension();
        let c: Vec<BigInt> = self.inverse.iter().map(|inv| self.round(&(&k * inv))).collect();

        let mut out = Vec::with_capacity(m);
        for i in 0..m {
            let mut s = BigInt::from(2) * &self.vectors[0][i];
            for (cj, vj) in c.iter().zip(self.vectors.iter()) {
                s -= cj * &vj[i];
            }
            if i == 0 {
                s += &k;
            }
            out.push(s.to_biguint().ok_or(Error::Processing {
                operation: "lattice decomposition",
                details: "negative coefficient",
            })?);
        }
        Ok(out)
    }

    /// Decomposes `k` and interleaves the bits of its coefficients.
    ///
    /// Digit i collects bit i of every coefficient, coefficient j landing
    /// at bit position j, so each digit indexes a table built by
    /// [`precompute`]. Digits are least significant first.
    pub fn multi(&self, k: &BigUint) -> Result<Vec<u8>> {
        let decomp = self.decompose(k)?;
        let max_len = decomp.iter().map(|x| x.bits()).max().unwrap_or(0);

        let mut out = vec![0u8; max_len as usize];
        for (j, x) in decomp.iter().enumerate() {
            for (i, digit) in out.iter_mut().enumerate() {
                *digit |= (x.bit(i as u64) as u8) << j;
            }
        }
        Ok(out)
    }
}

/// Builds the 2^m table of subset sums of `bases`: entry j is the sum of
/// every base whose index is a set bit of j.
pub(crate) fn precompute<T, F>(bases: &[T], identity: T, add: F) -> Vec<T>
where
    T: Copy,
    F: Fn(&T, &T) -> T,
{
    let mut table = vec![identity; 1 << bases.len()];
    for j in 1..table.len() {
        // lowest set bit of j plus the entry without it
        let i = j.trailing_zeros() as usize;
        table[j] = add(&table[j & (j - 1)], &bases[i]);
    }
    table
}
