//! Serde support: every group element travels as its fixed-size byte
//! encoding and is fully validated on the way back in.

use core::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{G1Affine, G2Affine, Gt};
use bn256_params::curve::bn256::{BN256_G1_SIZE, BN256_G2_SIZE, BN256_GT_SIZE};

/// Accepts either a byte string or a sequence of exactly `N` bytes.
struct FixedBytes<const N: usize>;

impl<'de, const N: usize> Visitor<'de> for FixedBytes<N> {
    type Value = [u8; N];

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes", N)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<[u8; N], E> {
        <[u8; N]>::try_from(v).map_err(|_| E::invalid_length(v.len(), &self))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<[u8; N], A::Error> {
        let mut out = [0u8; N];
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        if seq.next_element::<u8>()?.is_some() {
            return Err(de::Error::invalid_length(N + 1, &self));
        }
        Ok(out)
    }
}

macro_rules! impl_serde {
    ($t:ident, $size:expr) => {
        impl Serialize for $t {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_bytes(&self.to_bytes())
            }
        }

        impl<'de> Deserialize<'de> for $t {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let bytes = deserializer.deserialize_bytes(FixedBytes::<{ $size }>)?;
                $t::from_slice(&bytes)
                    .map(|(p, _)| p)
                    .map_err(de::Error::custom)
            }
        }
    };
}

impl_serde!(G1Affine, BN256_G1_SIZE);
impl_serde!(G2Affine, BN256_G2_SIZE);
impl_serde!(Gt, BN256_GT_SIZE);
