//! Loads the bn256 known-answer vectors from JSON.

use std::fs;
use std::path::{Path, PathBuf};

use bn256_algorithms::bn256::{G1Affine, G2Affine, Gt};
use num_bigint::BigUint;
use once_cell::sync::Lazy;
use serde::Deserialize;

fn vectors_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
        .join("bn256")
}

/// Scalar multiples of the three generators by one scalar.
#[derive(Debug, Clone, Deserialize)]
pub struct ScalarMultVector {
    /// Big-endian hex scalar
    pub k: String,
    /// k·G1 in the 64-byte encoding
    pub g1: String,
    /// k·G2 in the 128-byte encoding
    pub g2: String,
    /// e(G1, G2)^k in the 384-byte encoding
    pub gt: String,
}

/// Hash-to-G1 outputs under the default domain separation tag.
#[derive(Debug, Clone, Deserialize)]
pub struct HashToG1Vector {
    /// Hex message
    pub msg: String,
    /// Fouque–Tibouchi encoding
    pub ft: String,
    /// Try-and-increment encoding
    pub tai: String,
}

/// Contents of `known_answers.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct KnownAnswers {
    /// Free-form note
    #[serde(default)]
    pub description: String,
    /// Scalar multiplication vectors
    pub scalar_mult: Vec<ScalarMultVector>,
    /// Hash-to-curve vectors
    pub hash_to_g1: Vec<HashToG1Vector>,
}

/// Parsed once per test binary.
pub static KNOWN_ANSWERS: Lazy<KnownAnswers> = Lazy::new(|| {
    let path = vectors_dir().join("known_answers.json");
    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&raw).unwrap_or_else(|e| panic!("failed to parse {}: {e}", path.display()))
});

impl ScalarMultVector {
    /// The scalar as an integer.
    pub fn scalar(&self) -> BigUint {
        BigUint::from_bytes_be(&decode(&self.k))
    }

    /// Expected G1 point.
    pub fn g1_point(&self) -> G1Affine {
        let bytes = decode(&self.g1);
        let (p, rest) = G1Affine::from_slice(&bytes).expect("vector G1 point decodes");
        assert!(rest.is_empty());
        p
    }

    /// Expected G2 point.
    pub fn g2_point(&self) -> G2Affine {
        let bytes = decode(&self.g2);
        let (p, rest) = G2Affine::from_slice(&bytes).expect("vector G2 point decodes");
        assert!(rest.is_empty());
        p
    }

    /// Expected GT element.
    pub fn gt_element(&self) -> Gt {
        let bytes = decode(&self.gt);
        let (g, rest) = Gt::from_slice(&bytes).expect("vector GT element decodes");
        assert!(rest.is_empty());
        g
    }
}

impl HashToG1Vector {
    /// The message bytes.
    pub fn message(&self) -> Vec<u8> {
        decode(&self.msg)
    }
}

/// Hex decode that panics with the offending input.
pub fn decode(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap_or_else(|e| panic!("bad hex {s:?}: {e}"))
}
