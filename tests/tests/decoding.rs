//! Decoding through the `Marshal` trait and the errors callers see.

use bn256_algorithms::bn256::{G1Affine, G1Projective, G2Affine, G2Projective, Gt};
use bn256_algorithms::Error as PrimitiveError;
use bn256_api::{Error, Marshal};
use bn256_tests::logging::init_tracing;
use num_bigint::BigUint;
use proptest::prelude::*;

#[test]
fn sizes_match_encodings() {
    assert_eq!(G1Affine::SIZE, 64);
    assert_eq!(G2Affine::SIZE, 128);
    assert_eq!(Gt::SIZE, 384);
    assert_eq!(G1Affine::generator().marshal().len(), G1Affine::SIZE);
    assert_eq!(G2Affine::generator().marshal().len(), G2Affine::SIZE);
    assert_eq!(Gt::generator().marshal().len(), Gt::SIZE);
}

#[test]
fn sequential_decoding_from_one_buffer() {
    init_tracing();
    let k = BigUint::from(77u32);
    let p = G1Affine::from(G1Projective::generator() * &k);
    let q = G2Affine::from(G2Projective::generator() * &k);
    let g = Gt::generator() * &k;

    let mut buf = Vec::new();
    buf.extend_from_slice(&p.marshal());
    buf.extend_from_slice(&q.marshal());
    buf.extend_from_slice(&g.marshal());
    buf.extend_from_slice(b"tail");

    let (p2, rest) = G1Affine::unmarshal(&buf).unwrap();
    let (q2, rest) = G2Affine::unmarshal(rest).unwrap();
    let (g2, rest) = Gt::unmarshal(rest).unwrap();
    assert_eq!(p2, p);
    assert_eq!(q2, q);
    assert_eq!(g2, g);
    assert_eq!(rest, b"tail");
}

#[test]
fn short_input_reports_lengths() {
    init_tracing();
    let err = G1Affine::unmarshal(&[0u8; 10]).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidLength {
            context: "G1",
            expected: 64,
            actual: 10,
        }
    );
    assert_eq!(err.to_string(), "G1: not enough data (expected 64, got 10)");

    let err = Gt::unmarshal(&[0u8; 383]).unwrap_err();
    assert_eq!(err.context(), "GT");
}

#[test]
fn malformed_points_report_context() {
    init_tracing();
    let mut bytes = G1Affine::generator().to_bytes();
    bytes[63] ^= 1;
    let err = G1Affine::unmarshal(&bytes).unwrap_err();
    assert!(matches!(err, Error::InvalidPoint { context: "G1", .. }));
    assert_eq!(err.to_string(), "Malformed point: G1: malformed point");

    let mut bytes = G2Affine::generator().to_bytes();
    bytes[0] = 0xff;
    let err = G2Affine::unmarshal(&bytes).unwrap_err();
    assert!(matches!(err, Error::InvalidPoint { context: "G2", .. }));
}

#[test]
fn gt_rejects_non_subgroup_elements() {
    init_tracing();
    // The all-zero encoding is not a group element: the identity is one
    let err = Gt::unmarshal(&[0u8; 384]).unwrap_err();
    assert!(matches!(err, Error::InvalidPoint { context: "GT", .. }));

    let one = Gt::identity().to_bytes();
    assert_eq!(one[383], 1);
    assert!(one[..383].iter().all(|b| *b == 0));
    assert!(bool::from(Gt::unmarshal(&one).unwrap().0.is_identity()));
}

#[test]
fn primitive_errors_convert_with_context() {
    let err = G2Affine::from_slice(&[1u8; 5]).unwrap_err();
    assert_eq!(
        err,
        PrimitiveError::Length {
            context: "G2",
            expected: 128,
            actual: 5,
        }
    );
    let core: Error = err.into();
    assert_eq!(core.clone().with_context("handshake").context(), "handshake");
    assert!(matches!(core, Error::InvalidLength { expected: 128, actual: 5, .. }));
}

#[test]
fn identities_encode_as_zeros() {
    assert_eq!(G1Affine::identity().marshal(), vec![0u8; 64]);
    assert_eq!(G2Affine::identity().marshal(), vec![0u8; 128]);
    let (p, _) = G1Affine::unmarshal(&[0u8; 64]).unwrap();
    assert!(bool::from(p.is_identity()));
    let (q, _) = G2Affine::unmarshal(&[0u8; 128]).unwrap();
    assert!(bool::from(q.is_identity()));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn arbitrary_g1_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..96)) {
        if let Ok((p, rest)) = G1Affine::unmarshal(&bytes) {
            prop_assert!(bool::from(p.is_on_curve()));
            prop_assert_eq!(rest.len(), bytes.len() - 64);
        }
    }

    #[test]
    fn arbitrary_g2_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 128..160)) {
        if let Ok((q, _)) = G2Affine::unmarshal(&bytes) {
            prop_assert!(bool::from(q.is_torsion_free()));
        }
    }
}
