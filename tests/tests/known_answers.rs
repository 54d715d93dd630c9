//! Known-answer tests against `src/vectors/bn256/known_answers.json`.

use bn256_algorithms::bn256::{
    hash_to_curve, hash_to_curve_try_increment, pairing, G1Affine, G1Projective, G2Affine,
    G2Projective, Gt,
};
use bn256_params::utils::hash::HASH_TO_G1_DEFAULT_DST;
use bn256_tests::logging::init_tracing;
use bn256_tests::vectors::{decode, KNOWN_ANSWERS};

#[test]
fn vectors_are_present() {
    assert_eq!(KNOWN_ANSWERS.scalar_mult.len(), 3);
    assert_eq!(KNOWN_ANSWERS.hash_to_g1.len(), 3);
}

#[test]
fn g1_scalar_mult_vectors() {
    init_tracing();
    for (i, v) in KNOWN_ANSWERS.scalar_mult.iter().enumerate() {
        let k = v.scalar();
        let expected = v.g1_point();

        let ladder = G1Affine::from(G1Projective::generator() * &k);
        assert_eq!(ladder, expected, "ladder, vector {i}");
        assert_eq!(ladder.to_bytes().to_vec(), decode(&v.g1), "encoding, vector {i}");

        let glv = G1Projective::generator().mul_glv(&k).unwrap();
        assert_eq!(G1Affine::from(glv), expected, "glv, vector {i}");
        assert_eq!(G1Affine::from(G1Projective::mul_base(&k)), expected);
    }
}

#[test]
fn g2_scalar_mult_vectors() {
    init_tracing();
    for (i, v) in KNOWN_ANSWERS.scalar_mult.iter().enumerate() {
        let k = v.scalar();
        let expected = v.g2_point();

        let ladder = G2Affine::from(G2Projective::generator() * &k);
        assert_eq!(ladder, expected, "ladder, vector {i}");
        assert_eq!(ladder.to_bytes().to_vec(), decode(&v.g2), "encoding, vector {i}");

        let glv = G2Projective::generator().mul_glv(&k).unwrap();
        assert_eq!(G2Affine::from(glv), expected, "glv, vector {i}");
    }
}

#[test]
fn gt_scalar_mult_vectors() {
    init_tracing();
    for (i, v) in KNOWN_ANSWERS.scalar_mult.iter().enumerate() {
        let k = v.scalar();
        let expected = v.gt_element();

        let pow = Gt::generator() * &k;
        assert_eq!(pow, expected, "cyclotomic pow, vector {i}");
        assert_eq!(pow.to_bytes().to_vec(), decode(&v.gt), "encoding, vector {i}");
        assert_eq!(Gt::generator().mul_glv(&k).unwrap(), expected, "glv, vector {i}");
    }
}

#[test]
fn pairing_of_vector_points() {
    init_tracing();
    for v in KNOWN_ANSWERS.scalar_mult.iter().take(2) {
        let expected = v.gt_element();
        assert_eq!(pairing(&v.g1_point(), &G2Affine::generator()), expected);
        assert_eq!(pairing(&G1Affine::generator(), &v.g2_point()), expected);
    }
}

#[test]
fn hash_to_g1_vectors() {
    init_tracing();
    for v in &KNOWN_ANSWERS.hash_to_g1 {
        let msg = v.message();

        let ft = G1Affine::from(hash_to_curve(&msg).unwrap());
        assert_eq!(ft.to_bytes().to_vec(), decode(&v.ft), "ft, msg {}", v.msg);

        let tai = G1Affine::from(hash_to_curve_try_increment(&msg, HASH_TO_G1_DEFAULT_DST).unwrap());
        assert_eq!(tai.to_bytes().to_vec(), decode(&v.tai), "tai, msg {}", v.msg);
    }
}
