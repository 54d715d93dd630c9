//! Small pairing-based protocols run end to end over the public API.

use bn256_algorithms::bn256::{
    hash_to_curve_with_dst, multi_miller_loop, pairing, random_scalar, G1Affine, G1Projective,
    G2Affine, G2Projective, Gt,
};
use bn256_api::Marshal;
use bn256_tests::logging::init_tracing;
use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const DST: &[u8] = b"BN256G1_XMD:SHA-256_BLS_TEST_";

#[test]
fn tripartite_diffie_hellman() {
    init_tracing();
    let mut rng = ChaCha20Rng::seed_from_u64(0x7121);

    let (a, pa1) = G1Projective::random(&mut rng).unwrap();
    let pa2 = G2Projective::generator() * &a;
    let (b, pb1) = G1Projective::random(&mut rng).unwrap();
    let pb2 = G2Projective::generator() * &b;
    let (c, pc1) = G1Projective::random(&mut rng).unwrap();
    let pc2 = G2Projective::generator() * &c;

    // Public values cross the wire before use
    let pb1 = G1Affine::unmarshal(&G1Affine::from(pb1).marshal()).unwrap().0;
    let pc2 = G2Affine::unmarshal(&G2Affine::from(pc2).marshal()).unwrap().0;

    let ka = pairing(&pb1, &pc2) * &a;
    let kb = pairing(&G1Affine::from(pc1), &G2Affine::from(pa2)) * &b;
    let kc = pairing(&G1Affine::from(pa1), &G2Affine::from(pb2)) * &c;

    assert_eq!(ka, kb);
    assert_eq!(kb, kc);
    assert_eq!(ka.to_bytes(), kc.to_bytes());
    assert!(!bool::from(ka.is_identity()));
}

struct Keypair {
    secret: BigUint,
    public: G2Affine,
}

fn keygen(rng: &mut ChaCha20Rng) -> Keypair {
    let secret = random_scalar(rng).unwrap();
    let public = G2Affine::from(G2Projective::mul_base(&secret));
    Keypair { secret, public }
}

fn sign(key: &Keypair, msg: &[u8]) -> G1Affine {
    let h = hash_to_curve_with_dst(msg, DST).unwrap();
    G1Affine::from(h.mul_glv(&key.secret).unwrap())
}

fn verify(public: &G2Affine, msg: &[u8], sig: &G1Affine) -> bool {
    let h = G1Affine::from(hash_to_curve_with_dst(msg, DST).unwrap());
    let neg_g2 = -G2Affine::generator();
    multi_miller_loop(&[(sig, &neg_g2), (&h, public)])
        .final_exponentiation()
        .is_identity()
        .into()
}

#[test]
fn bls_signature_verifies() {
    init_tracing();
    let mut rng = ChaCha20Rng::seed_from_u64(0xb15);
    let key = keygen(&mut rng);

    let sig = sign(&key, b"attack at dawn");
    assert!(verify(&key.public, b"attack at dawn", &sig));
    assert!(!verify(&key.public, b"attack at dusk", &sig));

    let other = keygen(&mut rng);
    assert!(!verify(&other.public, b"attack at dawn", &sig));
}

#[test]
fn bls_signature_aggregation() {
    init_tracing();
    let mut rng = ChaCha20Rng::seed_from_u64(0xa66);
    let keys: Vec<Keypair> = (0..4).map(|_| keygen(&mut rng)).collect();
    let msgs: Vec<Vec<u8>> = (0..4).map(|i| format!("message {i}").into_bytes()).collect();

    let aggregate: G1Projective = keys
        .iter()
        .zip(&msgs)
        .map(|(k, m)| G1Projective::from(sign(k, m)))
        .sum();
    let aggregate = G1Affine::from(aggregate);

    let hashes: Vec<G1Affine> = msgs
        .iter()
        .map(|m| G1Affine::from(hash_to_curve_with_dst(m, DST).unwrap()))
        .collect();
    let neg_g2 = -G2Affine::generator();
    let swapped = G1Affine::from(hash_to_curve_with_dst(b"message 9", DST).unwrap());

    let mut terms: Vec<(&G1Affine, &G2Affine)> = vec![(&aggregate, &neg_g2)];
    terms.extend(hashes.iter().zip(keys.iter().map(|k| &k.public)));
    assert!(bool::from(
        multi_miller_loop(&terms).final_exponentiation().is_identity()
    ));

    // One swapped message breaks the aggregate
    terms[1].0 = &swapped;
    assert!(!bool::from(
        multi_miller_loop(&terms).final_exponentiation().is_identity()
    ));
}

#[test]
fn gt_products_match_pairing_sums() {
    init_tracing();
    let mut rng = ChaCha20Rng::seed_from_u64(0x5);
    let (_, p1) = G1Projective::random(&mut rng).unwrap();
    let (_, p2) = G1Projective::random(&mut rng).unwrap();
    let q = G2Affine::generator();

    let lhs = pairing(&G1Affine::from(p1 + p2), &q);
    let rhs: Gt = [p1, p2]
        .iter()
        .map(|p| pairing(&G1Affine::from(p), &q))
        .sum();
    assert_eq!(lhs, rhs);
}
