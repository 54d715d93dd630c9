//! Serialization and deserialization tests for BN256

use super::super::{G1Affine, G1Projective, G2Affine, G2Projective, Gt};
use crate::error::Error;

use bn256_api::Marshal;
use num_bigint::BigUint;

// ============================================================================
// Test Vectors
// ============================================================================

const G1_GENERATOR: &str = concat!(
    "0000000000000000000000000000000000000000000000000000000000000001",
    "8fb501e34aa387f9aa6fecb86184dc21ee5b88d120b5b59e185cac6c5e089665",
);

const G1_DOUBLE_GENERATOR: &str = concat!(
    "08fb501e34aa387f9aa6fecb86184dc21ee5b88d120b5b59e185cac6c5e08965",
    "06bc7c16a77faa5fb3fd3f18a4923a51972c4a69cd888483692458151468670d",
);

const G2_GENERATOR: &str = concat!(
    "50782711c4886e2857cfa0a40bc705f05207b0fffd3bc7f03387afa4ee63fde6",
    "408576e0495e56fc1cecfa1971b145e702b23aad16dcc09342acc24fd900d0f8",
    "7d276ca8b11fe427d663ae27aff7b7dbfa3483e3fd59ab864545965e2cf572bf",
    "7a5be28a0e9020367c385af6b473c8eea3ddc3f106b13fd65d6b5c1cbddf65c1",
);

const G2_TRIPLE_GENERATOR: &str = concat!(
    "37229bb3bd11479657f9da0db916563ac22eaddb5accc6db9166d80ed589c4c2",
    "0a5978b31819562f21df2b9ec39f96e292990ea9e62095f051d11d0cada95e96",
    "2e9e3ed36a1898b864cc727e723fda1d127ad883d4c2c1fe2aa5fd8f8d7c4015",
    "7ed170fe629b01b1220324d6c66c3967fa6d4ba1651b3f48848eed4ba71c8911",
);

/// On the twist but outside the order-n subgroup.
const G2_WRONG_SUBGROUP: &str = concat!(
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000001",
    "01cebc2f299b768c6613891501ecb16bd9ed74e71989fb2ec169160400cbe410",
    "84b0ba39d2b38af0a0406cf48824b6526f5f327f5ee7242a733fa6828400bf39",
);

const GT_GENERATOR: &str = concat!(
    "03000b84b9462101fc2da4ae73aead47c82e1ebe5f8104d4b9ea9d8beb806dc1",
    "24c10ba77eb8ea8262fd5bcb22fe29277a7a497556c325db24f78567464832c4",
    "4da3eccca04621a00a498eb438f45ce8d46e8805805fd58be014fee1ba9d9aa6",
    "3c260d658b87e51c093c4708653537a1dd2d6f707fc558873e031333b1979f15",
    "3822d75e8f62649ac30d474b2af571f7ed640e4ed65522f464b5fba3fed9a9a0",
    "060937d710fd7e172dd3b2c490bd5ad078e7d20c26d49ff68d0682dad8191749",
    "0851a4d847296bf6e4fb3cce828e7ad60e23b93fc47553553a44183a5c8d950f",
    "65d0e3b3b247717b85c8c29aafbd844431343517ce3d62a251c49f11a9c4244d",
    "5290fdcb32ffa79769196785192a4a43954d56133493f477ca9c0936cad8f513",
    "6374d0d60442fcaf302659b80da2f676aeb91fafcb6e74123515e673fbf7f27a",
    "68f8daa221fcc287d0640149da2bb8a5f080088bbb49a78715d19cbfbb8e65c6",
    "8be79a291123992b9863ee68aad6f04dc1b3a208dce396b3e4c3412c9c774f46",
);

const P_HEX: &str = "8fb501e34aa387f9aa6fecb86184dc21ee5b88d120b5b59e185cac6c5e089667";

fn bytes(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

// ============================================================================
// G1 Serialization Tests
// ============================================================================

#[test]
fn test_g1_known_encodings() {
    assert_eq!(G1Affine::generator().to_bytes().to_vec(), bytes(G1_GENERATOR));

    let double = G1Affine::from(G1Projective::generator().double());
    assert_eq!(double.marshal(), bytes(G1_DOUBLE_GENERATOR));

    let buf = bytes(G1_DOUBLE_GENERATOR);
    let (decoded, rest) = G1Affine::unmarshal(&buf).unwrap();
    assert_eq!(decoded, double);
    assert!(rest.is_empty());
}

#[test]
fn test_g1_identity_is_all_zeros() {
    assert_eq!(G1Affine::identity().to_bytes(), [0u8; 64]);
    let (p, _) = G1Affine::from_slice(&[0u8; 64]).unwrap();
    assert!(bool::from(p.is_identity()));
}

#[test]
fn test_g1_returns_unconsumed_tail() {
    let mut input = bytes(G1_GENERATOR);
    input.extend_from_slice(&[0xaa, 0xbb]);
    let (p, rest) = G1Affine::from_slice(&input).unwrap();
    assert_eq!(p, G1Affine::generator());
    assert_eq!(rest, &[0xaa, 0xbb]);
}

#[test]
fn test_g1_rejects_bad_encodings() {
    // short input
    let err = G1Affine::from_slice(&[1u8; 63]).unwrap_err();
    assert_eq!(
        err,
        Error::Length {
            context: "G1",
            expected: 64,
            actual: 63,
        }
    );

    // x = p is not a canonical field element
    let mut input = bytes(P_HEX);
    input.extend_from_slice(&bytes(G1_GENERATOR)[32..]);
    assert!(matches!(
        G1Affine::from_slice(&input),
        Err(Error::Point { context: "G1", .. })
    ));

    // (1, 1) is not on the curve
    let mut off_curve = [0u8; 64];
    off_curve[31] = 1;
    off_curve[63] = 1;
    assert!(matches!(
        G1Affine::from_slice(&off_curve),
        Err(Error::Point { context: "G1", .. })
    ));

    // the api-level error carries the same context
    let err = G1Affine::unmarshal(&off_curve).unwrap_err();
    assert_eq!(err.context(), "G1");
}

// ============================================================================
// G2 Serialization Tests
// ============================================================================

#[test]
fn test_g2_known_encodings() {
    assert_eq!(G2Affine::generator().marshal(), bytes(G2_GENERATOR));

    let triple = G2Affine::from(G2Projective::generator() * BigUint::from(3u32));
    assert_eq!(triple.to_bytes().to_vec(), bytes(G2_TRIPLE_GENERATOR));

    let buf = bytes(G2_TRIPLE_GENERATOR);
    let (decoded, _) = G2Affine::from_slice(&buf).unwrap();
    assert_eq!(decoded, triple);
}

#[test]
fn test_g2_identity_is_all_zeros() {
    assert_eq!(G2Affine::identity().to_bytes(), [0u8; 128]);
    let (q, rest) = G2Affine::from_slice(&[0u8; 130]).unwrap();
    assert!(bool::from(q.is_identity()));
    assert_eq!(rest.len(), 2);
}

#[test]
fn test_g2_rejects_bad_encodings() {
    assert!(matches!(
        G2Affine::from_slice(&bytes(G2_GENERATOR)[..100]),
        Err(Error::Length { expected: 128, actual: 100, .. })
    ));

    // flip a bit of y.real: the point falls off the twist
    let mut tampered = bytes(G2_GENERATOR);
    tampered[127] ^= 1;
    assert!(matches!(
        G2Affine::from_slice(&tampered),
        Err(Error::Point { context: "G2", .. })
    ));

    // a coordinate equal to p
    let mut input = bytes(G2_GENERATOR);
    input[32..64].copy_from_slice(&bytes(P_HEX));
    assert!(matches!(
        G2Affine::from_slice(&input),
        Err(Error::Point { context: "G2", .. })
    ));
}

#[test]
fn test_g2_rejects_wrong_subgroup() {
    let input = bytes(G2_WRONG_SUBGROUP);
    assert_eq!(
        G2Affine::from_slice(&input).unwrap_err(),
        Error::point("G2", "malformed point")
    );
    assert!(matches!(
        G2Affine::unmarshal(&input),
        Err(bn256_api::Error::InvalidPoint { context: "G2", .. })
    ));
}

// ============================================================================
// GT Serialization Tests
// ============================================================================

#[test]
fn test_gt_known_encoding() {
    assert_eq!(Gt::generator().to_bytes().to_vec(), bytes(GT_GENERATOR));

    let buf = bytes(GT_GENERATOR);
    let (g, rest) = Gt::unmarshal(&buf).unwrap();
    assert_eq!(g, Gt::generator());
    assert!(rest.is_empty());

    let g3 = Gt::generator() * BigUint::from(3u32);
    let (decoded, _) = Gt::from_slice(&g3.marshal()).unwrap();
    assert_eq!(decoded, g3);
}

#[test]
fn test_gt_rejects_bad_encodings() {
    assert!(matches!(
        Gt::from_slice(&[0u8; 383]),
        Err(Error::Length { context: "GT", .. })
    ));

    // the constant 2 is a field element but not in the order-n subgroup
    let mut two = [0u8; 384];
    two[383] = 2;
    assert!(matches!(
        Gt::from_slice(&two),
        Err(Error::Point { context: "GT", .. })
    ));

    // all zeros is not the identity in GT
    assert!(Gt::from_slice(&[0u8; 384]).is_err());

    let mut input = bytes(GT_GENERATOR);
    input[..32].copy_from_slice(&bytes(P_HEX));
    assert!(Gt::from_slice(&input).is_err());
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_json() {
    let p = G1Affine::from(G1Projective::generator() * BigUint::from(77u32));
    let json = serde_json::to_string(&p).unwrap();
    let back: G1Affine = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);

    let q = G2Affine::generator();
    let back: G2Affine = serde_json::from_str(&serde_json::to_string(&q).unwrap()).unwrap();
    assert_eq!(back, q);

    let g = Gt::generator();
    let back: Gt = serde_json::from_str(&serde_json::to_string(&g).unwrap()).unwrap();
    assert_eq!(back, g);

    // validation still applies
    let bad = serde_json::to_string(&vec![1u8; 64]).unwrap();
    assert!(serde_json::from_str::<G1Affine>(&bad).is_err());
}
