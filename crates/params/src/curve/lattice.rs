//! Reduced lattice bases for GLV scalar decomposition
//!
//! Integers are stored as signed decimal strings and parsed into big
//! integers on first use.

/// Basis of the 2-dimensional lattice {(a, b) : a + b·λ ≡ 0 mod n}
/// used to split scalars for G1 and G2
pub const CURVE_LATTICE_VECTORS: [[&str; 2]; 2] = [
    [
        "254952053719217182009119236802174855688",
        "254952053719217182022156415784332439563",
    ],
    [
        "254952053719217182035193594766490023438",
        "-254952053719217181996082057820017271813",
    ],
];

/// First row of the adjugate of the curve basis
pub const CURVE_LATTICE_INVERSE: [&str; 2] = [
    "254952053719217181996082057820017271813",
    "254952053719217182022156415784332439563",
];

/// Determinant of the curve basis
pub const CURVE_LATTICE_DET: &str =
    "130001099391293207465592877484719811485140812107807572779762125938088333599938";

/// Basis of the 4-dimensional lattice {v : Σ vᵢ·pⁱ ≡ 0 mod n} used to split
/// exponents for GT
pub const TARGET_LATTICE_VECTORS: [[&str; 4]; 4] = [
    [
        "13037178982157583874",
        "13037178982157583875",
        "13037178982157583875",
        "13037178982157583875",
    ],
    [
        "6518589491078791938",
        "6518589491078791937",
        "6518589491078791937",
        "-13037178982157583874",
    ],
    [
        "13037178982157583875",
        "-6518589491078791937",
        "-6518589491078791938",
        "-6518589491078791937",
    ],
    [
        "6518589491078791936",
        "26074357964315167750",
        "-13037178982157583873",
        "6518589491078791936",
    ],
];

/// First row of the adjugate of the target basis
pub const TARGET_LATTICE_INVERSE: [&str; 4] = [
    "1661927778103044753630928116985183243902389359598104203531",
    "84984017906405727351583121079908799750",
    "3323855556206089507261856233970366487798260129705129615125",
    "-84984017906405727338545942097751215875",
];

/// Determinant of the target basis (the group order)
pub const TARGET_LATTICE_DET: &str = super::bn256::BN256_ORDER_DECIMAL;
