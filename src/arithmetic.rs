//! A pure-Rust implementation of group operations on secp256k1.
//!
//! Curve parameters (SEC 2, "Recommended Elliptic Curve Domain
//! Parameters"):
//!
//! ```text
//! p = FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE FFFFFC2F
//! a = 0
//! b = 7
//! n = FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE BAAEDCE6 AF48A03B BFD25E8C D0364141
//! h = 1
//! ```
//!
//! The parameters are immutable process-wide singletons, initialized on
//! first use and shared read-only after that.

mod affine;
mod field;
pub(crate) mod modular;
mod projective;
mod scalar;

pub use affine::AffinePoint;
pub use field::FieldElement;
pub use projective::ProjectivePoint;
pub use scalar::Scalar;

use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// p = 2²⁵⁶ − 2³² − 977, big-endian.
const FIELD_MODULUS_BYTES: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xff, 0xff,
    0xfc, 0x2f,
];

/// Order of the secp256k1 group (i.e. the scalar modulus), big-endian.
const CURVE_ORDER_BYTES: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xfe, 0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36,
    0x41, 0x41,
];

/// Basepoint x-coordinate:
/// `79be667e f9dcbbac 55a06295 ce870b07 029bfcdb 2dce28d9 59f2815b 16f81798`.
pub(crate) const GENERATOR_X_BYTES: [u8; 32] = [
    0x79, 0xbe, 0x66, 0x7e, 0xf9, 0xdc, 0xbb, 0xac, 0x55, 0xa0, 0x62, 0x95, 0xce, 0x87, 0x0b,
    0x07, 0x02, 0x9b, 0xfc, 0xdb, 0x2d, 0xce, 0x28, 0xd9, 0x59, 0xf2, 0x81, 0x5b, 0x16, 0xf8,
    0x17, 0x98,
];

/// Basepoint y-coordinate:
/// `483ada77 26a3c465 5da4fbfc 0e1108a8 fd17b448 a6855419 9c47d08f fb10d4b8`.
pub(crate) const GENERATOR_Y_BYTES: [u8; 32] = [
    0x48, 0x3a, 0xda, 0x77, 0x26, 0xa3, 0xc4, 0x65, 0x5d, 0xa4, 0xfb, 0xfc, 0x0e, 0x11, 0x08,
    0xa8, 0xfd, 0x17, 0xb4, 0x48, 0xa6, 0x85, 0x54, 0x19, 0x9c, 0x47, 0xd0, 0x8f, 0xfb, 0x10,
    0xd4, 0xb8,
];

/// b coefficient of the curve equation `y² = x³ + 7`. The a coefficient is
/// zero and the cofactor is one.
pub(crate) const CURVE_EQUATION_B: u32 = 7;

/// Prime modulus of the base field.
pub(crate) static FIELD_MODULUS: Lazy<BigUint> =
    Lazy::new(|| BigUint::from_bytes_be(&FIELD_MODULUS_BYTES));

/// Order of the group generated by the basepoint.
pub(crate) static CURVE_ORDER: Lazy<BigUint> =
    Lazy::new(|| BigUint::from_bytes_be(&CURVE_ORDER_BYTES));

/// n / 2, the low-S boundary.
pub(crate) static CURVE_ORDER_HALF: Lazy<BigUint> = Lazy::new(|| &*CURVE_ORDER >> 1u32);
