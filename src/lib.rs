//! Pure Rust implementation of the secp256k1 elliptic curve and the
//! cryptographic primitives built on it.
//!
//! ## About secp256k1
//!
//! Specified in Certicom's SECG in SEC 2: Recommended Elliptic Curve
//! Domain Parameters:
//!
//! <https://www.secg.org/sec2-v2.pdf>
//!
//! The curve's equation is `y² = x³ + 7` over a ~256-bit prime field.
//!
//! It's primarily notable for its use in Bitcoin and other
//! cryptocurrencies.
//!
//! ## What this crate provides
//!
//! - [`ecdsa`]: deterministic ECDSA signing (RFC 6979), verification, and
//!   public key recovery, with DER and 65-byte compact serialization
//! - [`ecdh`]: Diffie-Hellman key agreement over the raw x-coordinate
//! - [`SecretKey`] / [`PublicKey`]: raw scalar and SEC1 key encodings
//! - [`arithmetic`]: the underlying field, scalar, and group operations
//!
//! ## ⚠️ Security Warning
//!
//! The arithmetic in this crate is written for clarity and is **not
//! constant time**. Do not use it where a local attacker can measure
//! timing.
//!
//! ## Example
//!
//! ```
//! use koblitz256::ecdsa::{Signature, SigningKey};
//! use rand_core::OsRng; // requires 'getrandom' feature
//! use signature::{Signer, Verifier};
//!
//! let signing_key = SigningKey::random(&mut OsRng);
//! let message = b"ECDSA proves knowledge of a secret number in the context of a single message";
//! let signature: Signature = signing_key.sign(message);
//!
//! let verifying_key = signing_key.verifying_key();
//! assert!(verifying_key.verify(message, &signature).is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod arithmetic;
pub mod ecdh;
pub mod ecdsa;
pub mod encoding;

mod error;
mod public_key;
mod secret_key;

pub use crate::{
    arithmetic::{AffinePoint, FieldElement, ProjectivePoint, Scalar},
    encoding::Encoding,
    error::{Error, Result},
    public_key::PublicKey,
    secret_key::SecretKey,
};
