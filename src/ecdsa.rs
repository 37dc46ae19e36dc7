//! Elliptic Curve Digital Signature Algorithm (ECDSA).
//!
//! This module contains support for computing and verifying ECDSA
//! signatures, including public key recovery from a recoverable
//! signature.
//!
//! ## Signing/Verification Example
//!
//! ```
//! use koblitz256::ecdsa::{Signature, SigningKey};
//! use rand_core::OsRng; // requires 'getrandom' feature
//! use signature::{Signer, Verifier};
//!
//! // Signing
//! let signing_key = SigningKey::random(&mut OsRng);
//! let message = b"ECDSA proves knowledge of a secret number in the context of a single message";
//! let signature: Signature = signing_key.sign(message);
//!
//! // Verification
//! let verifying_key = signing_key.verifying_key();
//! assert!(verifying_key.verify(message, &signature).is_ok());
//! ```

pub(crate) mod rfc6979;
mod sig;
mod signing;
mod verifying;

pub use self::{
    sig::{RecoveryId, Signature},
    signing::SigningKey,
    verifying::VerifyingKey,
};

use crate::encoding::Encoding;
use sha2::{Digest, Sha256, Sha384, Sha512};

/// Message digest selection for signing and verification.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum DigestAlgorithm {
    /// SHA-256 (the default).
    #[default]
    Sha256,
    /// SHA-384.
    Sha384,
    /// SHA-512. The full 64-byte digest is interpreted as the integer `e`
    /// and reduced modulo n, without the FIPS 186-4 bit-length truncation.
    Sha512,
    /// No digest: the message bytes are used verbatim.
    None,
}

/// Computes the selected digest of `message` (or passes it through).
pub(crate) fn digest_message(algorithm: DigestAlgorithm, message: &[u8]) -> Vec<u8> {
    match algorithm {
        DigestAlgorithm::Sha256 => Sha256::digest(message).to_vec(),
        DigestAlgorithm::Sha384 => Sha384::digest(message).to_vec(),
        DigestAlgorithm::Sha512 => Sha512::digest(message).to_vec(),
        DigestAlgorithm::None => message.to_vec(),
    }
}

/// Options for [`SigningKey::sign_with_options`].
#[derive(Clone, Debug)]
pub struct SignOptions {
    /// Message digest to apply before signing.
    pub digest: DigestAlgorithm,

    /// Apply low-S normalization (BIP 62). Defaults to `true`.
    pub normalize: bool,

    /// Serialize as a 65-byte compact signature instead of DER.
    pub compact: bool,

    /// Transport encoding applied to the serialized signature.
    pub encoding: Option<Encoding>,

    /// Compressed-key flag for the compact prefix byte. Defaults to the
    /// signing key's own preference.
    pub compressed: Option<bool>,
}

impl Default for SignOptions {
    fn default() -> Self {
        Self {
            digest: DigestAlgorithm::Sha256,
            normalize: true,
            compact: false,
            encoding: None,
            compressed: None,
        }
    }
}

/// Options for [`VerifyingKey::verify_with_options`].
#[derive(Clone, Debug, Default)]
pub struct VerifyOptions {
    /// Message digest to apply before verifying.
    pub digest: DigestAlgorithm,

    /// Transport encoding the signature bytes are wrapped in.
    pub encoding: Option<Encoding>,
}

/// Options for [`VerifyingKey::recover_with_options`].
#[derive(Clone, Debug, Default)]
pub struct RecoverOptions {
    /// Message digest to apply before recovering.
    pub digest: DigestAlgorithm,

    /// Transport encoding the signature bytes are wrapped in.
    pub encoding: Option<Encoding>,

    /// Recovery id to use when the signature itself does not carry one
    /// (i.e. it was parsed from DER).
    pub recovery_id: Option<RecoveryId>,
}
