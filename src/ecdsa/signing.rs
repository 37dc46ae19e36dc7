//! Support for signing ECDSA signatures.
//!
//! Nonces are derived deterministically per RFC 6979, so signing the same
//! message with the same key and options is byte-for-byte reproducible.

use super::{digest_message, rfc6979, RecoveryId, SignOptions, Signature};
use super::VerifyingKey;
use crate::arithmetic::{ProjectivePoint, Scalar};
use crate::{Error, PublicKey, Result, SecretKey};
use core::fmt::{self, Debug};
use rand_core::CryptoRngCore;
use sha2::{Digest, Sha256};
use subtle::{Choice, ConstantTimeEq};

/// secp256k1 secret key used for signing messages and producing
/// signatures.
///
/// ## Usage
///
/// The [`signature`] crate defines the following traits which are the
/// primary API for signing:
///
/// - [`signature::Signer`]: sign a message with this key (SHA-256,
///   low-S normalized)
///
/// The inherent methods cover recoverable signatures, prehashed input, and
/// the full option matrix (digest selection, compact serialization,
/// transport encoding).
#[derive(Clone)]
pub struct SigningKey {
    /// Secret scalar.
    secret_scalar: Scalar,

    /// Verifying key for this signing key.
    verifying_key: VerifyingKey,
}

impl SigningKey {
    /// Generates a random [`SigningKey`] from the given RNG.
    pub fn random(rng: &mut impl CryptoRngCore) -> Self {
        Self::from(&SecretKey::random(rng))
    }

    /// Parses a signing key from a fixed-width big-endian secret scalar.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self> {
        Ok(Self::from(&SecretKey::from_bytes(bytes)?))
    }

    /// Parses a signing key from a byte slice containing a 32-byte secret
    /// scalar.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        Ok(Self::from(&SecretKey::from_slice(slice)?))
    }

    /// Serializes the secret scalar as bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.secret_scalar.to_bytes()
    }

    /// Borrows the secret scalar value.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material. Please treat it with the care it
    /// deserves!
    pub fn as_scalar(&self) -> &Scalar {
        &self.secret_scalar
    }

    /// Returns the [`VerifyingKey`] which corresponds to this key.
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Signs a prehashed message, returning an unnormalized signature
    /// carrying its recovery id.
    ///
    /// `prehash` is interpreted as a big-endian integer `e` (reduced modulo
    /// n) and also seeds the RFC 6979 nonce derivation. Each candidate `k`
    /// yields `Q = k·G`, `r = Q.x mod n`, `s = k⁻¹·(e + r·d) mod n`;
    /// candidates with `r = 0` or `s = 0` are rejected and the search
    /// continues.
    pub fn sign_prehash(&self, prehash: &[u8]) -> Result<Signature> {
        let e = Scalar::reduce_bytes(prehash);
        let d = &self.secret_scalar;
        let d_bytes = d.to_bytes();

        rfc6979::generate_k(&d_bytes, prehash, |k| {
            let big_r = ProjectivePoint::generator().mul(k).to_affine();
            let r = Scalar::reduce_bytes(&big_r.x());
            if r.is_zero() {
                return None;
            }

            let k_inv = k.invert()?;
            let s = k_inv.mul(&e.add(&r.mul(d)));
            if s.is_zero() {
                return None;
            }

            // Bit 0 of the recovery id is the parity of Q.y; bit 1 records
            // whether Q.x wrapped when reduced modulo n.
            let is_x_reduced = big_r.x() != r.to_bytes();
            let recovery_id = RecoveryId::new(big_r.y_is_odd(), is_x_reduced);

            Signature::from_scalars(r, s)
                .ok()
                .map(|sig| sig.with_recovery_id(recovery_id))
        })
    }

    /// Signs a message with SHA-256 and low-S normalization, returning the
    /// signature together with its recovery id.
    pub fn sign_recoverable(&self, message: &[u8]) -> Result<(Signature, RecoveryId)> {
        let signature = self.sign_prehash(&Sha256::digest(message))?.normalize_s();
        let recovery_id = signature.recovery_id().ok_or(Error::RecoveryId)?;
        Ok((signature, recovery_id))
    }

    /// Signs a message under the full option matrix, returning the
    /// serialized (and possibly transport-encoded) signature bytes
    /// together with the recovery id.
    ///
    /// Defaults: SHA-256, low-S normalization on, DER serialization, no
    /// transport encoding, compressed flag inherited from the key.
    pub fn sign_with_options(
        &self,
        message: &[u8],
        options: &SignOptions,
    ) -> Result<(Vec<u8>, RecoveryId)> {
        let prehash = digest_message(options.digest, message);
        let mut signature = self.sign_prehash(&prehash)?;
        if options.normalize {
            signature = signature.normalize_s();
        }
        let recovery_id = signature.recovery_id().ok_or(Error::RecoveryId)?;

        let serialized = if options.compact {
            let compressed = options
                .compressed
                .unwrap_or_else(|| self.verifying_key.public_key().is_compressed());
            signature.to_compact(compressed)?.to_vec()
        } else {
            signature.to_der()
        };

        let bytes = match options.encoding {
            Some(encoding) => encoding.encode(&serialized).into_bytes(),
            None => serialized,
        };

        Ok((bytes, recovery_id))
    }
}

//
// `*Signer` trait impls
//

impl signature::Signer<Signature> for SigningKey {
    /// Signs the message with SHA-256 and low-S normalization.
    fn try_sign(&self, message: &[u8]) -> core::result::Result<Signature, signature::Error> {
        self.sign_recoverable(message)
            .map(|(sig, _)| sig)
            .map_err(|_| signature::Error::new())
    }
}

impl signature::Keypair for SigningKey {
    type VerifyingKey = VerifyingKey;

    fn verifying_key(&self) -> VerifyingKey {
        self.verifying_key.clone()
    }
}

//
// Other trait impls
//

impl From<&SecretKey> for SigningKey {
    fn from(secret_key: &SecretKey) -> SigningKey {
        let secret_scalar = secret_key.to_scalar();
        let verifying_key = VerifyingKey::new(PublicKey::from_secret_scalar(&secret_scalar));
        SigningKey {
            secret_scalar,
            verifying_key,
        }
    }
}

impl From<SecretKey> for SigningKey {
    fn from(secret_key: SecretKey) -> SigningKey {
        SigningKey::from(&secret_key)
    }
}

impl ConstantTimeEq for SigningKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_bytes().as_ref().ct_eq(other.to_bytes().as_ref())
    }
}

/// Constant-time comparison.
impl PartialEq for SigningKey {
    fn eq(&self, other: &SigningKey) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SigningKey {}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}
