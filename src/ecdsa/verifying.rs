//! Support for verifying ECDSA signatures and recovering the signer's
//! public key from a signature.

use super::{digest_message, RecoverOptions, RecoveryId, Signature, VerifyOptions};
use crate::arithmetic::{AffinePoint, ProjectivePoint, Scalar};
use crate::{Error, PublicKey, Result};
use sha2::{Digest, Sha256};

/// secp256k1 public key used for verifying signatures are valid for a
/// given message.
///
/// ## Usage
///
/// The [`signature`] crate defines the following traits which are the
/// primary API for verifying:
///
/// - [`signature::Verifier`]: verify a message against this key and a
///   provided signature (SHA-256)
///
/// The inherent methods cover prehashed input, the full option matrix, and
/// public key recovery.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifyingKey {
    /// Signer's public key.
    public_key: PublicKey,
}

impl VerifyingKey {
    /// Initializes a [`VerifyingKey`] from a public key.
    pub fn new(public_key: PublicKey) -> Self {
        Self { public_key }
    }

    /// Initializes a [`VerifyingKey`] from an affine point.
    ///
    /// Returns an error if the given point is the additive identity.
    pub fn from_affine(affine: AffinePoint) -> Result<Self> {
        Ok(Self::new(PublicKey::from_affine(affine)?))
    }

    /// Parses a [`VerifyingKey`] from a SEC1-encoded public key.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self::new(PublicKey::from_sec1_bytes(bytes)?))
    }

    /// Borrows the inner [`PublicKey`].
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Borrows the inner [`AffinePoint`] for this public key.
    pub fn as_affine(&self) -> &AffinePoint {
        self.public_key.as_affine()
    }

    /// Serializes the key in its preferred SEC1 form.
    pub fn to_sec1_bytes(&self) -> Vec<u8> {
        self.public_key.to_sec1_bytes()
    }

    /// Verifies a signature against a prehashed message.
    ///
    /// With `e` the prehash reduced modulo n and `i = s⁻¹`, computes
    /// `R' = e·i·G + r·i·Q` and accepts iff `R'` is not the identity and
    /// its x-coordinate reduces to `r`.
    pub fn verify_prehash(&self, prehash: &[u8], signature: &Signature) -> Result<()> {
        let e = Scalar::reduce_bytes(prehash);
        let s_inv = signature.s().invert().ok_or(Error::Verification)?;
        let u1 = e.mul(&s_inv);
        let u2 = signature.r().mul(&s_inv);

        let candidate = (ProjectivePoint::generator().mul(&u1)
            + &self.public_key.to_projective().mul(&u2))
            .to_affine();

        if candidate.is_identity() {
            return Err(Error::Verification);
        }
        if &Scalar::reduce_bytes(&candidate.x()) == signature.r() {
            Ok(())
        } else {
            Err(Error::Verification)
        }
    }

    /// Verifies serialized signature bytes under the full option matrix.
    ///
    /// The bytes are transport-decoded first (if an encoding is selected)
    /// and then shape-dispatched between DER and compact. Undecodable
    /// input surfaces as a parse error ([`Error::Decode`] /
    /// [`Error::SignatureMalformed`]), distinct from
    /// [`Error::Verification`].
    pub fn verify_with_options(
        &self,
        message: &[u8],
        signature: &[u8],
        options: &VerifyOptions,
    ) -> Result<()> {
        let raw = match options.encoding {
            Some(encoding) => encoding.decode(signature)?,
            None => signature.to_vec(),
        };
        let signature = Signature::from_slice(&raw)?;
        self.verify_prehash(&digest_message(options.digest, message), &signature)
    }

    /// Recovers the signer's [`VerifyingKey`] from a SHA-256 digest of the
    /// message, a signature over it, and a recovery id.
    pub fn recover_from_msg(
        message: &[u8],
        signature: &Signature,
        recovery_id: RecoveryId,
    ) -> Result<Self> {
        Self::recover_from_prehash(&Sha256::digest(message), signature, recovery_id)
    }

    /// Recovers the signer's [`VerifyingKey`] from a prehashed message, a
    /// signature over it, and a recovery id.
    ///
    /// The candidate point `R` is decompressed from `r` with the parity
    /// selected by bit 0 of the recovery id, and the key is
    /// `Q = r⁻¹·(s·R − e·G)`. Bit 1 of the recovery id (which would mean
    /// `R.x = r + n`) is accepted but not acted on; recovering such a
    /// signature is unsupported.
    pub fn recover_from_prehash(
        prehash: &[u8],
        signature: &Signature,
        recovery_id: RecoveryId,
    ) -> Result<Self> {
        let r = signature.r();
        let s = signature.s();
        if r.is_zero() || s.is_zero() {
            return Err(Error::SignatureMalformed);
        }

        let big_r = AffinePoint::decompress(&r.to_bytes(), recovery_id.is_y_odd())
            .ok_or(Error::Verification)?;

        let r_inv = r.invert().ok_or(Error::Verification)?;
        let e = Scalar::reduce_bytes(prehash);

        let public_point = (ProjectivePoint::from(big_r).mul(s)
            - &ProjectivePoint::generator().mul(&e))
            .mul(&r_inv)
            .to_affine();

        if public_point.is_identity() {
            return Err(Error::Verification);
        }
        Self::from_affine(public_point)
    }

    /// Recovers the signer's [`PublicKey`] from serialized signature bytes
    /// under the full option matrix.
    ///
    /// The signature is transport-decoded, shape-dispatched, and low-S
    /// normalized before recovery. The recovery id comes from the compact
    /// form when present, otherwise from the options; if neither supplies
    /// one this fails with [`Error::RecoveryId`]. A compact prefix in the
    /// 27–30 family marks the recovered key as preferring the uncompressed
    /// SEC1 form.
    pub fn recover_with_options(
        message: &[u8],
        signature: &[u8],
        options: &RecoverOptions,
    ) -> Result<PublicKey> {
        let raw = match options.encoding {
            Some(encoding) => encoding.decode(signature)?,
            None => signature.to_vec(),
        };

        let parsed = Signature::from_slice(&raw)?;
        let compressed = if parsed.recovery_id().is_some() {
            Signature::compact_prefix_is_compressed(raw[0])
        } else {
            true
        };

        let normalized = parsed.normalize_s();
        let recovery_id = normalized
            .recovery_id()
            .or(options.recovery_id)
            .ok_or(Error::RecoveryId)?;

        let prehash = digest_message(options.digest, message);
        let recovered = Self::recover_from_prehash(&prehash, &normalized, recovery_id)?;
        Ok(recovered.public_key.with_compression(compressed))
    }
}

//
// `*Verifier` trait impls
//

impl signature::Verifier<Signature> for VerifyingKey {
    /// Verifies the signature over a SHA-256 digest of the message.
    fn verify(
        &self,
        message: &[u8],
        signature: &Signature,
    ) -> core::result::Result<(), signature::Error> {
        self.verify_prehash(&Sha256::digest(message), signature)
            .map_err(|_| signature::Error::new())
    }
}

impl From<PublicKey> for VerifyingKey {
    fn from(public_key: PublicKey) -> VerifyingKey {
        VerifyingKey::new(public_key)
    }
}

impl From<&VerifyingKey> for PublicKey {
    fn from(verifying_key: &VerifyingKey) -> PublicKey {
        verifying_key.public_key.clone()
    }
}
