//! secp256k1 public keys.

use crate::arithmetic::{AffinePoint, FieldElement, ProjectivePoint, Scalar};
use crate::{Error, Result};

/// SEC1 tag for a compressed point with an even y-coordinate.
const SEC1_TAG_COMPRESSED_EVEN: u8 = 0x02;

/// SEC1 tag for a compressed point with an odd y-coordinate.
const SEC1_TAG_COMPRESSED_ODD: u8 = 0x03;

/// SEC1 tag for an uncompressed point.
const SEC1_TAG_UNCOMPRESSED: u8 = 0x04;

/// secp256k1 public key: a non-identity affine curve point plus a
/// serialization preference.
///
/// The `compressed` flag records which SEC1 form the key was parsed from
/// (or was requested at construction) and drives [`PublicKey::to_sec1_bytes`]
/// and the compact-signature prefix family. Equality compares the point
/// only; the preference does not change which key this is.
#[derive(Clone, Debug)]
pub struct PublicKey {
    point: AffinePoint,
    compressed: bool,
}

impl PublicKey {
    /// Parses a public key from its SEC1 encoding: 33-byte compressed
    /// (`0x02`/`0x03` tag) or 65-byte uncompressed (`0x04` tag).
    ///
    /// The point is validated to be on the curve; the `compressed`
    /// preference reflects the input form.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        match (bytes.len(), bytes.first()) {
            (33, Some(&tag @ (SEC1_TAG_COMPRESSED_EVEN | SEC1_TAG_COMPRESSED_ODD))) => {
                let x: &[u8; 32] = bytes[1..33].try_into().expect("length checked above");
                let y_is_odd = tag == SEC1_TAG_COMPRESSED_ODD;
                let point = AffinePoint::decompress(x, y_is_odd).ok_or(Error::PublicKey)?;
                Ok(Self {
                    point,
                    compressed: true,
                })
            }
            (65, Some(&SEC1_TAG_UNCOMPRESSED)) => {
                let x: &[u8; 32] = bytes[1..33].try_into().expect("length checked above");
                let y: &[u8; 32] = bytes[33..65].try_into().expect("length checked above");
                let x = FieldElement::from_bytes(x).ok_or(Error::PublicKey)?;
                let y = FieldElement::from_bytes(y).ok_or(Error::PublicKey)?;
                let point = AffinePoint::new(x, y);
                if !point.is_on_curve() {
                    return Err(Error::PublicKey);
                }
                Ok(Self {
                    point,
                    compressed: false,
                })
            }
            _ => Err(Error::PublicKey),
        }
    }

    /// Builds a public key from an affine point.
    ///
    /// Returns [`Error::PublicKey`] if the point is the additive identity.
    pub fn from_affine(point: AffinePoint) -> Result<Self> {
        if point.is_identity() {
            return Err(Error::PublicKey);
        }
        Ok(Self {
            point,
            compressed: true,
        })
    }

    /// Derives the public key for a secret scalar as `d·G`.
    pub(crate) fn from_secret_scalar(scalar: &Scalar) -> Self {
        let point = ProjectivePoint::generator().mul(scalar).to_affine();
        Self {
            point,
            compressed: true,
        }
    }

    /// Borrows the inner affine point.
    pub fn as_affine(&self) -> &AffinePoint {
        &self.point
    }

    /// Converts the point to projective coordinates.
    pub fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint::from(&self.point)
    }

    /// Does this key prefer the compressed SEC1 form?
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// Returns the same key with the given serialization preference.
    pub fn with_compression(mut self, compressed: bool) -> Self {
        self.compressed = compressed;
        self
    }

    /// Serializes the key in its preferred SEC1 form.
    pub fn to_sec1_bytes(&self) -> Vec<u8> {
        self.to_encoded_point(self.compressed)
    }

    /// Serializes the key in the requested SEC1 form: 33 bytes compressed,
    /// 65 bytes uncompressed.
    pub fn to_encoded_point(&self, compress: bool) -> Vec<u8> {
        if compress {
            let mut encoded = Vec::with_capacity(33);
            encoded.push(if self.point.y_is_odd() {
                SEC1_TAG_COMPRESSED_ODD
            } else {
                SEC1_TAG_COMPRESSED_EVEN
            });
            encoded.extend_from_slice(&self.point.x());
            encoded
        } else {
            let mut encoded = Vec::with_capacity(65);
            encoded.push(SEC1_TAG_UNCOMPRESSED);
            encoded.extend_from_slice(&self.point.x());
            encoded.extend_from_slice(&self.point.y());
            encoded
        }
    }
}

impl From<&crate::SecretKey> for PublicKey {
    fn from(secret_key: &crate::SecretKey) -> PublicKey {
        secret_key.public_key()
    }
}

/// Equality of the curve point; the serialization preference is ignored.
impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl Eq for PublicKey {}
