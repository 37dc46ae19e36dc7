//! secp256k1 secret keys.

use crate::arithmetic::{Scalar, CURVE_ORDER};
use crate::{Error, PublicKey, Result};
use core::fmt::{self, Debug};
use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::CryptoRngCore;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// secp256k1 secret key: a scalar `d` with `1 ≤ d < n`, serialized as
/// 32 big-endian bytes.
///
/// The canonical byte copy is zeroized when the key is dropped.
#[derive(Clone)]
pub struct SecretKey {
    /// Big-endian scalar bytes, validated on construction.
    bytes: [u8; 32],
}

impl SecretKey {
    /// Generates a random [`SecretKey`] by rejection sampling over the
    /// caller-supplied cryptographically secure RNG.
    pub fn random(rng: &mut impl CryptoRngCore) -> Self {
        let mut bytes = [0u8; 32];
        loop {
            rng.fill_bytes(&mut bytes);
            let candidate = BigUint::from_bytes_be(&bytes);
            if !candidate.is_zero() && candidate < *CURVE_ORDER {
                return Self { bytes };
            }
        }
    }

    /// Parses a secret key from a fixed-width big-endian scalar.
    ///
    /// Returns [`Error::SecretKey`] unless `1 ≤ d < n`.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self> {
        let candidate = BigUint::from_bytes_be(bytes);
        if candidate.is_zero() || candidate >= *CURVE_ORDER {
            return Err(Error::SecretKey);
        }
        Ok(Self { bytes: *bytes })
    }

    /// Parses a secret key from a byte slice, which must be exactly
    /// 32 bytes.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let bytes: &[u8; 32] = slice.try_into().map_err(|_| Error::SecretKey)?;
        Self::from_bytes(bytes)
    }

    /// Serializes the raw secret scalar as a big-endian integer.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.bytes
    }

    /// Returns the secret scalar value.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material. Please treat it with the care it
    /// deserves!
    pub fn to_scalar(&self) -> Scalar {
        Scalar::from_bytes(&self.bytes).expect("secret key bytes are validated on construction")
    }

    /// Returns the [`PublicKey`] which corresponds to this secret key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_secret_scalar(&self.to_scalar())
    }
}

impl ConstantTimeEq for SecretKey {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        self.bytes.as_ref().ct_eq(other.bytes.as_ref())
    }
}

/// Constant-time comparison.
impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SecretKey {}

impl Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl ZeroizeOnDrop for SecretKey {}

impl TryFrom<&[u8]> for SecretKey {
    type Error = Error;

    fn try_from(slice: &[u8]) -> Result<Self> {
        Self::from_slice(slice)
    }
}
