//! Elliptic Curve Diffie-Hellman (Ephemeral) Support.
//!
//! The shared secret is the raw big-endian x-coordinate of `d·Q`; no key
//! derivation function is applied. Both sides arrive at the same value:
//! `d_A·Q_B = d_A·d_B·G = d_B·Q_A`.

use crate::{PublicKey, SecretKey};
use rand_core::CryptoRngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Shared secret value computed via ECDH key agreement.
pub struct SharedSecret {
    secret_bytes: [u8; 32],
}

impl SharedSecret {
    /// Borrows the raw 32-byte shared secret.
    ///
    /// # ⚠️ Warning
    ///
    /// This is the raw ECDH x-coordinate with no hashing applied; feed it
    /// to a KDF before using it as symmetric key material.
    pub fn raw_secret_bytes(&self) -> &[u8; 32] {
        &self.secret_bytes
    }
}

impl Drop for SharedSecret {
    fn drop(&mut self) {
        self.secret_bytes.zeroize();
    }
}

impl ZeroizeOnDrop for SharedSecret {}

/// Computes the ECDH shared secret between a local secret key and a peer's
/// public key.
pub fn diffie_hellman(secret_key: &SecretKey, public_key: &PublicKey) -> SharedSecret {
    let shared_point = public_key
        .to_projective()
        .mul(&secret_key.to_scalar())
        .to_affine();
    SharedSecret {
        secret_bytes: shared_point.x(),
    }
}

/// Ephemeral Diffie-Hellman secret: a one-shot secret key that can only be
/// used to compute a single [`SharedSecret`] before being dropped.
pub struct EphemeralSecret {
    secret_key: SecretKey,
}

impl EphemeralSecret {
    /// Generates a fresh ephemeral secret from the given RNG.
    pub fn random(rng: &mut impl CryptoRngCore) -> Self {
        Self {
            secret_key: SecretKey::random(rng),
        }
    }

    /// Returns the public key to transmit to the peer.
    pub fn public_key(&self) -> PublicKey {
        self.secret_key.public_key()
    }

    /// Computes the shared secret with the peer's public key, consuming
    /// this ephemeral secret.
    pub fn diffie_hellman(self, public_key: &PublicKey) -> SharedSecret {
        diffie_hellman(&self.secret_key, public_key)
    }
}
