//! Deterministic nonce generation per RFC 6979, over HMAC-SHA-256.
//!
//! The candidate loop here differs from a plain `k` generator: each
//! in-range candidate is handed to a trial closure which performs the
//! actual signing attempt, so that candidates producing `r = 0` or `s = 0`
//! are rejected with the same refresh step as out-of-range candidates.

use crate::arithmetic::{Scalar, CURVE_ORDER};
use crate::{Error, Result};
use hmac::{Hmac, Mac};
use num_bigint::BigUint;
use num_traits::Zero;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Iteration bound on the candidate loop. Exceeding it means the HMAC
/// stream never produced a usable nonce, which is an invariant violation.
const MAX_ATTEMPTS: usize = 1000;

fn hmac_sha256(key: &[u8; 32], parts: &[&[u8]]) -> [u8; 32] {
    let mut mac =
        HmacSha256::new_from_slice(key).expect("HMAC-SHA-256 accepts keys of any length");
    for part in parts {
        mac.update(part);
    }
    mac.finalize().into_bytes().into()
}

/// Runs the RFC 6979 nonce search for the secret scalar bytes `secret` and
/// message digest `digest`, handing each candidate `k` to `trial`.
///
/// `trial` returns `Some` with the finished signing output to accept the
/// candidate, or `None` to reject it and continue the search.
pub(crate) fn generate_k<T, F>(secret: &[u8; 32], digest: &[u8], mut trial: F) -> Result<T>
where
    F: FnMut(&Scalar) -> Option<T>,
{
    // V = 0x01 * 32, K = 0x00 * 32, then two seeding rounds. The ordering
    // of the seed updates is part of the standard.
    let mut k = [0u8; 32];
    let mut v = [1u8; 32];
    k = hmac_sha256(&k, &[&v, &[0x00], secret, digest]);
    v = hmac_sha256(&k, &[&v]);
    k = hmac_sha256(&k, &[&v, &[0x01], secret, digest]);
    v = hmac_sha256(&k, &[&v]);

    for _ in 0..MAX_ATTEMPTS {
        v = hmac_sha256(&k, &[&v]);

        let t = BigUint::from_bytes_be(&v);
        if !t.is_zero() && t < *CURVE_ORDER {
            if let Some(output) = Scalar::from_uint(t).and_then(|candidate| trial(&candidate)) {
                return Ok(output);
            }
        }

        // Refresh step, shared by the out-of-range and rejected-trial
        // paths.
        k = hmac_sha256(&k, &[&v, &[0x00]]);
        v = hmac_sha256(&k, &[&v]);
    }

    Err(Error::NonceExhausted)
}
