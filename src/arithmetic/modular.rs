//! Modular arithmetic helpers on arbitrary-precision integers.
//!
//! These operate on raw [`BigUint`]/[`BigInt`] values; the typed wrappers in
//! [`field`](super::field) and [`scalar`](super::scalar) are the interface
//! the rest of the crate uses.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Returns the non-negative remainder of `x` modulo `m`, in `[0, m)`, for
/// signed `x`.
pub(crate) fn floor_mod(x: &BigInt, m: &BigUint) -> BigUint {
    let modulus = BigInt::from(m.clone());
    x.mod_floor(&modulus)
        .to_biguint()
        .expect("mod_floor by a positive modulus is non-negative")
}

/// Returns the modular multiplicative inverse of `x` modulo `m` via the
/// extended Euclidean algorithm.
///
/// Returns 0 when no inverse exists (`x = 0` or `gcd(x, m) ≠ 1`); callers
/// must treat a 0 result as "undefined".
pub(crate) fn mod_inv(x: &BigUint, m: &BigUint) -> BigUint {
    if x.is_zero() || m.is_zero() {
        return BigUint::zero();
    }

    let mut r = BigInt::from(m.clone());
    let mut new_r = BigInt::from(x % m);
    let mut t = BigInt::zero();
    let mut new_t = BigInt::one();

    while !new_r.is_zero() {
        let quotient = &r / &new_r;
        let next_t = &t - &quotient * &new_t;
        let next_r = &r - &quotient * &new_r;
        t = new_t;
        new_t = next_t;
        r = new_r;
        new_r = next_r;
    }

    if !r.is_one() {
        return BigUint::zero();
    }

    floor_mod(&t, m)
}

/// Integer exponentiation by repeated multiplication. Small exponents only.
pub(crate) fn ipow(base: &BigUint, exp: u32) -> BigUint {
    let mut acc = BigUint::one();
    for _ in 0..exp {
        acc *= base;
    }
    acc
}

/// Modular square root for `p ≡ 3 (mod 4)`: the candidate is
/// `a^((p+1)/4) mod p`, which is a root iff `a` is a quadratic residue.
pub(crate) fn mod_sqrt(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    let exp = (p + 1u32) >> 2u32;
    let root = a.modpow(&exp, p);
    if (&root * &root) % p == a % p {
        Some(root)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{floor_mod, ipow, mod_inv, mod_sqrt};
    use crate::arithmetic::FIELD_MODULUS;
    use num_bigint::{BigInt, BigUint};
    use num_traits::{One, Zero};

    #[test]
    fn floor_mod_of_negative_input() {
        let m = BigUint::from(7u32);
        assert_eq!(floor_mod(&BigInt::from(-3), &m), BigUint::from(4u32));
        assert_eq!(floor_mod(&BigInt::from(10), &m), BigUint::from(3u32));
    }

    #[test]
    fn inverse_round_trips() {
        let m = &*FIELD_MODULUS;
        let x = BigUint::from(0xdead_beefu32);
        let inv = mod_inv(&x, m);
        assert_eq!((&x * &inv) % m, BigUint::one());
    }

    #[test]
    fn inverse_of_zero_is_zero() {
        assert!(mod_inv(&BigUint::zero(), &FIELD_MODULUS).is_zero());
    }

    #[test]
    fn inverse_of_non_coprime_is_zero() {
        let m = BigUint::from(12u32);
        assert!(mod_inv(&BigUint::from(8u32), &m).is_zero());
    }

    #[test]
    fn ipow_small_exponents() {
        let three = BigUint::from(3u32);
        assert_eq!(ipow(&three, 0), BigUint::one());
        assert_eq!(ipow(&three, 3), BigUint::from(27u32));
    }

    #[test]
    fn sqrt_round_trips() {
        let m = &*FIELD_MODULUS;
        let x = BigUint::from(1234u32);
        let square = (&x * &x) % m;
        let root = mod_sqrt(&square, m).expect("square must have a root");
        assert!(root == x || &root + &x == *m);
    }

    #[test]
    fn sqrt_of_non_residue_is_none() {
        // 5 is a quadratic non-residue modulo the secp256k1 field prime.
        assert!(mod_sqrt(&BigUint::from(5u32), &FIELD_MODULUS).is_none());
    }
}
