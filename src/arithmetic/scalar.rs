//! Scalar field arithmetic modulo the group order n.

use super::{modular, CURVE_ORDER, CURVE_ORDER_HALF};
use core::ops::{Add, Mul, Neg, Sub};
use num_bigint::BigUint;
use num_traits::Zero;

/// An element of the scalar field of secp256k1, i.e. an integer modulo
///
/// ```text
/// n = FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE BAAEDCE6 AF48A03B BFD25E8C D0364141
/// ```
///
/// Secret scalars, signature components, and reduced message digests are
/// all `Scalar` values. The arithmetic is not constant time.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Scalar(BigUint);

impl Scalar {
    /// Returns the additive identity.
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Returns the multiplicative identity.
    pub fn one() -> Self {
        Self(BigUint::from(1u32))
    }

    /// Builds a scalar from a small integer.
    pub fn from_u64(value: u64) -> Self {
        Self(BigUint::from(value) % &*CURVE_ORDER)
    }

    /// Is this scalar zero?
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Is this scalar greater than n / 2?
    ///
    /// Signatures whose `s` component answers `true` here are malleable;
    /// see [BIP 62](https://github.com/bitcoin/bips/blob/master/bip-0062.mediawiki).
    pub fn is_high(&self) -> bool {
        self.0 > *CURVE_ORDER_HALF
    }

    /// Attempts to parse a scalar from a fixed-width big-endian encoding.
    /// Returns `None` if the value is not in `[0, n)`.
    pub fn from_bytes(bytes: &[u8; 32]) -> Option<Self> {
        Self::from_uint(BigUint::from_bytes_be(bytes))
    }

    /// Interprets big-endian bytes of any length as an integer and reduces
    /// it modulo n. This is how message digests become the integer `e`:
    /// the full digest is used, without bit-length truncation.
    pub fn reduce_bytes(bytes: &[u8]) -> Self {
        Self(BigUint::from_bytes_be(bytes) % &*CURVE_ORDER)
    }

    /// Checked conversion from a raw integer. Returns `None` if the value
    /// is not in `[0, n)`.
    pub(crate) fn from_uint(value: BigUint) -> Option<Self> {
        (value < *CURVE_ORDER).then(|| Self(value))
    }

    /// Borrows the raw integer value.
    pub(crate) fn as_uint(&self) -> &BigUint {
        &self.0
    }

    /// Returns the fixed-width big-endian encoding of this scalar.
    pub fn to_bytes(&self) -> [u8; 32] {
        let raw = self.0.to_bytes_be();
        let mut out = [0u8; 32];
        out[32 - raw.len()..].copy_from_slice(&raw);
        out
    }

    /// Returns `self + rhs mod n`.
    pub fn add(&self, rhs: &Self) -> Self {
        Self((&self.0 + &rhs.0) % &*CURVE_ORDER)
    }

    /// Returns `self - rhs mod n`.
    pub fn sub(&self, rhs: &Self) -> Self {
        Self((&*CURVE_ORDER + &self.0 - &rhs.0) % &*CURVE_ORDER)
    }

    /// Returns `self * rhs mod n`.
    pub fn mul(&self, rhs: &Self) -> Self {
        Self((&self.0 * &rhs.0) % &*CURVE_ORDER)
    }

    /// Returns `-self mod n`.
    pub fn negate(&self) -> Self {
        if self.is_zero() {
            Self::zero()
        } else {
            Self(&*CURVE_ORDER - &self.0)
        }
    }

    /// Returns the multiplicative inverse of this scalar, if it is
    /// non-zero.
    pub fn invert(&self) -> Option<Self> {
        let inv = modular::mod_inv(&self.0, &CURVE_ORDER);
        (!inv.is_zero()).then(|| Self(inv))
    }
}

impl Add for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        Scalar::add(&self, &rhs)
    }
}

impl Add<&Scalar> for &Scalar {
    type Output = Scalar;

    fn add(self, rhs: &Scalar) -> Scalar {
        Scalar::add(self, rhs)
    }
}

impl Add<&Scalar> for Scalar {
    type Output = Scalar;

    fn add(self, rhs: &Scalar) -> Scalar {
        Scalar::add(&self, rhs)
    }
}

impl Sub for Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Scalar) -> Scalar {
        Scalar::sub(&self, &rhs)
    }
}

impl Sub<&Scalar> for &Scalar {
    type Output = Scalar;

    fn sub(self, rhs: &Scalar) -> Scalar {
        Scalar::sub(self, rhs)
    }
}

impl Sub<&Scalar> for Scalar {
    type Output = Scalar;

    fn sub(self, rhs: &Scalar) -> Scalar {
        Scalar::sub(&self, rhs)
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        Scalar::mul(&self, &rhs)
    }
}

impl Mul<&Scalar> for &Scalar {
    type Output = Scalar;

    fn mul(self, rhs: &Scalar) -> Scalar {
        Scalar::mul(self, rhs)
    }
}

impl Mul<&Scalar> for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: &Scalar) -> Scalar {
        Scalar::mul(&self, rhs)
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        self.negate()
    }
}

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::Scalar;
    use hex_literal::hex;

    const ORDER_BYTES: [u8; 32] =
        hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");

    #[test]
    fn order_is_rejected_and_reduces_to_zero() {
        assert!(Scalar::from_bytes(&ORDER_BYTES).is_none());
        assert!(Scalar::reduce_bytes(&ORDER_BYTES).is_zero());
    }

    #[test]
    fn wide_reduction() {
        // 2^256 mod n == 2^256 - n (n is close to 2^256)
        let mut wide = [0u8; 33];
        wide[0] = 1;
        let reduced = Scalar::reduce_bytes(&wide);
        let expected = Scalar::from_bytes(&ORDER_BYTES.map(|b| !b))
            .unwrap()
            .add(&Scalar::one());
        assert_eq!(reduced, expected);
    }

    #[test]
    fn negate_round_trips() {
        let x = Scalar::from_u64(12345);
        assert!(x.add(&x.negate()).is_zero());
        assert!(Scalar::zero().negate().is_zero());
    }

    #[test]
    fn inversion_round_trips() {
        let x = Scalar::from_u64(0xfeed_f00d);
        let inv = x.invert().unwrap();
        assert_eq!(x.mul(&inv), Scalar::one());
        assert!(Scalar::zero().invert().is_none());
    }

    #[test]
    fn operator_impls_match_inherent_methods() {
        let a = Scalar::from_u64(100);
        let b = Scalar::from_u64(3);
        assert_eq!(&a + &b, Scalar::from_u64(103));
        assert_eq!(a.clone() - &b, Scalar::from_u64(97));
        assert_eq!(&a * &b, Scalar::from_u64(300));
        assert_eq!(-b.clone(), b.negate());
    }

    #[test]
    fn high_low_boundary() {
        // n/2 is low; n/2 + 1 is high.
        let half = hex!("7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF5D576E7357A4501DDFE92F46681B20A0");
        let half = Scalar::from_bytes(&half).unwrap();
        assert!(!half.is_high());
        assert!(half.add(&Scalar::one()).is_high());
    }
}
