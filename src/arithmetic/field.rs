//! Field arithmetic modulo p = 2²⁵⁶ − 2³² − 977.

use super::{modular, FIELD_MODULUS};
use core::ops::{Add, Mul, Neg, Sub};
use num_bigint::BigUint;
use num_traits::Zero;

/// An element of the secp256k1 base field.
///
/// The representation is a non-negative integer in `[0, p)`. The arithmetic
/// is written for clarity and is not constant time.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldElement(BigUint);

impl FieldElement {
    /// Returns the additive identity.
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Returns the multiplicative identity.
    pub fn one() -> Self {
        Self(BigUint::from(1u32))
    }

    /// Is this element zero?
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Is this element odd?
    pub fn is_odd(&self) -> bool {
        self.0.bit(0)
    }

    /// Attempts to parse a field element from a fixed-width big-endian
    /// encoding. Returns `None` if the value is not in `[0, p)`.
    pub fn from_bytes(bytes: &[u8; 32]) -> Option<Self> {
        let value = BigUint::from_bytes_be(bytes);
        (value < *FIELD_MODULUS).then(|| Self(value))
    }

    /// Returns the fixed-width big-endian encoding of this element.
    pub fn to_bytes(&self) -> [u8; 32] {
        let raw = self.0.to_bytes_be();
        let mut out = [0u8; 32];
        out[32 - raw.len()..].copy_from_slice(&raw);
        out
    }

    /// Builds an element from an arbitrary integer, reducing modulo p.
    pub(crate) fn from_uint_reduced(value: BigUint) -> Self {
        Self(value % &*FIELD_MODULUS)
    }

    /// Borrows the raw integer value.
    pub(crate) fn as_uint(&self) -> &BigUint {
        &self.0
    }

    /// Returns `self + rhs mod p`.
    pub fn add(&self, rhs: &Self) -> Self {
        Self((&self.0 + &rhs.0) % &*FIELD_MODULUS)
    }

    /// Returns `self - rhs mod p`.
    pub fn sub(&self, rhs: &Self) -> Self {
        Self((&*FIELD_MODULUS + &self.0 - &rhs.0) % &*FIELD_MODULUS)
    }

    /// Returns `self * rhs mod p`.
    pub fn mul(&self, rhs: &Self) -> Self {
        Self((&self.0 * &rhs.0) % &*FIELD_MODULUS)
    }

    /// Returns `self * self mod p`.
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Returns `2 * self mod p`.
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Returns `-self mod p`.
    pub fn negate(&self) -> Self {
        if self.is_zero() {
            Self::zero()
        } else {
            Self(&*FIELD_MODULUS - &self.0)
        }
    }

    /// Returns the multiplicative inverse of this element, if it is
    /// non-zero.
    pub fn invert(&self) -> Option<Self> {
        let inv = modular::mod_inv(&self.0, &FIELD_MODULUS);
        (!inv.is_zero()).then(|| Self(inv))
    }

    /// Returns the square root of this element, if it is a quadratic
    /// residue.
    pub fn sqrt(&self) -> Option<Self> {
        modular::mod_sqrt(&self.0, &FIELD_MODULUS).map(Self)
    }
}

impl Add for FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: FieldElement) -> FieldElement {
        FieldElement::add(&self, &rhs)
    }
}

impl Add<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: &FieldElement) -> FieldElement {
        FieldElement::add(self, rhs)
    }
}

impl Add<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: &FieldElement) -> FieldElement {
        FieldElement::add(&self, rhs)
    }
}

impl Sub for FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: FieldElement) -> FieldElement {
        FieldElement::sub(&self, &rhs)
    }
}

impl Sub<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: &FieldElement) -> FieldElement {
        FieldElement::sub(self, rhs)
    }
}

impl Sub<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: &FieldElement) -> FieldElement {
        FieldElement::sub(&self, rhs)
    }
}

impl Mul for FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: FieldElement) -> FieldElement {
        FieldElement::mul(&self, &rhs)
    }
}

impl Mul<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: &FieldElement) -> FieldElement {
        FieldElement::mul(self, rhs)
    }
}

impl Mul<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: &FieldElement) -> FieldElement {
        FieldElement::mul(&self, rhs)
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        self.negate()
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::FieldElement;

    #[test]
    fn zero_byte_round_trip() {
        let zero = FieldElement::zero();
        assert_eq!(zero.to_bytes(), [0u8; 32]);
        assert_eq!(FieldElement::from_bytes(&[0u8; 32]).unwrap(), zero);
    }

    #[test]
    fn modulus_is_rejected() {
        let modulus_bytes: [u8; 32] = [
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
            0xff, 0xff, 0xfc, 0x2f,
        ];
        assert!(FieldElement::from_bytes(&modulus_bytes).is_none());
    }

    #[test]
    fn subtraction_wraps() {
        let one = FieldElement::one();
        let two = one.double();
        // -1 == p - 1, so (p - 1) + 2 == 1
        assert_eq!(one.negate().add(&two), one);
    }

    #[test]
    fn inversion_round_trips() {
        let x = FieldElement::from_bytes(&{
            let mut b = [0u8; 32];
            b[31] = 0x2a;
            b
        })
        .unwrap();
        let inv = x.invert().unwrap();
        assert_eq!(x.mul(&inv), FieldElement::one());
        assert!(FieldElement::zero().invert().is_none());
    }

    #[test]
    fn operator_impls_match_inherent_methods() {
        let a = FieldElement::one().double();
        let b = FieldElement::one();
        assert_eq!(&a + &b, a.add(&b));
        assert_eq!(a.clone() - &b, a.sub(&b));
        assert_eq!(&a * &b, a.mul(&b));
        assert_eq!(-a.clone(), a.negate());
    }

    #[test]
    fn sqrt_round_trips() {
        let x = FieldElement::from_bytes(&{
            let mut b = [0u8; 32];
            b[31] = 0x09;
            b
        })
        .unwrap();
        let root = x.sqrt().unwrap();
        assert_eq!(root.square(), x);
    }
}
