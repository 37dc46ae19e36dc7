//! Affine points.

use super::{
    modular, FieldElement, CURVE_EQUATION_B, FIELD_MODULUS, GENERATOR_X_BYTES, GENERATOR_Y_BYTES,
};
use core::ops::Neg;
use num_bigint::BigUint;

/// A point on the secp256k1 curve in affine coordinates.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AffinePoint {
    /// x-coordinate
    pub(crate) x: FieldElement,

    /// y-coordinate
    pub(crate) y: FieldElement,

    /// Is this point the point at infinity?
    pub(crate) infinity: bool,
}

impl AffinePoint {
    /// Returns the additive identity of the group: the point at infinity.
    pub fn identity() -> Self {
        Self {
            x: FieldElement::zero(),
            y: FieldElement::zero(),
            infinity: true,
        }
    }

    /// Returns the base point of secp256k1.
    ///
    /// ```text
    /// Gₓ = 79be667e f9dcbbac 55a06295 ce870b07 029bfcdb 2dce28d9 59f2815b 16f81798
    /// Gᵧ = 483ada77 26a3c465 5da4fbfc 0e1108a8 fd17b448 a6855419 9c47d08f fb10d4b8
    /// ```
    pub fn generator() -> Self {
        Self {
            x: FieldElement::from_bytes(&GENERATOR_X_BYTES)
                .expect("generator x-coordinate is a valid field element"),
            y: FieldElement::from_bytes(&GENERATOR_Y_BYTES)
                .expect("generator y-coordinate is a valid field element"),
            infinity: false,
        }
    }

    /// Creates a new point with the given coordinates.
    pub(crate) fn new(x: FieldElement, y: FieldElement) -> Self {
        Self {
            x,
            y,
            infinity: false,
        }
    }

    /// Is this point the identity point?
    pub fn is_identity(&self) -> bool {
        self.infinity
    }

    /// Returns the fixed-width big-endian x-coordinate.
    pub fn x(&self) -> [u8; 32] {
        self.x.to_bytes()
    }

    /// Returns the fixed-width big-endian y-coordinate.
    pub fn y(&self) -> [u8; 32] {
        self.y.to_bytes()
    }

    /// Is the y-coordinate odd?
    pub fn y_is_odd(&self) -> bool {
        self.y.is_odd()
    }

    /// Does this point satisfy the curve equation `y² = x³ + 7`?
    ///
    /// The identity has no affine coordinates and vacuously passes.
    pub fn is_on_curve(&self) -> bool {
        if self.infinity {
            return true;
        }
        let x3 = modular::ipow(self.x.as_uint(), 3) % &*FIELD_MODULUS;
        let rhs = (x3 + BigUint::from(CURVE_EQUATION_B)) % &*FIELD_MODULUS;
        *self.y.square().as_uint() == rhs
    }

    /// Decompresses a point from its x-coordinate and the parity of its
    /// y-coordinate, per the SEC1 compressed encoding.
    ///
    /// Computes `y = (x³ + 7)^((p+1)/4) mod p` and negates the root when its
    /// parity disagrees with `y_is_odd`. Returns `None` if `x` is not the
    /// abscissa of a curve point.
    pub fn decompress(x_bytes: &[u8; 32], y_is_odd: bool) -> Option<Self> {
        let x = FieldElement::from_bytes(x_bytes)?;
        let x3 = modular::ipow(x.as_uint(), 3);
        let alpha = FieldElement::from_uint_reduced(x3 + BigUint::from(CURVE_EQUATION_B));
        let beta = alpha.sqrt()?;

        let y = if beta.is_odd() == y_is_odd {
            beta
        } else {
            beta.negate()
        };

        Some(Self::new(x, y))
    }
}

impl Neg for AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        AffinePoint {
            x: self.x,
            y: self.y.negate(),
            infinity: self.infinity,
        }
    }
}

impl Neg for &AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        self.clone().neg()
    }
}

#[cfg(test)]
mod tests {
    use super::AffinePoint;
    use hex_literal::hex;

    #[test]
    fn generator_is_on_curve() {
        assert!(AffinePoint::generator().is_on_curve());
    }

    #[test]
    fn generator_decompresses() {
        let x = hex!("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798");
        // Gᵧ is even
        let point = AffinePoint::decompress(&x, false).unwrap();
        assert_eq!(point, AffinePoint::generator());

        let negated = AffinePoint::decompress(&x, true).unwrap();
        assert_eq!(negated, -AffinePoint::generator());
    }

    #[test]
    fn decompress_rejects_non_curve_x() {
        // x = 5: 5³ + 7 is a quadratic non-residue, so no point exists.
        let mut x = [0u8; 32];
        x[31] = 5;
        assert!(AffinePoint::decompress(&x, false).is_none());
    }

    #[test]
    fn affine_negation() {
        let basepoint = AffinePoint::generator();
        assert_eq!(-(-basepoint.clone()), basepoint);
    }
}
