//! Projective points.
//!
//! Group operations run in Jacobian coordinates, where `(X, Y, Z)` with
//! `Z ≠ 0` represents the affine point `(X/Z², Y/Z³)`, and convert back to
//! affine at the boundary. The identity is the `(0, 0, 1)` sentinel;
//! doubling it produces `(0, 0, 0)`, and both shapes are treated as the
//! identity everywhere.

use super::{AffinePoint, FieldElement, Scalar};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A point on the secp256k1 curve in Jacobian projective coordinates.
#[derive(Clone, Debug)]
pub struct ProjectivePoint {
    x: FieldElement,
    y: FieldElement,
    pub(crate) z: FieldElement,
}

impl ProjectivePoint {
    /// Returns the additive identity of the group: the point at infinity.
    pub fn identity() -> Self {
        Self {
            x: FieldElement::zero(),
            y: FieldElement::zero(),
            z: FieldElement::one(),
        }
    }

    /// Returns the base point of secp256k1.
    pub fn generator() -> Self {
        AffinePoint::generator().into()
    }

    /// Is this point the identity point?
    pub fn is_identity(&self) -> bool {
        self.z.is_zero() || (self.x.is_zero() && self.y.is_zero())
    }

    /// Returns the affine representation of this point.
    pub fn to_affine(&self) -> AffinePoint {
        if self.is_identity() {
            return AffinePoint::identity();
        }
        self.z
            .invert()
            .map(|zinv| {
                let zinv2 = zinv.square();
                let zinv3 = zinv2.clone().mul(&zinv);
                AffinePoint::new(self.x.clone().mul(&zinv2), self.y.clone().mul(&zinv3))
            })
            .unwrap_or_else(AffinePoint::identity)
    }

    /// Returns `-self`.
    fn neg(&self) -> ProjectivePoint {
        ProjectivePoint {
            x: self.x.clone(),
            y: self.y.negate(),
            z: self.z.clone(),
        }
    }

    /// Returns `self + other`.
    fn add(&self, other: &ProjectivePoint) -> ProjectivePoint {
        if self.is_identity() {
            return other.clone();
        }
        if other.is_identity() {
            return self.clone();
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x.clone().mul(&z2z2);
        let u2 = other.x.clone().mul(&z1z1);
        let s1 = self.y.clone().mul(&z2z2.clone().mul(&other.z));
        let s2 = other.y.clone().mul(&z1z1.clone().mul(&self.z));

        if u1 == u2 {
            // Same abscissa: either the same point (double) or a pair of
            // opposite points summing to the identity.
            return if s1 == s2 {
                self.double()
            } else {
                Self::identity()
            };
        }

        let h = u2.sub(&u1);
        let r = s2.sub(&s1);
        let h2 = h.square();
        let h3 = h2.clone().mul(&h);
        let u1h2 = u1.mul(&h2);

        let x3 = r.square().sub(&h3).sub(&u1h2.double());
        let y3 = r.mul(&u1h2.sub(&x3)).sub(&s1.mul(&h3));
        let z3 = h.mul(&self.z).mul(&other.z);

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Returns `self + other`.
    fn add_mixed(&self, other: &AffinePoint) -> ProjectivePoint {
        self.add(&ProjectivePoint::from(other.clone()))
    }

    /// Doubles this point.
    ///
    /// With `a = 0` the `a·Z⁴` term of the tangent slope vanishes. Doubling
    /// the identity flows through the formulas to `(0, 0, 0)`.
    pub fn double(&self) -> ProjectivePoint {
        let ysq = self.y.square();
        let s = self.x.clone().mul(&ysq).double().double();
        let xx = self.x.square();
        let m = xx.double().add(&xx);

        let x3 = m.square().sub(&s.double());
        let y3 = m.mul(&s.sub(&x3)).sub(&ysq.square().double().double().double());
        let z3 = self.y.clone().mul(&self.z).double();

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Returns `self - other`.
    fn sub(&self, other: &ProjectivePoint) -> ProjectivePoint {
        self.add(&other.neg())
    }

    /// Returns `k * self` by iterative double-and-add over the bits of `k`.
    ///
    /// The scalar is already reduced modulo n by its type. Not constant
    /// time: the work done depends on the bit pattern of `k`.
    pub fn mul(&self, k: &Scalar) -> ProjectivePoint {
        let k = k.as_uint();
        let mut result = Self::identity();
        let mut addend = self.clone();

        for i in 0..k.bits() {
            if k.bit(i) {
                result = result.add(&addend);
            }
            addend = addend.double();
        }

        result
    }
}

impl From<AffinePoint> for ProjectivePoint {
    fn from(p: AffinePoint) -> Self {
        if p.is_identity() {
            return Self::identity();
        }
        ProjectivePoint {
            x: p.x,
            y: p.y,
            z: FieldElement::one(),
        }
    }
}

impl From<&AffinePoint> for ProjectivePoint {
    fn from(p: &AffinePoint) -> Self {
        p.clone().into()
    }
}

impl PartialEq for ProjectivePoint {
    fn eq(&self, other: &Self) -> bool {
        // Cross-multiplied comparison avoids inversions: X1·Z2² = X2·Z1²
        // and Y1·Z2³ = Y2·Z1³.
        match (self.is_identity(), other.is_identity()) {
            (true, true) => return true,
            (false, false) => {}
            _ => return false,
        }
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        self.x.clone().mul(&z2z2) == other.x.clone().mul(&z1z1)
            && self.y.clone().mul(&z2z2.clone().mul(&other.z)) == other.y.clone().mul(&z1z1.clone().mul(&self.z))
    }
}

impl Eq for ProjectivePoint {}

impl Add<&ProjectivePoint> for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn add(self, other: &ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::add(self, other)
    }
}

impl Add for ProjectivePoint {
    type Output = ProjectivePoint;

    fn add(self, other: ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::add(&self, &other)
    }
}

impl Add<&ProjectivePoint> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn add(self, other: &ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::add(&self, other)
    }
}

impl AddAssign for ProjectivePoint {
    fn add_assign(&mut self, rhs: ProjectivePoint) {
        *self = ProjectivePoint::add(self, &rhs);
    }
}

impl AddAssign<&ProjectivePoint> for ProjectivePoint {
    fn add_assign(&mut self, rhs: &ProjectivePoint) {
        *self = ProjectivePoint::add(self, rhs);
    }
}

impl Add<&AffinePoint> for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn add(self, other: &AffinePoint) -> ProjectivePoint {
        ProjectivePoint::add_mixed(self, other)
    }
}

impl Add<&AffinePoint> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn add(self, other: &AffinePoint) -> ProjectivePoint {
        ProjectivePoint::add_mixed(&self, other)
    }
}

impl Sub for ProjectivePoint {
    type Output = ProjectivePoint;

    fn sub(self, other: ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::sub(&self, &other)
    }
}

impl Sub<&ProjectivePoint> for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn sub(self, other: &ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::sub(self, other)
    }
}

impl Sub<&ProjectivePoint> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn sub(self, other: &ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::sub(&self, other)
    }
}

impl SubAssign for ProjectivePoint {
    fn sub_assign(&mut self, rhs: ProjectivePoint) {
        *self = ProjectivePoint::sub(self, &rhs);
    }
}

impl Mul<&Scalar> for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, scalar: &Scalar) -> ProjectivePoint {
        ProjectivePoint::mul(self, scalar)
    }
}

impl Mul<&Scalar> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, scalar: &Scalar) -> ProjectivePoint {
        ProjectivePoint::mul(&self, scalar)
    }
}

impl Mul<Scalar> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, scalar: Scalar) -> ProjectivePoint {
        ProjectivePoint::mul(&self, &scalar)
    }
}

impl Neg for ProjectivePoint {
    type Output = ProjectivePoint;

    fn neg(self) -> ProjectivePoint {
        ProjectivePoint::neg(&self)
    }
}

impl Neg for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn neg(self) -> ProjectivePoint {
        ProjectivePoint::neg(self)
    }
}

impl Sum for ProjectivePoint {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::identity(), |acc, p| acc.add(&p))
    }
}
