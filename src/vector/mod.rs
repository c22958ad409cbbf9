mod rotation_3d;
mod vector2;
mod vector3;

use std::fmt;

pub use rotation_3d::{Composition, Rotation3};
pub use vector2::Vector2;
pub use vector3::Vector3;

use crate::error::{Result, VectorError};

/// A vector of either supported dimension.
///
/// Use this when the operand type is only known at runtime. Binary
/// operations require both operands to be the same variant and fail with
/// [`VectorError::TypeMismatch`] otherwise. Vectors of different variants
/// compare unequal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vector {
    Two(Vector2),
    Three(Vector3),
}

impl Vector {
    /// Name of the variant's concrete type, as used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Two(_) => "Vector2",
            Self::Three(_) => "Vector3",
        }
    }

    /// Number of components.
    #[must_use]
    pub fn dimension(&self) -> usize {
        match self {
            Self::Two(_) => 2,
            Self::Three(_) => 3,
        }
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        match self {
            Self::Two(v) => v.magnitude(),
            Self::Three(v) => v.magnitude(),
        }
    }

    /// Components in declared order.
    #[must_use]
    pub fn components(&self) -> Vec<f64> {
        match self {
            Self::Two(v) => v.iter().collect(),
            Self::Three(v) => v.iter().collect(),
        }
    }

    /// Returns a copy with every component multiplied by `factor`.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        match *self {
            Self::Two(v) => Self::Two(v * factor),
            Self::Three(v) => Self::Three(v * factor),
        }
    }

    /// Component-wise sum.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::TypeMismatch`] if the variants differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        match (*self, *other) {
            (Self::Two(a), Self::Two(b)) => Ok(Self::Two(a + b)),
            (Self::Three(a), Self::Three(b)) => Ok(Self::Three(a + b)),
            _ => Err(self.mismatch("add", other)),
        }
    }

    /// Component-wise difference.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::TypeMismatch`] if the variants differ.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        match (*self, *other) {
            (Self::Two(a), Self::Two(b)) => Ok(Self::Two(a - b)),
            (Self::Three(a), Self::Three(b)) => Ok(Self::Three(a - b)),
            _ => Err(self.mismatch("subtract", other)),
        }
    }

    /// # Errors
    ///
    /// Returns [`VectorError::TypeMismatch`] if the variants differ.
    pub fn dot(&self, other: &Self) -> Result<f64> {
        match (*self, *other) {
            (Self::Two(a), Self::Two(b)) => Ok(a.dot(b)),
            (Self::Three(a), Self::Three(b)) => Ok(a.dot(b)),
            _ => Err(self.mismatch("take the dot product of", other)),
        }
    }

    /// Cross product; only defined for two [`Vector3`] operands.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::TypeMismatch`] unless both operands are 3D.
    pub fn cross(&self, other: &Self) -> Result<Vector3> {
        match (*self, *other) {
            (Self::Three(a), Self::Three(b)) => Ok(a.cross(b)),
            _ => Err(VectorError::TypeMismatch {
                operation: "take the cross product of",
                expected: "Vector3",
                found: if self.dimension() == 3 {
                    other.type_name()
                } else {
                    self.type_name()
                },
            }),
        }
    }

    /// # Errors
    ///
    /// Returns [`VectorError::TypeMismatch`] if the variants differ.
    pub fn distance_to(&self, other: &Self) -> Result<f64> {
        match (*self, *other) {
            (Self::Two(a), Self::Two(b)) => Ok(a.distance_to(b)),
            (Self::Three(a), Self::Three(b)) => Ok(a.distance_to(b)),
            _ => Err(self.mismatch("get the distance between", other)),
        }
    }

    /// # Errors
    ///
    /// Returns [`VectorError::TypeMismatch`] if the variants differ.
    pub fn midpoint(&self, other: &Self) -> Result<Self> {
        match (*self, *other) {
            (Self::Two(a), Self::Two(b)) => Ok(Self::Two(a.midpoint(b))),
            (Self::Three(a), Self::Three(b)) => Ok(Self::Three(a.midpoint(b))),
            _ => Err(self.mismatch("find the midpoint of", other)),
        }
    }

    /// Strict containment in the box given as `[low, high]`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidBounds`] if `bounds` does not hold exactly
    /// two vectors of the receiver's variant, or if `low` exceeds `high` on
    /// any axis.
    pub fn in_bounds(&self, bounds: &[Vector]) -> Result<bool> {
        let [low, high] = bounds else {
            return Err(VectorError::InvalidBounds(format!(
                "expected 2 endpoints, got {}",
                bounds.len()
            )));
        };
        match (*self, *low, *high) {
            (Self::Two(p), Self::Two(lo), Self::Two(hi)) => p.in_bounds(lo, hi),
            (Self::Three(p), Self::Three(lo), Self::Three(hi)) => p.in_bounds(lo, hi),
            _ => Err(VectorError::InvalidBounds(format!(
                "both endpoints must be {} (got {} and {})",
                self.type_name(),
                low.type_name(),
                high.type_name()
            ))),
        }
    }

    fn mismatch(&self, operation: &'static str, other: &Self) -> VectorError {
        VectorError::TypeMismatch {
            operation,
            expected: self.type_name(),
            found: other.type_name(),
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Two(v) => fmt::Display::fmt(v, f),
            Self::Three(v) => fmt::Display::fmt(v, f),
        }
    }
}

impl From<Vector2> for Vector {
    fn from(v: Vector2) -> Self {
        Self::Two(v)
    }
}

impl From<Vector3> for Vector {
    fn from(v: Vector3) -> Self {
        Self::Three(v)
    }
}

impl TryFrom<Vector> for Vector2 {
    type Error = VectorError;

    fn try_from(v: Vector) -> Result<Self> {
        match v {
            Vector::Two(v) => Ok(v),
            Vector::Three(_) => Err(VectorError::TypeMismatch {
                operation: "convert",
                expected: "Vector2",
                found: "Vector3",
            }),
        }
    }
}

impl TryFrom<Vector> for Vector3 {
    type Error = VectorError;

    fn try_from(v: Vector) -> Result<Self> {
        match v {
            Vector::Three(v) => Ok(v),
            Vector::Two(_) => Err(VectorError::TypeMismatch {
                operation: "convert",
                expected: "Vector3",
                found: "Vector2",
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn two(x: f64, y: f64) -> Vector {
        Vector2::new(x, y).into()
    }

    fn three(x: f64, y: f64, z: f64) -> Vector {
        Vector3::new(x, y, z).into()
    }

    #[test]
    fn same_variant_operations_dispatch() {
        assert_eq!(two(1.0, 2.0).add(&two(3.0, 4.0)).unwrap(), two(4.0, 6.0));
        assert_eq!(
            three(1.0, 2.0, 3.0).subtract(&three(1.0, 1.0, 1.0)).unwrap(),
            three(0.0, 1.0, 2.0)
        );
        assert_eq!(two(1.0, 2.0).dot(&two(3.0, 4.0)).unwrap(), 11.0);
        assert_eq!(two(0.0, 0.0).distance_to(&two(3.0, 4.0)).unwrap(), 5.0);
        assert_eq!(
            three(0.0, 0.0, 0.0).midpoint(&three(2.0, 4.0, 6.0)).unwrap(),
            three(1.0, 2.0, 3.0)
        );
        assert_eq!(
            three(1.0, 0.0, 0.0).cross(&three(0.0, 1.0, 0.0)).unwrap(),
            Vector3::new(0.0, 0.0, 1.0)
        );
    }

    #[test]
    fn mixed_variants_are_a_type_mismatch() {
        let a = two(1.0, 2.0);
        let b = three(1.0, 2.0, 3.0);
        assert_eq!(
            a.add(&b).unwrap_err(),
            VectorError::TypeMismatch {
                operation: "add",
                expected: "Vector2",
                found: "Vector3",
            }
        );
        assert!(a.subtract(&b).is_err());
        assert!(b.dot(&a).is_err());
        assert!(a.distance_to(&b).is_err());
        assert!(b.midpoint(&a).is_err());
    }

    #[test]
    fn cross_requires_two_vector3() {
        let err = two(1.0, 0.0).cross(&two(0.0, 1.0)).unwrap_err();
        assert_eq!(
            err,
            VectorError::TypeMismatch {
                operation: "take the cross product of",
                expected: "Vector3",
                found: "Vector2",
            }
        );
        assert!(three(1.0, 0.0, 0.0).cross(&two(0.0, 1.0)).is_err());
    }

    #[test]
    fn mixed_variants_compare_unequal() {
        assert_ne!(two(0.0, 0.0), three(0.0, 0.0, 0.0));
    }

    #[test]
    fn in_bounds_validates_endpoint_count_and_type() {
        let p = two(1.0, 1.0);
        assert!(p.in_bounds(&[two(0.0, 0.0), two(2.0, 2.0)]).unwrap());
        assert!(matches!(
            p.in_bounds(&[two(0.0, 0.0)]),
            Err(VectorError::InvalidBounds(_))
        ));
        assert!(matches!(
            p.in_bounds(&[two(0.0, 0.0), two(1.0, 1.0), two(2.0, 2.0)]),
            Err(VectorError::InvalidBounds(_))
        ));
        assert!(matches!(
            p.in_bounds(&[two(0.0, 0.0), three(2.0, 2.0, 2.0)]),
            Err(VectorError::InvalidBounds(_))
        ));
        assert!(matches!(
            p.in_bounds(&[two(2.0, 0.0), two(0.0, 2.0)]),
            Err(VectorError::InvalidBounds(_))
        ));
    }

    #[test]
    fn scale_and_metadata() {
        let v = three(1.0, 2.0, 2.0);
        assert_eq!(v.dimension(), 3);
        assert_eq!(v.magnitude(), 3.0);
        assert_eq!(v.scale(2.0), three(2.0, 4.0, 4.0));
        assert_eq!(v.components(), vec![1.0, 2.0, 2.0]);
        assert_eq!(v.to_string(), "Vector3(1.0, 2.0, 2.0)");
    }

    #[test]
    fn narrowing_conversions() {
        assert_eq!(Vector2::try_from(two(1.0, 2.0)).unwrap(), Vector2::new(1.0, 2.0));
        assert!(Vector3::try_from(two(1.0, 2.0)).is_err());
        assert!(Vector2::try_from(three(1.0, 2.0, 3.0)).is_err());
    }
}
