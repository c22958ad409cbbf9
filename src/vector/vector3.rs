use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use tracing::{debug, warn};

use crate::error::{Result, VectorError};
use crate::math::canonical_bits;
use crate::math::component::{coerce, Component};

use super::Rotation3;

/// A 3D vector or point.
///
/// Like [`Vector2`](super::Vector2), the magnitude is always derived from the
/// current components, and `&mut self` methods returning `&mut Self` mutate
/// the receiver.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector from values that can be interpreted as numbers.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidComponent`] if any value is not a number.
    pub fn try_new<X, Y, Z>(x: X, y: Y, z: Z) -> Result<Self>
    where
        X: Component,
        Y: Component,
        Z: Component,
    {
        Ok(Self::new(coerce(&x)?, coerce(&y)?, coerce(&z)?))
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Euclidean length of the vector.
    ///
    /// Computed with `hypot`, so components near the ends of the `f64`
    /// range neither overflow nor underflow.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Iterates over the components in order `x, y, z`.
    pub fn iter(self) -> std::array::IntoIter<f64, 3> {
        self.to_array().into_iter()
    }

    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    #[must_use]
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Multiplies every component by `factor` in place.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        self.x *= factor;
        self.y *= factor;
        self.z *= factor;
        self
    }

    /// Like [`scale`](Self::scale), but accepts any [`Component`].
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidComponent`] if `factor` is not a number.
    pub fn try_scale<C: Component>(&mut self, factor: C) -> Result<&mut Self> {
        let factor = coerce(&factor)?;
        Ok(self.scale(factor))
    }

    /// Returns a copy scaled by `1 / divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DivisionByZero`] if `divisor` is zero.
    pub fn divide(self, divisor: f64) -> Result<Self> {
        if divisor == 0.0 {
            return Err(VectorError::DivisionByZero { operation: "divide" });
        }
        let mut out = self;
        out.scale(1.0 / divisor);
        Ok(out)
    }

    /// Rescales the vector in place to unit length.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DivisionByZero`] if the vector has zero magnitude.
    pub fn normalize(&mut self) -> Result<&mut Self> {
        self.normalize_to(1.0)
    }

    /// Rescales the vector in place so its magnitude equals `magnitude`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DivisionByZero`] if the vector has zero magnitude.
    pub fn normalize_to(&mut self, magnitude: f64) -> Result<&mut Self> {
        let current = self.magnitude();
        if current == 0.0 {
            return Err(VectorError::DivisionByZero {
                operation: "normalize",
            });
        }
        Ok(self.scale(magnitude / current))
    }

    /// Like [`normalize_to`](Self::normalize_to), but accepts any [`Component`].
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidComponent`] if `magnitude` is not a number,
    /// or [`VectorError::DivisionByZero`] if the vector has zero magnitude.
    pub fn try_normalize_to<C: Component>(&mut self, magnitude: C) -> Result<&mut Self> {
        let magnitude = coerce(&magnitude)?;
        self.normalize_to(magnitude)
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        self.subtract(other).magnitude()
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new(
            (self.x + other.x) / 2.0,
            (self.y + other.y) / 2.0,
            (self.z + other.z) / 2.0,
        )
    }

    /// Returns `true` if the point lies strictly inside the box `(low, high)`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidBounds`] if `low` exceeds `high` on any axis.
    pub fn in_bounds(self, low: Self, high: Self) -> Result<bool> {
        if low.x > high.x || low.y > high.y || low.z > high.z {
            return Err(VectorError::InvalidBounds(format!(
                "each coordinate of the low endpoint must not exceed the high endpoint \
                 (low = {low}, high = {high})"
            )));
        }
        Ok(self.x > low.x
            && self.y > low.y
            && self.z > low.z
            && self.x < high.x
            && self.y < high.y
            && self.z < high.z)
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product `self × other`.
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Angle between the two vectors, in degrees.
    ///
    /// Never fails:
    /// - if either vector has zero magnitude, returns `0` and logs a warning;
    /// - if rounding pushes the cosine outside `[-1, 1]` (parallel or
    ///   antiparallel vectors), returns `180` regardless of the sign.
    #[must_use]
    pub fn angle_to(self, other: Self) -> f64 {
        let denom = self.magnitude() * other.magnitude();
        if denom == 0.0 {
            warn!(lhs = %self, rhs = %other, "angle_to: zero-length vector, returning 0");
            return 0.0;
        }

        let cos = self.dot(other) / denom;
        if cos.abs() > 1.0 {
            debug!(cos, "angle_to: cosine outside [-1, 1], returning 180");
            return 180.0;
        }
        cos.acos().to_degrees()
    }

    /// Applies yaw, pitch and roll (degrees) about the origin in place.
    ///
    /// # Errors
    ///
    /// See [`rotate_with`](Self::rotate_with).
    pub fn rotate(&mut self, yaw: f64, pitch: f64, roll: f64) -> Result<&mut Self> {
        self.rotate_with(&Rotation3::new(yaw, pitch, roll))
    }

    /// Applies yaw, pitch and roll (degrees) about `around` in place.
    ///
    /// # Errors
    ///
    /// See [`rotate_with`](Self::rotate_with).
    pub fn rotate_around(
        &mut self,
        yaw: f64,
        pitch: f64,
        roll: f64,
        around: Self,
    ) -> Result<&mut Self> {
        self.rotate_with(&Rotation3::new(yaw, pitch, roll).with_pivot(around))
    }

    /// Applies `rotation` to the vector in place.
    ///
    /// Axes whose angle is exactly `0` are skipped; if all three are `0` the
    /// vector is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidArgument`] if an angle or a pivot
    /// component is NaN or infinite. The receiver is left untouched.
    pub fn rotate_with(&mut self, rotation: &Rotation3) -> Result<&mut Self> {
        rotation.validate()?;
        if !rotation.is_identity() {
            *self = rotation.apply(*self);
        }
        Ok(self)
    }
}

impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl Eq for Vector3 {}

impl Hash for Vector3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.x).hash(state);
        canonical_bits(self.y).hash(state);
        canonical_bits(self.z).hash(state);
    }
}

/// Renders `Vector3(x, y, z)`. Components use the shortest round-trip form
/// of `f64`'s `Debug` output: `1.0`, `-0.5`, and exponent notation without a
/// sign or padding for very large or small magnitudes (`1e20`, `1e-7`).
impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({:?}, {:?}, {:?})", self.x, self.y, self.z)
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vector3::add(self, rhs)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(mut self, rhs: f64) -> Self {
        self.scale(rhs);
        self
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

/// IEEE semantics; see [`Vector3::divide`] for a checked division.
impl Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        self * (1.0 / rhs)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale(rhs);
    }
}

impl DivAssign<f64> for Vector3 {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl IntoIterator for Vector3 {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_array().into_iter()
    }
}

impl IntoIterator for &Vector3 {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
