use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{Result, VectorError};
use crate::math::canonical_bits;
use crate::math::component::{coerce, Component};
use crate::math::rotation_2d::{check_argument, rotate_about};

/// A 2D vector or point.
///
/// The magnitude is derived from the components on every call, so it always
/// reflects the current `x` and `y`.
///
/// Methods that take `&mut self` and return `&mut Self` (`scale`,
/// `normalize`, `rotate`, ...) mutate the receiver. Copy the vector first
/// if the previous value is still needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a vector from values that can be interpreted as numbers.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidComponent`] if either value is not a number.
    pub fn try_new<X, Y>(x: X, y: Y) -> Result<Self>
    where
        X: Component,
        Y: Component,
    {
        Ok(Self::new(coerce(&x)?, coerce(&y)?))
    }

    /// Returns the zero vector.
    #[must_use]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Euclidean length of the vector.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Returns the components as an array `[x, y]`.
    #[must_use]
    pub const fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Iterates over the components in order `x, y`.
    pub fn iter(self) -> std::array::IntoIter<f64, 2> {
        self.to_array().into_iter()
    }

    /// Component-wise sum.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Multiplies both components by `factor` in place.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        self.x *= factor;
        self.y *= factor;
        self
    }

    /// Like [`scale`](Self::scale), but accepts any [`Component`].
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidComponent`] if `factor` is not a number.
    /// The receiver is left untouched in that case.
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

    /// Rescales the vector in place so its magnitude equals `magnitude`,
    /// keeping its direction.
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

    /// Euclidean distance between two points.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Component-wise average of two points.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Returns `true` if the point lies strictly inside the box `(low, high)`.
    ///
    /// A point on the edge of the box is outside.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidBounds`] if `low` exceeds `high` on any axis.
    pub fn in_bounds(self, low: Self, high: Self) -> Result<bool> {
        if low.x > high.x || low.y > high.y {
            return Err(VectorError::InvalidBounds(format!(
                "each coordinate of the low endpoint must not exceed the high endpoint \
                 (low = {low}, high = {high})"
            )));
        }
        Ok(self.x > low.x && self.y > low.y && self.x < high.x && self.y < high.y)
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Rotates the vector counter-clockwise by `degrees` about the origin.
    ///
    /// # Errors
    ///
    /// See [`rotate_around`](Self::rotate_around).
    pub fn rotate(&mut self, degrees: f64) -> Result<&mut Self> {
        self.rotate_around(degrees, Self::ZERO)
    }

    /// Rotates the vector counter-clockwise by `degrees` about `around`,
    /// mutating it in place.
    ///
    /// A rotation of exactly `0` leaves the vector untouched.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidArgument`] if `degrees` or a component of
    /// `around` is NaN or infinite.
    pub fn rotate_around(&mut self, degrees: f64, around: Self) -> Result<&mut Self> {
        check_argument("degrees", degrees)?;
        if degrees == 0.0 {
            return Ok(self);
        }
        check_argument("around.x", around.x)?;
        check_argument("around.y", around.y)?;

        let (x, y) = rotate_about(self.x, self.y, around.x, around.y, degrees);
        self.x = x;
        self.y = y;
        Ok(self)
    }
}

impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

// NaN components make a vector unequal to itself, exactly as for `f64`.
impl Eq for Vector2 {}

impl Hash for Vector2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.x).hash(state);
        canonical_bits(self.y).hash(state);
    }
}

/// Renders `Vector2(x, y)`. Components use the shortest round-trip form of
/// `f64`'s `Debug` output: `1.0`, `-0.5`, and exponent notation without a
/// sign or padding for very large or small magnitudes (`1e20`, `1e-7`).
impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2({:?}, {:?})", self.x, self.y)
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vector2::add(self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(mut self, rhs: f64) -> Self {
        self.scale(rhs);
        self
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Vector2 {
        rhs * self
    }
}

/// IEEE semantics: dividing by zero yields infinite or NaN components.
/// Use [`Vector2::divide`] for a checked division.
impl Div<f64> for Vector2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        self * (1.0 / rhs)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale(rhs);
    }
}

impl DivAssign<f64> for Vector2 {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl IntoIterator for Vector2 {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 2>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_array().into_iter()
    }
}

impl IntoIterator for &Vector2 {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 2>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
