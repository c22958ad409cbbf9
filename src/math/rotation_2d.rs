//! Planar rotation helpers shared by the 2D and 3D vector types.
//!
//! Angles are in degrees and positive angles rotate counter-clockwise,
//! i.e. from the first axis of the plane towards the second.

use crate::error::{Result, VectorError};

/// Rotates the pivot-relative offset `(a, b)` by `degrees`.
///
/// Returns the rotated offset `(a', b')`:
/// - `a' = cos * a - sin * b`
/// - `b' = cos * b + sin * a`
#[must_use]
pub fn rotate_offset(a: f64, b: f64, degrees: f64) -> (f64, f64) {
    let (sin, cos) = degrees.to_radians().sin_cos();
    (cos * a - sin * b, cos * b + sin * a)
}

/// Rotates the point `(a, b)` by `degrees` about the pivot `(pa, pb)`.
#[must_use]
pub fn rotate_about(a: f64, b: f64, pa: f64, pb: f64, degrees: f64) -> (f64, f64) {
    let (ra, rb) = rotate_offset(a - pa, b - pb, degrees);
    (ra + pa, rb + pb)
}

/// Checks that a rotation argument is a usable number.
///
/// # Errors
///
/// Returns [`VectorError::InvalidArgument`] if `value` is NaN or infinite.
pub fn check_argument(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(VectorError::InvalidArgument(format!(
            "{name} = {value} is not a finite number"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn quarter_turn_is_counter_clockwise() {
        let (a, b) = rotate_offset(1.0, 0.0, 90.0);
        assert!(a.abs() < TOL, "a={a}");
        assert!((b - 1.0).abs() < TOL, "b={b}");
    }

    #[test]
    fn half_turn_about_pivot() {
        // (3, 1) about (2, 1) by 180° -> (1, 1).
        let (a, b) = rotate_about(3.0, 1.0, 2.0, 1.0, 180.0);
        assert!((a - 1.0).abs() < TOL, "a={a}");
        assert!((b - 1.0).abs() < TOL, "b={b}");
    }

    #[test]
    fn negative_angle_is_clockwise() {
        let (a, b) = rotate_offset(0.0, 2.0, -90.0);
        assert!((a - 2.0).abs() < TOL, "a={a}");
        assert!(b.abs() < TOL, "b={b}");
    }

    #[test]
    fn non_finite_arguments_are_rejected() {
        assert!(check_argument("degrees", 45.0).is_ok());
        assert!(matches!(
            check_argument("degrees", f64::NAN),
            Err(VectorError::InvalidArgument(_))
        ));
        assert!(check_argument("around.x", f64::INFINITY).is_err());
    }
}
