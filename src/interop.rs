//! Conversions between the vector types and tuples, arrays and nalgebra.

use nalgebra as na;

use crate::vector::{Vector2, Vector3};

macro_rules! impl_conversions {
    ($ty:ident, $n:literal, ($($field:ident),+), $tuple:ty) => {
        impl From<[f64; $n]> for $ty {
            fn from([$($field),+]: [f64; $n]) -> Self {
                Self::new($($field),+)
            }
        }

        impl From<$ty> for [f64; $n] {
            fn from(v: $ty) -> Self {
                v.to_array()
            }
        }

        impl From<$tuple> for $ty {
            fn from(($($field),+): $tuple) -> Self {
                Self::new($($field),+)
            }
        }

        impl From<$ty> for $tuple {
            fn from(v: $ty) -> Self {
                ($(v.$field),+)
            }
        }

        impl From<na::$ty<f64>> for $ty {
            fn from(v: na::$ty<f64>) -> Self {
                Self::new($(v.$field),+)
            }
        }

        impl From<$ty> for na::$ty<f64> {
            fn from(v: $ty) -> Self {
                Self::new($(v.$field),+)
            }
        }
    };
}

impl_conversions!(Vector2, 2, (x, y), (f64, f64));
impl_conversions!(Vector3, 3, (x, y, z), (f64, f64, f64));

impl From<na::Point2<f64>> for Vector2 {
    fn from(p: na::Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vector2> for na::Point2<f64> {
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<na::Point3<f64>> for Vector3 {
    fn from(p: na::Point3<f64>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Vector3> for na::Point3<f64> {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn tuple_and_array_conversions() {
        let v = Vector2::from((1.0, 2.0));
        assert_eq!(v, Vector2::new(1.0, 2.0));
        let (x, y): (f64, f64) = v.into();
        assert_eq!((x, y), (1.0, 2.0));

        let w = Vector3::from([1.0, 2.0, 3.0]);
        let arr: [f64; 3] = w.into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);
        let (x, y, z) = w.into();
        assert_eq!((x, y, z), (1.0, 2.0, 3.0));
    }

    #[test]
    fn nalgebra_roundtrip() {
        let v = Vector3::new(0.5, -1.0, 4.0);
        let n: na::Vector3<f64> = v.into();
        assert_abs_diff_eq!(n.norm(), v.magnitude(), epsilon = 1e-12);
        assert_eq!(Vector3::from(n), v);

        let p: na::Point2<f64> = Vector2::new(3.0, 4.0).into();
        assert_eq!(Vector2::from(p), Vector2::new(3.0, 4.0));
    }

    #[test]
    fn rotation_agrees_with_nalgebra() {
        let mut v = Vector2::new(2.0, -1.0);
        let expected = na::Rotation2::new(33.0_f64.to_radians()) * na::Vector2::from(v);
        v.rotate(33.0).unwrap();
        assert_abs_diff_eq!(v.x, expected.x, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, expected.y, epsilon = 1e-12);
    }

    #[test]
    fn cross_agrees_with_nalgebra() {
        let a = Vector3::new(1.5, -2.0, 0.25);
        let b = Vector3::new(-3.0, 0.5, 2.0);
        let expected = na::Vector3::from(a).cross(&na::Vector3::from(b));
        let actual = a.cross(b);
        assert_abs_diff_eq!(actual.x, expected.x, epsilon = 1e-12);
        assert_abs_diff_eq!(actual.y, expected.y, epsilon = 1e-12);
        assert_abs_diff_eq!(actual.z, expected.z, epsilon = 1e-12);
    }
}
