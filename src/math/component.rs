//! Coercion of loosely-typed inputs into vector components.

use std::fmt::Debug;

use crate::error::{Result, VectorError};

/// A value that can be interpreted as a single `f64` vector component.
///
/// Numeric primitives always convert. Strings are parsed after trimming
/// surrounding whitespace, so `"2.5"` and `" -3 "` are accepted while
/// `"north"` is not.
pub trait Component: Debug {
    /// Returns the component value, or `None` if `self` is not a number.
    fn to_component(&self) -> Option<f64>;
}

macro_rules! impl_lossless_component {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Component for $ty {
                fn to_component(&self) -> Option<f64> {
                    Some(f64::from(*self))
                }
            }
        )*
    };
}

impl_lossless_component!(f64, f32, i8, i16, i32, u8, u16, u32);

macro_rules! impl_wide_component {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Component for $ty {
                #[allow(clippy::cast_precision_loss)]
                fn to_component(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_wide_component!(i64, u64, isize, usize);

impl Component for str {
    fn to_component(&self) -> Option<f64> {
        self.trim().parse().ok()
    }
}

impl Component for String {
    fn to_component(&self) -> Option<f64> {
        self.as_str().to_component()
    }
}

impl<T: Component + ?Sized> Component for &T {
    fn to_component(&self) -> Option<f64> {
        (**self).to_component()
    }
}

/// Coerces `value` into a component.
///
/// # Errors
///
/// Returns [`VectorError::InvalidComponent`] if `value` is not a number.
pub fn coerce<C: Component + ?Sized>(value: &C) -> Result<f64> {
    value
        .to_component()
        .ok_or_else(|| VectorError::InvalidComponent {
            value: format!("{value:?}"),
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn integers_and_floats_convert() {
        assert_eq!(coerce(&3_i32).unwrap(), 3.0);
        assert_eq!(coerce(&7_u64).unwrap(), 7.0);
        assert_eq!(coerce(&1.5_f32).unwrap(), 1.5);
        assert_eq!(coerce(&-0.25_f64).unwrap(), -0.25);
    }

    #[test]
    fn numeric_strings_parse() {
        assert_eq!(coerce(&"2.5").unwrap(), 2.5);
        assert_eq!(coerce(&" -3 ").unwrap(), -3.0);
        assert_eq!(coerce(&String::from("1e3")).unwrap(), 1000.0);
    }

    #[test]
    fn non_numeric_string_is_rejected() {
        let err = coerce(&"north").unwrap_err();
        assert_eq!(
            err,
            VectorError::InvalidComponent {
                value: "\"north\"".into()
            }
        );
    }

    #[test]
    fn empty_string_is_rejected() {
        assert!(coerce(&"").is_err());
    }
}
