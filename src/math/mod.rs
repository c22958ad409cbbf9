pub mod component;
pub mod rotation_2d;

pub use component::Component;

/// Global tolerance for approximate floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Bit pattern used when hashing a component.
///
/// `-0.0` and `0.0` compare equal, so both map to the same bits.
#[must_use]
pub(crate) fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0_f64.to_bits()
    } else {
        value.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_zeros_share_bits() {
        assert_eq!(canonical_bits(0.0), canonical_bits(-0.0));
        assert_ne!(canonical_bits(1.0), canonical_bits(-1.0));
    }
}
