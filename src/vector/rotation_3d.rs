use crate::error::Result;
use crate::math::rotation_2d::{check_argument, rotate_offset};

use super::Vector3;

/// How the yaw, pitch and roll rotations of a [`Rotation3`] are combined
/// when more than one of them is nonzero.
///
/// With a single nonzero angle both policies give the same result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Composition {
    /// Yaw, then pitch, then roll, each applied to the output of the
    /// previous step. The result is a rigid rotation about the pivot.
    #[default]
    Sequential,
    /// Each axis rotation is computed from the offset captured before any
    /// rotation; the per-axis changes are summed on shared components.
    Independent,
}

/// A yaw/pitch/roll rotation about a pivot, in degrees.
///
/// - yaw rotates in the x-z plane (x towards z),
/// - pitch rotates in the y-z plane (y towards z),
/// - roll rotates in the x-y plane (x towards y).
///
/// Angles that are exactly `0` are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation3 {
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
    /// Pivot of the rotation.
    pub around: Vector3,
    pub composition: Composition,
}

impl Rotation3 {
    /// Creates a rotation about the origin with [`Composition::Sequential`].
    #[must_use]
    pub fn new(yaw: f64, pitch: f64, roll: f64) -> Self {
        Self {
            yaw,
            pitch,
            roll,
            ..Self::default()
        }
    }

    /// Sets the pivot.
    #[must_use]
    pub fn with_pivot(mut self, around: Vector3) -> Self {
        self.around = around;
        self
    }

    /// Sets the composition policy.
    #[must_use]
    pub fn with_composition(mut self, composition: Composition) -> Self {
        self.composition = composition;
        self
    }

    /// Returns `true` if every angle is exactly zero.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.yaw == 0.0 && self.pitch == 0.0 && self.roll == 0.0
    }

    /// Checks that all angles and pivot components are finite.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidArgument`](crate::VectorError::InvalidArgument)
    /// naming the first offending argument.
    pub fn validate(&self) -> Result<()> {
        check_argument("yaw", self.yaw)?;
        check_argument("pitch", self.pitch)?;
        check_argument("roll", self.roll)?;
        check_argument("around.x", self.around.x)?;
        check_argument("around.y", self.around.y)?;
        check_argument("around.z", self.around.z)
    }

    /// Applies the rotation to `point`.
    ///
    /// Components that no nonzero angle touches are copied through unchanged.
    #[must_use]
    pub(crate) fn apply(&self, point: Vector3) -> Vector3 {
        let rel = point.subtract(self.around);
        let (x, y, z) = match self.composition {
            Composition::Sequential => self.sequential(rel),
            Composition::Independent => self.independent(rel),
        };

        let mut out = point;
        if self.yaw != 0.0 || self.roll != 0.0 {
            out.x = x + self.around.x;
        }
        if self.pitch != 0.0 || self.roll != 0.0 {
            out.y = y + self.around.y;
        }
        if self.yaw != 0.0 || self.pitch != 0.0 {
            out.z = z + self.around.z;
        }
        out
    }

    fn sequential(&self, rel: Vector3) -> (f64, f64, f64) {
        let Vector3 {
            mut x,
            mut y,
            mut z,
        } = rel;
        if self.yaw != 0.0 {
            (x, z) = rotate_offset(x, z, self.yaw);
        }
        if self.pitch != 0.0 {
            (y, z) = rotate_offset(y, z, self.pitch);
        }
        if self.roll != 0.0 {
            (x, y) = rotate_offset(x, y, self.roll);
        }
        (x, y, z)
    }

    fn independent(&self, rel: Vector3) -> (f64, f64, f64) {
        let (mut dx, mut dy, mut dz) = (0.0, 0.0, 0.0);
        if self.yaw != 0.0 {
            let (x, z) = rotate_offset(rel.x, rel.z, self.yaw);
            dx += x - rel.x;
            dz += z - rel.z;
        }
        if self.pitch != 0.0 {
            let (y, z) = rotate_offset(rel.y, rel.z, self.pitch);
            dy += y - rel.y;
            dz += z - rel.z;
        }
        if self.roll != 0.0 {
            let (x, y) = rotate_offset(rel.x, rel.y, self.roll);
            dx += x - rel.x;
            dy += y - rel.y;
        }
        (rel.x + dx, rel.y + dy, rel.z + dz)
    }
}
