// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tread_core::math::{Matrix, Quat, Vec3};
use tread_core::MathError;

/// Transform with non-uniform scale used to place colliders in the world.
///
/// Conventions:
/// - `translation` in metres (world space).
/// - `rotation` as a unit quaternion. Rotation is kinematic only; the physics
///   layer never integrates it.
/// - `scale` is non-uniform and applied before rotation/translation.
///
/// `to_matrix` constructs `M = T · R · S` through [`Matrix::multiply`], and
/// colliders read their world position and scale back out of that matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    translation: Vec3,
    rotation: Quat,
    scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Identity transform (no translation, no rotation, unit scale).
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::identity(),
            scale: Vec3::ONE,
        }
    }

    /// Creates a transform from components.
    #[must_use]
    pub const fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Pure translation.
    #[must_use]
    pub const fn from_translation(translation: Vec3) -> Self {
        Self::new(translation, Quat::identity(), Vec3::ONE)
    }

    /// Translation component.
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Rotation component.
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Scale component.
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Returns a copy with a new translation.
    #[must_use]
    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    /// Returns a copy with a new rotation.
    #[must_use]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Returns a copy with a new scale.
    #[must_use]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Direction the local +Z axis faces after rotation.
    pub fn forward(&self) -> Vec3 {
        self.rotation.rotate(&Vec3::UNIT_Z)
    }

    /// Returns the row-major 4×4 matrix `T · R · S` for this transform.
    pub fn to_matrix(&self) -> Result<Matrix, MathError> {
        let t = Matrix::translation(self.translation);
        let r = self.rotation.normalize().to_matrix();
        let s = Matrix::scale(self.scale);
        t.multiply(&r)?.multiply(&s)
    }
}
