// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar helpers, vectors, matrices, quaternions and typed angles.
//!
//! All arithmetic is `f32`. Degenerate inputs follow one contract across the
//! module: lengths at or below [`EPSILON`] are treated as zero.

use std::f32::consts::TAU;

mod angle;
mod matrix;
mod quat;
mod vec3;

pub use angle::{Degrees, Radians, Winding};
pub use matrix::{EulerAngles, Matrix, Shear};
pub use quat::Quat;
pub use vec3::{Axis, Vec3, Vec4};

/// Length at or below which a vector, quaternion or axis counts as zero.
pub const EPSILON: f32 = 1e-6;

/// Clamps `value` into the inclusive range spanned by `a` and `b`, which may
/// be given in either order.
pub fn clamp(value: f32, a: f32, b: f32) -> f32 {
    value.max(a.min(b)).min(a.max(b))
}

/// Converts degrees to radians.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}
