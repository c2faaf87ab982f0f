// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::Mul;

use crate::error::MathError;
use crate::math::{Degrees, Matrix, Radians, Vec3, EPSILON};

/// Quaternion stored as `(x, y, z, w)` with `w` as the scalar part.
///
/// Rotations are assumed to be unit quaternions but the invariant is not
/// enforced: after composing many multiplications the caller is responsible
/// for calling [`Quat::normalize`]. [`Quat::inverse`] is the conjugate and is
/// therefore only a true inverse for unit quaternions.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Quat {
    data: [f32; 4],
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

impl Quat {
    /// Creates a quaternion from raw components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Returns the quaternion as an array.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// Scalar part.
    pub fn w(&self) -> f32 {
        self.data[3]
    }

    /// Vector part.
    pub fn xyz(&self) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }

    /// Constructs a rotation of `angle` degrees about `axis`.
    ///
    /// The axis is normalized internally using half-angle sine/cosine. Returns
    /// the identity when the axis length is ≤ `EPSILON`.
    pub fn from_axis_angle(axis: Vec3, angle: Degrees) -> Self {
        Self::from_axis_radians(axis, angle.to_radians())
    }

    pub(crate) fn from_axis_radians(axis: Vec3, angle: Radians) -> Self {
        let len = axis.length();
        if len <= EPSILON {
            return Self::identity();
        }
        let (sin_half, cos_half) = (angle.value() * 0.5).sin_cos();
        let v = axis.scale(sin_half / len);
        Self::new(v.x(), v.y(), v.z(), cos_half)
    }

    /// Heading rotation about +Y, as used for hull and turret yaw.
    pub fn from_yaw(yaw: Degrees) -> Self {
        Self::from_axis_angle(Vec3::UNIT_Y, yaw)
    }

    /// Hamilton product (`self * other`): applies `other` first, then `self`.
    ///
    /// Quaternion multiplication is non-commutative.
    ///
    /// # Examples
    /// ```
    /// use tread_core::math::{Degrees, Quat, Vec3};
    /// let yaw = Quat::from_axis_angle(Vec3::UNIT_Y, Degrees(90.0));
    /// let pitch = Quat::from_axis_angle(Vec3::UNIT_X, Degrees(90.0));
    /// assert_ne!(yaw.multiply(&pitch).to_array(), pitch.multiply(&yaw).to_array());
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;
        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Conjugate `(-x, -y, -z, w)`.
    pub fn conjugate(&self) -> Self {
        let [x, y, z, w] = self.data;
        Self::new(-x, -y, -z, w)
    }

    /// Inverse of a unit quaternion (the conjugate).
    pub fn inverse(&self) -> Self {
        self.conjugate()
    }

    /// Four-dimensional dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Normalises the quaternion; returns identity when norm is ~0.
    pub fn normalize(&self) -> Self {
        let len = self.norm();
        if len <= EPSILON {
            return Self::identity();
        }
        let [x, y, z, w] = self.data;
        Self::new(x / len, y / len, z / len, w / len)
    }

    /// Rotates `v` by computing `q · v · q⁻¹` with `v` lifted to a pure quaternion.
    pub fn rotate(&self, v: &Vec3) -> Vec3 {
        let p = Self::new(v.x(), v.y(), v.z(), 0.0);
        self.multiply(&p).multiply(&self.inverse()).xyz()
    }

    /// Converts to a 4×4 row-major rotation matrix.
    #[rustfmt::skip]
    pub fn to_matrix(&self) -> Matrix {
        let [x, y, z, w] = self.data;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);
        Matrix::mat4([
            1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz),       2.0 * (xz + wy),       0.0,
            2.0 * (xy + wz),       1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx),       0.0,
            2.0 * (xz - wy),       2.0 * (yz + wx),       1.0 - 2.0 * (xx + yy), 0.0,
            0.0,                   0.0,                   0.0,                   1.0,
        ])
    }

    /// Extracts the rotation from the upper-left 3×3 block of `m`.
    ///
    /// Accepts 3×3 or 4×4 input. Uses the trace when it is positive and
    /// otherwise branches on the largest diagonal term so the divisor never
    /// approaches zero.
    pub fn from_matrix(m: &Matrix) -> Result<Self, MathError> {
        let square = m.rows() == m.cols();
        if !square || !(m.rows() == 3 || m.rows() == 4) {
            return Err(MathError::DimensionMismatch {
                op: "Quat::from_matrix",
                lhs_rows: m.rows(),
                lhs_cols: m.cols(),
                rhs_rows: 3,
                rhs_cols: 3,
            });
        }
        let block = core::array::from_fn(|r| core::array::from_fn(|c| m.at(r, c)));
        Ok(Self::from_rotation_block(&block))
    }

    /// Trace-method extraction from a row-major 3×3 rotation block.
    fn from_rotation_block(m: &[[f32; 3]; 3]) -> Self {
        let e = |r: usize, c: usize| m[r][c];
        let (m00, m11, m22) = (e(0, 0), e(1, 1), e(2, 2));
        let trace = m00 + m11 + m22;

        if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Self::new(
                (e(2, 1) - e(1, 2)) / s,
                (e(0, 2) - e(2, 0)) / s,
                (e(1, 0) - e(0, 1)) / s,
                0.25 * s,
            )
        } else if m00 > m11 && m00 > m22 {
            let s = (1.0 + m00 - m11 - m22).sqrt() * 2.0;
            Self::new(
                0.25 * s,
                (e(0, 1) + e(1, 0)) / s,
                (e(0, 2) + e(2, 0)) / s,
                (e(2, 1) - e(1, 2)) / s,
            )
        } else if m11 > m22 {
            let s = (1.0 + m11 - m00 - m22).sqrt() * 2.0;
            Self::new(
                (e(0, 1) + e(1, 0)) / s,
                0.25 * s,
                (e(1, 2) + e(2, 1)) / s,
                (e(0, 2) - e(2, 0)) / s,
            )
        } else {
            let s = (1.0 + m22 - m00 - m11).sqrt() * 2.0;
            Self::new(
                (e(0, 2) + e(2, 0)) / s,
                (e(1, 2) + e(2, 1)) / s,
                0.25 * s,
                (e(1, 0) - e(0, 1)) / s,
            )
        }
    }

    /// Shortest rotation taking direction `from` onto direction `to`.
    ///
    /// - Coincident directions (`dot ≥ 1 - EPSILON`) yield the identity.
    /// - Opposite directions (`dot ≤ -1 + EPSILON`) yield a 180° turn about an
    ///   axis orthogonal to `from`.
    /// - Zero-length inputs yield the identity.
    pub fn from_to_rotation(from: Vec3, to: Vec3) -> Self {
        let f = from.normalize();
        let t = to.normalize();
        if f == Vec3::ZERO || t == Vec3::ZERO {
            return Self::identity();
        }
        let dot = f.dot(&t);
        if dot >= 1.0 - EPSILON {
            return Self::identity();
        }
        if dot <= -1.0 + EPSILON {
            let mut axis = Vec3::UNIT_X.cross(&f);
            if axis.length() <= EPSILON {
                axis = Vec3::UNIT_Y.cross(&f);
            }
            return Self::from_axis_radians(axis, Radians(core::f32::consts::PI));
        }
        Self::from_axis_radians(f.cross(&t), Radians(dot.acos()))
    }

    /// Rotation whose +Z axis faces `forward` and whose +Y axis leans toward `up`.
    ///
    /// Builds the orthonormal basis `right = normalize(up × forward)`,
    /// `up' = forward × right` and extracts the rotation as [`Quat::from_matrix`]
    /// does.
    /// A zero `forward` yields the identity; when `forward` is parallel to
    /// `up` an alternate up (`+Z`, then `+X`) is substituted.
    pub fn look_rotation(forward: Vec3, up: Vec3) -> Self {
        let f = forward.normalize();
        if f == Vec3::ZERO {
            return Self::identity();
        }
        let mut right = up.cross(&f).normalize();
        for alt in [Vec3::UNIT_Z, Vec3::UNIT_X] {
            if right != Vec3::ZERO {
                break;
            }
            right = alt.cross(&f).normalize();
        }
        let new_up = f.cross(&right);
        Self::from_rotation_block(&[
            [right.x(), new_up.x(), f.x()],
            [right.y(), new_up.y(), f.y()],
            [right.z(), new_up.z(), f.z()],
        ])
        .normalize()
    }
}

impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<Vec3> for Quat {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.rotate(&rhs)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn approx3(a: Vec3, b: Vec3) {
        assert!(a.distance(&b) < 1e-5, "{a:?} vs {b:?}");
    }

    #[test]
    fn yaw_quarter_turn_maps_z_to_x() {
        let q = Quat::from_yaw(Degrees(90.0));
        approx3(q * Vec3::UNIT_Z, Vec3::UNIT_X);
    }

    #[test]
    fn from_to_rotation_handles_opposites() {
        let q = Quat::from_to_rotation(Vec3::UNIT_Z, -Vec3::UNIT_Z);
        approx3(q * Vec3::UNIT_Z, -Vec3::UNIT_Z);
        let q = Quat::from_to_rotation(Vec3::UNIT_X, -Vec3::UNIT_X);
        approx3(q * Vec3::UNIT_X, -Vec3::UNIT_X);
    }

    #[test]
    fn from_to_rotation_identity_when_coincident() {
        let q = Quat::from_to_rotation(Vec3::UNIT_Y, Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(q, Quat::identity());
    }

    #[test]
    fn look_rotation_faces_forward() {
        let forward = Vec3::new(1.0, 0.0, 1.0).normalize();
        let q = Quat::look_rotation(forward, Vec3::UNIT_Y);
        approx3(q * Vec3::UNIT_Z, forward);
        approx3(q * Vec3::UNIT_Y, Vec3::UNIT_Y);
    }

    #[test]
    fn look_rotation_survives_parallel_up() {
        let q = Quat::look_rotation(Vec3::UNIT_Y, Vec3::UNIT_Y);
        approx3(q * Vec3::UNIT_Z, Vec3::UNIT_Y);
    }

    #[test]
    fn look_rotation_agrees_with_matrix_extraction() {
        let q = Quat::look_rotation(Vec3::new(-2.0, 1.0, 0.5), Vec3::UNIT_Y);
        let via_matrix = Quat::from_matrix(&q.to_matrix()).unwrap();
        assert!((q.dot(&via_matrix).abs() - 1.0).abs() < 1e-5);
        assert!((q.norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn from_matrix_rejects_non_square() {
        let m = Matrix::zeros(4, 1);
        assert!(Quat::from_matrix(&m).is_err());
    }
}
