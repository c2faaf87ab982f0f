// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::error::MathError;
use crate::math::{Axis, Quat, Radians, Vec3, Vec4, Winding};

/// Row-major dense matrix, usually 4×4.
///
/// - Stored row-major; element `(r, c)` lives at `data[r * cols + c]`.
/// - Vectors are columns: transforms compose right-to-left, so
///   `a.multiply(&b)` applies `b` first.
/// - Translation occupies the last column of a 4×4 affine matrix.
/// - General `R×C` shapes exist for intermediate products (e.g. a 4×1 column
///   vector); every binary operation validates dimensions first and fails
///   with [`MathError::DimensionMismatch`] instead of truncating.
///
/// # Examples
/// ```
/// use tread_core::math::{Matrix, Vec3};
/// let t = Matrix::translation(Vec3::new(5.0, -3.0, 2.0));
/// let p = t.transform_point(&Vec3::new(2.0, 4.0, -1.0)).unwrap();
/// assert_eq!(p.to_array(), [7.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

/// Shear factors for [`Matrix::shear`]; `xy` is how much `y` leaks into `x`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shear {
    /// X sheared by Y.
    pub xy: f32,
    /// X sheared by Z.
    pub xz: f32,
    /// Y sheared by X.
    pub yx: f32,
    /// Y sheared by Z.
    pub yz: f32,
    /// Z sheared by X.
    pub zx: f32,
    /// Z sheared by Y.
    pub zy: f32,
}

/// Euler angles for [`Matrix::rotation_euler`], applied X, then Y, then Z.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EulerAngles {
    /// Rotation about X.
    pub x: Radians,
    /// Rotation about Y.
    pub y: Radians,
    /// Rotation about Z.
    pub z: Radians,
    /// Winding per axis in `X, Y, Z` order.
    pub winding: [Winding; 3],
}

impl EulerAngles {
    /// Counter-clockwise Euler angles.
    pub fn new(x: Radians, y: Radians, z: Radians) -> Self {
        Self {
            x,
            y,
            z,
            winding: [Winding::CounterClockwise; 3],
        }
    }

    /// Overrides the winding for one axis.
    pub fn with_winding(mut self, axis: Axis, winding: Winding) -> Self {
        self.winding[axis.index()] = winding;
        self
    }
}

impl Matrix {
    /// Square identity matrix of the given size.
    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size, size);
        for i in 0..size {
            m.data[i * size + i] = 1.0;
        }
        m
    }

    /// Matrix of the given shape filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates a matrix from row-major data, validating the length.
    pub fn from_row_major(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self, MathError> {
        if data.len() != rows * cols {
            return Err(MathError::InvalidData {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    pub(crate) fn mat4(data: [f32; 16]) -> Self {
        Self {
            rows: 4,
            cols: 4,
            data: data.to_vec(),
        }
    }

    /// 4×1 column matrix holding a homogeneous vector.
    pub fn column_vector(v: Vec4) -> Self {
        Self {
            rows: 4,
            cols: 1,
            data: v.to_array().to_vec(),
        }
    }

    /// Translation by `t` metres.
    #[rustfmt::skip]
    pub fn translation(t: Vec3) -> Self {
        let [tx, ty, tz] = t.to_array();
        Self::mat4([
            1.0, 0.0, 0.0, tx,
            0.0, 1.0, 0.0, ty,
            0.0, 0.0, 1.0, tz,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Non-uniform scale.
    #[rustfmt::skip]
    pub fn scale(s: Vec3) -> Self {
        let [sx, sy, sz] = s.to_array();
        Self::mat4([
            sx,  0.0, 0.0, 0.0,
            0.0, sy,  0.0, 0.0,
            0.0, 0.0, sz,  0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Shear transform.
    #[rustfmt::skip]
    pub fn shear(s: Shear) -> Self {
        Self::mat4([
            1.0,  s.xy, s.xz, 0.0,
            s.yx, 1.0,  s.yz, 0.0,
            s.zx, s.zy, 1.0,  0.0,
            0.0,  0.0,  0.0,  1.0,
        ])
    }

    /// Mirror across the plane orthogonal to `axis`.
    pub fn reflection(axis: Axis) -> Self {
        let mut m = Self::identity(4);
        m.data[axis.index() * 4 + axis.index()] = -1.0;
        m
    }

    /// Rotation about +X.
    #[rustfmt::skip]
    pub fn rotation_x(angle: Radians, winding: Winding) -> Self {
        let (s, c) = angle.wound(winding).value().sin_cos();
        Self::mat4([
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   -s,  0.0,
            0.0, s,   c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Rotation about +Y.
    #[rustfmt::skip]
    pub fn rotation_y(angle: Radians, winding: Winding) -> Self {
        let (s, c) = angle.wound(winding).value().sin_cos();
        Self::mat4([
            c,   0.0, s,   0.0,
            0.0, 1.0, 0.0, 0.0,
            -s,  0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Rotation about +Z.
    #[rustfmt::skip]
    pub fn rotation_z(angle: Radians, winding: Winding) -> Self {
        let (s, c) = angle.wound(winding).value().sin_cos();
        Self::mat4([
            c,   -s,  0.0, 0.0,
            s,   c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Composite Euler rotation applying X, then Y, then Z (`Rz · Ry · Rx`).
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use tread_core::math::{EulerAngles, Matrix, Radians, Vec3};
    /// let r = Matrix::rotation_euler(EulerAngles::new(
    ///     Radians(0.0),
    ///     Radians(FRAC_PI_2),
    ///     Radians(0.0),
    /// ));
    /// let v = r.transform_direction(&Vec3::UNIT_Z).unwrap();
    /// assert!((v.x() - 1.0).abs() < 1e-6);
    /// ```
    pub fn rotation_euler(angles: EulerAngles) -> Self {
        let [wx, wy, wz] = angles.winding;
        let rx = Self::rotation_x(angles.x, wx);
        let ry = Self::rotation_y(angles.y, wy);
        let rz = Self::rotation_z(angles.z, wz);
        rz.mul4(&ry).mul4(&rx)
    }

    /// Rotation matrix for a quaternion; forwards to [`Quat::to_matrix`].
    pub fn from_quat(q: &Quat) -> Self {
        q.to_matrix()
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major backing data.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Element at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        (row < self.rows && col < self.cols).then(|| self.at(row, col))
    }

    pub(crate) fn at(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.cols + col]
    }

    fn is_4x4(&self) -> bool {
        self.rows == 4 && self.cols == 4
    }

    fn require_4x4(&self, op: &'static str) -> Result<(), MathError> {
        if self.is_4x4() {
            Ok(())
        } else {
            Err(MathError::NotAffine {
                op,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Matrix product `self · rhs`; requires `self.cols == rhs.rows`.
    pub fn multiply(&self, rhs: &Self) -> Result<Self, MathError> {
        if self.cols != rhs.rows {
            return Err(MathError::DimensionMismatch {
                op: "multiply",
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: rhs.rows,
                rhs_cols: rhs.cols,
            });
        }
        let mut out = Self::zeros(self.rows, rhs.cols);
        for row in 0..self.rows {
            for col in 0..rhs.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out.data[row * rhs.cols + col] = sum;
            }
        }
        Ok(out)
    }

    // Product of two matrices this module built as 4×4.
    fn mul4(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[row * 4 + col] = sum;
            }
        }
        Self::mat4(out)
    }

    /// Element-wise sum; requires identical shapes.
    pub fn add(&self, rhs: &Self) -> Result<Self, MathError> {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(MathError::DimensionMismatch {
                op: "add",
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: rhs.rows,
                rhs_cols: rhs.cols,
            });
        }
        let data = self
            .data
            .iter()
            .zip(&rhs.data)
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        let mut out = Self::zeros(self.cols, self.rows);
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.data[col * self.rows + row] = self.at(row, col);
            }
        }
        out
    }

    /// Multiplies a homogeneous vector (`self · v`); requires a 4×4 matrix.
    pub fn mul_vec4(&self, v: Vec4) -> Result<Vec4, MathError> {
        let col = self.multiply(&Self::column_vector(v))?;
        Ok(Vec4::new(col.data[0], col.data[1], col.data[2], col.data[3]))
    }

    /// Transforms a point (`w = 1`, no perspective divide).
    pub fn transform_point(&self, point: &Vec3) -> Result<Vec3, MathError> {
        self.require_4x4("transform_point")?;
        Ok(self.mul_vec4(point.extend(1.0))?.truncate())
    }

    /// Transforms a direction (`w = 0`, translation ignored).
    pub fn transform_direction(&self, direction: &Vec3) -> Result<Vec3, MathError> {
        self.require_4x4("transform_direction")?;
        Ok(self.mul_vec4(direction.extend(0.0))?.truncate())
    }

    /// Reads the translation column of a 4×4 affine matrix.
    pub fn extract_position(&self) -> Result<Vec3, MathError> {
        self.require_4x4("extract_position")?;
        Ok(Vec3::new(self.at(0, 3), self.at(1, 3), self.at(2, 3)))
    }

    /// Per-axis scale of a 4×4 affine matrix (norm of each basis column).
    pub fn extract_scale(&self) -> Result<Vec3, MathError> {
        self.require_4x4("extract_scale")?;
        let column_norm = |c: usize| {
            let x = self.at(0, c);
            let y = self.at(1, c);
            let z = self.at(2, c);
            (x * x + y * y + z * z).sqrt()
        };
        Ok(Vec3::new(column_norm(0), column_norm(1), column_norm(2)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn from_row_major_checks_length() {
        let err = Matrix::from_row_major(2, 2, vec![1.0; 3]).unwrap_err();
        assert_eq!(
            err,
            MathError::InvalidData {
                rows: 2,
                cols: 2,
                len: 3
            }
        );
    }

    #[test]
    fn transpose_swaps_shape() {
        let m = Matrix::from_row_major(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let t = m.transpose();
        assert_eq!((t.rows(), t.cols()), (3, 2));
        assert_eq!(t.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn get_is_bounds_checked() {
        let m = Matrix::identity(3);
        assert_eq!(m.get(2, 2), Some(1.0));
        assert_eq!(m.get(3, 0), None);
    }
}
