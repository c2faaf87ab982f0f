// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::error::MathError;
use crate::math::{Radians, EPSILON};

/// Cartesian axis selector.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis (up).
    Y,
    /// The Z axis (forward).
    Z,
}

impl Axis {
    /// All axes in `X, Y, Z` order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Component index of the axis.
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

/// 3D vector used for positions, velocities and directions.
///
/// * Components are world-space metres (or metres per second for velocities).
/// * The type is an immutable value; every operation returns a new vector.
/// * Use [`crate::math::Matrix::transform_point`] for points (homogeneous
///   `w = 1`) and [`crate::math::Matrix::transform_direction`] for directions
///   (`w = 0`), or lift explicitly with [`Vec3::extend`].
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Vector with every component set to one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Creates a vector with all components equal to `v`.
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 3] {
        self.data
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// Component along `axis`.
    pub fn component(&self, axis: Axis) -> f32 {
        self.data[axis.index()]
    }

    /// Returns a copy with the component along `axis` replaced by `value`.
    pub fn with_component(&self, axis: Axis, value: f32) -> Self {
        let mut data = self.data;
        data[axis.index()] = value;
        Self { data }
    }

    /// Returns a copy with a new Y component.
    pub fn with_y(&self, y: f32) -> Self {
        self.with_component(Axis::Y, y)
    }

    /// Lifts the vector to homogeneous coordinates with the given `w`.
    pub fn extend(&self, w: f32) -> Vec4 {
        Vec4::new(self.data[0], self.data[1], self.data[2], w)
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.data[0] + other.data[0],
            self.data[1] + other.data[1],
            self.data[2] + other.data[2],
        )
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(
            self.data[0] - other.data[0],
            self.data[1] - other.data[1],
            self.data[2] - other.data[2],
        )
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(
            self.data[0] * scalar,
            self.data[1] * scalar,
            self.data[2] * scalar,
        )
    }

    /// Component-wise product.
    pub fn mul(&self, other: &Self) -> Self {
        Self::new(
            self.data[0] * other.data[0],
            self.data[1] * other.data[1],
            self.data[2] * other.data[2],
        )
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data[0] * other.data[0] + self.data[1] * other.data[1] + self.data[2] * other.data[2]
    }

    /// Cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Self) -> f32 {
        self.sub(other).length()
    }

    /// Normalises the vector, returning the zero vector if length ≤ `EPSILON`.
    ///
    /// `EPSILON` is a degeneracy threshold, not a precision bound: callers that
    /// need to distinguish the degenerate case should use
    /// [`Vec3::try_normalize`].
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// Normalises the vector or reports [`MathError::Degenerate`].
    pub fn try_normalize(&self) -> Result<Self, MathError> {
        let len = self.length();
        if len <= EPSILON {
            return Err(MathError::Degenerate("Vec3::normalize"));
        }
        Ok(self.scale(1.0 / len))
    }

    /// Reflects the vector about the plane with unit normal `normal`:
    /// `v - 2(v·n)n`.
    pub fn reflect(&self, normal: &Self) -> Self {
        self.sub(&normal.scale(2.0 * self.dot(normal)))
    }

    /// Unsigned angle between two vectors.
    ///
    /// The cosine is clamped to `[-1, 1]` so rounding never produces NaN.
    /// Fails with [`MathError::Degenerate`] when either length is at or below
    /// `EPSILON`, the same cutoff [`Vec3::normalize`] uses.
    pub fn angle(&self, other: &Self) -> Result<Radians, MathError> {
        let (la, lb) = (self.length(), other.length());
        if la <= EPSILON || lb <= EPSILON {
            return Err(MathError::Degenerate("Vec3::angle"));
        }
        let cos = (self.dot(other) / (la * lb)).clamp(-1.0, 1.0);
        Ok(Radians(cos.acos()))
    }

    /// Linear interpolation toward `other`; `t` is clamped to `[0, 1]`.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        self.add(&other.sub(self).scale(t))
    }

    /// Component-wise absolute value.
    pub fn abs(&self) -> Self {
        Self::new(self.data[0].abs(), self.data[1].abs(), self.data[2].abs())
    }

    /// Component-wise minimum.
    pub fn min(&self, other: &Self) -> Self {
        Self::new(
            self.data[0].min(other.data[0]),
            self.data[1].min(other.data[1]),
            self.data[2].min(other.data[2]),
        )
    }

    /// Component-wise maximum.
    pub fn max(&self, other: &Self) -> Self {
        Self::new(
            self.data[0].max(other.data[0]),
            self.data[1].max(other.data[1]),
            self.data[2].max(other.data[2]),
        )
    }

    /// Largest component.
    pub fn max_element(&self) -> f32 {
        self.data[0].max(self.data[1]).max(self.data[2])
    }

    /// Returns `true` when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|c| c.is_finite())
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Vec3::add(&self, &rhs)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Vec3::sub(&self, &rhs)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = Vec3::add(self, &rhs);
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Vec3::sub(self, &rhs);
    }
}

/// Homogeneous 4-component vector.
///
/// `w = 1` marks a point (translations apply), `w = 0` a direction.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vec4 {
    data: [f32; 4],
}

impl Vec4 {
    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// Homogeneous flag.
    pub fn w(&self) -> f32 {
        self.data[3]
    }

    /// Drops `w` without a perspective divide.
    pub fn truncate(&self) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}
