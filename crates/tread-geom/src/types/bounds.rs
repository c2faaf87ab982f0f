// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use tread_core::math::{Axis, Vec3};

/// Axis-aligned bounding volume stored as center and size.
///
/// Invariants:
/// - `size` components are non-negative (constructors take the absolute value).
/// - Values are `f32` and represent metres in world space.
///
/// `min`, `max` and `extents` are derived on demand.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    center: Vec3,
    size: Vec3,
}

impl Bounds {
    /// Constructs bounds from a center and full size.
    #[must_use]
    pub fn new(center: Vec3, size: Vec3) -> Self {
        Self {
            center,
            size: size.abs(),
        }
    }

    /// Builds bounds spanning two corners, in either order.
    #[must_use]
    pub fn from_min_max(a: Vec3, b: Vec3) -> Self {
        let min = a.min(&b);
        let max = a.max(&b);
        Self::new((min + max) * 0.5, max - min)
    }

    /// Zero-sized bounds at `point`.
    #[must_use]
    pub fn point(point: Vec3) -> Self {
        Self::new(point, Vec3::ZERO)
    }

    /// Replaces center and size in place.
    pub fn set(&mut self, center: Vec3, size: Vec3) {
        *self = Self::new(center, size);
    }

    /// Center of the volume.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Full size along each axis.
    pub fn size(&self) -> Vec3 {
        self.size
    }

    /// Half of [`Bounds::size`].
    pub fn extents(&self) -> Vec3 {
        self.size * 0.5
    }

    /// Minimum corner.
    pub fn min(&self) -> Vec3 {
        self.center - self.extents()
    }

    /// Maximum corner.
    pub fn max(&self) -> Vec3 {
        self.center + self.extents()
    }

    /// Returns `true` when `point` lies inside or on the surface.
    pub fn contains(&self, point: Vec3) -> bool {
        let (min, max) = (self.min(), self.max());
        Axis::ALL.iter().all(|&a| {
            let p = point.component(a);
            p >= min.component(a) && p <= max.component(a)
        })
    }

    /// Returns `true` if this volume overlaps another (inclusive on faces).
    pub fn intersects(&self, other: &Self) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        // Touching faces count as overlap so resting pairs stay paired.
        Axis::ALL.iter().all(|&a| {
            a_max.component(a) >= b_min.component(a) && a_min.component(a) <= b_max.component(a)
        })
    }

    /// Closest point on or inside the volume to `point` (per-axis clamp).
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.max(&self.min()).min(&self.max())
    }

    /// Smallest volume containing both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::from_min_max(self.min().min(&other.min()), self.max().max(&other.max()))
    }

    /// Grows the volume by `margin` on every side. Negative margins shrink it,
    /// clamping at zero size.
    #[must_use]
    pub fn expanded(&self, margin: f32) -> Self {
        let size = (self.size + Vec3::splat(2.0 * margin)).max(&Vec3::ZERO);
        Self::new(self.center, size)
    }
}
