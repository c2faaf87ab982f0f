// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Ray and segment intersection against spheres and bounds.
//!
//! All tests return the parameter of the first valid hit or `None`. A miss is
//! ordinary control flow, so nothing here allocates or reports an error.

use tread_core::math::{Axis, Vec3, EPSILON};

use crate::types::bounds::Bounds;

/// Half-line from `origin` along a unit `direction`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Ray {
    /// Creates a ray, normalising `direction`. A degenerate direction yields
    /// a zero-direction ray that never hits anything; use [`Ray::try_new`] to
    /// detect that case up front.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Creates a ray or returns `None` when `direction` has no length.
    pub fn try_new(origin: Vec3, direction: Vec3) -> Option<Self> {
        direction
            .try_normalize()
            .ok()
            .map(|direction| Self { origin, direction })
    }

    /// Ray origin.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Unit direction (zero for a degenerate ray).
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Point at distance `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    fn is_degenerate(&self) -> bool {
        self.direction == Vec3::ZERO
    }

    /// Distance to the first intersection with a sphere within `[0, max_t]`.
    ///
    /// The near root is preferred; when the origin is inside the sphere the
    /// far root (the exit point) is returned instead.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32, max_t: f32) -> Option<f32> {
        if self.is_degenerate() {
            return None;
        }
        let oc = self.origin - center;
        let b = oc.dot(&self.direction);
        let c = oc.dot(&oc) - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();
        [-b - sqrt_d, -b + sqrt_d]
            .into_iter()
            .find(|t| (0.0..=max_t).contains(t))
    }

    /// Distance to the first intersection with `bounds` within `[0, max_t]`
    /// using the slab method. An origin inside the box hits at its exit face.
    pub fn intersect_bounds(&self, bounds: &Bounds, max_t: f32) -> Option<f32> {
        if self.is_degenerate() {
            return None;
        }
        let (t_min, t_max) = self.slab_interval(bounds)?;
        if t_min > max_t || t_max < 0.0 {
            return None;
        }
        let t = if t_min >= 0.0 { t_min } else { t_max };
        (t <= max_t).then_some(t)
    }

    fn slab_interval(&self, bounds: &Bounds) -> Option<(f32, f32)> {
        let (min, max) = (bounds.min(), bounds.max());
        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;
        for axis in Axis::ALL {
            let o = self.origin.component(axis);
            let d = self.direction.component(axis);
            let (lo, hi) = (min.component(axis), max.component(axis));
            if d.abs() <= EPSILON {
                // Parallel to this slab: the origin must already be between the planes.
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / d;
            let (mut t0, mut t1) = ((lo - o) * inv, (hi - o) * inv);
            if t0 > t1 {
                core::mem::swap(&mut t0, &mut t1);
            }
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return None;
            }
        }
        Some((t_min, t_max))
    }
}

/// Bounded segment from `start` to `end`, parameterised by `t ∈ [0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Start point (`t = 0`).
    pub start: Vec3,
    /// End point (`t = 1`).
    pub end: Vec3,
}

impl Segment {
    /// Creates a segment.
    pub const fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    /// Length of the segment.
    pub fn length(&self) -> f32 {
        self.start.distance(&self.end)
    }

    /// Point at parameter `t` (not clamped).
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.start + (self.end - self.start) * t
    }

    fn as_ray(&self) -> Option<(Ray, f32)> {
        let len = self.length();
        Ray::try_new(self.start, self.end - self.start).map(|ray| (ray, len))
    }

    /// Parameter of the first sphere hit along the segment.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let (ray, len) = self.as_ray()?;
        ray.intersect_sphere(center, radius, len).map(|t| t / len)
    }

    /// Parameter of the first hit against `bounds` along the segment.
    pub fn intersect_bounds(&self, bounds: &Bounds) -> Option<f32> {
        let (ray, len) = self.as_ray()?;
        ray.intersect_bounds(bounds, len).map(|t| t / len)
    }
}
