// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Read-only queries against the registered colliders.
//!
//! Scans run in registration order and keep the nearest hit with a strict
//! comparison, so on an exact tie the earlier-registered body wins. Points are
//! never query targets. A miss is `None`; nothing is allocated.

use serde::{Deserialize, Serialize};
use tread_core::math::Vec3;
use tread_geom::{Ray, Segment};

use crate::collision;
use crate::error::PhysicsError;
use crate::ident::BodyId;
use crate::shape::ShapeClass;
use crate::world::{Body, PhysicsWorld};

/// Narrows which bodies a query may hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryFilter {
    /// Only bodies of this class, when set.
    pub class: Option<ShapeClass>,
    /// Never this body, when set (typically the caster).
    pub exclude: Option<BodyId>,
}

impl QueryFilter {
    /// Matches every non-point body.
    pub const fn new() -> Self {
        Self {
            class: None,
            exclude: None,
        }
    }

    /// Restricts to `class`.
    pub const fn class(mut self, class: ShapeClass) -> Self {
        self.class = Some(class);
        self
    }

    /// Skips `id`.
    pub const fn exclude(mut self, id: BodyId) -> Self {
        self.exclude = Some(id);
        self
    }

    fn accepts(&self, body: &Body) -> bool {
        let class = body.class();
        class != ShapeClass::Point
            && !body.is_consumed()
            && self.exclude != Some(body.id())
            && self.class.is_none_or(|c| c == class)
    }
}

/// Nearest ray hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayHit {
    /// Body struck.
    pub body: BodyId,
    /// Distance from the ray origin.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
}

/// First segment hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentHit {
    /// Body struck.
    pub body: BodyId,
    /// Segment parameter in `[0, 1]`.
    pub t: f32,
    /// World-space hit point.
    pub point: Vec3,
}

impl PhysicsWorld {
    fn query_targets(&self, filter: QueryFilter) -> impl Iterator<Item = &Body> + '_ {
        self.registry
            .iter()
            .filter_map(move |id| self.bodies.get(id))
            .filter(move |b| filter.accepts(b))
    }

    /// Nearest hit along a ray within `max_distance`.
    ///
    /// A degenerate `direction` never hits.
    pub fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        filter: QueryFilter,
    ) -> Option<RayHit> {
        let ray = Ray::try_new(origin, direction)?;
        let mut best: Option<RayHit> = None;
        for body in self.query_targets(filter) {
            let c = body.collider();
            let t = if c.class().is_sphere_like() {
                ray.intersect_sphere(c.center(), c.radius(), max_distance)
            } else {
                ray.intersect_bounds(&c.bounds(), max_distance)
            };
            if let Some(t) = t {
                if best.is_none_or(|hit| t < hit.distance) {
                    best = Some(RayHit {
                        body: body.id(),
                        distance: t,
                        point: ray.at(t),
                    });
                }
            }
        }
        best
    }

    /// First hit along the segment `start → end`.
    ///
    /// Coincident endpoints never hit.
    pub fn segment_cast(&self, start: Vec3, end: Vec3, filter: QueryFilter) -> Option<SegmentHit> {
        let segment = Segment::new(start, end);
        let mut best: Option<SegmentHit> = None;
        for body in self.query_targets(filter) {
            let c = body.collider();
            let t = if c.class().is_sphere_like() {
                segment.intersect_sphere(c.center(), c.radius())
            } else {
                segment.intersect_bounds(&c.bounds())
            };
            if let Some(t) = t {
                if best.is_none_or(|hit| t < hit.t) {
                    best = Some(SegmentHit {
                        body: body.id(),
                        t,
                        point: segment.point_at(t),
                    });
                }
            }
        }
        best
    }

    /// Corrects `proposed` so the body `moving` would not overlap any
    /// wall-flagged box.
    ///
    /// Each wall is expanded by the mover's half-extents (its radius for
    /// spheres). A proposal strictly inside the expanded box is pushed out
    /// along the shallower of X and Z to the face on the side it lies; an
    /// exact X/Z tie is left uncorrected, matching the step's wall contact.
    /// Walls are visited in registration order.
    pub fn clamp_to_bounds(&self, moving: BodyId, proposed: Vec3) -> Result<Vec3, PhysicsError> {
        let mover = self
            .bodies
            .get(moving)
            .ok_or(PhysicsError::UnknownBody(moving))?;
        let half = mover.collider().half_extents();
        let walls = self.query_targets(QueryFilter::new().class(ShapeClass::Box).exclude(moving));

        let mut p = proposed;
        for wall in walls.filter(|b| b.collider().roles().wall) {
            let bounds = wall.bounds();
            let reach = bounds.extents() + half;
            let delta = p - bounds.center();
            let pen = reach - delta.abs();
            if pen.x() <= 0.0 || pen.y() <= 0.0 || pen.z() <= 0.0 {
                continue;
            }
            let Some(axis) = collision::wall_axis(pen) else {
                continue;
            };
            let sign = if delta.component(axis) >= 0.0 { 1.0 } else { -1.0 };
            let face = bounds.center().component(axis) + sign * reach.component(axis);
            p = p.with_component(axis, face);
        }
        Ok(p)
    }
}
