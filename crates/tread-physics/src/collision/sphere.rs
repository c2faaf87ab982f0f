// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sphere/box and sphere/sphere handlers.

use tracing::warn;
use tread_core::math::{Axis, Vec3};
use tread_geom::Bounds;

use super::{wall_axis, PairRule, StepState};
use crate::config::PhysicsConfig;
use crate::shape::Roles;
use crate::world::Body;

/// How a sphere touching a box should respond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum BoxContact {
    /// Rest on (or bounce off) the top or bottom face.
    Ground { normal: Vec3, height: f32 },
    /// Held flush against an X or Z face.
    Wall {
        normal: Vec3,
        boundary: f32,
        axis: Axis,
    },
    /// Trigger, plain crate, or an ambiguous tie: no response.
    Neutral,
}

/// Signed unit normal along `axis`, pointing to the side `delta` lies on.
pub(crate) fn face_normal(delta: Vec3, axis: Axis) -> Vec3 {
    let sign = if delta.component(axis) >= 0.0 { 1.0 } else { -1.0 };
    Vec3::ZERO.with_component(axis, sign)
}

/// Classifies a sphere contact against a box by per-axis penetration.
///
/// Penetration on an axis is `(box extent + radius) - |center delta|`. The
/// contact is ground when the box is ground-flagged and Y is strictly the
/// shallowest axis; otherwise wall on the shallower of X and Z when the box is
/// wall-flagged, with an exact X/Z tie left neutral.
pub(crate) fn classify_box_contact(
    bounds: Bounds,
    roles: Roles,
    center: Vec3,
    radius: f32,
) -> BoxContact {
    let delta = center - bounds.center();
    let pen = (bounds.extents() + Vec3::splat(radius)) - delta.abs();

    if roles.ground && pen.y() < pen.x() && pen.y() < pen.z() {
        let normal = face_normal(delta, Axis::Y);
        let height = if normal.y() > 0.0 {
            bounds.max().y()
        } else {
            bounds.min().y()
        };
        return BoxContact::Ground { normal, height };
    }
    if roles.wall {
        let Some(axis) = wall_axis(pen) else {
            return BoxContact::Neutral;
        };
        let normal = face_normal(delta, axis);
        let boundary = if normal.component(axis) > 0.0 {
            bounds.max().component(axis)
        } else {
            bounds.min().component(axis)
        };
        return BoxContact::Wall {
            normal,
            boundary,
            axis,
        };
    }
    BoxContact::Neutral
}

/// Box first, sphere second.
///
/// Contact is inclusive (`distance <= radius`) so a sphere resting exactly on
/// a face stays in contact. Only a dynamic sphere responds.
pub(super) fn box_sphere(
    bx: &mut Body,
    sphere: &mut Body,
    config: &PhysicsConfig,
    state: &mut StepState,
) {
    let center = sphere.collider().center();
    let radius = sphere.collider().radius();
    let closest = bx.bounds().closest_point(center);
    let distance = closest.distance(&center);
    if distance > radius {
        return;
    }
    state.contact(PairRule::BoxSphere, bx.id(), sphere.id());

    let contact = classify_box_contact(bx.bounds(), bx.collider().roles(), center, radius);
    let id = sphere.id();
    let Some(rb) = sphere.rigid_body_mut() else {
        return;
    };
    match contact {
        BoxContact::Ground { normal, height } => {
            rb.stop_on_ground(normal, height, radius, config.ground_clearance);
            state.touch(id);
        }
        BoxContact::Wall {
            normal,
            boundary,
            axis,
        } => {
            // A sphere resting flush and moving away is left to integrate.
            if rb.velocity().dot(&normal) < 0.0 || distance < radius {
                rb.stop_on_wall(normal, boundary, axis, radius);
                state.touch(id);
            }
        }
        BoxContact::Neutral => {}
    }
}

/// Ground response for a sphere the integrator carried below the top face of
/// `ground`. A sphere still rising is only lifted back to the surface.
pub(super) fn land_sphere(
    ground: Bounds,
    roles: Roles,
    sphere: &mut Body,
    config: &PhysicsConfig,
) -> bool {
    let center = sphere.collider().center();
    let radius = sphere.collider().radius();
    if ground.closest_point(center).distance(&center) > radius {
        return false;
    }
    let BoxContact::Ground { normal, height } = classify_box_contact(ground, roles, center, radius)
    else {
        return false;
    };
    let rest = height + radius;
    if normal.y() <= 0.0 || center.y() >= rest {
        return false;
    }
    let Some(rb) = sphere.rigid_body_mut() else {
        return false;
    };
    if rb.velocity().y() > 0.0 {
        rb.set_position(rb.position().with_y(rest));
    } else {
        rb.stop_on_ground(normal, height, radius, config.ground_clearance);
    }
    true
}

/// Two spheres: push apart along the center line and exchange
/// restitution-scaled velocity.
///
/// When both are dynamic each takes half the overlap and reflects against the
/// other's pre-contact velocity; a single dynamic sphere takes all of it.
pub(super) fn sphere_sphere(a: &mut Body, b: &mut Body, state: &mut StepState) {
    let (ca, cb) = (a.collider().center(), b.collider().center());
    let overlap = a.collider().radius() + b.collider().radius() - ca.distance(&cb);
    if overlap <= 0.0 {
        return;
    }
    state.contact(PairRule::SphereSphere, a.id(), b.id());

    let normal = (cb - ca).try_normalize().unwrap_or_else(|_| {
        warn!(a = %a.id(), b = %b.id(), "coincident sphere centers; separating along +Y");
        Vec3::UNIT_Y
    });
    let (va, vb) = (a.velocity(), b.velocity());
    let (ida, idb) = (a.id(), b.id());
    match (a.rigid_body_mut(), b.rigid_body_mut()) {
        (Some(ra), Some(rb)) => {
            ra.resolve_sphere_collision(-normal, overlap * 0.5, Some(vb));
            rb.resolve_sphere_collision(normal, overlap * 0.5, Some(va));
            state.touch(ida);
            state.touch(idb);
        }
        (Some(ra), None) => {
            ra.resolve_sphere_collision(-normal, overlap, None);
            state.touch(ida);
        }
        (None, Some(rb)) => {
            rb.resolve_sphere_collision(normal, overlap, None);
            state.touch(idb);
        }
        (None, None) => {}
    }
}
