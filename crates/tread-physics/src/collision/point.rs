// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Projectile point handlers. A point that hits anything is consumed.

use tread_core::math::Vec3;

use super::{ContactEvent, PairRule, StepState};
use crate::shape::ShapeKind;
use crate::world::Body;

fn payload(point: &Body) -> (f32, f32) {
    match point.collider().kind() {
        ShapeKind::Point { force, damage } => (force, damage),
        _ => (0.0, 0.0),
    }
}

fn hit(point: &mut Body, target: &Body, damage: f32, state: &mut StepState) {
    point.consume();
    state.events.push(ContactEvent::ProjectileHit {
        projectile: point.id(),
        target: target.id(),
        damage,
    });
}

/// Point first, sphere or player second. Hits when the point lies within the
/// radius.
pub(super) fn point_sphere(point: &mut Body, target: &mut Body, state: &mut StepState) {
    let p = point.collider().center();
    if p.distance(&target.collider().center()) > target.collider().radius() {
        return;
    }
    state.contact(PairRule::PointSphere, point.id(), target.id());
    let (_, damage) = payload(point);
    hit(point, target, damage, state);
}

/// Point first, box second. A dynamic box is pushed along point → center by
/// the point's force.
pub(super) fn point_box(point: &mut Body, target: &mut Body, state: &mut StepState) {
    let p = point.collider().center();
    let bounds = target.bounds();
    if !bounds.contains(p) {
        return;
    }
    state.contact(PairRule::PointBox, point.id(), target.id());
    let (force, damage) = payload(point);
    let push: Vec3 = (bounds.center() - p).normalize() * force;
    if let Some(rb) = target.rigid_body_mut() {
        rb.apply_impulse(push);
    }
    hit(point, target, damage, state);
}
