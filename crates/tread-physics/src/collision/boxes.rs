// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Box/box handler.

use tracing::warn;
use tread_geom::Bounds;

use super::sphere::face_normal;
use super::{wall_axis, ContactEvent, PairRule, StepState};
use crate::config::PhysicsConfig;
use crate::world::Body;

/// Two boxes. Roles are checked in priority order trigger, ground, wall; two
/// plain boxes are crates and exchange an impulse.
pub(super) fn box_box(a: &mut Body, b: &mut Body, config: &PhysicsConfig, state: &mut StepState) {
    if !a.bounds().intersects(&b.bounds()) {
        return;
    }
    state.contact(PairRule::BoxBox, a.id(), b.id());
    let (ra, rb) = (a.collider().roles(), b.collider().roles());

    if ra.trigger || rb.trigger {
        let (trigger, other) = if ra.trigger { (a, b) } else { (b, a) };
        trigger_crate(trigger, other, state);
    } else if ra.ground || rb.ground {
        let (ground, other) = if ra.ground { (a, b) } else { (b, a) };
        ground_crate(ground, other);
    } else if ra.wall || rb.wall {
        let (wall, other) = if ra.wall { (a, b) } else { (b, a) };
        wall_crate(wall, other, state);
    } else {
        crate_crate(a, b, config);
    }
}

fn trigger_crate(trigger: &Body, other: &mut Body, state: &mut StepState) {
    if !other.collider().roles().is_plain() {
        return;
    }
    other.consume();
    state.events.push(ContactEvent::Scored {
        trigger: trigger.id(),
        body: other.id(),
    });
}

/// Snaps a plain crate onto the ground's top face. Only the vertical state is
/// corrected; the crate is left to integrate so sideways motion carries on.
fn ground_crate(ground: &Body, other: &mut Body) {
    if other.collider().roles().is_plain() {
        land_crate(ground.bounds(), other);
    }
}

/// Places a crate overlapping `ground` on top of it. Returns whether the crate
/// was dynamic and got corrected.
pub(super) fn land_crate(ground: Bounds, other: &mut Body) -> bool {
    if !ground.intersects(&other.bounds()) {
        return false;
    }
    let rest = ground.max().y() + other.collider().half_extents().y();
    let Some(rb) = other.rigid_body_mut() else {
        return false;
    };
    rb.settle_at(rest);
    true
}

/// Resolves along the shallower of X and Z and places the crate flush against
/// the face it approached from. An exact X/Z tie gets no response.
fn wall_crate(wall: &Body, other: &mut Body, state: &mut StepState) {
    if !other.collider().roles().is_plain() {
        return;
    }
    let wb = wall.bounds();
    let ob = other.bounds();
    let delta = ob.center() - wb.center();
    let pen = (wb.extents() + ob.extents()) - delta.abs();
    let Some(axis) = wall_axis(pen) else {
        return;
    };
    let normal = face_normal(delta, axis);
    let boundary = if normal.component(axis) > 0.0 {
        wb.max().component(axis)
    } else {
        wb.min().component(axis)
    };
    let half = ob.extents().component(axis);
    let overlapping = pen.component(axis) > 0.0;
    let id = other.id();
    if let Some(rb) = other.rigid_body_mut() {
        if rb.velocity().dot(&normal) >= 0.0 && !overlapping {
            return;
        }
        rb.stop_on_wall(normal, boundary, axis, half);
        state.touch(id);
    }
}

/// Reflects the relative velocity across the center line and applies
/// `crate_impulse_fraction` of it to each crate in opposite directions.
fn crate_crate(a: &mut Body, b: &mut Body, config: &PhysicsConfig) {
    let Ok(normal) = (b.bounds().center() - a.bounds().center()).try_normalize() else {
        warn!(a = %a.id(), b = %b.id(), "coincident crate centers; skipping impulse");
        return;
    };
    let relative = a.velocity() - b.velocity();
    let impulse = relative.reflect(&normal) * config.crate_impulse_fraction;
    if let Some(ra) = a.rigid_body_mut() {
        ra.apply_impulse(impulse);
    }
    if let Some(rb) = b.rigid_body_mut() {
        rb.apply_impulse(-impulse);
    }
}
