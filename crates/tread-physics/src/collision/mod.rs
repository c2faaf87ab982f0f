// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pairwise collision dispatch and contact reporting.
//!
//! Every unordered pair of registered bodies is classified by shape class
//! with [`classify_pair`] and handed to one handler. The shape classes are a
//! closed set, so the precedence between rules is fixed by the match:
//! sphere/box, then sphere/sphere, then box/box, then player pairs, then point
//! pairs. A pair handled by one rule is never seen by another.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::trace;
use tread_core::math::{Axis, Vec3};
use tread_geom::Bounds;

use crate::config::PhysicsConfig;
use crate::ident::BodyId;
use crate::shape::{Roles, ShapeClass};
use crate::world::Body;

mod boxes;
mod player;
mod point;
mod sphere;

/// Handler selected for a pair of shape classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairRule {
    /// Box first, sphere second.
    BoxSphere,
    /// Two spheres.
    SphereSphere,
    /// Two boxes.
    BoxBox,
    /// Player first, sphere second.
    PlayerSphere,
    /// Point first, sphere or player second.
    PointSphere,
    /// Point first, box second.
    PointBox,
}

/// Whether the pair must be swapped to match the rule's operand order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// `(a, b)` already matches.
    AsGiven,
    /// Handle as `(b, a)`.
    Swapped,
}

/// Picks the handler for a pair of shape classes, or `None` when the pair has
/// no interaction (player/box, player/player, point/point).
pub const fn classify_pair(a: ShapeClass, b: ShapeClass) -> Option<(PairRule, Order)> {
    use ShapeClass as S;
    let rule = match (a, b) {
        (S::Box, S::Sphere) => (PairRule::BoxSphere, Order::AsGiven),
        (S::Sphere, S::Box) => (PairRule::BoxSphere, Order::Swapped),
        (S::Sphere, S::Sphere) => (PairRule::SphereSphere, Order::AsGiven),
        (S::Box, S::Box) => (PairRule::BoxBox, Order::AsGiven),
        (S::Player, S::Sphere) => (PairRule::PlayerSphere, Order::AsGiven),
        (S::Sphere, S::Player) => (PairRule::PlayerSphere, Order::Swapped),
        (S::Point, S::Sphere | S::Player) => (PairRule::PointSphere, Order::AsGiven),
        (S::Sphere | S::Player, S::Point) => (PairRule::PointSphere, Order::Swapped),
        (S::Point, S::Box) => (PairRule::PointBox, Order::AsGiven),
        (S::Box, S::Point) => (PairRule::PointBox, Order::Swapped),
        (S::Player, S::Box | S::Player) | (S::Box, S::Player) | (S::Point, S::Point) => {
            return None;
        }
    };
    Some(rule)
}

/// Wall resolution axis for per-axis penetration depths: the shallower of X
/// and Z, or `None` on an exact tie.
///
/// Shared by the sphere and crate wall handlers and by
/// [`crate::PhysicsWorld::clamp_to_bounds`] so a position the step leaves
/// alone is one the clamp leaves alone too.
pub(crate) fn wall_axis(pen: Vec3) -> Option<Axis> {
    if pen.x() < pen.z() {
        Some(Axis::X)
    } else if pen.z() < pen.x() {
        Some(Axis::Z)
    } else {
        None
    }
}

/// Gameplay-level outcome reported by a step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ContactEvent {
    /// A plain box entered a trigger and was consumed.
    Scored {
        /// The trigger box.
        trigger: BodyId,
        /// The consumed box.
        body: BodyId,
    },
    /// A projectile point struck a body and was consumed.
    ProjectileHit {
        /// The consumed point.
        projectile: BodyId,
        /// The body it struck.
        target: BodyId,
        /// Damage carried by the point.
        damage: f32,
    },
    /// The player overlapped a sphere.
    PlayerHit {
        /// The player.
        player: BodyId,
        /// The sphere it touched.
        other: BodyId,
    },
    /// A body dropped below the world floor and was removed.
    FellOutOfWorld {
        /// The removed body.
        body: BodyId,
    },
}

/// How the world should respond when the player touches a sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerResponse {
    /// Push the other body out of the player.
    #[default]
    Repel,
    /// Leave both bodies as they are.
    Ignore,
}

/// Gameplay callbacks invoked during [`crate::PhysicsWorld::step_with`].
pub trait ContactHooks {
    /// Decides the physical response to a player contact. The
    /// [`ContactEvent::PlayerHit`] event is reported either way.
    fn on_player_contact(&mut self, player: BodyId, other: BodyId) -> PlayerResponse {
        let _ = (player, other);
        PlayerResponse::Repel
    }

    /// Observes each event after the scan, in the order it was produced.
    fn on_event(&mut self, event: &ContactEvent) {
        let _ = event;
    }
}

/// Hooks that take every default.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHooks;

impl ContactHooks for DefaultHooks {}

/// Mutable bookkeeping threaded through the handlers for one step.
#[derive(Debug, Default)]
pub(crate) struct StepState {
    pub(crate) events: Vec<ContactEvent>,
    pub(crate) touched: BTreeSet<BodyId>,
    pub(crate) contacts: usize,
}

impl StepState {
    fn touch(&mut self, id: BodyId) {
        self.touched.insert(id);
    }

    fn contact(&mut self, rule: PairRule, a: BodyId, b: BodyId) {
        self.contacts += 1;
        trace!(?rule, a = %a, b = %b, "contact");
    }
}

/// Runs the handler for one pair. Bodies must be distinct and neither may be
/// consumed.
pub(crate) fn resolve_pair<H>(
    a: &mut Body,
    b: &mut Body,
    config: &PhysicsConfig,
    hooks: &mut H,
    state: &mut StepState,
) where
    H: ContactHooks + ?Sized,
{
    let Some((rule, order)) = classify_pair(a.class(), b.class()) else {
        return;
    };
    let (first, second) = match order {
        Order::AsGiven => (a, b),
        Order::Swapped => (b, a),
    };
    match rule {
        PairRule::BoxSphere => sphere::box_sphere(first, second, config, state),
        PairRule::SphereSphere => sphere::sphere_sphere(first, second, state),
        PairRule::BoxBox => boxes::box_box(first, second, config, state),
        PairRule::PlayerSphere => player::player_sphere(first, second, hooks, state),
        PairRule::PointSphere => point::point_sphere(first, second, state),
        PairRule::PointBox => point::point_box(first, second, state),
    }
}

/// Corrects a body the integrator moved into the top of the ground box
/// `ground`: spheres take the same ground response as during the scan, plain
/// crates are settled on top. Returns whether the body was corrected.
pub(crate) fn land_on_ground(
    body: &mut Body,
    ground: Bounds,
    roles: Roles,
    config: &PhysicsConfig,
) -> bool {
    match body.class() {
        ShapeClass::Sphere => sphere::land_sphere(ground, roles, body, config),
        ShapeClass::Box if body.collider().roles().is_plain() => boxes::land_crate(ground, body),
        _ => false,
    }
}
