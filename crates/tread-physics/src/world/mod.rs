// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The physics world: body ownership, registration, the control surface and
//! the per-step pipeline.

use serde::Serialize;
use tracing::{debug, instrument};
use tread_core::math::{Axis, Quat, Vec3};
use tread_geom::{Bounds, Transform};

use crate::body::RigidBody;
use crate::collision::{self, ContactEvent, ContactHooks, DefaultHooks, StepState};
use crate::config::PhysicsConfig;
use crate::error::PhysicsError;
use crate::ident::BodyId;
use crate::registry::ColliderRegistry;
use crate::shape::{Roles, ShapeClass};

mod entity;
mod set;

pub use entity::{Body, BodyDesc, Motion};
use set::BodySet;

/// Outcome of one [`PhysicsWorld::step`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StepReport {
    /// Gameplay events in the order they were produced.
    pub events: Vec<ContactEvent>,
    /// Bodies purged at the end of the step.
    pub removed: Vec<BodyId>,
    /// Pairs handed to the dispatcher.
    pub pairs_tested: usize,
    /// Pairs whose handler found a contact.
    pub contacts: usize,
    /// Dynamic bodies advanced by the integrator.
    pub integrated: usize,
}

/// Owns every body and runs the simulation.
///
/// Worlds are independent values; nothing is shared between instances.
#[derive(Debug)]
pub struct PhysicsWorld {
    pub(crate) config: PhysicsConfig,
    pub(crate) bodies: BodySet,
    pub(crate) registry: ColliderRegistry,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}

impl PhysicsWorld {
    /// Empty world using `config`.
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            config,
            bodies: BodySet::default(),
            registry: ColliderRegistry::new(),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Registered colliders in scan order.
    pub fn registry(&self) -> &ColliderRegistry {
        &self.registry
    }

    /// Number of live bodies, registered or not.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// `true` when the world holds no bodies.
    pub fn is_empty(&self) -> bool {
        self.bodies.len() == 0
    }

    /// Creates a body and, when `desc.enabled`, registers its collider.
    pub fn spawn(&mut self, desc: BodyDesc) -> Result<BodyId, PhysicsError> {
        desc.shape.validate()?;
        if !desc.position.is_finite() || !desc.scale.is_finite() {
            return Err(PhysicsError::InvalidShape("position and scale must be finite"));
        }
        let motion = if desc.dynamic {
            Motion::Dynamic(
                RigidBody::new(desc.position)
                    .with_velocity(desc.velocity)
                    .with_bounciness(desc.bounciness.unwrap_or(self.config.default_bounciness))
                    .with_restitution_threshold(
                        desc.restitution_threshold
                            .unwrap_or(self.config.default_restitution_threshold),
                    )
                    .with_gravity(desc.gravity),
            )
        } else {
            Motion::Static {
                position: desc.position,
            }
        };
        let enabled = desc.enabled;
        let class = desc.shape.class();
        let id = self.bodies.insert_with(|id| Body::new(id, desc, motion))?;
        if let Err(err) = self.refresh_bounds(id) {
            self.bodies.remove(id);
            return Err(err);
        }
        if enabled {
            self.registry.register(id);
        }
        debug!(body = %id, ?class, enabled, "spawned");
        Ok(id)
    }

    /// Removes a body immediately. Returns the removed body.
    pub fn despawn(&mut self, id: BodyId) -> Result<Body, PhysicsError> {
        let body = self.bodies.remove(id).ok_or(PhysicsError::UnknownBody(id))?;
        self.registry.deregister(id);
        debug!(body = %id, "despawned");
        Ok(body)
    }

    /// Registers or deregisters a body's collider. Returns whether anything
    /// changed.
    pub fn set_enabled(&mut self, id: BodyId, enabled: bool) -> Result<bool, PhysicsError> {
        self.body_ref(id)?;
        Ok(if enabled {
            self.registry.register(id)
        } else {
            self.registry.deregister(id)
        })
    }

    /// Body by handle.
    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id)
    }

    /// Every live body in slot order.
    pub fn bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter()
    }

    fn body_ref(&self, id: BodyId) -> Result<&Body, PhysicsError> {
        self.bodies.get(id).ok_or(PhysicsError::UnknownBody(id))
    }

    fn body_mut(&mut self, id: BodyId) -> Result<&mut Body, PhysicsError> {
        self.bodies.get_mut(id).ok_or(PhysicsError::UnknownBody(id))
    }

    fn rigid_mut(&mut self, id: BodyId) -> Result<&mut RigidBody, PhysicsError> {
        self.body_mut(id)?
            .rigid_body_mut()
            .ok_or(PhysicsError::NotDynamic(id))
    }

    /// World position.
    pub fn position(&self, id: BodyId) -> Result<Vec3, PhysicsError> {
        self.body_ref(id).map(Body::position)
    }

    /// Velocity; zero for static bodies.
    pub fn velocity(&self, id: BodyId) -> Result<Vec3, PhysicsError> {
        self.body_ref(id).map(Body::velocity)
    }

    /// Render-facing transform.
    pub fn transform(&self, id: BodyId) -> Result<Transform, PhysicsError> {
        self.body_ref(id).map(Body::transform)
    }

    /// Cached world bounds.
    pub fn bounds(&self, id: BodyId) -> Result<Bounds, PhysicsError> {
        self.body_ref(id).map(Body::bounds)
    }

    /// Adds `impulse` to a dynamic body's velocity.
    pub fn apply_impulse(&mut self, id: BodyId, impulse: Vec3) -> Result<(), PhysicsError> {
        self.rigid_mut(id)?.apply_impulse(impulse);
        Ok(())
    }

    /// Replaces a dynamic body's velocity.
    pub fn set_velocity(&mut self, id: BodyId, velocity: Vec3) -> Result<(), PhysicsError> {
        self.rigid_mut(id)?.set_velocity(velocity);
        Ok(())
    }

    /// Sets the kinematic orientation.
    pub fn set_rotation(&mut self, id: BodyId, rotation: Quat) -> Result<(), PhysicsError> {
        self.body_mut(id)?.set_rotation(rotation);
        self.refresh_bounds(id)
    }

    /// Teleports a body, static or dynamic, and refreshes its bounds.
    pub fn set_position(&mut self, id: BodyId, position: Vec3) -> Result<(), PhysicsError> {
        self.body_mut(id)?.set_position(position);
        self.refresh_bounds(id)
    }

    /// Moves a body to `proposed` after correcting it against every wall with
    /// [`PhysicsWorld::clamp_to_bounds`]. Returns the committed position.
    pub fn move_to(&mut self, id: BodyId, proposed: Vec3) -> Result<Vec3, PhysicsError> {
        let corrected = self.clamp_to_bounds(id, proposed)?;
        self.set_position(id, corrected)?;
        Ok(corrected)
    }

    /// See [`RigidBody::stop_on_ground`]; clearance comes from the config.
    pub fn stop_on_ground(
        &mut self,
        id: BodyId,
        normal: Vec3,
        ground_height: f32,
        half_height: f32,
    ) -> Result<(), PhysicsError> {
        let clearance = self.config.ground_clearance;
        self.rigid_mut(id)?
            .stop_on_ground(normal, ground_height, half_height, clearance);
        self.refresh_bounds(id)
    }

    /// See [`RigidBody::stop_on_wall`].
    pub fn stop_on_wall(
        &mut self,
        id: BodyId,
        normal: Vec3,
        boundary: f32,
        axis: Axis,
        half_extent: f32,
    ) -> Result<(), PhysicsError> {
        self.rigid_mut(id)?
            .stop_on_wall(normal, boundary, axis, half_extent);
        self.refresh_bounds(id)
    }

    /// See [`RigidBody::resolve_sphere_collision`]; `other` supplies the
    /// reference velocity.
    pub fn resolve_sphere_collision(
        &mut self,
        id: BodyId,
        normal: Vec3,
        penetration: f32,
        other: Option<BodyId>,
    ) -> Result<(), PhysicsError> {
        let other_velocity = other.map(|o| self.velocity(o)).transpose()?;
        self.rigid_mut(id)?
            .resolve_sphere_collision(normal, penetration, other_velocity);
        self.refresh_bounds(id)
    }

    fn refresh_bounds(&mut self, id: BodyId) -> Result<(), PhysicsError> {
        self.body_mut(id)?.refresh_bounds()?;
        Ok(())
    }

    fn refresh_registered(&mut self) -> Result<(), PhysicsError> {
        for id in self.registry.snapshot() {
            self.refresh_bounds(id)?;
        }
        Ok(())
    }

    fn is_live(&self, id: BodyId) -> bool {
        self.bodies.get(id).is_some_and(|b| !b.is_consumed())
    }

    fn land_moved(&mut self, order: &[BodyId], moved: &[BodyId]) -> Result<(), PhysicsError> {
        let grounds: Vec<(BodyId, Bounds, Roles)> = order
            .iter()
            .filter_map(|&id| self.bodies.get(id))
            .filter(|b| !b.is_consumed() && b.class() == ShapeClass::Box)
            .filter(|b| b.collider().roles().ground)
            .map(|b| (b.id(), b.bounds(), b.collider().roles()))
            .collect();
        for &id in moved {
            for &(ground, bounds, roles) in &grounds {
                if ground == id {
                    continue;
                }
                let Some(body) = self.bodies.get_mut(id) else {
                    break;
                };
                if collision::land_on_ground(body, bounds, roles, &self.config) {
                    body.refresh_bounds()?;
                }
            }
        }
        Ok(())
    }

    /// Advances the world by `dt` with [`DefaultHooks`].
    pub fn step(&mut self, dt: f32) -> Result<StepReport, PhysicsError> {
        self.step_with(dt, &mut DefaultHooks)
    }

    /// Advances the world by `dt` seconds.
    ///
    /// 1. Refresh every registered collider's bounds.
    /// 2. Scan pairs `(i, j > i)` in registration order, refreshing both
    ///    bounds before each test. Bodies consumed mid-scan are skipped.
    /// 3. Integrate each dynamic body no handler touched.
    /// 4. Refresh bounds, then give any integrated body that ended up inside
    ///    the top of a ground box its ground response, so no position leaves
    ///    the step below the surface.
    /// 5. Consume bodies below `world_floor`.
    /// 6. Purge consumed bodies and deliver events to `hooks`.
    #[instrument(skip(self, hooks), fields(bodies = self.registry.len()))]
    pub fn step_with<H>(&mut self, dt: f32, hooks: &mut H) -> Result<StepReport, PhysicsError>
    where
        H: ContactHooks + ?Sized,
    {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(PhysicsError::InvalidTimestep(dt));
        }
        let mut report = StepReport::default();
        let mut state = StepState::default();
        let order = self.registry.snapshot();

        self.refresh_registered()?;

        for (i, &a) in order.iter().enumerate() {
            for &b in &order[i + 1..] {
                if !self.is_live(a) {
                    break;
                }
                if !self.is_live(b) {
                    continue;
                }
                self.refresh_bounds(a)?;
                self.refresh_bounds(b)?;
                let Some((body_a, body_b)) = self.bodies.pair_mut(a, b) else {
                    continue;
                };
                report.pairs_tested += 1;
                collision::resolve_pair(body_a, body_b, &self.config, &mut *hooks, &mut state);
            }
        }

        let gravity = self.config.gravity;
        let mut moved = Vec::new();
        for &id in &order {
            if state.touched.contains(&id) {
                continue;
            }
            let Some(body) = self.bodies.get_mut(id) else {
                continue;
            };
            if body.is_consumed() {
                continue;
            }
            if let Some(rb) = body.rigid_body_mut() {
                rb.integrate(dt, gravity)?;
                moved.push(id);
            }
        }
        report.integrated = moved.len();

        self.refresh_registered()?;
        self.land_moved(&order, &moved)?;

        let floor = self.config.world_floor;
        for &id in &order {
            if let Some(body) = self.bodies.get_mut(id) {
                if !body.is_consumed() && body.position().y() < floor {
                    body.consume();
                    state.events.push(ContactEvent::FellOutOfWorld { body: id });
                }
            }
        }

        let consumed: Vec<BodyId> = self
            .bodies
            .iter()
            .filter(|b| b.is_consumed())
            .map(Body::id)
            .collect();
        for id in consumed {
            self.bodies.remove(id);
            self.registry.deregister(id);
            report.removed.push(id);
        }

        for event in &state.events {
            hooks.on_event(event);
        }
        report.events = state.events;
        report.contacts = state.contacts;
        debug!(
            pairs = report.pairs_tested,
            contacts = report.contacts,
            integrated = report.integrated,
            removed = report.removed.len(),
            "step complete"
        );
        Ok(report)
    }
}
