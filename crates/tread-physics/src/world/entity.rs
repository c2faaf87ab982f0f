// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Bodies owned by the world and the descriptors used to spawn them.

use serde::{Deserialize, Serialize};
use tread_core::math::{Quat, Vec3};
use tread_core::MathError;
use tread_geom::{Bounds, Transform};

use crate::body::RigidBody;
use crate::ident::BodyId;
use crate::shape::{Collider, Roles, ShapeClass, ShapeKind};

/// Where a body's position lives.
///
/// Static bodies hold their position directly; dynamic bodies hold it inside
/// their [`RigidBody`]. There is no second copy anywhere else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Never integrated; moved only by explicit calls.
    Static {
        /// World position.
        position: Vec3,
    },
    /// Integrated every step and moved by collision responses.
    Dynamic(RigidBody),
}

/// A physics entity: collider, motion state and kinematic orientation.
#[derive(Debug, Clone)]
pub struct Body {
    id: BodyId,
    label: String,
    collider: Collider,
    motion: Motion,
    rotation: Quat,
    scale: Vec3,
    consumed: bool,
}

impl Body {
    pub(crate) fn new(id: BodyId, desc: BodyDesc, motion: Motion) -> Self {
        Self {
            id,
            label: desc.label,
            collider: Collider::new(desc.shape, desc.roles),
            motion,
            rotation: desc.rotation,
            scale: desc.scale,
            consumed: false,
        }
    }

    /// Handle of this body.
    pub fn id(&self) -> BodyId {
        self.id
    }

    /// Free-form label given at spawn.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Collider and its cached bounds.
    pub fn collider(&self) -> &Collider {
        &self.collider
    }

    /// Shape tag.
    pub fn class(&self) -> ShapeClass {
        self.collider.class()
    }

    /// Motion state.
    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    /// The rigid body, if this body is dynamic.
    pub fn rigid_body(&self) -> Option<&RigidBody> {
        match &self.motion {
            Motion::Dynamic(rb) => Some(rb),
            Motion::Static { .. } => None,
        }
    }

    pub(crate) fn rigid_body_mut(&mut self) -> Option<&mut RigidBody> {
        match &mut self.motion {
            Motion::Dynamic(rb) => Some(rb),
            Motion::Static { .. } => None,
        }
    }

    /// `true` for bodies with a [`RigidBody`].
    pub fn is_dynamic(&self) -> bool {
        matches!(self.motion, Motion::Dynamic(_))
    }

    /// World position.
    pub fn position(&self) -> Vec3 {
        match &self.motion {
            Motion::Static { position } => *position,
            Motion::Dynamic(rb) => rb.position(),
        }
    }

    /// Velocity; static bodies report zero.
    pub fn velocity(&self) -> Vec3 {
        self.rigid_body().map_or(Vec3::ZERO, RigidBody::velocity)
    }

    /// Kinematic orientation.
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// World scale.
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Read-only projection of the physics state for renderers.
    pub fn transform(&self) -> Transform {
        Transform::new(self.position(), self.rotation, self.scale)
    }

    /// Bounds as of the last refresh.
    pub fn bounds(&self) -> Bounds {
        self.collider.bounds()
    }

    /// `true` once the body has been consumed or fallen out of the world this
    /// step; it is skipped until the end-of-step purge removes it.
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    pub(crate) fn consume(&mut self) {
        self.consumed = true;
    }

    pub(crate) fn set_position(&mut self, position: Vec3) {
        match &mut self.motion {
            Motion::Static { position: p } => *p = position,
            Motion::Dynamic(rb) => rb.set_position(position),
        }
    }

    pub(crate) fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }

    pub(crate) fn refresh_bounds(&mut self) -> Result<(), MathError> {
        let transform = self.transform();
        self.collider.update_bounds(&transform)
    }
}

/// Everything needed to spawn a body.
///
/// Fields left at their defaults produce an enabled, static, unit-scale body at
/// the origin. Dynamic bodies take any unset bounciness or restitution
/// threshold from the world's [`crate::PhysicsConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyDesc {
    /// Free-form label for logs and tools.
    pub label: String,
    /// Collision shape.
    pub shape: ShapeKind,
    /// Role flags (meaningful for boxes).
    pub roles: Roles,
    /// Initial world position.
    pub position: Vec3,
    /// Initial orientation.
    pub rotation: Quat,
    /// World scale.
    pub scale: Vec3,
    /// Whether the body gets a [`RigidBody`].
    pub dynamic: bool,
    /// Initial velocity (dynamic bodies only).
    pub velocity: Vec3,
    /// Bounciness override.
    pub bounciness: Option<f32>,
    /// Restitution threshold override.
    pub restitution_threshold: Option<f32>,
    /// Whether gravity applies (dynamic bodies only).
    pub gravity: bool,
    /// Whether the collider is registered on spawn.
    pub enabled: bool,
}

impl Default for BodyDesc {
    fn default() -> Self {
        Self {
            label: String::new(),
            shape: ShapeKind::Sphere { radius: 0.5 },
            roles: Roles::NONE,
            position: Vec3::ZERO,
            rotation: Quat::identity(),
            scale: Vec3::ONE,
            dynamic: false,
            velocity: Vec3::ZERO,
            bounciness: None,
            restitution_threshold: None,
            gravity: true,
            enabled: true,
        }
    }
}

impl BodyDesc {
    /// Body with the given shape and default settings.
    pub fn new(shape: ShapeKind) -> Self {
        Self {
            shape,
            ..Self::default()
        }
    }

    /// Sphere of `radius`.
    pub fn sphere(radius: f32) -> Self {
        Self::new(ShapeKind::Sphere { radius })
    }

    /// Plain box (a crate) of full `size`.
    pub fn cuboid(size: Vec3) -> Self {
        Self::new(ShapeKind::Box { size })
    }

    /// Ground-flagged box.
    pub fn ground(size: Vec3) -> Self {
        Self::cuboid(size).with_roles(Roles::GROUND)
    }

    /// Wall-flagged box.
    pub fn wall(size: Vec3) -> Self {
        Self::cuboid(size).with_roles(Roles::WALL)
    }

    /// Trigger-flagged box.
    pub fn trigger(size: Vec3) -> Self {
        Self::cuboid(size).with_roles(Roles::TRIGGER)
    }

    /// Projectile point.
    pub fn point(force: f32, damage: f32) -> Self {
        Self::new(ShapeKind::Point { force, damage })
    }

    /// Player tank of `radius`.
    pub fn player(radius: f32) -> Self {
        Self::new(ShapeKind::Player { radius })
    }

    /// Sets the label.
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the initial position.
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Sets the orientation.
    pub fn rotated(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the world scale.
    pub fn scaled(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Replaces the role flags.
    pub fn with_roles(mut self, roles: Roles) -> Self {
        self.roles = roles;
        self
    }

    /// Makes the body dynamic.
    pub fn dynamic(mut self) -> Self {
        self.dynamic = true;
        self
    }

    /// Makes the body dynamic with an initial velocity.
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.dynamic = true;
        self.velocity = velocity;
        self
    }

    /// Overrides bounciness.
    pub fn with_bounciness(mut self, bounciness: f32) -> Self {
        self.bounciness = Some(bounciness);
        self
    }

    /// Overrides the restitution threshold.
    pub fn with_restitution_threshold(mut self, threshold: f32) -> Self {
        self.restitution_threshold = Some(threshold);
        self
    }

    /// Disables gravity.
    pub fn without_gravity(mut self) -> Self {
        self.gravity = false;
        self
    }

    /// Spawns without registering the collider.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}
