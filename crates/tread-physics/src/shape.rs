// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shape descriptors and the per-body collider.

use serde::{Deserialize, Serialize};
use tread_core::math::Vec3;
use tread_core::MathError;
use tread_geom::{Bounds, Transform};

use crate::error::PhysicsError;

/// Shape carried by a collider, in local (unscaled) units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeKind {
    /// Projectile point. `force` is the impulse it imparts to crates it enters;
    /// `damage` is reported to spheres and players it strikes.
    Point {
        /// Impulse magnitude applied on entering a box.
        force: f32,
        /// Damage reported on hitting a sphere or player.
        damage: f32,
    },
    /// Sphere of the given radius.
    Sphere {
        /// Local radius.
        radius: f32,
    },
    /// Axis-aligned box of the given full size.
    Box {
        /// Local full size along each axis.
        size: Vec3,
    },
    /// The player's tank, tested as a sphere.
    Player {
        /// Local radius.
        radius: f32,
    },
}

impl ShapeKind {
    /// Payload-free tag used for dispatch and query filters.
    pub const fn class(&self) -> ShapeClass {
        match self {
            Self::Point { .. } => ShapeClass::Point,
            Self::Sphere { .. } => ShapeClass::Sphere,
            Self::Box { .. } => ShapeClass::Box,
            Self::Player { .. } => ShapeClass::Player,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), PhysicsError> {
        let ok = match *self {
            Self::Point { force, damage } => force.is_finite() && damage.is_finite(),
            Self::Sphere { radius } | Self::Player { radius } => {
                radius.is_finite() && radius >= 0.0
            }
            Self::Box { size } => size.is_finite() && size.min(&Vec3::ZERO) == Vec3::ZERO,
        };
        if ok {
            Ok(())
        } else {
            Err(PhysicsError::InvalidShape(match self.class() {
                ShapeClass::Point => "point force and damage must be finite",
                ShapeClass::Sphere | ShapeClass::Player => "radius must be finite and >= 0",
                ShapeClass::Box => "box size must be finite and >= 0",
            }))
        }
    }
}

/// Shape tag without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeClass {
    /// See [`ShapeKind::Point`].
    Point,
    /// See [`ShapeKind::Sphere`].
    Sphere,
    /// See [`ShapeKind::Box`].
    Box,
    /// See [`ShapeKind::Player`].
    Player,
}

impl ShapeClass {
    /// Spheres and players share the sphere intersection test.
    pub const fn is_sphere_like(self) -> bool {
        matches!(self, Self::Sphere | Self::Player)
    }
}

/// Role flags that select the response a box gives on contact.
///
/// A box with no flags set is a plain crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Roles {
    /// Bodies come to rest on top of this box.
    pub ground: bool,
    /// Bodies are held flush against this box's X or Z faces.
    pub wall: bool,
    /// Overlapping crates are consumed and scored; no physical response.
    pub trigger: bool,
}

impl Roles {
    /// No flags.
    pub const NONE: Self = Self {
        ground: false,
        wall: false,
        trigger: false,
    };
    /// Ground only.
    pub const GROUND: Self = Self {
        ground: true,
        wall: false,
        trigger: false,
    };
    /// Wall only.
    pub const WALL: Self = Self {
        ground: false,
        wall: true,
        trigger: false,
    };
    /// Trigger only.
    pub const TRIGGER: Self = Self {
        ground: false,
        wall: false,
        trigger: true,
    };

    /// `true` when no role flag is set.
    pub const fn is_plain(self) -> bool {
        !(self.ground || self.wall || self.trigger)
    }
}

/// Shape plus roles plus the bounds derived from the owner's transform.
///
/// Bounds are a cache: they are rewritten by [`Collider::update_bounds`] and
/// nowhere else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    kind: ShapeKind,
    roles: Roles,
    bounds: Bounds,
    radius: f32,
}

impl Collider {
    /// Collider with zero bounds; call [`Collider::update_bounds`] before use.
    pub fn new(kind: ShapeKind, roles: Roles) -> Self {
        Self {
            kind,
            roles,
            bounds: Bounds::default(),
            radius: 0.0,
        }
    }

    /// Shape descriptor.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Shape tag.
    pub fn class(&self) -> ShapeClass {
        self.kind.class()
    }

    /// Role flags.
    pub fn roles(&self) -> Roles {
        self.roles
    }

    /// World-space bounds as of the last refresh.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// World-space center as of the last refresh.
    pub fn center(&self) -> Vec3 {
        self.bounds.center()
    }

    /// World radius for spheres and players; zero for points and boxes.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// World half-size along each axis.
    pub fn half_extents(&self) -> Vec3 {
        self.bounds.extents()
    }

    /// Recomputes bounds from `transform` through the matrix pipeline.
    ///
    /// - Center is the translation read back from `T · R · S`.
    /// - Box size is local size times world scale.
    /// - Sphere and player radius is local radius times the largest scale
    ///   component.
    /// - Points get zero-sized bounds.
    pub fn update_bounds(&mut self, transform: &Transform) -> Result<(), MathError> {
        let m = transform.to_matrix()?;
        let center = m.extract_position()?;
        let scale = m.extract_scale()?;
        match self.kind {
            ShapeKind::Point { .. } => {
                self.radius = 0.0;
                self.bounds.set(center, Vec3::ZERO);
            }
            ShapeKind::Sphere { radius } | ShapeKind::Player { radius } => {
                self.radius = radius * scale.max_element();
                self.bounds.set(center, Vec3::splat(2.0 * self.radius));
            }
            ShapeKind::Box { size } => {
                self.radius = 0.0;
                self.bounds.set(center, size.mul(&scale));
            }
        }
        Ok(())
    }
}
