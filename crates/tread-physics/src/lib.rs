// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! tread-physics: the rigid-body and collision core for Tread.
//!
//! A [`PhysicsWorld`] owns every body, its collider and its motion state.
//! Each call to [`PhysicsWorld::step`] runs the fixed pipeline:
//!
//! 1. refresh every collider's [`tread_geom::Bounds`] from its transform;
//! 2. test every unordered pair in registration order and dispatch it to a
//!    shape-pair handler (see [`collision::classify_pair`]);
//! 3. integrate each dynamic body that no handler touched;
//! 4. refresh bounds again, drop bodies below the world floor, and purge
//!    anything consumed during the step.
//!
//! Queries ([`PhysicsWorld::raycast`], [`PhysicsWorld::segment_cast`],
//! [`PhysicsWorld::clamp_to_bounds`]) and [`trajectory::predict_trajectory`]
//! read the same collider set without mutating it.
//!
//! Rotation is kinematic: bodies carry an orientation for rendering, but only
//! positions and velocities are simulated.
#![forbid(unsafe_code)]

mod body;
pub mod collision;
mod config;
mod error;
mod ident;
mod query;
mod registry;
mod shape;
pub mod trajectory;
mod world;

pub use body::RigidBody;
pub use collision::{ContactEvent, ContactHooks, DefaultHooks, PlayerResponse};
pub use config::PhysicsConfig;
pub use error::PhysicsError;
pub use ident::BodyId;
pub use query::{QueryFilter, RayHit, SegmentHit};
pub use registry::ColliderRegistry;
pub use shape::{Collider, Roles, ShapeClass, ShapeKind};
pub use trajectory::{predict_trajectory, Trajectory, TrajectoryParams};
pub use world::{Body, BodyDesc, Motion, PhysicsWorld, StepReport};
