// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use thiserror::Error;
use tread_core::MathError;

use crate::ident::BodyId;

/// Errors emitted by the physics world.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// A math operation inside the transform pipeline failed.
    #[error(transparent)]
    Math(#[from] MathError),
    /// The handle does not name a live body (never spawned, or already removed).
    #[error("unknown body: {0}")]
    UnknownBody(BodyId),
    /// A body-control call targeted a body without a [`crate::RigidBody`].
    #[error("body {0} is static")]
    NotDynamic(BodyId),
    /// `step` was given a non-finite or non-positive timestep.
    #[error("invalid timestep: {0}")]
    InvalidTimestep(f32),
    /// A body description carried a negative or non-finite dimension.
    #[error("invalid shape: {0}")]
    InvalidShape(&'static str),
    /// Every slot index is in use.
    #[error("body capacity exhausted")]
    CapacityExhausted,
    /// A [`crate::PhysicsConfig`] field is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}
