// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Ballistic trajectory prediction for aiming.
//!
//! The shell is advanced with the same semi-implicit Euler step as a dynamic
//! body, and each sub-step is segment-cast against the world so the first
//! impact is found without tunnelling.

use serde::{Deserialize, Serialize};
use tread_core::math::Vec3;

use crate::body::RigidBody;
use crate::error::PhysicsError;
use crate::query::{QueryFilter, SegmentHit};
use crate::world::PhysicsWorld;

/// Inputs to [`predict_trajectory`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryParams {
    /// Launch point.
    pub origin: Vec3,
    /// Launch velocity.
    pub velocity: Vec3,
    /// Integration step.
    pub dt: f32,
    /// Upper bound on sub-steps.
    pub max_steps: usize,
    /// Which bodies the shell can hit; usually excludes the firing tank.
    pub filter: QueryFilter,
}

impl TrajectoryParams {
    /// 1/60 s steps for up to ten seconds of flight, hitting anything.
    pub fn new(origin: Vec3, velocity: Vec3) -> Self {
        Self {
            origin,
            velocity,
            dt: 1.0 / 60.0,
            max_steps: 600,
            filter: QueryFilter::new(),
        }
    }
}

/// Predicted flight path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    /// Origin followed by each sub-step end point; the last point is the
    /// impact point when `hit` is set.
    pub points: Vec<Vec3>,
    /// First body struck, if any.
    pub hit: Option<SegmentHit>,
}

/// Traces a shell fired from `params.origin` under the world's gravity.
pub fn predict_trajectory(
    world: &PhysicsWorld,
    params: &TrajectoryParams,
) -> Result<Trajectory, PhysicsError> {
    if !params.dt.is_finite() || params.dt <= 0.0 {
        return Err(PhysicsError::InvalidTimestep(params.dt));
    }
    let gravity = world.config().gravity;
    let mut shell = RigidBody::new(params.origin).with_velocity(params.velocity);
    let mut points = Vec::with_capacity(params.max_steps.min(1024) + 1);
    points.push(params.origin);

    for _ in 0..params.max_steps {
        let start = shell.position();
        shell.integrate(params.dt, gravity)?;
        let end = shell.position();
        if let Some(hit) = world.segment_cast(start, end, params.filter) {
            points.push(hit.point);
            return Ok(Trajectory {
                points,
                hit: Some(hit),
            });
        }
        points.push(end);
    }
    Ok(Trajectory { points, hit: None })
}
