// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `tread trajectory`

use std::io::Write;

use anyhow::Result;
use tracing::info;
use tread_physics::{predict_trajectory, PhysicsConfig, PhysicsWorld, TrajectoryParams};

use crate::cli::{Format, TrajectoryArgs};
use crate::scenario;
use crate::simulate::fmt_vec;

pub fn run(args: &TrajectoryArgs, config: PhysicsConfig, out: &mut impl Write) -> Result<()> {
    let mut world = PhysicsWorld::new(config);
    world.spawn(scenario::proving_ground())?;

    let mut params = TrajectoryParams::new(args.origin, args.velocity);
    params.dt = args.dt.unwrap_or(config.fixed_dt);
    params.max_steps = args.max_steps;
    let path = predict_trajectory(&world, &params)?;
    let steps = path.points.len().saturating_sub(1);
    info!(steps, hit = path.hit.is_some(), "trajectory predicted");

    if args.format == Format::Json {
        serde_json::to_writer_pretty(&mut *out, &path)?;
        writeln!(out)?;
        return Ok(());
    }
    if args.points {
        for (i, p) in path.points.iter().enumerate() {
            writeln!(out, "{i:>5}  {}", fmt_vec(*p))?;
        }
    }
    match path.hit {
        Some(hit) => writeln!(
            out,
            "impact at {} on {} after {steps} steps",
            fmt_vec(hit.point),
            hit.body
        )?,
        None => writeln!(
            out,
            "no impact within {steps} steps; last point {}",
            path.points.last().map_or_else(String::new, |p| fmt_vec(*p))
        )?,
    }
    Ok(())
}
