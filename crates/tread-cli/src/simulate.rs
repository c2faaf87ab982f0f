// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `tread simulate`

use std::io::Write;

use anyhow::{ensure, Context, Result};
use serde::Serialize;
use tracing::{debug, info};
use tread_core::math::Vec3;
use tread_physics::{Body, BodyId, ContactEvent, PhysicsConfig, PhysicsWorld, ShapeClass};

use crate::cli::{Format, SimulateArgs};
use crate::scenario;

#[derive(Debug, Serialize)]
struct TimedEvent {
    step: usize,
    #[serde(flatten)]
    event: ContactEvent,
}

#[derive(Debug, Serialize)]
struct BodyState {
    id: BodyId,
    label: String,
    class: ShapeClass,
    position: Vec3,
    velocity: Vec3,
}

impl From<&Body> for BodyState {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id(),
            label: body.label().to_owned(),
            class: body.class(),
            position: body.position(),
            velocity: body.velocity(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Summary {
    scene: String,
    steps: usize,
    dt: f32,
    events: Vec<TimedEvent>,
    removed: Vec<BodyId>,
    bodies: Vec<BodyState>,
}

pub fn run(args: &SimulateArgs, config: PhysicsConfig, out: &mut impl Write) -> Result<()> {
    let dt = args.dt.unwrap_or(config.fixed_dt);
    ensure!(dt.is_finite() && dt > 0.0, "--dt must be a positive number of seconds");

    let (scene, descs) = match &args.scene {
        Some(path) => (path.display().to_string(), scenario::load_scene(path)?),
        None => (args.scenario.name().to_owned(), scenario::bodies(args.scenario)),
    };
    let mut world = PhysicsWorld::new(config);
    for desc in descs {
        let label = desc.label.clone();
        world
            .spawn(desc)
            .with_context(|| format!("spawning `{label}`"))?;
    }
    info!(scene = %scene, bodies = world.len(), steps = args.steps, dt, "simulating");

    let mut events = Vec::new();
    let mut removed = Vec::new();
    for step in 1..=args.steps {
        let report = world.step(dt)?;
        for event in report.events {
            debug!(step, ?event, "event");
            events.push(TimedEvent { step, event });
        }
        removed.extend(report.removed);
    }
    info!(events = events.len(), removed = removed.len(), "simulation finished");

    let summary = Summary {
        scene,
        steps: args.steps,
        dt,
        events,
        removed,
        bodies: world.bodies().map(BodyState::from).collect(),
    };
    match args.format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, &summary)?;
            writeln!(out)?;
        }
        Format::Text => write_text(&summary, out)?,
    }
    Ok(())
}

pub fn fmt_vec(v: Vec3) -> String {
    format!("({:.3}, {:.3}, {:.3})", v.x(), v.y(), v.z())
}

fn describe(event: &ContactEvent) -> String {
    match *event {
        ContactEvent::Scored { trigger, body } => format!("scored: {body} entered {trigger}"),
        ContactEvent::ProjectileHit {
            projectile,
            target,
            damage,
        } => format!("projectile hit: {projectile} struck {target} for {damage} damage"),
        ContactEvent::PlayerHit { player, other } => {
            format!("player hit: {player} touched {other}")
        }
        ContactEvent::FellOutOfWorld { body } => format!("fell out of world: {body}"),
    }
}

fn write_text(summary: &Summary, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "scene {}: {} steps at dt {:.6}",
        summary.scene, summary.steps, summary.dt
    )?;
    writeln!(out, "events:")?;
    if summary.events.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for e in &summary.events {
        writeln!(out, "  step {:>5}  {}", e.step, describe(&e.event))?;
    }
    writeln!(out, "bodies:")?;
    for b in &summary.bodies {
        writeln!(
            out,
            "  {:<8} {:<12} {:<7} p {}  v {}",
            b.id.to_string(),
            b.label,
            format!("{:?}", b.class).to_lowercase(),
            fmt_vec(b.position),
            fmt_vec(b.velocity),
        )?;
    }
    Ok(())
}
