// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Built-in demo scenes and scene-file loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tread_core::math::{Degrees, Quat, Vec3};
use tread_physics::BodyDesc;

use crate::cli::ScenarioKind;

/// Wide ground slab with its top face at `y = 0`.
pub fn proving_ground() -> BodyDesc {
    BodyDesc::ground(Vec3::new(200.0, 1.0, 200.0))
        .at(Vec3::new(0.0, -0.5, 0.0))
        .labeled("ground")
}

fn arena_walls() -> [BodyDesc; 2] {
    [
        BodyDesc::wall(Vec3::new(1.0, 3.0, 30.0))
            .at(Vec3::new(-12.0, 1.5, 0.0))
            .labeled("wall-west"),
        BodyDesc::wall(Vec3::new(1.0, 3.0, 30.0))
            .at(Vec3::new(12.0, 1.5, 0.0))
            .labeled("wall-east"),
    ]
}

/// Body descriptions for a built-in scene, in spawn order.
pub fn bodies(kind: ScenarioKind) -> Vec<BodyDesc> {
    let mut scene = vec![proving_ground()];
    match kind {
        ScenarioKind::Drop => {
            let balls = [(-3.0, 0.0), (0.0, 0.5), (3.0, 0.9)];
            for (i, (x, bounciness)) in balls.into_iter().enumerate() {
                scene.push(
                    BodyDesc::sphere(0.5)
                        .at(Vec3::new(x, 4.0, 0.0))
                        .dynamic()
                        .with_bounciness(bounciness)
                        .labeled(format!("ball-{i}")),
                );
            }
        }
        ScenarioKind::Crates => {
            scene.extend(arena_walls());
            scene.push(
                BodyDesc::cuboid(Vec3::ONE)
                    .at(Vec3::new(-4.0, 2.0, 0.0))
                    .with_velocity(Vec3::new(6.0, 0.0, 0.0))
                    .labeled("crate-a"),
            );
            scene.push(
                BodyDesc::cuboid(Vec3::ONE)
                    .at(Vec3::new(0.0, 2.0, 0.0))
                    .dynamic()
                    .labeled("crate-b"),
            );
            scene.push(
                BodyDesc::trigger(Vec3::new(3.0, 3.0, 6.0))
                    .at(Vec3::new(8.0, 1.5, 0.0))
                    .labeled("goal"),
            );
        }
        ScenarioKind::Shell => {
            scene.push(
                BodyDesc::sphere(1.5)
                    .at(Vec3::new(0.0, 1.5, 12.0))
                    .labeled("target"),
            );
            scene.push(
                BodyDesc::player(1.2)
                    .rotated(Quat::from_yaw(Degrees(90.0)))
                    .labeled("tank"),
            );
            scene.push(
                BodyDesc::point(25.0, 40.0)
                    .at(Vec3::new(0.0, 1.5, 0.0))
                    .with_velocity(Vec3::new(0.0, 4.5, 12.0))
                    .labeled("shell"),
            );
        }
        ScenarioKind::Wall => {
            scene.extend(arena_walls());
            scene.push(
                BodyDesc::sphere(0.5)
                    .at(Vec3::new(0.0, 1.0, 0.0))
                    .with_velocity(Vec3::new(8.0, 0.0, 0.0))
                    .without_gravity()
                    .labeled("ball"),
            );
        }
    }
    scene
}

/// Reads a JSON array of [`BodyDesc`] from `path`.
pub fn load_scene(path: &Path) -> Result<Vec<BodyDesc>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading scene {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing scene {}", path.display()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tread_physics::PhysicsWorld;

    #[test]
    fn every_builtin_scene_spawns() {
        for kind in [
            ScenarioKind::Drop,
            ScenarioKind::Crates,
            ScenarioKind::Shell,
            ScenarioKind::Wall,
        ] {
            let mut world = PhysicsWorld::default();
            for desc in bodies(kind) {
                world.spawn(desc).unwrap();
            }
            assert!(world.len() > 1, "{} is empty", kind.name());
        }
    }
}
