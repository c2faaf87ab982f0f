// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scene fixtures: a labeled builder plus the stock demo scenes.
//!
//! Every stock scene sits on a 40 m × 40 m ground slab whose top face is at
//! [`GROUND_TOP`].

use std::collections::BTreeMap;

use tread_core::math::Vec3;
use tread_physics::{BodyDesc, BodyId, PhysicsConfig, PhysicsError, PhysicsWorld};

/// Height of the ground slab's top face in every stock scene.
pub const GROUND_TOP: f32 = 0.0;

/// A built world plus the ids of its labeled bodies.
#[derive(Debug)]
pub struct Scene {
    /// The world under test.
    pub world: PhysicsWorld,
    ids: BTreeMap<String, BodyId>,
}

impl Scene {
    /// Id of the body spawned under `label`.
    ///
    /// # Panics
    /// Panics if no body was spawned under `label`.
    pub fn id(&self, label: &str) -> BodyId {
        self.ids[label]
    }

    /// Labels in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.ids.keys().map(String::as_str)
    }

    /// Advances the world `steps` times at the configured fixed timestep.
    pub fn run(&mut self, steps: usize) -> Result<(), PhysicsError> {
        let dt = self.world.config().fixed_dt;
        for _ in 0..steps {
            self.world.step(dt)?;
        }
        Ok(())
    }
}

/// Builds a [`Scene`] from labeled [`BodyDesc`]s, spawned in insertion order
/// so registration order is predictable.
#[derive(Debug, Clone, Default)]
pub struct SceneBuilder {
    config: PhysicsConfig,
    bodies: Vec<(String, BodyDesc)>,
}

impl SceneBuilder {
    /// Empty scene with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `config` for the world.
    pub fn with_config(mut self, config: PhysicsConfig) -> Self {
        self.config = config;
        self
    }

    /// Adds a body under `label`.
    pub fn body(mut self, label: &str, desc: BodyDesc) -> Self {
        self.bodies.push((label.to_owned(), desc.labeled(label)));
        self
    }

    /// Adds the ground slab under the label `"ground"`.
    pub fn flat_ground(self) -> Self {
        self.body(
            "ground",
            BodyDesc::ground(Vec3::new(40.0, 1.0, 40.0)).at(Vec3::new(0.0, GROUND_TOP - 0.5, 0.0)),
        )
    }

    /// Spawns every body.
    pub fn build(self) -> Result<Scene, PhysicsError> {
        let mut world = PhysicsWorld::new(self.config);
        let mut ids = BTreeMap::new();
        for (label, desc) in self.bodies {
            let id = world.spawn(desc)?;
            ids.insert(label, id);
        }
        Ok(Scene { world, ids })
    }
}

/// Three balls of different bounciness dropped onto the ground.
pub fn drop_scene() -> SceneBuilder {
    SceneBuilder::new()
        .flat_ground()
        .body(
            "ball-dead",
            BodyDesc::sphere(0.5)
                .at(Vec3::new(-3.0, 4.0, 0.0))
                .dynamic()
                .with_bounciness(0.0),
        )
        .body(
            "ball-soft",
            BodyDesc::sphere(0.5).at(Vec3::new(0.0, 4.0, 0.0)).dynamic(),
        )
        .body(
            "ball-lively",
            BodyDesc::sphere(0.5)
                .at(Vec3::new(3.0, 4.0, 0.0))
                .dynamic()
                .with_bounciness(0.9),
        )
}

/// A crate pushed into a second crate, with a scoring zone behind it.
pub fn crates_scene() -> SceneBuilder {
    SceneBuilder::new()
        .flat_ground()
        .body(
            "crate-a",
            BodyDesc::cuboid(Vec3::ONE)
                .at(Vec3::new(-2.0, 0.5, 0.0))
                .with_velocity(Vec3::new(4.0, 0.0, 0.0)),
        )
        .body(
            "crate-b",
            BodyDesc::cuboid(Vec3::ONE).at(Vec3::new(0.0, 0.5, 0.0)).dynamic(),
        )
        .body(
            "goal",
            BodyDesc::trigger(Vec3::new(2.0, 2.0, 4.0)).at(Vec3::new(4.0, 1.0, 0.0)),
        )
}

/// A shell fired at a static target sphere.
pub fn shell_scene() -> SceneBuilder {
    SceneBuilder::new()
        .flat_ground()
        .body(
            "target",
            BodyDesc::sphere(1.5).at(Vec3::new(0.0, 1.5, 12.0)),
        )
        .body(
            "shell",
            BodyDesc::point(25.0, 40.0)
                .at(Vec3::new(0.0, 1.5, 0.0))
                .with_velocity(Vec3::new(0.0, 4.5, 12.0)),
        )
}

/// A weightless ball flying into a wall.
pub fn wall_scene() -> SceneBuilder {
    SceneBuilder::new()
        .flat_ground()
        .body(
            "wall",
            BodyDesc::wall(Vec3::new(1.0, 4.0, 20.0)).at(Vec3::new(5.5, 2.0, 0.0)),
        )
        .body(
            "ball",
            BodyDesc::sphere(0.5)
                .at(Vec3::new(0.0, 1.0, 0.0))
                .with_velocity(Vec3::new(6.0, 0.0, 0.0))
                .without_gravity(),
        )
}

/// `count` dynamic spheres on a grid above the ground, for load tests.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn scattered_spheres(count: usize) -> SceneBuilder {
    let side = (count as f32).sqrt().ceil().max(1.0) as usize;
    (0..count).fold(SceneBuilder::new().flat_ground(), |scene, i| {
        let (row, col) = (i / side, i % side);
        let x = col as f32 * 1.5 - 15.0;
        let z = row as f32 * 1.5 - 15.0;
        let y = 1.0 + (i % 3) as f32;
        scene.body(
            &format!("sphere-{i}"),
            BodyDesc::sphere(0.5).at(Vec3::new(x, y, z)).dynamic(),
        )
    })
}
