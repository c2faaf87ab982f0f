// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for Tread crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`config`] - In-memory config store fake for testing without filesystem
//! - [`hooks`] - Recording [`tread_physics::ContactHooks`] with a scripted player response
//! - [`scene`] - Labeled scene builder plus the stock demo scenes

pub mod config;
pub mod hooks;
pub mod scene;

pub use config::InMemoryConfigStore;
pub use hooks::RecordingHooks;
pub use scene::{
    crates_scene, drop_scene, scattered_spheres, shell_scene, wall_scene, Scene, SceneBuilder,
    GROUND_TOP,
};
