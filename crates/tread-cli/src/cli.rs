// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tread_core::math::Vec3;

#[derive(Parser, Debug)]
#[command(name = "tread", author, version, about = "Tread physics developer CLI")]
pub struct Cli {
    /// Directory holding `physics.json` (defaults to the platform config dir)
    #[arg(long = "config-dir", visible_alias = "dir", global = true, value_name = "PATH")]
    pub config_dir: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a demo scene and report contact events and final body states
    Simulate(SimulateArgs),
    /// Predict a shell's flight over flat ground
    Trajectory(TrajectoryArgs),
    /// Show or initialise the stored physics config
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective physics config as JSON
    Show,
    /// Write the default physics config
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Built-in scene to run
    #[arg(long, value_enum, default_value_t = ScenarioKind::Drop)]
    pub scenario: ScenarioKind,

    /// JSON array of body descriptions to run instead of a built-in scene
    #[arg(long, value_name = "FILE", conflicts_with = "scenario")]
    pub scene: Option<PathBuf>,

    /// Number of fixed steps to run
    #[arg(long, default_value_t = 120)]
    pub steps: usize,

    /// Step length in seconds (defaults to the configured fixed_dt)
    #[arg(long)]
    pub dt: Option<f32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Args, Debug)]
pub struct TrajectoryArgs {
    /// Muzzle position as `x,y,z`
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    pub origin: Vec3,

    /// Muzzle velocity as `x,y,z` in m/s
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    pub velocity: Vec3,

    /// Sub-step length in seconds (defaults to the configured fixed_dt)
    #[arg(long)]
    pub dt: Option<f32>,

    /// Give up after this many sub-steps
    #[arg(long, default_value_t = 600)]
    pub max_steps: usize,

    /// Also print every sampled point
    #[arg(long)]
    pub points: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioKind {
    /// Balls of different bounciness dropped on the ground
    Drop,
    /// A crate shoved into another crate and a scoring zone
    Crates,
    /// A shell fired at a target sphere
    Shell,
    /// A ball thrown at a wall
    Wall,
}

impl ScenarioKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Drop => "drop",
            Self::Crates => "crates",
            Self::Shell => "shell",
            Self::Wall => "wall",
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts[..] else {
        return Err(format!("expected x,y,z but got `{s}`"));
    };
    let num = |p: &str| {
        p.parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("`{p}` is not a finite number"))
    };
    Ok(Vec3::new(num(x)?, num(y)?, num(z)?))
}
