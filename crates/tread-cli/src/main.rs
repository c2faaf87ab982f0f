// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `tread`: developer CLI for the Tread physics core.
//!
//! Runs demo scenes, predicts shell trajectories and manages the stored
//! physics config. Logs go to stderr so `--format json` output on stdout stays
//! machine-readable.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config_cmd;
mod scenario;
mod simulate;
mod trajectory;

use cli::{Cli, Command, ConfigAction};

fn main() -> Result<()> {
    let args = Cli::parse();
    let level = if args.quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.parse()?))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let mut out = io::stdout().lock();
    let dir = args.config_dir.as_deref();
    match &args.command {
        Command::Simulate(sim) => simulate::run(sim, config_cmd::load(dir)?, &mut out)?,
        Command::Trajectory(traj) => trajectory::run(traj, config_cmd::load(dir)?, &mut out)?,
        Command::Config { action } => match action {
            ConfigAction::Show => config_cmd::show(dir, &mut out)?,
            ConfigAction::Init { force } => config_cmd::init(dir, *force, &mut out)?,
        },
    }
    out.flush()?;
    Ok(())
}
