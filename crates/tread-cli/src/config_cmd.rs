// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `tread config` and config loading for the other commands.

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};
use tread_app_core::config::ConfigService;
use tread_config_fs::FsConfigStore;
use tread_physics::PhysicsConfig;

fn open_store(dir: Option<&Path>) -> Result<FsConfigStore> {
    let store = match dir {
        Some(dir) => FsConfigStore::with_base(dir),
        None => FsConfigStore::new(),
    };
    store.context("opening config directory")
}

/// Loads and validates the stored config, falling back to defaults when no
/// file exists. Without `--config-dir` an unusable platform directory is
/// only a warning.
pub fn load(dir: Option<&Path>) -> Result<PhysicsConfig> {
    let store = match open_store(dir) {
        Ok(store) => store,
        Err(err) if dir.is_none() => {
            warn!("{err:#}; using default physics config");
            return Ok(PhysicsConfig::default());
        }
        Err(err) => return Err(err),
    };
    let path = store.path_for(PhysicsConfig::STORE_KEY);
    let config: PhysicsConfig = ConfigService::new(store)
        .load_or_default(PhysicsConfig::STORE_KEY)
        .with_context(|| format!("loading {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("validating {}", path.display()))?;
    Ok(config)
}

pub fn show(dir: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let config = load(dir)?;
    serde_json::to_writer_pretty(&mut *out, &config)?;
    writeln!(out)?;
    Ok(())
}

pub fn init(dir: Option<&Path>, force: bool, out: &mut impl Write) -> Result<()> {
    let store = open_store(dir)?;
    let path = store.path_for(PhysicsConfig::STORE_KEY);
    if path.exists() && !force {
        bail!("{} already exists (pass --force to overwrite)", path.display());
    }
    ConfigService::new(store).save(PhysicsConfig::STORE_KEY, &PhysicsConfig::default())?;
    info!(path = %path.display(), "wrote default physics config");
    writeln!(out, "{}", path.display())?;
    Ok(())
}
