// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filesystem-backed [`ConfigStore`]: one `<key>.json` file per key.
//!
//! Writes go to a sibling temp file that is then renamed over the target, so
//! a crash mid-save never leaves a truncated config behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tread_app_core::config::{ConfigError, ConfigStore};

/// Config files under one base directory.
#[derive(Debug, Clone)]
pub struct FsConfigStore {
    base: PathBuf,
}

impl FsConfigStore {
    /// Store in the platform config directory (`~/.config/tread` on Linux).
    pub fn new() -> Result<Self, ConfigError> {
        let dirs = ProjectDirs::from("dev", "flyingrobots", "Tread").ok_or_else(|| {
            ConfigError::Other("no home directory to derive a config dir from".into())
        })?;
        Self::with_base(dirs.config_dir())
    }

    /// Store in `base`, created if missing.
    pub fn with_base(base: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let base = base.as_ref().to_path_buf();
        fs::create_dir_all(&base)?;
        Ok(Self { base })
    }

    /// Base directory.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// File holding `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl ConfigStore for FsConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        fs::read(self.path_for(key)).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => ConfigError::not_found(key),
            _ => ConfigError::Io(err),
        })
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let target = self.path_for(key);
        let staging = self.base.join(format!(".{key}.json.tmp"));
        fs::create_dir_all(&self.base)?;
        fs::write(&staging, data)?;
        fs::rename(&staging, &target)?;
        Ok(())
    }
}
