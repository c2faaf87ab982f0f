// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Typed config persistence over a byte-blob storage port.
//!
//! Values are stored as pretty-printed JSON under a logical key such as
//! `"physics"`. Where the bytes live is the [`ConfigStore`]'s business: the
//! filesystem in `tread-config-fs`, memory in tests.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Storage port: raw blobs by key.
pub trait ConfigStore {
    /// Reads the blob stored under `key`; [`ConfigError::NotFound`] when
    /// nothing is stored.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Replaces the blob stored under `key`.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Failure while reading, writing or decoding a config value.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Nothing is stored under the key.
    #[error("config `{0}` not found")]
    NotFound(String),
    /// The backing store failed.
    #[error("config I/O: {0}")]
    Io(#[from] std::io::Error),
    /// The stored bytes are not valid JSON for the requested type.
    #[error("malformed config JSON: {0}")]
    Serde(#[from] serde_json::Error),
    /// Store-specific failure.
    #[error("{0}")]
    Other(String),
}

impl ConfigError {
    /// [`ConfigError::NotFound`] for `key`.
    pub fn not_found(key: &str) -> Self {
        Self::NotFound(key.to_owned())
    }
}

/// JSON codec in front of a [`ConfigStore`].
#[derive(Debug, Clone, Default)]
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Wraps `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The wrapped store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwraps the store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S: ConfigStore> ConfigService<S> {
    /// Decodes the value under `key`. A missing key or an empty blob is
    /// `Ok(None)`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        let bytes = match self.store.load_raw(key) {
            Ok(bytes) => bytes,
            Err(ConfigError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// [`ConfigService::load`], substituting `T::default()` for a missing key.
    pub fn load_or_default<T>(&self, key: &str) -> Result<T, ConfigError>
    where
        T: DeserializeOwned + Default,
    {
        Ok(self.load(key)?.unwrap_or_default())
    }

    /// Encodes `value` as pretty JSON with a trailing newline and stores it
    /// under `key`.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), ConfigError> {
        let mut data = serde_json::to_vec_pretty(value)?;
        data.push(b'\n');
        self.store.save_raw(key, &data)
    }
}
