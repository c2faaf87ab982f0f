// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory config store fake for testing without filesystem I/O.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tread_app_core::config::{ConfigError, ConfigStore};

/// In-memory implementation of [`ConfigStore`] for testing.
///
/// Clones share state, so a test can hand one clone to a
/// [`tread_app_core::config::ConfigService`] and inspect the other.
///
/// # Example
///
/// ```
/// use tread_dry_tests::InMemoryConfigStore;
/// use tread_app_core::config::ConfigService;
///
/// let store = InMemoryConfigStore::new();
/// let service = ConfigService::new(store.clone());
///
/// service.save("physics", &serde_json::json!({"gravity": -3.7})).unwrap();
/// assert_eq!(store.save_count(), 1);
/// assert!(store.contains_key("physics"));
/// ```
#[derive(Clone, Default)]
pub struct InMemoryConfigStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    data: HashMap<String, Vec<u8>>,
    load_count: usize,
    save_count: usize,
    fail_on_load: bool,
    fail_on_save: bool,
}

impl InMemoryConfigStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `bytes` under `key`.
    pub fn with_entry(key: &str, bytes: impl Into<Vec<u8>>) -> Self {
        let store = Self::new();
        store.lock().data.insert(key.to_owned(), bytes.into());
        store
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Make subsequent loads fail with [`ConfigError::Other`].
    pub fn set_fail_on_load(&self, fail: bool) {
        self.lock().fail_on_load = fail;
    }

    /// Make subsequent saves fail with [`ConfigError::Other`].
    pub fn set_fail_on_save(&self, fail: bool) {
        self.lock().fail_on_save = fail;
    }

    /// Number of `load_raw` attempts, failed ones included.
    pub fn load_count(&self) -> usize {
        self.lock().load_count
    }

    /// Number of `save_raw` attempts, failed ones included.
    pub fn save_count(&self) -> usize {
        self.lock().save_count
    }

    /// Whether `key` holds a blob.
    pub fn contains_key(&self, key: &str) -> bool {
        self.lock().data.contains_key(key)
    }

    /// Raw bytes stored under `key`, bypassing the counters.
    pub fn peek(&self, key: &str) -> Option<Vec<u8>> {
        self.lock().data.get(key).cloned()
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        let mut inner = self.lock();
        inner.load_count += 1;
        if inner.fail_on_load {
            return Err(ConfigError::Other("simulated load failure".into()));
        }
        inner.data.get(key).cloned().ok_or_else(|| ConfigError::not_found(key))
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let mut inner = self.lock();
        inner.save_count += 1;
        if inner.fail_on_save {
            return Err(ConfigError::Other("simulated save failure".into()));
        }
        inner.data.insert(key.to_owned(), data.to_vec());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn counts_attempts_including_failures() {
        let store = InMemoryConfigStore::new();
        store.save_raw("physics", b"{}").unwrap();
        store.set_fail_on_save(true);
        assert!(matches!(
            store.save_raw("physics", b"[]"),
            Err(ConfigError::Other(_))
        ));
        assert_eq!(store.save_count(), 2);
        assert_eq!(store.peek("physics").as_deref(), Some(&b"{}"[..]));
    }

    #[test]
    fn missing_key_and_forced_failure_are_distinct() {
        let store = InMemoryConfigStore::with_entry("physics", "{}");
        assert!(matches!(store.load_raw("other"), Err(ConfigError::NotFound(_))));
        store.set_fail_on_load(true);
        assert!(matches!(
            store.load_raw("physics"),
            Err(ConfigError::Other(_))
        ));
        assert_eq!(store.load_count(), 2);
    }

    #[test]
    fn clones_share_state() {
        let a = InMemoryConfigStore::new();
        let b = a.clone();
        a.save_raw("k", b"v").unwrap();
        assert_eq!(b.load_raw("k").unwrap(), b"v");
        assert_eq!(b.save_count(), 1);
    }
}
