// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
use std::fs;

use tread_app_core::config::{ConfigError, ConfigService, ConfigStore};
use tread_config_fs::FsConfigStore;

#[test]
fn missing_key_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::with_base(dir.path()).unwrap();
    match store.load_raw("physics") {
        Err(ConfigError::NotFound(key)) => assert_eq!(key, "physics"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn saves_json_file_named_after_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::with_base(dir.path().join("nested")).unwrap();
    let path = store.path_for("physics");
    let svc = ConfigService::new(store);

    svc.save("physics", &vec![-9.81f32, 0.5]).unwrap();
    assert!(path.exists());
    let loaded: Option<Vec<f32>> = svc.load("physics").unwrap();
    assert_eq!(loaded, Some(vec![-9.81, 0.5]));
}

#[test]
fn saving_replaces_and_leaves_no_staging_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::with_base(dir.path()).unwrap();
    store.save_raw("physics", b"{\"gravity\": -1.0}").unwrap();
    store.save_raw("physics", b"{}").unwrap();

    assert_eq!(store.load_raw("physics").unwrap(), b"{}");
    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec!["physics.json"]);
}

#[test]
fn unreadable_entry_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::with_base(dir.path()).unwrap();
    fs::create_dir(store.path_for("physics")).unwrap();
    assert!(matches!(store.load_raw("physics"), Err(ConfigError::Io(_))));
}
