// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn tread(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tread").unwrap();
    cmd.arg("--config-dir").arg(dir.path()).arg("--quiet");
    cmd
}

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("tread")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("simulate"))
        .stdout(predicate::str::contains("trajectory"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn shell_scenario_reports_projectile_hit() {
    let dir = tempfile::tempdir().unwrap();
    tread(&dir)
        .args(["simulate", "--scenario", "shell", "--steps", "120", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"event\": \"projectile_hit\""))
        .stdout(predicate::str::contains("\"damage\": 40.0"));
}

#[test]
fn drop_scenario_prints_text_summary() {
    let dir = tempfile::tempdir().unwrap();
    tread(&dir)
        .args(["simulate", "--scenario", "drop", "--steps", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scene drop: 30 steps"))
        .stdout(predicate::str::contains("ball-1"));
}

#[test]
fn custom_scene_file_runs() {
    let dir = tempfile::tempdir().unwrap();
    let scene = dir.path().join("scene.json");
    fs::write(
        &scene,
        r#"[{"label": "rock", "shape": {"kind": "sphere", "radius": 1.0}, "position": [0.0, 5.0, 0.0]}]"#,
    )
    .unwrap();
    tread(&dir)
        .args(["simulate", "--steps", "5", "--scene"])
        .arg(&scene)
        .assert()
        .success()
        .stdout(predicate::str::contains("rock"));
}

#[test]
fn malformed_scene_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let scene = dir.path().join("scene.json");
    fs::write(&scene, "{ nope").unwrap();
    tread(&dir)
        .args(["simulate", "--scene"])
        .arg(&scene)
        .assert()
        .failure()
        .stderr(predicate::str::contains("parsing scene"));
}

#[test]
fn trajectory_reports_impact() {
    let dir = tempfile::tempdir().unwrap();
    tread(&dir)
        .args([
            "trajectory",
            "--origin",
            "0,1,0",
            "--velocity",
            "0,5,10",
            "--dt",
            "0.01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"impact at \(0\.000, -?0\.000, 11\.\d{3}\)").unwrap());
}

#[test]
fn trajectory_rejects_malformed_vectors() {
    let dir = tempfile::tempdir().unwrap();
    tread(&dir)
        .args(["trajectory", "--origin", "0,1", "--velocity", "0,5,10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected x,y,z"));
}

#[test]
fn config_init_then_show_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    tread(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("physics.json"));
    assert!(dir.path().join("physics.json").exists());

    tread(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    tread(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"gravity\": -9.81"));
}

#[test]
fn stored_config_drives_simulation() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("physics.json"), r#"{"fixed_dt": -1.0}"#).unwrap();
    tread(&dir)
        .args(["simulate", "--steps", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("validating"));
}
