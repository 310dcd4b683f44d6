use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("meteorites").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("meteorites"));
}

#[test]
fn get_rejects_unknown_format() {
    let mut cmd = Command::cargo_bin("meteorites").unwrap();
    cmd.args(["get", "--format", "parquet"]);
    cmd.assert().failure();
}

// Live test (opt-in): cargo test --features online
#[cfg(feature = "online")]
#[test]
fn full_pipeline_online() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("meteorites.csv");
    let mut cmd = Command::cargo_bin("meteorites").unwrap();
    cmd.args(["get", "--out"]).arg(&out).arg("--stats");
    cmd.assert().success();
    assert!(out.exists());
}
