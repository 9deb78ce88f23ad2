//! Integration tests for the sarpa binary.

use assert_cmd::cargo::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn sarpa() -> Command {
    let mut cmd = Command::new(cargo_bin("sarpa"));
    // Keep tests independent of any user configuration on this machine.
    cmd.env("XDG_CONFIG_HOME", std::env::temp_dir().join("sarpa-test-config"));
    cmd
}

#[test]
fn test_help_lists_modes() {
    let mut cmd = sarpa();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--offline"))
        .stdout(predicate::str::contains("--online"))
        .stdout(predicate::str::contains("--endpoint"));
}

#[test]
fn test_offline_conflicts_with_online() {
    let mut cmd = sarpa();
    cmd.arg("--offline").arg("--online").arg("snake.jpg");

    cmd.assert().failure().stderr(predicate::str::contains(
        "cannot be used with",
    ));
}

#[test]
fn test_db_list_shows_bundled_species() {
    let mut cmd = sarpa();
    cmd.arg("db").arg("list");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Indian Cobra"))
        .stdout(predicate::str::contains("Russell's Viper"))
        .stdout(predicate::str::contains("Naja naja"));
}

#[test]
fn test_db_info_is_case_insensitive() {
    let mut cmd = sarpa();
    cmd.arg("db").arg("info").arg("  indian COBRA ");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Naja naja (Linnaeus, 1758)"))
        .stdout(predicate::str::contains(
            "This species is from the 'Elapidae' family.",
        ));
}

#[test]
fn test_db_info_unknown_species_fails() {
    let mut cmd = sarpa();
    cmd.arg("db").arg("info").arg("Basilisk");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("'Basilisk' not found"));
}

#[test]
fn test_db_check_reports_record_count() {
    let mut cmd = sarpa();
    cmd.arg("db").arg("check");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Database OK:"));
}

#[test]
fn test_missing_image_file_fails_before_any_backend() {
    let mut cmd = sarpa();
    cmd.arg("--quiet").arg("/nonexistent/snake.jpg");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to read image file"));
}

#[test]
fn test_offline_without_model_config_fails_with_guidance() {
    let file = tempfile::NamedTempFile::with_suffix(".jpg").expect("temp file");

    let mut cmd = sarpa();
    cmd.arg("--quiet")
        .arg("--offline")
        .arg(file.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no model configured"));
}

#[test]
fn test_offline_with_missing_model_reports_unavailable() {
    let file = tempfile::NamedTempFile::with_suffix(".jpg").expect("temp file");

    let mut cmd = sarpa();
    cmd.arg("--quiet")
        .arg("--offline")
        .arg("--model")
        .arg("/nonexistent/model.onnx")
        .arg("--labels")
        .arg("/nonexistent/labels.txt")
        .arg(file.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("offline classifier unavailable"));
}

#[test]
fn test_no_arguments_prints_smart_help() {
    let mut cmd = sarpa();

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("sarpa db list"));
}

#[test]
fn test_config_path_prints_toml_path() {
    let mut cmd = sarpa();
    cmd.arg("config").arg("path");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
