// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A scratch directory holding an empty config file, so lookup never leaves it.
fn scratch() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("kommit.toml"), "").unwrap();
    dir
}

fn kommit(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kommit").unwrap();
    cmd.current_dir(dir.path()).env_remove("KOMMIT_CONFIG");
    cmd
}

#[test]
fn test_version() {
    let dir = scratch();
    kommit(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("kommit "));
}

#[test]
fn test_list_static_text() {
    let dir = scratch();
    kommit(&dir)
        .args(["list", "--source", "static", "--branch", "feat/JIRA-42-thing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0\t\tJIRA-42 - "))
        .stdout(predicate::str::contains("\t\tfeat(JIRA-42): "))
        .stdout(predicate::str::contains("--wip-- [skip ci]"));
}

#[test]
fn test_list_static_json() {
    let dir = scratch();
    let output = kommit(&dir)
        .args([
            "list",
            "--source",
            "static",
            "--format",
            "json",
            "--branch",
            "feat/JIRA-42-thing",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let candidates: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let candidates = candidates.as_array().unwrap();
    assert_eq!(candidates[0]["id"], 0);
    assert_eq!(candidates[0]["content"], "JIRA-42 - ");
    assert_eq!(candidates[0]["source"], "static");

    let scoped = candidates
        .iter()
        .find(|c| c["content"].as_str().unwrap().starts_with("feat("))
        .unwrap();
    assert_eq!(scoped["content"], "feat(JIRA-42): ");
    assert_eq!(scoped["keywords"], serde_json::json!(["feat", "scoped"]));
    assert!(candidates.iter().all(|c| c["source"] == "static"));
}

#[test]
fn test_list_uses_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("kommit.toml"),
        r#"
[catalog]
commit_types = ["feat"]

[[catalog.templates]]
content = "{commitType}: "
keywords = ["plain"]
"#,
    )
    .unwrap();

    let output = kommit(&dir)
        .args(["list", "--source", "static", "--format", "json", "--branch", "main"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let candidates: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(candidates.as_array().unwrap().len(), 1);
    assert_eq!(candidates[0]["content"], "feat: ");
}

#[test]
fn test_missing_config_file() {
    let dir = scratch();
    kommit(&dir)
        .args(["--config", "does-not-exist.toml", "list", "--source", "static"])
        .args(["--branch", "main"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_invalid_ticket_pattern() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("kommit.toml"), "[ticket]\npattern = \"([\"\n").unwrap();
    kommit(&dir)
        .args(["list", "--source", "static", "--branch", "main"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ticket.pattern"));
}

#[test]
fn test_compose_outside_repository() {
    let dir = scratch();
    kommit(&dir)
        .args(["compose", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Git error"));
}

#[test]
fn test_init_refuses_overwrite_without_terminal() {
    let dir = TempDir::new().unwrap();
    kommit(&dir).arg("init").assert().success();

    let written = fs::read_to_string(dir.path().join("kommit.toml")).unwrap();
    assert!(written.contains("[finder]"));

    kommit(&dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    kommit(&dir).args(["init", "--force"]).assert().success();
}
