//! Integration tests for the intention CLI
//!
//! These run the binary with an isolated config and data directory. Copying
//! needs a system clipboard, so only the paste and dry-run paths are
//! exercised end to end.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary running inside `dir` with XDG paths pointed at it
fn intention(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("intention").expect("binary should build");
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("config"))
        .env("XDG_DATA_HOME", dir.path().join("data"))
        .env("HOME", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

// =============================================================================
// compose --dry-run
// =============================================================================

#[test]
fn test_dry_run_full_sentence() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    intention(&dir)
        .args([
            "compose",
            "--dry-run",
            "-t",
            "write the report",
            "-m",
            "Focused",
            "-m",
            "Calm",
            "-r",
            "deadline is tomorrow",
        ])
        .assert()
        .success()
        .stdout("I want to write the report with a mindset of Focused, Calm because deadline is tomorrow: \n");
}

#[test]
fn test_dry_run_task_only() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    intention(&dir)
        .args(["compose", "--dry-run", "--task", "stretch"])
        .assert()
        .success()
        .stdout("I want to stretch: \n");
}

#[test]
fn test_empty_task_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    intention(&dir)
        .args(["compose", "--dry-run", "-m", "Calm"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("Task is required"));
}

#[test]
fn test_empty_task_blocks_paste() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    intention(&dir)
        .args(["compose", "--paste", "-r", "no task"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("Task is required"))
        .stderr(predicate::str::contains("Intention pasted!").not());
}

// =============================================================================
// compose --paste
// =============================================================================

#[test]
fn test_paste_writes_sentence_without_newline() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    intention(&dir)
        .args(["compose", "--paste", "-t", "ship it", "-r", "users are waiting"])
        .assert()
        .success()
        .stdout("I want to ship it because users are waiting: ")
        .stderr(predicate::str::contains("Intention pasted!"));
}

#[test]
fn test_paste_accepts_moods_outside_catalog() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    intention(&dir)
        .args(["--moods", "Calm", "compose", "--paste", "-t", "rest", "-m", "Sleepy"])
        .assert()
        .success()
        .stdout("I want to rest with a mindset of Sleepy: ");
}

// =============================================================================
// moods
// =============================================================================

#[test]
fn test_moods_from_local_config() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join(".intention.yml"), "custom-moods: \"Focused, , Calm ,Calm\"\n")
        .expect("Failed to write config");

    intention(&dir)
        .arg("moods")
        .assert()
        .success()
        .stdout("Focused\nCalm\nCalm\n");
}

#[test]
fn test_moods_from_explicit_config() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("custom.yml");
    fs::write(&path, "custom-moods: Bold, Brave\nlog-level: DEBUG\n").expect("Failed to write config");

    intention(&dir)
        .args(["moods", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout("Bold\nBrave\n");
}

#[test]
fn test_moods_override_beats_config() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join(".intention.yml"), "custom-moods: Focused\n").expect("Failed to write config");

    intention(&dir)
        .args(["--moods", " Zen ,Alert", "moods"])
        .assert()
        .success()
        .stdout("Zen\nAlert\n");
}

#[test]
fn test_moods_without_config_is_empty() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    intention(&dir).arg("moods").assert().success().stdout("");
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    intention(&dir)
        .args(["-c", "does-not-exist.yml", "moods"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
