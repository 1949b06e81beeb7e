//! Integration tests for the `campus` CLI binary.
//!
//! These tests validate argument parsing, help output, shell
//! completions, and error handling — all without a live backend.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `campus` binary with env isolation.
///
/// Clears all `CAMPUS_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn campus_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("campus");
    cmd.env("HOME", "/tmp/campus-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/campus-cli-test-nonexistent")
        .env_remove("CAMPUS_PROFILE")
        .env_remove("CAMPUS_SERVER")
        .env_remove("CAMPUS_OUTPUT")
        .env_remove("CAMPUS_TIMEOUT")
        .env_remove("CAMPUS_USERNAME")
        .env_remove("CAMPUS_PAGE_SIZE");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = campus_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    campus_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("school assets")
            .and(predicate::str::contains("devices"))
            .and(predicate::str::contains("equipment"))
            .and(predicate::str::contains("users")),
    );
}

#[test]
fn test_version_flag() {
    campus_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("campus"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    campus_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    campus_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = campus_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_devices_list_no_server() {
    campus_cmd()
        .args(["devices", "list"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("server")
                .or(predicate::str::contains("profile"))
                .or(predicate::str::contains("config")),
        );
}

#[test]
fn test_config_show_no_config() {
    // `config show` uses load_config_or_default() so it succeeds even
    // when no config file exists — it just renders the default config.
    campus_cmd().args(["config", "show"]).assert().success();
}

#[test]
fn test_invalid_output_format() {
    let output = campus_cmd()
        .args(["--output", "invalid", "devices", "list"])
        .output()
        .unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid output format"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid")
            || text.contains("possible values")
            || text.contains("valid value"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_global_flags_parsing() {
    // All flags should parse correctly — the failure should be about
    // a missing server config, not about argument parsing.
    campus_cmd()
        .args([
            "--output",
            "json",
            "--verbose",
            "--timeout",
            "60",
            "devices",
            "list",
        ])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("server")
                .or(predicate::str::contains("profile"))
                .or(predicate::str::contains("config")),
        );
}

#[test]
fn test_field_requires_search() {
    let output = campus_cmd()
        .args(["devices", "list", "--field", "name"])
        .output()
        .unwrap();
    assert!(
        !output.status.success(),
        "Expected --field without --search to be rejected"
    );
}

#[test]
fn test_live_filter_conflicts_with_search() {
    let output = campus_cmd()
        .args(["devices", "list", "--search", "lab", "--live-filter", "lab"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected usage error");
}

#[test]
fn test_delete_requires_ids() {
    let output = campus_cmd().args(["devices", "delete"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected usage error");
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_devices_subcommands_exist() {
    campus_cmd()
        .args(["devices", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("delete"))
                .and(predicate::str::contains("activate"))
                .and(predicate::str::contains("deactivate")),
        );
}

#[test]
fn test_equipment_subcommands_exist() {
    campus_cmd()
        .args(["equipment", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("delete"))
                .and(predicate::str::contains("set-status")),
        );
}

#[test]
fn test_ip_subcommands_exist() {
    campus_cmd()
        .args(["ip", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("release"))
                .and(predicate::str::contains("blacklist")),
        );
}

#[test]
fn test_config_subcommands_exist() {
    campus_cmd()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("show")
                .and(predicate::str::contains("profiles"))
                .and(predicate::str::contains("use")),
        );
}
