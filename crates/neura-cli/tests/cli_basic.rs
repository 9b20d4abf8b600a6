//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with a throwaway home directory and the
//! remote pointed at a closed port, so every command runs its local fallback.

use std::path::Path;
use std::process::Command;

const UNREACHABLE_API: &str = "http://127.0.0.1:9";

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_neura"))
        .args(args)
        .env("HOME", home)
        .env("NEURA_ENV", "dev")
        .env("NEURA_API_BASE", UNREACHABLE_API)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_ok(home: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "command {args:?} failed: {stderr}");
    stdout
}

#[test]
fn test_config_path_uses_dev_directory() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_ok(home.path(), &["config", "path"]);
    assert!(stdout.contains("neura-dev"));
    assert!(stdout.trim().ends_with("config.toml"));
}

#[test]
fn test_config_set_then_get() {
    let home = tempfile::tempdir().unwrap();
    run_ok(home.path(), &["config", "set", "focus.default_minutes", "50"]);
    let stdout = run_ok(home.path(), &["config", "get", "focus.default_minutes"]);
    assert_eq!(stdout.trim(), "50");

    let listing = run_ok(home.path(), &["config", "list"]);
    assert!(listing.contains("focus.default_minutes = 50"));
}

#[test]
fn test_config_unknown_key_fails() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["config", "set", "remote.nope", "1"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_finance_goal_with_past_deadline() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_ok(home.path(), &["finance", "goal", "1200", "2000-01-01"]);
    assert!(stdout.contains("Set a future deadline"));
}

#[test]
fn test_finance_goal_with_future_deadline() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_ok(home.path(), &["finance", "goal", "1200", "2999-12-31"]);
    assert!(stdout.contains("To reach R$ 1.200,00"));
}

#[test]
fn test_energy_falls_back_to_local_score() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_ok(
        home.path(),
        &[
            "energy",
            "--sleep",
            "8",
            "--training",
            "10",
            "--focus",
            "10",
            "--nutrition",
            "10",
        ],
    );
    assert!(stdout.contains("Your energy today is 100/100."));
    assert!(stdout.contains("band: maximum"));
}

#[test]
fn test_energy_requires_sleep() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["energy"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("--sleep"));
}

#[test]
fn test_insights_offline() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_ok(home.path(), &["insights"]);
    assert!(stdout.contains("Not enough data yet"));

    let stdout = run_ok(home.path(), &["insights", "--energy", "30"]);
    assert!(stdout.contains("Low energy"));
}

#[test]
fn test_task_add_offline_creates_local_task() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_ok(home.path(), &["task", "add", "Write report", "--urgency", "9"]);
    assert!(stdout.contains("Task created: Write report"));
}

#[test]
fn test_task_list_json_offline_is_empty() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_ok(home.path(), &["task", "list", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.as_array().map(Vec::len), Some(0));
}

#[test]
fn test_task_add_rejects_out_of_range_scores() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["task", "add", "x", "--urgency", "200"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("--urgency"));
}

#[test]
fn test_task_add_joins_title_words() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_ok(home.path(), &["task", "add", "Pay", "rent", "--impact", "10"]);
    assert!(stdout.contains("Task created: Pay rent"));
}

#[test]
fn test_chat_offline_uses_fixed_reply() {
    let home = tempfile::tempdir().unwrap();
    let low = run_ok(home.path(), &["chat", "--energy", "10", "rough", "day"]);
    let high = run_ok(home.path(), &["chat", "--energy", "95", "rough", "day"]);
    assert!(low.contains("technical problem"));
    assert_eq!(low, high);
}
