//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary against a throwaway settings directory and
//! verify outputs.

use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command with `POMOTICK_HOME` pointed at `home`.
fn run_cli(home: &TempDir, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_pomotick"))
        .args(args)
        .env("POMOTICK_HOME", home.path())
        .env_remove("POMOTICK_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn json_lines(stdout: &str) -> Vec<serde_json::Value> {
    stdout
        .lines()
        .map(|l| serde_json::from_str(l).expect("Failed to parse JSON line"))
        .collect()
}

#[test]
fn test_config_get_default() {
    let home = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(&home, &["config", "get", "schedule.focus_duration"]);
    assert_eq!(code, 0, "Config get failed");
    assert_eq!(stdout.trim(), "25");
    assert!(home.path().join("config.toml").exists());
}

#[test]
fn test_config_get_unknown_key_fails() {
    let home = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(&home, &["config", "get", "schedule.nope"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_config_set_persists() {
    let home = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(&home, &["config", "set", "schedule.short_break", "7"]);
    assert_eq!(code, 0, "Config set failed");
    assert_eq!(stdout.trim(), "ok");

    let (_, stdout, _) = run_cli(&home, &["config", "get", "schedule.short_break"]);
    assert_eq!(stdout.trim(), "7");
}

#[test]
fn test_config_set_rejects_zero_duration() {
    let home = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(&home, &["config", "set", "schedule.focus_duration", "0"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("focus_duration"), "stderr: {stderr}");

    let (_, stdout, _) = run_cli(&home, &["config", "get", "schedule.focus_duration"]);
    assert_eq!(stdout.trim(), "25");
}

#[test]
fn test_config_list_and_reset() {
    let home = TempDir::new().unwrap();
    run_cli(&home, &["config", "set", "ui.show_title", "false"]);
    let (code, stdout, _) = run_cli(&home, &["config", "list"]);
    assert_eq!(code, 0, "Config list failed");
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["ui"]["show_title"], false);

    let (code, _, _) = run_cli(&home, &["config", "reset"]);
    assert_eq!(code, 0, "Config reset failed");
    let (_, stdout, _) = run_cli(&home, &["config", "get", "ui.show_title"]);
    assert_eq!(stdout.trim(), "true");
}

#[test]
fn test_schedule_prints_cycle() {
    let home = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(&home, &["schedule", "--rounds", "2"]);
    assert_eq!(code, 0, "Schedule failed");
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let modes: Vec<&str> = json["blocks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["mode"].as_str().unwrap())
        .collect();
    assert_eq!(modes, vec!["work", "short_break", "work", "long_break"]);
    assert_eq!(json["total_min"], 25 + 5 + 25 + 15);
}

#[test]
fn test_simulate_one_minute_work() {
    let home = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(&home, &["simulate", "--ticks", "60", "--work", "1"]);
    assert_eq!(code, 0, "Simulate failed");

    let events = json_lines(&stdout);
    assert_eq!(events.first().unwrap()["type"], "timer_started");
    let change = &events[events.len() - 2];
    assert_eq!(change["type"], "mode_changed");
    assert_eq!(change["to"], "short_break");
    assert_eq!(change["session_total_secs"], 300);

    let snapshot = events.last().unwrap();
    assert_eq!(snapshot["type"], "state_snapshot");
    assert_eq!(snapshot["remaining_secs"], 300);
    assert_eq!(snapshot["completed_work_sessions"], 1);
}

#[test]
fn test_simulate_transitions_only_reaches_long_break() {
    let home = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(
        &home,
        &[
            "simulate",
            "--ticks",
            "360",
            "--work",
            "1",
            "--short-break",
            "1",
            "--long-break",
            "1",
            "--rounds",
            "3",
            "--transitions-only",
        ],
    );
    assert_eq!(code, 0, "Simulate failed");
    let events = json_lines(&stdout);
    let targets: Vec<&str> = events
        .iter()
        .filter(|e| e["type"] == "mode_changed")
        .map(|e| e["to"].as_str().unwrap())
        .collect();
    assert_eq!(
        targets,
        vec!["short_break", "work", "short_break", "work", "long_break", "work"]
    );
}

#[test]
fn test_simulate_paused_ignores_ticks() {
    let home = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(&home, &["simulate", "--ticks", "30", "--paused"]);
    assert_eq!(code, 0);
    let events = json_lines(&stdout);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["remaining_secs"], 25 * 60);
    assert_eq!(events[0]["running"], false);
}

#[test]
fn test_simulate_runs_by_default() {
    let home = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(&home, &["simulate", "--ticks", "3"]);
    assert_eq!(code, 0);
    let events = json_lines(&stdout);
    assert_eq!(events.first().unwrap()["type"], "timer_started");
    let snapshot = events.last().unwrap();
    assert_eq!(snapshot["running"], true);
    assert_eq!(snapshot["remaining_secs"], 25 * 60 - 3);

    // There is no opt-in flag for starting.
    let (code, _, _) = run_cli(&home, &["simulate", "--start"]);
    assert_ne!(code, 0);
}

#[test]
fn test_simulate_rejects_zero_override() {
    let home = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(&home, &["simulate", "--rounds", "0"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("pomodoros_before_long_break"), "stderr: {stderr}");
}

#[test]
fn test_completions() {
    let home = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(&home, &["completions", "bash"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("pomotick"));
}
