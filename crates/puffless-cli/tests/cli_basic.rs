//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Commands
//! that touch device state run against a scratch HOME directory.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    run_cli_with_stdin(args, None)
}

/// Run a CLI command, optionally piping `stdin_data`, against a scratch
/// HOME directory.
fn run_cli_with_stdin(args: &[&str], stdin_data: Option<&str>) -> (String, String, i32) {
    let home = scratch_home();
    let mut child = Command::new("cargo")
        .args(["run", "-q", "-p", "puffless-cli", "--"])
        .args(args)
        .env("HOME", &home)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI command");

    if let Some(data) = stdin_data {
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(data.as_bytes())
            .expect("Failed to write CLI stdin");
    } else {
        drop(child.stdin.take());
    }

    let output = child.wait_with_output().expect("Failed to wait for CLI");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn scratch_home() -> PathBuf {
    let home = std::env::temp_dir().join(format!("puffless-cli-test-{}", std::process::id()));
    std::fs::create_dir_all(&home).expect("Failed to create scratch HOME");
    home
}

#[test]
fn currency_list_shows_the_table() {
    let (stdout, _, code) = run_cli(&["currency", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("CRC"));
    assert!(stdout.contains("10000"));
    assert!(stdout.contains("MXN"));
}

#[test]
fn currency_show_rejects_unknown_codes() {
    let (_, stderr, code) = run_cli(&["currency", "show", "EUR"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown currency code"));
}

#[test]
fn currency_price_estimates_in_local_units() {
    let (stdout, _, code) = run_cli(&["currency", "price", "10", "CRC"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("₡5200"));
    assert!(stdout.contains("estimate"));
}

#[test]
fn plan_preview_prints_the_chart() {
    let (stdout, _, code) = run_cli(&["plan", "preview", "100", "10"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("día   0"));
    assert!(stdout.contains("10 of 10 days shown"));
}

#[test]
fn plan_preview_json_is_parseable() {
    let (stdout, _, code) = run_cli(&["plan", "preview", "100", "10", "--max-points", "5", "--json"]);
    assert_eq!(code, 0);

    let points: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let points = points.as_array().expect("JSON array");
    assert_eq!(points.len(), 5);
    assert_eq!(points[0]["remaining_puffs"], 100);
    assert_eq!(points[1]["remaining_puffs"], 80);
}

#[test]
fn plan_preview_handles_degenerate_input() {
    let (stdout, _, code) = run_cli(&["plan", "preview", "0", "10"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Nothing to plan"));
}

#[test]
fn config_show_reports_defaults_on_a_fresh_device() {
    let (stdout, _, code) = run_cli(&["config", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("onboarding_completed:"));
}

#[test]
fn onboard_dry_run_walks_to_the_plan() {
    let input = "q\n10\n100\nCRC\n10000\n\nsalud, dinero\nansiedad\n";
    let (stdout, stderr, code) = run_cli_with_stdin(&["onboard", "run"], Some(input));
    assert_eq!(code, 0, "onboarding failed: {stderr}");
    assert!(stdout.contains("Your reduction plan"));
    assert!(stdout.contains("Last puff:"));
}

#[test]
fn onboard_supports_back_navigation() {
    // 'back' at the puffs prompt returns to the plan-length prompt.
    let input = "q\n10\nback\n20\n100\nCRC\n10000\n\nsalud\nansiedad\n";
    let (stdout, _, code) = run_cli_with_stdin(&["onboard", "run"], Some(input));
    assert_eq!(code, 0);
    assert!(stdout.matches("Plan length in days:").count() >= 2);
    assert!(stdout.contains("Your reduction plan"));
}

#[test]
fn onboard_reprompts_on_invalid_input() {
    // 5 puffs/day is below the floor; 9999 CRC is below the minimum.
    let input = "q\n10\n5\n100\nCRC\n9999\nCRC\n10000\n\nsalud\nansiedad\n";
    let (stdout, _, code) = run_cli_with_stdin(&["onboard", "run"], Some(input));
    assert_eq!(code, 0);
    assert!(stdout.contains("below the minimum"));
    assert!(stdout.contains("Your reduction plan"));
}
