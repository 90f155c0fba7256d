//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Apart from
//! the config reads at the bottom, only commands that touch no on-disk
//! state are exercised here.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "neurolife-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_mood_classify() {
    let (stdout, _, code) = run_cli(&["mood", "classify", "--rating", "9"]);
    assert_eq!(code, 0, "mood classify failed");
    assert!(stdout.contains("Very Pleasant"));
    assert!(stdout.contains("Recommended feelings:"));
}

#[test]
fn test_mood_classify_json() {
    let (stdout, _, code) = run_cli(&["mood", "classify", "--rating", "3", "--json"]);
    assert_eq!(code, 0, "mood classify JSON failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    assert_eq!(parsed["label"], "Unpleasant");
    assert!(parsed["recommended_tags"].as_array().unwrap().len() >= 7);
}

#[test]
fn test_mood_log_today() {
    let (stdout, _, code) = run_cli(&["mood", "log", "--rating", "9", "--tags", "Proud,Joyful"]);
    assert_eq!(code, 0, "mood log failed");
    assert!(stdout.contains("Very Pleasant"));
    assert!(stdout.contains("Joyful, Proud"));
    assert!(stdout.contains("Logged at:"));
}

#[test]
fn test_mood_log_week_has_no_timestamp() {
    let (stdout, _, code) = run_cli(&["mood", "log", "--rating", "5", "--week"]);
    assert_eq!(code, 0, "mood log --week failed");
    assert!(stdout.contains("Week"));
    assert!(!stdout.contains("Logged at:"));
}

#[test]
fn test_mood_tags_all_sorted() {
    let (stdout, _, code) = run_cli(&["mood", "tags"]);
    assert_eq!(code, 0, "mood tags failed");
    let tags: Vec<&str> = stdout.lines().collect();
    let mut sorted = tags.clone();
    sorted.sort_unstable();
    assert_eq!(tags, sorted);
}

#[test]
fn test_mood_tags_by_level() {
    let (stdout, _, code) = run_cli(&["mood", "tags", "--level", "neutral"]);
    assert_eq!(code, 0, "mood tags --level failed");
    assert!(stdout.contains("Meh"));
    assert!(!stdout.contains("Euphoric"));
}

#[test]
fn test_mood_tags_unknown_level() {
    let (_, stderr, code) = run_cli(&["mood", "tags", "--level", "blissful"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown mood level"));
}

#[test]
fn test_mood_chart_demo() {
    let (stdout, _, code) = run_cli(&["mood", "chart"]);
    assert_eq!(code, 0, "mood chart failed");
    assert!(stdout.contains("Mood History:"));
    assert!(stdout.contains("Average:"));
}

#[test]
fn test_chat_send() {
    let (stdout, _, code) = run_cli(&["chat", "send", "hello"]);
    assert_eq!(code, 0, "chat send failed");
    assert!(stdout.contains("You: hello"));
    assert!(stdout.contains("Bot: Response to hello"));
}

#[test]
fn test_finance_summary() {
    let (stdout, _, code) = run_cli(&[
        "finance", "summary",
        "--earning", "120:Freelance",
        "--expense", "45.5:Food",
    ]);
    assert_eq!(code, 0, "finance summary failed");
    assert!(stdout.contains("Net: +74.50"));
}

#[test]
fn test_config_show() {
    let (stdout, _, code) = run_cli(&["config", "show"]);
    assert_eq!(code, 0, "config show failed");
    assert!(stdout.contains("slider_step"));
    assert!(stdout.contains("accent_color"));
}

#[test]
fn test_config_get() {
    let (stdout, _, code) = run_cli(&["config", "get", "mood.slider_min"]);
    assert_eq!(code, 0, "config get failed");
    assert!(stdout.contains("1.0") || stdout.contains("1"));
}

#[test]
fn test_finance_rejects_invalid_expense() {
    let (_, stderr, code) = run_cli(&["finance", "expense", "--amount", "0", "--category", "Food"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("amount"));
}
