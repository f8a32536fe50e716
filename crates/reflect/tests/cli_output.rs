//! Integration tests for CLI output behavior
//!
//! The default behavior is quiet (no logs). Use -v/--verbose to enable logs.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Run `reflect` with HOME and the working directory pointed at an empty
/// temp dir so no real config is picked up.
fn run_reflect(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_reflect"))
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .args(args)
        .output()
        .expect("Failed to execute reflect")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_catalog_stdout_is_clean() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_reflect(&dir, &["catalog"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Sad"));
    assert!(stdout.contains("Content"));
    assert_eq!(stdout.lines().count(), 10);

    // Quiet by default
    assert!(
        stderr_of(&output).is_empty(),
        "Expected empty stderr, got: {}",
        stderr_of(&output)
    );
}

#[test]
fn test_verbose_mode_emits_json_logs_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_reflect(&dir, &["-v", "catalog"]);

    assert!(output.status.success());
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("core.app.startup_completed"),
        "Expected startup log in stderr, got: {}",
        stderr
    );
    for line in stdout_of(&output).lines() {
        assert!(!line.trim_start().starts_with('{'), "JSON in stdout: {}", line);
    }
}

#[test]
fn test_catalog_json_lists_labels() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_reflect(&dir, &["catalog", "--json"]);

    assert!(output.status.success());
    let entries: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0]["number"], 1);
    assert_eq!(entries[0]["label"], "Sad");
}

#[test]
fn test_collage_is_saved_and_returns_to_landing() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_reflect(
        &dir,
        &["collage", "--slot", "1=2", "--slot", "3=https://example.com/rain.png", "--note", "ok"],
    );

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Slot 1: Happy"));
    assert!(stdout.contains("Slot 2: (empty)"));
    assert!(stdout.contains("Slot 3: rain.png"));
    assert!(stdout.contains("Collage Saved!"));
    assert!(stdout.contains("Returned to: landing"));
}

#[test]
fn test_collage_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_reflect(&dir, &["collage", "--slot", "2=5", "--json"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let report: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(report["view"]["submission"], "succeeded");
    assert_eq!(report["screen"], "landing");

    let events = report["events"].as_array().unwrap();
    let names: Vec<&str> = events
        .iter()
        .map(|event| event["event"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "picker_opened",
            "slot_image_selected",
            "picker_closed",
            "post_started",
            "post_succeeded",
            "draft_reset",
            "navigation_requested"
        ]
    );
}

#[test]
fn test_empty_collage_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_reflect(&dir, &["collage", "--note", "nothing to show"]);

    assert!(!output.status.success());
    assert!(stdout_of(&output).contains("Please select at least one image for your collage."));
}

#[test]
fn test_replay_reads_commands_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_reflect"))
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .args(["replay", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn reflect");

    let commands = [
        r#"{"command":"open_picker","slot":0}"#,
        r#"{"command":"choose_catalog_image","position":3}"#,
        r#"{"command":"set_note","text":"calmer now"}"#,
        r#"{"command":"submit"}"#,
        r#"{"command":"acknowledge"}"#,
    ];
    {
        let mut stdin = child.stdin.take().unwrap();
        writeln!(stdin, "{}", commands.join("\n")).unwrap();
    }
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let events: Vec<serde_json::Value> = stdout_of(&output)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    let names: Vec<&str> = events
        .iter()
        .map(|event| event["event"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "picker_opened",
            "slot_image_selected",
            "picker_closed",
            "note_changed",
            "post_started",
            "post_succeeded",
            "draft_reset",
            "navigation_requested"
        ]
    );
}

#[test]
fn test_replay_reports_invalid_input() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("commands.jsonl");
    std::fs::write(
        &script,
        "{\"command\":\"choose_image\",\"image\":\"a.png\"}\n{\"command\":\"submit\"}\n",
    )
    .unwrap();

    let output = run_reflect(&dir, &["replay", script.to_str().unwrap()]);

    assert!(!output.status.success());
    let lines: Vec<serde_json::Value> = stdout_of(&output)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines[0]["error"], "NO_PICKER_OPEN");
    assert_eq!(lines[0]["line"], 1);
    assert_eq!(lines[1]["event"], "submission_rejected");
    assert_eq!(lines[1]["reason"], "no_image_selected");
}

#[test]
fn test_throw_returns_to_landing() {
    let dir = tempfile::tempdir().unwrap();
    let photo = dir.path().join("old.png");
    std::fs::write(&photo, b"png bytes").unwrap();

    let output = run_reflect(&dir, &["throw", photo.to_str().unwrap()]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Photo thrown away."));
    assert!(stdout.contains("Returned to: landing"));
}

#[test]
fn test_throw_rejects_non_images() {
    let dir = tempfile::tempdir().unwrap();
    let notes = dir.path().join("notes.txt");
    std::fs::write(&notes, b"text").unwrap();

    let output = run_reflect(&dir, &["throw", notes.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Not an image file"));
}
