use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn pluglint() -> Command {
    Command::cargo_bin("pluglint").unwrap()
}

const VALID_SKILL: &str =
    "---\nname: code-review\ndescription: Use when reviewing pull requests\n---\nReview the diff.\n";

#[test]
fn test_valid_skill_exits_zero() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("SKILL.md");
    fs::write(&path, VALID_SKILL).unwrap();

    pluglint().arg(&path).assert().success();
}

#[test]
fn test_invalid_skill_exits_one_with_error_output() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("SKILL.md");
    fs::write(&path, "---\nname: Bad_Name\n---\nBody\n").unwrap();

    pluglint()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("kebab-case"));
}

#[test]
fn test_warnings_alone_exit_zero() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("agents");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("helper.md");
    // Short description only warns
    fs::write(&path, "---\nname: helper\ndescription: Helps\n---\nBody\n").unwrap();

    pluglint()
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("warning"));
}

#[test]
fn test_strict_promotes_warnings_to_failure() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("agents");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("helper.md");
    fs::write(&path, "---\nname: helper\ndescription: Helps\n---\nBody\n").unwrap();

    pluglint().arg(&path).arg("--strict").assert().failure().code(1);
}

#[test]
fn test_undispatched_path_is_silently_skipped() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("main.rs");
    fs::write(&path, "fn main() {}").unwrap();

    pluglint()
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_missing_file_is_reported_as_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("SKILL.md");

    pluglint()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_multiple_files_aggregate_exit_code() {
    let temp = TempDir::new().unwrap();
    let good = temp.path().join("SKILL.md");
    fs::write(&good, VALID_SKILL).unwrap();
    let bad_dir = temp.path().join("agents");
    fs::create_dir_all(&bad_dir).unwrap();
    let bad = bad_dir.join("broken.md");
    fs::write(&bad, "---\ndescription: An agent with no name\n---\nBody\n").unwrap();

    pluglint()
        .arg(&good)
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.md"));
}

#[test]
fn test_hook_mode_reports_findings_as_json() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("SKILL.md");
    fs::write(&path, "---\nname: Bad_Name\n---\nBody\n").unwrap();

    let payload = serde_json::json!({
        "tool_name": "Write",
        "tool_input": {"file_path": path},
    });

    let output = pluglint()
        .write_stdin(payload.to_string())
        .assert()
        .success()
        .get_output()
        .clone();

    let stdout = String::from_utf8_lossy(&output.stdout);
    let response: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(response["continue"], true);
    let message = response["systemMessage"].as_str().unwrap();
    assert!(message.contains("kebab-case"), "{}", message);
}

#[test]
fn test_hook_mode_clean_file_is_silent() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("SKILL.md");
    fs::write(&path, VALID_SKILL).unwrap();

    let payload = serde_json::json!({
        "tool_name": "Edit",
        "tool_input": {"file_path": path},
    });

    pluglint()
        .write_stdin(payload.to_string())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_hook_mode_ignores_other_tools() {
    let payload = serde_json::json!({
        "tool_name": "Bash",
        "tool_input": {"command": "ls"},
    });

    pluglint()
        .write_stdin(payload.to_string())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_hook_mode_tolerates_malformed_stdin() {
    pluglint()
        .write_stdin("not json at all")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_hook_mode_missing_file_path_is_silent() {
    let payload = serde_json::json!({
        "tool_name": "Write",
        "tool_input": {},
    });

    pluglint()
        .write_stdin(payload.to_string())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
