// Tests for --json output

use crate::common::{exit_code, run_gate, workdir};

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not JSON ({e}): {}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

#[test]
fn test_json_pass() {
    let dir = workdir(None);
    let output = run_gate(dir.path(), &["--json", "--message", "feat(api)!: drop v1"]);
    assert_eq!(exit_code(&output), 0);
    let value = stdout_json(&output);
    assert_eq!(value["outcome"], "checked");
    assert_eq!(value["passed"], true);
    assert_eq!(value["parsed"]["type"], "feat");
    assert_eq!(value["parsed"]["scope"], "api");
    assert_eq!(value["parsed"]["breaking"], true);
}

#[test]
fn test_json_fail() {
    let dir = workdir(None);
    let output = run_gate(dir.path(), &["--json", "--message", "update stuff"]);
    assert_eq!(exit_code(&output), 1);
    let value = stdout_json(&output);
    assert_eq!(value["passed"], false);
    assert_eq!(value["violations"][0]["code"], "C003");
    assert_eq!(value["violations"][0]["element"], "separator");
    assert!(!output.stderr.is_empty(), "diagnostics still go to stderr");
}

#[test]
fn test_json_skipped() {
    let dir = workdir(None);
    let output = run_gate(dir.path(), &["--json", "--event", "closed"]);
    assert_eq!(exit_code(&output), 0);
    let value = stdout_json(&output);
    assert_eq!(value["outcome"], "skipped");
    assert_eq!(value["kind"], "closed");
}

#[test]
fn test_json_error() {
    let dir = workdir(None);
    let output = run_gate(dir.path(), &["--json", "--from-git"]);
    assert_eq!(exit_code(&output), 2);
    let value = stdout_json(&output);
    assert_eq!(value["outcome"], "error");
    assert_eq!(value["exit_code"], 2);
}
