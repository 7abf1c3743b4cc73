//! CLI contract tests
//!
//! Run the built binary with an isolated config directory and check output
//! and exit codes.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn progression_bin() -> String {
    env!("CARGO_BIN_EXE_progression").to_string()
}

/// Command with HOME / XDG_CONFIG_HOME pointed at a temp dir
fn command(config_home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::new(progression_bin());
    cmd.env("HOME", config_home.path())
        .env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("RUST_LOG")
        .env_remove("PROGRESSION_HOST")
        .env_remove("PROGRESSION_PORT")
        .env_remove("PROGRESSION_TOLERANCE");
    cmd
}

fn run(args: &[&str]) -> (i32, String) {
    let home = tempfile::tempdir().unwrap();
    let output = command(&home).args(args).output().expect("Failed to run progression");
    decode(output)
}

fn decode(output: Output) -> (i32, String) {
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    (output.status.code().unwrap_or(-1), stdout)
}

// ============================================================================
// predict / validate
// ============================================================================

#[test]
fn test_predict_prints_next_number() {
    let (code, stdout) = run(&["predict", "3,6,9,12"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Next number: 15"), "stdout: {}", stdout);
}

#[test]
fn test_predict_accepts_separate_args() {
    let (code, stdout) = run(&["predict", "10", "7", "4", "1"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("-2"));
}

#[test]
fn test_predict_json_failure_exits_nonzero() {
    let (code, stdout) = run(&["predict", "--json", "1,2,4,8"]);
    assert_eq!(code, 1);
    let v: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON");
    assert_eq!(v["success"], false);
    assert!(v["nextNumber"].is_null());
}

#[test]
fn test_predict_negative_numbers() {
    let (code, stdout) = run(&["predict", "--json", "-5,-3,-1"]);
    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON");
    assert_eq!(v["nextNumber"].as_f64(), Some(1.0));
}

#[test]
fn test_predict_demo() {
    let (code, stdout) = run(&["predict", "demo"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("15"));
}

#[test]
fn test_validate_json() {
    let (code, stdout) = run(&["validate", "--json", "10,7,4,1"]);
    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON");
    assert_eq!(v["isValid"], true);
    assert_eq!(v["difference"].as_f64(), Some(-3.0));
}

#[test]
fn test_validate_non_numeric_exits_nonzero() {
    let (code, stdout) = run(&["validate", "1,abc,3"]);
    assert_eq!(code, 1);
    assert!(stdout.contains("not a valid number"));
}

// ============================================================================
// tolerance
// ============================================================================

#[test]
fn test_float_sequence_needs_tolerance() {
    let (code, _) = run(&["validate", "0.1,0.2,0.3"]);
    assert_eq!(code, 1);

    let (code, _) = run(&["--tolerance", "1e-9", "validate", "0.1,0.2,0.3"]);
    assert_eq!(code, 0);
}

#[test]
fn test_tolerance_from_env() {
    let home = tempfile::tempdir().unwrap();
    let output = command(&home)
        .env("PROGRESSION_TOLERANCE", "1e-9")
        .args(["validate", "0.1,0.2,0.3"])
        .output()
        .unwrap();
    assert_eq!(decode(output).0, 0);
}

// ============================================================================
// test / version / config
// ============================================================================

#[test]
fn test_builtin_tests_pass() {
    let (code, stdout) = run(&["test"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("passed"));
}

#[test]
fn test_version() {
    let (code, stdout) = run(&["version"]);
    assert_eq!(code, 0);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_config_init_then_show() {
    let home = tempfile::tempdir().unwrap();
    let output = command(&home).args(["config", "init"]).output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let output = command(&home).args(["config", "show"]).output().unwrap();
    let (code, stdout) = decode(output);
    assert_eq!(code, 0);
    assert!(stdout.contains("127.0.0.1:3000"), "stdout: {}", stdout);
    assert!(stdout.contains("exact"));
}

// ============================================================================
// interactive menu
// ============================================================================

#[test]
fn test_menu_over_piped_stdin() {
    let home = tempfile::tempdir().unwrap();
    let mut child = command(&home)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn progression");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"1\n3,6,9,12\n2\n5\n")
        .unwrap();
    let (code, stdout) = decode(child.wait_with_output().unwrap());
    assert_eq!(code, 0);
    assert!(stdout.contains("Next number: 15"));
    assert!(stdout.contains("[3, 6, 9, 12]"));
    assert!(stdout.contains("Goodbye!"));
}
