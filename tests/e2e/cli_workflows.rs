//! E2E tests for complete CLI workflows
//! Tests the entire application through the command-line interface

use std::io::Write;
use std::process::{Command, Stdio};

const CLI_BINARY: &str = "target/debug/intlist-cli";

#[test]
fn test_command_flag_executes_script() {
    let output = Command::new(CLI_BINARY)
        .args(["-c", "push 1; push 2; print"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2 1\n");
}

#[test]
fn test_command_flag_size_and_avg() {
    let output = Command::new(CLI_BINARY)
        .args(["-c", "append 2; append 4; append 6; size; avg"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "3\n4\n");
}

#[test]
fn test_runtime_error_exits_nonzero_with_message() {
    let output = Command::new(CLI_BINARY)
        .args(["-c", "avg"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_EMPTY"));
}

#[test]
fn test_syntax_error_exits_nonzero_with_message() {
    let output = Command::new(CLI_BINARY)
        .args(["-c", "push"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_SYNTAX"));
}

#[test]
fn test_script_from_stdin() {
    let mut child = Command::new(CLI_BINARY)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"append 7\nappend 8\nprint\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "7 8\n");
}

#[test]
fn test_empty_script_produces_no_output() {
    let output = Command::new(CLI_BINARY)
        .args(["-c", ""])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}
