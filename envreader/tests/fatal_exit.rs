//! Fail-fast exit on configuration errors
//!
//! The exit path terminates the process, so each case re-runs this test
//! binary filtered down to `fatal_exit_child` and inspects the outcome.

use envreader::{UnwrapOrExit, EXIT_CODE_CONFIG_ERROR};
use std::ffi::OsStr;
use std::process::{Command, Output};

const CHILD_MODE: &str = "ENVREADER_FATAL_CHILD";
const REQUIRED_VAR: &str = "ENVREADER_FATAL_REQUIRED";

#[test]
fn fatal_exit_child() {
    let Ok(mode) = std::env::var(CHILD_MODE) else {
        return;
    };
    match mode.as_str() {
        "string" => {
            let value = envreader::get_string(REQUIRED_VAR, "").unwrap_or_exit();
            println!("resolved={value}");
        }
        "list" => {
            let value = envreader::get_string_list(REQUIRED_VAR, vec![], ",").unwrap_or_exit();
            println!("resolved={}", value.join("|"));
        }
        other => panic!("unknown child mode {other}"),
    }
}

fn run_child(mode: &str, required: Option<&OsStr>) -> Output {
    let exe = std::env::current_exe().unwrap();
    let mut cmd = Command::new(exe);
    cmd.args(["fatal_exit_child", "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_MODE, mode);
    match required {
        Some(value) => cmd.env(REQUIRED_VAR, value),
        None => cmd.env_remove(REQUIRED_VAR),
    };
    cmd.output().unwrap()
}

#[test]
fn test_missing_string_terminates_process() {
    let output = run_child("string", None);

    assert_eq!(output.status.code(), Some(EXIT_CODE_CONFIG_ERROR));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(REQUIRED_VAR), "stderr: {stderr}");
}

#[test]
fn test_missing_list_terminates_process() {
    let output = run_child("list", None);

    assert_eq!(output.status.code(), Some(EXIT_CODE_CONFIG_ERROR));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(REQUIRED_VAR), "stderr: {stderr}");
}

#[test]
fn test_present_value_does_not_exit() {
    let output = run_child("list", Some(OsStr::new("a,b")));

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("resolved=a|b"), "stdout: {stdout}");
}

#[cfg(unix)]
#[test]
fn test_non_unicode_value_exits_with_same_code() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let raw = OsString::from_vec(vec![0x66, 0x80, 0x6f]);
    let output = run_child("string", Some(&raw));

    assert_eq!(output.status.code(), Some(EXIT_CODE_CONFIG_ERROR));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not valid unicode"), "stderr: {stderr}");
    assert!(stderr.contains(REQUIRED_VAR), "stderr: {stderr}");
}
