#![cfg(feature = "cli")]

use std::process::{Command, Output};
use tempfile::TempDir;

fn run_binary(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vector-gen"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_binary_writes_file_and_confirms() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_binary(&temp_dir, &[]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Vectors written to vectors.txt\n"
    );

    let content = std::fs::read_to_string(temp_dir.path().join("vectors.txt")).unwrap();
    assert_eq!(content.lines().count(), 130_321);
    assert!(content.starts_with("[-9, -9, -9, -9],\n[-9, -9, -9, -8],\n"));
    assert!(content.ends_with("[9, 9, 9, 9],\n"));
}

#[test]
fn test_binary_exits_with_three_on_io_failure() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir(temp_dir.path().join("vectors.txt")).unwrap();

    let output = run_binary(&temp_dir, &[]);

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Could not write the output file"));
}

#[test]
fn test_verbose_logs_debug_in_both_formats() {
    let temp_dir = TempDir::new().unwrap();

    let compact = run_binary(&temp_dir, &["-v"]);
    assert!(compact.status.success());
    assert!(String::from_utf8_lossy(&compact.stderr).contains("DEBUG"));

    let json = run_binary(&temp_dir, &["--json-logs", "-v"]);
    assert!(json.status.success());
    assert!(String::from_utf8_lossy(&json.stderr).contains("\"level\":\"DEBUG\""));

    let quiet_json = run_binary(&temp_dir, &["--json-logs"]);
    assert!(quiet_json.status.success());
    assert!(!String::from_utf8_lossy(&quiet_json.stderr).contains("\"level\":\"DEBUG\""));
}
