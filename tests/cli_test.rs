//! End-to-end tests of the dominant-colors binary
//!
//! These tests spawn the built executable and check:
//! - The no-argument run against ./data.csv
//! - Plain center lines on stdout, diagnostics only on stderr
//! - Exit code 1 for missing, malformed and undersized inputs

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const PAIRED_COLORS: &str =
    "r,g,b\n0,0,0\n0,0,0\n255,255,255\n255,255,255\n128,128,128\n128,128,128\n";

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dominant-colors"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn dominant-colors")
}

fn sorted_lines(bytes: &[u8]) -> Vec<String> {
    let mut lines: Vec<String> = String::from_utf8_lossy(bytes)
        .lines()
        .map(String::from)
        .collect();
    lines.sort();
    lines
}

// ============================================================================
// Successful Runs
// ============================================================================

#[test]
fn test_no_arguments_reads_data_csv() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.csv"), PAIRED_COLORS).unwrap();

    let output = run_in(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        sorted_lines(&output.stdout),
        vec!["0 0 0", "128 128 128", "255 255 255"]
    );
    assert!(output.stderr.is_empty(), "unexpected stderr: {:?}", output.stderr);
}

#[test]
fn test_stdout_holds_only_k_center_lines() {
    let dir = TempDir::new().unwrap();
    let mut content = String::from("r,g,b\n");
    for i in 0..60 {
        content.push_str(&format!("{},{},{}\n", (i * 37) % 256, (i * 91) % 256, (i * 53) % 256));
    }
    fs::write(dir.path().join("colors.csv"), content).unwrap();

    let output = run_in(dir.path(), &["colors.csv", "-k", "4", "--seed", "9"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 4);
    for line in stdout.lines() {
        let fields: Vec<i64> = line
            .split(' ')
            .map(|f| f.parse().expect("center channel should be an integer"))
            .collect();
        assert_eq!(fields.len(), 3);
        assert!(fields.iter().all(|c| (0..=255).contains(c)));
    }
}

#[test]
fn test_debug_logging_stays_on_stderr() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.csv"), PAIRED_COLORS).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_dominant-colors"))
        .current_dir(dir.path())
        .env("RUST_LOG", "debug")
        .output()
        .expect("failed to spawn dominant-colors");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(sorted_lines(&output.stdout).len(), 3);
    assert!(!output.stderr.is_empty());
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_missing_file_exits_one() {
    let dir = TempDir::new().unwrap();

    let output = run_in(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr: {}", stderr);
    assert!(stderr.contains("data.csv"), "stderr: {}", stderr);
}

#[test]
fn test_fewer_rows_than_clusters_exits_one() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.csv"), "r,g,b\n1,2,3\n4,5,6\n").unwrap();

    let output = run_in(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Insufficient samples"));
}

#[test]
fn test_malformed_row_exits_one() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.csv"), "r,g,b\n1,2,3\n4,5\n7,8,9\n10,11,12\n").unwrap();

    let output = run_in(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 3"));
}
