//! Integration tests that run the dirsum binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run the binary with global config isolated to `home`
fn run_dirsum(home: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_dirsum");
    Command::new(bin)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env_remove("DIRSUM_LOG")
        .env_remove("DIRSUM_LOG_OUTPUT")
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_cli_writes_manifest_with_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("tree");
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("a.txt"), "hello").unwrap();
    fs::write(root.join("sub").join("b.txt"), "world").unwrap();

    let output = run_dirsum(temp_dir.path(), &["--dir", root.to_str().unwrap()]);

    assert!(
        output.status.success(),
        "dirsum should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Wrote 2 checksums"), "stdout: {}", stdout);

    let written = fs::read_to_string(root.join("checksums.json")).unwrap();
    let expected = "[\n  {\n    \"path\": \"a.txt\",\n    \"checksum\": \"aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d\"\n  },\n  {\n    \"path\": \"sub/b.txt\",\n    \"checksum\": \"7c211433f02071597741e6ff5a8ea34789abbf43\"\n  }\n]";
    assert_eq!(written, expected);
}

#[test]
fn test_cli_ignore_and_output_flags() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("tree");
    fs::create_dir_all(root.join("build")).unwrap();
    fs::write(root.join("build").join("out.bin"), "bin").unwrap();
    fs::write(root.join("main.go"), "package main").unwrap();

    let output = run_dirsum(
        temp_dir.path(),
        &[
            "--dir",
            root.to_str().unwrap(),
            "--output",
            "manifest.json",
            "--ignore",
            "build",
            "--quiet",
        ],
    );

    assert!(output.status.success());
    assert!(output.stdout.is_empty(), "quiet run should print nothing");
    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(root.join("manifest.json")).unwrap()).unwrap();
    let records = written.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["path"], "main.go");
}

#[test]
fn test_cli_missing_root_fails_loudly() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent");

    let output = run_dirsum(temp_dir.path(), &["--dir", missing.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error"), "stderr: {}", stderr);
    assert!(stderr.contains("absent"), "stderr: {}", stderr);
    assert!(!missing.join("checksums.json").exists());
}

#[test]
fn test_cli_verbose_logs_to_stderr() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("tree");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("a.txt"), "hello").unwrap();

    let output = run_dirsum(temp_dir.path(), &["--dir", root.to_str().unwrap(), "--verbose"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Hashed file"), "stderr: {}", stderr);
}

#[test]
fn test_cli_empty_output_rejected_before_writing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("tree");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("a.txt"), "hello").unwrap();

    let output = run_dirsum(temp_dir.path(), &["--dir", root.to_str().unwrap(), "--output", ""]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Output file cannot be empty"), "stderr: {}", stderr);
    assert!(!temp_dir.path().join("tree.tmp").exists());
}

#[test]
fn test_cli_warns_when_log_file_inside_root() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("tree");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("a.txt"), "hello").unwrap();
    let log_file = root.join("dirsum.log");

    let output = run_dirsum(
        temp_dir.path(),
        &[
            "--dir",
            root.to_str().unwrap(),
            "--log-output",
            "file",
            "--log-file",
            log_file.to_str().unwrap(),
        ],
    );

    assert!(output.status.success());
    let logged = fs::read_to_string(&log_file).unwrap();
    assert!(logged.contains("Log file is inside the scanned tree"), "log: {}", logged);
}

#[test]
fn test_cli_ignored_log_file_does_not_warn() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("tree");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("a.txt"), "hello").unwrap();
    let log_file = root.join("dirsum.log");

    let output = run_dirsum(
        temp_dir.path(),
        &[
            "--dir",
            root.to_str().unwrap(),
            "--ignore",
            "dirsum.log",
            "--log-output",
            "file",
            "--log-file",
            log_file.to_str().unwrap(),
        ],
    );

    assert!(output.status.success());
    let logged = fs::read_to_string(&log_file).unwrap_or_default();
    assert!(!logged.contains("Log file is inside the scanned tree"), "log: {}", logged);
}
