#![allow(clippy::unwrap_used)]

//! End-to-end runs of the binary against temporary logs.

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const LOG: &str = "\
malloc: 12.500 ms\r
free: 3.000 ms\r
new: 9.100 ms\r
Performed 4194304 allocations of 64 bytes each.\r
\r
";

const EXPECTED: &str = "\
technique,time,allocation_count,allocation_size
\"malloc\",\"12.5\",\"4194304\",\"64\"
\"free\",\"3\",\"4194304\",\"64\"
\"new\",\"9.1\",\"4194304\",\"64\"
";

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_alloc-bench-csv"))
        .args(args)
        .output()
        .unwrap()
}

fn read_normalized(path: &Path) -> String {
    fs::read_to_string(path).unwrap().replace("\r\n", "\n")
}

#[test]
fn combined_mode_writes_one_file() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("bench.log");
    let out = dir.path().join("bench.csv");
    fs::write(&log, LOG).unwrap();

    let output = run(&["csv", log.to_str().unwrap(), out.to_str().unwrap()]);
    assert!(output.status.success(), "{:?}", output);
    assert_eq!(read_normalized(&out), EXPECTED);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Wrote"));
}

#[test]
fn extensionless_output_writes_per_section() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("bench.log");
    let out = dir.path().join("tables");
    fs::write(&log, LOG).unwrap();

    let output = run(&["csv", log.to_str().unwrap(), out.to_str().unwrap()]);
    assert!(output.status.success(), "{:?}", output);

    let mut names: Vec<String> = fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, ["all.csv"]);
    assert_eq!(read_normalized(&out.join("all.csv")), EXPECTED);
}

#[test]
fn section_flag_renames_table() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("bench.log");
    let out = dir.path().join("tables");
    fs::write(&log, LOG).unwrap();

    let output = run(&[
        "csv-dir",
        log.to_str().unwrap(),
        out.to_str().unwrap(),
        "--section",
        "arena",
        "--quiet",
    ]);
    assert!(output.status.success(), "{:?}", output);
    assert!(output.stdout.is_empty());
    assert!(out.join("arena.csv").exists());
}

#[test]
fn unknown_mode_reports_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("bench.log");
    let out = dir.path().join("bench.csv");
    fs::write(&log, LOG).unwrap();

    let output = run(&["xyz", log.to_str().unwrap(), out.to_str().unwrap()]);
    assert!(output.status.success(), "{:?}", output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: unrecognized output mode \"xyz\""), "{}", stderr);
    assert!(!out.exists());
}

#[test]
fn log_without_results_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("bench.log");
    let out = dir.path().join("bench.csv");
    fs::write(&log, "Performed 1 allocations of 8 bytes each.\n").unwrap();

    let output = run(&["csv", log.to_str().unwrap(), out.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warning: no timed results"), "{}", stderr);
    assert!(stderr.contains("no records"), "{}", stderr);
    assert!(!out.exists());
}

#[test]
fn malformed_time_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("bench.log");
    let out = dir.path().join("bench.csv");
    fs::write(&log, "malloc: 1 ms\nfree: soon ms\n").unwrap();

    let output = run(&["csv", log.to_str().unwrap(), out.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("malformed time"), "{}", stderr);
    assert!(stderr.contains(":2"), "{}", stderr);
    assert!(!out.exists());
}

#[test]
fn missing_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("bench.csv");

    let output = run(&["csv", "/nonexistent/bench.log", out.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(!out.exists());
}

#[test]
fn explicit_dir_mode_uses_path_with_extension_as_directory() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("bench.log");
    let out = dir.path().join("out.csv");
    fs::write(&log, LOG).unwrap();

    let output = run(&["csv-dir", log.to_str().unwrap(), out.to_str().unwrap()]);
    assert!(output.status.success(), "{:?}", output);
    assert!(out.is_dir());
    assert_eq!(read_normalized(&out.join("all.csv")), EXPECTED);
}
