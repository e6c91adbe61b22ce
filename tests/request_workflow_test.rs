use jformat_options::builders::reporter::ReportFormat;
use jformat_options::builders::selection;
use jformat_options::core::builder::FormatOptionsBuilder;
use jformat_options::core::error::OptionsError;
use jformat_options::utils;
use std::fs;
use std::process::Command;

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_jformat-options"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_core_workflow() {
    // 1. Accumulate a request the way the argument parser does
    let mut builder = FormatOptionsBuilder::new();
    builder.add_file("src/Foo.java").aosp(true).max_width(120);
    selection::apply_lines(&mut builder, &["1:5,10:12", "4:6"]).unwrap();

    // 2. Resolve and validate
    let options = utils::resolve_request(&builder).unwrap();
    assert!(options.is_selection());
    assert_eq!(options.lines().ranges(), &[1..7, 10..13]);
    assert_eq!(options.max_width(), 120);

    // 3. Export it
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("request.yaml");
    let message = utils::describe_request(&options, ReportFormat::Yaml, Some(&path)).unwrap();
    assert!(message.contains("request.yaml"));

    let exported = fs::read_to_string(&path).unwrap();
    assert!(exported.contains("src/Foo.java"));
    assert!(exported.contains("aosp: true"));
}

#[test]
fn test_construction_errors_surface() {
    let mut builder = FormatOptionsBuilder::new();
    builder.add_file("A.java").add_offset(3);
    assert_eq!(
        builder.build().unwrap_err(),
        OptionsError::MismatchedPairing {
            offsets: 1,
            lengths: 0
        }
    );
    assert!(utils::resolve_request(&builder).is_err());
}

#[test]
fn test_cli_prints_json_request() {
    let output = run_cli(&[
        "--lines",
        "1:5",
        "--lines=10:12",
        "--skip-sorting-imports",
        "--output-format",
        "json",
        "Foo.java",
    ]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["files"], serde_json::json!(["Foo.java"]));
    assert_eq!(value["lines"], serde_json::json!([[1, 6], [10, 13]]));
    assert_eq!(value["sort_imports"], false);
    assert_eq!(value["remove_unused_imports"], true);
}

#[test]
fn test_cli_reads_stdin_marker() {
    let output = run_cli(&["--assume-filename", "Foo.java", "--output-format", "json", "-"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["stdin"], true);
    assert_eq!(value["files"], serde_json::json!([]));
    assert_eq!(value["assume_filename"], "Foo.java");
}

#[test]
fn test_cli_rejects_unpaired_offsets() {
    let output = run_cli(&["--offset", "4", "--offset", "9", "--length", "2", "A.java"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("matching pairs"));
}

#[test]
fn test_cli_rejects_zero_width() {
    let output = run_cli(&["--line-length", "0", "A.java"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid line width 0"));
}

#[test]
fn test_cli_version() {
    let output = run_cli(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), format!("jformat-options {}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_help() {
    let output = run_cli(&["-h"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--lines"));
    assert!(stdout.contains("--skip-javadoc-formatting"));
}
