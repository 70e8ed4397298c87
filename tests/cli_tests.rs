//! CLI integration tests
//!
//! These tests verify the command-line tools work correctly by running the
//! built binaries.

use plist::Value;
use std::io::Write as _;
use std::process::{Command, Stdio};
use tempfile::tempdir;

fn plist_sort_bin() -> &'static str {
    env!("CARGO_BIN_EXE_plist-sort")
}

fn plist_to_json_bin() -> &'static str {
    env!("CARGO_BIN_EXE_plist-to-json")
}

const DOCSETS_PLIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<dict>
    <key>docsets</key>
    <array>
        <dict>
            <key>docsetName</key>
            <string>Zeta</string>
        </dict>
        <dict>
            <key>docsetName</key>
            <string>alpha</string>
        </dict>
    </array>
</dict>
</plist>
"#;

// ============================================================================
// plist-sort
// ============================================================================

#[test]
fn test_cli_sort_to_stdout_is_xml() {
    let dir = tempdir().unwrap();
    let in_path = dir.path().join("in.plist");
    std::fs::write(&in_path, DOCSETS_PLIST).unwrap();

    let output = Command::new(plist_sort_bin())
        .args([in_path.to_str().unwrap(), "-", "docsets", "docsetName"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "plist-sort should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<plist"), "stdout output should be XML");

    let document =
        Value::from_reader(std::io::Cursor::new(&output.stdout[..])).expect("valid plist");
    let names: Vec<&str> = document
        .as_dictionary()
        .unwrap()
        .get("docsets")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|v| {
            v.as_dictionary()
                .unwrap()
                .get("docsetName")
                .and_then(Value::as_string)
                .unwrap()
        })
        .collect();
    assert_eq!(names, vec!["alpha", "Zeta"]);
}

#[test]
fn test_cli_sort_stdin_to_stdout() {
    let mut child = Command::new(plist_sort_bin())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    {
        let mut stdin = child.stdin.take().unwrap();
        stdin.write_all(DOCSETS_PLIST.as_bytes()).unwrap();
    }
    let output = child.wait_with_output().expect("Failed to wait on command");

    assert!(output.status.success(), "plist-sort via stdin should succeed");
    assert!(
        Value::from_reader(std::io::Cursor::new(&output.stdout[..])).is_ok(),
        "stdout should be a valid plist"
    );
}

#[test]
fn test_cli_sort_to_file_is_binary() {
    let dir = tempdir().unwrap();
    let in_path = dir.path().join("in.plist");
    let out_path = dir.path().join("out.plist");
    std::fs::write(&in_path, DOCSETS_PLIST).unwrap();

    let output = Command::new(plist_sort_bin())
        .args([
            in_path.to_str().unwrap(),
            out_path.to_str().unwrap(),
            "docsets",
            "docsetName",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "plist-sort should succeed");
    assert!(output.stdout.is_empty(), "file output should leave stdout empty");

    let bytes = std::fs::read(&out_path).unwrap();
    assert!(bytes.starts_with(b"bplist00"), "file output should be binary");
}

#[test]
fn test_cli_sort_missing_path_fails_without_output() {
    let dir = tempdir().unwrap();
    let in_path = dir.path().join("in.plist");
    let out_path = dir.path().join("out.plist");
    std::fs::write(&in_path, DOCSETS_PLIST).unwrap();

    let output = Command::new(plist_sort_bin())
        .args([
            in_path.to_str().unwrap(),
            out_path.to_str().unwrap(),
            "nonexistent",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "should fail for a missing path");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "should report the missing path");
    assert!(!out_path.exists(), "no output should be produced on failure");
}

#[test]
fn test_cli_sort_nonexistent_input_fails() {
    let output = Command::new(plist_sort_bin())
        .args(["/nonexistent/input.plist"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "should fail for nonexistent file");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "should print a diagnostic");
}

// ============================================================================
// plist-to-json
// ============================================================================

#[test]
fn test_cli_to_json_basic() {
    let dir = tempdir().unwrap();
    let in_path = dir.path().join("in.plist");
    std::fs::write(&in_path, DOCSETS_PLIST).unwrap();

    let output = Command::new(plist_to_json_bin())
        .args([in_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "plist-to-json should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("Output should be valid JSON");

    assert_eq!(json["docsets"][0]["docsetName"], "Zeta");
    assert_eq!(json["docsets"][1]["docsetName"], "alpha");
    assert!(stdout.contains("  "), "output should be indented");
}

#[test]
fn test_cli_to_json_data_blob() {
    let dir = tempdir().unwrap();
    let in_path = dir.path().join("in.plist");

    let mut dict = plist::Dictionary::new();
    dict.insert("blob".to_string(), Value::Data(vec![1, 2, 3, 255]));
    Value::Dictionary(dict).to_file_xml(&in_path).unwrap();

    let output = Command::new(plist_to_json_bin())
        .args([in_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "plist-to-json should succeed");

    let json: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout))
            .expect("Output should be valid JSON");
    assert_eq!(json["blob"]["@type"], "bytes");
    assert_eq!(json["blob"]["__bytes"], "AQID/w==");
}

#[test]
fn test_cli_to_json_output_file() {
    let dir = tempdir().unwrap();
    let in_path = dir.path().join("in.plist");
    let out_path = dir.path().join("out.json");
    std::fs::write(&in_path, DOCSETS_PLIST).unwrap();

    let output = Command::new(plist_to_json_bin())
        .args([in_path.to_str().unwrap(), out_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "plist-to-json should succeed");
    assert!(out_path.exists(), "output file should be created");

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let _json: serde_json::Value =
        serde_json::from_str(&contents).expect("Output file should contain valid JSON");
}

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn test_cli_help() {
    for bin in [plist_sort_bin(), plist_to_json_bin()] {
        let output = Command::new(bin)
            .args(["--help"])
            .output()
            .expect("Failed to execute command");

        assert!(output.status.success(), "--help should succeed");

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("IN_FILE"), "help should describe arguments");
    }
}

#[test]
fn test_cli_version() {
    let output = Command::new(plist_sort_bin())
        .args(["--version"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "--version should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("plist-sort"), "version should show program name");
}
