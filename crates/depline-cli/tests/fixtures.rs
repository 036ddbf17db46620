//! End-to-end CLI integration tests using test fixtures.
//!
//! Each fixture in `tests/fixtures/` contains:
//! - one input file (dependency:list output or a generated WORKSPACE)
//! - optionally a `depline.toml`
//! - an `expected.report.json` (timestamps and tool version use placeholders)
//!
//! The CLI runs inside the fixture directory so that report paths stay relative.

use assert_cmd::Command;
use depline_test_util::normalize_nondeterministic;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get a Command for the depline binary.
/// Wraps the deprecated cargo_bin to centralize the deprecation warning.
#[allow(deprecated)]
fn depline_cmd() -> Command {
    Command::cargo_bin("depline").expect("depline binary not found - run `cargo build` first")
}

/// Get the path to the test fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("depline-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

/// Run `depline parse <input>` inside a fixture and return the exit code and JSON report.
fn run_parse_on_fixture(fixture_name: &str, input: &str) -> (i32, Value) {
    let fixture_path = fixtures_dir().join(fixture_name);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("report.json");

    let output = depline_cmd()
        .current_dir(&fixture_path)
        .arg("parse")
        .arg(input)
        .arg("--report-out")
        .arg(&report_path)
        .output()
        .expect("Failed to run command");

    let exit_code = output.status.code().unwrap_or(-1);

    let report_content = std::fs::read_to_string(&report_path).expect("Failed to read report");
    let report: Value = serde_json::from_str(&report_content).expect("Failed to parse report JSON");

    (exit_code, report)
}

fn load_expected(fixture_name: &str) -> Value {
    let path = fixtures_dir()
        .join(fixture_name)
        .join("expected.report.json");
    let text = std::fs::read_to_string(&path).expect("Failed to read expected report");
    serde_json::from_str(&text).expect("Failed to parse expected report")
}

fn assert_fixture(fixture_name: &str, input: &str, expected_exit: i32) {
    let (exit_code, actual) = run_parse_on_fixture(fixture_name, input);
    assert_eq!(
        exit_code, expected_exit,
        "fixture {fixture_name}: unexpected exit code"
    );

    let actual = normalize_nondeterministic(actual);
    let expected = load_expected(fixture_name);
    assert_eq!(
        actual,
        expected,
        "fixture {fixture_name}: report mismatch\nactual:\n{}",
        serde_json::to_string_pretty(&actual).unwrap_or_default()
    );
}

#[test]
fn fixture_dependency_list() {
    assert_fixture("dependency_list", "deps.txt", 0);
}

#[test]
fn fixture_workspace_manifest() {
    assert_fixture("workspace_manifest", "WORKSPACE", 0);
}

#[test]
fn fixture_strict_mixed_fails_via_config() {
    assert_fixture("strict_mixed", "mixed.txt", 2);
}
