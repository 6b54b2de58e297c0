#![allow(unused)]
//! Headless mode process-level integration harness.
//!
//! # What this covers
//!
//! This harness exercises `paperscope` as a compiled binary via
//! [`std::process::Command`], validating headless mode from the outside.
//!
//! - **Flags**: `--headless`, `--data`, `--query`, repeated `--facet`,
//!   `--format text|json|html`.
//! - **Exit codes**: clean exit = 0; unknown facet or a headless-only flag
//!   without `--headless` = 2 (clap usage error).
//! - **Degradation**: a missing data file prints the zero-result view.
//!
//! # What this does NOT cover
//!
//! - TUI rendering (that requires a real terminal)
//!
//! # Running
//!
//! ```sh
//! cargo test --test headless_harness
//! ```

mod common;
use common::*;

use std::io::Write;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn paperscope(data: &std::path::Path, config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_paperscope"));
    // Keep the binary away from the real ~/.config
    cmd.env("XDG_CONFIG_HOME", config_dir)
        .arg("--data")
        .arg(data)
        .arg("--headless");
    cmd
}

fn scenario_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .unwrap();
    file.write_all(SCENARIO_JSON.as_bytes()).unwrap();
    file
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "paperscope failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn no_filters_prints_full_count() {
    let data = scenario_file();
    let home = tempfile::tempdir().unwrap();
    let out = stdout(&paperscope(data.path(), home.path()).output().unwrap());
    assert!(out.starts_with("2 resultado(s)\n"), "{out}");
    assert!(out.contains("ECG Study"));
    assert!(out.contains("MRI Atlas"));
}

#[test]
fn query_filters_text() {
    let data = scenario_file();
    let home = tempfile::tempdir().unwrap();
    let out = stdout(
        &paperscope(data.path(), home.path())
            .args(["--query", "ECG"])
            .output()
            .unwrap(),
    );
    assert_eq!(
        out,
        "1 resultado(s)\n\nECG Study\n  [classification] [detection]\n  deep learning on ECG\n"
    );
}

#[test]
fn repeated_facet_values_are_ored() {
    let data = scenario_file();
    let home = tempfile::tempdir().unwrap();
    let out = stdout(
        &paperscope(data.path(), home.path())
            .args(["--facet", "task=classification", "--facet", "task=segmentation"])
            .output()
            .unwrap(),
    );
    assert!(out.starts_with("2 resultado(s)\n"), "{out}");
}

#[test]
fn json_format_is_the_view_model() {
    let data = scenario_file();
    let home = tempfile::tempdir().unwrap();
    let out = stdout(
        &paperscope(data.path(), home.path())
            .args(["--facet", "task=segmentation", "--format", "json"])
            .output()
            .unwrap(),
    );
    let view: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(view["count"], 1);
    assert_eq!(view["count_text"], "1 resultado(s)");
    assert_eq!(view["cards"][0]["title"], "MRI Atlas");
}

#[test]
fn html_format_has_mount_ids() {
    let data = scenario_file();
    let home = tempfile::tempdir().unwrap();
    let out = stdout(
        &paperscope(data.path(), home.path())
            .args(["--format", "html"])
            .output()
            .unwrap(),
    );
    assert!(out.contains("<div id=\"result-count\">2 resultado(s)</div>"));
    assert_eq!(out.matches("class=\"paper-card\"").count(), 2);
}

#[test]
fn missing_data_file_prints_zero_results() {
    let home = tempfile::tempdir().unwrap();
    let missing = home.path().join("absent.json");
    let out = stdout(&paperscope(&missing, home.path()).output().unwrap());
    assert_eq!(out, "0 resultado(s)\n");
}

#[test]
fn unknown_facet_is_a_usage_error() {
    let data = scenario_file();
    let home = tempfile::tempdir().unwrap();
    let output = paperscope(data.path(), home.path())
        .args(["--facet", "venue=EUSIPCO"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("venue"));
}

#[test]
fn query_requires_headless() {
    let output = Command::new(env!("CARGO_BIN_EXE_paperscope"))
        .args(["--query", "ecg"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn format_requires_headless() {
    let output = Command::new(env!("CARGO_BIN_EXE_paperscope"))
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--headless"));
}
