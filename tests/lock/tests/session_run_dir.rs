//! End-to-end front end: drive a session from in-memory input, persist
//! the run, and verify the directory fail-closed.

use codelock_harness::config::{LockConfig, LockConfigInput};
use codelock_harness::run_dir::{verify_run_dir, write_run_dir, RunDirError};
use codelock_harness::session::{run_session, Verdict};

fn drive(config: &LockConfig, initial: Option<&str>, typed: &str) -> (Option<Verdict>, String) {
    let mut out = Vec::new();
    let report = run_session(config, initial, typed.as_bytes(), &mut out).unwrap();
    (report.map(|r| r.verdict), String::from_utf8(out).unwrap())
}

#[test]
fn default_lock_denies_then_explains() {
    let config = LockConfig::build(&LockConfigInput::default()).unwrap();
    let (verdict, out) = drive(&config, None, "oops\n0\n");
    assert_eq!(verdict, Some(Verdict::Denied));
    assert!(out.starts_with("- WELCOME HOME -\n"));
    assert!(out.contains("Invalid format. Use 4 digits (0-9)."));
    // "0" pads to 0000.
    assert!(out.contains("0000 -> 0010 -> 0910 -> 1910 -> 2910"));
    assert!(out.contains("(Nodes expanded: 12)"));
}

#[test]
fn custom_width_lock() {
    let config = LockConfig::build(&LockConfigInput {
        digits: Some(2),
        target: Some("90".into()),
    })
    .unwrap();
    let (verdict, out) = drive(&config, Some("09"), "");
    assert_eq!(verdict, Some(Verdict::Denied));
    assert!(out.contains("Shortest path (2 moves):"));

    let (verdict, out) = drive(&config, None, "1234\n90\n");
    assert_eq!(verdict, Some(Verdict::Granted));
    assert!(out.contains("Invalid format. Use 2 digits (0-9)."));
}

#[test]
fn saved_run_verifies_and_detects_tampering() {
    let config = LockConfig::build(&LockConfigInput::default()).unwrap();
    let mut out = Vec::new();
    let report = run_session(&config, Some("1234"), "".as_bytes(), &mut out)
        .unwrap()
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let run = dir.path().join("run");
    let manifest = write_run_dir(&run, &config, &report).unwrap();
    assert_eq!(verify_run_dir(&run).unwrap(), manifest.result_digest);

    let digest = std::fs::read_to_string(run.join("result_digest.txt")).unwrap();
    assert_eq!(digest, report.result.digest().unwrap().as_str());

    let record: serde_json::Value =
        serde_json::from_slice(&std::fs::read(run.join("search_result.json")).unwrap()).unwrap();
    assert_eq!(record["attempt"], "1234");
    assert_eq!(record["result"]["goal"], "2910");

    std::fs::write(run.join("search_result.json"), b"{}").unwrap();
    assert!(matches!(
        verify_run_dir(&run).unwrap_err(),
        RunDirError::ArtifactHashMismatch { .. }
    ));
}

#[test]
fn granted_run_renders_single_code_subgraph() {
    let config = LockConfig::build(&LockConfigInput::default()).unwrap();
    let mut out = Vec::new();
    let report = run_session(&config, Some("2910"), "".as_bytes(), &mut out)
        .unwrap()
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    write_run_dir(dir.path(), &config, &report).unwrap();
    let dot = std::fs::read_to_string(dir.path().join("subgraph.dot")).unwrap();
    // The code itself plus its eight neighbors, no path edges.
    assert_eq!(dot.matches("fillcolor=").count(), 9);
    assert!(dot.contains("\"2910\" [fillcolor=green"));
    assert!(!dot.contains("color=red"));
}
