//! End-to-end tests for the `qfm` binary.
//!
//! Each test runs the compiled binary and checks its exit status and output.

use std::fs;
use std::process::{Command, Output};

fn qfm(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qfm"))
        .args(args)
        .env_remove("QFM_DEPTH")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run qfm")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ============================================================================
// encode
// ============================================================================

#[test]
fn test_encode_text() {
    let output = qfm(&["encode", "--data", "0.5,1.0", "--depth", "1"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let text = stdout(&output);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "// first_order_expansion",
            "qreg q[2];",
            "u2(0, π) q[0];",
            "u1(1) q[0];",
            "u2(0, π) q[1];",
            "u1(2) q[1];",
        ]
    );
}

#[test]
fn test_encode_inverse_json() {
    let output = qfm(&[
        "encode", "--data", "[0.3]", "--format", "json", "--inverse",
    ]);
    assert!(output.status.success(), "{}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["name"], "first_order_expansion_dg");
    assert_eq!(value["depth"], 4);
    assert_eq!(value["instructions"].as_array().unwrap().len(), 4);
}

#[test]
fn test_encode_depth_from_environment() {
    let output = Command::new(env!("CARGO_BIN_EXE_qfm"))
        .args(["encode", "--data", "0.1,0.2", "--format", "json"])
        .env("QFM_DEPTH", "3")
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["instructions"].as_array().unwrap().len(), 12);
}

#[test]
fn test_encode_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("map.yaml");
    fs::write(
        &config,
        "name: SecondOrderExpansion\nnum_qubits: 3\noptions:\n  depth: 1\n  entanglement: linear\n",
    )
    .unwrap();
    let out = dir.path().join("circuit.json");

    let output = qfm(&[
        "encode",
        "--data",
        "0.1,0.2,0.3",
        "--config",
        config.to_str().unwrap(),
        "--format",
        "json",
        "--output",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Encoded 12 ops"));

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value["name"], "second_order_expansion");
}

#[test]
fn test_encode_rejects_bad_input() {
    for data in ["[[0.5, 1.0]]", "\"0.5\"", "0.5,oops"] {
        let output = qfm(&["encode", "--data", data]);
        assert!(!output.status.success(), "{data} should fail");
        assert!(stderr(&output).contains("Error:"));
    }

    let output = qfm(&["encode", "--data", "[[0.5, 1.0]]"]);
    assert!(stderr(&output).contains("1-D"));
}

#[test]
fn test_encode_rejects_length_mismatch_with_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("map.json");
    fs::write(&config, r#"{"name": "FirstOrderExpansion", "num_qubits": 3}"#).unwrap();

    let output = qfm(&["encode", "--data", "0.1,0.2", "--config", config.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("data dimension"));
}

#[test]
fn test_encode_rejects_zero_depth() {
    let output = qfm(&["encode", "--data", "0.1", "--depth", "0"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("depth must be at least 1"));
}

// ============================================================================
// schema / version
// ============================================================================

#[test]
fn test_schema_single() {
    let output = qfm(&["schema", "--kind", "first-order"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["name"], "FirstOrderExpansion");
    assert_eq!(value["input_schema"]["properties"]["depth"]["minimum"], 1);
}

#[test]
fn test_schema_all() {
    let output = qfm(&["schema"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
}

#[test]
fn test_version() {
    let output = qfm(&["version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}
