use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run_prefix_paths(args: &[&str], cwd: &Path) -> Output {
    let bin = env!("CARGO_BIN_EXE_openapi-prefix-paths");
    Command::new(bin)
        .args(args)
        .current_dir(cwd)
        .env("RUST_LOG", "info")
        .output()
        .expect("failed to spawn openapi-prefix-paths")
}

#[test]
fn rewrites_paths_into_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("hf_spec.json");
    let output = temp_dir.path().join("hf_spec_modified.json");
    std::fs::write(
        &input,
        r#"{"openapi":"3.0.0","paths":{"/widgets":{"get":{}},"items":{"post":{}}}}"#,
    )
    .unwrap();

    let out = run_prefix_paths(
        &[
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ],
        temp_dir.path(),
    );

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(
        written,
        serde_json::json!({
            "openapi": "3.0.0",
            "paths": { "/api/v1/widgets": { "get": {} }, "/api/v1/items": { "post": {} } }
        })
    );

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Original: /widgets -> Modified: /api/v1/widgets"));
}

#[test]
fn in_place_overwrites_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("spec.json");
    std::fs::write(&input, r#"{"paths":{"/a":{}}}"#).unwrap();

    let out = run_prefix_paths(
        &["--input", input.to_str().unwrap(), "--in-place", "--prefix", "/v2/"],
        temp_dir.path(),
    );

    assert!(out.status.success());
    assert_eq!(
        std::fs::read_to_string(&input).unwrap(),
        "{\n  \"paths\": {\n    \"/v2/a\": {}\n  }\n}"
    );
}

#[test]
fn missing_input_exits_with_status_one_and_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("missing.json");
    let output = temp_dir.path().join("out.json");

    let out = run_prefix_paths(
        &[
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ],
        temp_dir.path(),
    );

    assert_eq!(out.status.code(), Some(1));
    assert!(!output.exists());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Specification file not found"));
}

#[test]
fn malformed_json_exits_with_status_one_and_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("broken.json");
    let output = temp_dir.path().join("out.json");
    std::fs::write(&input, "{\"paths\": {").unwrap();

    let out = run_prefix_paths(
        &[
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ],
        temp_dir.path(),
    );

    assert_eq!(out.status.code(), Some(1));
    assert!(!output.exists());
    assert_eq!(std::fs::read_to_string(&input).unwrap(), "{\"paths\": {");
}

#[test]
fn rerunning_in_place_double_prefixes() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("spec.json");
    std::fs::write(&input, r#"{"paths":{"/widgets":{}}}"#).unwrap();

    for _ in 0..2 {
        let out = run_prefix_paths(
            &["--input", input.to_str().unwrap(), "--in-place"],
            temp_dir.path(),
        );
        assert!(out.status.success());
    }

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&input).unwrap()).unwrap();
    assert_eq!(
        written,
        serde_json::json!({ "paths": { "/api/v1/api/v1/widgets": {} } })
    );
}

#[test]
fn unwritable_output_exits_with_status_one() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("spec.json");
    let output = temp_dir.path().join("no-such-dir").join("out.json");
    std::fs::write(&input, r#"{"paths":{"/a":{}}}"#).unwrap();

    let out = run_prefix_paths(
        &[
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ],
        temp_dir.path(),
    );

    assert_eq!(out.status.code(), Some(1));
    assert!(!output.exists());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Could not write modified spec"), "stdout: {}", stdout);
    assert!(!stdout.contains("Modification complete"));
}
