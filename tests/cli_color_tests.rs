//! End-to-end tests for `siteblocks resolve` and `siteblocks palette`.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

use std::process::{Command, Output};

mod fixtures;

use fixtures::*;

/// Path to the siteblocks binary
fn siteblocks_bin() -> &'static str {
    env!("CARGO_BIN_EXE_siteblocks")
}

/// Runs the binary with an empty, isolated config directory.
fn run(args: &[&str]) -> Output {
    let config_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    Command::new(siteblocks_bin())
        .env("SITEBLOCKS_CONFIG_DIR", config_dir.path())
        .env_remove("SITEBLOCKS_CONTENT_DIR")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_resolve_token_with_default_palette() {
    let output = run(&["resolve", "--selection", r#"{"colorSelection":"primary"}"#]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "Should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout(&output), "#3b82f6");
}

#[test]
fn test_resolve_with_opacity_preset() {
    let (ds_path, ds_temp) = create_temp_json_file("ds.json", &test_design_system());
    let output = run(&[
        "resolve",
        "--selection",
        r#"{"colorSelection":"tertiary","opacityPreset":"50"}"#,
        "--design-system",
        ds_path.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(0));
    // Token alpha 0.5 times preset 0.5.
    assert_eq!(stdout(&output), "rgba(119, 136, 153, 0.25)");
}

#[test]
fn test_resolve_custom_ignores_opacity() {
    let output = run(&[
        "resolve",
        "--selection",
        r##"{"colorSelection":"custom","customColor":{"hex":"#ff8800","alpha":1},"opacityPreset":"25"}"##,
    ]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "#ff8800");
}

#[test]
fn test_resolve_missing_selection_uses_fallback() {
    let output = run(&["resolve", "--selection", "{}", "--fallback", "#123123", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("Should parse JSON output");
    assert_eq!(result["color"], "#123123");
    assert_eq!(result["defaultPalette"], true);
}

#[test]
fn test_resolve_invalid_selection_json() {
    let output = run(&["resolve", "--selection", "{not json"]);
    assert_eq!(
        output.status.code(),
        Some(1),
        "Invalid selection should exit with code 1"
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid selection"));
}

#[test]
fn test_resolve_missing_design_system_file() {
    let output = run(&[
        "resolve",
        "--selection",
        r#"{"colorSelection":"primary"}"#,
        "--design-system",
        "/tmp/nonexistent_design_system_xyz.json",
    ]);
    assert_eq!(
        output.status.code(),
        Some(2),
        "Nonexistent file should exit with code 2"
    );
}

#[test]
fn test_palette_json() {
    let (ds_path, ds_temp) = create_temp_json_file("ds.json", &test_design_system());
    let output = run(&["palette", "--design-system", ds_path.to_str().unwrap(), "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("Should parse JSON output");
    assert_eq!(result["title"], "Test Brand");
    assert_eq!(result["defaultPalette"], false);
    let colors = result["colors"].as_array().unwrap();
    assert_eq!(colors.len(), 7);
    assert_eq!(colors[0]["token"], "primary");
    assert_eq!(colors[0]["resolved"], "#112233");
    assert_eq!(colors[2]["resolved"], "rgba(119, 136, 153, 0.5)");
    assert!(result["warnings"].as_array().unwrap().is_empty());
}

#[test]
fn test_palette_default_plain() {
    let output = run(&["palette"]);
    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("Default palette"));
    assert!(text.contains("buttonTextSecondary"));
    assert!(text.contains("#1f2937"));
}
