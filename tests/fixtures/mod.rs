//! Shared test fixtures for E2E CLI and web API tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Design system with distinct colors and a translucent tertiary token.
pub fn test_design_system() -> Value {
    json!({
        "title": "Test Brand",
        "colors": {
            "primary": {"hex": "#112233", "alpha": 1},
            "secondary": {"hex": "#445566", "alpha": 1},
            "tertiary": {"hex": "#778899", "alpha": 0.5, "rgb": {"r": 119, "g": 136, "b": 153, "a": 0.5}},
            "buttonPrimary": {"hex": "#aa0000", "alpha": 1},
            "buttonSecondary": {"hex": "#00aa00", "alpha": 1},
            "buttonTextPrimary": {"hex": "#ffffff", "alpha": 1},
            "buttonTextSecondary": {"hex": "#000000", "alpha": 1}
        }
    })
}

/// `count` company entries keyed `c1..cN`.
pub fn test_companies(count: usize) -> Value {
    Value::Array(
        (1..=count)
            .map(|i| json!({"_key": format!("c{i}"), "name": format!("Company {i}")}))
            .collect(),
    )
}

/// Home page with one block of every grid kind plus a button.
pub fn test_home_page() -> Value {
    json!({
        "slug": "home",
        "title": "Home",
        "blocks": [
            {"_type": "buttonBlock", "_key": "cta", "backgroundSelection": "primary", "label": "Go"},
            {"_type": "honeycombGrid", "_key": "partners", "companies": test_companies(5), "maxItemsPerRow": 4},
            {"_type": "tiltedSquareGrid", "_key": "clients", "companies": test_companies(7),
             "itemsPerRow": 3, "size": 90, "gap": 4},
            {"_type": "contactForm", "accentSelection": "tertiary"}
        ]
    })
}

/// Writes a JSON value to `path`.
pub fn write_json(path: &Path, value: &Value) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).expect("Failed to write JSON");
}

/// Writes `value` to `<temp>/<name>` and returns the path with its temp dir.
pub fn create_temp_json_file(name: &str, value: &Value) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    write_json(&path, value);
    (path, temp_dir)
}

/// Content directory with the test design system and the home page.
pub fn create_content_dir() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_json(&temp_dir.path().join("design-system.json"), &test_design_system());
    write_json(&temp_dir.path().join("pages/home.json"), &test_home_page());
    fs::write(
        temp_dir.path().join("pages/about.yaml"),
        "slug: about\ntitle: About Us\nblocks:\n  - _type: textBlock\n    textSelection: secondary\n",
    )
    .expect("Failed to write YAML page");
    temp_dir
}

/// Content directory with pages but no design system.
pub fn create_content_dir_without_design_system() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_json(&temp_dir.path().join("pages/home.json"), &test_home_page());
    temp_dir
}
