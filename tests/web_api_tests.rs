//! Integration tests for the SiteBlocks Web API.
//!
//! These tests require the `web` feature to be enabled:
//! ```bash
//! cargo test --features web web_api
//! ```

#![cfg(feature = "web")]

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use siteblocks::config::Config;
use siteblocks::web::{create_router, AppState};

mod fixtures;
use fixtures::{create_content_dir, create_content_dir_without_design_system, write_json};

/// Creates a router over a populated content directory.
fn create_test_app() -> (axum::Router, TempDir) {
    let content = create_content_dir();
    let state = AppState::new(Config::default(), content.path().to_path_buf());
    (create_router(state), content)
}

/// Helper to make a GET request and parse the JSON response.
async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

/// Helper to make a POST request with JSON body.
async fn post_json(app: &axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let (app, _content) = create_test_app();

    let (status, json) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

// ============================================================================
// Color Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_design_system_from_content() {
    let (app, _content) = create_test_app();

    let (status, json) = get_json(&app, "/api/design-system").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "Test Brand");
    assert_eq!(json["defaultPalette"], false);
    assert_eq!(json["colors"]["primary"]["hex"], "#112233");
}

#[tokio::test]
async fn test_design_system_defaults_when_missing() {
    let content = create_content_dir_without_design_system();
    let app = create_router(AppState::new(Config::default(), content.path().to_path_buf()));

    let (status, json) = get_json(&app, "/api/design-system").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["defaultPalette"], true);
    assert_eq!(json["colors"]["buttonSecondary"]["hex"], "#e5e7eb");
}

#[tokio::test]
async fn test_resolve_color_token() {
    let (app, _content) = create_test_app();

    let (status, json) = post_json(
        &app,
        "/api/colors/resolve",
        json!({"selection": {"colorSelection": "secondary", "opacityPreset": "75"}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["color"], "rgba(68, 85, 102, 0.75)");
}

#[tokio::test]
async fn test_resolve_color_fallback() {
    let (app, _content) = create_test_app();

    let (status, json) = post_json(
        &app,
        "/api/colors/resolve",
        json!({"selection": {"colorSelection": "custom"}, "fallback": "#abcdef"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["color"], "#abcdef");
}

#[tokio::test]
async fn test_resolve_color_unknown_token_rejected() {
    let (app, _content) = create_test_app();

    let (status, _json) = post_json(
        &app,
        "/api/colors/resolve",
        json!({"selection": {"colorSelection": "neonPink"}}),
    )
    .await;

    assert!(status.is_client_error());
}

// ============================================================================
// Layout Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_honeycomb_layout_endpoint() {
    let (app, _content) = create_test_app();

    let (status, json) = post_json(
        &app,
        "/api/layouts/honeycomb",
        json!({"count": 5, "maxItemsPerRow": 4, "viewportWidth": 1280}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["breakpoint"], "desktop");
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["items"].as_array().unwrap().len(), 4);
    assert_eq!(rows[1]["items"][0]["_key"], "item-5");
}

#[tokio::test]
async fn test_honeycomb_layout_with_items_and_no_viewport() {
    let (app, _content) = create_test_app();

    let (status, json) = post_json(
        &app,
        "/api/layouts/honeycomb",
        json!({"items": [{"_key": "a", "name": "A"}, {"_key": "b", "name": "B"}]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["tessellated"], false);
    assert_eq!(json["maxItemsPerRow"], 4);
    assert_eq!(json["rows"][0]["items"][1]["_key"], "b");
}

#[tokio::test]
async fn test_honeycomb_layout_requires_items() {
    let (app, _content) = create_test_app();

    let (status, json) = post_json(&app, "/api/layouts/honeycomb", json!({"viewportWidth": 800})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("items or count"));
}

#[tokio::test]
async fn test_honeycomb_layout_rejects_huge_count() {
    let (app, _content) = create_test_app();

    let (status, _json) = post_json(&app, "/api/layouts/honeycomb", json!({"count": 1_000_000})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_tilted_square_layout_endpoint() {
    let (app, _content) = create_test_app();

    let (status, json) = post_json(
        &app,
        "/api/layouts/tilted-square",
        json!({"count": 7, "itemsPerRow": 3, "size": 90, "gap": 4}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["rowCount"], 3);
    let step = json["horizontalStepPx"].as_f64().unwrap();
    assert!((step - 127.28).abs() < 0.01);
    let last_left = json["items"][6]["leftPx"].as_f64().unwrap();
    assert!((last_left - 127.28).abs() < 0.01);
}

#[tokio::test]
async fn test_tilted_square_degenerate_size_is_empty() {
    let (app, _content) = create_test_app();

    let (status, json) = post_json(
        &app,
        "/api/layouts/tilted-square",
        json!({"count": 4, "size": 0}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["items"].as_array().unwrap().is_empty());
    assert_eq!(json["rowCount"], 0);
}

// ============================================================================
// Page Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_list_pages() {
    let (app, _content) = create_test_app();

    let (status, json) = get_json(&app, "/api/pages").await;

    assert_eq!(status, StatusCode::OK);
    let pages = json["pages"].as_array().unwrap();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0]["slug"], "about");
    assert_eq!(pages[1]["slug"], "home");
    assert_eq!(pages[1]["blockCount"], 4);
}

#[tokio::test]
async fn test_render_page() {
    let (app, _content) = create_test_app();

    let (status, json) = get_json(&app, "/api/pages/home/render?viewport=1280").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["viewportWidthPx"], 1280.0);
    assert_eq!(json["blocks"][0]["colors"]["background"], "#112233");
    assert_eq!(json["blocks"][1]["layout"]["breakpoint"], "desktop");
}

#[tokio::test]
async fn test_render_page_without_viewport() {
    let (app, _content) = create_test_app();

    let (status, json) = get_json(&app, "/api/pages/home/render").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json.get("viewportWidthPx").is_none());
    assert_eq!(json["blocks"][1]["layout"]["tessellated"], false);
}

#[tokio::test]
async fn test_broken_design_token_falls_back_per_field() {
    let content = TempDir::new().unwrap();
    write_json(
        &content.path().join("design-system.json"),
        &json!({
            "colors": {
                "primary": {"hex": "#112233", "alpha": 1},
                "secondary": {"alpha": 0.5}
            }
        }),
    );
    write_json(
        &content.path().join("pages/home.json"),
        &json!({
            "slug": "home",
            "title": "Home",
            "blocks": [
                {"_type": "buttonBlock", "backgroundSelection": "primary"},
                {"_type": "buttonBlock", "backgroundSelection": "secondary"}
            ]
        }),
    );
    let app = create_router(AppState::new(Config::default(), content.path().to_path_buf()));

    let (status, json) = get_json(&app, "/api/pages/home/render?viewport=1280").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["blocks"][0]["colors"]["background"], "#112233");
    assert_eq!(json["blocks"][1]["colors"]["background"], "#3b82f6");

    let (status, json) = post_json(
        &app,
        "/api/colors/resolve",
        json!({"selection": {"colorSelection": "secondary"}, "fallback": "#abcdef"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["color"], "#abcdef");
}

#[tokio::test]
async fn test_render_page_not_found() {
    let (app, _content) = create_test_app();

    let (status, json) = get_json(&app, "/api/pages/missing/render").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("missing"));
}

#[tokio::test]
async fn test_render_page_invalid_slug() {
    let (app, _content) = create_test_app();

    let (status, _json) = get_json(&app, "/api/pages/Bad_Slug/render").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
