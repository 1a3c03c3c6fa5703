//! Web API module for SiteBlocks.
//!
//! This module provides a REST API over the color resolver, the grid layout
//! engines and the page render pass, for front ends that want computed
//! layouts and resolved colors instead of reimplementing them.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/design-system` - Active design system (or the default palette)
//! - `POST /api/colors/resolve` - Resolve one color selection
//! - `POST /api/layouts/honeycomb` - Compute a honeycomb layout
//! - `POST /api/layouts/tilted-square` - Compute a tilted-square layout
//! - `GET /api/pages` - List pages in the content directory
//! - `GET /api/pages/{slug}/render` - Render a page (optional `?viewport=`)

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::block::TRANSPARENT;
use crate::models::{ColorSelection, Company, DesignColors, DesignSystem, PageSummary};
use crate::services::color;
use crate::services::content::{validate_slug, ContentStore, FileContentStore};
use crate::services::honeycomb::{layout_honeycomb, HoneycombLayout};
use crate::services::render::{render_page, RenderOptions, RenderedPage};
use crate::services::tilted_square::{layout_tilted_square, TiltedSquareLayout};

/// Largest item count accepted by the layout endpoints.
pub const MAX_GRID_ITEMS: usize = 1000;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
    /// Source of design system and page documents
    store: Arc<dyn ContentStore + Send + Sync>,
}

impl AppState {
    /// Creates a state serving documents from a content directory.
    pub fn new(config: Config, content_root: PathBuf) -> Self {
        Self::with_store(config, FileContentStore::new(content_root))
    }

    /// Creates a state over any content store.
    pub fn with_store(config: Config, store: impl ContentStore + Send + Sync + 'static) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn design_system(&self) -> Result<Option<DesignSystem>, (StatusCode, Json<ApiError>)> {
        self.store.design_system().map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::with_details(
                    "Failed to load design system",
                    format!("{e:#}"),
                )),
            )
        })
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Design system response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSystemResponse {
    /// Document title, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// True when no design system exists and the built-in palette is served.
    pub default_palette: bool,
    /// Token table.
    pub colors: DesignColors,
    /// Problems found in the document.
    pub warnings: Vec<String>,
}

/// Color resolution request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveRequest {
    /// The field's selection.
    pub selection: ColorSelection,
    /// CSS color used when the selection cannot be resolved.
    pub fallback: Option<String>,
}

/// Color resolution response.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    /// Resolved CSS color.
    pub color: String,
}

/// Honeycomb layout request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoneycombRequest {
    /// Items to place.
    pub items: Option<Vec<Company>>,
    /// Number of placeholder items, when `items` is absent.
    pub count: Option<usize>,
    /// Configured items per row (defaults to the server config).
    pub max_items_per_row: Option<usize>,
    /// Client viewport width; absent for the fallback layout.
    pub viewport_width: Option<f64>,
}

/// Tilted-square layout request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TiltedSquareRequest {
    /// Items to place.
    pub items: Option<Vec<Company>>,
    /// Number of placeholder items, when `items` is absent.
    pub count: Option<usize>,
    /// Items per row (defaults to the server config).
    pub items_per_row: Option<usize>,
    /// Square side length in pixels.
    pub size: Option<f64>,
    /// Gap between rows in pixels.
    pub gap: Option<f64>,
}

/// Page list response.
#[derive(Debug, Serialize)]
pub struct PageListResponse {
    /// Page summaries sorted by slug.
    pub pages: Vec<PageSummary>,
}

/// Query parameters for page rendering.
#[derive(Debug, Deserialize)]
pub struct RenderQuery {
    /// Client viewport width in pixels.
    pub viewport: Option<f64>,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Picks the grid items of a layout request.
fn grid_items(items: Option<Vec<Company>>, count: Option<usize>) -> Result<Vec<Company>, ApiError> {
    let items = match (items, count) {
        (Some(items), _) => items,
        (None, Some(count)) => {
            if count > MAX_GRID_ITEMS {
                return Err(ApiError::new(format!(
                    "count must be at most {MAX_GRID_ITEMS}"
                )));
            }
            Company::placeholders(count)
        }
        (None, None) => return Err(ApiError::new("Either items or count must be provided")),
    };

    if items.len() > MAX_GRID_ITEMS {
        return Err(ApiError::new(format!(
            "At most {MAX_GRID_ITEMS} items can be laid out, got {}",
            items.len()
        )));
    }
    Ok(items)
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/design-system - Active design system.
async fn get_design_system(State(state): State<AppState>) -> ApiResult<DesignSystemResponse> {
    let loaded = state.design_system()?;
    let default_palette = loaded.is_none();
    let design_system = loaded.unwrap_or_default();

    Ok(Json(DesignSystemResponse {
        warnings: design_system.lint(),
        title: design_system.title,
        default_palette,
        colors: design_system.colors,
    }))
}

/// POST /api/colors/resolve - Resolve one color selection.
async fn resolve_color(
    State(state): State<AppState>,
    Json(request): Json<ResolveRequest>,
) -> ApiResult<ResolveResponse> {
    let design_system = state.design_system()?;
    let fallback = request.fallback.as_deref().unwrap_or(TRANSPARENT);

    Ok(Json(ResolveResponse {
        color: color::resolve(&request.selection, design_system.as_ref(), fallback),
    }))
}

/// POST /api/layouts/honeycomb - Compute a honeycomb layout.
async fn honeycomb_layout(
    State(state): State<AppState>,
    Json(request): Json<HoneycombRequest>,
) -> ApiResult<HoneycombLayout<Company>> {
    let items = grid_items(request.items, request.count)
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(e)))?;
    let max_items = request
        .max_items_per_row
        .unwrap_or(state.config.honeycomb.max_items_per_row);

    Ok(Json(layout_honeycomb(&items, max_items, request.viewport_width)))
}

/// POST /api/layouts/tilted-square - Compute a tilted-square layout.
async fn tilted_square_layout(
    State(state): State<AppState>,
    Json(request): Json<TiltedSquareRequest>,
) -> ApiResult<TiltedSquareLayout<Company>> {
    let items = grid_items(request.items, request.count)
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(e)))?;
    let defaults = &state.config.tilted_square;

    Ok(Json(layout_tilted_square(
        &items,
        request.items_per_row.unwrap_or(defaults.items_per_row),
        request.size.unwrap_or(defaults.size_px),
        request.gap.unwrap_or(defaults.gap_px),
    )))
}

/// GET /api/pages - List pages.
async fn list_pages(State(state): State<AppState>) -> ApiResult<PageListResponse> {
    let pages = state.store.list_pages().map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::with_details("Failed to list pages", format!("{e:#}"))),
        )
    })?;
    Ok(Json(PageListResponse { pages }))
}

/// GET /api/pages/{slug}/render - Render a page.
async fn render_page_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<RenderQuery>,
) -> ApiResult<RenderedPage> {
    validate_slug(&slug).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::new(e.to_string())),
        )
    })?;

    let page = state
        .store
        .page(&slug)
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::with_details("Failed to load page", format!("{e:#}"))),
            )
        })?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiError::new(format!("Page not found: {slug}"))),
            )
        })?;

    let design_system = state.design_system()?;
    let options = RenderOptions::from_config(&state.config, query.viewport);
    let rendered = render_page(&page, design_system.as_ref(), &options);

    if rendered.warning_count() > 0 {
        warn!(
            "Page '{slug}' rendered with {} warnings",
            rendered.warning_count()
        );
    }

    Ok(Json(rendered))
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // The API is read-only and serves public site content.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Colors
        .route("/api/design-system", get(get_design_system))
        .route("/api/colors/resolve", post(resolve_color))
        // Layouts
        .route("/api/layouts/honeycomb", post(honeycomb_layout))
        .route("/api/layouts/tilted-square", post(tilted_square_layout))
        // Pages
        .route("/api/pages", get(list_pages))
        .route("/api/pages/{slug}/render", get(render_page_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Arguments
///
/// * `config` - Application configuration
/// * `content_root` - Directory holding the design system and `pages/`
/// * `addr` - Socket address to bind to
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(
    config: Config,
    content_root: PathBuf,
    addr: SocketAddr,
) -> anyhow::Result<()> {
    info!("Serving content from {}", content_root.display());
    let state = AppState::new(config, content_root);
    let app = create_router(state);

    info!("Starting SiteBlocks web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
