//! Page render pass.
//!
//! Turns a [`PageDocument`] into what a front end needs to draw it: the
//! resolved color palette of every block and, for grid blocks, the computed
//! layout. Blocks are processed independently; a malformed block produces
//! warnings, never an error.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::block_colors::{resolve_block_colors, BlockPalette};
use super::honeycomb::{layout_honeycomb, HoneycombLayout};
use super::tilted_square::{layout_tilted_square, TiltedSquareLayout};
use crate::config::{Config, HoneycombSettings, TiltedSquareSettings};
use crate::models::{BlockKind, Company, DesignSystem, PageDocument};

/// Inputs of a render pass besides the page itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderOptions {
    /// Client viewport width; `None` renders the server-side fallback
    pub viewport_width: Option<f64>,
    /// Honeycomb defaults for blocks that do not set their own
    pub honeycomb: HoneycombSettings,
    /// Tilted-square defaults for blocks that do not set their own
    pub tilted_square: TiltedSquareSettings,
}

impl RenderOptions {
    /// Options using the configured grid defaults.
    #[must_use]
    pub fn from_config(config: &Config, viewport_width: Option<f64>) -> Self {
        Self {
            viewport_width,
            honeycomb: config.honeycomb.clone(),
            tilted_square: config.tilted_square.clone(),
        }
    }
}

/// Computed layout of a grid block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BlockLayout {
    /// Honeycomb grid layout
    Honeycomb(HoneycombLayout<Company>),
    /// Tilted-square grid layout
    TiltedSquare(TiltedSquareLayout<Company>),
}

/// One rendered block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedBlock {
    /// Position in the page
    pub index: usize,
    /// Block kind
    pub kind: BlockKind,
    /// Raw `_type` as authored
    pub type_name: String,
    /// CMS array key, if present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Resolved colors, one per color field
    pub colors: BlockPalette,
    /// Grid layout for grid blocks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<BlockLayout>,
    /// Problems found while reading the block
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// A fully rendered page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPage {
    /// Page slug
    pub slug: String,
    /// Page title
    pub title: String,
    /// Whether the built-in palette stood in for a missing design system
    pub default_palette: bool,
    /// Viewport width used for the grid layouts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport_width_px: Option<f64>,
    /// Rendered blocks in page order
    pub blocks: Vec<RenderedBlock>,
}

impl RenderedPage {
    /// Total number of warnings across all blocks.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.blocks.iter().map(|block| block.warnings.len()).sum()
    }
}

/// Renders every block of a page.
///
/// The design system is read once for the whole pass; when it is `None` the
/// built-in palette is used.
#[must_use]
pub fn render_page(
    page: &PageDocument,
    design_system: Option<&DesignSystem>,
    options: &RenderOptions,
) -> RenderedPage {
    let blocks: Vec<RenderedBlock> = page
        .blocks
        .iter()
        .enumerate()
        .map(|(index, block)| render_block(index, block, design_system, options))
        .collect();

    debug!("Rendered page '{}' with {} blocks", page.slug, blocks.len());

    RenderedPage {
        slug: page.slug.clone(),
        title: page.title.clone(),
        default_palette: design_system.is_none(),
        viewport_width_px: options.viewport_width,
        blocks,
    }
}

/// Renders a single block document.
#[must_use]
pub fn render_block(
    index: usize,
    block: &Value,
    design_system: Option<&DesignSystem>,
    options: &RenderOptions,
) -> RenderedBlock {
    let mut warnings = Vec::new();

    let type_name = block
        .get("_type")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let kind = BlockKind::from_type_name(&type_name);
    if kind == BlockKind::Unknown {
        let message = if type_name.is_empty() {
            "Block has no _type".to_string()
        } else {
            format!("Unknown block type '{type_name}'")
        };
        warn!("Block {index}: {message}");
        warnings.push(message);
    }

    let colors = resolve_block_colors(kind, block, design_system);

    let layout = match kind {
        BlockKind::HoneycombGrid => {
            let companies = read_companies(block, &mut warnings);
            let max_items = read_count(block, "maxItemsPerRow", &mut warnings)
                .unwrap_or(options.honeycomb.max_items_per_row);
            Some(BlockLayout::Honeycomb(layout_honeycomb(
                &companies,
                max_items,
                options.viewport_width,
            )))
        }
        BlockKind::TiltedSquareGrid => {
            let defaults = &options.tilted_square;
            let companies = read_companies(block, &mut warnings);
            let per_row = read_count(block, "itemsPerRow", &mut warnings)
                .unwrap_or(defaults.items_per_row);
            let size = read_number(block, "size", &mut warnings).unwrap_or(defaults.size_px);
            let gap = read_number(block, "gap", &mut warnings).unwrap_or(defaults.gap_px);
            Some(BlockLayout::TiltedSquare(layout_tilted_square(
                &companies, per_row, size, gap,
            )))
        }
        _ => None,
    };

    RenderedBlock {
        index,
        kind,
        type_name,
        key: block.get("_key").and_then(Value::as_str).map(str::to_string),
        colors,
        layout,
        warnings,
    }
}

/// Reads a block's `companies` array, skipping entries that are not companies.
///
/// Entries without a `_key` get a positional one so they keep a stable identity.
fn read_companies(block: &Value, warnings: &mut Vec<String>) -> Vec<Company> {
    let entries = match block.get("companies") {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            warnings.push("'companies' is not a list".to_string());
            return Vec::new();
        }
    };

    let mut companies = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let mut entry = entry.clone();
        if let Value::Object(map) = &mut entry {
            if !map.contains_key("_key") && !map.contains_key("key") {
                map.insert("_key".to_string(), Value::String(format!("item-{}", i + 1)));
            }
        }
        match serde_json::from_value::<Company>(entry) {
            Ok(company) => companies.push(company),
            Err(e) => warnings.push(format!("Skipped companies[{i}]: {e}")),
        }
    }
    companies
}

/// Reads an optional whole-number field. Fractions are truncated.
fn read_count(block: &Value, key: &str, warnings: &mut Vec<String>) -> Option<usize> {
    let value = block.get(key)?;
    if value.is_null() {
        return None;
    }
    let count = value
        .as_u64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|n| n.is_finite() && *n >= 0.0)
                .map(|n| n.trunc() as u64)
        })
        .and_then(|n| usize::try_from(n).ok());
    if count.is_none() {
        warnings.push(format!("Ignoring invalid '{key}': {value}"));
    }
    count
}

/// Reads an optional numeric field.
fn read_number(block: &Value, key: &str, warnings: &mut Vec<String>) -> Option<f64> {
    let value = block.get(key)?;
    if value.is_null() {
        return None;
    }
    let number = value.as_f64();
    if number.is_none() {
        warnings.push(format!("Ignoring invalid '{key}': {value}"));
    }
    number
}
