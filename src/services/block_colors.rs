//! Binding of a block's color fields to resolved CSS colors.
//!
//! Every color field `<name>` is stored on a block document as three keys:
//! `<name>Selection` (a design-system token or `custom`), `custom<Name>Color`
//! and `<name>OpacityPreset`. This module reads them leniently, resolves each
//! field exactly once through [`super::color::resolve`], and hands out the
//! results as a [`BlockPalette`]. Aliased fields copy an already resolved value.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use super::color;
use crate::models::{
    BlockKind, ColorField, ColorSelection, ColorToken, ColorValue, DesignSystem, FieldSource,
    OpacityPreset,
};

/// Resolved colors of one block, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BlockPalette {
    colors: BTreeMap<String, String>,
}

impl BlockPalette {
    /// Resolved value of a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.colors.get(field).map(String::as_str)
    }

    /// Number of resolved fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True when the block has no color fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterates over `(field, color)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Reads one field's selection from a block document.
///
/// Malformed values are dropped (and logged) rather than rejected, so the
/// field resolves to its fallback instead of breaking the block.
#[must_use]
pub fn extract_selection(block: &Value, field: &ColorField) -> ColorSelection {
    let selection_key = field.selection_key();
    let color_selection = match block.get(&selection_key) {
        None | Some(Value::Null) => None,
        Some(Value::String(name)) if name.is_empty() => None,
        Some(Value::String(name)) => match name.parse::<ColorToken>() {
            Ok(token) => Some(token),
            Err(_) => {
                warn!("Unknown color token '{name}' in '{selection_key}', using fallback");
                None
            }
        },
        Some(other) => {
            warn!("Expected a token name in '{selection_key}', found {other}");
            None
        }
    };

    let custom_key = field.custom_key();
    let custom_color = match block.get(&custom_key) {
        None | Some(Value::Null) => None,
        Some(value) => match serde_json::from_value::<ColorValue>(value.clone()) {
            Ok(color) => Some(color),
            Err(e) => {
                warn!("Ignoring malformed '{custom_key}': {e}");
                None
            }
        },
    };

    let opacity_key = field.opacity_key();
    let opacity_preset = match block.get(&opacity_key) {
        None | Some(Value::Null) => None,
        Some(value) => {
            let parsed = match value {
                Value::String(s) => s.parse::<OpacityPreset>().ok(),
                Value::Number(n) => n
                    .as_u64()
                    .and_then(|p| u8::try_from(p).ok())
                    .and_then(OpacityPreset::from_percent),
                _ => None,
            };
            if parsed.is_none() {
                warn!("Ignoring invalid '{opacity_key}': {value}");
            }
            parsed
        }
    };

    ColorSelection {
        color_selection,
        custom_color,
        opacity_preset,
    }
}

/// Resolves every color field of a block once.
///
/// Authored fields go through the resolver with their fallback; aliased fields
/// copy the value their target resolved to. Unknown block kinds yield an empty
/// palette.
#[must_use]
pub fn resolve_block_colors(
    kind: BlockKind,
    block: &Value,
    design_system: Option<&DesignSystem>,
) -> BlockPalette {
    let mut colors = BTreeMap::new();

    for field in kind.color_fields() {
        let value = match field.source {
            FieldSource::Authored => {
                let selection = extract_selection(block, field);
                color::resolve(&selection, design_system, field.fallback)
            }
            FieldSource::Alias(target) => colors
                .get(target)
                .cloned()
                .unwrap_or_else(|| field.fallback.to_string()),
        };
        colors.insert(field.name.to_string(), value);
    }

    debug!("Resolved {} color fields for {kind}", colors.len());
    BlockPalette { colors }
}
