//! Per-field color selection as authored on a content block.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{ColorToken, ColorValue};

/// Discrete opacity applied on top of a design-system token's own alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OpacityPreset {
    /// Fully opaque
    #[default]
    #[serde(rename = "100")]
    Full,
    /// 75%
    #[serde(rename = "75")]
    ThreeQuarters,
    /// 50%
    #[serde(rename = "50")]
    Half,
    /// 25%
    #[serde(rename = "25")]
    Quarter,
}

impl OpacityPreset {
    /// Returns the preset as a whole percentage.
    #[must_use]
    pub const fn percent(&self) -> u8 {
        match self {
            Self::Full => 100,
            Self::ThreeQuarters => 75,
            Self::Half => 50,
            Self::Quarter => 25,
        }
    }

    /// Returns the preset as a multiplier in `[0, 1]`.
    #[must_use]
    pub fn factor(&self) -> f64 {
        f64::from(self.percent()) / 100.0
    }

    /// Maps a percentage to a preset; only 100, 75, 50 and 25 are valid.
    #[must_use]
    pub const fn from_percent(percent: u8) -> Option<Self> {
        match percent {
            100 => Some(Self::Full),
            75 => Some(Self::ThreeQuarters),
            50 => Some(Self::Half),
            25 => Some(Self::Quarter),
            _ => None,
        }
    }
}

impl fmt::Display for OpacityPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.percent())
    }
}

impl FromStr for OpacityPreset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('%');
        trimmed
            .parse::<u8>()
            .ok()
            .and_then(Self::from_percent)
            .ok_or_else(|| anyhow::anyhow!("Invalid opacity preset '{s}' (expected 100, 75, 50 or 25)"))
    }
}

/// Author-picked color stored next to a `custom` selection.
pub type CustomColor = ColorValue;

/// The binding for a single configurable color field.
///
/// Constructed fresh per render from a block's field values and consumed once
/// by [`crate::services::color::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSelection {
    /// Selected design-system role, or `custom`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_selection: Option<ColorToken>,
    /// Color used when the selection is `custom`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_color: Option<CustomColor>,
    /// Opacity applied to named tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity_preset: Option<OpacityPreset>,
}

impl ColorSelection {
    /// Selects a design-system token.
    #[must_use]
    pub fn token(token: ColorToken) -> Self {
        Self {
            color_selection: Some(token),
            ..Self::default()
        }
    }

    /// Selects a custom color.
    #[must_use]
    pub fn custom(color: CustomColor) -> Self {
        Self {
            color_selection: Some(ColorToken::Custom),
            custom_color: Some(color),
            opacity_preset: None,
        }
    }

    /// Sets the opacity preset.
    #[must_use]
    pub fn with_opacity(mut self, preset: OpacityPreset) -> Self {
        self.opacity_preset = Some(preset);
        self
    }
}
