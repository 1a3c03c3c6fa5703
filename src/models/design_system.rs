//! Design-system color tokens and the palette document that defines them.
//!
//! A design system maps every named color role (`primary`, `buttonTextPrimary`,
//! ...) to a [`ColorValue`] as produced by the CMS color input. Content authors
//! pick a role instead of a raw color so the whole site stays consistent.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use super::RgbColor;

/// A named design-system color role, or the `custom` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorToken {
    /// Main brand color
    Primary,
    /// Secondary brand color
    Secondary,
    /// Tertiary accent color
    Tertiary,
    /// Primary button background
    ButtonPrimary,
    /// Secondary button background
    ButtonSecondary,
    /// Text on primary buttons
    ButtonTextPrimary,
    /// Text on secondary buttons
    ButtonTextSecondary,
    /// Author-picked color stored next to the selection
    Custom,
}

impl ColorToken {
    /// All tokens that a design system defines (everything except `custom`).
    pub const PALETTE: [Self; 7] = [
        Self::Primary,
        Self::Secondary,
        Self::Tertiary,
        Self::ButtonPrimary,
        Self::ButtonSecondary,
        Self::ButtonTextPrimary,
        Self::ButtonTextSecondary,
    ];

    /// Returns the camelCase name used in content documents.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::ButtonPrimary => "buttonPrimary",
            Self::ButtonSecondary => "buttonSecondary",
            Self::ButtonTextPrimary => "buttonTextPrimary",
            Self::ButtonTextSecondary => "buttonTextSecondary",
            Self::Custom => "custom",
        }
    }

    /// Returns true for the `custom` sentinel.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom)
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorToken {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::PALETTE
            .iter()
            .chain(std::iter::once(&Self::Custom))
            .find(|token| token.as_str() == s)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("Unknown color token '{s}'"))
    }
}

/// Channel values as stored by the CMS color input.
///
/// `a` mirrors the color's alpha; the resolver reads alpha from
/// [`ColorValue::alpha`] and only uses `r`, `g`, `b` from here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbaChannels {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// Alpha (0.0-1.0)
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl RgbaChannels {
    /// Drops the alpha channel.
    #[must_use]
    pub const fn to_rgb(&self) -> RgbColor {
        RgbColor::new(self.r, self.g, self.b)
    }
}

impl From<RgbColor> for RgbaChannels {
    fn from(color: RgbColor) -> Self {
        Self {
            r: color.r,
            g: color.g,
            b: color.b,
            a: 1.0,
        }
    }
}

/// A concrete color value: hex string, alpha and channel breakdown.
///
/// `hsl`/`hsv` fields written by the authoring UI are ignored on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorValue {
    /// 7-character `#RRGGBB` string
    pub hex: String,
    /// Opacity in `[0, 1]`; documents without alpha are opaque
    #[serde(default = "opaque")]
    pub alpha: f64,
    /// Channel breakdown; derived from `hex` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgb: Option<RgbaChannels>,
}

impl ColorValue {
    /// Builds an opaque color value from a hex string, filling in channels.
    ///
    /// # Errors
    ///
    /// Returns an error if `hex` is not a valid `#RRGGBB` string.
    pub fn from_hex(hex: &str) -> anyhow::Result<Self> {
        let rgb = RgbColor::from_hex(hex)?;
        Ok(Self {
            hex: rgb.to_hex(),
            alpha: 1.0,
            rgb: Some(rgb.into()),
        })
    }

    /// Returns a copy with the given alpha.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        if let Some(rgb) = self.rgb.as_mut() {
            rgb.a = alpha;
        }
        self
    }

    /// Alpha clamped to `[0, 1]`; non-finite values count as opaque.
    #[must_use]
    pub fn clamped_alpha(&self) -> f64 {
        if self.alpha.is_finite() {
            self.alpha.clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Channels to use for `rgba(...)` output.
    ///
    /// Prefers the stored channels so no rounding drift is introduced; parses
    /// `hex` only when the document carries no channel breakdown.
    #[must_use]
    pub fn channels(&self) -> Option<RgbColor> {
        self.rgb
            .map(|rgb| rgb.to_rgb())
            .or_else(|| RgbColor::from_hex(&self.hex).ok())
    }
}

/// Per-token color table of a design system.
///
/// Entries are read leniently: a malformed token value is logged and left
/// undefined, so fields using it fall back while the other tokens still apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignColors {
    /// Main brand color
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_color")]
    pub primary: Option<ColorValue>,
    /// Secondary brand color
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_color")]
    pub secondary: Option<ColorValue>,
    /// Tertiary accent color
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_color")]
    pub tertiary: Option<ColorValue>,
    /// Primary button background
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_color")]
    pub button_primary: Option<ColorValue>,
    /// Secondary button background
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_color")]
    pub button_secondary: Option<ColorValue>,
    /// Text on primary buttons
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_color")]
    pub button_text_primary: Option<ColorValue>,
    /// Text on secondary buttons
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_color")]
    pub button_text_secondary: Option<ColorValue>,
}

/// Reads one token entry, mapping a malformed value to `None`.
fn lenient_color<'de, D>(deserializer: D) -> Result<Option<ColorValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value::<ColorValue>(value.clone()) {
        Ok(color) => Ok(Some(color)),
        Err(e) => {
            warn!("Ignoring malformed design-system color {value}: {e}");
            Ok(None)
        }
    }
}

impl DesignColors {
    /// Looks up the value for a token. `custom` never has an entry.
    #[must_use]
    pub fn get(&self, token: ColorToken) -> Option<&ColorValue> {
        match token {
            ColorToken::Primary => self.primary.as_ref(),
            ColorToken::Secondary => self.secondary.as_ref(),
            ColorToken::Tertiary => self.tertiary.as_ref(),
            ColorToken::ButtonPrimary => self.button_primary.as_ref(),
            ColorToken::ButtonSecondary => self.button_secondary.as_ref(),
            ColorToken::ButtonTextPrimary => self.button_text_primary.as_ref(),
            ColorToken::ButtonTextSecondary => self.button_text_secondary.as_ref(),
            ColorToken::Custom => None,
        }
    }

    /// Sets the value for a token. Setting `custom` is ignored.
    pub fn set(&mut self, token: ColorToken, value: ColorValue) {
        let slot = match token {
            ColorToken::Primary => &mut self.primary,
            ColorToken::Secondary => &mut self.secondary,
            ColorToken::Tertiary => &mut self.tertiary,
            ColorToken::ButtonPrimary => &mut self.button_primary,
            ColorToken::ButtonSecondary => &mut self.button_secondary,
            ColorToken::ButtonTextPrimary => &mut self.button_text_primary,
            ColorToken::ButtonTextSecondary => &mut self.button_text_secondary,
            ColorToken::Custom => return,
        };
        *slot = Some(value);
    }
}

/// The site-wide design-system document.
///
/// # Defaults
///
/// When the content store holds no design system, [`DesignSystem::default`]
/// provides the built-in palette:
///
/// | Token | Hex |
/// |-------|-----|
/// | primary | `#3b82f6` |
/// | secondary | `#10b981` |
/// | tertiary | `#f59e0b` |
/// | buttonPrimary | `#3b82f6` |
/// | buttonSecondary | `#e5e7eb` |
/// | buttonTextPrimary | `#ffffff` |
/// | buttonTextSecondary | `#1f2937` |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSystem {
    /// Optional document title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Token table
    #[serde(default)]
    pub colors: DesignColors,
}

impl DesignSystem {
    /// Creates a design system with no colors defined.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            title: None,
            colors: DesignColors::default(),
        }
    }

    /// Returns the tokens that have no value in this design system.
    #[must_use]
    pub fn missing_tokens(&self) -> Vec<ColorToken> {
        ColorToken::PALETTE
            .into_iter()
            .filter(|token| self.colors.get(*token).is_none())
            .collect()
    }

    /// Checks every defined color for a valid hex string and alpha range.
    ///
    /// Returns one warning per problem; an empty list means the document is clean.
    #[must_use]
    pub fn lint(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for token in ColorToken::PALETTE {
            let Some(value) = self.colors.get(token) else {
                warnings.push(format!("Token '{token}' is not defined"));
                continue;
            };
            if !super::rgb::is_valid_hex(&value.hex) {
                warnings.push(format!(
                    "Token '{token}' has invalid hex '{}' (expected #RRGGBB)",
                    value.hex
                ));
            }
            if !(0.0..=1.0).contains(&value.alpha) {
                warnings.push(format!(
                    "Token '{token}' has alpha {} outside [0, 1]",
                    value.alpha
                ));
            }
        }
        warnings
    }
}

impl Default for DesignSystem {
    fn default() -> Self {
        let defaults = [
            (ColorToken::Primary, RgbColor::new(0x3b, 0x82, 0xf6)),
            (ColorToken::Secondary, RgbColor::new(0x10, 0xb9, 0x81)),
            (ColorToken::Tertiary, RgbColor::new(0xf5, 0x9e, 0x0b)),
            (ColorToken::ButtonPrimary, RgbColor::new(0x3b, 0x82, 0xf6)),
            (ColorToken::ButtonSecondary, RgbColor::new(0xe5, 0xe7, 0xeb)),
            (ColorToken::ButtonTextPrimary, RgbColor::new(0xff, 0xff, 0xff)),
            (ColorToken::ButtonTextSecondary, RgbColor::new(0x1f, 0x29, 0x37)),
        ];

        let mut colors = DesignColors::default();
        for (token, rgb) in defaults {
            colors.set(
                token,
                ColorValue {
                    hex: rgb.to_hex(),
                    alpha: 1.0,
                    rgb: Some(rgb.into()),
                },
            );
        }

        Self {
            title: Some("Default design system".to_string()),
            colors,
        }
    }
}
