//! RGB color handling with hex parsing and CSS serialization.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Matches a strict 7-character `#RRGGBB` hex string.
fn hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("static regex is valid"))
}

/// Returns true if `hex` is a 7-character `#RRGGBB` string.
///
/// # Examples
///
/// ```
/// use siteblocks::models::rgb::is_valid_hex;
///
/// assert!(is_valid_hex("#3b82f6"));
/// assert!(!is_valid_hex("3b82f6"));
/// assert!(!is_valid_hex("#fff"));
/// ```
#[must_use]
pub fn is_valid_hex(hex: &str) -> bool {
    hex_pattern().is_match(hex)
}

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Supports parsing from hex strings (#RRGGBB) and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use siteblocks::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#3b82f6").unwrap();
    /// assert_eq!(color, RgbColor::new(59, 130, 246));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a lowercase CSS hex string ("#rrggbb").
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Formats the color as a CSS `rgba(...)` function with the given alpha.
    ///
    /// Alpha is clamped to `[0, 1]` and printed with at most four decimals.
    ///
    /// # Examples
    ///
    /// ```
    /// use siteblocks::models::RgbColor;
    ///
    /// let color = RgbColor::new(59, 130, 246);
    /// assert_eq!(color.to_css_rgba(0.25), "rgba(59, 130, 246, 0.25)");
    /// ```
    #[must_use]
    pub fn to_css_rgba(&self, alpha: f64) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            format_alpha(alpha)
        )
    }
}

/// Formats an alpha value for CSS, clamped and rounded to four decimals.
#[must_use]
pub fn format_alpha(alpha: f64) -> String {
    let alpha = if alpha.is_finite() {
        alpha.clamp(0.0, 1.0)
    } else {
        1.0
    };
    let rounded = (alpha * 10_000.0).round() / 10_000.0;
    format!("{rounded}")
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is black (#000000).
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}
