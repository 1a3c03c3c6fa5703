//! Color resolution from a field's selection to a CSS color string.
//!
//! Resolution order:
//! 1. No selection: the caller's fallback
//! 2. `custom`: the stored custom color (opacity preset ignored)
//! 3. Named token: the design-system value, alpha multiplied by the opacity preset
//!
//! Every gap (missing custom color, undefined token, unparsable channels)
//! degrades to the fallback. Nothing here can fail.

use tracing::debug;

use crate::models::{ColorSelection, ColorToken, ColorValue, DesignSystem, OpacityPreset};

/// Resolves a color selection into a CSS color string.
///
/// `design_system` is the active design-system document; `None` means the
/// content store has none and the built-in default palette applies.
///
/// Output is either the stored `#RRGGBB` hex string, verbatim, or
/// `rgba(r, g, b, a)` when the final alpha is below 1.
///
/// # Examples
///
/// ```
/// use siteblocks::models::{ColorSelection, ColorToken, DesignSystem};
/// use siteblocks::services::color::resolve;
///
/// let ds = DesignSystem::default();
/// assert_eq!(resolve(&ColorSelection::token(ColorToken::Primary), Some(&ds), "#000"), "#3b82f6");
/// assert_eq!(resolve(&ColorSelection::default(), Some(&ds), "#abc"), "#abc");
/// ```
pub fn resolve(
    selection: &ColorSelection,
    design_system: Option<&DesignSystem>,
    fallback: &str,
) -> String {
    let Some(token) = selection.color_selection else {
        return fallback.to_string();
    };

    if token.is_custom() {
        return match selection.custom_color.as_ref() {
            Some(custom) => css_color(custom, custom.clamped_alpha()).unwrap_or_else(|| {
                debug!("Custom color '{}' has no usable channels, using fallback", custom.hex);
                fallback.to_string()
            }),
            None => {
                debug!("Custom color selected without a custom value, using fallback");
                fallback.to_string()
            }
        };
    }

    let default_palette;
    let design_system = match design_system {
        Some(ds) => ds,
        None => {
            default_palette = DesignSystem::default();
            &default_palette
        }
    };

    let Some(value) = design_system.colors.get(token) else {
        debug!("Token '{token}' is not defined in the design system, using fallback");
        return fallback.to_string();
    };

    let preset = selection.opacity_preset.unwrap_or_default();
    css_color(value, token_alpha(value, preset)).unwrap_or_else(|| {
        debug!("Token '{token}' has no usable channels, using fallback");
        fallback.to_string()
    })
}

/// Final alpha of a token under an opacity preset (multiplicative).
#[must_use]
pub fn token_alpha(value: &ColorValue, preset: OpacityPreset) -> f64 {
    value.clamped_alpha() * preset.factor()
}

/// Resolves a token directly, without a field selection.
///
/// Convenience for components that always use a fixed role.
pub fn resolve_token(token: ColorToken, design_system: Option<&DesignSystem>, fallback: &str) -> String {
    resolve(&ColorSelection::token(token), design_system, fallback)
}

/// Emits the hex string for opaque colors and `rgba(...)` otherwise.
///
/// Returns `None` when a translucent color has neither channels nor a
/// parsable hex string.
fn css_color(value: &ColorValue, alpha: f64) -> Option<String> {
    if alpha >= 1.0 {
        return Some(value.hex.clone());
    }
    value.channels().map(|rgb| rgb.to_css_rgba(alpha))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RgbColor, RgbaChannels};

    fn design_system_with(token: ColorToken, value: ColorValue) -> DesignSystem {
        let mut ds = DesignSystem::empty();
        ds.colors.set(token, value);
        ds
    }

    fn parse_rgba_alpha(css: &str) -> f64 {
        let inner = css
            .strip_prefix("rgba(")
            .and_then(|s| s.strip_suffix(')'))
            .expect("rgba() output");
        inner.rsplit(',').next().unwrap().trim().parse().unwrap()
    }

    #[test]
    fn test_absent_selection_returns_fallback() {
        let ds = DesignSystem::default();
        assert_eq!(resolve(&ColorSelection::default(), Some(&ds), "#abc"), "#abc");
        assert_eq!(resolve(&ColorSelection::default(), None, "#abc"), "#abc");
    }

    #[test]
    fn test_named_token_opaque_returns_hex_verbatim() {
        let ds = design_system_with(
            ColorToken::Primary,
            ColorValue::from_hex("#3b82f6").unwrap(),
        );
        let selection = ColorSelection::token(ColorToken::Primary);
        assert_eq!(resolve(&selection, Some(&ds), "#000"), "#3b82f6");
    }

    #[test]
    fn test_hex_is_not_normalized() {
        let ds = design_system_with(
            ColorToken::Secondary,
            ColorValue {
                hex: "#10B981".to_string(),
                alpha: 1.0,
                rgb: None,
            },
        );
        let selection = ColorSelection::token(ColorToken::Secondary);
        assert_eq!(resolve(&selection, Some(&ds), "#000"), "#10B981");
    }

    #[test]
    fn test_missing_token_returns_fallback() {
        let ds = DesignSystem::empty();
        let selection = ColorSelection::token(ColorToken::Tertiary);
        assert_eq!(resolve(&selection, Some(&ds), "#123456"), "#123456");
    }

    #[test]
    fn test_no_design_system_uses_default_palette() {
        let selection = ColorSelection::token(ColorToken::ButtonTextPrimary);
        assert_eq!(resolve(&selection, None, "#000"), "#ffffff");
    }

    #[test]
    fn test_opacity_preset_multiplies_token_alpha() {
        let ds = design_system_with(
            ColorToken::Primary,
            ColorValue::from_hex("#3b82f6").unwrap().with_alpha(0.5),
        );
        let selection = ColorSelection::token(ColorToken::Primary).with_opacity(OpacityPreset::Half);
        let css = resolve(&selection, Some(&ds), "#000");
        assert_eq!(css, "rgba(59, 130, 246, 0.25)");
    }

    #[test]
    fn test_opacity_preset_on_opaque_token() {
        let ds = DesignSystem::default();
        for (preset, expected) in [
            (OpacityPreset::ThreeQuarters, 0.75),
            (OpacityPreset::Half, 0.5),
            (OpacityPreset::Quarter, 0.25),
        ] {
            let selection = ColorSelection::token(ColorToken::Primary).with_opacity(preset);
            let css = resolve(&selection, Some(&ds), "#000");
            assert!((parse_rgba_alpha(&css) - expected).abs() < 1e-9, "{css}");
        }

        let full = ColorSelection::token(ColorToken::Primary).with_opacity(OpacityPreset::Full);
        assert_eq!(resolve(&full, Some(&ds), "#000"), "#3b82f6");
    }

    #[test]
    fn test_preset_alpha_property_across_token_alphas() {
        for alpha in [1.0, 0.9, 0.6, 0.35, 0.1] {
            for preset in [OpacityPreset::ThreeQuarters, OpacityPreset::Half, OpacityPreset::Quarter] {
                let ds = design_system_with(
                    ColorToken::Tertiary,
                    ColorValue::from_hex("#f59e0b").unwrap().with_alpha(alpha),
                );
                let selection = ColorSelection::token(ColorToken::Tertiary).with_opacity(preset);
                let css = resolve(&selection, Some(&ds), "#000");
                let expected = alpha * f64::from(preset.percent()) / 100.0;
                assert!((parse_rgba_alpha(&css) - expected).abs() < 1e-4, "{css} vs {expected}");
            }
        }
    }

    #[test]
    fn test_rgba_uses_stored_channels_not_hex() {
        // Channels deliberately disagree with hex: output must follow the channels.
        let ds = design_system_with(
            ColorToken::Primary,
            ColorValue {
                hex: "#000000".to_string(),
                alpha: 0.5,
                rgb: Some(RgbaChannels { r: 10, g: 20, b: 30, a: 0.5 }),
            },
        );
        let css = resolve(&ColorSelection::token(ColorToken::Primary), Some(&ds), "#fff");
        assert_eq!(css, "rgba(10, 20, 30, 0.5)");
    }

    #[test]
    fn test_custom_opaque_returns_hex() {
        let custom = ColorValue::from_hex("#ff00aa").unwrap();
        let selection = ColorSelection::custom(custom);
        assert_eq!(resolve(&selection, None, "#000"), "#ff00aa");
    }

    #[test]
    fn test_custom_translucent_returns_rgba() {
        let custom = ColorValue {
            hex: "#ff0000".to_string(),
            alpha: 0.4,
            rgb: Some(RgbaChannels { r: 255, g: 0, b: 0, a: 0.4 }),
        };
        let selection = ColorSelection::custom(custom);
        assert_eq!(resolve(&selection, None, "#000"), "rgba(255, 0, 0, 0.4)");
    }

    #[test]
    fn test_custom_ignores_opacity_preset() {
        let custom = ColorValue::from_hex("#ff00aa").unwrap();
        let selection = ColorSelection::custom(custom).with_opacity(OpacityPreset::Quarter);
        assert_eq!(resolve(&selection, None, "#000"), "#ff00aa");
    }

    #[test]
    fn test_custom_without_value_returns_fallback() {
        let selection = ColorSelection::token(ColorToken::Custom);
        assert_eq!(resolve(&selection, Some(&DesignSystem::default()), "#abc"), "#abc");
    }

    #[test]
    fn test_translucent_without_channels_falls_back() {
        let custom = ColorValue {
            hex: "not-a-color".to_string(),
            alpha: 0.5,
            rgb: None,
        };
        assert_eq!(resolve(&ColorSelection::custom(custom), None, "#abc"), "#abc");
    }

    #[test]
    fn test_translucent_derives_channels_from_hex_when_missing() {
        let custom = ColorValue {
            hex: "#3b82f6".to_string(),
            alpha: 0.5,
            rgb: None,
        };
        assert_eq!(
            resolve(&ColorSelection::custom(custom), None, "#abc"),
            "rgba(59, 130, 246, 0.5)"
        );
    }

    #[test]
    fn test_resolve_token_helper() {
        assert_eq!(resolve_token(ColorToken::ButtonTextSecondary, None, "#000"), "#1f2937");
        assert_eq!(
            RgbColor::from_hex(&resolve_token(ColorToken::Secondary, None, "#000")).unwrap(),
            RgbColor::new(0x10, 0xb9, 0x81)
        );
    }
}
