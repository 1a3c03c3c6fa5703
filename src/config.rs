//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{APP_NAME, CONFIG_DIR_ENV};

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PathConfig {
    /// Content export directory (design system and `pages/`)
    pub content_dir: Option<PathBuf>,
}

/// Honeycomb grid defaults, used when a block does not set its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoneycombSettings {
    /// Configured items per row before the responsive clamp
    pub max_items_per_row: usize,
}

impl Default for HoneycombSettings {
    fn default() -> Self {
        Self {
            max_items_per_row: 4,
        }
    }
}

/// Tilted-square grid defaults, used when a block does not set its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TiltedSquareSettings {
    /// Items per row
    pub items_per_row: usize,
    /// Square side length in pixels
    pub size_px: f64,
    /// Gap between rows in pixels
    pub gap_px: f64,
}

impl Default for TiltedSquareSettings {
    fn default() -> Self {
        Self {
            items_per_row: 3,
            size_px: 90.0,
            gap_px: 4.0,
        }
    }
}

/// Web server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/SiteBlocks/config.toml`
/// - macOS: `~/Library/Application Support/SiteBlocks/config.toml`
/// - Windows: `%APPDATA%\SiteBlocks\config.toml`
///
/// # Validation
///
/// - `content_dir`, if set, must be an existing directory
/// - `max_items_per_row` and `items_per_row` must be at least 1
/// - `size_px` must be positive and `gap_px` non-negative
/// - `host` must not be empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// File system paths
    pub paths: PathConfig,
    /// Honeycomb grid defaults
    pub honeycomb: HoneycombSettings,
    /// Tilted-square grid defaults
    pub tilted_square: TiltedSquareSettings,
    /// Web server settings
    pub server: ServerConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    ///
    /// `SITEBLOCKS_CONFIG_DIR` overrides the platform location.
    ///
    /// - Linux: `~/.config/SiteBlocks/`
    /// - macOS: `~/Library/Application Support/SiteBlocks/`
    /// - Windows: `%APPDATA%\SiteBlocks\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        Self::from_toml(&content).context(format!(
            "Failed to load config file: {}",
            config_path.display()
        ))
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if let Some(content_dir) = &self.paths.content_dir {
            if !content_dir.is_dir() {
                anyhow::bail!(
                    "Content directory does not exist: {}",
                    content_dir.display()
                );
            }
        }

        if self.honeycomb.max_items_per_row == 0 {
            anyhow::bail!("honeycomb.max_items_per_row must be at least 1");
        }

        let tilted = &self.tilted_square;
        if tilted.items_per_row == 0 {
            anyhow::bail!("tilted_square.items_per_row must be at least 1");
        }
        if !tilted.size_px.is_finite() || tilted.size_px <= 0.0 {
            anyhow::bail!(
                "tilted_square.size_px must be a positive number, got {}",
                tilted.size_px
            );
        }
        if !tilted.gap_px.is_finite() || tilted.gap_px < 0.0 {
            anyhow::bail!(
                "tilted_square.gap_px must be zero or positive, got {}",
                tilted.gap_px
            );
        }

        if self.server.host.trim().is_empty() {
            anyhow::bail!("server.host cannot be empty");
        }

        Ok(())
    }

    /// Sets a value by its dotted key (e.g., `tilted_square.size_px`).
    ///
    /// The updated configuration is validated before it is accepted.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let mut updated = self.clone();
        match key {
            "paths.content_dir" => {
                updated.paths.content_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "honeycomb.max_items_per_row" => {
                updated.honeycomb.max_items_per_row = parse_value(key, value)?;
            }
            "tilted_square.items_per_row" => {
                updated.tilted_square.items_per_row = parse_value(key, value)?;
            }
            "tilted_square.size_px" => updated.tilted_square.size_px = parse_value(key, value)?,
            "tilted_square.gap_px" => updated.tilted_square.gap_px = parse_value(key, value)?,
            "server.host" => updated.server.host = value.to_string(),
            "server.port" => updated.server.port = parse_value(key, value)?,
            other => anyhow::bail!(
                "Unknown config key '{other}'. Valid keys: {}",
                Self::KEYS.join(", ")
            ),
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Keys accepted by [`Config::set_value`].
    pub const KEYS: [&'static str; 7] = [
        "paths.content_dir",
        "honeycomb.max_items_per_row",
        "tilted_square.items_per_row",
        "tilted_square.size_px",
        "tilted_square.gap_px",
        "server.host",
        "server.port",
    ];
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid value '{value}' for {key}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.paths.content_dir, None);
        assert_eq!(config.honeycomb.max_items_per_row, 4);
        assert_eq!(config.tilted_square.items_per_row, 3);
        assert!((config.tilted_square.size_px - 90.0).abs() < f64::EPSILON);
        assert_eq!(config.server.port, 3001);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_content_dir() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::new();

        config.paths.content_dir = Some(temp_dir.path().join("missing"));
        assert!(config.validate().is_err());

        config.paths.content_dir = Some(temp_dir.path().to_path_buf());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_grid_settings() {
        let mut config = Config::new();
        config.tilted_square.gap_px = 0.0;
        assert!(config.validate().is_ok());

        config.tilted_square.gap_px = -1.0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.tilted_square.size_px = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.honeycomb.max_items_per_row = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml("[honeycomb]\nmax_items_per_row = 6\n").unwrap();
        assert_eq!(config.honeycomb.max_items_per_row, 6);
        assert_eq!(config.tilted_square, TiltedSquareSettings::default());
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn test_invalid_toml_values_rejected() {
        assert!(Config::from_toml("[tilted_square]\nsize_px = -5.0\n").is_err());
        assert!(Config::from_toml("not toml [").is_err());
    }

    #[test]
    fn test_config_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.server.port = 8080;
        config.tilted_square.gap_px = 0.0;

        let content = toml::to_string_pretty(&config).unwrap();
        fs::write(&config_file, content).unwrap();

        let content = fs::read_to_string(&config_file).unwrap();
        let loaded = Config::from_toml(&content).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_set_value() {
        let mut config = Config::new();
        config.set_value("honeycomb.max_items_per_row", "5").unwrap();
        config.set_value("tilted_square.size_px", "72.5").unwrap();
        config.set_value("server.host", "0.0.0.0").unwrap();
        assert_eq!(config.honeycomb.max_items_per_row, 5);
        assert!((config.tilted_square.size_px - 72.5).abs() < f64::EPSILON);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_set_value_rejects_bad_input_without_changes() {
        let mut config = Config::new();
        assert!(config.set_value("server.port", "http").is_err());
        assert!(config.set_value("tilted_square.items_per_row", "0").is_err());
        assert!(config.set_value("ui.theme", "dark").is_err());
        assert_eq!(config, Config::new());
    }
}
