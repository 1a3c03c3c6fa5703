//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and version information.

/// The display name of the application (also the config directory name).
pub const APP_NAME: &str = "SiteBlocks";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "siteblocks";

/// Environment variable that overrides the content directory.
pub const CONTENT_DIR_ENV: &str = "SITEBLOCKS_CONTENT_DIR";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "SITEBLOCKS_CONFIG_DIR";
