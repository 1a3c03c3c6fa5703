//! Shared CLI error type and exit codes.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::constants::CONTENT_DIR_ENV;
use crate::models::{Company, DesignSystem};
use crate::services::content::load_document;

/// Process exit codes used by all subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid input or arguments
    Validation = 1,
    /// Reading or writing files failed
    Io = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by a CLI command.
#[derive(Debug)]
pub struct CliError {
    /// Human-readable message printed to stderr
    pub message: String,
    /// Exit code for the process
    pub exit_code: ExitCode,
}

impl CliError {
    /// Invalid input or arguments (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::Validation,
        }
    }

    /// File or serialization failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::Io,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Loads a JSON/YAML input file, mapping a missing file to an I/O error and a
/// malformed one to a validation error.
pub fn load_input<T: DeserializeOwned>(path: &Path, what: &str) -> CliResult<T> {
    if !path.is_file() {
        return Err(CliError::io(format!(
            "{what} file not found: {}",
            path.display()
        )));
    }
    load_document(path).map_err(|e| CliError::validation(format!("Invalid {what} file: {e:#}")))
}

/// Loads the optional `--design-system` file.
pub fn load_design_system(path: Option<&Path>) -> CliResult<Option<DesignSystem>> {
    path.map(|path| load_input(path, "Design system")).transpose()
}

/// Grid items from `--items FILE`, or `count` numbered placeholders.
pub fn load_items(count: Option<usize>, items: Option<&Path>) -> CliResult<Vec<Company>> {
    match (count, items) {
        (_, Some(path)) => load_input(path, "Items"),
        (Some(count), None) => Ok(Company::placeholders(count)),
        (None, None) => Err(CliError::validation(
            "Either --count or --items must be specified",
        )),
    }
}

/// Loads the user configuration, falling back to defaults if it is unreadable.
#[must_use]
pub fn load_config() -> Config {
    Config::load().unwrap_or_else(|e| {
        tracing::warn!("Using default configuration: {e:#}");
        Config::default()
    })
}

/// Picks the content directory: explicit flag, then the
/// `SITEBLOCKS_CONTENT_DIR` environment variable, then the config file.
pub fn resolve_content_dir(explicit: Option<&Path>, config: &Config) -> CliResult<PathBuf> {
    let dir = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONTENT_DIR_ENV).map(PathBuf::from))
        .or_else(|| config.paths.content_dir.clone())
        .ok_or_else(|| {
            CliError::validation(format!(
                "No content directory: pass --content-dir, set {CONTENT_DIR_ENV}, or set paths.content_dir"
            ))
        })?;

    if !dir.is_dir() {
        return Err(CliError::io(format!(
            "Content directory not found: {}",
            dir.display()
        )));
    }
    Ok(dir)
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Rejects non-finite or non-positive viewport widths.
pub fn validate_viewport(viewport: Option<f64>) -> CliResult<Option<f64>> {
    match viewport {
        Some(width) if !width.is_finite() || width <= 0.0 => Err(CliError::validation(format!(
            "Viewport width must be a positive number, got {width}"
        ))),
        other => Ok(other),
    }
}
