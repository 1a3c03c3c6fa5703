//! `resolve` command: resolve one color selection to a CSS color.

use crate::cli::common::{load_design_system, print_json, CliError, CliResult};
use crate::models::block::TRANSPARENT;
use crate::models::ColorSelection;
use crate::services::color;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Resolve a color selection against a design system
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Selection as JSON, e.g. '{"colorSelection":"primary","opacityPreset":"50"}'
    #[arg(long, value_name = "JSON")]
    pub selection: String,

    /// Design system file (JSON or YAML); the default palette is used if omitted
    #[arg(long, value_name = "FILE")]
    pub design_system: Option<PathBuf>,

    /// CSS color returned when the selection cannot be resolved
    #[arg(long, value_name = "COLOR", default_value = TRANSPARENT)]
    pub fallback: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolveResponse {
    selection: ColorSelection,
    color: String,
    default_palette: bool,
}

impl ResolveArgs {
    /// Execute the resolve command
    pub fn execute(&self) -> CliResult<()> {
        let selection: ColorSelection = serde_json::from_str(&self.selection)
            .map_err(|e| CliError::validation(format!("Invalid selection JSON: {e}")))?;
        let design_system = load_design_system(self.design_system.as_deref())?;

        let color = color::resolve(&selection, design_system.as_ref(), &self.fallback);

        if self.json {
            print_json(&ResolveResponse {
                selection,
                color,
                default_palette: design_system.is_none(),
            })
        } else {
            println!("{color}");
            Ok(())
        }
    }
}
