//! `palette` command: show the resolved design-system palette.

use crate::cli::common::{load_design_system, print_json, CliResult};
use crate::models::{ColorToken, DesignSystem};
use crate::services::color::resolve_token;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Show every design-system token and what it resolves to
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Design system file (JSON or YAML); the default palette is used if omitted
    #[arg(long, value_name = "FILE")]
    pub design_system: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct PaletteEntry {
    token: ColorToken,
    #[serde(skip_serializing_if = "Option::is_none")]
    hex: Option<String>,
    resolved: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PaletteResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    default_palette: bool,
    colors: Vec<PaletteEntry>,
    warnings: Vec<String>,
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self) -> CliResult<()> {
        let loaded = load_design_system(self.design_system.as_deref())?;
        let default_palette = loaded.is_none();
        let design_system = loaded.unwrap_or_default();

        let response = build_palette(&design_system, default_palette);

        if self.json {
            return print_json(&response);
        }

        if let Some(title) = &response.title {
            println!("{title}");
        } else if default_palette {
            println!("Default palette");
        } else {
            println!("Design system");
        }
        println!();
        for entry in &response.colors {
            println!(
                "  {:<20} {}",
                entry.token.as_str(),
                entry.resolved.as_deref().unwrap_or("(not defined)")
            );
        }
        if !response.warnings.is_empty() {
            println!();
            println!("Warnings:");
            for warning in &response.warnings {
                println!("  - {warning}");
            }
        }
        Ok(())
    }
}

fn build_palette(design_system: &DesignSystem, default_palette: bool) -> PaletteResponse {
    let colors = ColorToken::PALETTE
        .into_iter()
        .map(|token| {
            let value = design_system.colors.get(token);
            PaletteEntry {
                token,
                hex: value.map(|v| v.hex.clone()),
                resolved: value.map(|_| resolve_token(token, Some(design_system), "")),
            }
        })
        .collect();

    PaletteResponse {
        title: design_system.title.clone(),
        default_palette,
        colors,
        warnings: design_system.lint(),
    }
}
