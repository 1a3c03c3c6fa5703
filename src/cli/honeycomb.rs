//! `honeycomb` command: compute a honeycomb grid layout.

use crate::cli::common::{load_config, load_items, print_json, validate_viewport, CliResult};
use crate::models::Company;
use crate::services::honeycomb::{layout_honeycomb, HoneycombLayout};
use clap::Args;
use std::path::PathBuf;

/// Lay out items as a honeycomb
#[derive(Debug, Clone, Args)]
pub struct HoneycombArgs {
    /// Number of placeholder items
    #[arg(long, value_name = "N", conflicts_with = "items", required_unless_present = "items")]
    pub count: Option<usize>,

    /// JSON or YAML file with a list of companies
    #[arg(long, value_name = "FILE")]
    pub items: Option<PathBuf>,

    /// Configured items per row (defaults to the config file value)
    #[arg(long, value_name = "M")]
    pub max_per_row: Option<usize>,

    /// Viewport width in pixels; omit for the server-side fallback layout
    #[arg(long, value_name = "PX")]
    pub viewport: Option<f64>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl HoneycombArgs {
    /// Execute the honeycomb command
    pub fn execute(&self) -> CliResult<()> {
        let viewport = validate_viewport(self.viewport)?;
        let items = load_items(self.count, self.items.as_deref())?;
        let max_per_row = self
            .max_per_row
            .unwrap_or_else(|| load_config().honeycomb.max_items_per_row);

        let layout = layout_honeycomb(&items, max_per_row, viewport);

        if self.json {
            print_json(&layout)
        } else {
            print_layout(&layout);
            Ok(())
        }
    }
}

fn print_layout(layout: &HoneycombLayout<Company>) {
    match (layout.breakpoint, layout.viewport_width_px) {
        (Some(breakpoint), Some(width)) => println!(
            "Honeycomb: {} items, {} per row ({breakpoint:?} at {width}px)",
            layout.item_count(),
            layout.max_items_per_row
        ),
        _ => println!(
            "Honeycomb: {} items, {} per row (no viewport, untessellated)",
            layout.item_count(),
            layout.max_items_per_row
        ),
    }
    for (index, row) in layout.rows.iter().enumerate() {
        let keys: Vec<&str> = row.items.iter().map(|c| c.key.as_str()).collect();
        println!(
            "  Row {index} [offset {:.1}px, top {:.1}px]: {}",
            row.offset_px,
            row.top_px,
            keys.join(" ")
        );
    }
    println!(
        "Content: {:.1} x {:.1}px",
        layout.content_width_px, layout.content_height_px
    );
    if let Some(margin) = layout.container_margin_px {
        println!("Container margin: {margin:.1}px");
    }
}
