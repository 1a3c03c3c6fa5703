//! `tilted` command: compute a tilted-square grid layout.

use crate::cli::common::{load_config, load_items, print_json, CliError, CliResult};
use crate::services::tilted_square::layout_tilted_square;
use clap::Args;
use std::path::PathBuf;

/// Lay out items as a tilted-square (diamond) grid
#[derive(Debug, Clone, Args)]
pub struct TiltedArgs {
    /// Number of placeholder items
    #[arg(long, value_name = "N", conflicts_with = "items", required_unless_present = "items")]
    pub count: Option<usize>,

    /// JSON or YAML file with a list of companies
    #[arg(long, value_name = "FILE")]
    pub items: Option<PathBuf>,

    /// Items per row (defaults to the config file value)
    #[arg(long, value_name = "N")]
    pub per_row: Option<usize>,

    /// Square side length in pixels
    #[arg(long, value_name = "PX")]
    pub size: Option<f64>,

    /// Gap between rows in pixels
    #[arg(long, value_name = "PX")]
    pub gap: Option<f64>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl TiltedArgs {
    /// Execute the tilted command
    pub fn execute(&self) -> CliResult<()> {
        let defaults = load_config().tilted_square;
        let per_row = self.per_row.unwrap_or(defaults.items_per_row);
        let size = self.size.unwrap_or(defaults.size_px);
        let gap = self.gap.unwrap_or(defaults.gap_px);

        if !size.is_finite() || size <= 0.0 {
            return Err(CliError::validation(format!(
                "--size must be a positive number, got {size}"
            )));
        }
        if !gap.is_finite() || gap < 0.0 {
            return Err(CliError::validation(format!(
                "--gap must be zero or positive, got {gap}"
            )));
        }

        let items = load_items(self.count, self.items.as_deref())?;
        let layout = layout_tilted_square(&items, per_row, size, gap);

        if self.json {
            return print_json(&layout);
        }

        println!(
            "Tilted squares: {} items in {} rows, step {:.2}px x {:.2}px",
            layout.items.len(),
            layout.row_count,
            layout.horizontal_step_px,
            layout.vertical_step_px
        );
        for placed in &layout.items {
            println!(
                "  {:<12} row {} col {}  left {:>8.2}  top {:>8.2}",
                placed.item.key, placed.row, placed.column, placed.left_px, placed.top_px
            );
        }
        println!(
            "Container: {:.2} x {:.2}px",
            layout.container_width_px, layout.container_height_px
        );
        Ok(())
    }
}
