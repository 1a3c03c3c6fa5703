//! `render` command: resolve every block of a page.

use crate::cli::common::{
    load_config, load_design_system, load_input, print_json, resolve_content_dir,
    validate_viewport, CliError, CliResult,
};
use crate::models::{DesignSystem, PageDocument};
use crate::services::content::{ContentStore, FileContentStore};
use crate::services::render::{render_page, BlockLayout, RenderOptions, RenderedPage};
use clap::Args;
use std::path::PathBuf;

/// Render a page: block colors and grid layouts
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Page document file (JSON or YAML)
    #[arg(long, value_name = "FILE", conflicts_with = "slug", required_unless_present = "slug")]
    pub page: Option<PathBuf>,

    /// Page slug to load from the content directory
    #[arg(long, value_name = "SLUG")]
    pub slug: Option<String>,

    /// Content directory (used with --slug)
    #[arg(long, value_name = "DIR")]
    pub content_dir: Option<PathBuf>,

    /// Design system file; with --slug the content directory's one is used
    #[arg(long, value_name = "FILE")]
    pub design_system: Option<PathBuf>,

    /// Viewport width in pixels; omit for the server-side fallback layout
    #[arg(long, value_name = "PX")]
    pub viewport: Option<f64>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self) -> CliResult<()> {
        let viewport = validate_viewport(self.viewport)?;
        let config = load_config();

        let (page, design_system) = self.load_page(&config)?;
        let options = RenderOptions::from_config(&config, viewport);
        let rendered = render_page(&page, design_system.as_ref(), &options);

        if self.json {
            print_json(&rendered)
        } else {
            print_rendered(&rendered);
            Ok(())
        }
    }

    fn load_page(
        &self,
        config: &crate::config::Config,
    ) -> CliResult<(PageDocument, Option<DesignSystem>)> {
        let explicit_ds = load_design_system(self.design_system.as_deref())?;

        if let Some(path) = &self.page {
            return Ok((load_input(path, "Page")?, explicit_ds));
        }

        let slug = self
            .slug
            .as_deref()
            .ok_or_else(|| CliError::validation("Either --page or --slug must be specified"))?;
        let store = FileContentStore::new(resolve_content_dir(self.content_dir.as_deref(), config)?);

        let page = store
            .page(slug)
            .map_err(|e| CliError::validation(format!("Failed to load page '{slug}': {e:#}")))?
            .ok_or_else(|| CliError::io(format!("Page not found: {slug}")))?;

        let design_system = match explicit_ds {
            Some(ds) => Some(ds),
            None => store
                .design_system()
                .map_err(|e| CliError::validation(format!("Failed to load design system: {e:#}")))?,
        };
        Ok((page, design_system))
    }
}

fn print_rendered(page: &RenderedPage) {
    println!("{} ({})", page.title, page.slug);
    if page.default_palette {
        println!("Using the default palette");
    }
    println!();

    for block in &page.blocks {
        match &block.key {
            Some(key) => println!("[{}] {} ({key})", block.index, block.type_name),
            None => println!("[{}] {}", block.index, block.type_name),
        }
        for (field, color) in block.colors.iter() {
            println!("    {field:<14} {color}");
        }
        match &block.layout {
            Some(BlockLayout::Honeycomb(layout)) => {
                println!("    honeycomb rows {:?}", layout.row_lengths());
            }
            Some(BlockLayout::TiltedSquare(layout)) => println!(
                "    tilted squares: {} rows, {:.2} x {:.2}px",
                layout.row_count, layout.container_width_px, layout.container_height_px
            ),
            None => {}
        }
        for warning in &block.warnings {
            println!("    warning: {warning}");
        }
    }
}
