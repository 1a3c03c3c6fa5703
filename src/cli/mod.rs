//! CLI command handlers for SiteBlocks.
//!
//! This module provides headless, scriptable access to the color resolver,
//! the grid layout engines and the page render pass.

pub mod common;
pub mod config;
pub mod honeycomb;
pub mod palette;
pub mod render;
pub mod resolve;
pub mod tilted;

// Re-export types used by main.rs and tests
pub use common::ExitCode;
pub use config::ConfigArgs;
pub use honeycomb::HoneycombArgs;
pub use palette::PaletteArgs;
pub use render::RenderArgs;
pub use resolve::ResolveArgs;
pub use tilted::TiltedArgs;
