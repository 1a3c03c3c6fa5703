//! Service layer for business logic.
//!
//! The layout engines and the color resolver are pure functions of their
//! inputs. The content store and the render pass coordinate them for whole
//! pages.

pub mod block_colors;
pub mod color;
pub mod content;
pub mod honeycomb;
pub mod render;
pub mod reveal;
pub mod tilted_square;

// Re-export commonly used types and functions
pub use block_colors::{resolve_block_colors, BlockPalette};
pub use color::resolve;
pub use content::{ContentStore, FileContentStore};
pub use honeycomb::{layout_honeycomb, Breakpoint, HoneycombLayout, ResponsiveHoneycomb};
pub use render::{render_page, BlockLayout, RenderOptions, RenderedBlock, RenderedPage};
pub use reveal::RevealGate;
pub use tilted_square::{layout_tilted_square, TiltedSquareLayout};
