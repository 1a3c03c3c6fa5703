//! Data models for design systems, color selections and page content.
//!
//! This module contains the core data structures used throughout the application.
//! Models are independent of layout and rendering logic.

pub mod block;
pub mod color_selection;
pub mod company;
pub mod design_system;
pub mod page;
pub mod rgb;

// Re-export all model types
pub use block::{BlockKind, ColorField, FieldSource};
pub use color_selection::{ColorSelection, CustomColor, OpacityPreset};
pub use company::Company;
pub use design_system::{ColorToken, ColorValue, DesignColors, DesignSystem, RgbaChannels};
pub use page::{PageDocument, PageSummary};
pub use rgb::RgbColor;
