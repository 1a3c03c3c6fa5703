//! SiteBlocks Library
//!
//! Core of a marketing-site block renderer: the design-system color resolver,
//! the color-binding protocol shared by all content blocks, and the honeycomb
//! and tilted-square grid layout engines.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod services;

#[cfg(feature = "web")]
pub mod web;
