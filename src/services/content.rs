//! Content store access.
//!
//! The site's structured content (design system, pages) lives in a hosted
//! content store. [`ContentStore`] is the seam the render pass consumes;
//! [`FileContentStore`] serves the same documents from a local directory
//! export, which is what the CLI and the web API use.
//!
//! # Directory layout
//!
//! ```text
//! <root>/
//!   design-system.json      (or .yaml / .yml)
//!   pages/
//!     home.json
//!     about-us.yaml
//! ```

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::models::{DesignSystem, PageDocument, PageSummary};

/// File extensions accepted for content documents, in lookup order.
pub const DOCUMENT_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// Read access to the site's content documents.
pub trait ContentStore {
    /// The design-system document, if one exists.
    fn design_system(&self) -> Result<Option<DesignSystem>>;

    /// A page by slug, if one exists.
    fn page(&self, slug: &str) -> Result<Option<PageDocument>>;

    /// Summaries of all pages, sorted by slug.
    fn list_pages(&self) -> Result<Vec<PageSummary>>;
}

/// Loads a JSON or YAML document, chosen by file extension.
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unsupported extension,
/// or does not match the expected shape.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "json" => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON document {}", path.display())),
        "yaml" | "yml" => serde_yml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML document {}", path.display())),
        other => anyhow::bail!(
            "Unsupported document extension '{other}' for {} (expected json, yaml or yml)",
            path.display()
        ),
    }
}

/// Validates a page slug so it cannot escape the pages directory.
///
/// Slugs are lowercase alphanumerics and hyphens.
pub fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() {
        anyhow::bail!("Page slug cannot be empty");
    }

    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        anyhow::bail!("Invalid page slug '{slug}': only lowercase letters, digits and hyphens are allowed");
    }

    if slug.starts_with('-') || slug.ends_with('-') {
        anyhow::bail!("Invalid page slug '{slug}': cannot start or end with a hyphen");
    }

    Ok(())
}

/// Content store backed by a directory of JSON/YAML documents.
#[derive(Debug, Clone)]
pub struct FileContentStore {
    root: PathBuf,
}

impl FileContentStore {
    /// Creates a store over `root`. The directory does not need to exist yet.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of the store.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn pages_dir(&self) -> PathBuf {
        self.root.join("pages")
    }

    /// Finds `<dir>/<stem>.<ext>` for the first supported extension that exists.
    fn find_document(dir: &Path, stem: &str) -> Option<PathBuf> {
        DOCUMENT_EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{stem}.{ext}")))
            .find(|path| path.is_file())
    }
}

impl ContentStore for FileContentStore {
    fn design_system(&self) -> Result<Option<DesignSystem>> {
        let Some(path) = Self::find_document(&self.root, "design-system") else {
            debug!("No design system in {}, using defaults", self.root.display());
            return Ok(None);
        };
        load_document(&path).map(Some)
    }

    fn page(&self, slug: &str) -> Result<Option<PageDocument>> {
        validate_slug(slug)?;
        let Some(path) = Self::find_document(&self.pages_dir(), slug) else {
            return Ok(None);
        };
        let mut page: PageDocument = load_document(&path)?;
        if page.slug != slug {
            warn!(
                "Page file {} declares slug '{}', serving it as '{slug}'",
                path.display(),
                page.slug
            );
            page.slug = slug.to_string();
        }
        Ok(Some(page))
    }

    fn list_pages(&self) -> Result<Vec<PageSummary>> {
        let pages_dir = self.pages_dir();
        if !pages_dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&pages_dir)
            .with_context(|| format!("Failed to read pages directory: {}", pages_dir.display()))?;

        let mut summaries = Vec::new();
        for entry in entries {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            let is_document = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| DOCUMENT_EXTENSIONS.contains(&ext));
            if !path.is_file() || !is_document {
                continue;
            }

            // A broken page should not hide the others.
            match load_document::<PageDocument>(&path) {
                Ok(page) => summaries.push(PageSummary::from(&page)),
                Err(e) => warn!("Skipping unreadable page {}: {e:#}", path.display()),
            }
        }

        summaries.sort_by(|a, b| a.slug.cmp(&b.slug));
        Ok(summaries)
    }
}
