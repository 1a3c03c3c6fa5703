//! Page documents fetched from the content store.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A page and its ordered content blocks.
///
/// Blocks are kept as loose JSON so that one malformed block never prevents
/// the rest of the page from rendering. Each block carries a `_type`
/// discriminator and its own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDocument {
    /// URL slug (e.g., "about-us")
    pub slug: String,
    /// Page title
    #[serde(default)]
    pub title: String,
    /// Meta description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered content blocks
    #[serde(default)]
    pub blocks: Vec<Value>,
}

/// Summary of a page for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    /// URL slug
    pub slug: String,
    /// Page title
    pub title: String,
    /// Number of content blocks
    pub block_count: usize,
}

impl From<&PageDocument> for PageSummary {
    fn from(page: &PageDocument) -> Self {
        Self {
            slug: page.slug.clone(),
            title: page.title.clone(),
            block_count: page.blocks.len(),
        }
    }
}
