//! Company records listed by the grid blocks.

use serde::{Deserialize, Serialize};

/// A company entry as stored in a block's `companies` array.
///
/// The layout engines never look inside an entry; only its position in the
/// list matters. `key` is the CMS array key and identifies the entry across
/// re-renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Stable identity key (`_key` in CMS arrays)
    #[serde(rename = "_key", alias = "key")]
    pub key: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Logo image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Company website
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl Company {
    /// Creates a company entry with a key and name.
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            logo_url: None,
            website: None,
        }
    }

    /// Creates `count` numbered placeholder entries (`item-1`, `item-2`, ...).
    #[must_use]
    pub fn placeholders(count: usize) -> Vec<Self> {
        (1..=count)
            .map(|i| Self::new(format!("item-{i}"), format!("Company {i}")))
            .collect()
    }
}
