//! Table of contents types.

use serde::{Deserialize, Serialize};

/// A top-level table of contents entry with its nested items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Entry title
    pub title: String,

    /// Slug of the title
    pub slug: String,

    /// Heading id the entry links to
    pub heading_id: Option<String>,

    /// Nested entries
    pub items: Vec<TocItem>,
}

impl TocEntry {
    /// Create a new entry without items.
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        heading_id: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            heading_id,
            items: Vec::new(),
        }
    }

    /// Add a nested item.
    pub fn add_item(&mut self, item: TocItem) {
        self.items.push(item);
    }

    /// Whether this entry or one of its items links to `heading_id`.
    pub fn references(&self, heading_id: &str) -> bool {
        self.heading_id.as_deref() == Some(heading_id)
            || self
                .items
                .iter()
                .any(|item| item.heading_id.as_deref() == Some(heading_id))
    }
}

/// A nested table of contents item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocItem {
    /// Item text
    pub text: String,

    /// Slug of the text
    pub slug: String,

    /// Heading id the item links to
    pub heading_id: Option<String>,
}
