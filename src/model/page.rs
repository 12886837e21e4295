//! Page-level types.

use super::{ContentNode, Image};
use serde::{Deserialize, Serialize};

/// One titled page of converted content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// URL slug derived from the title
    pub slug: String,

    /// Page title
    pub title: String,

    /// Content blocks in document order
    pub content: Vec<ContentNode>,

    /// Every image referenced by the content
    pub images: Vec<Image>,
}

impl Page {
    /// Create a new empty page.
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            content: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Check if the page has no content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Get the number of content blocks.
    pub fn block_count(&self) -> usize {
        self.content.len()
    }

    /// Images that appear directly as content nodes.
    pub fn content_images(&self) -> impl Iterator<Item = &Image> {
        self.content.iter().filter_map(ContentNode::as_image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_new() {
        let page = Page::new("Getting Started", "getting-started");
        assert_eq!(page.title, "Getting Started");
        assert_eq!(page.slug, "getting-started");
        assert!(page.is_empty());
        assert_eq!(page.block_count(), 0);
    }

    #[test]
    fn test_content_images() {
        let mut page = Page::new("p", "p");
        page.content.push(ContentNode::paragraph("text"));
        page.content
            .push(ContentNode::Image(Image::new("https://a", "", "")));
        assert_eq!(page.content_images().count(), 1);
    }
}
