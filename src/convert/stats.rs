//! Conversion statistics.

use crate::model::{ContentNode, Page};
use serde::{Deserialize, Serialize};

/// Counts of what a conversion produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Pages emitted
    pub page_count: u32,

    /// Heading nodes
    pub heading_count: u32,

    /// Paragraph nodes
    pub paragraph_count: u32,

    /// Quote nodes
    pub quote_count: u32,

    /// List nodes
    pub list_count: u32,

    /// Top-level list items; nested continuation lines are not counted
    pub list_item_count: u32,

    /// Table nodes
    pub table_count: u32,

    /// Code block nodes
    pub code_block_count: u32,

    /// Images collected across all pages
    pub image_count: u32,

    /// Whitespace-separated words in text-bearing nodes
    pub word_count: u32,
}

impl ConversionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally every node of every page.
    pub fn from_pages(pages: &[Page]) -> Self {
        let mut stats = Self::new();
        for page in pages {
            stats.add_page(page);
        }
        stats
    }

    /// Count one page and its content.
    pub fn add_page(&mut self, page: &Page) {
        self.page_count += 1;
        self.image_count += page.images.len() as u32;
        for node in &page.content {
            self.add_node(node);
        }
    }

    /// Count one content node.
    pub fn add_node(&mut self, node: &ContentNode) {
        match node {
            ContentNode::Heading { text, .. } => {
                self.heading_count += 1;
                self.count_text(text);
            }
            ContentNode::Quote { text } => {
                self.quote_count += 1;
                self.count_text(text);
            }
            ContentNode::Paragraph { text } => {
                self.paragraph_count += 1;
                self.count_text(text);
            }
            ContentNode::List { items, .. } => {
                self.list_count += 1;
                self.list_item_count += items.len() as u32;
                for item in items {
                    self.count_text(item);
                }
            }
            ContentNode::Table { .. } => self.table_count += 1,
            ContentNode::CodeBlock { .. } => self.code_block_count += 1,
            // Counted through `Page::images`
            ContentNode::Image(_) => {}
        }
    }

    /// Add word counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ConversionStats) {
        self.page_count += other.page_count;
        self.heading_count += other.heading_count;
        self.paragraph_count += other.paragraph_count;
        self.quote_count += other.quote_count;
        self.list_count += other.list_count;
        self.list_item_count += other.list_item_count;
        self.table_count += other.table_count;
        self.code_block_count += other.code_block_count;
        self.image_count += other.image_count;
        self.word_count += other.word_count;
    }
}
