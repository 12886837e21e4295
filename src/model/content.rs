//! Semantic content nodes produced by conversion.

use serde::{Deserialize, Serialize};

/// A semantic block of page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentNode {
    /// Heading with level 1-5
    Heading {
        /// Heading level
        level: u8,
        /// Styled inline text
        text: String,
    },

    /// Block quote
    Quote {
        /// Styled inline text
        text: String,
    },

    /// Plain paragraph
    Paragraph {
        /// Styled inline text
        text: String,
    },

    /// Ordered or unordered list
    List {
        /// Whether items are numbered
        ordered: bool,
        /// Item strings; nested items are embedded as indented continuation lines
        items: Vec<String>,
    },

    /// Header row plus body rows
    Table {
        /// Header cell texts
        headers: Vec<String>,
        /// Body rows
        rows: Vec<Vec<String>>,
    },

    /// Fenced code block
    CodeBlock {
        /// Language tag for the fence
        lang: String,
        /// Source lines
        lines: Vec<String>,
    },

    /// An embedded image
    Image(Image),
}

impl ContentNode {
    /// Create a paragraph node.
    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentNode::Paragraph { text: text.into() }
    }

    /// Create a heading node (level is clamped to 1-5).
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        ContentNode::Heading {
            level: level.clamp(1, 5),
            text: text.into(),
        }
    }

    /// Check if this node is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, ContentNode::Heading { .. })
    }

    /// Check if this node is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, ContentNode::List { .. })
    }

    /// Check if this node is an image.
    pub fn is_image(&self) -> bool {
        matches!(self, ContentNode::Image(_))
    }

    /// The image, if this node is one.
    pub fn as_image(&self) -> Option<&Image> {
        match self {
            ContentNode::Image(image) => Some(image),
            _ => None,
        }
    }
}

/// An image referenced by page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Remote content URI
    pub source: String,
    /// Image title (may be empty)
    pub title: String,
    /// Image description, used as alt text (may be empty)
    pub description: String,
}

impl Image {
    /// Create a new image reference.
    pub fn new(
        source: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    /// Inline markdown syntax for this image.
    pub fn to_markdown(&self) -> String {
        if self.title.is_empty() {
            format!("![{}]({})", self.description, self.source)
        } else {
            format!("![{}]({} \"{}\")", self.description, self.source, self.title)
        }
    }
}
