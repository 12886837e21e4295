//! Document-level input types.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A structured word-processing document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Fallback title, used when the body has no table of contents
    pub title: String,

    /// Top-level body blocks in document order
    pub body: Vec<Block>,

    /// Embedded objects keyed by inline object id
    pub inline_objects: HashMap<String, InlineObject>,

    /// List styles keyed by list id
    pub lists: HashMap<String, ListProperties>,
}

impl Document {
    /// Create a new empty document with a fallback title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Append a body block.
    pub fn add_block(&mut self, block: Block) {
        self.body.push(block);
    }

    /// Append a paragraph block.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.body.push(Block::Paragraph(paragraph));
    }

    /// Append a table block.
    pub fn add_table(&mut self, table: Table) {
        self.body.push(Block::Table(table));
    }

    /// Register an embedded object.
    pub fn add_inline_object(&mut self, id: impl Into<String>, object: InlineObject) {
        self.inline_objects.insert(id.into(), object);
    }

    /// Register a list style.
    pub fn add_list(&mut self, id: impl Into<String>, list: ListProperties) {
        self.lists.insert(id.into(), list);
    }

    /// Look up an embedded object.
    pub fn inline_object(&self, id: &str) -> Option<&InlineObject> {
        self.inline_objects.get(id)
    }

    /// Whether the list with this id is ordered.
    ///
    /// Unknown list ids are treated as unordered.
    pub fn is_ordered_list(&self, list_id: &str) -> bool {
        match self.lists.get(list_id) {
            Some(list) => list.is_ordered(),
            None => {
                log::debug!("List {} not found in registry, assuming unordered", list_id);
                false
            }
        }
    }

    /// Check if the body has no blocks.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// A top-level body block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph, heading or list item
    Paragraph(Paragraph),

    /// A table (possibly a single-cell code block)
    Table(Table),

    /// A generated table of contents field
    TableOfContents(TableOfContents),
}

impl Block {
    /// List id if this block is a bulleted paragraph.
    pub fn list_id(&self) -> Option<&str> {
        match self {
            Block::Paragraph(p) => p.bullet.as_ref().map(|b| b.list_id.as_str()),
            _ => None,
        }
    }
}

/// The raw content of a table of contents field.
///
/// Each paragraph is one line; top-level lines have no start indent and
/// nested lines are indented.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableOfContents {
    /// One paragraph per line
    pub content: Vec<Paragraph>,
}

/// An embedded object referenced from a paragraph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InlineObject {
    /// Image properties when the object is an image
    pub image: Option<ImageProperties>,
}

impl InlineObject {
    /// Create an image object.
    pub fn image(
        source: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            image: Some(ImageProperties {
                source: source.into(),
                title: title.into(),
                description: description.into(),
            }),
        }
    }
}

/// Metadata of an embedded image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageProperties {
    /// Content URI of the image
    pub source: String,
    /// Image title (empty when absent)
    pub title: String,
    /// Image description (empty when absent)
    pub description: String,
}

/// List style properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListProperties {
    /// Per-level glyph information, level 0 first
    pub nesting_levels: Vec<NestingLevel>,
}

impl ListProperties {
    /// Create an ordered list style.
    pub fn ordered() -> Self {
        Self {
            nesting_levels: vec![NestingLevel {
                glyph_type: Some("DECIMAL".to_string()),
            }],
        }
    }

    /// Create an unordered (bulleted) list style.
    pub fn unordered() -> Self {
        Self {
            nesting_levels: vec![NestingLevel { glyph_type: None }],
        }
    }

    /// A list is ordered when its first nesting level defines a glyph type.
    pub fn is_ordered(&self) -> bool {
        self.nesting_levels
            .first()
            .map(|level| level.glyph_type.is_some())
            .unwrap_or(false)
    }
}

/// Glyph information for one list nesting level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NestingLevel {
    /// Numbering glyph type (e.g. "DECIMAL"); absent for bullet glyphs
    pub glyph_type: Option<String>,
}
