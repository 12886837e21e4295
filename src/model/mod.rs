//! Document model types.
//!
//! The input side (`Document`, `Block`, `Paragraph`, ...) mirrors the structure of a
//! word-processing document body. The output side (`ContentNode`, `Page`, `TocEntry`)
//! is the paginated intermediate representation consumed by the renderers.

mod content;
mod document;
mod page;
mod paragraph;
mod table;
mod toc;

pub use content::{ContentNode, Image};
pub use document::{
    Block, Document, ImageProperties, InlineObject, ListProperties, NestingLevel,
    TableOfContents,
};
pub use page::Page;
pub use paragraph::{
    Bullet, InlineElement, Link, NamedStyle, Paragraph, ParagraphStyle, Tag, TextRun, TextStyle,
};
pub use table::{Table, TableCell, TableRow};
pub use toc::{TocEntry, TocItem};
