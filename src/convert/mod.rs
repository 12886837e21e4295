//! Conversion of a parsed document into titled pages.
//!
//! The converter is a single pass over the document body. Each block is
//! folded into a [`ConversionState`] owned by the call; headings linked from
//! the table of contents close the current page and open the next one.
//!
//! # Example
//!
//! ```
//! use ungdocs::convert::{ConvertOptions, DocumentConverter};
//! use ungdocs::model::{Document, Paragraph};
//!
//! let mut doc = Document::new("Handbook");
//! doc.add_paragraph(Paragraph::with_text("Welcome aboard.\n"));
//!
//! let converted = DocumentConverter::new(ConvertOptions::default()).convert(&doc)?;
//! assert_eq!(converted.pages.len(), 1);
//! assert_eq!(converted.pages[0].title, "Handbook");
//! # Ok::<(), ungdocs::Error>(())
//! ```

mod list;
mod slug;
mod stats;
mod style;
mod table;
mod toc;

pub use list::{nested_prefix, ListAccumulator};
pub use slug::{kebab_case, slugify};
pub use stats::ConversionStats;
pub use style::{is_code_span, join_pieces, style_text, LineBreaks, StyleContext, VERTICAL_TAB};
pub use table::{classify_table, code_lines, flatten_cell};
pub use toc::{extract_toc, is_registered, NESTED_ITEM_INDENT};

use crate::error::{Error, Result};
use crate::model::{
    Block, ContentNode, Document, Image, InlineElement, Page, Paragraph, Tag, TableOfContents,
    TocEntry, TocItem,
};
use serde::{Deserialize, Serialize};

/// Options for document conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Names of the folders containing the document, outermost first
    pub breadcrumb: Vec<String>,

    /// Language tag for code blocks built from single-cell tables
    pub code_language: String,

    /// Markup for line breaks inside table cells
    pub line_break_marker: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            breadcrumb: Vec::new(),
            code_language: "sh".to_string(),
            line_break_marker: "<br>".to_string(),
        }
    }
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the breadcrumb.
    pub fn with_breadcrumb<I, S>(mut self, breadcrumb: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.breadcrumb = breadcrumb.into_iter().map(Into::into).collect();
        self
    }

    /// Set the code block language.
    pub fn with_code_language(mut self, lang: impl Into<String>) -> Self {
        self.code_language = lang.into();
        self
    }

    /// Set the table cell line break marker.
    pub fn with_line_break_marker(mut self, marker: impl Into<String>) -> Self {
        self.line_break_marker = marker.into();
        self
    }

    /// Documents nested two or more folders deep ignore their table of contents.
    pub fn honors_toc(&self) -> bool {
        self.breadcrumb.len() < 2
    }

    /// Title used when the document has no table of contents.
    fn fallback_title<'a>(&'a self, document: &'a Document) -> &'a str {
        self.breadcrumb
            .get(1)
            .map(String::as_str)
            .unwrap_or(&document.title)
    }
}

/// Result of converting one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConvertedDocument {
    /// Fallback title of the source document
    pub title: String,

    /// Pages in document order
    pub pages: Vec<Page>,

    /// Table of contents, synthesized when the document has none
    pub toc: Vec<TocEntry>,

    /// Conversion statistics
    pub stats: ConversionStats,
}

impl ConvertedDocument {
    /// Get the number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Get a page by index.
    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Find a page by slug.
    pub fn page_by_slug(&self, slug: &str) -> Option<&Page> {
        self.pages.iter().find(|page| page.slug == slug)
    }

    /// Iterate over the images of every page.
    pub fn images(&self) -> impl Iterator<Item = &Image> {
        self.pages.iter().flat_map(|page| page.images.iter())
    }
}

/// Converts documents into pages.
#[derive(Debug, Clone, Default)]
pub struct DocumentConverter {
    options: ConvertOptions,
}

impl DocumentConverter {
    /// Create a converter with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Get the conversion options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert a document.
    ///
    /// Fails on structural problems such as an inline object id that is
    /// not present in the document's object registry.
    pub fn convert(&self, document: &Document) -> Result<ConvertedDocument> {
        let mut state = ConversionState::new(document, &self.options);
        for block in &document.body {
            state.step(block)?;
        }
        let converted = state.finish();

        log::debug!(
            "Converted {:?} into {} page(s)",
            converted.title,
            converted.pages.len()
        );
        Ok(converted)
    }
}

/// Accumulator threaded through one conversion.
pub struct ConversionState<'a> {
    document: &'a Document,
    options: &'a ConvertOptions,
    pages: Vec<Page>,
    content: Vec<ContentNode>,
    images: Vec<Image>,
    toc: Vec<TocEntry>,
    current_title: String,
    previous_list_id: Option<String>,
}

impl<'a> ConversionState<'a> {
    /// Start a conversion of `document`.
    pub fn new(document: &'a Document, options: &'a ConvertOptions) -> Self {
        Self {
            document,
            options,
            pages: Vec::new(),
            content: Vec::new(),
            images: Vec::new(),
            toc: Vec::new(),
            current_title: String::new(),
            previous_list_id: None,
        }
    }

    /// Fold one body block into the state.
    pub fn step(&mut self, block: &Block) -> Result<()> {
        let previous_list_id = self.previous_list_id.take();

        match block {
            Block::TableOfContents(toc) => self.table_of_contents(toc),
            Block::Paragraph(paragraph) => match &paragraph.bullet {
                Some(bullet) => {
                    let continues = previous_list_id.as_deref() == Some(bullet.list_id.as_str());
                    ListAccumulator::new(self.document).push(
                        &mut self.content,
                        paragraph,
                        bullet,
                        continues,
                    )?;
                    self.previous_list_id = Some(bullet.list_id.clone());
                }
                None => match paragraph.style.named_style.tag() {
                    Some(tag) => self.paragraph(paragraph, tag)?,
                    None => log::debug!(
                        "Skipping paragraph with style {:?}",
                        paragraph.style.named_style
                    ),
                },
            },
            Block::Table(table) => {
                if table.is_empty() {
                    log::debug!("Skipping table without rows");
                } else {
                    self.content.push(classify_table(table, self.options)?);
                }
            }
        }

        Ok(())
    }

    /// Close the last page and assemble the result.
    pub fn finish(mut self) -> ConvertedDocument {
        let title = if self.toc.is_empty() {
            let title = self.options.fallback_title(self.document).to_string();
            let slug = slugify(&title);
            let mut entry = TocEntry::new(title.clone(), slug.clone(), None);
            entry.add_item(TocItem {
                text: title.clone(),
                slug,
                heading_id: None,
            });
            self.toc.push(entry);
            title
        } else {
            std::mem::take(&mut self.current_title)
        };

        self.flush(title);

        ConvertedDocument {
            title: self.document.title.clone(),
            stats: ConversionStats::from_pages(&self.pages),
            pages: self.pages,
            toc: self.toc,
        }
    }

    fn table_of_contents(&mut self, toc: &TableOfContents) {
        if self.options.honors_toc() {
            self.toc = extract_toc(toc);
            log::debug!("Registered {} table of contents entries", self.toc.len());
        } else {
            log::debug!(
                "Ignoring table of contents at breadcrumb depth {}",
                self.options.breadcrumb.len()
            );
        }
    }

    fn paragraph(&mut self, paragraph: &Paragraph, tag: Tag) -> Result<()> {
        let ctx = if tag.is_heading_like() {
            StyleContext::heading()
        } else {
            StyleContext::body()
        };

        let mut nodes = Vec::new();
        let mut images = Vec::new();
        let mut runs: Vec<String> = Vec::new();

        for element in &paragraph.elements {
            match element {
                InlineElement::TextRun(run) if run.is_paragraph_end() => {}
                InlineElement::TextRun(run) => {
                    let styled = style_text(run, ctx);
                    push_text(&mut nodes, tag, join_pieces(&[styled.as_str()]));
                    runs.push(styled);
                }
                InlineElement::InlineObject { object_id } => {
                    let Some(image) = resolve_image(self.document, object_id)? else {
                        log::debug!("Inline object {} is not an image", object_id);
                        continue;
                    };
                    nodes.push(ContentNode::Image(image.clone()));
                    images.push(image);
                }
            }
        }

        // Runs stay separate siblings only next to images.
        let text = join_pieces(&runs);
        if images.is_empty() {
            nodes.clear();
            push_text(&mut nodes, tag, text.clone());
        }

        // A heading without text never opens a page.
        let boundary = !text.is_empty()
            && paragraph
                .style
                .heading_id
                .as_deref()
                .is_some_and(|id| is_registered(&self.toc, id));

        if boundary {
            self.start_page(text);
            for image in images {
                self.content.push(ContentNode::Image(image.clone()));
                self.images.push(image);
            }
        } else {
            self.content.extend(nodes);
            self.images.extend(images);
        }

        Ok(())
    }

    fn start_page(&mut self, title: String) {
        if self.current_title.is_empty() {
            if !self.content.is_empty() {
                log::debug!(
                    "Discarding {} block(s) before the first page heading",
                    self.content.len()
                );
            }
            self.content.clear();
            self.images.clear();
        } else {
            let previous = std::mem::take(&mut self.current_title);
            self.flush(previous);
        }
        self.current_title = title;
    }

    fn flush(&mut self, title: String) {
        let mut page = Page::new(title, "");
        page.slug = slugify(&page.title);
        page.content = std::mem::take(&mut self.content);
        page.images = std::mem::take(&mut self.images);
        self.pages.push(page);
    }
}

/// Push `text` as one node of `tag`, unless it is empty.
fn push_text(nodes: &mut Vec<ContentNode>, tag: Tag, text: String) {
    if text.is_empty() {
        return;
    }
    nodes.push(match tag {
        Tag::Paragraph => ContentNode::Paragraph { text },
        Tag::Quote => ContentNode::Quote { text },
        Tag::Heading(level) => ContentNode::heading(level, text),
    });
}

/// Look up an inline object, returning its image if it has one.
pub(crate) fn resolve_image(document: &Document, object_id: &str) -> Result<Option<Image>> {
    let object = document
        .inline_object(object_id)
        .ok_or_else(|| Error::MissingObject(object_id.to_string()))?;

    Ok(object.image.as_ref().map(|props| {
        Image::new(
            props.source.clone(),
            props.title.clone(),
            props.description.clone(),
        )
    }))
}

/// Convert a document with the given options.
pub fn convert_document(document: &Document, options: &ConvertOptions) -> Result<ConvertedDocument> {
    DocumentConverter::new(options.clone()).convert(document)
}
