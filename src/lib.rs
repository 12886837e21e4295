//! # ungdocs
//!
//! Conversion of structured word-processing documents into paginated
//! markdown.
//!
//! The input is the JSON returned by the Google Docs `documents.get` call.
//! Headings linked from the document's table of contents split it into
//! pages; each page is rendered as markdown with a YAML front matter header.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ungdocs::{convert_file, render};
//!
//! fn main() -> ungdocs::Result<()> {
//!     let converted = convert_file("handbook.json")?;
//!
//!     for page in &converted.pages {
//!         let front = render::FrontMatter::new();
//!         let markdown = render::render_page(page, &front, &render::RenderOptions::default())?;
//!         println!("{}", markdown);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Pagination**: table of contents entries drive page boundaries
//! - **Structure preservation**: headings, quotes, lists with nesting, tables, code blocks
//! - **Images**: collected per page, with optional local substitution
//! - **Spreadsheets**: sheets become header-keyed row records
//! - **Batch conversion**: a source pipeline converts listed files in parallel with Rayon

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod sheet;
pub mod source;

// Re-export commonly used types
pub use convert::{ConversionStats, ConvertOptions, ConvertedDocument, DocumentConverter};
pub use detect::FileKind;
pub use error::{Error, Result};
pub use model::{
    Block, ContentNode, Document, Image, Page, Paragraph, Table, TableCell, TableRow, TextRun,
    TextStyle, TocEntry, TocItem,
};
pub use parser::{DocsParser, ErrorMode, ParseOptions};
pub use render::{FrontMatter, JsonFormat, RenderOptions};
pub use sheet::{rows_to_records, Sheet, SheetValues};
pub use source::{FileDescriptor, Record, SourceOptions, SourcePipeline, SourceReport};

use std::io::Read;
use std::path::Path;

/// Parse a document JSON file.
///
/// # Example
///
/// ```no_run
/// use ungdocs::parse_file;
///
/// let doc = parse_file("handbook.json").unwrap();
/// println!("Blocks: {}", doc.body.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    parser::parse_file(path, ParseOptions::default())
}

/// Parse a document JSON file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    parser::parse_file(path, options)
}

/// Parse a document from JSON text.
pub fn parse_str(json: &str) -> Result<Document> {
    parser::parse_str(json, ParseOptions::default())
}

/// Parse a document from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    DocsParser::from_reader(reader)?.parse()
}

/// Parse and convert a document JSON file.
///
/// # Example
///
/// ```no_run
/// use ungdocs::convert_file;
///
/// let converted = convert_file("handbook.json").unwrap();
/// for page in &converted.pages {
///     println!("{} ({} blocks)", page.title, page.block_count());
/// }
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<ConvertedDocument> {
    let doc = parse_file(path)?;
    DocumentConverter::default().convert(&doc)
}

/// Convert a document JSON file into one markdown string per page.
///
/// Each page carries its `title` and `slug` as front matter.
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    Ungdocs::new().parse(path)?.to_markdown()
}

/// Convert a document JSON file into JSON.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let converted = convert_file(path)?;
    render::to_json(&converted, format)
}

/// Builder for parsing, converting and rendering documents.
///
/// # Example
///
/// ```no_run
/// use ungdocs::Ungdocs;
///
/// let pages = Ungdocs::new()
///     .lenient()
///     .with_breadcrumb(["Engineering"])
///     .with_code_language("bash")
///     .parse("handbook.json")?
///     .to_markdown()?;
/// # Ok::<(), ungdocs::Error>(())
/// ```
pub struct Ungdocs {
    parse_options: ParseOptions,
    convert_options: ConvertOptions,
    render_options: RenderOptions,
}

impl Ungdocs {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            convert_options: ConvertOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Enable lenient parsing mode.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Set the folder breadcrumb of the document.
    pub fn with_breadcrumb<I, S>(mut self, breadcrumb: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.convert_options = self.convert_options.with_breadcrumb(breadcrumb);
        self
    }

    /// Set the code block language.
    pub fn with_code_language(mut self, lang: impl Into<String>) -> Self {
        self.convert_options = self.convert_options.with_code_language(lang);
        self
    }

    /// Enable or disable front matter in output.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.render_options = self.render_options.with_frontmatter(include);
        self
    }

    /// Set the unordered list marker.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.render_options = self.render_options.with_list_marker(marker);
        self
    }

    /// Parse and convert a document JSON file.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<UngdocsResult> {
        let document = parser::parse_file(path, self.parse_options.clone())?;
        self.convert(&document)
    }

    /// Parse and convert JSON text.
    pub fn parse_str(self, json: &str) -> Result<UngdocsResult> {
        let document = parser::parse_str(json, self.parse_options.clone())?;
        self.convert(&document)
    }

    /// Convert an already parsed document.
    pub fn convert(self, document: &Document) -> Result<UngdocsResult> {
        let converted = DocumentConverter::new(self.convert_options).convert(document)?;
        Ok(UngdocsResult {
            converted,
            render_options: self.render_options,
        })
    }
}

impl Default for Ungdocs {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of converting a document.
pub struct UngdocsResult {
    /// The converted document
    pub converted: ConvertedDocument,
    /// Render options to use
    render_options: RenderOptions,
}

impl UngdocsResult {
    /// Render every page to markdown.
    pub fn to_markdown(&self) -> Result<Vec<String>> {
        self.converted
            .pages
            .iter()
            .map(|page| render::render_page(page, &FrontMatter::new(), &self.render_options))
            .collect()
    }

    /// Render one page to markdown.
    pub fn page_markdown(&self, index: usize) -> Result<String> {
        let page = self.converted.page(index).ok_or_else(|| {
            Error::Other(format!(
                "Page {} out of range ({} pages)",
                index,
                self.converted.page_count()
            ))
        })?;
        render::render_page(page, &FrontMatter::new(), &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.converted, format)
    }

    /// Get the converted document.
    pub fn converted(&self) -> &ConvertedDocument {
        &self.converted
    }
}
