//! Batch conversion of listed remote files into records.
//!
//! Fetching, listing and image storage are supplied by the caller through
//! the [`FileLister`], [`DocumentSource`], [`SpreadsheetSource`] and
//! [`ImageMaterializer`] traits. The pipeline dispatches each listed file by
//! kind and converts files independently, in parallel by default.

mod descriptor;
mod images;

pub use descriptor::{DescriptorMetadata, DescriptorOptions, FileDescriptor};
pub use images::{replace_image_sources, MaterializedImage};

use crate::convert::{ConvertOptions, DocumentConverter};
use crate::detect::FileKind;
use crate::error::{Error, Result};
use crate::model::{Image, Page};
use crate::parser::{self, ParseOptions};
use crate::render::{render_markdown, RenderOptions};
use crate::sheet::{Sheet, SheetValues};
use rayon::prelude::*;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Lists the files to convert, with their folder breadcrumbs resolved.
pub trait FileLister: Send + Sync {
    /// Return the flattened, enhanced descriptor list.
    fn list_files(&self) -> Result<Vec<FileDescriptor>>;
}

/// Fetches raw document JSON.
pub trait DocumentSource: Send + Sync {
    /// Fetch the document with the given id.
    fn fetch_document(&self, id: &str) -> Result<Value>;
}

/// Fetches spreadsheet values.
pub trait SpreadsheetSource: Send + Sync {
    /// Fetch every sheet of the spreadsheet with the given id.
    fn fetch_sheets(&self, id: &str) -> Result<Vec<SheetValues>>;
}

/// Stores remote images locally.
pub trait ImageMaterializer: Send + Sync {
    /// Store the images of one page record, returning where each one went.
    fn materialize(&self, record_id: &str, images: &[Image]) -> Result<Vec<MaterializedImage>>;
}

/// Options for the source pipeline.
#[derive(Debug, Clone)]
pub struct SourceOptions {
    /// Convert files concurrently
    pub parallel: bool,

    /// Rewrite image URIs in markdown when a materializer is set
    pub replace_images: bool,

    /// Parsing options
    pub parse: ParseOptions,

    /// Conversion options; the breadcrumb is taken from each descriptor
    pub convert: ConvertOptions,

    /// Rendering options
    pub render: RenderOptions,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            replace_images: true,
            parse: ParseOptions::default(),
            convert: ConvertOptions::default(),
            render: RenderOptions::default(),
        }
    }
}

impl SourceOptions {
    /// Create new source options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable parallel conversion.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Enable or disable image URI replacement.
    pub fn with_replace_images(mut self, replace: bool) -> Self {
        self.replace_images = replace;
        self
    }

    /// Set parsing options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }

    /// Set conversion options.
    pub fn with_convert_options(mut self, options: ConvertOptions) -> Self {
        self.convert = options;
        self
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }
}

/// One page of a converted document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRecord {
    /// `"{file_id}/{page_index}"`
    pub id: String,
    /// Page slug
    pub slug: String,
    /// Page title
    pub title: String,
    /// Page content
    pub page: Page,
    /// Rendered markdown with front matter
    pub markdown: String,
    /// Typed descriptor fields
    pub metadata: DescriptorMetadata,
    /// Every descriptor field
    pub descriptor: FileDescriptor,
}

/// One sheet of a converted spreadsheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetRecord {
    /// `"{file_id}/{sheet_name}"`
    pub id: String,
    /// Sheet title
    pub name: String,
    /// Rows keyed by the header row
    pub rows: Vec<Map<String, Value>>,
    /// Typed descriptor fields
    pub metadata: DescriptorMetadata,
    /// Every descriptor field
    pub descriptor: FileDescriptor,
}

/// Output of the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    /// A document page
    Page(PageRecord),
    /// A spreadsheet sheet
    Sheet(SheetRecord),
}

impl Record {
    /// Record id.
    pub fn id(&self) -> &str {
        match self {
            Record::Page(page) => &page.id,
            Record::Sheet(sheet) => &sheet.id,
        }
    }

    /// Get the page record, if this is one.
    pub fn as_page(&self) -> Option<&PageRecord> {
        match self {
            Record::Page(page) => Some(page),
            Record::Sheet(_) => None,
        }
    }

    /// Get the sheet record, if this is one.
    pub fn as_sheet(&self) -> Option<&SheetRecord> {
        match self {
            Record::Sheet(sheet) => Some(sheet),
            Record::Page(_) => None,
        }
    }
}

/// A file that could not be converted.
#[derive(Debug)]
pub struct SourceFailure {
    /// Remote file id, if the descriptor had one
    pub file_id: Option<String>,
    /// File name, if the descriptor had one
    pub name: Option<String>,
    /// What went wrong
    pub error: Error,
}

/// Result of a pipeline run.
#[derive(Debug, Default)]
pub struct SourceReport {
    /// Records of every file that converted, in listing order
    pub records: Vec<Record>,
    /// Files that failed
    pub failures: Vec<SourceFailure>,
    /// Files skipped because of their kind
    pub skipped: usize,
}

impl SourceReport {
    /// Whether every file converted.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Iterate over the page records.
    pub fn pages(&self) -> impl Iterator<Item = &PageRecord> {
        self.records.iter().filter_map(Record::as_page)
    }

    /// Iterate over the sheet records.
    pub fn sheets(&self) -> impl Iterator<Item = &SheetRecord> {
        self.records.iter().filter_map(Record::as_sheet)
    }
}

/// Lists, fetches and converts files into records.
pub struct SourcePipeline {
    lister: Arc<dyn FileLister>,
    documents: Arc<dyn DocumentSource>,
    sheets: Arc<dyn SpreadsheetSource>,
    images: Option<Arc<dyn ImageMaterializer>>,
    options: SourceOptions,
}

impl SourcePipeline {
    /// Create a pipeline without image materialization.
    pub fn new(
        lister: Arc<dyn FileLister>,
        documents: Arc<dyn DocumentSource>,
        sheets: Arc<dyn SpreadsheetSource>,
        options: SourceOptions,
    ) -> Self {
        Self {
            lister,
            documents,
            sheets,
            images: None,
            options,
        }
    }

    /// Store page images with `materializer`.
    pub fn with_image_materializer(mut self, materializer: Arc<dyn ImageMaterializer>) -> Self {
        self.images = Some(materializer);
        self
    }

    /// Get the pipeline options.
    pub fn options(&self) -> &SourceOptions {
        &self.options
    }

    /// List and convert every file.
    ///
    /// Only a listing failure is returned as an error; per-file failures
    /// are collected in the report.
    pub fn run(&self) -> Result<SourceReport> {
        let files = self.lister.list_files()?;
        log::debug!("Listed {} file(s)", files.len());

        let outcomes: Vec<Result<Option<Vec<Record>>>> = if self.options.parallel {
            files.par_iter().map(|file| self.process(file)).collect()
        } else {
            files.iter().map(|file| self.process(file)).collect()
        };

        let mut report = SourceReport::default();
        for (file, outcome) in files.iter().zip(outcomes) {
            match outcome {
                Ok(Some(records)) => report.records.extend(records),
                Ok(None) => report.skipped += 1,
                Err(error) => {
                    log::warn!(
                        "Failed to convert {} ({}): {}",
                        file.name().unwrap_or("<unnamed>"),
                        file.id().unwrap_or("<no id>"),
                        error
                    );
                    report.failures.push(SourceFailure {
                        file_id: file.id().map(str::to_string),
                        name: file.name().map(str::to_string),
                        error,
                    });
                }
            }
        }

        Ok(report)
    }

    /// Convert one file. `None` means the file kind is not converted.
    pub fn process(&self, file: &FileDescriptor) -> Result<Option<Vec<Record>>> {
        match file.kind() {
            FileKind::Document => self.process_document(file).map(Some),
            FileKind::Spreadsheet => self.process_spreadsheet(file).map(Some),
            kind => {
                log::debug!("Skipping {} {:?}", kind, file.name().unwrap_or_default());
                Ok(None)
            }
        }
    }

    fn process_document(&self, file: &FileDescriptor) -> Result<Vec<Record>> {
        let id = file_id(file)?;
        let value = self.documents.fetch_document(id)?;
        if value.is_null() {
            return Err(Error::EmptyResponse(id.to_string()));
        }

        let document = parser::parse_value(value, self.options.parse.clone())?;
        let convert_options = self
            .options
            .convert
            .clone()
            .with_breadcrumb(file.breadcrumb());
        let converted = DocumentConverter::new(convert_options).convert(&document)?;

        let metadata = file.metadata();
        let mut records = Vec::with_capacity(converted.pages.len());

        for (index, page) in converted.pages.into_iter().enumerate() {
            let record_id = format!("{}/{}", id, index);

            let mut front_matter = file.front_matter();
            front_matter.insert("title", page.title.clone());
            front_matter.insert("slug", page.slug.clone());
            let mut markdown = render_markdown(&page.content, &front_matter, &self.options.render)?;

            if let Some(materializer) = self.images.as_ref().filter(|_| self.options.replace_images) {
                if !page.images.is_empty() {
                    let stored = materializer.materialize(&record_id, &page.images)?;
                    markdown = replace_image_sources(&markdown, &stored);
                }
            }

            records.push(Record::Page(PageRecord {
                id: record_id,
                slug: page.slug.clone(),
                title: page.title.clone(),
                page,
                markdown,
                metadata: metadata.clone(),
                descriptor: file.clone(),
            }));
        }

        Ok(records)
    }

    fn process_spreadsheet(&self, file: &FileDescriptor) -> Result<Vec<Record>> {
        let id = file_id(file)?;
        let values = self.sheets.fetch_sheets(id)?;
        if values.is_empty() {
            return Err(Error::EmptyResponse(id.to_string()));
        }

        let metadata = file.metadata();
        Ok(values
            .iter()
            .map(|values| {
                let sheet = Sheet::from_values(values);
                Record::Sheet(SheetRecord {
                    id: format!("{}/{}", id, sheet.name),
                    name: sheet.name,
                    rows: sheet.rows,
                    metadata: metadata.clone(),
                    descriptor: file.clone(),
                })
            })
            .collect())
    }
}

fn file_id(file: &FileDescriptor) -> Result<&str> {
    file.id().ok_or_else(|| Error::MissingField("id".into()))
}
