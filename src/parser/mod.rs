//! Parsing of raw document JSON into the typed document model.

mod docs_parser;
mod options;
mod raw;

pub use docs_parser::DocsParser;
pub use options::{ErrorMode, ParseOptions};

use crate::error::Result;
use crate::model::Document;
use std::path::Path;

/// Parse a document JSON file from disk.
pub fn parse_file<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    DocsParser::open_with_options(path, options)?.parse()
}

/// Parse a document from a JSON string.
pub fn parse_str(json: &str, options: ParseOptions) -> Result<Document> {
    DocsParser::from_json_str_with_options(json, options)?.parse()
}

/// Parse an already decoded JSON value, as returned by a document source.
pub fn parse_value(value: serde_json::Value, options: ParseOptions) -> Result<Document> {
    DocsParser::from_value_with_options(value, options)?.parse()
}
