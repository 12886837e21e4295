//! Lowering of raw document JSON into `model::Document`.

use super::raw::{
    RawDocument, RawInlineObject, RawList, RawParagraph, RawParagraphElement,
    RawStructuralElement, RawTable, RawTableOfContents,
};
use super::ParseOptions;
use crate::error::{Error, Result};
use crate::model::{
    Block, Bullet, Document, ImageProperties, InlineElement, InlineObject, Link,
    ListProperties, NamedStyle, NestingLevel, Paragraph, ParagraphStyle, Table, TableCell,
    TableOfContents, TableRow, TextRun, TextStyle,
};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Parser for `documents.get` JSON.
///
/// # Example
///
/// ```no_run
/// use ungdocs::parser::{DocsParser, ParseOptions};
///
/// let parser = DocsParser::open_with_options("handbook.json", ParseOptions::new().lenient())?;
/// let document = parser.parse()?;
/// println!("{} blocks", document.body.len());
/// # Ok::<(), ungdocs::Error>(())
/// ```
pub struct DocsParser {
    raw: RawDocument,
    options: ParseOptions,
}

impl DocsParser {
    /// Open a JSON file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a JSON file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader_with_options(BufReader::new(file), options)
    }

    /// Read JSON from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Read JSON from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(reader: R, options: ParseOptions) -> Result<Self> {
        let raw = serde_json::from_reader(reader)?;
        Ok(Self { raw, options })
    }

    /// Parse JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_json_str_with_options(json, ParseOptions::default())
    }

    /// Parse JSON text with custom options.
    pub fn from_json_str_with_options(json: &str, options: ParseOptions) -> Result<Self> {
        let raw = serde_json::from_str(json)?;
        Ok(Self { raw, options })
    }

    /// Use an already decoded JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Self::from_value_with_options(value, ParseOptions::default())
    }

    /// Use an already decoded JSON value with custom options.
    pub fn from_value_with_options(
        value: serde_json::Value,
        options: ParseOptions,
    ) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::Malformed(
                "expected a JSON object at the document root".into(),
            ));
        }
        let raw = serde_json::from_value(value)?;
        Ok(Self { raw, options })
    }

    /// Lower the raw tree into a typed document.
    pub fn parse(self) -> Result<Document> {
        let DocsParser { raw, options } = self;

        let content = raw
            .body
            .ok_or_else(|| Error::MissingField("body".into()))?
            .content
            .ok_or_else(|| Error::MissingField("body.content".into()))?;

        let mut body = Vec::with_capacity(content.len());
        for (index, element) in content.into_iter().enumerate() {
            match lower_block(element) {
                Ok(Some(block)) => body.push(block),
                Ok(None) => {}
                Err(e) if options.is_lenient() => {
                    log::warn!("Skipping malformed block {}: {}", index, e);
                }
                Err(e) => return Err(e),
            }
        }

        let inline_objects = raw
            .inline_objects
            .into_iter()
            .map(|(id, object)| (id, lower_inline_object(object)))
            .collect();

        let lists = raw
            .lists
            .into_iter()
            .map(|(id, list)| (id, lower_list(list)))
            .collect();

        Ok(Document {
            title: raw.title.unwrap_or_default(),
            body,
            inline_objects,
            lists,
        })
    }
}

/// Lower one body element. Elements that are neither paragraph, table
/// nor table of contents (section breaks) yield `None`.
fn lower_block(element: RawStructuralElement) -> Result<Option<Block>> {
    if let Some(toc) = element.table_of_contents {
        return lower_toc(toc).map(|toc| Some(Block::TableOfContents(toc)));
    }
    if let Some(paragraph) = element.paragraph {
        return lower_paragraph(paragraph).map(|p| Some(Block::Paragraph(p)));
    }
    if let Some(table) = element.table {
        return lower_table(table).map(|t| Some(Block::Table(t)));
    }
    log::debug!("Ignoring body element without paragraph, table or table of contents");
    Ok(None)
}

fn lower_paragraph(raw: RawParagraph) -> Result<Paragraph> {
    let style = raw.paragraph_style.unwrap_or_default();
    let style = ParagraphStyle {
        named_style: style
            .named_style_type
            .as_deref()
            .map(NamedStyle::from_name)
            .unwrap_or(NamedStyle::Unknown),
        heading_id: style.heading_id,
        indent_start: style.indent_start.and_then(|d| d.magnitude),
    };

    let bullet = match raw.bullet {
        Some(bullet) => Some(Bullet {
            list_id: bullet
                .list_id
                .ok_or_else(|| Error::MissingField("paragraph.bullet.listId".into()))?,
            nesting_level: bullet.nesting_level,
        }),
        None => None,
    };

    let mut elements = Vec::new();
    for element in raw.elements.unwrap_or_default() {
        if let Some(el) = lower_element(element)? {
            elements.push(el);
        }
    }

    Ok(Paragraph {
        style,
        bullet,
        elements,
    })
}

fn lower_element(raw: RawParagraphElement) -> Result<Option<InlineElement>> {
    if let Some(run) = raw.text_run {
        let style = run.text_style.unwrap_or_default();
        return Ok(Some(InlineElement::TextRun(TextRun {
            content: run.content.unwrap_or_default(),
            style: TextStyle {
                bold: style.bold.unwrap_or(false),
                italic: style.italic.unwrap_or(false),
                underline: style.underline.unwrap_or(false),
                strikethrough: style.strikethrough.unwrap_or(false),
                link: style.link.map(|link| Link {
                    url: link.url,
                    heading_id: link.heading_id,
                }),
            },
        })));
    }
    if let Some(object) = raw.inline_object_element {
        let object_id = object.inline_object_id.ok_or_else(|| {
            Error::MissingField("inlineObjectElement.inlineObjectId".into())
        })?;
        return Ok(Some(InlineElement::InlineObject { object_id }));
    }
    // Page breaks, footnote references, equations, ...
    Ok(None)
}

fn lower_table(raw: RawTable) -> Result<Table> {
    let rows = raw
        .table_rows
        .ok_or_else(|| Error::MissingField("table.tableRows".into()))?;

    let mut table = Table::new();
    for row in rows {
        let cells = row
            .table_cells
            .ok_or_else(|| Error::MissingField("tableRow.tableCells".into()))?;
        let mut lowered = Vec::with_capacity(cells.len());
        for cell in cells {
            let content = cell
                .content
                .ok_or_else(|| Error::MissingField("tableCell.content".into()))?;
            lowered.push(TableCell::with_content(lower_paragraphs(content)?));
        }
        table.add_row(TableRow::new(lowered));
    }
    Ok(table)
}

fn lower_toc(raw: RawTableOfContents) -> Result<TableOfContents> {
    let content = raw
        .content
        .ok_or_else(|| Error::MissingField("tableOfContents.content".into()))?;
    Ok(TableOfContents {
        content: lower_paragraphs(content)?,
    })
}

/// Keep only the paragraphs of a nested structural element list.
fn lower_paragraphs(content: Vec<RawStructuralElement>) -> Result<Vec<Paragraph>> {
    content
        .into_iter()
        .filter_map(|element| element.paragraph)
        .map(lower_paragraph)
        .collect()
}

fn lower_inline_object(raw: RawInlineObject) -> InlineObject {
    let image = raw
        .inline_object_properties
        .and_then(|props| props.embedded_object)
        .and_then(|embedded| {
            embedded.image_properties.map(|image| ImageProperties {
                source: image.content_uri.unwrap_or_default(),
                title: embedded.title.unwrap_or_default(),
                description: embedded.description.unwrap_or_default(),
            })
        });
    InlineObject { image }
}

fn lower_list(raw: RawList) -> ListProperties {
    ListProperties {
        nesting_levels: raw
            .list_properties
            .map(|props| {
                props
                    .nesting_levels
                    .into_iter()
                    .map(|level| NestingLevel {
                        glyph_type: level.glyph_type,
                    })
                    .collect()
            })
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Result<Document> {
        DocsParser::from_value(value)?.parse()
    }

    #[test]
    fn test_parse_paragraphs_and_styles() {
        let doc = parse(json!({
            "title": "Guide",
            "body": { "content": [
                { "sectionBreak": {} },
                { "paragraph": {
                    "paragraphStyle": { "namedStyleType": "HEADING_1", "headingId": "h.abc" },
                    "elements": [
                        { "textRun": { "content": "Intro\n", "textStyle": { "bold": true } } }
                    ]
                }},
                { "paragraph": {
                    "paragraphStyle": { "namedStyleType": "NORMAL_TEXT" },
                    "elements": [
                        { "textRun": { "content": "see ", "textStyle": {} } },
                        { "textRun": { "content": "docs", "textStyle": { "link": { "url": "https://x" } } } },
                        { "inlineObjectElement": { "inlineObjectId": "kix.1" } }
                    ]
                }}
            ]},
            "inlineObjects": {
                "kix.1": { "inlineObjectProperties": { "embeddedObject": {
                    "title": "Logo",
                    "imageProperties": { "contentUri": "https://img/logo.png" }
                }}}
            }
        }))
        .unwrap();

        assert_eq!(doc.title, "Guide");
        assert_eq!(doc.body.len(), 2);

        let Block::Paragraph(heading) = &doc.body[0] else {
            panic!("Expected paragraph");
        };
        assert_eq!(heading.style.named_style, NamedStyle::Heading1);
        assert_eq!(heading.style.heading_id.as_deref(), Some("h.abc"));
        assert_eq!(heading.first_run().map(|r| r.style.bold), Some(true));

        let Block::Paragraph(text) = &doc.body[1] else {
            panic!("Expected paragraph");
        };
        assert_eq!(text.elements.len(), 3);
        assert!(matches!(
            &text.elements[2],
            InlineElement::InlineObject { object_id } if object_id == "kix.1"
        ));

        let image = doc.inline_object("kix.1").and_then(|o| o.image.clone()).unwrap();
        assert_eq!(image.source, "https://img/logo.png");
        assert_eq!(image.title, "Logo");
        assert_eq!(image.description, "");
    }

    #[test]
    fn test_parse_lists_and_toc() {
        let doc = parse(json!({
            "title": "Lists",
            "body": { "content": [
                { "tableOfContents": { "content": [
                    { "paragraph": {
                        "paragraphStyle": { "indentStart": { "unit": "PT" } },
                        "elements": [{ "textRun": { "content": "Intro\n",
                            "textStyle": { "link": { "headingId": "h.1" } } } }]
                    }}
                ]}},
                { "paragraph": {
                    "bullet": { "listId": "kix.list", "nestingLevel": 1 },
                    "elements": [{ "textRun": { "content": "item\n" } }]
                }}
            ]},
            "lists": {
                "kix.list": { "listProperties": { "nestingLevels": [{ "glyphType": "DECIMAL" }] } }
            }
        }))
        .unwrap();

        let Block::TableOfContents(toc) = &doc.body[0] else {
            panic!("Expected table of contents");
        };
        assert_eq!(toc.content.len(), 1);
        assert_eq!(toc.content[0].style.indent_start, None);

        assert_eq!(doc.body[1].list_id(), Some("kix.list"));
        assert!(doc.is_ordered_list("kix.list"));
    }

    #[test]
    fn test_parse_table() {
        let doc = parse(json!({
            "title": "T",
            "body": { "content": [
                { "table": { "tableRows": [
                    { "tableCells": [
                        { "content": [{ "paragraph": { "elements": [{ "textRun": { "content": "A\n" } }] } }] },
                        { "content": [] }
                    ]}
                ]}}
            ]}
        }))
        .unwrap();

        let Block::Table(table) = &doc.body[0] else {
            panic!("Expected table");
        };
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column_count(), 2);
        assert!(table.rows[0].cells[1].is_empty());
    }

    #[test]
    fn test_missing_body_content_is_fatal() {
        let err = parse(json!({ "title": "x", "body": {} })).unwrap_err();
        assert!(matches!(err, Error::MissingField(ref f) if f == "body.content"));

        let lenient = DocsParser::from_value_with_options(
            json!({ "title": "x" }),
            ParseOptions::new().lenient(),
        )
        .unwrap()
        .parse();
        assert!(lenient.is_err());
    }

    #[test]
    fn test_missing_table_rows() {
        let value = json!({
            "title": "x",
            "body": { "content": [
                { "table": {} },
                { "paragraph": { "elements": [{ "textRun": { "content": "kept\n" } }] } }
            ]}
        });

        let err = parse(value.clone()).unwrap_err();
        assert!(matches!(err, Error::MissingField(ref f) if f == "table.tableRows"));

        let doc = DocsParser::from_value_with_options(value, ParseOptions::new().lenient())
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(doc.body.len(), 1);
    }

    #[test]
    fn test_missing_cell_content() {
        let err = parse(json!({
            "title": "x",
            "body": { "content": [
                { "table": { "tableRows": [{ "tableCells": [{}] }] } }
            ]}
        }))
        .unwrap_err();
        assert!(matches!(err, Error::MissingField(ref f) if f == "tableCell.content"));
    }

    #[test]
    fn test_invalid_json() {
        let result = DocsParser::from_json_str("{ not json");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_non_object_root() {
        let result = DocsParser::from_value(json!(null));
        assert!(matches!(result, Err(Error::Malformed(_))));
    }

    #[test]
    fn test_missing_style_name_is_unknown() {
        let doc = parse(json!({
            "title": "x",
            "body": { "content": [
                { "paragraph": { "elements": [{ "textRun": { "content": "no style\n" } }] } },
                { "paragraph": {
                    "paragraphStyle": { "headingId": "h.1" },
                    "elements": [{ "textRun": { "content": "id only\n" } }]
                }}
            ]}
        }))
        .unwrap();

        for block in &doc.body {
            let Block::Paragraph(paragraph) = block else {
                panic!("Expected paragraph");
            };
            assert_eq!(paragraph.style.named_style, NamedStyle::Unknown);
            assert_eq!(paragraph.style.named_style.tag(), None);
        }
    }
}
