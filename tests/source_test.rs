//! Integration tests for the source pipeline.

use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use ungdocs::error::{Error, Result};
use ungdocs::model::Image;
use ungdocs::sheet::SheetValues;
use ungdocs::source::{
    DescriptorOptions, DocumentSource, FileDescriptor, FileLister, ImageMaterializer,
    MaterializedImage, Record, SourceOptions, SourcePipeline, SpreadsheetSource,
};

struct MockLister {
    files: Vec<FileDescriptor>,
}

impl FileLister for MockLister {
    fn list_files(&self) -> Result<Vec<FileDescriptor>> {
        Ok(self.files.clone())
    }
}

struct FailingLister;

impl FileLister for FailingLister {
    fn list_files(&self) -> Result<Vec<FileDescriptor>> {
        Err(Error::fetch("root", "quota exceeded"))
    }
}

struct MockDocuments {
    documents: HashMap<String, Value>,
}

impl DocumentSource for MockDocuments {
    fn fetch_document(&self, id: &str) -> Result<Value> {
        self.documents
            .get(id)
            .cloned()
            .ok_or_else(|| Error::fetch(id, "not found"))
    }
}

struct MockSheets;

impl SpreadsheetSource for MockSheets {
    fn fetch_sheets(&self, id: &str) -> Result<Vec<SheetValues>> {
        if id != "sheet-1" {
            return Ok(Vec::new());
        }
        Ok(vec![SheetValues {
            name: "Team".into(),
            values: vec![
                vec!["name".into(), "role".into()],
                vec!["Ada".into(), "dev".into()],
                vec!["Bob".into(), "ops".into()],
            ],
        }])
    }
}

#[derive(Default)]
struct MockImages {
    calls: Mutex<Vec<String>>,
}

impl ImageMaterializer for MockImages {
    fn materialize(&self, record_id: &str, images: &[Image]) -> Result<Vec<MaterializedImage>> {
        self.calls.lock().unwrap().push(record_id.to_string());
        Ok(images
            .iter()
            .enumerate()
            .map(|(i, image)| {
                MaterializedImage::new(image.source.clone(), format!("images/{}.png", i))
            })
            .collect())
    }
}

fn raw(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("Expected object"),
    }
}

fn descriptor(value: Value, breadcrumb: &[&str]) -> FileDescriptor {
    let breadcrumb: Vec<String> = breadcrumb.iter().map(|s| s.to_string()).collect();
    FileDescriptor::enhance(raw(value), &breadcrumb, &DescriptorOptions::default())
}

fn document_json(title: &str) -> Value {
    json!({
        "title": title,
        "body": { "content": [
            { "tableOfContents": { "content": [
                { "paragraph": { "elements": [{ "textRun": {
                    "content": "One\n", "textStyle": { "link": { "headingId": "h.1" } }
                }}]}},
                { "paragraph": { "elements": [{ "textRun": {
                    "content": "Two\n", "textStyle": { "link": { "headingId": "h.2" } }
                }}]}}
            ]}},
            { "paragraph": {
                "paragraphStyle": { "namedStyleType": "HEADING_1", "headingId": "h.1" },
                "elements": [{ "textRun": { "content": "One\n" } }]
            }},
            { "paragraph": {
                "paragraphStyle": { "namedStyleType": "NORMAL_TEXT" },
                "elements": [
                    { "textRun": { "content": "Look:\n" } },
                    { "inlineObjectElement": { "inlineObjectId": "img" } }
                ]
            }},
            { "paragraph": {
                "paragraphStyle": { "namedStyleType": "HEADING_1", "headingId": "h.2" },
                "elements": [{ "textRun": { "content": "Two\n" } }]
            }},
            { "paragraph": {
                "paragraphStyle": { "namedStyleType": "NORMAL_TEXT" },
                "elements": [{ "textRun": { "content": "Done\n" } }]
            }}
        ]},
        "inlineObjects": {
            "img": { "inlineObjectProperties": { "embeddedObject": {
                "imageProperties": { "contentUri": "https://lh3.example.com/abc" }
            }}}
        }
    })
}

fn pipeline(files: Vec<FileDescriptor>, options: SourceOptions) -> SourcePipeline {
    let mut documents = HashMap::new();
    documents.insert("doc-1".to_string(), document_json("Guide"));
    documents.insert("doc-empty".to_string(), Value::Null);

    SourcePipeline::new(
        Arc::new(MockLister { files }),
        Arc::new(MockDocuments { documents }),
        Arc::new(MockSheets),
        options,
    )
}

fn files() -> Vec<FileDescriptor> {
    vec![
        descriptor(
            json!({
                "id": "doc-1",
                "name": "Getting Started",
                "mimeType": "application/vnd.google-apps.document",
                "description": "{\"collection\": \"guides\"}",
                "createdTime": "2024-01-02T03:04:05Z",
                "starred": true
            }),
            &["Docs"],
        ),
        descriptor(
            json!({
                "id": "sheet-1",
                "name": "People",
                "mimeType": "application/vnd.google-apps.spreadsheet"
            }),
            &[],
        ),
        descriptor(
            json!({ "id": "folder-1", "name": "Docs", "mimeType": "application/vnd.google-apps.folder" }),
            &[],
        ),
    ]
}

#[test]
fn test_pipeline_records() {
    let report = pipeline(files(), SourceOptions::default()).run().unwrap();

    assert!(report.is_complete());
    assert_eq!(report.skipped, 1);

    let pages: Vec<_> = report.pages().collect();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].id, "doc-1/0");
    assert_eq!(pages[1].id, "doc-1/1");
    assert_eq!(pages[0].title, "One");
    assert_eq!(pages[0].metadata.path.as_deref(), Some("/docs/getting-started"));
    assert_eq!(pages[0].metadata.collection.as_deref(), Some("guides"));
    assert!(pages[0].metadata.starred);
    assert!(pages[0].metadata.created.is_some());

    let markdown = &pages[0].markdown;
    assert!(markdown.starts_with("---\n"));
    assert!(markdown.contains("collection: guides\n"));
    assert!(markdown.contains("slug: one\n"));
    assert!(markdown.contains("title: One\n"));
    assert!(markdown.contains("![](https://lh3.example.com/abc)"));

    let sheets: Vec<_> = report.sheets().collect();
    assert_eq!(sheets.len(), 1);
    assert_eq!(sheets[0].id, "sheet-1/Team");
    assert_eq!(sheets[0].rows.len(), 2);
    assert_eq!(sheets[0].rows[1].get("role"), Some(&json!("ops")));
    assert_eq!(sheets[0].rows[1].get("index"), Some(&json!(1)));
}

#[test]
fn test_pipeline_sequential_matches_parallel() {
    let parallel = pipeline(files(), SourceOptions::default()).run().unwrap();
    let sequential = pipeline(files(), SourceOptions::new().with_parallel(false))
        .run()
        .unwrap();

    assert_eq!(parallel.records, sequential.records);
}

#[test]
fn test_pipeline_replaces_images() {
    let images = Arc::new(MockImages::default());
    let report = pipeline(files(), SourceOptions::default())
        .with_image_materializer(images.clone())
        .run()
        .unwrap();

    let first = report.pages().next().unwrap();
    assert!(first.markdown.contains("![](images/0.png)"));
    assert!(!first.markdown.contains("lh3.example.com"));
    assert_eq!(*images.calls.lock().unwrap(), vec!["doc-1/0".to_string()]);

    let kept = pipeline(files(), SourceOptions::new().with_replace_images(false))
        .with_image_materializer(Arc::new(MockImages::default()))
        .run()
        .unwrap();
    assert!(kept
        .pages()
        .next()
        .unwrap()
        .markdown
        .contains("lh3.example.com"));
}

#[test]
fn test_pipeline_collects_failures() {
    let mut listed = files();
    listed.push(descriptor(
        json!({ "id": "doc-missing", "name": "Gone", "mimeType": "application/vnd.google-apps.document" }),
        &[],
    ));
    listed.push(descriptor(
        json!({ "id": "doc-empty", "name": "Empty", "mimeType": "application/vnd.google-apps.document" }),
        &[],
    ));
    listed.push(descriptor(
        json!({ "id": "sheet-2", "name": "Blank", "mimeType": "application/vnd.google-apps.spreadsheet" }),
        &[],
    ));

    let report = pipeline(listed, SourceOptions::default()).run().unwrap();

    assert_eq!(report.records.len(), 3);
    assert_eq!(report.failures.len(), 3);
    assert!(matches!(report.failures[0].error, Error::Fetch { .. }));
    assert_eq!(report.failures[0].file_id.as_deref(), Some("doc-missing"));
    assert!(matches!(report.failures[1].error, Error::EmptyResponse(_)));
    assert!(matches!(report.failures[2].error, Error::EmptyResponse(_)));
}

#[test]
fn test_pipeline_listing_failure_is_fatal() {
    let pipeline = SourcePipeline::new(
        Arc::new(FailingLister),
        Arc::new(MockDocuments {
            documents: HashMap::new(),
        }),
        Arc::new(MockSheets),
        SourceOptions::default(),
    );
    assert!(pipeline.run().is_err());
}

#[test]
fn test_record_serializes_with_type_tag() {
    let report = pipeline(files(), SourceOptions::default()).run().unwrap();
    let value = serde_json::to_value(&report.records[0]).unwrap();
    assert_eq!(value["type"], json!("page"));
    assert_eq!(value["descriptor"]["name"], json!("Getting Started"));
    assert!(matches!(report.records[2], Record::Sheet(_)));
}

struct BrokenImages;

impl ImageMaterializer for BrokenImages {
    fn materialize(&self, _record_id: &str, images: &[Image]) -> Result<Vec<MaterializedImage>> {
        Err(Error::ImageMaterialization {
            uri: images[0].source.clone(),
            message: "disk full".into(),
        })
    }
}

#[test]
fn test_image_failure_fails_whole_document() {
    let report = pipeline(files(), SourceOptions::default())
        .with_image_materializer(Arc::new(BrokenImages))
        .run()
        .unwrap();

    assert_eq!(report.pages().count(), 0);
    assert_eq!(report.sheets().count(), 1);
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(
        &report.failures[0].error,
        Error::ImageMaterialization { uri, .. } if uri == "https://lh3.example.com/abc"
    ));
}
