//! Benchmarks for ungdocs conversion performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks convert synthetic documents with a table of contents,
//! nested lists and tables.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};

fn text_paragraph(style: &str, text: &str, heading_id: Option<&str>) -> Value {
    let mut paragraph_style = json!({ "namedStyleType": style });
    if let Some(id) = heading_id {
        paragraph_style["headingId"] = json!(id);
    }
    json!({ "paragraph": {
        "paragraphStyle": paragraph_style,
        "elements": [{ "textRun": { "content": format!("{}\n", text), "textStyle": {} } }]
    }})
}

/// Creates a synthetic document with the given number of TOC sections.
fn create_test_document(section_count: usize) -> Value {
    let toc_lines: Vec<Value> = (0..section_count)
        .map(|i| {
            json!({ "paragraph": {
                "elements": [{ "textRun": {
                    "content": format!("Section {}\n", i),
                    "textStyle": { "link": { "headingId": format!("h.{}", i) } }
                }}]
            }})
        })
        .collect();

    let mut content = vec![json!({ "tableOfContents": { "content": toc_lines } })];

    for i in 0..section_count {
        content.push(text_paragraph("HEADING_1", &format!("Section {}", i), Some(&format!("h.{}", i))));
        for p in 0..10 {
            content.push(text_paragraph(
                "NORMAL_TEXT",
                &format!("Paragraph {} of section {} with some_escaped <text> .", p, i),
                None,
            ));
        }
        for level in [0, 1, 2, 0] {
            content.push(json!({ "paragraph": {
                "bullet": { "listId": "kix.list", "nestingLevel": level },
                "elements": [{ "textRun": { "content": "List item\n", "textStyle": { "bold": true } } }]
            }}));
        }
        content.push(json!({ "table": { "tableRows": [
            { "tableCells": [
                { "content": [text_paragraph("NORMAL_TEXT", "Key", None)] },
                { "content": [text_paragraph("NORMAL_TEXT", "Value", None)] }
            ]},
            { "tableCells": [
                { "content": [text_paragraph("NORMAL_TEXT", "a", None)] },
                { "content": [text_paragraph("NORMAL_TEXT", "1", None)] }
            ]}
        ]}}));
    }

    json!({
        "title": "Benchmark",
        "body": { "content": content },
        "lists": { "kix.list": { "listProperties": { "nestingLevels": [{}] } } }
    })
}

/// Benchmark parsing at various sizes.
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for section_count in [1, 10, 50].iter() {
        let json = create_test_document(*section_count).to_string();

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| ungdocs::parse_str(black_box(&json)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark conversion and rendering at various sizes.
fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    for section_count in [1, 10, 50].iter() {
        let doc = ungdocs::parse_str(&create_test_document(*section_count).to_string()).unwrap();

        group.bench_function(format!("convert_{}_sections", section_count), |b| {
            b.iter(|| {
                ungdocs::DocumentConverter::default()
                    .convert(black_box(&doc))
                    .unwrap()
            });
        });

        group.bench_function(format!("render_{}_sections", section_count), |b| {
            b.iter(|| {
                ungdocs::Ungdocs::new()
                    .convert(black_box(&doc))
                    .and_then(|result| result.to_markdown())
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_conversion);
criterion_main!(benches);
