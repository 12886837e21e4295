//! Classification of table blocks into code blocks or table nodes.

use super::style::{join_pieces, style_text, LineBreaks, StyleContext, VERTICAL_TAB};
use super::ConvertOptions;
use crate::error::{Error, Result};
use crate::model::{ContentNode, InlineElement, Paragraph, Table, TableCell};

/// Classify a table block.
///
/// A single-cell table is how code is laid out in the source documents and
/// becomes a fenced code block; any other shape becomes a header + rows table.
/// A table without rows is reported as a missing field.
pub fn classify_table(table: &Table, options: &ConvertOptions) -> Result<ContentNode> {
    if table.is_single_cell() {
        let cell = &table.rows[0].cells[0];
        return Ok(ContentNode::CodeBlock {
            lang: options.code_language.clone(),
            lines: code_lines(cell),
        });
    }

    let mut rows = table
        .rows
        .iter()
        .map(|row| {
            row.cells
                .iter()
                .map(|cell| flatten_cell(cell, &options.line_break_marker))
                .collect::<Vec<_>>()
        });

    let headers = rows
        .next()
        .ok_or_else(|| Error::MissingField("table.tableRows".into()))?;
    Ok(ContentNode::Table {
        headers,
        rows: rows.collect(),
    })
}

/// Raw text of a code cell split into lines.
///
/// No styling or escaping is applied. Paragraph ends and soft breaks both
/// separate lines.
pub fn code_lines(cell: &TableCell) -> Vec<String> {
    let text = cell
        .content
        .iter()
        .map(|p| {
            let raw = p.plain_text();
            match raw.strip_suffix('\n') {
                Some(stripped) => stripped.to_string(),
                None => raw,
            }
        })
        .collect::<Vec<_>>()
        .join(&VERTICAL_TAB.to_string());

    text.split(VERTICAL_TAB).map(str::to_string).collect()
}

/// Styled, single-line text of a table cell.
pub fn flatten_cell(cell: &TableCell, marker: &str) -> String {
    let ctx = StyleContext {
        heading: false,
        line_breaks: LineBreaks::Break(marker),
    };

    cell.content
        .iter()
        .map(|p| flatten_paragraph(p, ctx))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(marker)
        .trim()
        .to_string()
}

fn flatten_paragraph(paragraph: &Paragraph, ctx: StyleContext<'_>) -> String {
    let pieces: Vec<String> = paragraph
        .elements
        .iter()
        .filter_map(|el| match el {
            InlineElement::TextRun(run) if !run.is_paragraph_end() => Some(style_text(run, ctx)),
            _ => None,
        })
        .collect();
    join_pieces(&pieces)
}
