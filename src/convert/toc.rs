//! Table of contents extraction.

use super::slugify;
use crate::model::{TableOfContents, TocEntry, TocItem};
use std::collections::HashMap;

/// Start indent of a second-level table of contents line, in points.
///
/// Only lines at exactly this indent become nested items; deeper levels are
/// dropped.
pub const NESTED_ITEM_INDENT: f64 = 18.0;

/// Build the ordered heading registry from a table of contents field.
///
/// Lines without a start indent open a new top-level entry; lines indented
/// by exactly [`NESTED_ITEM_INDENT`] are attached to the most recent entry.
/// Entries are keyed by title: a repeated title overwrites the earlier
/// entry in place and becomes the current entry again.
pub fn extract_toc(toc: &TableOfContents) -> Vec<TocEntry> {
    let mut entries: Vec<TocEntry> = Vec::new();
    let mut by_title: HashMap<String, usize> = HashMap::new();
    let mut current: Option<usize> = None;

    for line in &toc.content {
        let Some(run) = line.first_run() else {
            continue;
        };
        let text = run.content.trim_end_matches(['\n', '\r']).to_string();
        let heading_id = run
            .style
            .link
            .as_ref()
            .and_then(|link| link.heading_id.clone());
        let slug = slugify(&text);

        match line.style.indent_start {
            None => {
                let entry = TocEntry::new(text.clone(), slug, heading_id);
                let existing = by_title.get(&text).copied();
                let index = match existing {
                    Some(index) => {
                        entries[index] = entry;
                        index
                    }
                    None => {
                        entries.push(entry);
                        by_title.insert(text, entries.len() - 1);
                        entries.len() - 1
                    }
                };
                current = Some(index);
            }
            Some(indent) if indent == NESTED_ITEM_INDENT => match current {
                Some(index) => entries[index].add_item(TocItem {
                    text,
                    slug,
                    heading_id,
                }),
                None => log::debug!("Table of contents item {:?} has no parent entry", text),
            },
            Some(indent) => {
                log::debug!("Ignoring table of contents line {:?} at indent {}", text, indent);
            }
        }
    }

    entries
}

/// Whether a heading id is a page boundary: linked from any entry or item.
pub fn is_registered(toc: &[TocEntry], heading_id: &str) -> bool {
    toc.iter().any(|entry| entry.references(heading_id))
}
