//! Merging of consecutive bulleted paragraphs into list nodes.

use super::style::{join_pieces, style_text, StyleContext};
use super::resolve_image;
use crate::error::Result;
use crate::model::{Bullet, ContentNode, Document, InlineElement, Paragraph};

/// Folds bulleted paragraphs into `List` content nodes.
///
/// Markdown lists nested inside a single item cannot be expressed by the
/// flat `items` sequence, so nested bullets are appended to the previous
/// item as indented continuation lines.
pub struct ListAccumulator<'a> {
    document: &'a Document,
}

impl<'a> ListAccumulator<'a> {
    /// Create an accumulator resolving lists and images against `document`.
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// Render the inline elements of a list item to a single line.
    pub fn item_text(&self, paragraph: &Paragraph) -> Result<String> {
        let mut pieces = Vec::with_capacity(paragraph.elements.len());
        for element in &paragraph.elements {
            match element {
                InlineElement::InlineObject { object_id } => {
                    if let Some(image) = resolve_image(self.document, object_id)? {
                        pieces.push(image.to_markdown());
                    }
                }
                InlineElement::TextRun(run) => {
                    pieces.push(style_text(run, StyleContext::body()));
                }
            }
        }
        Ok(join_pieces(&pieces))
    }

    /// Add a bulleted paragraph to `content`.
    ///
    /// `continues` is true when the immediately preceding body block was a
    /// bullet of the same list.
    pub fn push(
        &self,
        content: &mut Vec<ContentNode>,
        paragraph: &Paragraph,
        bullet: &Bullet,
        continues: bool,
    ) -> Result<()> {
        let ordered = self.document.is_ordered_list(&bullet.list_id);
        let text = self.item_text(paragraph)?;

        if continues {
            if let Some(ContentNode::List { items, .. }) = content.last_mut() {
                match (bullet.nesting_level, items.last_mut()) {
                    (Some(level), Some(last)) if level > 0 => {
                        last.push('\n');
                        last.push_str(&nested_prefix(level, ordered));
                        last.push_str(&text);
                    }
                    _ => items.push(text),
                }
                return Ok(());
            }
            log::debug!(
                "List {} continues but the last node is not a list, starting a new one",
                bullet.list_id
            );
        }

        content.push(ContentNode::List {
            ordered,
            items: vec![text],
        });
        Ok(())
    }
}

/// Indentation plus marker for a nested continuation line.
pub fn nested_prefix(level: u32, ordered: bool) -> String {
    let marker = if ordered { "1. " } else { "- " };
    format!("{}{}", "  ".repeat(level as usize), marker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InlineObject, ListProperties, TextRun};

    fn doc() -> Document {
        let mut doc = Document::new("Lists");
        doc.add_list("ul", ListProperties::unordered());
        doc.add_list("ol", ListProperties::ordered());
        doc.add_inline_object("img", InlineObject::image("https://img/x.png", "X", "An x"));
        doc
    }

    fn push(
        acc: &ListAccumulator<'_>,
        content: &mut Vec<ContentNode>,
        p: &Paragraph,
        continues: bool,
    ) {
        let bullet = p.bullet.clone().unwrap();
        acc.push(content, p, &bullet, continues).unwrap();
    }

    #[test]
    fn test_nested_continuation() {
        let doc = doc();
        let acc = ListAccumulator::new(&doc);
        let mut content = Vec::new();

        push(&acc, &mut content, &Paragraph::bullet("ul", Some(0), "A\n"), false);
        push(&acc, &mut content, &Paragraph::bullet("ul", Some(1), "B\n"), true);
        push(&acc, &mut content, &Paragraph::bullet("ul", Some(0), "C\n"), true);

        assert_eq!(
            content,
            vec![ContentNode::List {
                ordered: false,
                items: vec!["A\n  - B".to_string(), "C".to_string()],
            }]
        );
    }

    #[test]
    fn test_ordered_nested_prefix() {
        let doc = doc();
        let acc = ListAccumulator::new(&doc);
        let mut content = Vec::new();

        push(&acc, &mut content, &Paragraph::bullet("ol", None, "one"), false);
        push(&acc, &mut content, &Paragraph::bullet("ol", Some(2), "deep"), true);

        let ContentNode::List { ordered, items } = &content[0] else {
            panic!("Expected list");
        };
        assert!(ordered);
        assert_eq!(items, &vec!["one\n    1. deep".to_string()]);
    }

    #[test]
    fn test_new_list_when_not_continuing() {
        let doc = doc();
        let acc = ListAccumulator::new(&doc);
        let mut content = Vec::new();

        push(&acc, &mut content, &Paragraph::bullet("ul", None, "a"), false);
        push(&acc, &mut content, &Paragraph::bullet("ul", None, "b"), false);
        assert_eq!(content.len(), 2);
    }

    #[test]
    fn test_item_text_with_image_and_punctuation() {
        let doc = doc();
        let acc = ListAccumulator::new(&doc);

        let mut p = Paragraph::bullet("ul", None, "See");
        p.add_inline_object("img");
        p.add_run(TextRun::bold("here"));
        p.add_text(".\n");

        assert_eq!(
            acc.item_text(&p).unwrap(),
            "See ![An x](https://img/x.png \"X\") **here**."
        );
    }

    #[test]
    fn test_item_text_image_without_title() {
        let mut doc = doc();
        doc.add_inline_object("bare", InlineObject::image("https://img/y.png", "", "A y"));
        let acc = ListAccumulator::new(&doc);

        let mut p = Paragraph::bullet("ul", None, "Look");
        p.add_inline_object("bare");

        assert_eq!(acc.item_text(&p).unwrap(), "Look ![A y](https://img/y.png)");
    }

    #[test]
    fn test_item_text_missing_object() {
        let doc = doc();
        let acc = ListAccumulator::new(&doc);

        let mut p = Paragraph::bullet("ul", None, "broken");
        p.add_inline_object("nope");
        assert!(acc.item_text(&p).is_err());
    }
}
