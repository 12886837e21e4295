//! Markdown rendering of content nodes.

use crate::error::Result;
use crate::model::{ContentNode, Page};

use super::{FrontMatter, RenderOptions};

/// Render content nodes with a front matter header.
pub fn render_markdown(
    content: &[ContentNode],
    front_matter: &FrontMatter,
    options: &RenderOptions,
) -> Result<String> {
    MarkdownRenderer::new(options.clone()).render(content, front_matter)
}

/// Render a page. The page's own title and slug are added to the front matter
/// unless `front_matter` already sets them.
pub fn render_page(page: &Page, front_matter: &FrontMatter, options: &RenderOptions) -> Result<String> {
    let mut merged = FrontMatter::for_page(page);
    merged.extend(front_matter);
    render_markdown(&page.content, &merged, options)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render the front matter header followed by the body.
    ///
    /// Non-empty output ends with exactly one newline.
    pub fn render(&self, content: &[ContentNode], front_matter: &FrontMatter) -> Result<String> {
        let mut sections = Vec::with_capacity(2);

        if self.options.include_frontmatter {
            sections.push(format!("---\n{}\n---", front_matter.to_yaml()?));
        }

        let body = self.render_body(content);
        if !body.is_empty() {
            sections.push(body);
        }

        let mut output = sections.join("\n\n");
        if !output.is_empty() {
            output.push('\n');
        }
        Ok(output)
    }

    /// Render nodes separated by blank lines, without a trailing newline.
    pub fn render_body(&self, content: &[ContentNode]) -> String {
        content
            .iter()
            .map(|node| self.render_node(node))
            .filter(|block| !block.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Render a single node.
    pub fn render_node(&self, node: &ContentNode) -> String {
        match node {
            ContentNode::Heading { level, text } => {
                format!("{} {}", "#".repeat(*level as usize), text)
            }
            ContentNode::Quote { text } => text
                .lines()
                .map(|line| format!("> {}", line))
                .collect::<Vec<_>>()
                .join("\n"),
            ContentNode::Paragraph { text } => text.clone(),
            ContentNode::List { ordered, items } => self.render_list(*ordered, items),
            ContentNode::Table { headers, rows } => render_table(headers, rows),
            ContentNode::CodeBlock { lang, lines } => {
                let mut output = format!("```{}\n", lang);
                for line in lines {
                    output.push_str(line);
                    output.push('\n');
                }
                output.push_str("```");
                output
            }
            ContentNode::Image(image) => image.to_markdown(),
        }
    }

    fn render_list(&self, ordered: bool, items: &[String]) -> String {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if ordered {
                    format!("{}. {}", i + 1, item)
                } else {
                    format!("{} {}", self.options.list_marker, item)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let width = headers.len();
    if width == 0 {
        return String::new();
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(table_row(headers.iter().map(String::as_str)));
    lines.push(table_row(std::iter::repeat("---").take(width)));

    for row in rows {
        let cells = (0..width).map(|i| row.get(i).map(String::as_str).unwrap_or(""));
        lines.push(table_row(cells));
    }

    lines.join("\n")
}

fn table_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let mut line = String::from("|");
    for cell in cells {
        line.push(' ');
        line.push_str(&cell.replace('|', "\\|"));
        line.push_str(" |");
    }
    line
}
