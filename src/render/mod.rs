//! Rendering of converted content to markdown and JSON.

mod frontmatter;
mod json;
mod markdown;
mod options;

pub use frontmatter::FrontMatter;
pub use json::{to_json, JsonFormat};
pub use markdown::{render_markdown, render_page, MarkdownRenderer};
pub use options::RenderOptions;
