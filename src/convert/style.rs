//! Inline text styling: escaping, line break handling and emphasis.

use crate::model::TextRun;
use regex::Regex;
use std::sync::OnceLock;

/// How embedded line breaks are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBreaks<'a> {
    /// Remove newlines; vertical tabs (soft breaks) become spaces
    Strip,
    /// Replace every break with the given markup token
    Break(&'a str),
}

/// Context a text run is styled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleContext<'a> {
    /// Heading-like paragraphs do not get bold emphasis
    pub heading: bool,
    /// Line break handling
    pub line_breaks: LineBreaks<'a>,
}

impl StyleContext<'static> {
    /// Body text: bold allowed, breaks stripped.
    pub fn body() -> Self {
        Self {
            heading: false,
            line_breaks: LineBreaks::Strip,
        }
    }

    /// Heading text: bold suppressed, breaks stripped.
    pub fn heading() -> Self {
        Self {
            heading: true,
            line_breaks: LineBreaks::Strip,
        }
    }
}

/// Soft line break inside a paragraph or table cell.
pub const VERTICAL_TAB: char = '\u{000B}';

fn code_span_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^`[^`]+`$").expect("valid code span regex"))
}

/// Whether raw run content looks like a single inline code span.
///
/// Narrow heuristic: the trimmed content must start and end with a backtick
/// and contain no other backtick.
pub fn is_code_span(raw: &str) -> bool {
    code_span_regex().is_match(raw.trim())
}

/// Render a text run to inline markdown.
///
/// Steps, in order: escape `_`, `<`, `>` (skipped for code spans), normalize
/// line breaks and trim, italic (or underline) as `_..._`, bold as `**...**`
/// unless in a heading, strikethrough as `~~...~~`, and finally the link.
/// A run that is empty after cleanup renders as an empty string.
///
/// # Examples
///
/// ```
/// use ungdocs::convert::{style_text, StyleContext};
/// use ungdocs::model::TextRun;
///
/// let run = TextRun::bold("a_b").with_link("https://x");
/// assert_eq!(style_text(&run, StyleContext::body()), "[**a\\_b**](https://x)");
/// ```
pub fn style_text(run: &TextRun, ctx: StyleContext<'_>) -> String {
    let raw = run.content.as_str();

    let escaped = if is_code_span(raw) {
        raw.to_string()
    } else {
        escape_inline(raw)
    };

    let mut text = normalize_breaks(&escaped, ctx.line_breaks);
    if text.is_empty() {
        return text;
    }

    let style = &run.style;
    if style.italic || style.underline {
        text = format!("_{}_", text);
    }
    if style.bold && !ctx.heading {
        text = format!("**{}**", text);
    }
    if style.strikethrough {
        text = format!("~~{}~~", text);
    }
    if let Some(url) = style.link.as_ref().and_then(|link| link.url.as_deref()) {
        text = format!("[{}]({})", text, url);
    }

    text
}

/// Escape the characters that would otherwise turn into emphasis or HTML.
fn escape_inline(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '_' | '<' | '>' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}

fn normalize_breaks(text: &str, mode: LineBreaks<'_>) -> String {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let normalized = match mode {
        LineBreaks::Strip => text.replace('\n', "").replace(VERTICAL_TAB, " "),
        LineBreaks::Break(marker) => text.replace(['\n', VERTICAL_TAB], marker),
    };
    normalized.trim().to_string()
}

/// Join styled pieces with single spaces and pull stray spaces off
/// following periods and commas.
pub fn join_pieces<S: AsRef<str>>(pieces: &[S]) -> String {
    let joined = pieces
        .iter()
        .map(AsRef::as_ref)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    tidy_punctuation(&joined)
}

fn tidy_punctuation(text: &str) -> String {
    text.replace(" .", ".").replace(" ,", ",")
}
