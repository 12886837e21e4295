//! Paragraph and text-level types.

use serde::{Deserialize, Serialize};

/// A paragraph of inline content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph style
    pub style: ParagraphStyle,

    /// List membership if this paragraph is a list item
    pub bullet: Option<Bullet>,

    /// Inline elements in order
    pub elements: Vec<InlineElement>,
}

impl Paragraph {
    /// Create a new empty paragraph with the given named style.
    pub fn new(named_style: NamedStyle) -> Self {
        Self {
            style: ParagraphStyle {
                named_style,
                ..Default::default()
            },
            bullet: None,
            elements: Vec::new(),
        }
    }

    /// Create a normal paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new(NamedStyle::NormalText);
        p.add_text(text);
        p
    }

    /// Create a heading paragraph (level is clamped to 1-6).
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        let mut p = Self::new(NamedStyle::heading(level));
        p.add_text(text);
        p
    }

    /// Create a bulleted list item.
    pub fn bullet(
        list_id: impl Into<String>,
        nesting_level: Option<u32>,
        text: impl Into<String>,
    ) -> Self {
        let mut p = Self::with_text(text);
        p.bullet = Some(Bullet {
            list_id: list_id.into(),
            nesting_level,
        });
        p
    }

    /// Set the heading id and return self.
    pub fn with_heading_id(mut self, heading_id: impl Into<String>) -> Self {
        self.style.heading_id = Some(heading_id.into());
        self
    }

    /// Set the start indent magnitude and return self.
    pub fn with_indent(mut self, magnitude: f64) -> Self {
        self.style.indent_start = Some(magnitude);
        self
    }

    /// Add plain text.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.elements.push(InlineElement::TextRun(TextRun::new(text)));
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.elements.push(InlineElement::TextRun(run));
    }

    /// Add a reference to an embedded object.
    pub fn add_inline_object(&mut self, object_id: impl Into<String>) {
        self.elements.push(InlineElement::InlineObject {
            object_id: object_id.into(),
        });
    }

    /// Get the raw concatenated text of all runs.
    pub fn plain_text(&self) -> String {
        self.elements
            .iter()
            .filter_map(|el| match el {
                InlineElement::TextRun(run) => Some(run.content.as_str()),
                InlineElement::InlineObject { .. } => None,
            })
            .collect()
    }

    /// The first text run, if any.
    pub fn first_run(&self) -> Option<&TextRun> {
        self.elements.iter().find_map(|el| match el {
            InlineElement::TextRun(run) => Some(run),
            InlineElement::InlineObject { .. } => None,
        })
    }

    /// Check if this is a list item.
    pub fn is_list_item(&self) -> bool {
        self.bullet.is_some()
    }
}

/// Paragraph styling properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Named style of the paragraph
    pub named_style: NamedStyle,

    /// Heading id, the link target used by the table of contents
    pub heading_id: Option<String>,

    /// Start indent magnitude in points, if the paragraph defines one
    pub indent_start: Option<f64>,
}

/// Named paragraph styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NamedStyle {
    /// Body text
    #[default]
    NormalText,
    /// Document title
    Title,
    /// Subtitle
    Subtitle,
    /// Heading 1
    #[serde(rename = "HEADING_1")]
    Heading1,
    /// Heading 2
    #[serde(rename = "HEADING_2")]
    Heading2,
    /// Heading 3
    #[serde(rename = "HEADING_3")]
    Heading3,
    /// Heading 4
    #[serde(rename = "HEADING_4")]
    Heading4,
    /// Heading 5
    #[serde(rename = "HEADING_5")]
    Heading5,
    /// Heading 6
    #[serde(rename = "HEADING_6")]
    Heading6,
    /// Any style name this crate does not know
    #[serde(other)]
    Unknown,
}

impl NamedStyle {
    /// Parse a style name such as `"HEADING_2"`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "NORMAL_TEXT" => NamedStyle::NormalText,
            "TITLE" => NamedStyle::Title,
            "SUBTITLE" => NamedStyle::Subtitle,
            "HEADING_1" => NamedStyle::Heading1,
            "HEADING_2" => NamedStyle::Heading2,
            "HEADING_3" => NamedStyle::Heading3,
            "HEADING_4" => NamedStyle::Heading4,
            "HEADING_5" => NamedStyle::Heading5,
            "HEADING_6" => NamedStyle::Heading6,
            _ => NamedStyle::Unknown,
        }
    }

    /// Heading style for a level (clamped to 1-6).
    pub fn heading(level: u8) -> Self {
        match level.clamp(1, 6) {
            1 => NamedStyle::Heading1,
            2 => NamedStyle::Heading2,
            3 => NamedStyle::Heading3,
            4 => NamedStyle::Heading4,
            5 => NamedStyle::Heading5,
            _ => NamedStyle::Heading6,
        }
    }

    /// Map the style to the content tag it produces.
    ///
    /// Styles without a mapping (title, heading 6, unknown) yield `None`
    /// and their paragraphs are skipped.
    pub fn tag(self) -> Option<Tag> {
        match self {
            NamedStyle::NormalText => Some(Tag::Paragraph),
            NamedStyle::Subtitle => Some(Tag::Quote),
            NamedStyle::Heading1 => Some(Tag::Heading(1)),
            NamedStyle::Heading2 => Some(Tag::Heading(2)),
            NamedStyle::Heading3 => Some(Tag::Heading(3)),
            NamedStyle::Heading4 => Some(Tag::Heading(4)),
            NamedStyle::Heading5 => Some(Tag::Heading(5)),
            NamedStyle::Title | NamedStyle::Heading6 | NamedStyle::Unknown => None,
        }
    }
}

/// The kind of content node a styled paragraph becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Plain paragraph
    Paragraph,
    /// Block quote
    Quote,
    /// Heading with level 1-5
    Heading(u8),
}

impl Tag {
    /// Whether bold emphasis is suppressed for this tag.
    pub fn is_heading_like(self) -> bool {
        !matches!(self, Tag::Paragraph)
    }
}

/// List membership of a paragraph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    /// Id of the list this item belongs to
    pub list_id: String,

    /// Nesting level; absent means top level
    pub nesting_level: Option<u32>,
}

/// Inline content within a paragraph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineElement {
    /// A run of text with consistent styling
    TextRun(TextRun),

    /// A reference to an embedded object (image)
    InlineObject {
        /// Id into the document's inline object registry
        object_id: String,
    },
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextRun {
    /// The raw text content, including any trailing newline
    pub content: String,

    /// Text styling
    pub style: TextStyle,
}

impl TextRun {
    /// Create a new text run with default style.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: TextStyle::default(),
        }
    }

    /// Create a text run with an explicit style.
    pub fn styled(content: impl Into<String>, style: TextStyle) -> Self {
        Self {
            content: content.into(),
            style,
        }
    }

    /// Create a bold text run.
    pub fn bold(content: impl Into<String>) -> Self {
        Self::styled(
            content,
            TextStyle {
                bold: true,
                ..Default::default()
            },
        )
    }

    /// Create an italic text run.
    pub fn italic(content: impl Into<String>) -> Self {
        Self::styled(
            content,
            TextStyle {
                italic: true,
                ..Default::default()
            },
        )
    }

    /// Attach a hyperlink and return self.
    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        self.style.link = Some(Link {
            url: Some(url.into()),
            heading_id: None,
        });
        self
    }

    /// Attach an internal heading link and return self.
    pub fn with_heading_link(mut self, heading_id: impl Into<String>) -> Self {
        self.style.link = Some(Link {
            url: None,
            heading_id: Some(heading_id.into()),
        });
        self
    }

    /// Whether the run is only a paragraph terminator.
    pub fn is_paragraph_end(&self) -> bool {
        self.content == "\n"
    }
}

/// Text styling properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Underlined text
    pub underline: bool,

    /// Strikethrough text
    pub strikethrough: bool,

    /// Hyperlink target
    pub link: Option<Link>,
}

impl TextStyle {
    /// Check if any emphasis is applied.
    pub fn has_styling(&self) -> bool {
        self.bold || self.italic || self.underline || self.strikethrough
    }
}

/// A hyperlink, either external or to a heading in the same document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// External URL
    pub url: Option<String>,

    /// Target heading id for internal links
    pub heading_id: Option<String>,
}
