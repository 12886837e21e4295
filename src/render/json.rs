//! JSON rendering of converted documents.

use crate::convert::ConvertedDocument;
use crate::error::{Error, Result};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a converted document to JSON.
pub fn to_json(doc: &ConvertedDocument, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::DocumentConverter;
    use crate::model::{Document, Paragraph};

    fn converted() -> ConvertedDocument {
        let mut doc = Document::new("Test");
        doc.add_paragraph(Paragraph::with_text("Hello"));
        DocumentConverter::default().convert(&doc).unwrap()
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&converted(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("\"type\": \"paragraph\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&converted(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }
}
