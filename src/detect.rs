//! File kind detection from remote MIME types.

use std::fmt;

/// MIME type of a structured word-processing document.
pub const MIME_TYPE_DOCUMENT: &str = "application/vnd.google-apps.document";
/// MIME type of a spreadsheet.
pub const MIME_TYPE_SPREADSHEET: &str = "application/vnd.google-apps.spreadsheet";
/// MIME type of a folder.
pub const MIME_TYPE_FOLDER: &str = "application/vnd.google-apps.folder";

/// What a listed file is, as far as conversion is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// Converted into pages
    Document,
    /// Converted into sheet records
    Spreadsheet,
    /// Container of other files
    Folder,
    /// Anything else, with its MIME type
    Other(String),
}

impl FileKind {
    /// Classify a MIME type.
    ///
    /// # Example
    /// ```
    /// use ungdocs::detect::FileKind;
    ///
    /// let kind = FileKind::from_mime_type("application/vnd.google-apps.document");
    /// assert_eq!(kind, FileKind::Document);
    /// assert!(kind.is_convertible());
    /// ```
    pub fn from_mime_type(mime_type: &str) -> Self {
        match mime_type {
            MIME_TYPE_DOCUMENT => FileKind::Document,
            MIME_TYPE_SPREADSHEET => FileKind::Spreadsheet,
            MIME_TYPE_FOLDER => FileKind::Folder,
            other => FileKind::Other(other.to_string()),
        }
    }

    /// The MIME type this kind was built from.
    pub fn mime_type(&self) -> &str {
        match self {
            FileKind::Document => MIME_TYPE_DOCUMENT,
            FileKind::Spreadsheet => MIME_TYPE_SPREADSHEET,
            FileKind::Folder => MIME_TYPE_FOLDER,
            FileKind::Other(mime) => mime,
        }
    }

    /// Whether the pipeline produces records for this kind.
    pub fn is_convertible(&self) -> bool {
        matches!(self, FileKind::Document | FileKind::Spreadsheet)
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Document => write!(f, "document"),
            FileKind::Spreadsheet => write!(f, "spreadsheet"),
            FileKind::Folder => write!(f, "folder"),
            FileKind::Other(mime) => write!(f, "other ({})", mime),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_kinds() {
        assert_eq!(FileKind::from_mime_type(MIME_TYPE_SPREADSHEET), FileKind::Spreadsheet);
        assert_eq!(FileKind::from_mime_type(MIME_TYPE_FOLDER), FileKind::Folder);
        assert!(!FileKind::Folder.is_convertible());
    }

    #[test]
    fn test_other_kind_keeps_mime() {
        let kind = FileKind::from_mime_type("image/png");
        assert_eq!(kind, FileKind::Other("image/png".into()));
        assert_eq!(kind.mime_type(), "image/png");
        assert!(!kind.is_convertible());
    }

    #[test]
    fn test_display() {
        assert_eq!(FileKind::Document.to_string(), "document");
    }
}
