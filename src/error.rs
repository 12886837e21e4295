//! Error types for ungdocs library.

use std::io;
use thiserror::Error;

/// Result type alias for ungdocs operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid JSON or does not match the document shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Front matter could not be serialized.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A structurally required field is absent.
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// An inline object id is not present in the document registry.
    #[error("Inline object not found: {0}")]
    MissingObject(String),

    /// The input has the right fields but an unusable shape.
    #[error("Malformed document: {0}")]
    Malformed(String),

    /// An upstream collaborator failed to return data for a file.
    #[error("Failed to fetch {id}: {message}")]
    Fetch {
        /// Identifier of the file being fetched
        id: String,
        /// Collaborator error message
        message: String,
    },

    /// An upstream collaborator returned no data.
    #[error("Empty response for {0}")]
    EmptyResponse(String),

    /// A referenced image could not be materialized locally.
    #[error("Failed to materialize image {uri}: {message}")]
    ImageMaterialization {
        /// Remote image URI
        uri: String,
        /// Collaborator error message
        message: String,
    },

    /// Error during rendering (Markdown, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Build a fetch error from any displayable collaborator error.
    pub fn fetch(id: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Error::Fetch {
            id: id.into(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingField("body.content".into());
        assert_eq!(err.to_string(), "Missing required field: body.content");

        let err = Error::fetch("doc-1", "quota exceeded");
        assert_eq!(err.to_string(), "Failed to fetch doc-1: quota exceeded");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
