//! Substitution of remote image URIs with local paths.

use serde::{Deserialize, Serialize};

/// A remote image that has been stored locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterializedImage {
    /// Remote content URI as it appears in the markdown
    pub source: String,
    /// Path the markdown should point at instead
    pub local_path: String,
}

impl MaterializedImage {
    /// Create a new materialized image.
    pub fn new(source: impl Into<String>, local_path: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            local_path: local_path.into(),
        }
    }
}

/// Replace every occurrence of each remote source with its local path.
///
/// Matching is literal; an empty source is ignored.
pub fn replace_image_sources(markdown: &str, images: &[MaterializedImage]) -> String {
    images
        .iter()
        .filter(|image| !image.source.is_empty())
        .fold(markdown.to_string(), |text, image| {
            text.replace(&image.source, &image.local_path)
        })
}
