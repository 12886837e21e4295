//! Front matter records.

use crate::error::Result;
use crate::model::Page;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key/value metadata rendered as a YAML header.
///
/// Keys are kept sorted so the same record always renders identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrontMatter {
    fields: Map<String, Value>,
}

impl FrontMatter {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record from an existing JSON object.
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Record holding a page's `title` and `slug`.
    pub fn for_page(page: &Page) -> Self {
        Self::new()
            .with("title", page.title.clone())
            .with("slug", page.slug.clone())
    }

    /// Add a field, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a field, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Copy every field of `other` over this record.
    pub fn extend(&mut self, other: &FrontMatter) {
        for (key, value) in &other.fields {
            self.fields.insert(key.clone(), value.clone());
        }
    }

    /// Get a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Check if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Serialize to YAML without the document marker or trailing newline.
    pub fn to_yaml(&self) -> Result<String> {
        if self.fields.is_empty() {
            return Ok(String::new());
        }
        let yaml = serde_yaml::to_string(&self.fields)?;
        let trimmed = yaml.trim_end();
        Ok(trimmed.strip_prefix("---\n").unwrap_or(trimmed).to_string())
    }
}

impl From<Map<String, Value>> for FrontMatter {
    fn from(fields: Map<String, Value>) -> Self {
        Self::from_map(fields)
    }
}
