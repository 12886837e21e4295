//! Listed file metadata and its enhancement rules.

use crate::convert::kebab_case;
use crate::detect::FileKind;
use crate::render::FrontMatter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Options applied to every listed file.
#[derive(Debug, Clone, Default)]
pub struct DescriptorOptions {
    /// Fields assigned to every descriptor before mapping
    pub fields_default: Map<String, Value>,

    /// Key renames, applied in order
    pub fields_mapper: Vec<(String, String)>,
}

impl DescriptorOptions {
    /// Create new descriptor options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `value` to `key` on every descriptor.
    pub fn with_default(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields_default.insert(key.into(), value.into());
        self
    }

    /// Rename `from` to `to` on every descriptor.
    pub fn with_mapping(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.fields_mapper.push((from.into(), to.into()));
        self
    }

    /// Key the file name is stored under after mapping.
    pub fn name_key(&self) -> &str {
        self.fields_mapper
            .iter()
            .find(|(from, _)| from == "name")
            .map(|(_, to)| to.as_str())
            .unwrap_or("name")
    }
}

/// Metadata of one listed file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileDescriptor {
    fields: Map<String, Value>,
}

impl FileDescriptor {
    /// Wrap fields that are already enhanced.
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Enhance a raw listing entry found under `breadcrumb`.
    ///
    /// Defaults are assigned first, then keys are renamed, then the
    /// breadcrumb is set. A `description` holding a JSON object is merged
    /// into the fields and removed; any other description is kept as is.
    /// Finally `path` is derived from the breadcrumb and the file name.
    pub fn enhance(
        raw: Map<String, Value>,
        breadcrumb: &[String],
        options: &DescriptorOptions,
    ) -> Self {
        let mut fields = raw.clone();

        for (key, value) in &options.fields_default {
            fields.insert(key.clone(), value.clone());
        }

        for (from, to) in &options.fields_mapper {
            fields.remove(from);
            match raw.get(from) {
                Some(value) => {
                    fields.insert(to.clone(), value.clone());
                }
                None => {
                    fields.remove(to);
                }
            }
        }

        fields.insert(
            "breadcrumb".to_string(),
            Value::Array(breadcrumb.iter().cloned().map(Value::String).collect()),
        );

        if let Some(description) = raw.get("description").and_then(Value::as_str) {
            match serde_json::from_str::<Value>(description) {
                Ok(Value::Object(overlay)) => {
                    fields.remove("description");
                    fields.extend(overlay);
                }
                _ => log::debug!("Description of {:?} is plain text", raw.get("id")),
            }
        }

        let name = fields
            .get(options.name_key())
            .and_then(Value::as_str)
            .unwrap_or_default();
        let path = build_path(breadcrumb, name);
        fields.insert("path".to_string(), Value::String(path));

        Self { fields }
    }

    /// Get a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Borrow every field.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Remote file id.
    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }

    /// File name.
    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    /// MIME type of the file.
    pub fn mime_type(&self) -> Option<&str> {
        self.str_field("mimeType")
    }

    /// Kind of the file, from its MIME type.
    pub fn kind(&self) -> FileKind {
        FileKind::from_mime_type(self.mime_type().unwrap_or_default())
    }

    /// Path built from the breadcrumb and the file name.
    pub fn path(&self) -> Option<&str> {
        self.str_field("path")
    }

    /// Folder names containing the file, outermost first.
    pub fn breadcrumb(&self) -> Vec<String> {
        self.fields
            .get("breadcrumb")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Collection the file is grouped under.
    pub fn collection(&self) -> Option<&str> {
        self.str_field("collection")
    }

    /// Whether the file is starred.
    pub fn starred(&self) -> bool {
        self.fields
            .get("starred")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Creation time.
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.timestamp("createdTime")
    }

    /// Last modification time.
    pub fn modified(&self) -> Option<DateTime<Utc>> {
        self.timestamp("modifiedTime")
    }

    fn timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        let raw = self.str_field(key)?;
        match DateTime::parse_from_rfc3339(raw) {
            Ok(time) => Some(time.with_timezone(&Utc)),
            Err(e) => {
                log::warn!("Invalid {} {:?}: {}", key, raw, e);
                None
            }
        }
    }

    /// Typed summary of the descriptor.
    pub fn metadata(&self) -> DescriptorMetadata {
        DescriptorMetadata {
            breadcrumb: self.breadcrumb(),
            path: self.path().map(str::to_string),
            collection: self.collection().map(str::to_string),
            starred: self.starred(),
            created: self.created(),
            modified: self.modified(),
        }
    }

    /// Every field as a front matter record.
    pub fn front_matter(&self) -> FrontMatter {
        FrontMatter::from_map(self.fields.clone())
    }
}

/// Typed view of the common descriptor fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorMetadata {
    /// Folder names containing the file
    pub breadcrumb: Vec<String>,
    /// Path built from the breadcrumb and the file name
    pub path: Option<String>,
    /// Collection name
    pub collection: Option<String>,
    /// Starred flag
    pub starred: bool,
    /// Creation time
    pub created: Option<DateTime<Utc>>,
    /// Last modification time
    pub modified: Option<DateTime<Utc>>,
}

fn build_path(breadcrumb: &[String], name: &str) -> String {
    let mut path: String = breadcrumb
        .iter()
        .map(|folder| format!("/{}", kebab_case(folder)))
        .collect();
    path.push('/');
    path.push_str(&kebab_case(name));
    path
}
