//! Wire shapes of the `documents.get` response.
//!
//! Every field is optional here; required-ness is enforced when the raw
//! tree is lowered into `model` types.

use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawDocument {
    pub title: Option<String>,
    pub body: Option<RawBody>,
    #[serde(default)]
    pub inline_objects: HashMap<String, RawInlineObject>,
    #[serde(default)]
    pub lists: HashMap<String, RawList>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawBody {
    pub content: Option<Vec<RawStructuralElement>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawStructuralElement {
    pub paragraph: Option<RawParagraph>,
    pub table: Option<RawTable>,
    pub table_of_contents: Option<RawTableOfContents>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawParagraph {
    pub elements: Option<Vec<RawParagraphElement>>,
    pub paragraph_style: Option<RawParagraphStyle>,
    pub bullet: Option<RawBullet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawParagraphElement {
    pub text_run: Option<RawTextRun>,
    pub inline_object_element: Option<RawInlineObjectElement>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawTextRun {
    pub content: Option<String>,
    pub text_style: Option<RawTextStyle>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawTextStyle {
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub strikethrough: Option<bool>,
    pub link: Option<RawLink>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawLink {
    pub url: Option<String>,
    pub heading_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawInlineObjectElement {
    pub inline_object_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawParagraphStyle {
    pub named_style_type: Option<String>,
    pub heading_id: Option<String>,
    pub indent_start: Option<RawDimension>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDimension {
    pub magnitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawBullet {
    pub list_id: Option<String>,
    pub nesting_level: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawTable {
    pub table_rows: Option<Vec<RawTableRow>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawTableRow {
    pub table_cells: Option<Vec<RawTableCell>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTableCell {
    pub content: Option<Vec<RawStructuralElement>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTableOfContents {
    pub content: Option<Vec<RawStructuralElement>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawInlineObject {
    pub inline_object_properties: Option<RawInlineObjectProperties>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawInlineObjectProperties {
    pub embedded_object: Option<RawEmbeddedObject>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawEmbeddedObject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_properties: Option<RawImageProperties>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawImageProperties {
    pub content_uri: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawList {
    pub list_properties: Option<RawListProperties>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawListProperties {
    #[serde(default)]
    pub nesting_levels: Vec<RawNestingLevel>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawNestingLevel {
    pub glyph_type: Option<String>,
}
