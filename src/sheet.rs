//! Spreadsheet value grids as keyed row records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The raw values of one sheet, as returned by a spreadsheet source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetValues {
    /// Sheet title
    pub name: String,
    /// Cell values, row by row; the first row is the header
    pub values: Vec<Vec<String>>,
}

/// A sheet converted to records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    /// Sheet title
    pub name: String,
    /// One record per data row
    pub rows: Vec<Map<String, Value>>,
}

impl Sheet {
    /// Build records from raw values.
    pub fn from_values(values: &SheetValues) -> Self {
        Self {
            name: values.name.clone(),
            rows: rows_to_records(&values.values),
        }
    }

    /// Get the number of records.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl From<SheetValues> for Sheet {
    fn from(values: SheetValues) -> Self {
        Self::from_values(&values)
    }
}

/// Key every data row by the header row.
///
/// Each record also carries an `index` field with the row's position after
/// the header. Cells beyond the header width are dropped; short rows simply
/// omit the missing keys.
pub fn rows_to_records(values: &[Vec<String>]) -> Vec<Map<String, Value>> {
    let Some((header, data)) = values.split_first() else {
        return Vec::new();
    };

    data.iter()
        .enumerate()
        .map(|(index, row)| {
            let mut record = Map::new();
            record.insert("index".to_string(), Value::from(index));
            for (key, value) in header.iter().zip(row) {
                record.insert(key.clone(), Value::String(value.clone()));
            }
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_rows_keyed_by_header() {
        let values = grid(&[&["name", "role"], &["Ada", "dev"], &["Bob"]]);
        let records = rows_to_records(&values);

        assert_eq!(records.len(), 2);
        assert_eq!(Value::Object(records[0].clone()), json!({"index": 0, "name": "Ada", "role": "dev"}));
        assert_eq!(Value::Object(records[1].clone()), json!({"index": 1, "name": "Bob"}));
    }

    #[test]
    fn test_extra_cells_dropped() {
        let values = grid(&[&["a"], &["1", "2"]]);
        let records = rows_to_records(&values);
        assert_eq!(records[0].len(), 2);
    }

    #[test]
    fn test_empty_grid() {
        assert!(rows_to_records(&[]).is_empty());
        assert!(rows_to_records(&grid(&[&["only", "header"]])).is_empty());
    }

    #[test]
    fn test_sheet_from_values() {
        let sheet = Sheet::from(SheetValues {
            name: "Team".into(),
            values: grid(&[&["name"], &["Ada"]]),
        });
        assert_eq!(sheet.name, "Team");
        assert_eq!(sheet.row_count(), 1);
    }
}
