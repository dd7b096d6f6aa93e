//! Caller-supplied table data.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One column: the record key it reads and the header label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    pub data_key: String,
    pub title: String,
}

impl ColumnDescriptor {
    pub fn new(data_key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            data_key: data_key.into(),
            title: title.into(),
        }
    }
}

/// A displayable cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Numeric view used for ordering. Text is never numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Integer(n) => Some(*n as f64),
            CellValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Integer(n) => write!(f, "{n}"),
            CellValue::Float(x) => write!(f, "{x}"),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Integer(i64::from(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

/// One body row: data key to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowRecord(BTreeMap<String, CellValue>);

impl RowRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.0.get(key)
    }

    /// Display text for `key`. Missing keys render as empty text.
    pub fn display(&self, key: &str) -> String {
        self.get(key).map(ToString::to_string).unwrap_or_default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for RowRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_displays_empty() {
        let row = RowRecord::new().with("first", "Alex");
        assert_eq!(row.display("first"), "Alex");
        assert_eq!(row.display("last"), "");
    }

    #[test]
    fn values_display_plainly() {
        assert_eq!(CellValue::from(42).to_string(), "42");
        assert_eq!(CellValue::from(1.5).to_string(), "1.5");
        assert_eq!(CellValue::from(true).to_string(), "true");
        assert_eq!(CellValue::Null.to_string(), "");
    }

    #[test]
    fn records_deserialize_from_json_objects() {
        let row: RowRecord =
            serde_json::from_str(r#"{"name": "Ada", "age": 36, "score": 9.5, "nick": null}"#)
                .unwrap();
        assert_eq!(row.get("name"), Some(&CellValue::Text("Ada".to_string())));
        assert_eq!(row.get("age"), Some(&CellValue::Integer(36)));
        assert_eq!(row.get("score"), Some(&CellValue::Float(9.5)));
        assert!(row.get("nick").is_some_and(CellValue::is_null));
    }

    #[test]
    fn columns_use_camel_case_keys() {
        let column: ColumnDescriptor =
            serde_json::from_str(r#"{"dataKey": "first", "title": "First Name"}"#).unwrap();
        assert_eq!(column, ColumnDescriptor::new("first", "First Name"));
    }
}
