//! Table data: a JSON file on disk or the built-in sample.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tablekit::{ColumnDescriptor, RowRecord};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("dataset has no columns")]
    NoColumns,
}

/// Columns plus rows, as stored on disk:
///
/// ```json
/// { "columns": [{ "dataKey": "name", "title": "Name" }], "rows": [{ "name": "Ada" }] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub columns: Vec<ColumnDescriptor>,
    #[serde(default)]
    pub rows: Vec<RowRecord>,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let contents = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset: Self =
            serde_json::from_str(&contents).map_err(|source| DatasetError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        if dataset.columns.is_empty() {
            return Err(DatasetError::NoColumns);
        }
        log::info!(
            "[dataset] loaded {} rows from {}",
            dataset.rows.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Load `path` when given, otherwise the sample.
    pub fn load_or_sample(path: Option<&Path>) -> Result<Self, DatasetError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::sample()),
        }
    }

    pub fn sample() -> Self {
        let columns = vec![
            ColumnDescriptor::new("first", "First Name"),
            ColumnDescriptor::new("middle", "Middle Name"),
            ColumnDescriptor::new("last", "Last Name"),
            ColumnDescriptor::new("age", "Age"),
        ];
        let people = [
            ("Alex", "Amos", "Anderson", 34),
            ("Brian", "Brick", "Bellowitz", 27),
            ("Charlie", "Crocodile", "Christopherson", 45),
            ("Doug", "Dairy", "Dangles", 52),
            ("Eric", "Early", "Edmon", 19),
            ("Frank", "Flippity", "Frump", 61),
            ("Greg", "Grossly", "Garrison", 38),
            ("Hank", "Hansel", "Herried", 29),
            ("Irene", "Ivy", "Ingleton", 41),
            ("June", "Juniper", "Jacobs", 23),
            ("Kate", "Kestrel", "Kowalski", 36),
            ("Liam", "Lark", "Lindqvist", 48),
        ];
        let rows = people
            .into_iter()
            .map(|(first, middle, last, age)| {
                RowRecord::new()
                    .with("first", first)
                    .with("middle", middle)
                    .with("last", last)
                    .with("age", age)
            })
            .collect();
        Self { columns, rows }
    }
}
