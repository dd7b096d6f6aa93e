//! Sort direction and the state a header reports.

use ariadom::AriaSort;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

impl From<SortDirection> for AriaSort {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Ascending => AriaSort::Ascending,
            SortDirection::Descending => AriaSort::Descending,
        }
    }
}

/// Payload of a header activation: the column and its direction at the
/// time of the click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortArgs {
    pub data_key: String,
    pub title: String,
    pub direction: Option<SortDirection>,
}

/// The column currently presented as sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortState {
    pub data_key: String,
    pub title: String,
    pub sort_direction: Option<SortDirection>,
}

impl SortState {
    pub fn new(
        data_key: impl Into<String>,
        title: impl Into<String>,
        sort_direction: Option<SortDirection>,
    ) -> Self {
        Self {
            data_key: data_key.into(),
            title: title.into(),
            sort_direction,
        }
    }

    /// Direction shown on the column keyed `data_key`; every other column
    /// is neutral.
    pub fn direction_for(&self, data_key: &str) -> Option<SortDirection> {
        if self.data_key == data_key {
            self.sort_direction
        } else {
            None
        }
    }
}

/// The toggle cycle a state holder applies on header activation:
/// neutral, descending, ascending, neutral.
pub fn next_direction(current: Option<SortDirection>) -> Option<SortDirection> {
    match current {
        None => Some(SortDirection::Descending),
        Some(SortDirection::Descending) => Some(SortDirection::Ascending),
        Some(SortDirection::Ascending) => None,
    }
}
