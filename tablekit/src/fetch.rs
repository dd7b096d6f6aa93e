//! Fetch lifecycle and the render branch it selects.

use serde::{Deserialize, Serialize};

use crate::model::RowRecord;

/// Lifecycle of the caller's data load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    /// No load has been started.
    #[default]
    Idle,
    Fetching,
    Success,
    Fail,
}

/// Exactly one of these is rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TableView<'a> {
    Fetching,
    Failed,
    Empty,
    Loaded(&'a [RowRecord]),
}

impl<'a> TableView<'a> {
    /// Pick the branch for a status and the rows on hand.
    ///
    /// `Idle` shows the table with whatever rows were supplied.
    pub fn resolve(status: FetchStatus, data: &'a [RowRecord]) -> Self {
        match status {
            FetchStatus::Fetching => TableView::Fetching,
            FetchStatus::Fail => TableView::Failed,
            FetchStatus::Success if data.is_empty() => TableView::Empty,
            FetchStatus::Success | FetchStatus::Idle => TableView::Loaded(data),
        }
    }
}
