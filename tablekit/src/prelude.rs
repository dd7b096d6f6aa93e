//! Everything a host needs to build and drive a table.

pub use crate::dispatch::{DispatchResult, EventDispatcher};
pub use crate::fetch::FetchStatus;
pub use crate::handler::HandlerRegistry;
pub use crate::model::{CellValue, ColumnDescriptor, RowRecord};
pub use crate::sort::{next_direction, SortArgs, SortDirection, SortState};
pub use crate::widgets::SortableTable;

pub use ariadom::{Element, Event, FocusState, Key};
