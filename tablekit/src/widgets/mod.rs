//! Table widgets.
//!
//! Each widget is a stateless builder. `build` returns the element subtree
//! and registers the widget's callbacks; disabled widgets register nothing.

mod cell;
mod header_cell;
mod icon_button;
mod pagination;
mod row;
mod sortable_table;

pub use cell::Cell;
pub use header_cell::{HeaderCell, SortIcon};
pub use icon_button::{resolve_icon_color, IconButton};
pub use pagination::Pagination;
pub use row::{BodyRow, HeaderRow};
pub use sortable_table::SortableTable;
