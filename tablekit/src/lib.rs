//! Accessible, sortable, paginated data table widgets.
//!
//! Every widget is a builder that produces an [`ariadom::Element`] tree and
//! registers its callbacks in a [`HandlerRegistry`]. The caller owns all
//! table state and rebuilds the tree after every callback.
//!
//! ```ignore
//! let registry = HandlerRegistry::new();
//! let root = SortableTable::new(&columns, &rows)
//!     .caption("People")
//!     .fetch_status(FetchStatus::Success)
//!     .pagination(page, page_size, total_page_count, &page_size_options)
//!     .sort_options(sort_state)
//!     .on_table_header_click(move |args| host.sort_by(args))
//!     .build(&registry);
//!
//! EventDispatcher::new(&root, &registry).dispatch(&event);
//! ```

pub mod dispatch;
pub mod fetch;
pub mod handler;
pub mod icon;
pub mod model;
pub mod prelude;
pub mod sort;
pub mod theme;
pub mod widgets;

pub use dispatch::{parse_positive, DispatchError, DispatchResult, EventDispatcher};
pub use fetch::{FetchStatus, TableView};
pub use handler::{
    ClickCallback, EventData, Handler, HandlerRegistry, PageCallback, SortCallback, ON_ACTIVATE,
    ON_CHANGE,
};
pub use icon::{Icon, IconName};
pub use model::{CellValue, ColumnDescriptor, RowRecord};
pub use sort::{next_direction, SortArgs, SortDirection, SortState};
pub use theme::IconColor;
pub use widgets::{
    BodyRow, Cell, HeaderCell, HeaderRow, IconButton, Pagination, SortIcon, SortableTable,
};
