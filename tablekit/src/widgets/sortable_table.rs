//! Sortable, paginated table orchestrator.
//!
//! Holds no state between builds. The fetch status picks one of four
//! branches; only the loaded branch renders headers, rows and pagination.
//! Header activation reports the column's configured direction; choosing
//! the next direction is the caller's job (see [`crate::sort::next_direction`]).

use std::sync::Arc;

use ariadom::text::display_width;
use ariadom::{Color, Element, Role};

use super::{BodyRow, Cell, HeaderCell, HeaderRow, Pagination};
use crate::fetch::{FetchStatus, TableView};
use crate::handler::{HandlerRegistry, PageCallback, SortCallback};
use crate::model::{ColumnDescriptor, RowRecord};
use crate::sort::{SortArgs, SortState};
use crate::theme::muted_style;

/// Room for the sort arrow next to a header title.
const SORT_ICON_WIDTH: usize = 2;

#[derive(Clone)]
pub struct SortableTable<'a> {
    id: Option<String>,
    caption: Option<String>,
    headers: &'a [ColumnDescriptor],
    data: &'a [RowRecord],
    fetch_status: FetchStatus,
    load_state: Option<Element>,
    error_state: Option<Element>,
    empty_state: Option<Element>,
    page: u32,
    page_size: u32,
    page_size_options: Vec<u32>,
    total_page_count: u32,
    sort_options: SortState,
    icon_color: Option<Color>,
    button_color: Option<Color>,
    on_table_header_click: Option<SortCallback>,
    on_page_change: Option<PageCallback>,
    on_page_size_change: Option<PageCallback>,
}

impl<'a> SortableTable<'a> {
    pub fn new(headers: &'a [ColumnDescriptor], data: &'a [RowRecord]) -> Self {
        Self {
            id: None,
            caption: None,
            headers,
            data,
            fetch_status: FetchStatus::default(),
            load_state: None,
            error_state: None,
            empty_state: None,
            page: 1,
            page_size: 10,
            page_size_options: Vec::new(),
            total_page_count: 0,
            sort_options: SortState::default(),
            icon_color: None,
            button_color: None,
            on_table_header_click: None,
            on_page_change: None,
            on_page_size_change: None,
        }
    }

    /// Root id. Header cells and pagination controls derive their ids from it.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn fetch_status(mut self, status: FetchStatus) -> Self {
        self.fetch_status = status;
        self
    }

    /// Content shown while fetching.
    pub fn load_state(mut self, content: Element) -> Self {
        self.load_state = Some(content);
        self
    }

    /// Content shown when the fetch failed.
    pub fn error_state(mut self, content: Element) -> Self {
        self.error_state = Some(content);
        self
    }

    /// Content shown for a successful fetch with no rows.
    pub fn empty_state(mut self, content: Element) -> Self {
        self.empty_state = Some(content);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn page_size_options(mut self, options: impl IntoIterator<Item = u32>) -> Self {
        self.page_size_options = options.into_iter().collect();
        self
    }

    pub fn total_page_count(mut self, total: u32) -> Self {
        self.total_page_count = total;
        self
    }

    pub fn sort_options(mut self, sort: SortState) -> Self {
        self.sort_options = sort;
        self
    }

    /// Icon fill for the pagination buttons. Unset keeps the default palette.
    pub fn icon_color(mut self, color: Option<Color>) -> Self {
        self.icon_color = color;
        self
    }

    /// Background for the pagination buttons.
    pub fn button_color(mut self, color: Option<Color>) -> Self {
        self.button_color = color;
        self
    }

    pub fn on_table_header_click(mut self, f: impl Fn(SortArgs) + Send + Sync + 'static) -> Self {
        self.on_table_header_click = Some(Arc::new(f));
        self
    }

    pub fn on_page_change(mut self, f: impl Fn(u32) + Send + Sync + 'static) -> Self {
        self.on_page_change = Some(Arc::new(f));
        self
    }

    pub fn on_page_size_change(mut self, f: impl Fn(u32) + Send + Sync + 'static) -> Self {
        self.on_page_size_change = Some(Arc::new(f));
        self
    }

    pub fn build(self, registry: &HandlerRegistry) -> Element {
        let view = TableView::resolve(self.fetch_status, self.data);
        log::debug!(
            "[table] build {:?} with {} rows",
            self.fetch_status,
            self.data.len()
        );

        let mut root = Element::col().class("sortableTable").gap(1);
        if let Some(id) = &self.id {
            root = root.id(id.clone());
        }
        let pagination_id = self.child_id("pagination");

        match view {
            TableView::Fetching => root.child(placeholder(self.load_state, "Loading…")),
            TableView::Failed => root.child(placeholder(
                self.error_state,
                "Something went wrong while loading.",
            )),
            TableView::Empty => root.child(placeholder(self.empty_state, "No results.")),
            TableView::Loaded(rows) => {
                let table = self.table(rows, registry);
                let mut pagination =
                    Pagination::new(self.page, self.page_size, self.total_page_count)
                        .page_size_options(self.page_size_options)
                        .icon_color(self.icon_color)
                        .button_color(self.button_color)
                        .on_page_change_arc(self.on_page_change)
                        .on_page_size_change_arc(self.on_page_size_change);
                if let Some(id) = pagination_id {
                    pagination = pagination.id(id);
                }
                root.child(table).child(pagination.build(registry))
            }
        }
    }

    /// Ids derived from the table id, so focus and the last drawn layout
    /// stay valid for a rebuilt tree.
    fn child_id(&self, suffix: &str) -> Option<String> {
        self.id.as_ref().map(|id| format!("{id}-{suffix}"))
    }

    fn table(&self, rows: &[RowRecord], registry: &HandlerRegistry) -> Element {
        let widths = column_widths(self.headers, rows);

        let header_cells = self.headers.iter().zip(&widths).map(|(column, width)| {
            let mut cell = HeaderCell::new(&column.data_key, &column.title)
                .sort_direction(self.sort_options.direction_for(&column.data_key))
                .width(*width);
            if let Some(id) = self.child_id(&format!("header-{}", column.data_key)) {
                cell = cell.id(id);
            }
            if let Some(on_click) = self.on_table_header_click.clone() {
                cell = cell.on_click(move |args| on_click(args));
            }
            cell.build(registry)
        });

        let body_rows = rows.iter().enumerate().map(|(index, record)| {
            let mut row = BodyRow::new();
            if let Some(id) = self.child_id(&format!("row-{index}")) {
                row = row.id(id);
            }
            row.children(self.headers.iter().zip(&widths).map(|(column, width)| {
                Cell::new(record.display(&column.data_key))
                    .width(*width)
                    .build()
            }))
            .build()
        });

        let caption = self.caption.as_ref().map(|caption| {
            let caption = Element::text(caption.clone())
                .role(Role::Caption)
                .style(muted_style());
            match self.child_id("caption") {
                Some(id) => caption.id(id),
                None => caption,
            }
        });

        let mut header_row = HeaderRow::new().children(header_cells);
        if let Some(id) = self.child_id("headers") {
            header_row = header_row.id(id);
        }

        let mut table = Element::col()
            .role(Role::Table)
            .class("table")
            .child_opt(caption)
            .child(header_row.build())
            .children(body_rows);
        if let Some(id) = self.child_id("table") {
            table = table.id(id);
        }
        table
    }
}

impl std::fmt::Debug for SortableTable<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortableTable")
            .field("caption", &self.caption)
            .field("headers", &self.headers)
            .field("rows", &self.data.len())
            .field("fetch_status", &self.fetch_status)
            .field("page", &self.page)
            .field("page_size", &self.page_size)
            .field("total_page_count", &self.total_page_count)
            .field("sort_options", &self.sort_options)
            .finish_non_exhaustive()
    }
}

fn placeholder(content: Option<Element>, fallback: &str) -> Element {
    content.unwrap_or_else(|| Element::text(fallback).style(muted_style()))
}

/// Widest of the title (plus the sort arrow) and every displayed value.
fn column_widths(headers: &[ColumnDescriptor], rows: &[RowRecord]) -> Vec<u16> {
    headers
        .iter()
        .map(|column| {
            let title = display_width(&column.title) + SORT_ICON_WIDTH;
            let widest = rows
                .iter()
                .map(|record| display_width(&record.display(&column.data_key)))
                .fold(title, usize::max);
            u16::try_from(widest).unwrap_or(u16::MAX)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_cover_titles_and_values() {
        let headers = vec![
            ColumnDescriptor::new("first", "First"),
            ColumnDescriptor::new("last", "Last"),
        ];
        let rows = vec![RowRecord::new().with("first", "Al").with("last", "Christopherson")];
        assert_eq!(column_widths(&headers, &rows), vec![7, 14]);
    }
}
