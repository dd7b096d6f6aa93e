//! The table's owner: all mutable table state and the policies the widget
//! leaves to its caller (sort cycling, ordering, page clamping, fetching).

use std::cmp::Ordering;
use std::path::PathBuf;

use ariadom::{Color, Element};
use tablekit::{
    next_direction, CellValue, ColumnDescriptor, FetchStatus, HandlerRegistry, RowRecord,
    SortArgs, SortDirection, SortState, SortableTable,
};

use crate::dataset::{Dataset, DatasetError};
use crate::settings::DemoSettings;
use crate::state::State;

pub const TABLE_ID: &str = "people";

#[derive(Debug, Clone, PartialEq)]
pub struct HostState {
    pub caption: String,
    pub columns: Vec<ColumnDescriptor>,
    pub rows: Vec<RowRecord>,
    pub status: FetchStatus,
    pub page: u32,
    pub page_size: u32,
    pub page_size_options: Vec<u32>,
    pub sort: SortState,
    pub icon_color: Option<Color>,
    pub button_color: Option<Color>,
}

impl HostState {
    pub fn total_page_count(&self) -> u32 {
        let pages = self.rows.len().div_ceil(self.page_size.max(1) as usize);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// The current page of the sorted rows.
    pub fn visible_rows(&self) -> Vec<RowRecord> {
        let mut rows = self.rows.clone();
        sort_rows(&mut rows, &self.sort);

        let page_size = self.page_size.max(1) as usize;
        let skip = (self.page.max(1) as usize - 1).saturating_mul(page_size);
        rows.into_iter().skip(skip).take(page_size).collect()
    }

    fn clamp_page(&mut self) {
        self.page = self.page.clamp(1, self.total_page_count().max(1));
    }
}

#[derive(Debug, Clone)]
pub struct TableHost {
    state: State<HostState>,
    dataset_path: Option<PathBuf>,
}

impl TableHost {
    pub fn new(settings: &DemoSettings) -> Self {
        Self {
            state: State::new(HostState {
                caption: settings.caption.clone(),
                columns: Vec::new(),
                rows: Vec::new(),
                status: FetchStatus::Idle,
                page: 1,
                page_size: settings.page_size,
                page_size_options: settings.page_size_options.clone(),
                sort: SortState::default(),
                icon_color: settings.icon_color(),
                button_color: settings.button_color(),
            }),
            dataset_path: settings.dataset.clone(),
        }
    }

    pub fn state(&self) -> &State<HostState> {
        &self.state
    }

    pub fn is_fetching(&self) -> bool {
        self.state.with(|s| s.status == FetchStatus::Fetching)
    }

    /// Start a load. The next `tick` resolves it.
    pub fn reload(&self) {
        log::info!("[host] reload");
        self.state.update(|s| s.status = FetchStatus::Fetching);
    }

    /// Resolve a pending load from the configured source.
    pub fn tick(&self) {
        if self.is_fetching() {
            self.finish_fetch(Dataset::load_or_sample(self.dataset_path.as_deref()));
        }
    }

    pub fn finish_fetch(&self, result: Result<Dataset, DatasetError>) {
        match result {
            Ok(dataset) => {
                log::info!("[host] fetch succeeded with {} rows", dataset.rows.len());
                self.state.update(|s| {
                    s.columns = dataset.columns;
                    s.rows = dataset.rows;
                    s.status = FetchStatus::Success;
                    if !s.columns.iter().any(|c| c.data_key == s.sort.data_key) {
                        s.sort = SortState::default();
                    }
                    s.clamp_page();
                });
            }
            Err(err) => {
                log::error!("[host] fetch failed: {err}");
                self.state.update(|s| s.status = FetchStatus::Fail);
            }
        }
    }

    /// Header activation: advance the clicked column's direction, a newly
    /// clicked column starts from neutral. Returns to the first page.
    pub fn sort_by(&self, args: SortArgs) {
        self.state.update(|s| {
            let current = s.sort.direction_for(&args.data_key);
            let direction = next_direction(current);
            log::info!(
                "[host] sort {} {:?} -> {:?}",
                args.data_key,
                current,
                direction
            );
            s.sort = SortState::new(args.data_key, args.title, direction);
            s.page = 1;
        });
    }

    pub fn set_page(&self, page: u32) {
        self.state.update(|s| {
            s.page = page;
            s.clamp_page();
            log::info!("[host] page {page} -> {}", s.page);
        });
    }

    pub fn set_page_size(&self, page_size: u32) {
        if page_size == 0 {
            log::warn!("[host] ignoring page size 0");
            return;
        }
        log::info!("[host] page size {page_size}");
        self.state.update(|s| {
            s.page_size = page_size;
            s.page = 1;
        });
    }

    /// Build the table for the current snapshot, wiring its callbacks back here.
    pub fn build(&self, registry: &HandlerRegistry) -> Element {
        let snapshot = self.state.get();
        let rows = snapshot.visible_rows();

        let on_sort = self.clone();
        let on_page = self.clone();
        let on_page_size = self.clone();

        SortableTable::new(&snapshot.columns, &rows)
            .id(TABLE_ID)
            .caption(snapshot.caption.clone())
            .fetch_status(snapshot.status)
            .load_state(Element::text("Loading people…"))
            .error_state(Element::text("Could not load the dataset. Press r to retry."))
            .empty_state(Element::text("No people found."))
            .page(snapshot.page)
            .page_size(snapshot.page_size)
            .page_size_options(snapshot.page_size_options.iter().copied())
            .total_page_count(snapshot.total_page_count())
            .sort_options(snapshot.sort.clone())
            .icon_color(snapshot.icon_color)
            .button_color(snapshot.button_color)
            .on_table_header_click(move |args| on_sort.sort_by(args))
            .on_page_change(move |page| on_page.set_page(page))
            .on_page_size_change(move |size| on_page_size.set_page_size(size))
            .build(registry)
    }
}

// =============================================================================
// Ordering
// =============================================================================

/// Stable sort by the sorted column. Numbers compare numerically, text
/// case-insensitively, missing or null values always go last.
pub fn sort_rows(rows: &mut [RowRecord], sort: &SortState) {
    let Some(direction) = sort.sort_direction else {
        return;
    };
    let key = sort.data_key.as_str();

    rows.sort_by(|a, b| {
        let a = a.get(key).filter(|v| !v.is_null());
        let b = b.get(key).filter(|v| !v.is_null());
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => {
                let ordering = compare_values(a, b);
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            }
        }
    });
}

fn compare_values(a: &CellValue, b: &CellValue) -> Ordering {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a
            .to_string()
            .to_lowercase()
            .cmp(&b.to_string().to_lowercase()),
    }
}
