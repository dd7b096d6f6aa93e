//! Sortable column header and its sort indicator.

use std::sync::Arc;

use ariadom::{AriaSort, Element, Role};

use crate::handler::{EventData, HandlerRegistry, SortCallback, ON_ACTIVATE};
use crate::icon::{Icon, IconName};
use crate::sort::{SortArgs, SortDirection};
use crate::theme::{focus_style, header_style, IconColor};

// =============================================================================
// SortIcon
// =============================================================================

/// Sort indicator. First match wins: a direction shows its arrow, otherwise
/// a visible preview shows the neutral glyph, otherwise nothing renders.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortIcon {
    direction: Option<SortDirection>,
    preview_visible: bool,
}

impl SortIcon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(mut self, direction: Option<SortDirection>) -> Self {
        self.direction = direction;
        self
    }

    pub fn preview_visible(mut self, visible: bool) -> Self {
        self.preview_visible = visible;
        self
    }

    pub fn build(self) -> Option<Element> {
        let icon = match self.direction {
            Some(SortDirection::Ascending) => Icon::new(IconName::ArrowUp).fill(IconColor::SORTED),
            Some(SortDirection::Descending) => {
                Icon::new(IconName::ArrowDown).fill(IconColor::SORTED)
            }
            None if self.preview_visible => Icon::new(IconName::Sort).fill(IconColor::PREVIEW),
            None => return None,
        };
        Some(icon.build())
    }
}

// =============================================================================
// HeaderCell
// =============================================================================

/// A focusable column header that reports its current sort state when
/// activated by pointer, Enter or Space.
#[derive(Clone)]
pub struct HeaderCell {
    id: Option<String>,
    data_key: String,
    title: String,
    col_span: u16,
    row_span: u16,
    sort_direction: Option<SortDirection>,
    tab_index: i32,
    width: Option<u16>,
    on_click: Option<SortCallback>,
}

impl HeaderCell {
    pub fn new(data_key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: None,
            data_key: data_key.into(),
            title: title.into(),
            col_span: 1,
            row_span: 1,
            sort_direction: None,
            tab_index: 0,
            width: None,
            on_click: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn col_span(mut self, span: u16) -> Self {
        self.col_span = span;
        self
    }

    pub fn row_span(mut self, span: u16) -> Self {
        self.row_span = span;
        self
    }

    pub fn sort_direction(mut self, direction: Option<SortDirection>) -> Self {
        self.sort_direction = direction;
        self
    }

    /// A negative index removes the header from the Tab sequence.
    pub fn tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = tab_index;
        self
    }

    /// Minimum column width in terminal cells.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn on_click(mut self, f: impl Fn(SortArgs) + Send + Sync + 'static) -> Self {
        self.on_click = Some(Arc::new(f));
        self
    }

    pub fn build(self, registry: &HandlerRegistry) -> Element {
        let sort_icon = SortIcon::new()
            .direction(self.sort_direction)
            .build()
            .map(|icon| {
                Element::row()
                    .class("sortIcon")
                    .aria_hidden(true)
                    .data("data-testid", "sortIcon")
                    .child(icon)
            });

        let content = Element::row()
            .class("content")
            .gap(1)
            .child(Element::text(self.title.clone()))
            .child_opt(sort_icon);

        let mut elem = Element::row()
            .role(Role::ColumnHeader)
            .class("headerCell")
            .aria_sort(self.sort_direction.map(AriaSort::from))
            .data("scope", "col")
            .data("colspan", self.col_span.to_string())
            .data("rowspan", self.row_span.to_string())
            .tab_index(self.tab_index)
            .clickable(true)
            .style(header_style())
            .style_focused(focus_style())
            .child(content);
        if let Some(id) = self.id {
            elem = elem.id(id);
        }
        if let Some(width) = self.width {
            elem = elem.min_width(width);
        }

        if let Some(on_click) = self.on_click {
            let args = SortArgs {
                data_key: self.data_key,
                title: self.title,
                direction: self.sort_direction,
            };
            registry.register(
                &elem.id,
                ON_ACTIVATE,
                Arc::new(move |_: &EventData| {
                    log::debug!("[header] activate {} ({:?})", args.data_key, args.direction);
                    on_click(args.clone());
                }),
            );
        }

        elem
    }
}

impl std::fmt::Debug for HeaderCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderCell")
            .field("data_key", &self.data_key)
            .field("title", &self.title)
            .field("sort_direction", &self.sort_direction)
            .field("tab_index", &self.tab_index)
            .finish_non_exhaustive()
    }
}
