//! Page-size selector, page status and first/previous/next/last navigation.

use std::sync::Arc;

use ariadom::{Aria, Color, Element, Role};

use super::IconButton;
use crate::dispatch::parse_positive;
use crate::handler::{EventData, HandlerRegistry, PageCallback, ON_CHANGE};
use crate::icon::IconName;
use crate::theme::{focus_style, muted_style};

const PAGE_SIZE_LABEL: &str = "Rows per page";

/// Pagination control.
///
/// Navigation targets are computed from `page` and `total_page_count`
/// without clamping; range checks belong to the caller.
#[derive(Clone, Default)]
pub struct Pagination {
    id: Option<String>,
    page: u32,
    page_size: u32,
    total_page_count: u32,
    page_size_options: Vec<u32>,
    icon_color: Option<Color>,
    button_color: Option<Color>,
    on_page_change: Option<PageCallback>,
    on_page_size_change: Option<PageCallback>,
}

impl Pagination {
    pub fn new(page: u32, page_size: u32, total_page_count: u32) -> Self {
        Self {
            page,
            page_size,
            total_page_count,
            ..Self::default()
        }
    }

    /// Prefix for the ids of the selector and the navigation buttons.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    fn child_id(&self, suffix: &str) -> Option<String> {
        self.id.as_ref().map(|id| format!("{id}-{suffix}"))
    }

    pub fn page_size_options(mut self, options: impl IntoIterator<Item = u32>) -> Self {
        self.page_size_options = options.into_iter().collect();
        self
    }

    /// Icon fill for the navigation buttons.
    pub fn icon_color(mut self, color: Option<Color>) -> Self {
        self.icon_color = color;
        self
    }

    /// Background for the navigation buttons.
    pub fn button_color(mut self, color: Option<Color>) -> Self {
        self.button_color = color;
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

    pub(crate) fn on_page_change_arc(mut self, f: Option<PageCallback>) -> Self {
        self.on_page_change = f;
        self
    }

    pub(crate) fn on_page_size_change_arc(mut self, f: Option<PageCallback>) -> Self {
        self.on_page_size_change = f;
        self
    }

    pub fn build(self, registry: &HandlerRegistry) -> Element {
        let selector = self.page_size_selector(registry);
        let status = Element::text(format!("Page {} of {}", self.page, self.total_page_count))
            .role(Role::Status)
            .style(muted_style());

        let targets = [
            (IconName::PageFirst, "first", "Navigate to first page", 1),
            (
                IconName::PagePrevious,
                "previous",
                "Navigate to previous page",
                self.page.saturating_sub(1),
            ),
            (
                IconName::PageNext,
                "next",
                "Navigate to next page",
                self.page.saturating_add(1),
            ),
            (
                IconName::PageLast,
                "last",
                "Navigate to last page",
                self.total_page_count,
            ),
        ];
        let buttons = targets.into_iter().map(|(icon, name, label, target)| {
            let mut button = IconButton::new(icon).aria_label(label);
            if let Some(id) = self.child_id(name) {
                button = button.id(id);
            }
            if let Some(color) = self.icon_color {
                button = button.icon_color(color);
            }
            if let Some(color) = self.button_color {
                button = button.button_color(color);
            }
            if let Some(on_page_change) = self.on_page_change.clone() {
                button = button.on_click(move || {
                    log::debug!("[pagination] navigate to page {target}");
                    on_page_change(target);
                });
            }
            button.build(registry)
        });

        let mut page_buttons = Element::row().class("pageButtons").children(buttons);
        if let Some(id) = self.child_id("page-buttons") {
            page_buttons = page_buttons.id(id);
        }

        let mut nav = Element::row()
            .role(Role::Navigation)
            .aria_label("Pagination")
            .class("pagination")
            .gap(2)
            .child(selector)
            .child(status)
            .child(page_buttons);
        if let Some(id) = &self.id {
            nav = nav.id(id.clone());
        }
        nav
    }

    fn page_size_selector(&self, registry: &HandlerRegistry) -> Element {
        let options = self.page_size_options.iter().map(|size| {
            Element::text(size.to_string())
                .role(Role::ListOption)
                .data("value", size.to_string())
                .data("selected", (*size == self.page_size).to_string())
                .visible(false)
        });

        let mut combobox = Element::row()
            .role(Role::Combobox)
            .aria(Aria {
                label: Some(PAGE_SIZE_LABEL.to_string()),
                has_popup: Some(true),
                expanded: Some(false),
                ..Aria::default()
            })
            .class("pageSizeSelect")
            .data("value", self.page_size.to_string())
            .tab_index(0)
            .clickable(true)
            .style_focused(focus_style())
            .child(Element::text(format!("[{} ▾]", self.page_size)))
            .children(options);
        if let Some(id) = self.child_id("page-size") {
            combobox = combobox.id(id);
        }

        if let Some(on_page_size_change) = self.on_page_size_change.clone() {
            registry.register(
                &combobox.id,
                ON_CHANGE,
                Arc::new(move |data: &EventData| {
                    let value = data.value().unwrap_or_default();
                    match parse_positive(value) {
                        Ok(size) => on_page_size_change(size),
                        Err(err) => log::warn!("[pagination] page size change dropped: {err}"),
                    }
                }),
            );
        }

        let selector = Element::row()
            .gap(1)
            .child(Element::text(PAGE_SIZE_LABEL).style(muted_style()))
            .child(combobox);
        match self.child_id("page-size-selector") {
            Some(id) => selector.id(id),
            None => selector,
        }
    }
}

impl std::fmt::Debug for Pagination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pagination")
            .field("id", &self.id)
            .field("page", &self.page)
            .field("page_size", &self.page_size)
            .field("total_page_count", &self.total_page_count)
            .field("page_size_options", &self.page_size_options)
            .finish_non_exhaustive()
    }
}
