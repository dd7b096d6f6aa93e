use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::aria::{Aria, AriaSort, Role};
use crate::types::{Direction, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,

    // Semantics
    pub role: Role,
    pub aria: Aria,
    pub class: Option<String>,

    // Content
    pub content: Content,

    // Layout
    pub direction: Direction,
    pub gap: u16,
    pub min_width: Option<u16>,
    /// When false the element is skipped by the renderer but stays in the
    /// accessibility tree (e.g. the options of a closed select).
    pub visible: bool,

    // Visual
    pub style: Style,
    pub style_focused: Option<Style>,
    pub style_disabled: Option<Style>,

    // Interaction
    /// `None`: not focusable. Negative: focusable but skipped by Tab.
    pub tab_index: Option<i32>,
    pub clickable: bool,
    pub disabled: bool,

    // State (set by focus enrichment, not by widgets)
    pub focused: bool,

    /// Free-form attributes (`colspan`, `scope`, `fill`, `data-testid`, ...).
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            role: Role::Generic,
            aria: Aria::default(),
            class: None,
            content: Content::None,
            direction: Direction::Column,
            gap: 0,
            min_width: None,
            visible: true,
            style: Style::default(),
            style_focused: None,
            style_disabled: None,
            tab_index: None,
            clickable: false,
            disabled: false,
            focused: false,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Semantics
    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn aria(mut self, aria: Aria) -> Self {
        self.aria = aria;
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria.label = Some(label.into());
        self
    }

    pub fn aria_sort(mut self, sort: Option<AriaSort>) -> Self {
        self.aria.sort = sort;
        self
    }

    pub fn aria_hidden(mut self, hidden: bool) -> Self {
        self.aria.hidden = hidden;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    // Layout
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn min_width(mut self, min_width: u16) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn style_focused(mut self, style: Style) -> Self {
        self.style_focused = Some(style);
        self
    }

    pub fn style_disabled(mut self, style: Style) -> Self {
        self.style_disabled = Some(style);
        self
    }

    // Interaction
    pub fn tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Whether Tab can land on this element.
    pub fn is_tab_stop(&self) -> bool {
        !self.disabled && self.tab_index.is_some_and(|index| index >= 0)
    }

    // Attributes
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    /// Look up any attribute by its DOM name.
    ///
    /// Covers `id`, `role`, `class`, `tabindex`, `disabled`, every `aria-*`
    /// attribute and the free-form data attributes.
    pub fn attr(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.id.clone()),
            "role" => (self.role != Role::Generic).then(|| self.role.as_str().to_string()),
            "class" => self.class.clone(),
            "tabindex" => self.tab_index.map(|index| index.to_string()),
            "disabled" => self.disabled.then(|| "true".to_string()),
            _ if name.starts_with("aria-") => self.aria.get(name),
            _ => self.data.get(name).cloned(),
        }
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class
            .as_deref()
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn child_opt(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Own text, if this is a text element.
    pub fn own_text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }
}
