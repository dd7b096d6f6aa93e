//! Row containers. Children pass through; only the role and class differ.

use ariadom::{Element, Role};

const COLUMN_GAP: u16 = 2;

#[derive(Debug, Clone, Default)]
pub struct HeaderRow {
    id: Option<String>,
    children: Vec<Element>,
}

impl HeaderRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn build(self) -> Element {
        row_element(self.id, "headerRow", self.children)
    }
}

#[derive(Debug, Clone, Default)]
pub struct BodyRow {
    id: Option<String>,
    children: Vec<Element>,
}

impl BodyRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn build(self) -> Element {
        row_element(self.id, "bodyRow", self.children)
    }
}

fn row_element(id: Option<String>, class: &str, children: Vec<Element>) -> Element {
    let row = Element::row()
        .role(Role::Row)
        .class(class)
        .gap(COLUMN_GAP)
        .children(children);
    match id {
        Some(id) => row.id(id),
        None => row,
    }
}
