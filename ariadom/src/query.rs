//! Accessibility-tree queries.
//!
//! These locate elements the way assistive technology (and tests) do: by
//! role, by visible text, by accessible name. Invisible elements are still
//! part of the tree and are returned.

use crate::aria::Role;
use crate::element::{Content, Element};

/// All elements in document (pre-)order, starting with `root`.
pub fn descendants(root: &Element) -> Vec<&Element> {
    let mut out = Vec::new();
    collect(root, &mut out);
    out
}

fn collect<'a>(element: &'a Element, out: &mut Vec<&'a Element>) {
    out.push(element);
    for child in element.child_elements() {
        collect(child, out);
    }
}

pub fn query_all_by_role(root: &Element, role: Role) -> Vec<&Element> {
    descendants(root)
        .into_iter()
        .filter(|el| el.role == role)
        .collect()
}

pub fn query_by_role(root: &Element, role: Role) -> Option<&Element> {
    descendants(root).into_iter().find(|el| el.role == role)
}

/// Elements whose own text is exactly `text`.
pub fn query_all_by_text<'a>(root: &'a Element, text: &str) -> Vec<&'a Element> {
    descendants(root)
        .into_iter()
        .filter(|el| el.own_text() == Some(text))
        .collect()
}

pub fn query_by_text<'a>(root: &'a Element, text: &str) -> Option<&'a Element> {
    descendants(root)
        .into_iter()
        .find(|el| el.own_text() == Some(text))
}

/// Element whose accessible name (`aria-label`) is exactly `label`.
pub fn query_by_label<'a>(root: &'a Element, label: &str) -> Option<&'a Element> {
    descendants(root)
        .into_iter()
        .find(|el| el.aria.label.as_deref() == Some(label))
}

pub fn query_all_by_test_id<'a>(root: &'a Element, test_id: &str) -> Vec<&'a Element> {
    descendants(root)
        .into_iter()
        .filter(|el| el.get_data("data-testid").map(String::as_str) == Some(test_id))
        .collect()
}

pub fn query_by_test_id<'a>(root: &'a Element, test_id: &str) -> Option<&'a Element> {
    query_all_by_test_id(root, test_id).into_iter().next()
}

/// Concatenated text of the element and all its descendants.
pub fn text_content(element: &Element) -> String {
    match &element.content {
        Content::None => String::new(),
        Content::Text(text) => text.clone(),
        Content::Children(children) => children.iter().map(text_content).collect(),
    }
}

/// Whether `element` would be painted: it and every ancestor on the way
/// down from `root` are visible.
pub fn is_visible(root: &Element, id: &str) -> bool {
    crate::element::path_to(root, id)
        .is_some_and(|path| path.iter().all(|el| el.visible))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::col()
            .id("root")
            .child(
                Element::row()
                    .id("header")
                    .role(Role::Row)
                    .child(Element::text("Name").id("name").role(Role::ColumnHeader))
                    .child(Element::text("Age").id("age").role(Role::ColumnHeader)),
            )
            .child(
                Element::row()
                    .role(Role::Row)
                    .visible(false)
                    .child(Element::text("hidden").data("data-testid", "secret")),
            )
            .child(Element::text("go").aria_label("Go somewhere"))
    }

    #[test]
    fn descendants_are_in_document_order() {
        let root = sample();
        let ids: Vec<_> = descendants(&root).iter().map(|el| el.id.clone()).collect();
        assert_eq!(ids[0], "root");
        assert_eq!(ids[1], "header");
        assert_eq!(ids[2], "name");
        assert_eq!(ids[3], "age");
    }

    #[test]
    fn role_queries_include_invisible_elements() {
        let root = sample();
        assert_eq!(query_all_by_role(&root, Role::Row).len(), 2);
        assert_eq!(query_all_by_role(&root, Role::ColumnHeader).len(), 2);
    }

    #[test]
    fn text_and_label_queries_match_exactly() {
        let root = sample();
        assert!(query_by_text(&root, "Name").is_some());
        assert!(query_by_text(&root, "Nam").is_none());
        assert!(query_by_label(&root, "Go somewhere").is_some());
        assert_eq!(text_content(&root), "NameAgehiddengo");
    }

    #[test]
    fn visibility_follows_ancestors() {
        let root = sample();
        let secret = query_by_test_id(&root, "secret").map(|el| el.id.clone());
        let secret = secret.as_deref().unwrap_or_default();
        assert!(!is_visible(&root, secret));
        assert!(is_visible(&root, "name"));
    }
}
