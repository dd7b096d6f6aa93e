mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    root.child_elements()
        .iter()
        .find_map(|child| find_element(child, id))
}

/// Mutable variant of [`find_element`].
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    match &mut root.content {
        Content::Children(children) => children
            .iter_mut()
            .find_map(|child| find_element_mut(child, id)),
        _ => None,
    }
}

/// Elements from the root down to (and including) the element with `id`.
pub fn path_to<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    if root.id == id {
        return Some(vec![root]);
    }

    for child in root.child_elements() {
        if let Some(mut path) = path_to(child, id) {
            path.insert(0, root);
            return Some(path);
        }
    }

    None
}
