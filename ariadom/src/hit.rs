use crate::element::Element;
use crate::layout::LayoutResult;

/// Find the deepest enabled, clickable element at the given coordinates.
/// Returns None if no clickable element contains the point.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_element(layout, root, x, y, &|el| el.clickable && !el.disabled)
}

/// Find the focusable element at the given coordinates.
pub fn hit_test_focusable(
    layout: &LayoutResult,
    root: &Element,
    x: u16,
    y: u16,
) -> Option<String> {
    hit_test_element(layout, root, x, y, &|el| {
        el.tab_index.is_some() && !el.disabled
    })
}

fn hit_test_element(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    accept: &dyn Fn(&Element) -> bool,
) -> Option<String> {
    let rect = layout.get(&element.id)?;

    if !rect.contains(x, y) {
        return None;
    }

    // Check children in reverse order (last rendered = on top)
    for child in element.child_elements().iter().rev() {
        if let Some(id) = hit_test_element(layout, child, x, y, accept) {
            return Some(id);
        }
    }

    accept(element).then(|| element.id.clone())
}
