use ariadom::{render, Color, Element, Rect, Style};

// ============================================================================
// Text and Stacking
// ============================================================================

#[test]
fn test_text_renders_one_line() {
    let frame = render(&Element::text("Hello").id("t"));
    assert_eq!(frame.to_plain_text(), "Hello");
    assert_eq!(frame.layout.get("t"), Some(&Rect::new(0, 0, 5, 1)));
}

#[test]
fn test_multiline_text_splits_on_newline() {
    let frame = render(&Element::text("one\ntwo").id("t"));
    assert_eq!(frame.lines.len(), 2);
    assert_eq!(frame.to_plain_text(), "one\ntwo");
    assert_eq!(frame.layout.get("t"), Some(&Rect::new(0, 0, 3, 2)));
}

#[test]
fn test_column_stacks_children() {
    let root = Element::col()
        .id("root")
        .child(Element::text("first").id("a"))
        .child(Element::text("second").id("b"));

    let frame = render(&root);
    assert_eq!(frame.to_plain_text(), "first\nsecond");
    assert_eq!(frame.layout.get("b"), Some(&Rect::new(0, 1, 6, 1)));
    assert_eq!(frame.layout.get("root"), Some(&Rect::new(0, 0, 6, 2)));
}

#[test]
fn test_column_gap_inserts_blank_lines() {
    let root = Element::col()
        .gap(1)
        .child(Element::text("a"))
        .child(Element::text("b"));

    let frame = render(&root);
    assert_eq!(frame.to_plain_text(), "a\n\nb");
}

#[test]
fn test_row_places_children_side_by_side() {
    let root = Element::row()
        .id("root")
        .gap(1)
        .child(Element::text("ab").id("a"))
        .child(Element::text("cd").id("b"));

    let frame = render(&root);
    assert_eq!(frame.to_plain_text(), "ab cd");
    assert_eq!(frame.layout.get("b"), Some(&Rect::new(3, 0, 2, 1)));
    assert_eq!(frame.layout.get("root"), Some(&Rect::new(0, 0, 5, 1)));
}

#[test]
fn test_row_pads_shorter_children() {
    let root = Element::row()
        .child(Element::text("x\ny"))
        .child(Element::text("z"));

    let frame = render(&root);
    assert_eq!(frame.lines[0].plain(), "xz");
    assert_eq!(frame.lines[1].plain(), "y ");
}

// ============================================================================
// Sizing and Visibility
// ============================================================================

#[test]
fn test_min_width_pads_content() {
    let root = Element::row()
        .child(Element::text("id").min_width(6))
        .child(Element::text("|"));

    let frame = render(&root);
    assert_eq!(frame.to_plain_text(), "id    |");
}

#[test]
fn test_wide_characters_use_display_width() {
    let root = Element::row()
        .child(Element::text("日本").id("wide"))
        .child(Element::text("|"));

    let frame = render(&root);
    assert_eq!(frame.layout.get("wide").map(|r| r.width), Some(4));
}

#[test]
fn test_invisible_elements_are_skipped() {
    let root = Element::col()
        .child(Element::text("shown"))
        .child(Element::text("hidden").id("hidden").visible(false));

    let frame = render(&root);
    assert_eq!(frame.to_plain_text(), "shown");
    assert!(frame.layout.get("hidden").is_none());
    assert!(!frame.contains_text("hidden"));
}

#[test]
fn test_aria_hidden_content_is_still_painted() {
    let root = Element::row().child(Element::text("^").aria_hidden(true));
    assert!(render(&root).contains_text("^"));
}

// ============================================================================
// Styling
// ============================================================================

#[test]
fn test_children_inherit_parent_style() {
    let red = Color::rgb(255, 0, 0);
    let root = Element::row()
        .style(Style::new().foreground(red))
        .child(Element::text("x"));

    let frame = render(&root);
    assert_eq!(frame.lines[0].spans[0].style.foreground, Some(red));
}

#[test]
fn test_focused_style_applies_only_when_focused() {
    let focus = Style::new().bold();
    let mut el = Element::text("btn").style_focused(focus);

    let frame = render(&el);
    assert!(!frame.lines[0].spans[0].style.bold);

    el.focused = true;
    let frame = render(&el);
    assert!(frame.lines[0].spans[0].style.bold);
}

#[test]
fn test_disabled_style_wins_over_focus() {
    let grey = Color::rgb(0xb4, 0xb3, 0xb6);
    let mut el = Element::text("btn")
        .disabled(true)
        .style_focused(Style::new().bold())
        .style_disabled(Style::new().foreground(grey));
    el.focused = true;

    let frame = render(&el);
    let style = &frame.lines[0].spans[0].style;
    assert_eq!(style.foreground, Some(grey));
    assert!(!style.bold);
}
