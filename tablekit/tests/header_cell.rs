mod common;

use ariadom::query::{descendants, text_content};
use ariadom::{Key, Role};
use common::{recorder, Screen};
use tablekit::{HeaderCell, SortArgs, SortDirection, SortIcon};

fn args(direction: Option<SortDirection>) -> SortArgs {
    SortArgs {
        data_key: "id".to_string(),
        title: "fake title".to_string(),
        direction,
    }
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_renders_with_default_props() {
    let screen = Screen::render(|registry| HeaderCell::new("id", "fake title").build(registry));

    let cell = screen.by_role(Role::ColumnHeader);
    assert!(screen.text_visible("fake title"));
    assert!(!cell.has_attr("aria-sort"));
    assert_eq!(cell.attr("colspan").as_deref(), Some("1"));
    assert_eq!(cell.attr("rowspan").as_deref(), Some("1"));
    assert_eq!(cell.attr("scope").as_deref(), Some("col"));
    assert_eq!(cell.attr("tabindex").as_deref(), Some("0"));
    assert!(cell.has_class("headerCell"));

    let content = descendants(cell)
        .into_iter()
        .find(|el| el.has_class("content"))
        .expect("content wrapper");
    assert_eq!(text_content(content), "fake title");

    assert!(screen.by_test_id("sortIcon").is_none());
    assert!(screen.all_by_role(Role::Img).is_empty());
}

#[test]
fn test_spans_and_tab_index_override() {
    let mut screen = Screen::render(|registry| {
        HeaderCell::new("id", "fake title")
            .col_span(19)
            .row_span(12)
            .tab_index(-1)
            .build(registry)
    });

    let cell = screen.by_role(Role::ColumnHeader);
    assert_eq!(cell.attr("colspan").as_deref(), Some("19"));
    assert_eq!(cell.attr("rowspan").as_deref(), Some("12"));

    assert_eq!(screen.tab(), None);
    assert_eq!(screen.focused(), None);
}

#[test]
fn test_ascending_sets_aria_sort_and_icon() {
    let screen = Screen::render(|registry| {
        HeaderCell::new("id", "fake title")
            .sort_direction(Some(SortDirection::Ascending))
            .build(registry)
    });

    let cell = screen.by_role(Role::ColumnHeader);
    assert_eq!(cell.attr("aria-sort").as_deref(), Some("ascending"));

    let sort_icon = screen.by_test_id("sortIcon").expect("sort icon");
    assert_eq!(sort_icon.attr("aria-hidden").as_deref(), Some("true"));
    let icon = screen.by_role(Role::Img);
    assert_eq!(icon.attr("name").as_deref(), Some("arrowUp"));
    assert_eq!(icon.attr("fill").as_deref(), Some("#919197"));
}

#[test]
fn test_descending_sets_aria_sort_and_icon() {
    let screen = Screen::render(|registry| {
        HeaderCell::new("id", "fake title")
            .sort_direction(Some(SortDirection::Descending))
            .build(registry)
    });

    let cell = screen.by_role(Role::ColumnHeader);
    assert_eq!(cell.attr("aria-sort").as_deref(), Some("descending"));

    let sort_icon = screen.by_test_id("sortIcon").expect("sort icon");
    assert_eq!(sort_icon.attr("aria-hidden").as_deref(), Some("true"));
    assert_eq!(
        screen.by_role(Role::Img).attr("name").as_deref(),
        Some("arrowDown")
    );
    assert!(screen.frame().contains_text("fake title ▼"));
}

// ============================================================================
// Interaction
// ============================================================================

#[test]
fn test_keyboard_and_pointer_activation() {
    let (calls, on_click) = recorder();
    let mut screen = Screen::render(|registry| {
        HeaderCell::new("id", "fake title")
            .sort_direction(Some(SortDirection::Descending))
            .on_click(on_click)
            .build(registry)
    });
    let cell_id = screen.by_role(Role::ColumnHeader).id.clone();

    assert_eq!(screen.focused(), None);
    assert_eq!(screen.tab().as_deref(), Some(cell_id.as_str()));

    assert!(!screen.press(Key::Char('d')).is_handled());
    assert!(calls.lock().unwrap().is_empty());

    assert!(screen.press(Key::Enter).is_handled());
    assert_eq!(calls.lock().unwrap().len(), 1);

    assert!(screen.press(Key::Char(' ')).is_handled());
    assert_eq!(calls.lock().unwrap().len(), 2);

    assert!(screen.click(&cell_id).is_handled());
    assert_eq!(
        *calls.lock().unwrap(),
        vec![
            args(Some(SortDirection::Descending)),
            args(Some(SortDirection::Descending)),
            args(Some(SortDirection::Descending)),
        ]
    );
}

#[test]
fn test_click_on_title_reaches_header() {
    let (calls, on_click) = recorder();
    let mut screen =
        Screen::render(|registry| HeaderCell::new("id", "fake title").on_click(on_click).build(registry));

    let title_id = screen.by_text("fake title").expect("title").id.clone();
    assert!(screen.click(&title_id).is_handled());
    assert_eq!(*calls.lock().unwrap(), vec![args(None)]);
}

// ============================================================================
// SortIcon
// ============================================================================

#[test]
fn test_sort_icon_renders_nothing_by_default() {
    assert!(SortIcon::new().build().is_none());
    assert!(SortIcon::new().preview_visible(false).build().is_none());
}

#[test]
fn test_sort_icon_preview() {
    let icon = SortIcon::new().preview_visible(true).build().expect("preview");
    assert_eq!(icon.attr("name").as_deref(), Some("sort"));
    assert_eq!(icon.attr("fill").as_deref(), Some("#c4c4c8"));
}

#[test]
fn test_sort_icon_direction_wins_over_preview() {
    let icon = SortIcon::new()
        .preview_visible(true)
        .direction(Some(SortDirection::Descending))
        .build()
        .expect("arrow");
    assert_eq!(icon.attr("name").as_deref(), Some("arrowDown"));
    assert_eq!(icon.attr("fill").as_deref(), Some("#919197"));

    let icon = SortIcon::new()
        .preview_visible(false)
        .direction(Some(SortDirection::Ascending))
        .build()
        .expect("arrow");
    assert_eq!(icon.attr("name").as_deref(), Some("arrowUp"));
}
