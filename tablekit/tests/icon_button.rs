mod common;

use ariadom::{Color, Role};
use common::{recorder, Screen};
use tablekit::{IconButton, IconName};

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_forwards_aria_attributes() {
    let screen = Screen::render(|registry| {
        IconButton::new(IconName::PageNext)
            .aria_label("Next")
            .aria_labelled_by("next-label")
            .aria_described_by("next-help")
            .aria_expanded(false)
            .aria_has_popup(true)
            .aria_pressed(true)
            .build(registry)
    });

    let button = screen.by_role(Role::Button);
    assert_eq!(button.attr("aria-label").as_deref(), Some("Next"));
    assert_eq!(button.attr("aria-labelledby").as_deref(), Some("next-label"));
    assert_eq!(button.attr("aria-describedby").as_deref(), Some("next-help"));
    assert_eq!(button.attr("aria-expanded").as_deref(), Some("false"));
    assert_eq!(button.attr("aria-haspopup").as_deref(), Some("true"));
    assert_eq!(button.attr("aria-pressed").as_deref(), Some("true"));
    assert!(button.has_class("iconButton"));
}

#[test]
fn test_unset_aria_attributes_are_absent() {
    let screen = Screen::render(|registry| IconButton::new(IconName::PageNext).build(registry));
    let button = screen.by_role(Role::Button);
    for name in [
        "aria-label",
        "aria-labelledby",
        "aria-describedby",
        "aria-expanded",
        "aria-haspopup",
        "aria-pressed",
    ] {
        assert!(!button.has_attr(name), "{name} should be absent");
    }
}

#[test]
fn test_default_colors() {
    let screen = Screen::render(|registry| IconButton::new(IconName::PageFirst).build(registry));
    let button = screen.by_role(Role::Button);
    let icon = screen.by_role(Role::Img);

    assert_eq!(button.attr("background").as_deref(), Some("transparent"));
    assert_eq!(icon.attr("fill").as_deref(), Some("#6c6c72"));
    assert_eq!(icon.attr("name").as_deref(), Some("pageFirst"));
}

#[test]
fn test_disabled_colors() {
    let screen = Screen::render(|registry| {
        IconButton::new(IconName::PageFirst)
            .disabled(true)
            .build(registry)
    });
    assert_eq!(
        screen.by_role(Role::Img).attr("fill").as_deref(),
        Some("#b4b3b6")
    );
    assert_eq!(
        screen.by_role(Role::Button).attr("disabled").as_deref(),
        Some("true")
    );
}

#[test]
fn test_explicit_icon_color_wins_over_disabled() {
    let screen = Screen::render(|registry| {
        IconButton::new(IconName::PageFirst)
            .icon_color(Color::rgb(0x12, 0x34, 0x56))
            .button_color(Color::rgb(0xff, 0xff, 0xff))
            .disabled(true)
            .build(registry)
    });
    assert_eq!(
        screen.by_role(Role::Img).attr("fill").as_deref(),
        Some("#123456")
    );
    assert_eq!(
        screen.by_role(Role::Button).attr("background").as_deref(),
        Some("#ffffff")
    );
}

// ============================================================================
// Interaction
// ============================================================================

#[test]
fn test_click_invokes_callback() {
    let (calls, on_click) = recorder::<()>();
    let mut screen = Screen::render(|registry| {
        IconButton::new(IconName::PageNext)
            .on_click(move || on_click(()))
            .build(registry)
    });

    let id = screen.by_role(Role::Button).id.clone();
    assert!(screen.click(&id).is_handled());
    assert_eq!(calls.lock().unwrap().len(), 1);
}

#[test]
fn test_disabled_button_ignores_clicks_and_tab() {
    let (calls, on_click) = recorder::<()>();
    let mut screen = Screen::render(|registry| {
        IconButton::new(IconName::PageNext)
            .disabled(true)
            .on_click(move || on_click(()))
            .build(registry)
    });

    assert!(screen.registry.is_empty());
    let id = screen.by_role(Role::Button).id.clone();
    assert!(!screen.click(&id).is_handled());
    assert_eq!(screen.tab(), None);
    assert!(calls.lock().unwrap().is_empty());
}
