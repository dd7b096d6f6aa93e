//! Icon-bearing button.

use std::sync::Arc;

use ariadom::{Aria, Color, Element, Role, Style};

use crate::handler::{ClickCallback, EventData, HandlerRegistry, ON_ACTIVATE};
use crate::icon::{Icon, IconName};
use crate::theme::{focus_style, IconColor};

/// Fill color for the icon: explicit color, then disabled, then default.
pub fn resolve_icon_color(icon_color: Option<Color>, disabled: bool) -> Color {
    match icon_color {
        Some(color) => color,
        None if disabled => IconColor::DISABLED,
        None => IconColor::DEFAULT,
    }
}

/// A pressable control that renders a single icon.
///
/// ARIA attributes are forwarded verbatim to the `button` element. Disabled
/// buttons are skipped by Tab, ignore the pointer and register no handler.
#[derive(Clone, Default)]
pub struct IconButton {
    id: Option<String>,
    icon_name: Option<IconName>,
    icon_color: Option<Color>,
    button_color: Option<Color>,
    disabled: bool,
    aria: Aria,
    on_click: Option<ClickCallback>,
}

impl IconButton {
    pub fn new(icon_name: IconName) -> Self {
        Self {
            icon_name: Some(icon_name),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Override the resolved icon fill.
    pub fn icon_color(mut self, color: Color) -> Self {
        self.icon_color = Some(color);
        self
    }

    /// Button background. Defaults to transparent.
    pub fn button_color(mut self, color: Color) -> Self {
        self.button_color = Some(color);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria.label = Some(label.into());
        self
    }

    pub fn aria_labelled_by(mut self, id: impl Into<String>) -> Self {
        self.aria.labelled_by = Some(id.into());
        self
    }

    pub fn aria_described_by(mut self, id: impl Into<String>) -> Self {
        self.aria.described_by = Some(id.into());
        self
    }

    pub fn aria_expanded(mut self, expanded: bool) -> Self {
        self.aria.expanded = Some(expanded);
        self
    }

    pub fn aria_has_popup(mut self, has_popup: bool) -> Self {
        self.aria.has_popup = Some(has_popup);
        self
    }

    pub fn aria_pressed(mut self, pressed: bool) -> Self {
        self.aria.pressed = Some(pressed);
        self
    }

    pub fn on_click(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_click = Some(Arc::new(f));
        self
    }

    pub fn build(self, registry: &HandlerRegistry) -> Element {
        let fill = resolve_icon_color(self.icon_color, self.disabled);
        let background = self.button_color.unwrap_or(Color::Transparent);
        let icon = Icon::new(self.icon_name.unwrap_or(IconName::Sort))
            .fill(fill)
            .build();

        let mut style = Style::new();
        if let Color::Rgb(_) = background {
            style = style.background(background);
        }

        let mut elem = Element::row()
            .role(Role::Button)
            .class("iconButton")
            .aria(self.aria)
            .data("background", background.to_string())
            .style(style)
            .style_focused(focus_style())
            .clickable(!self.disabled)
            .disabled(self.disabled)
            .child(Element::text(" "))
            .child(icon)
            .child(Element::text(" "));
        if let Some(id) = self.id {
            elem = elem.id(id);
        }
        if !self.disabled {
            elem = elem.tab_index(0);
            if let Some(on_click) = self.on_click {
                registry.register(
                    &elem.id,
                    ON_ACTIVATE,
                    Arc::new(move |_: &EventData| on_click()),
                );
            }
        }
        elem
    }
}

impl std::fmt::Debug for IconButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconButton")
            .field("id", &self.id)
            .field("icon_name", &self.icon_name)
            .field("disabled", &self.disabled)
            .field("aria", &self.aria)
            .finish_non_exhaustive()
    }
}
