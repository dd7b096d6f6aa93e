//! Glyph-by-name icon renderer.

use ariadom::{Color, Element, Role, Style};

use crate::theme::IconColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    ArrowUp,
    ArrowDown,
    Sort,
    PageFirst,
    PagePrevious,
    PageNext,
    PageLast,
}

impl IconName {
    /// Symbolic name, exposed as the `name` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            IconName::ArrowUp => "arrowUp",
            IconName::ArrowDown => "arrowDown",
            IconName::Sort => "sort",
            IconName::PageFirst => "pageFirst",
            IconName::PagePrevious => "pagePrevious",
            IconName::PageNext => "pageNext",
            IconName::PageLast => "pageLast",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            IconName::ArrowUp => "▲",
            IconName::ArrowDown => "▼",
            IconName::Sort => "↕",
            IconName::PageFirst => "«",
            IconName::PagePrevious => "‹",
            IconName::PageNext => "›",
            IconName::PageLast => "»",
        }
    }
}

/// An icon element builder. Pure: same name and fill, same element.
#[derive(Debug, Clone)]
pub struct Icon {
    name: IconName,
    fill: Color,
}

impl Icon {
    pub fn new(name: IconName) -> Self {
        Self {
            name,
            fill: IconColor::DEFAULT,
        }
    }

    pub fn fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn build(self) -> Element {
        let mut style = Style::new();
        if let Color::Rgb(_) = self.fill {
            style = style.foreground(self.fill);
        }
        Element::text(self.name.glyph())
            .role(Role::Img)
            .data("name", self.name.as_str())
            .data("fill", self.fill.to_string())
            .style(style)
    }
}
