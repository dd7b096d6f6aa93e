//! Fixed palette for the table widgets.

use ariadom::{Color, Style};

/// Icon fill colors.
pub struct IconColor;

impl IconColor {
    /// Enabled icon buttons.
    pub const DEFAULT: Color = Color::rgb(0x6c, 0x6c, 0x72);
    /// Disabled icon buttons.
    pub const DISABLED: Color = Color::rgb(0xb4, 0xb3, 0xb6);
    /// Direction arrows on a sorted column.
    pub const SORTED: Color = Color::rgb(0x91, 0x91, 0x97);
    /// Neutral sort glyph shown as a hover/focus affordance.
    pub const PREVIEW: Color = Color::rgb(0xc4, 0xc4, 0xc8);
}

pub const FOCUS_BACKGROUND: Color = Color::rgb(0x3a, 0x3a, 0x44);
pub const MUTED_TEXT: Color = Color::rgb(0x91, 0x91, 0x97);

/// Keyboard focus highlight shared by every focusable widget.
pub fn focus_style() -> Style {
    Style::new().background(FOCUS_BACKGROUND).underline()
}

pub fn header_style() -> Style {
    Style::new().bold()
}

pub fn muted_style() -> Style {
    Style::new().foreground(MUTED_TEXT)
}
