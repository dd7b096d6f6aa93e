use unicode_width::UnicodeWidthStr;

/// Terminal columns occupied by `s`.
pub fn display_width(s: &str) -> usize {
    s.width()
}
