use super::Color;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub bold: bool,
    pub underline: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Layer `other` on top of `self`. Colors set on `other` win, flags accumulate.
    pub fn patch(&self, other: &Style) -> Style {
        Style {
            background: other.background.or(self.background),
            foreground: other.foreground.or(self.foreground),
            bold: self.bold || other.bold,
            underline: self.underline || other.underline,
        }
    }
}
