use ariadom::{Element, Role, Style};

const DEFAULT_FONT_WEIGHT: u16 = 500;

/// A single data cell.
#[derive(Debug, Clone)]
pub struct Cell {
    value: String,
    col_span: u16,
    row_span: u16,
    font_weight: u16,
    width: Option<u16>,
}

impl Cell {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            col_span: 1,
            row_span: 1,
            font_weight: DEFAULT_FONT_WEIGHT,
            width: None,
        }
    }

    pub fn col_span(mut self, span: u16) -> Self {
        self.col_span = span;
        self
    }

    pub fn row_span(mut self, span: u16) -> Self {
        self.row_span = span;
        self
    }

    /// CSS-style weight; 600 and above render bold.
    pub fn font_weight(mut self, weight: u16) -> Self {
        self.font_weight = weight;
        self
    }

    /// Minimum column width in terminal cells.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn build(self) -> Element {
        let mut style = Style::new();
        if self.font_weight >= 600 {
            style = style.bold();
        }
        let mut elem = Element::text(self.value)
            .role(Role::Cell)
            .data("colspan", self.col_span.to_string())
            .data("rowspan", self.row_span.to_string())
            .data("font-weight", self.font_weight.to_string())
            .style(style);
        if let Some(width) = self.width {
            elem = elem.min_width(width);
        }
        elem
    }
}
