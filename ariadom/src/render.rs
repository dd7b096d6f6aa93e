//! Line-oriented renderer.
//!
//! Turns an element tree into styled text lines. `Row` elements place their
//! children side by side, `Column` elements stack them. Every painted element
//! gets a rectangle in the returned layout so pointer input can be hit-tested.

use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::display_width;
use crate::types::{Direction, Style};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    fn styled(text: &str, style: &Style) -> Self {
        Self {
            spans: vec![Span {
                text: text.to_string(),
                style: style.clone(),
            }],
        }
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(|span| display_width(&span.text)).sum()
    }

    /// The line without styling.
    pub fn plain(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    fn pad(&mut self, width: usize, style: &Style) {
        let current = self.width();
        if current < width {
            self.spans.push(Span {
                text: " ".repeat(width - current),
                style: style.clone(),
            });
        }
    }

    fn append(&mut self, other: Line) {
        self.spans.extend(other.spans);
    }
}

/// Output of one render pass.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub lines: Vec<Line>,
    pub layout: LayoutResult,
}

impl Frame {
    pub fn to_plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.plain().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.plain().contains(needle))
    }
}

struct Block {
    lines: Vec<Line>,
    width: usize,
}

pub fn render(root: &Element) -> Frame {
    let mut layout = LayoutResult::new();
    let lines = render_element(root, 0, 0, &Style::default(), &mut layout)
        .map(|block| block.lines)
        .unwrap_or_default();
    Frame { lines, layout }
}

fn render_element(
    element: &Element,
    x: usize,
    y: usize,
    inherited: &Style,
    layout: &mut LayoutResult,
) -> Option<Block> {
    if !element.visible {
        return None;
    }

    let mut style = inherited.patch(&element.style);
    let state_style = if element.disabled {
        element.style_disabled.as_ref()
    } else if element.focused {
        element.style_focused.as_ref()
    } else {
        None
    };
    if let Some(state_style) = state_style {
        style = style.patch(state_style);
    }

    let mut block = match &element.content {
        Content::None => Block {
            lines: Vec::new(),
            width: 0,
        },
        Content::Text(text) => {
            let lines: Vec<Line> = text.split('\n').map(|l| Line::styled(l, &style)).collect();
            let width = lines.iter().map(Line::width).max().unwrap_or(0);
            Block { lines, width }
        }
        Content::Children(children) => match element.direction {
            Direction::Column => stack(children, x, y, element.gap, &style, layout),
            Direction::Row => side_by_side(children, x, y, element.gap, &style, layout),
        },
    };

    block.width = block.width.max(element.min_width.map(usize::from).unwrap_or(0));
    for line in &mut block.lines {
        line.pad(block.width, &style);
    }

    layout.insert(
        element.id.clone(),
        Rect::new(
            to_u16(x),
            to_u16(y),
            to_u16(block.width),
            to_u16(block.lines.len()),
        ),
    );
    Some(block)
}

fn stack(
    children: &[Element],
    x: usize,
    y: usize,
    gap: u16,
    style: &Style,
    layout: &mut LayoutResult,
) -> Block {
    let mut lines = Vec::new();
    let mut width = 0;

    for child in children {
        if !child.visible {
            continue;
        }
        if !lines.is_empty() {
            lines.extend((0..gap).map(|_| Line::default()));
        }
        if let Some(block) = render_element(child, x, y + lines.len(), style, layout) {
            width = width.max(block.width);
            lines.extend(block.lines);
        }
    }

    Block { lines, width }
}

fn side_by_side(
    children: &[Element],
    x: usize,
    y: usize,
    gap: u16,
    style: &Style,
    layout: &mut LayoutResult,
) -> Block {
    let gap = usize::from(gap);
    let mut cursor = x;
    let mut blocks: Vec<(usize, Block)> = Vec::new();

    for child in children {
        if !child.visible {
            continue;
        }
        let gap_before = if blocks.is_empty() { 0 } else { gap };
        cursor += gap_before;
        if let Some(block) = render_element(child, cursor, y, style, layout) {
            cursor += block.width;
            blocks.push((gap_before, block));
        }
    }

    let height = blocks.iter().map(|(_, b)| b.lines.len()).max().unwrap_or(0);
    let lines = (0..height)
        .map(|row| {
            let mut line = Line::default();
            for (gap_before, block) in &blocks {
                if *gap_before > 0 {
                    line.append(Line::styled(&" ".repeat(*gap_before), style));
                }
                let mut part = block.lines.get(row).cloned().unwrap_or_default();
                part.pad(block.width, style);
                line.append(part);
            }
            line
        })
        .collect();

    Block {
        lines,
        width: cursor - x,
    }
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
