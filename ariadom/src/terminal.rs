use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::element::Element;
use crate::layout::LayoutResult;
use crate::render::{render, Frame, Span};
use crate::types::Color;

pub struct Terminal {
    stdout: io::Stdout,
    last_frame: Frame,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self {
            stdout,
            last_frame: Frame::default(),
        })
    }

    /// Columns and rows. `draw` clips output to the row count.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                // Block until event
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Render `root` and repaint the whole screen.
    pub fn draw(&mut self, root: &Element) -> io::Result<&LayoutResult> {
        let frame = render(root);
        let (_, height) = self.size()?;

        queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        for (y, line) in frame.lines.iter().take(usize::from(height)).enumerate() {
            let y = u16::try_from(y).unwrap_or(u16::MAX);
            queue!(self.stdout, cursor::MoveTo(0, y))?;
            for span in &line.spans {
                self.write_span(span)?;
            }
        }
        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;

        self.last_frame = frame;
        Ok(&self.last_frame.layout)
    }

    /// Get the layout from the last render.
    pub fn layout(&self) -> &LayoutResult {
        &self.last_frame.layout
    }

    fn write_span(&mut self, span: &Span) -> io::Result<()> {
        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        if let Some(fg) = span.style.foreground.and_then(Color::to_rgb) {
            queue!(
                self.stdout,
                SetForegroundColor(CtColor::Rgb {
                    r: fg.r,
                    g: fg.g,
                    b: fg.b,
                })
            )?;
        }
        if let Some(bg) = span.style.background.and_then(Color::to_rgb) {
            queue!(
                self.stdout,
                SetBackgroundColor(CtColor::Rgb {
                    r: bg.r,
                    g: bg.g,
                    b: bg.b,
                })
            )?;
        }
        if span.style.bold {
            queue!(self.stdout, SetAttribute(Attribute::Bold))?;
        }
        if span.style.underline {
            queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
        }
        queue!(self.stdout, Print(&span.text))
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
