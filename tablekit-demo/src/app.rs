//! Terminal event loop for the demo.

use std::io;
use std::time::{Duration, Instant};

use ariadom::{apply_focus, Element, Event, FocusState, Terminal};
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers};
use log::{debug, info};
use tablekit::theme::{header_style, muted_style};
use tablekit::{EventDispatcher, HandlerRegistry};

use crate::host::TableHost;
use crate::settings::DemoSettings;

const TICK: Duration = Duration::from_millis(50);

/// Simulated latency between a reload and its result.
const FETCH_DELAY: Duration = Duration::from_millis(400);

const HELP: &str = "Tab/Shift+Tab move  Enter/Space activate  Up/Down rows per page  r reload  q quit";

enum Command {
    Quit,
    Reload,
}

pub fn run(settings: DemoSettings) -> io::Result<()> {
    let host = TableHost::new(&settings);
    host.reload();

    let mut terminal = Terminal::new()?;
    let mut focus = FocusState::new();
    let registry = HandlerRegistry::new();
    let mut fetch_started: Option<Instant> = None;
    let mut needs_draw = true;
    let mut drawn: Option<Element> = None;

    info!("Event loop started");

    loop {
        if host.is_fetching() {
            let started = *fetch_started.get_or_insert_with(Instant::now);
            if started.elapsed() >= FETCH_DELAY {
                host.tick();
                fetch_started = None;
            }
        }

        // Handlers, focus and hit testing all refer to the tree last drawn.
        if drawn.is_none() || needs_draw || host.state().is_dirty() {
            let root = rebuild(&host, &registry, &focus);
            terminal.draw(&root)?;
            host.state().clear_dirty();
            needs_draw = false;
            drawn = Some(root);
        }
        let Some(root) = drawn.as_ref() else {
            continue;
        };

        let raw = terminal.poll(Some(TICK))?;
        if raw.is_empty() {
            continue;
        }

        match command(&raw) {
            Some(Command::Quit) => break,
            Some(Command::Reload) => {
                host.reload();
                continue;
            }
            None => {}
        }

        let events = focus.process_events(&raw, root, terminal.layout());
        let dispatcher = EventDispatcher::new(root, &registry);
        for event in &events {
            match event {
                Event::Focus { .. } | Event::Blur { .. } | Event::Resize { .. } => {
                    needs_draw = true;
                }
                _ => {
                    let result = dispatcher.dispatch(event);
                    debug!("{event:?} -> {result:?}");
                }
            }
        }
    }

    info!("Event loop finished");
    Ok(())
}

/// Fresh tree for the current host state with handlers registered anew.
fn rebuild(host: &TableHost, registry: &HandlerRegistry, focus: &FocusState) -> Element {
    registry.clear();
    let mut root = screen(host, registry);
    apply_focus(&mut root, focus.focused());
    root
}

fn screen(host: &TableHost, registry: &HandlerRegistry) -> Element {
    Element::col()
        .id("screen")
        .gap(1)
        .child(Element::text("tablekit demo").style(header_style()))
        .child(host.build(registry))
        .child(Element::text(HELP).style(muted_style()))
}

fn command(raw: &[CrosstermEvent]) -> Option<Command> {
    raw.iter().find_map(|event| {
        let CrosstermEvent::Key(key) = event else {
            return None;
        };
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Command::Quit)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
            KeyCode::Char('r') if key.modifiers.is_empty() => Some(Command::Reload),
            _ => None,
        }
    })
}
