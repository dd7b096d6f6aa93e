use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::{find_element_mut, Element};
use crate::event::{Event, Key, Modifiers};
use crate::hit::{hit_test, hit_test_focusable};
use crate::layout::LayoutResult;
use crate::query::descendants;

/// Tracks which element is currently focused and processes events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Move to the next tab stop (Tab).
    ///
    /// Returns the newly focused element ID. Tabbing past the last stop
    /// leaves the sequence: focus is cleared and `None` is returned.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let stops = collect_focusable(root);
        let next = match &self.focused {
            None => stops.first().cloned(),
            Some(current) => match stops.iter().position(|id| id == current) {
                Some(i) => stops.get(i + 1).cloned(),
                None => first_stop_after(root, current, &stops),
            },
        };
        log::debug!("[focus] next from {:?} -> {:?}", self.focused, next);
        self.focused = next.clone();
        next
    }

    /// Move to the previous tab stop (Shift+Tab).
    ///
    /// Moving before the first stop clears focus.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let stops = collect_focusable(root);
        let prev = match &self.focused {
            None => stops.last().cloned(),
            Some(current) => match stops.iter().position(|id| id == current) {
                Some(i) => i.checked_sub(1).and_then(|p| stops.get(p).cloned()),
                None => stops.last().cloned(),
            },
        };
        log::debug!("[focus] prev from {:?} -> {:?}", self.focused, prev);
        self.focused = prev.clone();
        prev
    }

    /// Process raw crossterm events and produce high-level events.
    ///
    /// Tab/BackTab move focus, a left mouse press focuses the focusable
    /// element under the pointer and emits a click, every other key press
    /// becomes a [`Event::Key`] aimed at the focused element.
    pub fn process_events(
        &mut self,
        raw: &[CrosstermEvent],
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    // Only process key press events (not release/repeat on some terminals)
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }

                    let key: Key = key_event.code.into();
                    let modifiers: Modifiers = key_event.modifiers.into();

                    if key == Key::Tab || key == Key::BackTab {
                        let old = self.focused.clone();
                        let new = if key == Key::Tab {
                            self.focus_next(root)
                        } else {
                            self.focus_prev(root)
                        };
                        push_focus_change(&mut events, old, new);
                        continue;
                    }

                    events.push(Event::Key {
                        target: self.focused.clone(),
                        key,
                        modifiers,
                    });
                }

                CrosstermEvent::Mouse(mouse_event) => {
                    let (x, y) = (mouse_event.column, mouse_event.row);
                    if let MouseEventKind::Down(button) = mouse_event.kind {
                        if let Some(target) = hit_test_focusable(layout, root, x, y) {
                            if self.focused.as_ref() != Some(&target) {
                                let old = self.focused.replace(target.clone());
                                push_focus_change(&mut events, old, Some(target));
                            }
                        }
                        events.push(Event::Click {
                            target: hit_test(layout, root, x, y),
                            x,
                            y,
                            button: button.into(),
                        });
                    }
                }

                CrosstermEvent::Resize(width, height) => {
                    events.push(Event::Resize {
                        width: *width,
                        height: *height,
                    });
                }

                _ => {}
            }
        }

        events
    }
}

fn push_focus_change(events: &mut Vec<Event>, old: Option<String>, new: Option<String>) {
    if old == new {
        return;
    }
    if let Some(old) = old {
        events.push(Event::Blur {
            target: old,
            new_target: new.clone(),
        });
    }
    if let Some(new) = new {
        events.push(Event::Focus { target: new });
    }
}

/// IDs of all tab stops in Tab order: positive indices ascending, then
/// zero indices, each group in document order.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut stops: Vec<(i32, usize, &Element)> = descendants(root)
        .into_iter()
        .enumerate()
        .filter(|(_, el)| el.is_tab_stop())
        .map(|(order, el)| (el.tab_index.unwrap_or(0), order, el))
        .collect();

    stops.sort_by_key(|(index, order, _)| (*index == 0, *index, *order));
    stops.into_iter().map(|(_, _, el)| el.id.clone()).collect()
}

/// For an element outside the tab sequence (focused by pointer or script),
/// Tab continues from its document position.
fn first_stop_after(root: &Element, current: &str, stops: &[String]) -> Option<String> {
    let order = descendants(root);
    let Some(position) = order.iter().position(|el| el.id == current) else {
        return stops.first().cloned();
    };
    order[position + 1..]
        .iter()
        .find(|el| stops.contains(&el.id))
        .map(|el| el.id.clone())
}

/// Mark the focused element so the renderer applies its focus style.
pub fn apply_focus(root: &mut Element, focused: Option<&str>) {
    if let Some(id) = focused {
        if let Some(el) = find_element_mut(root, id) {
            el.focused = true;
        }
    }
}
