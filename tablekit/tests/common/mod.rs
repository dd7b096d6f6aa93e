#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use ariadom::query::{
    is_visible, query_all_by_role, query_by_label, query_by_test_id, query_by_text,
};
use ariadom::{render, Element, Event, FocusState, Frame, Key, Role};
use tablekit::{DispatchResult, EventDispatcher, HandlerRegistry};

/// A built widget tree plus the handlers it registered, driven like a user would.
pub struct Screen {
    pub root: Element,
    pub registry: HandlerRegistry,
    pub focus: FocusState,
}

impl Screen {
    pub fn render(build: impl FnOnce(&HandlerRegistry) -> Element) -> Self {
        let registry = HandlerRegistry::new();
        let root = build(&registry);
        Self {
            root,
            registry,
            focus: FocusState::new(),
        }
    }

    pub fn frame(&self) -> Frame {
        render(&self.root)
    }

    // Queries

    pub fn all_by_role(&self, role: Role) -> Vec<&Element> {
        query_all_by_role(&self.root, role)
    }

    pub fn by_role(&self, role: Role) -> &Element {
        self.all_by_role(role)
            .into_iter()
            .next()
            .unwrap_or_else(|| panic!("no element with role {}", role.as_str()))
    }

    pub fn by_text(&self, text: &str) -> Option<&Element> {
        query_by_text(&self.root, text)
    }

    pub fn by_label(&self, label: &str) -> &Element {
        query_by_label(&self.root, label)
            .unwrap_or_else(|| panic!("no element labelled {label:?}"))
    }

    pub fn by_test_id(&self, test_id: &str) -> Option<&Element> {
        query_by_test_id(&self.root, test_id)
    }

    /// The text exists in the tree and would be painted.
    pub fn text_visible(&self, text: &str) -> bool {
        self.by_text(text)
            .is_some_and(|el| is_visible(&self.root, &el.id) && self.frame().contains_text(text))
    }

    // Interaction

    fn dispatch(&self, event: &Event) -> DispatchResult {
        EventDispatcher::new(&self.root, &self.registry).dispatch(event)
    }

    /// Pointer click: focuses the element when focusable, then activates.
    pub fn click(&mut self, id: &str) -> DispatchResult {
        if let Some(el) = ariadom::element::find_element(&self.root, id) {
            if el.tab_index.is_some() && !el.disabled {
                self.focus.focus(id);
            }
        }
        self.dispatch(&Event::click(id))
    }

    pub fn tab(&mut self) -> Option<String> {
        self.focus.focus_next(&self.root)
    }

    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    /// Key press on the focused element.
    pub fn press(&self, key: Key) -> DispatchResult {
        self.dispatch(&Event::key(self.focus.focused(), key))
    }

    pub fn change(&self, id: &str, value: &str) -> DispatchResult {
        self.dispatch(&Event::Change {
            target: id.to_string(),
            value: value.to_string(),
        })
    }
}

/// Shared call log plus a callback that appends to it.
pub fn recorder<T: Send + 'static>() -> (Arc<Mutex<Vec<T>>>, impl Fn(T) + Send + Sync + 'static) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = calls.clone();
    (calls, move |value: T| sink.lock().unwrap().push(value))
}
