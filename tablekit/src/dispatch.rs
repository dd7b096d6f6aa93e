//! Event dispatch for widget trees.
//!
//! Turns high-level [`ariadom::Event`]s into handler invocations:
//! 1. Clicks activate the target or its nearest ancestor with an `on_activate` handler
//! 2. Enter / Space activate the focused element
//! 3. Up / Down on a combobox step through its options and fire `on_change`
//! 4. Change events fire `on_change` with the raw value

use ariadom::element::{find_element, path_to};
use ariadom::query::descendants;
use ariadom::{Element, Event, Key, Modifiers, Role};
use thiserror::Error;

use crate::handler::{EventData, HandlerRegistry, ON_ACTIVATE, ON_CHANGE};

// =============================================================================
// DispatchResult
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// No handler ran.
    NotHandled,
    /// An `on_activate` handler ran.
    Activated,
    /// An `on_change` handler ran.
    Changed,
}

impl DispatchResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, DispatchResult::NotHandled)
    }
}

// =============================================================================
// DispatchError
// =============================================================================

/// Reasons an event did not reach a handler. Logged, never surfaced to callers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("no element with id `{0}`")]
    UnknownTarget(String),

    #[error("element `{0}` is disabled")]
    Disabled(String),

    #[error("no `{event}` handler for `{id}`")]
    NoHandler { id: String, event: String },

    #[error("`{0}` is not a positive integer")]
    InvalidValue(String),
}

/// Parse a form value as a positive integer (page sizes, page numbers).
pub fn parse_positive(value: &str) -> Result<u32, DispatchError> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| DispatchError::InvalidValue(value.to_string()))
}

// =============================================================================
// EventDispatcher
// =============================================================================

/// Dispatches events against one rendered tree and the handlers it registered.
pub struct EventDispatcher<'a> {
    root: &'a Element,
    registry: &'a HandlerRegistry,
}

impl<'a> EventDispatcher<'a> {
    pub fn new(root: &'a Element, registry: &'a HandlerRegistry) -> Self {
        Self { root, registry }
    }

    /// Dispatch one event. At most one handler runs.
    pub fn dispatch(&self, event: &Event) -> DispatchResult {
        let outcome = match event {
            Event::Click {
                target: Some(target),
                ..
            } => self.activate_nearest(target),
            Event::Key {
                target: Some(target),
                key,
                modifiers,
            } if !command_modifier(modifiers) => self.dispatch_key(target, *key),
            Event::Change { target, value } => self.change(target, value),
            _ => return DispatchResult::NotHandled,
        };

        match outcome {
            Ok(result) => result,
            Err(err) => {
                log::debug!("[dispatch] {err}");
                DispatchResult::NotHandled
            }
        }
    }

    fn dispatch_key(&self, target: &str, key: Key) -> Result<DispatchResult, DispatchError> {
        match key {
            Key::Enter | Key::Char(' ') => self.activate(target),
            Key::Up => self.step_option(target, -1),
            Key::Down => self.step_option(target, 1),
            _ => Ok(DispatchResult::NotHandled),
        }
    }

    // =========================================================================
    // Activation
    // =========================================================================

    fn activate(&self, target: &str) -> Result<DispatchResult, DispatchError> {
        let element = self.element(target)?;
        if element.disabled {
            return Err(DispatchError::Disabled(target.to_string()));
        }
        self.fire(target, ON_ACTIVATE, &EventData::None)?;
        Ok(DispatchResult::Activated)
    }

    /// Pointer activation bubbles to the nearest ancestor with a handler,
    /// stopping at a disabled element.
    fn activate_nearest(&self, target: &str) -> Result<DispatchResult, DispatchError> {
        let path = path_to(self.root, target)
            .ok_or_else(|| DispatchError::UnknownTarget(target.to_string()))?;

        for element in path.iter().rev() {
            if element.disabled {
                return Err(DispatchError::Disabled(element.id.clone()));
            }
            if self.registry.contains(&element.id, ON_ACTIVATE) {
                log::debug!("[dispatch] click on {target} activates {}", element.id);
                return self.activate(&element.id);
            }
        }

        Err(DispatchError::NoHandler {
            id: target.to_string(),
            event: ON_ACTIVATE.to_string(),
        })
    }

    // =========================================================================
    // Form Controls
    // =========================================================================

    fn change(&self, target: &str, value: &str) -> Result<DispatchResult, DispatchError> {
        let element = self.element(target)?;
        if element.disabled {
            return Err(DispatchError::Disabled(target.to_string()));
        }
        self.fire(
            target,
            ON_CHANGE,
            &EventData::Change {
                value: value.to_string(),
            },
        )?;
        Ok(DispatchResult::Changed)
    }

    /// Move a combobox selection by one option and commit it.
    fn step_option(&self, target: &str, step: i32) -> Result<DispatchResult, DispatchError> {
        let element = self.element(target)?;
        if element.role != Role::Combobox {
            return Ok(DispatchResult::NotHandled);
        }

        let options: Vec<&Element> = descendants(element)
            .into_iter()
            .filter(|el| el.role == Role::ListOption)
            .collect();
        let current = options
            .iter()
            .position(|el| el.get_data("selected").is_some_and(|s| s == "true"));

        let next = match (current, step > 0) {
            (None, true) => Some(0),
            (Some(i), true) => Some(i + 1),
            (Some(i), false) => i.checked_sub(1),
            (None, false) => None,
        };
        let Some(value) = next
            .and_then(|i| options.get(i))
            .and_then(|option| option.get_data("value"))
        else {
            return Ok(DispatchResult::NotHandled);
        };

        self.change(target, value)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn element(&self, id: &str) -> Result<&'a Element, DispatchError> {
        find_element(self.root, id).ok_or_else(|| DispatchError::UnknownTarget(id.to_string()))
    }

    fn fire(&self, id: &str, event: &str, data: &EventData) -> Result<(), DispatchError> {
        let handler = self
            .registry
            .get(id, event)
            .ok_or_else(|| DispatchError::NoHandler {
                id: id.to_string(),
                event: event.to_string(),
            })?;
        handler(data);
        Ok(())
    }
}

/// Ctrl / Alt chords belong to the host, not to widgets.
fn command_modifier(modifiers: &Modifiers) -> bool {
    modifiers.ctrl || modifiers.alt
}
