//! Handler storage for widget callbacks.
//!
//! Widgets register closures during `build` keyed by `(element_id, event)`.
//! The dispatcher looks them up when an input event targets that element.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::sort::SortArgs;

/// Activation: pointer click, Enter, or Space.
pub const ON_ACTIVATE: &str = "on_activate";
/// Value committed by a form control.
pub const ON_CHANGE: &str = "on_change";

// =============================================================================
// Handler Types
// =============================================================================

/// A registered handler closure.
pub type Handler = Arc<dyn Fn(&EventData) + Send + Sync>;

/// Caller callback for header activation.
pub type SortCallback = Arc<dyn Fn(SortArgs) + Send + Sync>;

/// Caller callback receiving a page number or page size.
pub type PageCallback = Arc<dyn Fn(u32) + Send + Sync>;

/// Caller callback with no payload.
pub type ClickCallback = Arc<dyn Fn() + Send + Sync>;

// =============================================================================
// Event Data
// =============================================================================

/// Event-specific data passed to handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EventData {
    #[default]
    None,
    /// A form control committed a new raw value.
    Change { value: String },
}

impl EventData {
    /// The committed value of a Change event.
    pub fn value(&self) -> Option<&str> {
        match self {
            EventData::Change { value } => Some(value),
            EventData::None => None,
        }
    }
}

// =============================================================================
// HandlerRegistry
// =============================================================================

/// Registry for widget event handlers.
///
/// Maps (element_id, event) to handler closures. Hosts clear it before each
/// build so handlers from a previous render never fire.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<HashMap<(String, String), Handler>>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an element event, replacing any previous one.
    pub fn register(&self, element_id: &str, event: &str, handler: Handler) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.insert((element_id.to_string(), event.to_string()), handler);
        }
    }

    pub fn get(&self, element_id: &str, event: &str) -> Option<Handler> {
        self.handlers
            .read()
            .ok()?
            .get(&(element_id.to_string(), event.to_string()))
            .cloned()
    }

    pub fn contains(&self, element_id: &str, event: &str) -> bool {
        self.get(element_id, event).is_some()
    }

    pub fn clear(&self) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.read().map(|h| h.is_empty()).unwrap_or(true)
    }

    pub fn len(&self) -> usize {
        self.handlers.read().map(|h| h.len()).unwrap_or(0)
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handler_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn register_and_get() {
        let registry = HandlerRegistry::new();
        assert!(registry.is_empty());

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        registry.register(
            "btn",
            ON_ACTIVATE,
            Arc::new(move |data: &EventData| {
                if let Ok(mut seen) = sink.lock() {
                    seen.push(data.clone());
                }
            }),
        );

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("btn", ON_ACTIVATE));
        assert!(!registry.contains("btn", ON_CHANGE));

        let handler = registry.get("btn", ON_ACTIVATE).unwrap();
        handler(&EventData::None);
        assert_eq!(*seen.lock().unwrap(), vec![EventData::None]);
    }

    #[test]
    fn clear_drops_everything() {
        let registry = HandlerRegistry::new();
        registry.register("a", ON_ACTIVATE, Arc::new(|_| {}));
        registry.register("b", ON_CHANGE, Arc::new(|_| {}));
        assert_eq!(registry.len(), 2);

        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.get("a", ON_ACTIVATE).is_none());
    }

    #[test]
    fn clones_share_storage() {
        let registry = HandlerRegistry::new();
        let other = registry.clone();
        other.register("a", ON_ACTIVATE, Arc::new(|_| {}));
        assert!(registry.contains("a", ON_ACTIVATE));
    }

    #[test]
    fn change_value_accessor() {
        let data = EventData::Change {
            value: "11".to_string(),
        };
        assert_eq!(data.value(), Some("11"));
        assert_eq!(EventData::None.value(), None);
    }
}
