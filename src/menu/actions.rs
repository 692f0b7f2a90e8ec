use std::collections::HashMap;

use thiserror::Error;

use crate::menu::model::ActionValue;

/// Callback invoked with the selected item's value.
pub type ActionHandler = Box<dyn Fn(&ActionValue) + Send + Sync>;

/// Failure to resolve an action identifier. Always recoverable: the menu
/// closes and the selection is dropped.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("action `{0}` has no registered handler")]
    Unresolved(String),
}

/// Registry mapping action identifiers to callbacks, supplied by the
/// embedding application.
///
/// The menu system never mutates a registry after construction; it only
/// resolves and invokes entries when a popup row is selected.
///
/// # Examples
///
/// ```
/// use egui_titlebar::{ActionRegistry, ActionValue};
///
/// let registry = ActionRegistry::new()
///     .with_action("openFile", |value| {
///         if let ActionValue::Text(path) = value {
///             println!("open {path}");
///         }
///     });
/// assert!(registry.contains("openFile"));
/// ```
#[derive(Default)]
pub struct ActionRegistry {
    handlers: HashMap<String, ActionHandler>,
}

impl ActionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for `action`, replacing any previous one.
    pub fn register<F>(&mut self, action: impl Into<String>, handler: F)
    where
        F: Fn(&ActionValue) + Send + Sync + 'static,
    {
        self.handlers.insert(action.into(), Box::new(handler));
    }

    /// Fluent variant of [`register`](Self::register).
    pub fn with_action<F>(mut self, action: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&ActionValue) + Send + Sync + 'static,
    {
        self.register(action, handler);
        self
    }

    pub fn contains(&self, action: &str) -> bool {
        self.handlers.contains_key(action)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Resolve `action` and invoke its callback with `value`.
    pub fn dispatch(&self, action: &str, value: &ActionValue) -> Result<(), DispatchError> {
        match self.handlers.get(action) {
            Some(handler) => {
                handler(value);
                Ok(())
            }
            None => Err(DispatchError::Unresolved(action.to_string())),
        }
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut actions: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        actions.sort_unstable();
        f.debug_struct("ActionRegistry")
            .field("actions", &actions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    #[test]
    fn dispatch_invokes_registered_handler_with_value() {
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = seen.clone();
        let registry = ActionRegistry::new().with_action("openFile", move |value| {
            sink.lock().unwrap().push(value.clone());
        });

        registry
            .dispatch("openFile", &ActionValue::Text("path/to/x".into()))
            .unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.as_slice(), [ActionValue::Text("path/to/x".into())]);
    }

    #[test]
    fn dispatch_reports_unresolved_action() {
        let registry = ActionRegistry::new();
        let err = registry
            .dispatch("missing", &ActionValue::default())
            .unwrap_err();
        assert!(matches!(err, DispatchError::Unresolved(action) if action == "missing"));
    }

    #[test]
    fn later_registration_replaces_earlier_one() {
        let calls = Arc::new(AtomicUsize::new(0));
        let first = calls.clone();
        let second = calls.clone();

        let mut registry = ActionRegistry::new();
        registry.register("quit", move |_| {
            first.fetch_add(1, Ordering::SeqCst);
        });
        registry.register("quit", move |_| {
            second.fetch_add(10, Ordering::SeqCst);
        });
        assert_eq!(registry.len(), 1);

        registry.dispatch("quit", &ActionValue::default()).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 10);
    }
}
