//! Imperative focus handles.
//!
//! The host renderer registers one focus-capable handle per rendered input.
//! Handles are keyed by option key so `focus()` can deterministically target
//! the selected option instead of whichever input happened to render last.

use selectar_core::FocusTarget;
use std::fmt;

/// Registry of focus-capable input handles, keyed by option key.
#[derive(Default)]
pub struct FocusRegistry {
    // Insertion order doubles as the fallback order.
    targets: Vec<(String, Box<dyn FocusTarget>)>,
}

impl FocusRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handle for an option, replacing any previous handle
    /// for the same key.
    pub fn register(&mut self, key: impl Into<String>, target: Box<dyn FocusTarget>) {
        let key = key.into();
        if let Some(slot) = self.targets.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = target;
        } else {
            self.targets.push((key, target));
        }
    }

    /// Remove the handle for an option, if registered.
    pub fn unregister(&mut self, key: &str) {
        self.targets.retain(|(k, _)| k != key);
    }

    /// Focus the handle registered for a specific option. Returns whether a
    /// handle was found.
    pub fn focus_key(&mut self, key: &str) -> bool {
        if let Some((_, target)) = self.targets.iter_mut().find(|(k, _)| k == key) {
            target.request_focus();
            true
        } else {
            false
        }
    }

    /// Focus the selected option's handle, falling back to the first
    /// registered handle when the selection has none. No-op on an empty
    /// registry. Returns whether focus was delegated.
    pub fn focus_selected(&mut self, selected_key: Option<&str>) -> bool {
        if let Some(key) = selected_key {
            if self.focus_key(key) {
                return true;
            }
        }
        if let Some((_, target)) = self.targets.first_mut() {
            target.request_focus();
            true
        } else {
            false
        }
    }

    /// Number of registered handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether no handles are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl fmt::Debug for FocusRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusRegistry")
            .field(
                "keys",
                &self.targets.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn tracking_target(log: &Arc<Mutex<Vec<String>>>, name: &str) -> Box<dyn FocusTarget> {
        let log = Arc::clone(log);
        let name = name.to_string();
        Box::new(move || log.lock().expect("lock").push(name.clone()))
    }

    #[test]
    fn test_focus_key_hits_registered_target() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = FocusRegistry::new();
        registry.register("a", tracking_target(&log, "a"));
        registry.register("b", tracking_target(&log, "b"));

        assert!(registry.focus_key("b"));
        assert_eq!(*log.lock().expect("lock"), vec!["b".to_string()]);
    }

    #[test]
    fn test_focus_key_unknown_is_noop() {
        let mut registry = FocusRegistry::new();
        assert!(!registry.focus_key("missing"));
    }

    #[test]
    fn test_focus_selected_prefers_selection() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = FocusRegistry::new();
        registry.register("a", tracking_target(&log, "a"));
        registry.register("b", tracking_target(&log, "b"));

        assert!(registry.focus_selected(Some("b")));
        assert_eq!(*log.lock().expect("lock"), vec!["b".to_string()]);
    }

    #[test]
    fn test_focus_selected_falls_back_to_first() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = FocusRegistry::new();
        registry.register("a", tracking_target(&log, "a"));
        registry.register("b", tracking_target(&log, "b"));

        assert!(registry.focus_selected(None));
        assert!(registry.focus_selected(Some("unregistered")));
        assert_eq!(
            *log.lock().expect("lock"),
            vec!["a".to_string(), "a".to_string()]
        );
    }

    #[test]
    fn test_focus_selected_empty_registry_is_noop() {
        let mut registry = FocusRegistry::new();
        assert!(!registry.focus_selected(Some("a")));
    }

    #[test]
    fn test_register_replaces_existing_handle() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = FocusRegistry::new();
        registry.register("a", tracking_target(&log, "old"));
        registry.register("a", tracking_target(&log, "new"));

        assert_eq!(registry.len(), 1);
        registry.focus_key("a");
        assert_eq!(*log.lock().expect("lock"), vec!["new".to_string()]);
    }

    #[test]
    fn test_unregister() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = FocusRegistry::new();
        registry.register("a", tracking_target(&log, "a"));
        registry.unregister("a");
        assert!(registry.is_empty());
        assert!(!registry.focus_key("a"));
    }
}
