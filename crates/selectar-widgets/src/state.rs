//! Group selection/focus state machine.
//!
//! Two independent axes: which option is selected and which option's input
//! holds focus. All transitions are synchronous, total and infallible. The
//! state is exclusively owned by its [`ChoiceGroup`](crate::ChoiceGroup);
//! nothing else mutates it.

use crate::option::ChoiceOption;
use crate::resolver;
use serde::{Deserialize, Serialize};

/// Selection and focus state of a choice group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupState {
    /// Key of the currently selected option, if any
    pub selected_key: Option<String>,
    /// Key of the option whose input currently holds focus, if any
    pub focused_key: Option<String>,
}

impl GroupState {
    /// Initial state for an option list: resolved selection, unfocused.
    #[must_use]
    pub fn from_options(options: &[ChoiceOption]) -> Self {
        Self {
            selected_key: resolver::resolve(options).map(str::to_string),
            focused_key: None,
        }
    }

    /// Reconcile the selection against a new option list.
    ///
    /// The resolver output of the old list is compared against the new one;
    /// the selection is overwritten only when they differ. This is a
    /// declarative reconciliation step, not a user action, so it never
    /// produces a change notification. Focus is untouched. Returns whether
    /// the selection was rewritten.
    pub fn resync(&mut self, old_options: &[ChoiceOption], new_options: &[ChoiceOption]) -> bool {
        let old_key = resolver::resolve(old_options);
        let new_key = resolver::resolve(new_options);
        if new_key == old_key {
            return false;
        }
        self.selected_key = new_key.map(str::to_string);
        true
    }

    /// An option's input gained focus.
    pub fn focus(&mut self, key: &str) {
        self.focused_key = Some(key.to_string());
    }

    /// An option's input lost focus.
    ///
    /// Clears focus unconditionally, whichever option is blurring: in a
    /// cooperative event loop the blur of the old input is always processed
    /// before the focus of the next, so last-blur-wins is sufficient.
    pub fn blur(&mut self) {
        self.focused_key = None;
    }

    /// A user selection action landed on an option.
    ///
    /// Sets the selection unconditionally; the disabled gate belongs to the
    /// dispatch boundary, which refuses to surface actions from disabled
    /// inputs in the first place.
    pub fn change(&mut self, key: &str) {
        self.selected_key = Some(key.to_string());
    }

    /// Whether the given key is the selected one.
    #[must_use]
    pub fn is_selected(&self, key: &str) -> bool {
        self.selected_key.as_deref() == Some(key)
    }

    /// Whether the given key is the focused one.
    #[must_use]
    pub fn is_focused(&self, key: &str) -> bool {
        self.focused_key.as_deref() == Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn opts(checked: &[(&str, bool)]) -> Vec<ChoiceOption> {
        checked
            .iter()
            .map(|&(key, checked)| {
                let option = ChoiceOption::new(key, key);
                if checked {
                    option.checked()
                } else {
                    option
                }
            })
            .collect()
    }

    // ===== Initial State Tests =====

    #[test]
    fn test_initial_state_resolves_selection() {
        let state = GroupState::from_options(&opts(&[("a", false), ("b", true), ("c", true)]));
        assert_eq!(state.selected_key.as_deref(), Some("b"));
        assert_eq!(state.focused_key, None);
    }

    #[test]
    fn test_initial_state_none_checked() {
        let state = GroupState::from_options(&opts(&[("a", false), ("b", false)]));
        assert_eq!(state.selected_key, None);
    }

    // ===== Resync Tests =====

    #[test]
    fn test_resync_changed_resolution() {
        let old = opts(&[("a", true), ("b", false)]);
        let new = opts(&[("a", false), ("b", true)]);
        let mut state = GroupState::from_options(&old);

        assert!(state.resync(&old, &new));
        assert_eq!(state.selected_key.as_deref(), Some("b"));
    }

    #[test]
    fn test_resync_unchanged_resolution_is_noop() {
        let old = opts(&[("a", false), ("b", true)]);
        let new = opts(&[("a", false), ("b", true), ("c", false)]);
        let mut state = GroupState::from_options(&old);
        // User moved the selection away from the declarative default.
        state.change("a");

        assert!(!state.resync(&old, &new));
        assert_eq!(state.selected_key.as_deref(), Some("a"));
    }

    #[test]
    fn test_resync_idempotent() {
        let old = opts(&[("a", true)]);
        let new = opts(&[("b", true)]);
        let mut state = GroupState::from_options(&old);

        assert!(state.resync(&old, &new));
        assert!(!state.resync(&new, &new));
        assert_eq!(state.selected_key.as_deref(), Some("b"));
    }

    #[test]
    fn test_resync_to_unselected() {
        let old = opts(&[("a", true)]);
        let new = opts(&[("a", false)]);
        let mut state = GroupState::from_options(&old);

        assert!(state.resync(&old, &new));
        assert_eq!(state.selected_key, None);
    }

    #[test]
    fn test_resync_leaves_focus_untouched() {
        let old = opts(&[("a", true)]);
        let new = opts(&[("b", true)]);
        let mut state = GroupState::from_options(&old);
        state.focus("a");

        state.resync(&old, &new);
        assert_eq!(state.focused_key.as_deref(), Some("a"));
    }

    // ===== Focus/Blur Tests =====

    #[test]
    fn test_focus_blur_round_trip() {
        let mut state = GroupState::default();
        state.focus("a");
        assert!(state.is_focused("a"));
        state.blur();
        assert_eq!(state.focused_key, None);
    }

    #[test]
    fn test_focus_replaces_without_stacking() {
        let mut state = GroupState::default();
        state.focus("a");
        state.focus("b");
        assert!(state.is_focused("b"));
        state.blur();
        assert_eq!(state.focused_key, None);
    }

    // ===== Change Tests =====

    #[test]
    fn test_change_sets_selection() {
        let mut state = GroupState::from_options(&opts(&[("a", true), ("b", false)]));
        state.change("b");
        assert!(state.is_selected("b"));
        assert!(!state.is_selected("a"));
    }

    #[test]
    fn test_change_leaves_focus_untouched() {
        let mut state = GroupState::default();
        state.focus("a");
        state.change("b");
        assert_eq!(state.focused_key.as_deref(), Some("a"));
    }

    // ===== Axis Independence =====

    proptest! {
        #[test]
        fn prop_focus_blur_never_alters_selection(
            moves in proptest::collection::vec(any::<Option<u8>>(), 0..32)
        ) {
            let options = opts(&[("a", false), ("b", true)]);
            let mut state = GroupState::from_options(&options);
            let before = state.selected_key.clone();
            for step in moves {
                match step {
                    Some(n) => state.focus(&format!("k{n}")),
                    None => state.blur(),
                }
            }
            prop_assert_eq!(state.selected_key, before);
        }

        #[test]
        fn prop_change_never_alters_focus(keys in proptest::collection::vec(0u8..8, 0..32)) {
            let mut state = GroupState::default();
            state.focus("held");
            for key in keys {
                state.change(&format!("k{key}"));
            }
            prop_assert_eq!(state.focused_key.as_deref(), Some("held"));
        }
    }
}
