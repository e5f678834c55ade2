//! `ChoiceGroup` widget: a labeled set of mutually exclusive options.
//!
//! The group owns the option list, the selection/focus state machine, the
//! change notifier and the focus registry. The host renderer feeds input
//! signals into the `handle_*` dispatch boundary and consumes the render
//! description from [`ChoiceGroup::render`].

use crate::focus::FocusRegistry;
use crate::option::{ChoiceOption, ChoiceOptionSpec};
use crate::projection::{self, GroupIds, GroupRender};
use crate::resolver;
use crate::state::GroupState;
use selectar_core::{Event, FocusTarget};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declarative configuration of a choice group, immutable per render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    /// Group label text
    pub label: Option<String>,
    /// Shared input name; the group id is used when absent
    pub name: Option<String>,
    /// Whether the whole group is disabled
    pub disabled: bool,
    /// Whether the required visual marker is shown on the label
    pub required: bool,
    /// Options in render order
    pub options: Vec<ChoiceOption>,
}

/// Message emitted when the selection changes through user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceChanged {
    /// Key of the newly selected option
    pub key: String,
    /// Index of the selected option in the option list
    pub index: usize,
}

/// Callback invoked with the raw event and the selected option.
pub type ChangeCallback = Box<dyn FnMut(&Event, &ChoiceOption) + Send>;

/// Legacy callback invoked with the selected option only.
pub type ChangedCallback = Box<dyn FnMut(&ChoiceOption) + Send>;

/// Change notification with explicit callback precedence.
///
/// `on_change` is preferred; the legacy `on_changed` shape is invoked only
/// when `on_change` is absent. With neither supplied the notification is
/// dropped. Exactly one callback fires per change.
#[derive(Default)]
pub struct ChangeNotifier {
    on_change: Option<ChangeCallback>,
    on_changed: Option<ChangedCallback>,
}

impl ChangeNotifier {
    /// Set the preferred callback.
    pub fn set_on_change(&mut self, callback: ChangeCallback) {
        self.on_change = Some(callback);
    }

    /// Set the legacy callback.
    pub fn set_on_changed(&mut self, callback: ChangedCallback) {
        self.on_changed = Some(callback);
    }

    /// Notify the consumer of a selection change.
    pub fn notify(&mut self, event: &Event, option: &ChoiceOption) {
        if let Some(on_change) = &mut self.on_change {
            on_change(event, option);
        } else if let Some(on_changed) = &mut self.on_changed {
            on_changed(option);
        }
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("on_change", &self.on_change.is_some())
            .field("on_changed", &self.on_changed.is_some())
            .finish()
    }
}

/// Single-selection option group widget.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChoiceGroup {
    /// Declarative configuration
    config: GroupConfig,
    /// Selection/focus state, exclusively owned by this group
    state: GroupState,
    /// Stable element identifiers
    ids: GroupIds,
    /// Test ID
    test_id_value: Option<String>,
    /// Change notifier
    #[serde(skip)]
    notifier: ChangeNotifier,
    /// Focus handles registered by the host renderer
    #[serde(skip)]
    focus_targets: FocusRegistry,
}

impl Default for ChoiceGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl ChoiceGroup {
    /// Create an empty choice group.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: GroupConfig::default(),
            state: GroupState::default(),
            ids: GroupIds::generate(),
            test_id_value: None,
            notifier: ChangeNotifier::default(),
            focus_targets: FocusRegistry::new(),
        }
    }

    /// Create a group from a full configuration.
    #[must_use]
    pub fn from_config(config: GroupConfig) -> Self {
        let state = GroupState::from_options(&config.options);
        Self {
            config,
            state,
            ids: GroupIds::generate(),
            test_id_value: None,
            notifier: ChangeNotifier::default(),
            focus_targets: FocusRegistry::new(),
        }
    }

    /// Set the group label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config.label = Some(label.into());
        self
    }

    /// Set the shared input name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = Some(name.into());
        self
    }

    /// Set whether the whole group is disabled.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Set whether the required marker is shown.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.config.required = required;
        self
    }

    /// Add an option.
    #[must_use]
    pub fn option(mut self, option: ChoiceOption) -> Self {
        self.config.options.push(option);
        self.reresolve();
        self
    }

    /// Add multiple options.
    #[must_use]
    pub fn options(mut self, options: impl IntoIterator<Item = ChoiceOption>) -> Self {
        self.config.options.extend(options);
        self.reresolve();
        self
    }

    /// Add options from raw declarative specs, normalizing legacy aliases.
    #[must_use]
    pub fn option_specs(mut self, specs: impl IntoIterator<Item = ChoiceOptionSpec>) -> Self {
        self.config
            .options
            .extend(specs.into_iter().map(ChoiceOption::from));
        self.reresolve();
        self
    }

    /// Set the preferred change callback.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(&Event, &ChoiceOption) + Send + 'static) -> Self {
        self.notifier.set_on_change(Box::new(callback));
        self
    }

    /// Set the legacy change callback, invoked only when no `on_change`
    /// callback is supplied. Prefer [`ChoiceGroup::on_change`].
    #[must_use]
    pub fn on_changed(mut self, callback: impl FnMut(&ChoiceOption) + Send + 'static) -> Self {
        self.notifier.set_on_changed(Box::new(callback));
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    // Construction-time selection derivation; not a resync and never a
    // notification source.
    fn reresolve(&mut self) {
        self.state.selected_key = resolver::resolve(&self.config.options).map(str::to_string);
    }

    /// Replace the option list, reconciling the selection.
    ///
    /// The selection is rewritten only when the resolver output for the new
    /// list differs from the old one; focus is untouched and no change
    /// notification fires. Returns whether the selection was rewritten.
    pub fn set_options(&mut self, options: Vec<ChoiceOption>) -> bool {
        let changed = self.state.resync(&self.config.options, &options);
        self.config.options = options;
        changed
    }

    /// Replace the whole configuration, reconciling the selection as in
    /// [`ChoiceGroup::set_options`].
    pub fn set_config(&mut self, config: GroupConfig) -> bool {
        let changed = self.state.resync(&self.config.options, &config.options);
        self.config = config;
        changed
    }

    /// An option's input gained focus.
    pub fn handle_focus(&mut self, key: &str) {
        if self.config.options.iter().any(|option| option.key == key) {
            self.state.focus(key);
        }
    }

    /// An option's input lost focus. The key is accepted for signature
    /// symmetry but focus clears unconditionally (last-blur-wins).
    pub fn handle_blur(&mut self, _key: &str) {
        self.state.blur();
    }

    /// A user selection action on an option's input.
    ///
    /// This is the dispatch boundary: actions on unknown keys or on options
    /// whose effective disabled state is set are suppressed here and never
    /// reach the state machine, keeping the disabled guarantee independent
    /// of the rendering substrate. On an accepted action the selection is
    /// updated, the change notifier fires exactly once and a
    /// [`ChoiceChanged`] message is returned for the host event loop.
    pub fn handle_change(&mut self, key: &str, event: &Event) -> Option<ChoiceChanged> {
        let index = self
            .config
            .options
            .iter()
            .position(|option| option.key == key)?;
        if self.config.options[index].disabled || self.config.disabled {
            return None;
        }
        let option = self.config.options[index].clone();
        self.state.change(key);
        self.notifier.notify(event, &option);
        Some(ChoiceChanged {
            key: option.key,
            index,
        })
    }

    /// Project the group into its render description.
    #[must_use]
    pub fn render(&self) -> GroupRender {
        projection::project_group(&self.config, &self.state, &self.ids)
    }

    /// Register the focus handle for a rendered input.
    pub fn register_focus_target(&mut self, key: impl Into<String>, target: Box<dyn FocusTarget>) {
        self.focus_targets.register(key, target);
    }

    /// Remove the focus handle for an option.
    pub fn unregister_focus_target(&mut self, key: &str) {
        self.focus_targets.unregister(key);
    }

    /// Move input focus to the selected option's input, falling back to the
    /// first registered input; no-op when none is registered. Returns
    /// whether focus was delegated.
    pub fn focus(&mut self) -> bool {
        self.focus_targets
            .focus_selected(self.state.selected_key.as_deref())
    }

    /// Move input focus to a specific option's input.
    pub fn focus_option(&mut self, key: &str) -> bool {
        self.focus_targets.focus_key(key)
    }

    /// Get the selected option key.
    #[must_use]
    pub fn selected_key(&self) -> Option<&str> {
        self.state.selected_key.as_deref()
    }

    /// Get the focused option key.
    #[must_use]
    pub fn focused_key(&self) -> Option<&str> {
        self.state.focused_key.as_deref()
    }

    /// Get the selected option.
    #[must_use]
    pub fn selected_option(&self) -> Option<&ChoiceOption> {
        let key = self.state.selected_key.as_deref()?;
        self.config.options.iter().find(|option| option.key == key)
    }

    /// Get the options.
    #[must_use]
    pub fn get_options(&self) -> &[ChoiceOption] {
        &self.config.options
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &GroupConfig {
        &self.config
    }

    /// Get the group element id.
    #[must_use]
    pub fn group_id(&self) -> &str {
        &self.ids.group_id
    }

    /// Get option count.
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.config.options.len()
    }

    /// Check if the group has no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.config.options.is_empty()
    }

    /// Get the test ID.
    #[must_use]
    pub fn get_test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}
