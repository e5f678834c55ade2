//! Render projection.
//!
//! Pure mapping from `(option, state, config)` to a render description the
//! host renderer consumes. The projection never mutates anything; it decides
//! once, per option, which variant is shown and how labels and inputs are
//! wired together for assistive technology.

use crate::group::GroupConfig;
use crate::option::{ChoiceOption, IconDescriptor};
use crate::state::GroupState;
use selectar_core::{unique_id, AccessibleRole, Size};
use serde::{Deserialize, Serialize};

/// Stable element identifiers for one group instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupIds {
    /// Group element id, also the fallback input name
    pub group_id: String,
    /// Base id for per-option label elements
    pub label_id: String,
}

impl GroupIds {
    /// Generate a fresh id pair for a new group instance.
    #[must_use]
    pub fn generate() -> Self {
        Self {
            group_id: unique_id("ChoiceGroup"),
            label_id: unique_id("ChoiceGroupLabel"),
        }
    }

    /// Id of the input element for an option: `{group_id}-{key}`.
    #[must_use]
    pub fn input_id(&self, key: &str) -> String {
        format!("{}-{key}", self.group_id)
    }

    /// Id of the label element for an option: `{label_id}-{key}`.
    #[must_use]
    pub fn option_label_id(&self, key: &str) -> String {
        format!("{}-{key}", self.label_id)
    }

    /// Id of the group-level label element.
    #[must_use]
    pub fn group_label_id(&self) -> String {
        format!("{}-label", self.group_id)
    }
}

/// Render description of a whole group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRender {
    /// Role of the outermost wrapper. Always [`AccessibleRole::Application`]
    /// so assistive technology hands arrow keys to the widget's own
    /// keyboard handling instead of intercepting them.
    pub wrapper_role: AccessibleRole,
    /// Role of the option container, always [`AccessibleRole::RadioGroup`]
    pub group_role: AccessibleRole,
    /// Id of the element labelling the group; empty when no label is
    /// supplied
    pub labelled_by: String,
    /// Group label element, present only for a non-empty label
    pub label: Option<GroupLabelRender>,
    /// One rendered entry per option, in list order
    pub options: Vec<OptionRender>,
}

/// Render description of the group-level label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupLabelRender {
    /// Element id referenced by the group's `labelled_by`
    pub id: String,
    /// Label text
    pub text: String,
    /// Whether the required visual marker is shown
    pub required: bool,
}

/// Render description of one option: its input element and its field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionRender {
    /// Option key
    pub key: String,
    /// Whether this option's input currently holds focus
    pub focused: bool,
    /// The selectable input element
    pub input: InputRender,
    /// The visible field associated with the input
    pub field: FieldRender,
}

/// Render description of an option's input element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRender {
    /// Stable element id: `{group_id}-{key}`
    pub id: String,
    /// Always [`AccessibleRole::Radio`]
    pub role: AccessibleRole,
    /// Shared input name making the set mutually exclusive at the platform
    /// level; the group name, or the group id when none is configured
    pub name: String,
    /// Whether interaction is suppressed (option or group disabled)
    pub disabled: bool,
    /// Whether this input is the checked one
    pub checked: bool,
    /// Id of the label element describing this input
    pub labelled_by: String,
}

/// Render description of an option's visible field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRender {
    /// Id of the input this field labels
    pub label_for: String,
    /// Whether the field shows the checked treatment
    pub checked: bool,
    /// Whether the field shows the disabled treatment
    pub disabled: bool,
    /// Which variant the field renders as
    pub variant: FieldVariant,
}

/// The render variant of a field, decided once by the projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldVariant {
    /// Text-only option
    Plain {
        /// Option label
        label: TextLabel,
    },
    /// Option with unselected/selected imagery. Both images are described
    /// and exactly one is visible, so the host can cross-fade between them
    /// without swapping content.
    Image {
        /// Image shown while unselected
        unselected: ImageRender,
        /// Image shown while selected
        selected: ImageRender,
        /// Option label
        label: TextLabel,
        /// Whether the checkmark overlay is visible
        checkmark_visible: bool,
    },
    /// Option with an icon glyph
    Icon {
        /// Icon to render
        icon: IconDescriptor,
        /// Option label
        label: TextLabel,
        /// Whether the checkmark overlay is visible
        checkmark_visible: bool,
    },
}

/// A labelled text element wired to an input by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextLabel {
    /// Element id: `{label_id}-{key}`
    pub id: String,
    /// Label text
    pub text: String,
}

/// One image in the image variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRender {
    /// Image source
    pub src: String,
    /// Rendered dimensions
    pub size: Size,
    /// Whether this image is the visible one
    pub visible: bool,
}

/// Project a whole group into its render description.
#[must_use]
pub fn project_group(config: &GroupConfig, state: &GroupState, ids: &GroupIds) -> GroupRender {
    let has_label = config.label.as_deref().is_some_and(|label| !label.is_empty());
    GroupRender {
        wrapper_role: AccessibleRole::Application,
        group_role: AccessibleRole::RadioGroup,
        labelled_by: if has_label {
            ids.group_label_id()
        } else {
            String::new()
        },
        label: has_label.then(|| GroupLabelRender {
            id: ids.group_label_id(),
            text: config.label.clone().unwrap_or_default(),
            required: config.required,
        }),
        options: config
            .options
            .iter()
            .map(|option| project_option(option, state, config, ids))
            .collect(),
    }
}

/// Project one option into its render description.
#[must_use]
pub fn project_option(
    option: &ChoiceOption,
    state: &GroupState,
    config: &GroupConfig,
    ids: &GroupIds,
) -> OptionRender {
    let is_selected = state.is_selected(&option.key);
    let effective_disabled = option.disabled || config.disabled;
    let input_id = ids.input_id(&option.key);
    let label = TextLabel {
        id: ids.option_label_id(&option.key),
        text: option.text.clone(),
    };

    let variant = if let Some(image) = &option.image {
        FieldVariant::Image {
            unselected: ImageRender {
                src: image.src.clone(),
                size: image.size,
                visible: !is_selected,
            },
            selected: ImageRender {
                src: image.selected_src.clone(),
                size: image.size,
                visible: is_selected,
            },
            label,
            checkmark_visible: is_selected,
        }
    } else if let Some(icon) = &option.icon {
        FieldVariant::Icon {
            icon: icon.clone(),
            label,
            checkmark_visible: is_selected,
        }
    } else {
        FieldVariant::Plain { label }
    };

    OptionRender {
        key: option.key.clone(),
        focused: state.is_focused(&option.key),
        input: InputRender {
            id: input_id.clone(),
            role: AccessibleRole::Radio,
            name: config
                .name
                .clone()
                .unwrap_or_else(|| ids.group_id.clone()),
            disabled: effective_disabled,
            checked: is_selected,
            labelled_by: ids.option_label_id(&option.key),
        },
        field: FieldRender {
            label_for: input_id,
            checked: is_selected,
            disabled: effective_disabled,
            variant,
        },
    }
}
