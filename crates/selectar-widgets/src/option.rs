//! Option model for the choice group.
//!
//! Two shapes exist at the boundary: [`ChoiceOptionSpec`] is the raw,
//! declarative form (as it arrives from a manifest or an embedding
//! application) and still carries the legacy field aliases; [`ChoiceOption`]
//! is the canonical form the rest of the widget operates on. Normalization
//! happens exactly once, at ingestion.

use selectar_core::Size;
use serde::{Deserialize, Serialize};

/// Imagery for an option rendered in the image variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionImage {
    /// Image shown while the option is not selected
    pub src: String,
    /// Image shown while the option is selected
    pub selected_src: String,
    /// Rendered dimensions for both images
    pub size: Size,
}

impl OptionImage {
    /// Create option imagery with the given unselected/selected sources.
    #[must_use]
    pub fn new(src: impl Into<String>, selected_src: impl Into<String>, size: Size) -> Self {
        Self {
            src: src.into(),
            selected_src: selected_src.into(),
            size,
        }
    }
}

/// Icon descriptor for an option rendered in the icon variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconDescriptor {
    /// Icon glyph name, resolved by the host renderer
    pub name: String,
}

impl IconDescriptor {
    /// Create an icon descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Raw declarative shape of one option, including legacy aliases.
///
/// `checked` is a deprecated alias of `is_checked` and `disabled` of
/// `is_disabled`; either spelling marks the option. Convert into a
/// [`ChoiceOption`] before use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoiceOptionSpec {
    /// Unique key within the group
    pub key: String,
    /// Display text
    pub text: Option<String>,
    /// Unselected image source
    pub image_src: Option<String>,
    /// Selected image source
    pub selected_image_src: Option<String>,
    /// Image dimensions
    pub image_size: Option<Size>,
    /// Icon descriptor
    pub icon: Option<IconDescriptor>,
    /// Whether the option is initially checked
    pub is_checked: Option<bool>,
    /// Deprecated alias of `is_checked`
    pub checked: Option<bool>,
    /// Whether the option is disabled
    pub is_disabled: Option<bool>,
    /// Deprecated alias of `is_disabled`
    pub disabled: Option<bool>,
}

/// A single selectable option, normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Unique key within the group; the sole identity
    pub key: String,
    /// Display text
    pub text: String,
    /// Imagery, when present the option renders in the image variant
    pub image: Option<OptionImage>,
    /// Icon, when present (and no imagery) the option renders in the icon
    /// variant
    pub icon: Option<IconDescriptor>,
    /// Whether the option is marked checked in the declarative input
    pub checked: bool,
    /// Whether the option itself is disabled
    pub disabled: bool,
}

impl ChoiceOption {
    /// Create a new option.
    #[must_use]
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
            image: None,
            icon: None,
            checked: false,
            disabled: false,
        }
    }

    /// Mark the option as checked.
    #[must_use]
    pub const fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    /// Mark the option as disabled.
    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Attach imagery, switching the option to the image variant.
    #[must_use]
    pub fn image(mut self, image: OptionImage) -> Self {
        self.image = Some(image);
        self
    }

    /// Attach an icon, switching the option to the icon variant when no
    /// imagery is present.
    #[must_use]
    pub fn icon(mut self, icon: IconDescriptor) -> Self {
        self.icon = Some(icon);
        self
    }
}

impl From<ChoiceOptionSpec> for ChoiceOption {
    /// Normalize a raw spec: legacy aliases collapse into the canonical
    /// fields, imagery fields fold into [`OptionImage`].
    fn from(spec: ChoiceOptionSpec) -> Self {
        let image = match (spec.image_src, spec.selected_image_src) {
            (Some(src), selected) => Some(OptionImage {
                selected_src: selected.unwrap_or_else(|| src.clone()),
                src,
                size: spec.image_size.unwrap_or_default(),
            }),
            (None, _) => None,
        };
        Self {
            key: spec.key,
            text: spec.text.unwrap_or_default(),
            image,
            icon: spec.icon,
            checked: spec.is_checked.unwrap_or(false) || spec.checked.unwrap_or(false),
            disabled: spec.is_disabled.unwrap_or(false) || spec.disabled.unwrap_or(false),
        }
    }
}
