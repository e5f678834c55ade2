//! Accessibility roles for render descriptions.

use serde::{Deserialize, Serialize};

/// Accessible role for screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic element
    #[default]
    Generic,
    /// Application wrapper. Some screen readers intercept arrow-key
    /// navigation unless the containing element carries this role, so
    /// composite widgets that do their own keyboard handling wrap
    /// themselves in it.
    Application,
    /// Radio group container
    RadioGroup,
    /// Radio button input
    Radio,
    /// Label element
    Label,
    /// Image element
    Image,
}

impl AccessibleRole {
    /// ARIA role string for host renderers that emit markup.
    #[must_use]
    pub const fn as_aria(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Application => "application",
            Self::RadioGroup => "radiogroup",
            Self::Radio => "radio",
            Self::Label => "label",
            Self::Image => "img",
        }
    }
}
