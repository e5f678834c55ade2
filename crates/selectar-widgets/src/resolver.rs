//! Selection resolver.
//!
//! Derives the authoritative selected key from a declarative option list.

use crate::option::ChoiceOption;

/// Resolve the selected key for an option list.
///
/// Returns the key of the first option (in list order) marked checked, or
/// `None` when no option is. Multiple checked options are a caller error,
/// but resolution stays deterministic: the first one wins.
#[must_use]
pub fn resolve(options: &[ChoiceOption]) -> Option<&str> {
    options
        .iter()
        .find(|option| option.checked)
        .map(|option| option.key.as_str())
}
