//! Focus capability seam.
//!
//! This is a minimal abstraction over whatever concrete input element the
//! host renderer materializes for a widget. Widgets that expose an
//! imperative `focus()` delegate to a registered [`FocusTarget`] rather
//! than touching the platform directly.

/// A focus-capable handle supplied by the host renderer.
pub trait FocusTarget: Send {
    /// Move input focus to this target.
    fn request_focus(&mut self);
}

impl<F> FocusTarget for F
where
    F: FnMut() + Send,
{
    fn request_focus(&mut self) {
        self();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_as_focus_target() {
        let mut hits = 0u32;
        {
            let mut target = || hits += 1;
            target.request_focus();
            target.request_focus();
        }
        assert_eq!(hits, 2);
    }
}
