//! Unique element identifier generation.
//!
//! Widgets need stable, process-unique identifiers to wire labels to inputs
//! (`labelled_by` references). Identifiers are `{prefix}-{n}` with a
//! monotonically increasing counter, so two widget instances never collide.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Generate a process-unique element identifier with the given prefix.
#[must_use]
pub fn unique_id(prefix: &str) -> String {
    let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{n}")
}
