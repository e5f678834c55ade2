//! Core types and traits for Selectar selection widgets.
//!
//! This crate provides foundational types used throughout Selectar:
//! - Geometric primitives: [`Point`], [`Size`]
//! - Input events and messages: [`Event`], [`Key`], [`MouseButton`]
//! - Accessibility roles: [`AccessibleRole`]
//! - Unique element identifiers: [`unique_id`]
//! - The focus capability seam: [`FocusTarget`]

mod accessibility;
mod event;
mod focus;
mod geometry;
mod id;

pub use accessibility::AccessibleRole;
pub use event::{Event, Key, MouseButton};
pub use focus::FocusTarget;
pub use geometry::{Point, Size};
pub use id::unique_id;
