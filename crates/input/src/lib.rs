//! Input mapping: physical keys to high-level actions.
//!
//! The application never matches on raw key codes; it asks [`Bindings`] what a
//! key press means and which held keys fire this frame.
//!
//! # Invariants
//! - A key maps to at most one binding.
//! - Press bindings fire once per physical press, never on auto-repeat.
//! - Held bindings fire in table order, once per frame.

pub mod action;
pub mod bindings;

pub use action::Action;
pub use bindings::{Binding, Bindings, KeyState, Trigger};
