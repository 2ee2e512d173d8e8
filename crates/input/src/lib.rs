//! Input: paint controls mapped to engine actions.
//!
//! # Invariants
//! - The kernel consumes actions, never raw input events.
//! - Per frame, input actions are applied before the clock advances.

pub mod action;
pub mod paint;

pub use action::Action;
pub use paint::PaintInput;

pub fn crate_info() -> &'static str {
    "sandfall-input v0.1.0"
}
