//! World Kernel: authoritative cell grid, fixed-cadence update pass, tie-break randomness.
//!
//! # Invariants
//! - Every cell access is range-checked; out-of-range requests are no-ops.
//! - An update pass never changes how many cells hold liquid.
//! - At most one pass runs per call to [`World::advance`].
//! - Given the same seed and sequence of operations, runs are identical.

pub mod choice;
pub mod grid;
pub mod world;

pub use choice::{ChoiceSource, DrawCounter, RandomChoice, ScriptedChoice};
pub use grid::Grid;
pub use world::{PassStats, World};
