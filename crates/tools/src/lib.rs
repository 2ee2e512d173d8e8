//! Developer Tooling: read-only world inspector.
//!
//! # Invariants
//! - Tools never mutate the world.

mod inspector;

pub use inspector::{CellInfo, WorldInspector, WorldSummary};

pub fn crate_info() -> &'static str {
    "sandfall-tools v0.1.0"
}
