//! Shared types for the sandfall workspace.
//!
//! # Invariants
//! - A cell always holds exactly one [`MaterialKind`]; the default is `Empty`.
//! - A validated [`GridConfig`] always yields non-zero grid dimensions.

pub mod config;
pub mod types;

pub use config::{ConfigError, GridConfig, UPDATE_INTERVAL};
pub use types::{CellIndex, MaterialKind, WorldPoint};
