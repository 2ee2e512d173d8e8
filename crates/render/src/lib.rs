//! Rendering Adapter: renderer-agnostic presentation of the cell grid.
//!
//! # Invariants
//! - Renderers cannot mutate world truth; they only read [`sandfall_kernel::World`].
//! - The kernel never depends on any type from this crate.
//!
//! Output is expressed as plain data (colored quads, text, line segments) so
//! any graphics backend can draw it without the kernel knowing about it.

mod color;
mod overlay;
mod renderer;

pub use color::{Color, material_color};
pub use overlay::{GridLine, grid_lines};
pub use renderer::{CellQuad, DebugTextRenderer, QuadRenderer, Renderer};

pub fn crate_info() -> &'static str {
    "sandfall-render v0.1.0"
}
