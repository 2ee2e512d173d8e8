use crate::color::{Color, material_color};
use glam::Vec2;
use sandfall_common::CellIndex;
use sandfall_kernel::World;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads world state and produces output. It never mutates the
/// world; world truth is kernel-owned.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given world state.
    fn render(&self, world: &World) -> Self::Output;
}

/// One filled square to draw, in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellQuad {
    /// Top-left corner: `(col * edge, row * edge)`.
    pub origin: Vec2,
    /// Edge length in world units.
    pub size: f32,
    pub color: Color,
}

/// Emits one [`CellQuad`] per cell, in row-major order.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuadRenderer {
    skip_transparent: bool,
}

impl QuadRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Omit quads that would draw nothing (empty cells).
    pub fn visible_only() -> Self {
        Self {
            skip_transparent: true,
        }
    }
}

impl Renderer for QuadRenderer {
    type Output = Vec<CellQuad>;

    fn render(&self, world: &World) -> Vec<CellQuad> {
        let grid = world.grid();
        let size = grid.cell_size() as f32;
        world
            .cells()
            .map(|(row, col, kind)| CellQuad {
                origin: grid.cell_origin(CellIndex::new(row, col)),
                size,
                color: material_color(kind),
            })
            .filter(|quad| !(self.skip_transparent && quad.color.is_transparent()))
            .collect()
    }
}

/// Debug text renderer: one line per grid row.
///
/// `.` is empty, `#` is solid, `~` is liquid. Useful for CLI output, logging,
/// and testing the render interface.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, world: &World) -> String {
        let mut out = format!(
            "=== Grid (rows={}, columns={}, passes={}) ===\n",
            world.rows(),
            world.columns(),
            world.passes()
        );
        out.reserve(world.rows() * (world.columns() + 1));
        let columns = world.columns();
        for (_, col, kind) in world.cells() {
            out.push(kind.glyph());
            if col + 1 == columns {
                out.push('\n');
            }
        }
        out
    }
}
