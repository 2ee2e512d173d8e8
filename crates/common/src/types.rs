use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A point in world space. `x` grows to the right, `y` grows downward.
pub type WorldPoint = Vec2;

/// The material occupying a single cell.
///
/// The set is closed: solid blocks, empty permits movement, liquid flows.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum MaterialKind {
    #[default]
    Empty,
    Solid,
    Liquid,
}

impl MaterialKind {
    /// Every variant, in declaration order.
    pub const ALL: [MaterialKind; 3] = [Self::Empty, Self::Solid, Self::Liquid];

    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    /// Single-character glyph used by text renderers and logs.
    pub fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Solid => '#',
            Self::Liquid => '~',
        }
    }
}

/// Address of a cell: `row` counts down from the top, `col` counts right from the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellIndex {
    pub row: usize,
    pub col: usize,
}

impl CellIndex {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}
