use glam::Vec2;
use sandfall_common::{CellIndex, MaterialKind};
use sandfall_kernel::World;
use serde::Serialize;

/// World inspector for developer tooling.
///
/// Provides read-only queries against the world state for debugging,
/// profiling, and development UI.
pub struct WorldInspector;

impl WorldInspector {
    /// Produce a summary of the world state.
    pub fn summary(world: &World) -> WorldSummary {
        let last = world.last_pass();
        WorldSummary {
            rows: world.rows(),
            columns: world.columns(),
            cell_size: world.config().cell_size,
            seed: world.seed(),
            passes: world.passes(),
            clock: world.clock(),
            empty: world.count(MaterialKind::Empty),
            solid: world.count(MaterialKind::Solid),
            liquid: world.count(MaterialKind::Liquid),
            last_pass_moves: last.moves(),
            state_hash: world.state_hash(),
        }
    }

    /// Describe a single cell, or `None` when out of range.
    pub fn inspect_cell(world: &World, row: usize, col: usize) -> Option<CellInfo> {
        let kind = world.cell(row, col)?;
        let index = CellIndex::new(row, col);
        Some(CellInfo {
            index,
            kind,
            origin: world.grid().cell_origin(index),
            size: world.config().cell_size,
        })
    }

    /// Indices of every cell holding `kind`, in row-major order.
    pub fn cells_of(world: &World, kind: MaterialKind) -> Vec<CellIndex> {
        world
            .cells()
            .filter(|(_, _, k)| *k == kind)
            .map(|(row, col, _)| CellIndex::new(row, col))
            .collect()
    }
}

/// Summary of world state for the inspector.
#[derive(Debug, Clone, Serialize)]
pub struct WorldSummary {
    pub rows: usize,
    pub columns: usize,
    pub cell_size: u32,
    pub seed: Option<u64>,
    pub passes: u64,
    pub clock: f32,
    pub empty: usize,
    pub solid: usize,
    pub liquid: usize,
    pub last_pass_moves: usize,
    pub state_hash: u64,
}

impl std::fmt::Display for WorldSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "World: {}x{} cells (edge {}) passes={} liquid={} solid={} empty={} hash={:#018x}",
            self.columns,
            self.rows,
            self.cell_size,
            self.passes,
            self.liquid,
            self.solid,
            self.empty,
            self.state_hash,
        )?;
        if let Some(seed) = self.seed {
            write!(f, " seed={seed}")?;
        }
        Ok(())
    }
}

/// Detailed info about a single cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellInfo {
    pub index: CellIndex,
    pub kind: MaterialKind,
    /// World-space top-left corner.
    pub origin: Vec2,
    pub size: u32,
}

impl std::fmt::Display for CellInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cell ({}, {}) {:?} at ({:.1}, {:.1}) size {}",
            self.index.row, self.index.col, self.kind, self.origin.x, self.origin.y, self.size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandfall_common::GridConfig;

    fn world() -> World {
        World::with_seed(GridConfig::new(12, 8, 2).unwrap(), 5).unwrap()
    }

    #[test]
    fn summary_empty_world() {
        let w = world();
        let summary = WorldInspector::summary(&w);
        assert_eq!(summary.rows, 4);
        assert_eq!(summary.columns, 6);
        assert_eq!(summary.empty, 24);
        assert_eq!(summary.passes, 0);
        assert_eq!(summary.seed, Some(5));
    }

    #[test]
    fn summary_counts_materials() {
        let mut w = world();
        w.set_cell(3, 0, MaterialKind::Solid);
        w.spawn_liquid(Vec2::new(1.0, 1.0));
        w.step();

        let summary = WorldInspector::summary(&w);
        assert_eq!(summary.passes, 1);
        assert_eq!(summary.solid, 1);
        assert_eq!(summary.liquid, 1);
        assert_eq!(summary.empty, 22);
        assert_eq!(summary.last_pass_moves, 1);
    }

    #[test]
    fn inspect_cell_found() {
        let mut w = world();
        w.set_cell(2, 3, MaterialKind::Solid);
        let info = WorldInspector::inspect_cell(&w, 2, 3).unwrap();
        assert_eq!(info.kind, MaterialKind::Solid);
        assert_eq!(info.origin, Vec2::new(6.0, 4.0));
    }

    #[test]
    fn inspect_cell_out_of_range() {
        let w = world();
        assert!(WorldInspector::inspect_cell(&w, 4, 0).is_none());
        assert!(WorldInspector::inspect_cell(&w, 0, 6).is_none());
    }

    #[test]
    fn cells_of_lists_row_major() {
        let mut w = world();
        w.set_cell(1, 4, MaterialKind::Solid);
        w.set_cell(0, 5, MaterialKind::Solid);
        assert_eq!(
            WorldInspector::cells_of(&w, MaterialKind::Solid),
            vec![CellIndex::new(0, 5), CellIndex::new(1, 4)]
        );
    }

    #[test]
    fn summary_display() {
        let summary = WorldInspector::summary(&world());
        let s = format!("{summary}");
        assert!(s.contains("6x4 cells"));
        assert!(s.contains("seed=5"));
    }
}
