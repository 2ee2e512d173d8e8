use crate::choice::{ChoiceSource, RandomChoice};
use crate::grid::Grid;
use sandfall_common::{
    CellIndex, ConfigError, GridConfig, MaterialKind, UPDATE_INTERVAL, WorldPoint,
};

/// Outcome of one update pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Liquid cells the movement rule was applied to.
    pub liquid_cells: usize,
    pub moved_down: usize,
    pub moved_left: usize,
    pub moved_right: usize,
    /// Liquid cells whose only permitted move was blocked.
    pub stayed: usize,
}

impl PassStats {
    /// Total number of cells that changed position.
    pub fn moves(&self) -> usize {
        self.moved_down + self.moved_left + self.moved_right
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Down,
    Left,
    Right,
}

/// The automaton engine: owns the cell grid, the simulation clock and the
/// tie-break randomness.
///
/// All mutations go through explicit operations: [`World::spawn_liquid`],
/// [`World::set_cell`], [`World::clear`] and the update pass driven by
/// [`World::advance`] or [`World::step`]. Renderers and tools only read.
#[derive(Debug)]
pub struct World {
    config: GridConfig,
    grid: Grid,
    choice: Box<dyn ChoiceSource>,
    /// Simulated time accumulated since the last pass. Never negative.
    clock: f32,
    passes: u64,
    last_pass: PassStats,
}

impl World {
    /// Create an empty world whose tie-breaks are seeded from OS entropy.
    /// The seed is retained and available through [`World::seed`].
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        Self::with_choice(config, RandomChoice::from_entropy())
    }

    /// Create an empty world with a deterministic tie-break stream.
    pub fn with_seed(config: GridConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_choice(config, RandomChoice::with_seed(seed))
    }

    /// Create an empty world with an injected tie-break source.
    pub fn with_choice(
        config: GridConfig,
        choice: impl ChoiceSource + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(&config);
        tracing::debug!(
            rows = grid.rows(),
            columns = grid.columns(),
            cell_size = config.cell_size,
            seed = ?choice.seed(),
            "world created"
        );
        Ok(Self {
            config,
            grid,
            choice: Box::new(choice),
            clock: 0.0,
            passes: 0,
            last_pass: PassStats::default(),
        })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Read-only access to the underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    /// Simulated time accumulated since the last pass.
    pub fn clock(&self) -> f32 {
        self.clock
    }

    /// Number of update passes run so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Statistics of the most recent pass (all zero before the first one).
    pub fn last_pass(&self) -> PassStats {
        self.last_pass
    }

    /// Seed of the tie-break stream, if it is replayable.
    pub fn seed(&self) -> Option<u64> {
        self.choice.seed()
    }

    /// Material at `(row, col)`, or `None` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<MaterialKind> {
        self.grid.get(row, col)
    }

    /// Row-major `(row, col, kind)` for every cell, reflecting the state at
    /// the time of the call. Can be called again after further passes.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, MaterialKind)> + '_ {
        self.grid.iter()
    }

    /// Number of cells holding `kind`.
    pub fn count(&self, kind: MaterialKind) -> usize {
        self.grid.count(kind)
    }

    /// Place a material directly, e.g. a solid obstacle. Out-of-range
    /// coordinates are ignored and return false.
    pub fn set_cell(&mut self, row: usize, col: usize, kind: MaterialKind) -> bool {
        self.grid.set(row, col, kind)
    }

    /// Reset every cell to `Empty`. Dimensions, clock and pass count are kept.
    pub fn clear(&mut self) {
        self.grid.fill(MaterialKind::Empty);
    }

    /// Mark the cell under a world-space point as liquid, overwriting
    /// whatever it held.
    ///
    /// Points with a negative coordinate or outside the grid are ignored.
    /// Returns the cell that was written.
    pub fn spawn_liquid(&mut self, point: WorldPoint) -> Option<CellIndex> {
        let Some(index) = self.grid.world_to_cell(point) else {
            tracing::trace!(x = point.x, y = point.y, "spawn outside grid ignored");
            return None;
        };
        self.grid.set(index.row, index.col, MaterialKind::Liquid);
        Some(index)
    }

    /// Accumulate elapsed time and run at most one update pass.
    ///
    /// The pass runs once the clock reaches [`UPDATE_INTERVAL`], after which
    /// the clock resets to zero. Surplus time is not caught up with extra
    /// passes. Negative or non-finite deltas count as zero. Returns whether a
    /// pass ran.
    pub fn advance(&mut self, delta: f32) -> bool {
        if delta.is_finite() && delta > 0.0 {
            self.clock += delta;
        }
        if self.clock < UPDATE_INTERVAL {
            return false;
        }
        self.step();
        self.clock = 0.0;
        true
    }

    /// Run one full update pass immediately, ignoring the clock.
    ///
    /// Cells are visited row-major, top row first, left to right. Each
    /// liquid cell falls into an empty cell below if it can; otherwise one
    /// tie-break picks a side and the cell moves there only if that side is
    /// empty. A cell that fell during this pass is not moved again in the
    /// same pass; a cell that moved right is visited again in its new column.
    pub fn step(&mut self) -> PassStats {
        let _span = tracing::trace_span!("update_pass", pass = self.passes + 1).entered();
        let rows = self.grid.rows();
        let columns = self.grid.columns();
        let mut stats = PassStats::default();

        let mut landed_here = vec![false; columns];
        let mut landed_below = vec![false; columns];

        for row in 0..rows {
            std::mem::swap(&mut landed_here, &mut landed_below);
            landed_below.fill(false);

            for col in 0..columns {
                if landed_here[col] || self.grid.get(row, col) != Some(MaterialKind::Liquid) {
                    continue;
                }
                stats.liquid_cells += 1;
                let here = CellIndex::new(row, col);

                if self.try_move(here, Direction::Down) {
                    landed_below[col] = true;
                    stats.moved_down += 1;
                    continue;
                }

                let side = if self.choice.choice() {
                    Direction::Left
                } else {
                    Direction::Right
                };
                match (side, self.try_move(here, side)) {
                    (Direction::Left, true) => stats.moved_left += 1,
                    (Direction::Right, true) => stats.moved_right += 1,
                    _ => stats.stayed += 1,
                }
            }
        }

        self.passes += 1;
        self.last_pass = stats;
        tracing::trace!(
            pass = self.passes,
            liquid = stats.liquid_cells,
            down = stats.moved_down,
            left = stats.moved_left,
            right = stats.moved_right,
            stayed = stats.stayed,
            "update pass complete"
        );
        stats
    }

    /// Swap a liquid cell with its neighbour in `direction` when that
    /// neighbour exists and is empty.
    fn try_move(&mut self, from: CellIndex, direction: Direction) -> bool {
        let target = match direction {
            Direction::Down => Some(CellIndex::new(from.row + 1, from.col)),
            Direction::Left => from.col.checked_sub(1).map(|c| CellIndex::new(from.row, c)),
            Direction::Right => Some(CellIndex::new(from.row, from.col + 1)),
        };
        match target {
            Some(to) if self.grid.get(to.row, to.col) == Some(MaterialKind::Empty) => {
                self.grid.swap(from, to)
            }
            _ => false,
        }
    }

    /// Deterministic hash of the grid contents for replay comparison.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        mix(&mut h, &(self.rows() as u64).to_le_bytes());
        mix(&mut h, &(self.columns() as u64).to_le_bytes());
        for (_, _, kind) in self.cells() {
            mix(&mut h, &[kind as u8]);
        }
        h
    }
}
