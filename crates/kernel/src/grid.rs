use glam::Vec2;
use sandfall_common::{CellIndex, GridConfig, MaterialKind, WorldPoint};

/// Fixed-size row-major store of cells.
///
/// Dimensions are set at construction and never change. Every access is
/// range-checked against `row < rows` and `col < columns`; out-of-range
/// reads return `None` and out-of-range writes are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cell_size: u32,
    cells: Vec<MaterialKind>,
}

impl Grid {
    /// Create an all-empty grid sized from a configuration.
    ///
    /// The configuration is expected to be validated; an invalid one yields
    /// a zero-sized grid on which every access is a no-op.
    pub fn new(config: &GridConfig) -> Self {
        let rows = config.rows();
        let columns = config.columns();
        Self {
            rows,
            columns,
            cell_size: config.cell_size,
            cells: vec![MaterialKind::Empty; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Edge length of a cell in world units.
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Whether `(row, col)` addresses a cell of this grid.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.columns
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        self.contains(row, col).then(|| row * self.columns + col)
    }

    /// Material at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<MaterialKind> {
        self.offset(row, col).map(|i| self.cells[i])
    }

    /// Overwrite the material at `(row, col)`. Returns false when out of range.
    pub fn set(&mut self, row: usize, col: usize, kind: MaterialKind) -> bool {
        match self.offset(row, col) {
            Some(i) => {
                self.cells[i] = kind;
                true
            }
            None => false,
        }
    }

    /// Exchange the materials of two cells. Returns false, leaving the grid
    /// untouched, when either cell is out of range.
    pub fn swap(&mut self, a: CellIndex, b: CellIndex) -> bool {
        match (self.offset(a.row, a.col), self.offset(b.row, b.col)) {
            (Some(i), Some(j)) => {
                self.cells.swap(i, j);
                true
            }
            _ => false,
        }
    }

    /// Set every cell to `kind`.
    pub fn fill(&mut self, kind: MaterialKind) {
        self.cells.fill(kind);
    }

    /// Number of cells holding `kind`.
    pub fn count(&self, kind: MaterialKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// Row-major iteration over `(row, col, kind)`, top row first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, MaterialKind)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &kind)| (i / columns, i % columns, kind))
    }

    /// Map a world-space point to the cell containing it.
    ///
    /// Each axis uses `floor(coordinate) / cell_size`. Negative or non-finite
    /// coordinates and indices at or past either dimension yield `None`.
    pub fn world_to_cell(&self, point: WorldPoint) -> Option<CellIndex> {
        let col = axis_index(point.x, self.cell_size)?;
        let row = axis_index(point.y, self.cell_size)?;
        self.contains(row, col).then_some(CellIndex { row, col })
    }

    /// World-space position of the top-left corner of a cell.
    pub fn cell_origin(&self, index: CellIndex) -> Vec2 {
        let edge = self.cell_size as f32;
        Vec2::new(index.col as f32 * edge, index.row as f32 * edge)
    }
}

fn axis_index(coordinate: f32, cell_size: u32) -> Option<usize> {
    if !coordinate.is_finite() || coordinate < 0.0 || cell_size == 0 {
        return None;
    }
    let whole = coordinate.floor() as u64;
    usize::try_from(whole / u64::from(cell_size)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(w: u32, h: u32, edge: u32) -> Grid {
        Grid::new(&GridConfig::new(w, h, edge).unwrap())
    }

    #[test]
    fn new_grid_is_all_empty() {
        let g = grid(20, 12, 4);
        assert_eq!(g.columns(), 5);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.iter().count(), 15);
        assert_eq!(g.count(MaterialKind::Empty), 15);
    }

    #[test]
    fn get_and_set_in_range() {
        let mut g = grid(4, 4, 1);
        assert!(g.set(3, 3, MaterialKind::Solid));
        assert_eq!(g.get(3, 3), Some(MaterialKind::Solid));
        assert_eq!(g.get(0, 0), Some(MaterialKind::Empty));
    }

    #[test]
    fn access_at_dimension_is_rejected() {
        let mut g = grid(4, 3, 1);
        assert_eq!(g.get(3, 0), None);
        assert_eq!(g.get(0, 4), None);
        assert!(!g.set(3, 0, MaterialKind::Liquid));
        assert!(!g.set(0, 4, MaterialKind::Liquid));
        assert_eq!(g.count(MaterialKind::Liquid), 0);
    }

    #[test]
    fn swap_exchanges_materials() {
        let mut g = grid(2, 2, 1);
        g.set(0, 0, MaterialKind::Liquid);
        assert!(g.swap(CellIndex::new(0, 0), CellIndex::new(1, 0)));
        assert_eq!(g.get(0, 0), Some(MaterialKind::Empty));
        assert_eq!(g.get(1, 0), Some(MaterialKind::Liquid));
    }

    #[test]
    fn swap_out_of_range_is_noop() {
        let mut g = grid(2, 2, 1);
        g.set(1, 1, MaterialKind::Liquid);
        let before = g.clone();
        assert!(!g.swap(CellIndex::new(1, 1), CellIndex::new(2, 1)));
        assert!(!g.swap(CellIndex::new(1, 1), CellIndex::new(1, 2)));
        assert_eq!(g, before);
    }

    #[test]
    fn iter_is_row_major() {
        let mut g = grid(3, 2, 1);
        g.set(1, 2, MaterialKind::Liquid);
        let cells: Vec<_> = g.iter().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], (0, 0, MaterialKind::Empty));
        assert_eq!(cells[2], (0, 2, MaterialKind::Empty));
        assert_eq!(cells[3], (1, 0, MaterialKind::Empty));
        assert_eq!(cells[5], (1, 2, MaterialKind::Liquid));
    }

    #[test]
    fn world_to_cell_floors_then_divides() {
        let g = grid(800, 600, 4);
        assert_eq!(
            g.world_to_cell(Vec2::new(7.9, 3.99)),
            Some(CellIndex::new(0, 1))
        );
        assert_eq!(
            g.world_to_cell(Vec2::new(0.0, 8.0)),
            Some(CellIndex::new(2, 0))
        );
        assert_eq!(
            g.world_to_cell(Vec2::new(799.9, 599.9)),
            Some(CellIndex::new(149, 199))
        );
    }

    #[test]
    fn world_to_cell_rejects_upper_bound() {
        let g = grid(800, 600, 4);
        assert_eq!(g.world_to_cell(Vec2::new(800.0, 10.0)), None);
        assert_eq!(g.world_to_cell(Vec2::new(10.0, 600.0)), None);
        assert_eq!(g.world_to_cell(Vec2::new(1.0e30, 10.0)), None);
    }

    #[test]
    fn world_to_cell_rejects_negative_and_nan() {
        let g = grid(800, 600, 4);
        assert_eq!(g.world_to_cell(Vec2::new(-1.0, 5.0)), None);
        assert_eq!(g.world_to_cell(Vec2::new(5.0, -0.5)), None);
        assert_eq!(g.world_to_cell(Vec2::new(f32::NAN, 5.0)), None);
        assert_eq!(g.world_to_cell(Vec2::new(f32::INFINITY, 5.0)), None);
    }

    #[test]
    fn cell_origin_scales_by_edge() {
        let g = grid(800, 600, 4);
        assert_eq!(g.cell_origin(CellIndex::new(2, 3)), Vec2::new(12.0, 8.0));
    }

    #[test]
    fn fill_overwrites_everything() {
        let mut g = grid(3, 3, 1);
        g.fill(MaterialKind::Solid);
        assert_eq!(g.count(MaterialKind::Solid), 9);
    }
}
