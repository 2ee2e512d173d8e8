use glam::Vec2;
use sandfall_common::GridConfig;

/// A straight line segment in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub from: Vec2,
    pub to: Vec2,
}

/// Debug overlay: cell boundaries at every multiple of the cell edge.
///
/// Produces `rows + 1` horizontal lines spanning the world width followed by
/// `columns + 1` vertical lines spanning the world height. Derived purely
/// from the configuration.
pub fn grid_lines(config: &GridConfig) -> Vec<GridLine> {
    let edge = config.cell_size as f32;
    let width = config.world_width as f32;
    let height = config.world_height as f32;

    let horizontal = (0..=config.rows()).map(|row| {
        let y = row as f32 * edge;
        GridLine {
            from: Vec2::new(0.0, y),
            to: Vec2::new(width, y),
        }
    });
    let vertical = (0..=config.columns()).map(|col| {
        let x = col as f32 * edge;
        GridLine {
            from: Vec2::new(x, 0.0),
            to: Vec2::new(x, height),
        }
    });
    horizontal.chain(vertical).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_count_is_dimensions_plus_one() {
        let config = GridConfig::new(20, 12, 4).unwrap();
        let lines = grid_lines(&config);
        assert_eq!(lines.len(), (3 + 1) + (5 + 1));
    }

    #[test]
    fn lines_fall_on_cell_edges() {
        let config = GridConfig::new(8, 4, 2).unwrap();
        let lines = grid_lines(&config);
        assert_eq!(
            lines[0],
            GridLine {
                from: Vec2::new(0.0, 0.0),
                to: Vec2::new(8.0, 0.0)
            }
        );
        assert_eq!(lines[2].from.y, 4.0);
        let last = lines.last().unwrap();
        assert_eq!(last.from, Vec2::new(8.0, 0.0));
        assert_eq!(last.to, Vec2::new(8.0, 4.0));
    }
}
