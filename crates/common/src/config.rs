use serde::{Deserialize, Serialize};

/// Minimum simulated time, in seconds, between two update passes.
pub const UPDATE_INTERVAL: f32 = 0.01;

/// Errors from grid configuration. These are programming or configuration
/// errors and are reported once, at construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("cell size must be positive")]
    ZeroCellSize,
    #[error("world {axis} must be positive")]
    ZeroWorldExtent { axis: &'static str },
    #[error("world {axis} of {extent} is smaller than the cell size {cell_size}")]
    ExtentBelowCellSize {
        axis: &'static str,
        extent: u32,
        cell_size: u32,
    },
}

/// World extent and cell edge length. Grid dimensions are the truncated
/// quotients `world_width / cell_size` and `world_height / cell_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// World width in world units.
    pub world_width: u32,
    /// World height in world units.
    pub world_height: u32,
    /// Edge length of one square cell in world units.
    pub cell_size: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            world_width: 800,
            world_height: 600,
            cell_size: 4,
        }
    }
}

impl GridConfig {
    /// Build and validate a configuration.
    pub fn new(world_width: u32, world_height: u32, cell_size: u32) -> Result<Self, ConfigError> {
        let config = Self {
            world_width,
            world_height,
            cell_size,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration produces a non-empty grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        for (axis, extent) in [("width", self.world_width), ("height", self.world_height)] {
            if extent == 0 {
                return Err(ConfigError::ZeroWorldExtent { axis });
            }
            if extent < self.cell_size {
                return Err(ConfigError::ExtentBelowCellSize {
                    axis,
                    extent,
                    cell_size: self.cell_size,
                });
            }
        }
        Ok(())
    }

    /// Number of cell columns. Zero only for an invalid configuration.
    pub fn columns(&self) -> usize {
        self.world_width.checked_div(self.cell_size).unwrap_or(0) as usize
    }

    /// Number of cell rows. Zero only for an invalid configuration.
    pub fn rows(&self) -> usize {
        self.world_height.checked_div(self.cell_size).unwrap_or(0) as usize
    }
}
