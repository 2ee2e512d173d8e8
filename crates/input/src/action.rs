use glam::Vec2;
use sandfall_kernel::World;

/// A high-level action produced by an input layer and applied to the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Turn the cell under a world-space point into liquid.
    SpawnLiquid(Vec2),
    /// Feed elapsed frame time into the simulation clock.
    Advance(f32),
    /// No-op (used for input mapping that hasn't been bound yet).
    Noop,
}

impl Action {
    /// Apply this action. Returns whether the world changed: a cell was
    /// written or an update pass ran.
    pub fn apply(&self, world: &mut World) -> bool {
        match *self {
            Self::SpawnLiquid(point) => world.spawn_liquid(point).is_some(),
            Self::Advance(delta) => world.advance(delta),
            Self::Noop => false,
        }
    }
}
