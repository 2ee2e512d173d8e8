use crate::action::Action;
use glam::Vec2;
use sandfall_kernel::World;

/// Snapshot of the paint control for one frame.
///
/// Liquid is painted only while the control is held and the pointer's
/// world-space position is known.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaintInput {
    pub paint_held: bool,
    /// Pointer position already converted to world space.
    pub pointer: Option<Vec2>,
}

impl PaintInput {
    pub fn held_at(pointer: Vec2) -> Self {
        Self {
            paint_held: true,
            pointer: Some(pointer),
        }
    }

    pub fn released() -> Self {
        Self::default()
    }

    /// The paint action for this frame.
    pub fn action(&self) -> Action {
        match (self.paint_held, self.pointer) {
            (true, Some(point)) => Action::SpawnLiquid(point),
            _ => Action::Noop,
        }
    }

    /// Actions for one frame in driver order: paint first, then advance.
    pub fn frame_actions(&self, delta: f32) -> [Action; 2] {
        [self.action(), Action::Advance(delta)]
    }

    /// Apply one frame of input and elapsed time. Returns whether an update
    /// pass ran.
    pub fn drive(&self, world: &mut World, delta: f32) -> bool {
        let [paint, advance] = self.frame_actions(delta);
        if paint.apply(world) {
            tracing::trace!(?paint, "painted");
        }
        advance.apply(world)
    }
}
