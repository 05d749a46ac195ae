//! Effects domain: the overlap capability and its implementations.

use bevy::prelude::*;

use crate::movement::Body;

/// Capability for world objects that react to a body overlapping them.
///
/// Implementations are stateless with respect to the body; they receive it
/// through the dispatch system, never by reaching into the world themselves.
pub trait OverlapEffect: Send + Sync + 'static {
    fn on_overlap(&self, body: &mut Body);
}

/// A world object carrying an overlap-triggered effect.
#[derive(Component)]
pub struct OverlapPad {
    pub effect: Box<dyn OverlapEffect>,
}

impl OverlapPad {
    pub fn new(effect: impl OverlapEffect) -> Self {
        Self {
            effect: Box::new(effect),
        }
    }
}

/// Launches the body with a fixed velocity, replacing whatever it had.
#[derive(Debug, Clone, Copy)]
pub struct SpringPad {
    pub launch_velocity: Vec3,
}

impl OverlapEffect for SpringPad {
    fn on_overlap(&self, body: &mut Body) {
        body.launch(self.launch_velocity);
    }
}
