//! Movement domain: input sampled once per tick.

use bevy::prelude::*;

#[derive(Resource, Debug, Default)]
pub struct MoveInput {
    /// Horizontal axis value in [-1, 1].
    pub axis: f32,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
}
