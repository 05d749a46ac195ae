//! Movement domain: the explicit-Euler integration core and its wiring.

mod components;
mod resources;
mod systems;


pub use components::{Body, MotionTuning, Player};
pub use resources::MoveInput;

use bevy::prelude::*;

use crate::core::TickSet;
use crate::movement::systems::{integrate, read_input};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MoveInput>()
            .add_systems(Update, read_input.in_set(TickSet::Input))
            .add_systems(Update, integrate.in_set(TickSet::Integrate));
    }
}
