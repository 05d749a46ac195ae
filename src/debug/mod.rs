//! Debug domain: dev-tools overlay for inspecting kinematic state.

mod state;
mod systems;
mod ui;

use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::systems::{toggle_overlay, update_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, toggle_overlay)
            .add_systems(
                Update,
                update_overlay.run_if(|state: Res<DebugState>| state.show_overlay),
            );
    }
}
