//! Core domain: camera setup and the per-frame tick ordering.

use bevy::prelude::*;

/// Phases of one simulation tick.
///
/// The order is load-bearing: the integrator clears the grounded flag at the
/// end of its phase, and only a penetration fix from the resolver can
/// re-assert it before the next tick's vertical update. Overlap effects run
/// last, so a launch issued in the same frame as a fix wins on any velocity
/// fields they both touch.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum TickSet {
    Input,
    Integrate,
    Resolve,
    React,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                TickSet::Input,
                TickSet::Integrate,
                TickSet::Resolve,
                TickSet::React,
            )
                .chain(),
        )
        .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
