//! Debug domain: overlay state.

use bevy::prelude::*;

/// Resource tracking whether the kinematics overlay is visible.
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub show_overlay: bool,
}
