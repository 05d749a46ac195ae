//! Debug domain: overlay toggle and refresh systems.

use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::ui::{KinematicsOverlay, spawn_overlay};
use crate::movement::{Body, Player};

/// Toggle the kinematics overlay with F1.
pub(crate) fn toggle_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<DebugState>,
    existing: Query<Entity, With<KinematicsOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }

    state.show_overlay = !state.show_overlay;
    if state.show_overlay {
        spawn_overlay(&mut commands);
    } else {
        for entity in &existing {
            commands.entity(entity).despawn();
        }
    }
}

/// Refresh the overlay with the player's current kinematic state.
pub(crate) fn update_overlay(
    player: Query<(&Transform, &Body), With<Player>>,
    mut overlay: Query<&mut Text, With<KinematicsOverlay>>,
) {
    if let (Ok((transform, body)), Ok(mut text)) = (player.single(), overlay.single_mut()) {
        let pos = transform.translation;
        **text = format!(
            "pos: ({:.0}, {:.0})\nvel: ({:.1}, {:.1})\ngrounded: {}\nrising: {}",
            pos.x, pos.y, body.velocity.x, body.velocity.y, body.on_ground, body.jump_rising
        );
    }
}
