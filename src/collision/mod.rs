//! Collision domain: bounding shapes and penetration resolution.

mod aabb;
mod systems;

#[cfg(test)]
mod tests;

pub use aabb::{Aabb, Solid};

use bevy::prelude::*;

use crate::collision::systems::resolve_penetrations;
use crate::core::TickSet;

pub struct CollisionPlugin;

impl Plugin for CollisionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, resolve_penetrations.in_set(TickSet::Resolve));
    }
}
