//! Effects domain: overlap-triggered world objects.

mod overlap;
mod systems;


pub use overlap::{OverlapEffect, OverlapPad, SpringPad};

use bevy::prelude::*;

use crate::core::TickSet;
use crate::effects::systems::trigger_overlaps;

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, trigger_overlaps.in_set(TickSet::React));
    }
}
