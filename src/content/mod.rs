//! Content domain: data-driven movement tuning.

mod data;
mod loader;


pub use data::MovementDef;
pub use loader::{ContentLoadError, load_movement_def};

use bevy::prelude::*;
use std::path::Path;

use crate::movement::MotionTuning;

/// Movement numbers loaded at startup, consumed by the arena spawners.
#[derive(Resource, Debug, Clone)]
pub struct MotionDefaults {
    pub movement: MovementDef,
}

impl MotionDefaults {
    pub fn tuning(&self) -> MotionTuning {
        let def = &self.movement;
        MotionTuning {
            accel: def.accel,
            decel: def.decel,
            max_speed: def.max_speed,
            gravity: def.gravity,
            jump_impulse: def.jump_impulse,
            terminal_velocity: def.terminal_velocity,
        }
    }

    pub fn spring_launch(&self) -> Vec3 {
        Vec3::new(
            self.movement.spring_launch[0],
            self.movement.spring_launch[1],
            0.0,
        )
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_content);
    }
}

fn load_content(mut commands: Commands) {
    let movement = match load_movement_def(Path::new("assets/data")) {
        Ok(def) => {
            info!("loaded movement tuning from assets/data/movement.ron");
            def
        }
        Err(e) => {
            warn!("{}; using built-in movement defaults", e);
            MovementDef::default()
        }
    };

    commands.insert_resource(MotionDefaults { movement });
}
