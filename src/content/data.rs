//! Data definitions for the RON tuning file.
//!
//! These structs mirror the structure in assets/data/movement.ron.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovementDef {
    pub accel: f32,
    pub decel: f32,
    pub max_speed: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub terminal_velocity: f32,
    /// Velocity the spring pad launches with, x then y.
    pub spring_launch: [f32; 2],
}

impl Default for MovementDef {
    fn default() -> Self {
        Self {
            accel: 3000.0,
            decel: 2600.0,
            max_speed: 320.0,
            gravity: 1800.0,
            jump_impulse: 680.0,
            terminal_velocity: 900.0,
            spring_launch: [0.0, 1400.0],
        }
    }
}
