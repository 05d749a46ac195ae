//! Movement domain: the kinematic body and its per-tick stepping policy.

use bevy::prelude::*;

use crate::collision::Aabb;
use crate::movement::MoveInput;

/// Ticks longer than this are treated as a stall (alt-tab, debugger pause)
/// and skipped outright instead of producing one huge displacement.
pub const MAX_TICK_SECONDS: f32 = 0.25;

/// Control authority divisor while airborne.
const AIR_CONTROL_PENALTY: f32 = 5.0;

/// Gravity scale during the held, ascending phase of a jump.
const ASCENT_GRAVITY_SCALE: f32 = 0.5;

#[derive(Component, Debug)]
pub struct Player;

/// Movement numbers for one body, set at spawn and never mutated after.
#[derive(Component, Debug, Clone)]
pub struct MotionTuning {
    /// Horizontal acceleration while input is held, units/s^2.
    pub accel: f32,
    /// Horizontal deceleration toward zero while input is released.
    pub decel: f32,
    /// Hard cap on horizontal speed, units/s.
    pub max_speed: f32,
    /// Downward acceleration, units/s^2.
    pub gravity: f32,
    /// Vertical velocity applied at the instant of a jump.
    pub jump_impulse: f32,
    /// Hard cap on falling speed. Rising speed is never capped.
    pub terminal_velocity: f32,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            accel: 3000.0,
            decel: 2600.0,
            max_speed: 320.0,
            gravity: 1800.0,
            jump_impulse: 680.0,
            terminal_velocity: 900.0,
        }
    }
}

impl MotionTuning {
    /// Apex height of a jump held through the whole ascent. Gravity is halved
    /// while rising, so this is v^2 / g rather than the ballistic v^2 / 2g.
    pub fn held_jump_apex(&self) -> f32 {
        self.jump_impulse * self.jump_impulse / self.gravity
    }

    /// Apex height of a jump released immediately after launch.
    pub fn tapped_jump_apex(&self) -> f32 {
        self.jump_impulse * self.jump_impulse / (2.0 * self.gravity)
    }
}

/// Kinematic state advanced once per tick by explicit Euler integration.
///
/// Position lives in the entity's `Transform`; the body never introduces
/// drift on the z axis (velocity.z stays 0, translation.z is layer depth).
#[derive(Component, Debug, Default)]
pub struct Body {
    /// Current velocity, units/s. The z component is always 0.
    pub velocity: Vec3,
    /// True only for the tick window following an upward collision fix.
    /// Cleared at the end of every integration step.
    pub on_ground: bool,
    /// True while in the ascending, button-held phase of a jump.
    pub jump_rising: bool,
}

impl Body {
    /// Advance one tick: horizontal model, vertical model, position
    /// integration, bounds recompute, grounded reset — in that order.
    ///
    /// Returns false when the tick was rejected by the stall guard, in which
    /// case nothing was mutated.
    pub fn step(
        &mut self,
        transform: &mut Transform,
        aabb: &mut Aabb,
        tuning: &MotionTuning,
        input: &MoveInput,
        dt: f32,
    ) -> bool {
        if dt > MAX_TICK_SECONDS {
            return false;
        }

        self.step_horizontal(tuning, input.axis, dt);
        self.step_vertical(tuning, input.jump_just_pressed, input.jump_held, dt);

        transform.translation += self.velocity * dt;
        aabb.recompute(transform.translation);

        // Grounding asserted by a fix survives exactly one step; any tick
        // without a fresh upward fix loses jump permission for the next one.
        self.on_ground = false;

        true
    }

    /// Horizontal axis model: accelerate under input, otherwise decelerate
    /// toward zero without ever crossing it, then clamp to max speed.
    fn step_horizontal(&mut self, tuning: &MotionTuning, h: f32, dt: f32) {
        let air_scale = if self.on_ground {
            1.0
        } else {
            1.0 / AIR_CONTROL_PENALTY
        };

        if h != 0.0 {
            self.velocity.x += h * tuning.accel * air_scale * dt;
        } else {
            let decel = tuning.decel * air_scale * dt;
            if self.velocity.x > 0.0 {
                self.velocity.x = (self.velocity.x - decel).max(0.0);
            } else if self.velocity.x < 0.0 {
                self.velocity.x = (self.velocity.x + decel).min(0.0);
            }
        }

        self.velocity.x = self.velocity.x.clamp(-tuning.max_speed, tuning.max_speed);
    }

    /// Vertical model: jump impulse, variable-height ascent, gravity,
    /// terminal-velocity clamp.
    fn step_vertical(&mut self, tuning: &MotionTuning, jump_pressed: bool, jump_held: bool, dt: f32) {
        if jump_pressed && self.on_ground {
            self.velocity.y = tuning.jump_impulse;
            self.jump_rising = true;
        }
        // Releasing early or already falling ends the boosted ascent.
        if !jump_held || self.velocity.y < 0.0 {
            self.jump_rising = false;
        }

        let gravity_scale = if self.jump_rising {
            ASCENT_GRAVITY_SCALE
        } else {
            1.0
        };
        self.velocity.y -= tuning.gravity * gravity_scale * dt;

        if self.velocity.y < -tuning.terminal_velocity {
            self.velocity.y = -tuning.terminal_velocity;
        }
    }

    /// Apply a penetration correction from the collision resolver.
    ///
    /// An upward fix means the body was standing in a floor: it is grounded
    /// and its fall is stopped. A downward fix (ceiling) stops the rise but
    /// does not ground. Any horizontal fix kills horizontal speed.
    pub fn apply_fix(&mut self, transform: &mut Transform, aabb: &mut Aabb, fix: Vec3) {
        transform.translation += fix;

        if fix.y != 0.0 {
            self.velocity.y = 0.0;
            if fix.y > 0.0 {
                self.on_ground = true;
            }
        }
        if fix.x != 0.0 {
            self.velocity.x = 0.0;
        }

        aabb.recompute(transform.translation);
    }

    /// Replace the velocity outright (a bounce pad, not an impulse).
    ///
    /// The grounded and ascent flags are left alone, so a launched body falls
    /// under full gravity from the next tick on.
    pub fn launch(&mut self, mut velocity: Vec3) {
        velocity.z = 0.0;
        self.velocity = velocity;
    }
}
