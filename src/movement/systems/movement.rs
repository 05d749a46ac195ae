//! Movement domain: the per-tick integration system.

use bevy::prelude::*;

use crate::collision::Aabb;
use crate::movement::{Body, MotionTuning, MoveInput};

pub(crate) fn integrate(
    time: Res<Time>,
    input: Res<MoveInput>,
    mut query: Query<(&mut Transform, &mut Body, &mut Aabb, &MotionTuning)>,
) {
    let dt = time.delta_secs();

    for (mut transform, mut body, mut aabb, tuning) in &mut query {
        if !body.step(&mut transform, &mut aabb, tuning, &input, dt) {
            debug!("stalled tick (dt={:.3}s), skipping integration", dt);
        }
    }
}
