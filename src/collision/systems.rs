//! Collision domain: penetration resolution against solid geometry.

use bevy::prelude::*;

use crate::collision::{Aabb, Solid};
use crate::movement::Body;

/// Push every overlapping body out of solid geometry and feed the resulting
/// fix into its kinematic state. Runs after integration, so grounding set
/// here survives exactly one vertical update before the integrator clears it.
pub(crate) fn resolve_penetrations(
    mut movers: Query<(&mut Transform, &mut Body, &mut Aabb), Without<Solid>>,
    solids: Query<&Aabb, With<Solid>>,
) {
    for (mut transform, mut body, mut aabb) in &mut movers {
        for solid in &solids {
            let Some(fix) = aabb.penetration_fix(solid) else {
                continue;
            };

            let was_grounded = body.on_ground;
            body.apply_fix(&mut transform, &mut aabb, fix.extend(0.0));

            if body.on_ground && !was_grounded {
                debug!("landed at y={:.1}", transform.translation.y);
            } else if fix.y < 0.0 {
                debug!("ceiling contact, rise stopped");
            } else if fix.x != 0.0 {
                debug!("wall contact, fix.x={:.2}", fix.x);
            }
        }
    }
}
