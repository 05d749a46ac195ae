//! Effects domain: overlap detection and dispatch.

use bevy::prelude::*;

use crate::collision::Aabb;
use crate::effects::OverlapPad;
use crate::movement::Body;

/// Invoke every pad's effect on every body overlapping it. Runs after the
/// penetration resolver, so a launch issued here is the last velocity write
/// of the frame.
pub(crate) fn trigger_overlaps(
    pads: Query<(&Aabb, &OverlapPad)>,
    mut movers: Query<(&Aabb, &mut Body), Without<OverlapPad>>,
) {
    for (mover_aabb, mut body) in &mut movers {
        for (pad_aabb, pad) in &pads {
            if mover_aabb.overlaps(pad_aabb) {
                pad.effect.on_overlap(&mut body);
            }
        }
    }
}
