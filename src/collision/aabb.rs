//! Collision domain: axis-aligned bounding boxes.

use bevy::prelude::*;

/// Marker for level geometry the resolver pushes bodies out of.
#[derive(Component, Debug)]
pub struct Solid;

/// World-space axis-aligned bounding box, recomputed from its entity's
/// position after every move. Mutated only through [`Aabb::recompute`].
#[derive(Component, Debug, Clone, Copy)]
pub struct Aabb {
    pub half_extents: Vec2,
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(half_extents: Vec2) -> Self {
        Self {
            half_extents,
            min: -half_extents,
            max: half_extents,
        }
    }

    /// Box already placed at a world position (static geometry, spawn points).
    pub fn at(position: Vec3, half_extents: Vec2) -> Self {
        let mut aabb = Self::new(half_extents);
        aabb.recompute(position);
        aabb
    }

    /// Recalculate world-space extents from the owning entity's position.
    pub fn recompute(&mut self, position: Vec3) {
        let center = position.truncate();
        self.min = center - self.half_extents;
        self.max = center + self.half_extents;
    }

    /// Strict overlap test; boxes that merely share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Minimal translation that moves `self` out of `other`, along whichever
    /// axis has the shallower penetration. None when the boxes are separated.
    pub fn penetration_fix(&self, other: &Aabb) -> Option<Vec2> {
        if !self.overlaps(other) {
            return None;
        }

        let right = other.max.x - self.min.x;
        let left = self.max.x - other.min.x;
        let up = other.max.y - self.min.y;
        let down = self.max.y - other.min.y;

        let dx = if right < left { right } else { -left };
        let dy = if up < down { up } else { -down };

        Some(if dx.abs() < dy.abs() {
            Vec2::new(dx, 0.0)
        } else {
            Vec2::new(0.0, dy)
        })
    }
}
