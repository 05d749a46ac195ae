//! Collision domain: tests for bounds math and penetration fixes.

use bevy::prelude::{Transform, Vec2, Vec3};

use super::Aabb;
use crate::movement::Body;

fn aabb_at(x: f32, y: f32, half: Vec2) -> Aabb {
    Aabb::at(Vec3::new(x, y, 0.0), half)
}

// -----------------------------------------------------------------------------
// Bounds recompute
// -----------------------------------------------------------------------------

#[test]
fn test_recompute_tracks_position() {
    let mut aabb = Aabb::new(Vec2::new(2.0, 1.0));

    aabb.recompute(Vec3::new(10.0, 5.0, 0.0));

    assert_eq!(aabb.min, Vec2::new(8.0, 4.0));
    assert_eq!(aabb.max, Vec2::new(12.0, 6.0));
}

#[test]
fn test_recompute_ignores_layer_depth() {
    let mut aabb = Aabb::new(Vec2::splat(1.0));

    aabb.recompute(Vec3::new(3.0, 3.0, 9.0));

    assert_eq!(aabb.min, Vec2::new(2.0, 2.0));
}

// -----------------------------------------------------------------------------
// Overlap and penetration
// -----------------------------------------------------------------------------

#[test]
fn test_touching_edges_do_not_overlap() {
    let a = aabb_at(0.0, 0.0, Vec2::splat(1.0));
    let b = aabb_at(2.0, 0.0, Vec2::splat(1.0));

    assert!(!a.overlaps(&b));
    assert_eq!(a.penetration_fix(&b), None);
}

#[test]
fn test_fix_pushes_out_along_shallow_axis() {
    // deep horizontal overlap, shallow vertical: push vertically
    let floor = aabb_at(0.0, -1.0, Vec2::new(10.0, 1.0));
    let mover = aabb_at(0.0, 0.9, Vec2::new(0.5, 1.0));

    let fix = mover.penetration_fix(&floor).unwrap();

    assert!((fix.y - 0.1).abs() < 1e-6);
    assert_eq!(fix.x, 0.0);
}

#[test]
fn test_fix_signs_in_all_four_directions() {
    let block = aabb_at(0.0, 0.0, Vec2::splat(1.0));
    let half = Vec2::splat(1.0);

    let from_left = aabb_at(-1.9, 0.0, half).penetration_fix(&block).unwrap();
    assert!(from_left.x < 0.0 && from_left.y == 0.0);

    let from_right = aabb_at(1.9, 0.0, half).penetration_fix(&block).unwrap();
    assert!(from_right.x > 0.0 && from_right.y == 0.0);

    let from_below = aabb_at(0.0, -1.9, half).penetration_fix(&block).unwrap();
    assert!(from_below.y < 0.0 && from_below.x == 0.0);

    let from_above = aabb_at(0.0, 1.9, half).penetration_fix(&block).unwrap();
    assert!(from_above.y > 0.0 && from_above.x == 0.0);
}

#[test]
fn test_fix_separates_the_boxes() {
    let block = aabb_at(0.0, 0.0, Vec2::splat(1.0));
    let mut mover = aabb_at(0.0, 1.7, Vec2::splat(1.0));

    let fix = mover.penetration_fix(&block).unwrap();
    mover.recompute(Vec3::new(0.0, 1.7 + fix.y, 0.0));

    assert!(!mover.overlaps(&block));
}

// -----------------------------------------------------------------------------
// Resolution against the body
// -----------------------------------------------------------------------------

#[test]
fn test_resolving_a_fall_grounds_the_body() {
    // a body that sank into the floor is pushed back on top and grounded
    let floor = aabb_at(0.0, -1.0, Vec2::new(10.0, 1.0));
    let mut body = Body {
        velocity: Vec3::new(0.0, -5.0, 0.0),
        ..Body::default()
    };
    let mut transform = Transform::from_xyz(0.0, 0.8, 0.0);
    let mut aabb = Aabb::at(transform.translation, Vec2::new(0.5, 1.0));

    let fix = aabb.penetration_fix(&floor).unwrap();
    body.apply_fix(&mut transform, &mut aabb, fix.extend(0.0));

    assert!(body.on_ground);
    assert_eq!(body.velocity.y, 0.0);
    assert!((transform.translation.y - 1.0).abs() < 1e-6);
    assert!(!aabb.overlaps(&floor));
}

#[test]
fn test_resolving_a_wall_hit_stops_sideways_motion() {
    let wall = aabb_at(2.0, 0.0, Vec2::new(1.0, 10.0));
    let mut body = Body {
        velocity: Vec3::new(5.0, -2.0, 0.0),
        ..Body::default()
    };
    let mut transform = Transform::from_xyz(0.7, 0.0, 0.0);
    let mut aabb = Aabb::at(transform.translation, Vec2::new(0.5, 1.0));

    let fix = aabb.penetration_fix(&wall).unwrap();
    body.apply_fix(&mut transform, &mut aabb, fix.extend(0.0));

    assert_eq!(body.velocity.x, 0.0);
    assert_eq!(body.velocity.y, -2.0);
    assert!(!body.on_ground);
    assert!(!aabb.overlaps(&wall));
}
