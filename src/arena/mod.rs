//! Arena domain: the sandbox level and player spawn.

use bevy::prelude::*;

use crate::collision::{Aabb, Solid};
use crate::content::MotionDefaults;
use crate::effects::{OverlapPad, SpringPad};
use crate::movement::{Body, Player};

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_arena, spawn_player));
    }
}

fn spawn_player(mut commands: Commands, defaults: Res<MotionDefaults>) {
    let tuning = defaults.tuning();
    info!(
        "spawning player: max_speed={}, jump apex held={:.0} tapped={:.0}",
        tuning.max_speed,
        tuning.held_jump_apex(),
        tuning.tapped_jump_apex()
    );

    let position = Vec3::new(0.0, 100.0, 1.0);
    commands.spawn((
        Player,
        Body::default(),
        tuning,
        Aabb::at(position, PLAYER_SIZE / 2.0),
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_translation(position),
    ));
}

fn spawn_arena(mut commands: Commands, defaults: Res<MotionDefaults>) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Ground
    spawn_solid(
        &mut commands,
        Vec2::new(0.0, -200.0),
        Vec2::new(800.0, 40.0),
        ground_color,
    );

    // Side walls
    spawn_solid(
        &mut commands,
        Vec2::new(-420.0, 50.0),
        Vec2::new(40.0, 500.0),
        wall_color,
    );
    spawn_solid(
        &mut commands,
        Vec2::new(420.0, 50.0),
        Vec2::new(40.0, 500.0),
        wall_color,
    );

    // Platforms
    spawn_solid(
        &mut commands,
        Vec2::new(-250.0, -50.0),
        Vec2::new(150.0, 20.0),
        platform_color,
    );
    spawn_solid(
        &mut commands,
        Vec2::new(0.0, 80.0),
        Vec2::new(120.0, 20.0),
        platform_color,
    );

    // Spring pad sitting on the ground, right side
    let spring_pos = Vec2::new(250.0, -172.0);
    let spring_size = Vec2::new(60.0, 16.0);
    commands.spawn((
        OverlapPad::new(SpringPad {
            launch_velocity: defaults.spring_launch(),
        }),
        Sprite {
            color: Color::srgb(0.9, 0.8, 0.2),
            custom_size: Some(spring_size),
            ..default()
        },
        Transform::from_xyz(spring_pos.x, spring_pos.y, 0.0),
        Aabb::at(spring_pos.extend(0.0), spring_size / 2.0),
    ));
}

fn spawn_solid(commands: &mut Commands, position: Vec2, size: Vec2, color: Color) {
    commands.spawn((
        Solid,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 0.0),
        Aabb::at(position.extend(0.0), size / 2.0),
    ));
}
