mod arena;
mod collision;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod effects;
mod movement;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Talaria".to_string(),
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        movement::MovementPlugin,
        collision::CollisionPlugin,
        effects::EffectsPlugin,
        arena::ArenaPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
