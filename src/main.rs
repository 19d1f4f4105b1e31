//! Space shooter entry point.

use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Space Shooter".to_string(),
                        // Matches the 4:3 logical resolution.
                        resolution: (1024, 768).into(),
                        resizable: true,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        .add_plugins(space_shooter::plugin)
        .run();
}
