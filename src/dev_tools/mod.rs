//! Development tools, only compiled with the `dev` feature.
//!
//! `F` drops a debug body under the cursor; `F1` toggles the world inspector.

use bevy::prelude::*;
use bevy_inspector_egui::bevy_egui::EguiPlugin;
use bevy_inspector_egui::quick::WorldInspectorPlugin;

use crate::gameplay::debug_body::spawn_debug_body;
use crate::input::PlayerInput;
use crate::{GameSet, gameplay_running};

/// Whether the world inspector window is shown.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
struct InspectorVisible(bool);

fn debug_spawn_body(
    keyboard: Res<ButtonInput<KeyCode>>,
    input: Res<PlayerInput>,
    mut commands: Commands,
) {
    if !keyboard.just_pressed(KeyCode::KeyF) {
        return;
    }
    let Some(position) = input.aim else {
        warn!("debug spawn needs the cursor over the viewport");
        return;
    };
    let entity = spawn_debug_body(&mut commands, position, Vec2::ZERO);
    debug!("debug body {entity} dropped at {position}");
}

fn toggle_inspector(keyboard: Res<ButtonInput<KeyCode>>, mut visible: ResMut<InspectorVisible>) {
    if keyboard.just_pressed(KeyCode::F1) {
        visible.0 = !visible.0;
    }
}

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<InspectorVisible>();
    app.add_plugins((
        EguiPlugin::default(),
        WorldInspectorPlugin::new().run_if(resource_equals(InspectorVisible(true))),
    ));
    app.add_systems(Update, toggle_inspector);
    app.add_systems(
        Update,
        debug_spawn_body
            .in_set(GameSet::Input)
            .after(crate::input::poll_input)
            .run_if(gameplay_running),
    );
}
