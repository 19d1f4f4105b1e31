//! Title screen: name of the game and a launch prompt.

use bevy::prelude::*;

use super::GameState;
use crate::theme::widget;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Title), spawn_title_screen)
        .add_systems(Update, handle_title_input.run_if(in_state(GameState::Title)));
}

fn spawn_title_screen(mut commands: Commands) {
    commands.spawn((
        widget::ui_root("Title Screen"),
        DespawnOnExit(GameState::Title),
        children![
            widget::title("Space Shooter"),
            widget::prompt("WASD to thrust | Mouse to aim | Click or SPACE to fire"),
            widget::prompt("Press SPACE to Launch"),
        ],
    ));
}

fn handle_title_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        next_state.set(GameState::InGame);
    }
}
