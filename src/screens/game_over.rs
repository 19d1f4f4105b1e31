//! Game over screen: shown after the ship is destroyed.

use bevy::prelude::*;

use super::GameState;
use crate::theme::widget;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::GameOver), spawn_game_over_screen)
        .add_systems(
            Update,
            handle_game_over_input.run_if(in_state(GameState::GameOver)),
        );
}

fn spawn_game_over_screen(mut commands: Commands) {
    commands.spawn((
        widget::ui_root("Game Over Screen"),
        DespawnOnExit(GameState::GameOver),
        children![
            widget::header("SHIP LOST"),
            widget::prompt("Press SPACE to Fly Again"),
        ],
    ));
}

fn handle_game_over_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        next_state.set(GameState::InGame);
    }
}
