//! Pause menu: Escape toggles it during a session, Q abandons the session.

use bevy::prelude::*;

use super::Menu;
use crate::screens::GameState;
use crate::theme::widget;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Menu::Pause), spawn_pause_menu);
    app.add_systems(
        Update,
        (
            open_pause_menu.run_if(in_state(GameState::InGame).and(in_state(Menu::None))),
            handle_pause_input.run_if(in_state(Menu::Pause)),
        ),
    );
}

fn spawn_pause_menu(mut commands: Commands) {
    commands.spawn((widget::overlay(), DespawnOnExit(Menu::Pause)));
    commands.spawn((
        widget::ui_root("Pause Menu"),
        DespawnOnExit(Menu::Pause),
        children![
            widget::header("PAUSED"),
            widget::prompt("Press ESC to Resume | Q to Quit"),
        ],
    ));
}

fn open_pause_menu(keyboard: Res<ButtonInput<KeyCode>>, mut next_menu: ResMut<NextState<Menu>>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        next_menu.set(Menu::Pause);
    }
}

fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_menu: ResMut<NextState<Menu>>,
    mut next_game_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        next_menu.set(Menu::None);
    }
    if keyboard.just_pressed(KeyCode::KeyQ) {
        info!("session abandoned");
        next_game_state.set(GameState::Title);
    }
}
