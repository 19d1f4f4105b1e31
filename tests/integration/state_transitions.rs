//! Tests for game state transitions.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use pretty_assertions::assert_eq;
use space_shooter::GameState;

fn create_game_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    app.init_resource::<ButtonInput<KeyCode>>();
    app.add_plugins(space_shooter::screens::plugin);
    app
}

fn current(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

#[test]
fn game_initializes_in_loading_state() {
    let app = create_game_app();
    assert_eq!(current(&app), GameState::Loading);
}

#[test]
fn loading_hands_over_to_title() {
    let mut app = create_game_app();
    app.update();
    app.update();
    assert_eq!(current(&app), GameState::Title);
}

#[test]
fn space_on_title_starts_the_game() {
    let mut app = create_game_app();
    app.update();
    app.update();

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Space);
    app.update();
    app.update();

    assert_eq!(current(&app), GameState::InGame);
}

#[test]
fn can_transition_between_states() {
    let mut app = create_game_app();

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::GameOver);
    app.update();

    assert_eq!(current(&app), GameState::GameOver);
}
