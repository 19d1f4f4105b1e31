//! Top-level screens, one per `GameState`.

mod game_over;
mod loading;
mod title;

use bevy::prelude::*;

/// Primary game states.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[states(scoped_entities)]
pub enum GameState {
    /// Initial loading state.
    #[default]
    Loading,
    /// Title screen, waiting for the player to launch.
    Title,
    /// Active session.
    InGame,
    /// Ship destroyed; waiting for a relaunch.
    GameOver,
}

fn log_state_change(state: Res<State<GameState>>) {
    info!("game state: {:?}", state.get());
}

pub fn plugin(app: &mut App) {
    app.init_state::<GameState>();
    app.add_plugins((loading::plugin, title::plugin, game_over::plugin));
    app.add_systems(
        Update,
        log_state_change.run_if(state_changed::<GameState>),
    );
}
