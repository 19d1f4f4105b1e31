//! Space-shooter prototype: a ship, bullets, and debug bodies on a wrap-around
//! star field, wired together through a message-based signal bus.

mod camera;
#[cfg(feature = "dev")]
mod dev_tools;
pub mod gameplay;
pub mod input;
mod menus;
pub mod screens;
pub mod signals;
#[cfg(test)]
pub mod testing;
mod theme;
mod third_party;
pub mod viewport;

use bevy::prelude::*;

pub use screens::GameState;

// === Render Layers (z-order) ===

/// Starfield sprites, behind everything.
pub const Z_STARS: f32 = -10.0;
/// Board outline.
pub const Z_BOARD: f32 = -5.0;
/// Bodies: player, bullets, debug bodies.
pub const Z_BODY: f32 = 0.0;
/// Explosion effects, drawn over bodies.
pub const Z_EFFECT: f32 = 5.0;

/// Per-frame ordering of gameplay systems. Chained in `Update`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Poll keyboard and mouse.
    Input,
    /// Steering, firing, effect animation.
    Movement,
    /// Contact detection and impact resolution.
    Physics,
    /// Apply damage from the bus.
    Damage,
    /// Destroy depleted and expired bodies.
    Death,
    /// Board wrap-around and dependent shifts.
    Wrap,
    /// HUD refresh.
    Ui,
}

/// Run condition: in a game session and no menu overlay is open.
#[must_use]
pub fn gameplay_running(
    game_state: Option<Res<State<GameState>>>,
    menu: Option<Res<State<menus::Menu>>>,
) -> bool {
    let in_game = game_state.is_some_and(|s| *s.get() == GameState::InGame);
    let no_menu = menu.is_none_or(|m| *m.get() == menus::Menu::None);
    in_game && no_menu
}

/// Builds the whole game on top of an app that already has the engine plugins.
pub fn plugin(app: &mut App) {
    app.configure_sets(
        Update,
        (
            GameSet::Input,
            GameSet::Movement,
            GameSet::Physics,
            GameSet::Damage,
            GameSet::Death,
            GameSet::Wrap,
            GameSet::Ui,
        )
            .chain(),
    );

    app.add_plugins((
        third_party::plugin,
        signals::plugin,
        viewport::plugin,
        camera::plugin,
        input::plugin,
        gameplay::plugin,
        screens::plugin,
        menus::plugin,
        theme::plugin,
    ));

    #[cfg(feature = "dev")]
    app.add_plugins(dev_tools::plugin);
}
