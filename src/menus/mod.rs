//! Menu overlays that sit on top of a screen.
//!
//! The `Menu` state is orthogonal to `GameState`: `Menu::Pause` appears while
//! `GameState::InGame` is active and freezes the session underneath.

mod pause;

use bevy::prelude::*;

use crate::screens::GameState;

/// Menu overlay states. Orthogonal to `GameState`.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[states(scoped_entities)]
pub enum Menu {
    /// No menu overlay is active.
    #[default]
    None,
    /// Pause menu (shown in-game).
    Pause,
}

pub fn plugin(app: &mut App) {
    app.init_state::<Menu>();
    app.add_plugins(pause::plugin);

    // Pause/unpause virtual time when any menu overlay opens/closes.
    // This stops avian2d (FixedPostUpdate accumulates from Time<Virtual>)
    // and every timer-driven system: gun cooldowns, bullet lifetimes, explosions.
    app.add_systems(OnExit(Menu::None), pause_virtual_time);
    app.add_systems(OnEnter(Menu::None), unpause_virtual_time);
    app.add_systems(OnExit(GameState::InGame), close_menus);
}

fn pause_virtual_time(mut time: ResMut<Time<Virtual>>) {
    time.pause();
}

fn unpause_virtual_time(mut time: ResMut<Time<Virtual>>) {
    time.unpause();
}

fn close_menus(mut next_menu: ResMut<NextState<Menu>>) {
    next_menu.set(Menu::None);
}
