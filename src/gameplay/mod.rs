//! Gameplay domain plugins: bodies and their lifecycle, the wrap-around board,
//! impact physics, the player and its bullets, debug bodies, and cosmetics.

pub mod bullet;
pub mod debug_body;
pub mod entity;
pub mod explosion;
mod hud;
pub mod physics;
pub mod player;
pub mod space;
pub mod starfield;

use bevy::prelude::*;

pub use entity::{EntityKind, Health, KindStats, Lifetime, Weight, body_bundle, kind_stats};
pub use player::Player;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        entity::plugin,
        space::plugin,
        physics::plugin,
        player::plugin,
        bullet::plugin,
        debug_body::plugin,
        explosion::plugin,
        starfield::plugin,
        hud::plugin,
    ));
}
