//! Bullets: fast, light, short-lived bodies that break on any impact.

use bevy::prelude::*;

use super::entity::{EntityKind, Lifetime, body_bundle, kind_stats};
use crate::theme::palette;

// === Constants ===

/// Muzzle speed added to the shooter's velocity.
pub const BULLET_SPEED: f32 = 700.0;

/// Seconds before an unspent bullet disappears.
pub const BULLET_LIFETIME_SECS: f32 = 1.5;

// === Components ===

/// Marker for bullet entities.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Bullet;

/// Spawns a bullet body. Single source of truth for the bullet archetype.
pub fn spawn_bullet(commands: &mut Commands, position: Vec2, velocity: Vec2) -> Entity {
    let radius = kind_stats(EntityKind::Bullet).radius;
    commands
        .spawn((
            body_bundle(EntityKind::Bullet, position, velocity),
            Bullet,
            Lifetime::from_seconds(BULLET_LIFETIME_SECS),
            Sprite::from_color(palette::BULLET, Vec2::splat(radius * 2.0)),
        ))
        .id()
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Bullet>();
}
