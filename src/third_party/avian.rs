//! Avian2d physics configuration for a top-down, zero-gravity board.

use avian2d::prelude::*;
use bevy::prelude::*;

/// World units per meter, for avian's internal tolerances.
/// Roughly one ship length.
const LENGTH_UNIT: f32 = 32.0;

// === Collision Layers ===

/// Physics collision layers.
///
/// - **Ship**: the player.
/// - **Projectile**: bullets.
/// - **Debris**: debug bodies and anything else that can be shot or rammed.
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum CollisionLayer {
    #[default]
    Ship,
    Projectile,
    Debris,
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(PhysicsPlugins::default().with_length_unit(LENGTH_UNIT));
    app.insert_resource(Gravity::ZERO);
}
