//! Debug bodies: heavy, slow test objects scattered over the board.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use bevy::prelude::*;

use super::entity::{EntityKind, body_bundle, kind_stats};
use super::space::SpaceBoard;
use crate::screens::GameState;
use crate::theme::palette;

// === Constants ===

/// No body is placed closer than this to the player's spawn point.
pub const SAFE_RADIUS: f32 = 400.0;

/// Upper bound of the initial drift speed.
const MAX_DRIFT_SPEED: f32 = 60.0;

/// Rejection-sampling budget per body.
const MAX_PLACEMENT_ATTEMPTS: usize = 32;

// === Resources ===

/// How many debug bodies to scatter and from which seed.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct DebugFieldConfig {
    pub count: usize,
    pub seed: u64,
}

impl Default for DebugFieldConfig {
    fn default() -> Self {
        Self { count: 12, seed: 42 }
    }
}

// === Components ===

/// Marker for debug body entities.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct DebugBody;

/// Spawns one debug body. Single source of truth for the archetype.
pub fn spawn_debug_body(commands: &mut Commands, position: Vec2, velocity: Vec2) -> Entity {
    let radius = kind_stats(EntityKind::DebugBody).radius;
    commands
        .spawn((
            body_bundle(EntityKind::DebugBody, position, velocity),
            DebugBody,
            Sprite::from_color(palette::DEBUG_BODY, Vec2::splat(radius * 2.0)),
        ))
        .id()
}

/// Deterministic `(position, velocity)` pairs for the initial field.
/// Positions stay on the board and outside `SAFE_RADIUS`; a body that finds
/// no valid spot within the attempt budget is dropped.
#[must_use]
pub fn scatter_field(config: &DebugFieldConfig, board: &SpaceBoard) -> Vec<(Vec2, Vec2)> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let half = board.half_extents();
    let mut field = Vec::with_capacity(config.count);
    if half.x <= 0.0 || half.y <= 0.0 {
        return field;
    }

    for _ in 0..config.count {
        let position = (0..MAX_PLACEMENT_ATTEMPTS)
            .map(|_| {
                Vec2::new(
                    rng.random_range(-half.x..half.x),
                    rng.random_range(-half.y..half.y),
                )
            })
            .find(|p| p.length() >= SAFE_RADIUS);
        let Some(position) = position else {
            continue;
        };
        let heading = rng.random_range(0.0..std::f32::consts::TAU);
        let speed = rng.random_range(0.0..MAX_DRIFT_SPEED);
        field.push((position, Vec2::from_angle(heading) * speed));
    }
    field
}

fn spawn_debug_field(
    mut commands: Commands,
    config: Res<DebugFieldConfig>,
    board: Res<SpaceBoard>,
) {
    let field = scatter_field(&config, &board);
    for &(position, velocity) in &field {
        spawn_debug_body(&mut commands, position, velocity);
    }
    info!("scattered {} debug bodies", field.len());
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<DebugBody>()
        .register_type::<DebugFieldConfig>()
        .init_resource::<DebugFieldConfig>();

    app.add_systems(OnEnter(GameState::InGame), spawn_debug_field);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scatter_is_deterministic() {
        let config = DebugFieldConfig { count: 10, seed: 3 };
        let board = SpaceBoard::default();
        assert_eq!(scatter_field(&config, &board), scatter_field(&config, &board));
    }

    #[test]
    fn different_seeds_differ() {
        let board = SpaceBoard::default();
        let a = scatter_field(&DebugFieldConfig { count: 5, seed: 1 }, &board);
        let b = scatter_field(&DebugFieldConfig { count: 5, seed: 2 }, &board);
        assert_ne!(a, b);
    }

    #[test]
    fn bodies_avoid_spawn_and_stay_on_board() {
        let config = DebugFieldConfig { count: 50, seed: 9 };
        let board = SpaceBoard::default();
        let field = scatter_field(&config, &board);
        assert_eq!(field.len(), 50);
        for (position, velocity) in field {
            assert!(board.contains(position));
            assert!(position.length() >= SAFE_RADIUS);
            assert!(velocity.length() <= MAX_DRIFT_SPEED);
        }
    }

    #[test]
    fn board_inside_safe_radius_yields_nothing() {
        let config = DebugFieldConfig { count: 5, seed: 1 };
        let board = SpaceBoard {
            size: Vec2::splat(100.0),
        };
        assert!(scatter_field(&config, &board).is_empty());
    }
}
