//! Decorative star background, tiled across the board edges so wrap-around
//! looks seamless.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use bevy::prelude::*;

use super::space::SpaceBoard;
use crate::screens::GameState;
use crate::Z_STARS;

// === Constants ===

const MIN_STAR_SIZE: f32 = 1.0;
const MAX_STAR_SIZE: f32 = 3.5;
const MIN_BRIGHTNESS: f32 = 0.35;

// === Resources ===

/// Star count, RNG seed, and how far past each edge stars are mirrored.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct StarfieldConfig {
    pub count: usize,
    pub seed: u64,
    pub margin: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 900,
            seed: 7,
            margin: 600.0,
        }
    }
}

// === Types ===

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Vec2,
    pub size: f32,
    pub brightness: f32,
}

/// Marker for star sprites.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct StarSprite;

/// Scatters `count` stars over the board, then adds a copy one board-width
/// (or height) away for every star within `margin` of an edge.
#[must_use]
pub fn generate_stars(config: &StarfieldConfig, board: &SpaceBoard) -> Vec<Star> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let half = board.half_extents();
    if half.x <= 0.0 || half.y <= 0.0 {
        return Vec::new();
    }

    let base: Vec<Star> = (0..config.count)
        .map(|_| Star {
            position: Vec2::new(
                rng.random_range(-half.x..half.x),
                rng.random_range(-half.y..half.y),
            ),
            size: rng.random_range(MIN_STAR_SIZE..MAX_STAR_SIZE),
            brightness: rng.random_range(MIN_BRIGHTNESS..1.0),
        })
        .collect();

    let mirror = |p: f32, half: f32, size: f32| {
        if p > half - config.margin {
            -size
        } else if p < -half + config.margin {
            size
        } else {
            0.0
        }
    };

    let mut stars = base.clone();
    for star in base {
        let dx = mirror(star.position.x, half.x, board.size.x);
        let dy = mirror(star.position.y, half.y, board.size.y);
        let mut copy = |offset: Vec2| {
            stars.push(Star {
                position: star.position + offset,
                ..star
            });
        };
        if dx != 0.0 {
            copy(Vec2::new(dx, 0.0));
        }
        if dy != 0.0 {
            copy(Vec2::new(0.0, dy));
        }
        if dx != 0.0 && dy != 0.0 {
            copy(Vec2::new(dx, dy));
        }
    }
    stars
}

fn spawn_starfield(
    mut commands: Commands,
    config: Res<StarfieldConfig>,
    board: Res<SpaceBoard>,
) {
    let stars = generate_stars(&config, &board);
    for star in &stars {
        commands.spawn((
            StarSprite,
            Sprite::from_color(
                Color::srgb(star.brightness, star.brightness, star.brightness),
                Vec2::splat(star.size),
            ),
            Transform::from_translation(star.position.extend(Z_STARS)),
            DespawnOnExit(GameState::InGame),
        ));
    }
    debug!("starfield: {} sprites", stars.len());
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<StarfieldConfig>()
        .register_type::<StarSprite>()
        .init_resource::<StarfieldConfig>();
    app.add_systems(OnEnter(GameState::InGame), spawn_starfield);
}
