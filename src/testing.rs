//! Testing utilities for Bevy systems.

#![cfg(test)]

use avian2d::prelude::LinearVelocity;
use bevy::ecs::query::QueryFilter;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::gameplay::{EntityKind, Health, Weight, kind_stats};
use crate::menus::Menu;
use crate::screens::GameState;

/// Minimal headless app with states, input resources, and the signal bus.
///
/// No `InputPlugin`: it clears `just_pressed` every frame, so injected presses
/// would never reach the systems under test.
pub fn create_base_test_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_resource::<ButtonInput<KeyCode>>();
    app.init_resource::<ButtonInput<MouseButton>>();
    app.init_state::<GameState>();
    app.init_state::<Menu>();
    app.add_plugins(crate::signals::plugin);
    app
}

/// Moves the app into `GameState::InGame` and runs the transition.
pub fn transition_to_ingame(app: &mut App) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::InGame);
    app.update();
}

/// Asserts that exactly `expected` entities match the filter `F`.
pub fn assert_entity_count<F: QueryFilter>(app: &mut App, expected: usize) {
    let mut query = app.world_mut().query_filtered::<Entity, F>();
    let actual = query.iter(app.world()).count();
    assert_eq!(
        actual, expected,
        "expected {expected} matching entities, found {actual}"
    );
}

/// Spawns a bare body (no physics engine components) at `position`.
pub fn spawn_test_body(
    world: &mut World,
    kind: EntityKind,
    position: Vec2,
    velocity: Vec2,
) -> Entity {
    let stats = kind_stats(kind);
    let transform = Transform::from_translation(position.extend(0.0));
    world
        .spawn((
            kind,
            Health::new(stats.max_health),
            Weight(stats.weight),
            LinearVelocity(velocity),
            transform,
            GlobalTransform::from(transform),
        ))
        .id()
}
