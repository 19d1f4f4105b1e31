//! The space board: a fixed rectangle centred on the origin whose edges wrap.

use bevy::prelude::*;

use crate::screens::GameState;
use crate::signals::Wrapped;
use crate::theme::palette;
use crate::{GameSet, Z_BOARD, gameplay_running};

// === Constants ===

/// Default board width in world units.
pub const BOARD_WIDTH: f32 = 6000.0;

/// Default board height in world units (4:3, like the viewport).
pub const BOARD_HEIGHT: f32 = 4500.0;

/// Thickness of the drawn outline.
const OUTLINE_THICKNESS: f32 = 4.0;

// === Resources ===

/// Size of the playable area.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct SpaceBoard {
    pub size: Vec2,
}

impl Default for SpaceBoard {
    fn default() -> Self {
        Self {
            size: Vec2::new(BOARD_WIDTH, BOARD_HEIGHT),
        }
    }
}

impl SpaceBoard {
    #[must_use]
    pub fn half_extents(&self) -> Vec2 {
        self.size / 2.0
    }

    /// Inclusive of the boundary itself.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        let half = self.half_extents();
        point.x.abs() <= half.x && point.y.abs() <= half.y
    }

    /// Offset that carries `point` back across the board, or `None` if the
    /// point is on the board. Each axis is handled on its own, so a corner
    /// exit wraps both.
    #[must_use]
    pub fn wrap_offset(&self, point: Vec2) -> Option<Vec2> {
        let half = self.half_extents();
        let axis = |p: f32, half: f32, size: f32| {
            if p > half {
                -size
            } else if p < -half {
                size
            } else {
                0.0
            }
        };
        let offset = Vec2::new(
            axis(point.x, half.x, self.size.x),
            axis(point.y, half.y, self.size.y),
        );
        (offset != Vec2::ZERO).then_some(offset)
    }
}

// === Components ===

/// Marker: teleport this entity to the opposite edge when it leaves the board.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Wraps;

/// Marker for the board outline sprites.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct BoardOutline;

// === Systems ===

/// Teleports wrapping entities that left the board and reports the offset.
/// Runs in `GameSet::Wrap`.
pub(crate) fn wrap_bodies(
    board: Res<SpaceBoard>,
    mut bodies: Query<(Entity, &mut Transform), With<Wraps>>,
    mut wrapped: MessageWriter<Wrapped>,
) {
    for (entity, mut transform) in &mut bodies {
        let Some(offset) = board.wrap_offset(transform.translation.truncate()) else {
            continue;
        };
        transform.translation += offset.extend(0.0);
        wrapped.write(Wrapped { entity, offset });
    }
}

fn spawn_board_outline(mut commands: Commands, board: Res<SpaceBoard>) {
    let half = board.half_extents();
    let horizontal = Vec2::new(board.size.x + OUTLINE_THICKNESS, OUTLINE_THICKNESS);
    let vertical = Vec2::new(OUTLINE_THICKNESS, board.size.y + OUTLINE_THICKNESS);
    let edges = [
        (Vec2::new(0.0, half.y), horizontal),
        (Vec2::new(0.0, -half.y), horizontal),
        (Vec2::new(half.x, 0.0), vertical),
        (Vec2::new(-half.x, 0.0), vertical),
    ];
    for (center, size) in edges {
        commands.spawn((
            Name::new("Board Edge"),
            BoardOutline,
            Sprite::from_color(palette::BOARD_OUTLINE, size),
            Transform::from_translation(center.extend(Z_BOARD)),
            DespawnOnExit(GameState::InGame),
        ));
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<SpaceBoard>()
        .register_type::<Wraps>()
        .register_type::<BoardOutline>()
        .init_resource::<SpaceBoard>();

    app.add_systems(OnEnter(GameState::InGame), spawn_board_outline);
    app.add_systems(
        Update,
        wrap_bodies.in_set(GameSet::Wrap).run_if(gameplay_running),
    );
}


#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::signals::SignalCounters;
    use crate::testing::{create_base_test_app, transition_to_ingame};
    use pretty_assertions::assert_eq;

    fn create_wrap_test_app() -> App {
        let mut app = create_base_test_app();
        app.insert_resource(SpaceBoard {
            size: Vec2::new(200.0, 100.0),
        });
        app.add_plugins(plugin);
        transition_to_ingame(&mut app);
        app
    }

    #[test]
    fn body_past_edge_is_teleported() {
        let mut app = create_wrap_test_app();
        let body = app
            .world_mut()
            .spawn((Wraps, Transform::from_xyz(105.0, 10.0, 3.0)))
            .id();
        app.update();

        let transform = app.world().get::<Transform>(body).unwrap();
        assert_eq!(transform.translation, Vec3::new(-95.0, 10.0, 3.0));
        assert_eq!(app.world().resource::<SignalCounters>().wrapped, 1);
    }

    #[test]
    fn non_wrapping_entity_is_left_alone() {
        let mut app = create_wrap_test_app();
        let entity = app.world_mut().spawn(Transform::from_xyz(500.0, 0.0, 0.0)).id();
        app.update();

        let transform = app.world().get::<Transform>(entity).unwrap();
        assert_eq!(transform.translation.x, 500.0);
        assert_eq!(app.world().resource::<SignalCounters>().wrapped, 0);
    }

    #[test]
    fn inserted_board_takes_precedence() {
        let app = create_wrap_test_app();
        assert_eq!(app.world().resource::<SpaceBoard>().size, Vec2::new(200.0, 100.0));
    }

    #[test]
    fn outline_spawned_on_enter_ingame() {
        let mut app = create_wrap_test_app();
        crate::testing::assert_entity_count::<With<BoardOutline>>(&mut app, 4);
    }
}
