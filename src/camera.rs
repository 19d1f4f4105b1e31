//! The single world camera: follows the player and jumps with it across
//! board edges.

use bevy::math::StableInterpolate;
use bevy::prelude::*;

use crate::gameplay::Player;
use crate::gameplay::space::wrap_bodies;
use crate::screens::GameState;
use crate::signals::Wrapped;
use crate::{GameSet, gameplay_running};

/// Exponential decay rate of the follow lag, per second.
const FOLLOW_DECAY_RATE: f32 = 6.0;

/// Marker for the main camera. Persists across all states.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct MainCamera;

fn spawn_main_camera(mut commands: Commands) {
    commands.spawn((Name::new("Main Camera"), MainCamera, Camera2d));
}

fn snap_camera_to_origin(mut camera: Query<&mut Transform, With<MainCamera>>) {
    for mut transform in &mut camera {
        transform.translation.x = 0.0;
        transform.translation.y = 0.0;
    }
}

/// Moves the camera by the same offset as the player when the player wraps,
/// so the view does not sweep across the whole board.
/// Runs in `GameSet::Wrap`, after `wrap_bodies`.
fn shift_camera_on_wrap(
    mut wrapped: MessageReader<Wrapped>,
    players: Query<(), With<Player>>,
    mut camera: Query<&mut Transform, With<MainCamera>>,
) {
    for msg in wrapped.read() {
        if !players.contains(msg.entity) {
            continue;
        }
        for mut transform in &mut camera {
            transform.translation += msg.offset.extend(0.0);
        }
    }
}

/// Eases the camera toward the player. Runs in `GameSet::Ui`.
fn follow_player(
    time: Res<Time>,
    player: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    mut camera: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(player) = player.single() else {
        return;
    };
    let target = player.translation.truncate();
    for mut transform in &mut camera {
        let mut current = transform.translation.truncate();
        current.smooth_nudge(&target, FOLLOW_DECAY_RATE, time.delta_secs());
        transform.translation.x = current.x;
        transform.translation.y = current.y;
    }
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<MainCamera>();
    app.add_systems(Startup, spawn_main_camera);
    app.add_systems(OnEnter(GameState::InGame), snap_camera_to_origin);
    app.add_systems(
        Update,
        (
            shift_camera_on_wrap
                .in_set(GameSet::Wrap)
                .after(wrap_bodies),
            follow_player.in_set(GameSet::Ui),
        )
            .run_if(gameplay_running),
    );
}
