//! Keyboard and mouse polling, folded into one [`PlayerInput`] per frame.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::camera::MainCamera;
use crate::gameplay::Player;
use crate::signals::FireRequested;
use crate::{GameSet, gameplay_running};

/// This frame's control state.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    /// Thrust direction, length 0 or 1.
    pub movement: Vec2,
    /// Cursor in world space, if the cursor is over the viewport.
    pub aim: Option<Vec2>,
    /// Fire control held.
    pub shooting: bool,
}

/// WASD / arrow keys as a normalized vector. Opposite keys cancel.
#[must_use]
pub fn movement_axis(keys: &ButtonInput<KeyCode>) -> Vec2 {
    let axis = |positive: [KeyCode; 2], negative: [KeyCode; 2]| {
        let mut value = 0.0;
        if keys.any_pressed(positive) {
            value += 1.0;
        }
        if keys.any_pressed(negative) {
            value -= 1.0;
        }
        value
    };
    Vec2::new(
        axis(
            [KeyCode::KeyD, KeyCode::ArrowRight],
            [KeyCode::KeyA, KeyCode::ArrowLeft],
        ),
        axis(
            [KeyCode::KeyW, KeyCode::ArrowUp],
            [KeyCode::KeyS, KeyCode::ArrowDown],
        ),
    )
    .normalize_or_zero()
}

/// Projects the cursor through the main camera. `None` when there is no
/// window, no camera, or the cursor is outside the letterboxed viewport.
fn cursor_world_position(
    windows: &Query<&Window, With<PrimaryWindow>>,
    cameras: &Query<(&Camera, &GlobalTransform), With<MainCamera>>,
) -> Option<Vec2> {
    let window = windows.single().ok()?;
    let (camera, camera_transform) = cameras.single().ok()?;
    cursor_to_world(camera, camera_transform, window.cursor_position()?)
}

/// Maps a window-space cursor to world space. The camera applies its own
/// viewport offset, so `cursor` goes in untouched.
#[must_use]
pub fn cursor_to_world(
    camera: &Camera,
    camera_transform: &GlobalTransform,
    cursor: Vec2,
) -> Option<Vec2> {
    let viewport = camera.logical_viewport_rect()?;
    if !viewport.contains(cursor) {
        return None;
    }
    camera.viewport_to_world_2d(camera_transform, cursor).ok()
}

/// Runs in `GameSet::Input`.
pub(crate) fn poll_input(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut input: ResMut<PlayerInput>,
) {
    *input = PlayerInput {
        movement: movement_axis(&keys),
        aim: cursor_world_position(&windows, &cameras),
        shooting: mouse.pressed(MouseButton::Left) || keys.pressed(KeyCode::Space),
    };
}

/// While shooting, asks the gun to fire toward the cursor, or straight ahead
/// when the cursor is unknown. Runs in `GameSet::Input`, after `poll_input`.
pub(crate) fn request_fire(
    input: Res<PlayerInput>,
    player: Query<&Transform, With<Player>>,
    mut fire: MessageWriter<FireRequested>,
) {
    if !input.shooting {
        return;
    }
    let Ok(transform) = player.single() else {
        return;
    };
    let facing = (transform.rotation * Vec3::Y).truncate();
    let aim = input
        .aim
        .map(|target| target - transform.translation.truncate())
        .and_then(Vec2::try_normalize)
        .unwrap_or(facing);
    fire.write(FireRequested { aim });
}

pub fn plugin(app: &mut App) {
    app.init_resource::<PlayerInput>();
    app.add_systems(
        Update,
        (poll_input, request_fire)
            .chain()
            .in_set(GameSet::Input)
            .run_if(gameplay_running),
    );
}
