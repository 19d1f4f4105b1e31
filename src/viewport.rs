//! Fixed 4:3 logical resolution, letterboxed into whatever window we get.

use bevy::camera::{ScalingMode, Viewport};
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::camera::MainCamera;

// === Constants ===

/// Logical width in world units (and logical pixels at scale 1).
pub const LOGICAL_WIDTH: f32 = 1024.0;

/// Logical height; 4:3 with the width.
pub const LOGICAL_HEIGHT: f32 = 768.0;

// === Types ===

/// Where the logical picture lands on the physical display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportFit {
    /// Ratio between rendered and logical resolution.
    pub scale: f32,
    pub size: UVec2,
    pub offset: UVec2,
}

/// Current viewport scale factor.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct ViewportScale(pub f32);

impl Default for ViewportScale {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Largest 4:3 rectangle that fits in `physical`, centred.
#[must_use]
pub fn fit_viewport(physical: UVec2) -> ViewportFit {
    let logical = Vec2::new(LOGICAL_WIDTH, LOGICAL_HEIGHT);
    let available = physical.as_vec2();
    let scale = (available.x / logical.x).min(available.y / logical.y);
    let size = (logical * scale)
        .round()
        .as_uvec2()
        .max(UVec2::ONE)
        .min(physical.max(UVec2::ONE));
    let offset = physical.saturating_sub(size) / 2;
    ViewportFit {
        scale,
        size,
        offset,
    }
}

// === Systems ===

/// Letterboxes the main camera into the window and pins the projection to the
/// logical resolution.
fn fit_camera_to_window(
    window: Query<&Window, With<PrimaryWindow>>,
    mut cameras: Query<(&mut Camera, &mut Projection), With<MainCamera>>,
    mut scale: ResMut<ViewportScale>,
) {
    let Ok(window) = window.single() else {
        return;
    };
    let fit = fit_viewport(window.physical_size());
    scale.0 = fit.scale;

    for (mut camera, mut projection) in &mut cameras {
        camera.viewport = Some(Viewport {
            physical_position: fit.offset,
            physical_size: fit.size,
            ..default()
        });
        if let Projection::Orthographic(ref mut ortho) = *projection {
            ortho.scaling_mode = ScalingMode::Fixed {
                width: LOGICAL_WIDTH,
                height: LOGICAL_HEIGHT,
            };
        }
    }
    debug!(
        "viewport {}x{} at {} (scale {:.3})",
        fit.size.x, fit.size.y, fit.offset, fit.scale
    );
}

pub fn plugin(app: &mut App) {
    app.register_type::<ViewportScale>()
        .init_resource::<ViewportScale>();

    app.add_systems(PostStartup, fit_camera_to_window);
    app.add_systems(
        PreUpdate,
        fit_camera_to_window.run_if(on_message::<WindowResized>),
    );
}
