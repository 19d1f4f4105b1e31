//! Shared look: color palette, font sizes, and reusable UI bundles.

pub mod palette;
pub mod widget;

use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    app.insert_resource(ClearColor(palette::SPACE_BACKGROUND));
}
