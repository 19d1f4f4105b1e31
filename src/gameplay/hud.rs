//! Heads-up display: the ship's hull readout.

use bevy::prelude::*;

use super::entity::Health;
use super::player::Player;
use crate::screens::GameState;
use crate::theme::palette;
use crate::{GameSet, gameplay_running};

/// Marker for the hull text.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct HullDisplay;

/// Hull readout, rounded up so a sliver of health never shows as zero.
#[must_use]
pub fn hull_label(health: &Health) -> String {
    format!("HULL {:>3.0}%", (health.fraction() * 100.0).ceil())
}

fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Name::new("Hull Display"),
        HullDisplay,
        Text::new("HULL 100%"),
        TextFont {
            font_size: palette::FONT_SIZE_HUD,
            ..default()
        },
        TextColor(palette::HUD_TEXT),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            top: Val::Px(12.0),
            ..default()
        },
        DespawnOnExit(GameState::InGame),
    ));
}

fn update_hull_display(
    player: Query<&Health, (With<Player>, Changed<Health>)>,
    mut display: Query<&mut Text, With<HullDisplay>>,
) {
    let Ok(health) = player.single() else {
        return;
    };
    for mut text in &mut display {
        **text = hull_label(health);
    }
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<HullDisplay>();
    app.add_systems(OnEnter(GameState::InGame), spawn_hud);
    app.add_systems(
        Update,
        update_hull_display
            .in_set(GameSet::Ui)
            .run_if(gameplay_running),
    );
}
