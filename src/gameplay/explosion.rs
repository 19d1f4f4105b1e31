//! Explosion effects: an expanding, fading disc per `Exploded` message.

use bevy::prelude::*;

use crate::screens::GameState;
use crate::signals::Exploded;
use crate::theme::palette;
use crate::{GameSet, Z_EFFECT, gameplay_running};

/// How long an explosion stays on screen.
pub const EXPLOSION_DURATION_SECS: f32 = 0.5;

/// A running explosion effect.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Explosion {
    pub timer: Timer,
    pub radius: f32,
}

/// Fraction of the effect played, in `[0, 1]`.
#[must_use]
pub fn explosion_progress(timer: &Timer) -> f32 {
    timer.fraction().clamp(0.0, 1.0)
}

fn spawn_explosions(mut commands: Commands, mut exploded: MessageReader<Exploded>) {
    for msg in exploded.read() {
        commands.spawn((
            Name::new("Explosion"),
            Explosion {
                timer: Timer::from_seconds(EXPLOSION_DURATION_SECS, TimerMode::Once),
                radius: msg.radius,
            },
            // Unit square scaled up by `animate_explosions`.
            Sprite::from_color(palette::EXPLOSION, Vec2::ONE),
            Transform::from_translation(msg.position.extend(Z_EFFECT)).with_scale(Vec3::ZERO),
            DespawnOnExit(GameState::InGame),
        ));
    }
}

fn animate_explosions(
    time: Res<Time>,
    mut commands: Commands,
    mut explosions: Query<(Entity, &mut Explosion, &mut Transform, &mut Sprite)>,
) {
    for (entity, mut explosion, mut transform, mut sprite) in &mut explosions {
        explosion.timer.tick(time.delta());
        if explosion.timer.is_finished() {
            commands.entity(entity).despawn();
            continue;
        }
        let progress = explosion_progress(&explosion.timer);
        let diameter = explosion.radius * 2.0 * progress;
        transform.scale = Vec3::new(diameter, diameter, 1.0);
        sprite.color = palette::EXPLOSION.with_alpha(1.0 - progress);
    }
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Explosion>();
    app.add_systems(
        Update,
        (
            animate_explosions.in_set(GameSet::Movement),
            spawn_explosions.in_set(GameSet::Ui),
        )
            .run_if(gameplay_running),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_entity_count, create_base_test_app, transition_to_ingame};
    use bevy::time::TimeUpdateStrategy;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn progress_runs_from_zero_to_one() {
        let mut timer = Timer::from_seconds(1.0, TimerMode::Once);
        assert_eq!(explosion_progress(&timer), 0.0);
        timer.tick(Duration::from_millis(500));
        assert_eq!(explosion_progress(&timer), 0.5);
        timer.tick(Duration::from_secs(5));
        assert_eq!(explosion_progress(&timer), 1.0);
    }

    fn create_explosion_test_app() -> App {
        let mut app = create_base_test_app();
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(200)));
        app.configure_sets(Update, (GameSet::Movement, GameSet::Ui).chain());
        app.add_plugins(plugin);
        transition_to_ingame(&mut app);
        app
    }

    #[test]
    fn exploded_message_spawns_effect() {
        let mut app = create_explosion_test_app();
        app.world_mut().write_message(Exploded {
            position: Vec2::new(10.0, 20.0),
            radius: 30.0,
        });
        app.update();

        assert_entity_count::<With<Explosion>>(&mut app, 1);
    }

    #[test]
    fn effect_grows_then_despawns() {
        let mut app = create_explosion_test_app();
        app.world_mut().write_message(Exploded {
            position: Vec2::ZERO,
            radius: 30.0,
        });
        app.update();
        app.update();

        let mut query = app.world_mut().query::<&Transform>();
        let scale = query
            .iter(app.world())
            .find(|t| t.scale.x > 0.0)
            .map(|t| t.scale.x);
        assert!(scale.is_some_and(|s| s > 0.0 && s < 60.0));

        for _ in 0..5 {
            app.update();
        }
        assert_entity_count::<With<Explosion>>(&mut app, 0);
    }
}
