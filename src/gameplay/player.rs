//! The player ship: thrust, aim, gun, and end of session on death.

use std::f32::consts::FRAC_PI_2;
use std::time::Duration;

use avian2d::prelude::*;
use bevy::prelude::*;

use super::bullet::{BULLET_SPEED, spawn_bullet};
use super::entity::{EntityKind, body_bundle, kind_stats};
use super::explosion::EXPLOSION_DURATION_SECS;
use crate::input::PlayerInput;
use crate::screens::GameState;
use crate::signals::{Destroyed, FireRequested};
use crate::theme::palette;
use crate::{GameSet, gameplay_running};

// === Constants ===

/// Acceleration from thrust, units per second squared.
pub const THRUST: f32 = 600.0;

/// Speed cap while thrusting.
pub const MAX_SPEED: f32 = 400.0;

/// Drag applied by avian so the ship coasts to a stop.
const LINEAR_DAMPING: f32 = 0.8;

/// Seconds between shots.
pub const FIRE_COOLDOWN_SECS: f32 = 0.15;

/// Distance from ship centre to where bullets appear.
const MUZZLE_OFFSET: f32 =
    kind_stats(EntityKind::Player).radius + kind_stats(EntityKind::Bullet).radius + 4.0;

// === Components ===

/// Marker for the player ship.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Player;

/// Rate limiter for the ship's gun.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Gun {
    pub cooldown: Timer,
}

impl Gun {
    /// A gun that can fire immediately.
    #[must_use]
    pub fn ready() -> Self {
        let mut cooldown = Timer::from_seconds(FIRE_COOLDOWN_SECS, TimerMode::Once);
        cooldown.tick(Duration::from_secs_f32(FIRE_COOLDOWN_SECS));
        Self { cooldown }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.cooldown.is_finished()
    }
}

// === Systems ===

fn spawn_player(mut commands: Commands) {
    let stats = kind_stats(EntityKind::Player);
    commands.spawn((
        body_bundle(EntityKind::Player, Vec2::ZERO, Vec2::ZERO),
        Player,
        Gun::ready(),
        LinearDamping(LINEAR_DAMPING),
        Sprite::from_color(
            palette::PLAYER_SHIP,
            Vec2::new(stats.radius * 1.4, stats.radius * 2.0),
        ),
    ));
    info!("player launched");
}

/// Applies thrust and turns the ship toward the cursor.
/// Runs in `GameSet::Movement`.
pub(crate) fn steer_player(
    time: Res<Time>,
    input: Res<PlayerInput>,
    mut player: Query<(&mut LinearVelocity, &mut Transform), With<Player>>,
) {
    let Ok((mut velocity, mut transform)) = player.single_mut() else {
        return;
    };

    if input.movement != Vec2::ZERO {
        let boosted = velocity.0 + input.movement * THRUST * time.delta_secs();
        velocity.0 = boosted.clamp_length_max(MAX_SPEED);
    }

    if let Some(aim) = input.aim {
        let facing = aim - transform.translation.truncate();
        if facing.length_squared() > f32::EPSILON {
            // Sprite points along +Y at zero rotation.
            transform.rotation = Quat::from_rotation_z(facing.to_angle() - FRAC_PI_2);
        }
    }
}

/// Spawns a bullet per fire request while the gun is off cooldown.
/// Runs in `GameSet::Movement`.
pub(crate) fn fire_gun(
    time: Res<Time>,
    mut commands: Commands,
    mut requests: MessageReader<FireRequested>,
    mut player: Query<(&Transform, &LinearVelocity, &mut Gun), With<Player>>,
) {
    let Ok((transform, velocity, mut gun)) = player.single_mut() else {
        requests.clear();
        return;
    };
    gun.cooldown.tick(time.delta());

    for request in requests.read() {
        if !gun.is_ready() {
            continue;
        }
        let aim = request.aim.normalize_or(Vec2::Y);
        let muzzle = transform.translation.truncate() + aim * MUZZLE_OFFSET;
        spawn_bullet(&mut commands, muzzle, velocity.0 + aim * BULLET_SPEED);
        gun.cooldown.reset();
    }
}

/// Countdown from the ship's destruction to the game-over screen, so its
/// explosion plays out first.
#[derive(Resource, Debug, Clone)]
pub struct SessionEnding(pub Timer);

/// Starts the countdown when the ship is destroyed. Runs in `GameSet::Ui`.
fn begin_session_end(
    mut commands: Commands,
    mut destroyed: MessageReader<Destroyed>,
    ending: Option<Res<SessionEnding>>,
) {
    let player_died = destroyed
        .read()
        .filter(|msg| msg.kind == EntityKind::Player)
        .count()
        > 0;
    if player_died && ending.is_none() {
        info!("player destroyed, session over");
        commands.insert_resource(SessionEnding(Timer::from_seconds(
            EXPLOSION_DURATION_SECS,
            TimerMode::Once,
        )));
    }
}

/// Switches to `GameOver` once the countdown runs out.
fn finish_session_end(
    time: Res<Time>,
    mut commands: Commands,
    ending: Option<ResMut<SessionEnding>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(mut ending) = ending else {
        return;
    };
    ending.0.tick(time.delta());
    if ending.0.is_finished() {
        commands.remove_resource::<SessionEnding>();
        next_state.set(GameState::GameOver);
    }
}

fn clear_session_end(mut commands: Commands) {
    commands.remove_resource::<SessionEnding>();
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Player>().register_type::<Gun>();

    app.add_systems(OnEnter(GameState::InGame), spawn_player);
    app.add_systems(OnExit(GameState::InGame), clear_session_end);
    app.add_systems(
        Update,
        (
            (steer_player, fire_gun).in_set(GameSet::Movement),
            (begin_session_end, finish_session_end)
                .chain()
                .in_set(GameSet::Ui),
        )
            .run_if(gameplay_running),
    );
}


#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::gameplay::bullet::Bullet;
    use crate::testing::{assert_entity_count, create_base_test_app, transition_to_ingame};
    use bevy::time::TimeUpdateStrategy;
    use pretty_assertions::assert_eq;

    const FRAME: Duration = Duration::from_millis(100);

    fn create_player_test_app() -> App {
        let mut app = create_base_test_app();
        app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
        app.init_resource::<PlayerInput>();
        app.add_systems(Update, (steer_player, fire_gun));
        app.add_systems(Update, (begin_session_end, finish_session_end).chain());
        // First frame has zero delta.
        app.update();
        app
    }

    fn spawn_bare_player(app: &mut App, gun: Gun) -> Entity {
        app.world_mut()
            .spawn((
                Player,
                gun,
                LinearVelocity::ZERO,
                Transform::default(),
            ))
            .id()
    }

    #[test]
    fn thrust_accelerates_along_input() {
        let mut app = create_player_test_app();
        let player = spawn_bare_player(&mut app, Gun::ready());
        app.world_mut().resource_mut::<PlayerInput>().movement = Vec2::X;
        app.update();

        let velocity = app.world().get::<LinearVelocity>(player).unwrap();
        let expected = THRUST * FRAME.as_secs_f32();
        assert!((velocity.x - expected).abs() < 1e-3, "got {}", velocity.x);
        assert_eq!(velocity.y, 0.0);
    }

    #[test]
    fn thrust_is_capped() {
        let mut app = create_player_test_app();
        let player = spawn_bare_player(&mut app, Gun::ready());
        app.world_mut()
            .entity_mut(player)
            .insert(LinearVelocity(Vec2::new(MAX_SPEED, 0.0)));
        app.world_mut().resource_mut::<PlayerInput>().movement = Vec2::X;
        app.update();

        let velocity = app.world().get::<LinearVelocity>(player).unwrap();
        assert!(velocity.length() <= MAX_SPEED + 1e-3);
    }

    #[test]
    fn ship_turns_toward_aim() {
        let mut app = create_player_test_app();
        let player = spawn_bare_player(&mut app, Gun::ready());
        app.world_mut().resource_mut::<PlayerInput>().aim = Some(Vec2::new(100.0, 0.0));
        app.update();

        let transform = app.world().get::<Transform>(player).unwrap();
        let nose = (transform.rotation * Vec3::Y).truncate();
        assert!((nose - Vec2::X).length() < 1e-4, "nose {nose}");
    }

    #[test]
    fn fire_request_spawns_one_bullet() {
        let mut app = create_player_test_app();
        let player = spawn_bare_player(&mut app, Gun::ready());
        app.world_mut().write_message(FireRequested { aim: Vec2::X });
        app.world_mut().write_message(FireRequested { aim: Vec2::X });
        app.update();

        assert_entity_count::<With<Bullet>>(&mut app, 1);
        assert!(!app.world().get::<Gun>(player).unwrap().is_ready());
    }

    #[test]
    fn gun_on_cooldown_does_not_fire() {
        let mut app = create_player_test_app();
        let mut gun = Gun::ready();
        gun.cooldown = Timer::from_seconds(10.0, TimerMode::Once);
        spawn_bare_player(&mut app, gun);
        app.world_mut().write_message(FireRequested { aim: Vec2::X });
        app.update();

        assert_entity_count::<With<Bullet>>(&mut app, 0);
    }

    #[test]
    fn player_death_ends_session_after_explosion() {
        let mut app = create_player_test_app();
        transition_to_ingame(&mut app);
        let entity = app.world_mut().spawn_empty().id();
        app.world_mut().write_message(Destroyed {
            entity,
            kind: EntityKind::Player,
            position: Vec2::ZERO,
        });
        app.update();
        app.update();
        app.update();

        // Still in game while the explosion plays.
        assert_eq!(
            *app.world().resource::<State<GameState>>().get(),
            GameState::InGame
        );
        assert!(app.world().contains_resource::<SessionEnding>());

        for _ in 0..6 {
            app.update();
        }

        let state = app.world().resource::<State<GameState>>();
        assert_eq!(*state.get(), GameState::GameOver);
        assert!(!app.world().contains_resource::<SessionEnding>());
    }

    #[test]
    fn other_deaths_do_not_end_session() {
        let mut app = create_player_test_app();
        transition_to_ingame(&mut app);
        let entity = app.world_mut().spawn_empty().id();
        app.world_mut().write_message(Destroyed {
            entity,
            kind: EntityKind::DebugBody,
            position: Vec2::ZERO,
        });
        app.update();

        assert!(!app.world().contains_resource::<SessionEnding>());
    }
}
