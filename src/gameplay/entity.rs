//! Shared body archetype and lifecycle: spawn, take damage, destroy.
//!
//! Players, bullets, and debug bodies are all plain entities built from
//! [`body_bundle`]. What differs between them is the [`EntityKind`] and the
//! stats it maps to, plus whatever marker the owning module adds.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::space::Wraps;
use crate::screens::GameState;
use crate::signals::{Damaged, Destroyed, Exploded, Spawned};
use crate::third_party::CollisionLayer;
use crate::{GameSet, Z_BODY, gameplay_running};

// === Components ===

/// What kind of body an entity is.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
#[reflect(Component)]
pub enum EntityKind {
    Player,
    Bullet,
    DebugBody,
}

impl EntityKind {
    /// All kinds, for iteration.
    pub const ALL: &[Self] = &[Self::Player, Self::Bullet, Self::DebugBody];

    /// Human-readable name, also used as the entity `Name`.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Bullet => "Bullet",
            Self::DebugBody => "Debug Body",
        }
    }

    /// Layer membership and filters. Bullets never hit the ship that fired
    /// them or each other.
    #[must_use]
    pub fn collision_layers(self) -> CollisionLayers {
        match self {
            Self::Player => CollisionLayers::new(CollisionLayer::Ship, CollisionLayer::Debris),
            Self::Bullet => {
                CollisionLayers::new(CollisionLayer::Projectile, CollisionLayer::Debris)
            }
            Self::DebugBody => CollisionLayers::new(
                CollisionLayer::Debris,
                [
                    CollisionLayer::Ship,
                    CollisionLayer::Projectile,
                    CollisionLayer::Debris,
                ],
            ),
        }
    }
}

/// Per-kind constants.
#[derive(Debug, Clone, Copy)]
pub struct KindStats {
    pub max_health: f32,
    pub weight: f32,
    pub radius: f32,
    /// Whether destruction leaves an explosion.
    pub explodes: bool,
}

/// Look up stats for a body kind.
#[must_use]
pub const fn kind_stats(kind: EntityKind) -> KindStats {
    match kind {
        EntityKind::Player => KindStats {
            max_health: 100.0,
            weight: 10.0,
            radius: 16.0,
            explodes: true,
        },
        EntityKind::Bullet => KindStats {
            max_health: 1.0,
            weight: 2.0,
            radius: 3.0,
            explodes: false,
        },
        EntityKind::DebugBody => KindStats {
            max_health: 30.0,
            weight: 40.0,
            radius: 36.0,
            explodes: true,
        },
    }
}

/// Hit points. A body at zero is destroyed during `GameSet::Death`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    #[must_use]
    pub const fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    /// Subtracts `amount`, flooring at zero. Returns `true` once depleted.
    /// Non-positive and non-finite amounts are ignored.
    pub fn apply_damage(&mut self, amount: f32) -> bool {
        if amount.is_finite() && amount > 0.0 {
            self.current = (self.current - amount).max(0.0);
        }
        self.is_depleted()
    }

    #[must_use]
    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    /// Remaining health in `[0, 1]`.
    #[must_use]
    pub fn fraction(&self) -> f32 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (self.current / self.max).clamp(0.0, 1.0)
    }
}

/// Mass used by the impact damage split. Mirrors avian's `Mass`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Weight(pub f32);

/// Despawns the body quietly when the timer runs out.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Lifetime(pub Timer);

impl Lifetime {
    #[must_use]
    pub fn from_seconds(secs: f32) -> Self {
        Self(Timer::from_seconds(secs, TimerMode::Once))
    }
}

// === Archetype ===

/// Every component a body needs. Kind-specific markers are added by the caller.
pub fn body_bundle(kind: EntityKind, position: Vec2, velocity: Vec2) -> impl Bundle {
    let stats = kind_stats(kind);
    (
        (
            Name::new(kind.display_name()),
            kind,
            Health::new(stats.max_health),
            Weight(stats.weight),
            Wraps,
            Transform::from_translation(position.extend(Z_BODY)),
            DespawnOnExit(GameState::InGame),
        ),
        (
            RigidBody::Dynamic,
            Collider::circle(stats.radius),
            Mass(stats.weight),
            Restitution::new(1.0),
            Friction::ZERO,
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity(velocity),
            kind.collision_layers(),
            CollisionEventsEnabled,
            CollidingEntities::default(),
        ),
    )
}

// === Systems ===

/// Announces every new body on the bus.
fn announce_spawn(
    add: On<Add, EntityKind>,
    bodies: Query<(&EntityKind, &Transform)>,
    mut spawned: MessageWriter<Spawned>,
) {
    let Ok((kind, transform)) = bodies.get(add.entity) else {
        return;
    };
    spawned.write(Spawned {
        entity: add.entity,
        kind: *kind,
        position: transform.translation.truncate(),
    });
}

/// Applies `Damaged` requests. Targets that are already gone are skipped.
/// Runs in `GameSet::Damage`.
pub(crate) fn apply_damage_messages(
    mut damaged: MessageReader<Damaged>,
    mut bodies: Query<&mut Health>,
) {
    for msg in damaged.read() {
        let Ok(mut health) = bodies.get_mut(msg.target) else {
            continue;
        };
        health.apply_damage(msg.amount);
    }
}

/// Despawns a body and reports it on the bus.
fn destroy(
    commands: &mut Commands,
    entity: Entity,
    kind: EntityKind,
    position: Vec2,
    destroyed: &mut MessageWriter<Destroyed>,
) {
    destroyed.write(Destroyed {
        entity,
        kind,
        position,
    });
    commands.entity(entity).despawn();
}

/// Ends bodies whose `Lifetime` ran out, without an explosion.
/// Runs in `GameSet::Death`, before `destroy_depleted`.
pub(crate) fn expire_lifetimes(
    time: Res<Time>,
    mut commands: Commands,
    mut bodies: Query<(Entity, &EntityKind, &Transform, &mut Lifetime)>,
    mut destroyed: MessageWriter<Destroyed>,
) {
    for (entity, kind, transform, mut lifetime) in &mut bodies {
        lifetime.0.tick(time.delta());
        if lifetime.0.just_finished() {
            destroy(
                &mut commands,
                entity,
                *kind,
                transform.translation.truncate(),
                &mut destroyed,
            );
        }
    }
}

/// Destroys every body at zero health; explosive kinds leave an explosion.
/// Runs in `GameSet::Death`.
pub(crate) fn destroy_depleted(
    mut commands: Commands,
    bodies: Query<(Entity, &EntityKind, &Health, &Transform)>,
    mut destroyed: MessageWriter<Destroyed>,
    mut exploded: MessageWriter<Exploded>,
) {
    for (entity, kind, health, transform) in &bodies {
        if !health.is_depleted() {
            continue;
        }
        let position = transform.translation.truncate();
        let stats = kind_stats(*kind);
        if stats.explodes {
            exploded.write(Exploded {
                position,
                radius: stats.radius * 2.0,
            });
        }
        destroy(&mut commands, entity, *kind, position, &mut destroyed);
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<EntityKind>()
        .register_type::<Health>()
        .register_type::<Weight>()
        .register_type::<Lifetime>();

    app.add_observer(announce_spawn);

    app.add_systems(
        Update,
        (
            apply_damage_messages.in_set(GameSet::Damage),
            (expire_lifetimes, destroy_depleted)
                .chain()
                .in_set(GameSet::Death),
        )
            .run_if(gameplay_running),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn health_new_starts_full() {
        let health = Health::new(50.0);
        assert_eq!(health.current, 50.0);
        assert_eq!(health.fraction(), 1.0);
    }

    #[test]
    fn apply_damage_floors_at_zero() {
        let mut health = Health::new(10.0);
        assert!(!health.apply_damage(4.0));
        assert_eq!(health.current, 6.0);
        assert!(health.apply_damage(100.0));
        assert_eq!(health.current, 0.0);
    }

    #[test]
    fn apply_damage_ignores_negative_and_nan() {
        let mut health = Health::new(10.0);
        health.apply_damage(-5.0);
        health.apply_damage(f32::NAN);
        health.apply_damage(f32::INFINITY);
        assert_eq!(health.current, 10.0);
    }

    #[test]
    fn fraction_handles_zero_max() {
        let health = Health {
            current: 0.0,
            max: 0.0,
        };
        assert_eq!(health.fraction(), 0.0);
    }

    #[test]
    fn every_kind_has_positive_stats() {
        for &kind in EntityKind::ALL {
            let stats = kind_stats(kind);
            assert!(stats.max_health > 0.0, "{kind:?}");
            assert!(stats.weight > 0.0, "{kind:?}");
            assert!(stats.radius > 0.0, "{kind:?}");
        }
    }

    #[test]
    fn bullets_do_not_explode() {
        assert!(!kind_stats(EntityKind::Bullet).explodes);
        assert!(kind_stats(EntityKind::DebugBody).explodes);
    }

    #[test]
    fn bullets_ignore_the_player() {
        let player = EntityKind::Player.collision_layers();
        let bullet = EntityKind::Bullet.collision_layers();
        let debris = EntityKind::DebugBody.collision_layers();
        assert!(!player.interacts_with(bullet));
        assert!(!bullet.interacts_with(bullet));
        assert!(bullet.interacts_with(debris));
        assert!(player.interacts_with(debris));
        assert!(debris.interacts_with(debris));
    }
}
