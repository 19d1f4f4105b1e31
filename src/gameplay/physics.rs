//! Impact damage: turns new contacts into weight-proportional damage.
//!
//! avian2d moves bodies and resolves the elastic bounce. This module only
//! watches which pairs start touching and routes the resulting damage back
//! through the bus.

use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use super::entity::{EntityKind, Weight};
use crate::screens::GameState;
use crate::signals::{Collided, Damaged};
use crate::{GameSet, gameplay_running};

// === Constants ===

/// Default damage per unit of `relative speed × total weight`.
pub const DEFAULT_DAMAGE_FACTOR: f32 = 0.005;

// === Resources ===

/// Tunables for impact damage.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct PhysicsTuning {
    pub damage_factor: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            damage_factor: DEFAULT_DAMAGE_FACTOR,
        }
    }
}

/// Pairs touching as of the last detection pass, stored with `a < b`.
#[derive(Resource, Debug, Default)]
pub struct ActiveContacts(pub HashSet<(Entity, Entity)>);

// === Impact ===

/// Outcome of one collision.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Impact {
    pub impulse: f32,
    pub damage_a: f32,
    pub damage_b: f32,
}

/// `impulse = |va - vb| * (wa + wb) * k`, split so each side takes the share
/// of the opposing weight. Invalid weights count as zero.
#[must_use]
pub fn impact(va: Vec2, wa: f32, vb: Vec2, wb: f32, k: f32) -> Impact {
    let sanitize = |w: f32| if w.is_finite() && w > 0.0 { w } else { 0.0 };
    let (wa, wb) = (sanitize(wa), sanitize(wb));
    let total = wa + wb;
    if total <= 0.0 {
        return Impact::default();
    }
    let impulse = (va - vb).length() * total * k;
    Impact {
        impulse,
        damage_a: impulse * wb / total,
        damage_b: impulse * wa / total,
    }
}

// === Systems ===

/// Emits `Collided` for every pair that started touching since the last pass.
/// Runs in `GameSet::Physics`.
pub(crate) fn detect_collisions(
    mut active: ResMut<ActiveContacts>,
    bodies: Query<(Entity, &CollidingEntities), With<EntityKind>>,
    mut collided: MessageWriter<Collided>,
) {
    let mut current = HashSet::default();
    for (entity, colliding) in &bodies {
        for &other in &colliding.0 {
            let pair = Collided::ordered(entity, other);
            current.insert((pair.a, pair.b));
        }
    }

    let mut fresh: Vec<_> = current.difference(&active.0).copied().collect();
    // Stable order keeps damage application deterministic.
    fresh.sort_unstable();
    for (a, b) in fresh {
        collided.write(Collided { a, b });
    }
    active.0 = current;
}

/// Computes impact damage for each new collision and sends it back on the bus.
/// Runs in `GameSet::Physics`, after `detect_collisions`.
pub(crate) fn resolve_collisions(
    tuning: Res<PhysicsTuning>,
    mut collided: MessageReader<Collided>,
    bodies: Query<(&LinearVelocity, &Weight)>,
    mut damaged: MessageWriter<Damaged>,
) {
    for msg in collided.read() {
        let Ok([(va, wa), (vb, wb)]) = bodies.get_many([msg.a, msg.b]) else {
            continue;
        };
        let hit = impact(va.0, wa.0, vb.0, wb.0, tuning.damage_factor);
        damaged.write(Damaged {
            target: msg.a,
            amount: hit.damage_a,
            source: Some(msg.b),
        });
        damaged.write(Damaged {
            target: msg.b,
            amount: hit.damage_b,
            source: Some(msg.a),
        });
    }
}

fn reset_contacts(mut active: ResMut<ActiveContacts>) {
    active.0.clear();
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<PhysicsTuning>()
        .init_resource::<PhysicsTuning>()
        .init_resource::<ActiveContacts>();

    app.add_systems(OnEnter(GameState::InGame), reset_contacts);

    app.add_systems(
        Update,
        (detect_collisions, resolve_collisions)
            .chain()
            .in_set(GameSet::Physics)
            .run_if(gameplay_running),
    );
}
