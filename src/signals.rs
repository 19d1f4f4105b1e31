//! The signal bus: typed broadcast channels shared by every gameplay system.
//!
//! Each channel is a Bevy [`Message`]. Writers never know who listens, and a
//! reader that finds its subject already despawned skips the message.

use bevy::prelude::*;

use crate::gameplay::EntityKind;

// === Channels ===

/// Two bodies started touching. `a < b` so each contact is reported once.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collided {
    pub a: Entity,
    pub b: Entity,
}

impl Collided {
    /// Builds a collision with the pair in canonical order.
    #[must_use]
    pub fn ordered(first: Entity, second: Entity) -> Self {
        if first <= second {
            Self {
                a: first,
                b: second,
            }
        } else {
            Self {
                a: second,
                b: first,
            }
        }
    }
}

/// A body entered the world.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct Spawned {
    pub entity: Entity,
    pub kind: EntityKind,
    pub position: Vec2,
}

/// A body left the world (depleted or expired).
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct Destroyed {
    pub entity: Entity,
    pub kind: EntityKind,
    pub position: Vec2,
}

/// Request to subtract health from `target`.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct Damaged {
    pub target: Entity,
    pub amount: f32,
    pub source: Option<Entity>,
}

/// Something blew up here; purely visual.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct Exploded {
    pub position: Vec2,
    pub radius: f32,
}

/// `entity` was teleported by `offset` to the opposite edge of the board.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct Wrapped {
    pub entity: Entity,
    pub offset: Vec2,
}

/// The shoot control is held. `aim` is a unit direction.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct FireRequested {
    pub aim: Vec2,
}

// === Diagnostics ===

/// Running totals of traffic per channel, for the debug log and tests.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct SignalCounters {
    pub collided: u64,
    pub spawned: u64,
    pub destroyed: u64,
    pub damaged: u64,
    pub exploded: u64,
    pub wrapped: u64,
    pub fire_requested: u64,
}

fn trace_signals(
    mut counters: ResMut<SignalCounters>,
    mut collided: MessageReader<Collided>,
    mut spawned: MessageReader<Spawned>,
    mut destroyed: MessageReader<Destroyed>,
    mut damaged: MessageReader<Damaged>,
    mut exploded: MessageReader<Exploded>,
    mut wrapped: MessageReader<Wrapped>,
    mut fire_requested: MessageReader<FireRequested>,
) {
    for msg in collided.read() {
        trace!("collided: {} <-> {}", msg.a, msg.b);
        counters.collided += 1;
    }
    for msg in spawned.read() {
        debug!("spawned {:?} {} at {}", msg.kind, msg.entity, msg.position);
        counters.spawned += 1;
    }
    for msg in destroyed.read() {
        debug!("destroyed {:?} {} at {}", msg.kind, msg.entity, msg.position);
        counters.destroyed += 1;
    }
    counters.damaged += damaged.read().count() as u64;
    counters.exploded += exploded.read().count() as u64;
    for msg in wrapped.read() {
        debug!("wrapped {} by {}", msg.entity, msg.offset);
        counters.wrapped += 1;
    }
    counters.fire_requested += fire_requested.read().count() as u64;
}

pub fn plugin(app: &mut App) {
    app.add_message::<Collided>()
        .add_message::<Spawned>()
        .add_message::<Destroyed>()
        .add_message::<Damaged>()
        .add_message::<Exploded>()
        .add_message::<Wrapped>()
        .add_message::<FireRequested>()
        .init_resource::<SignalCounters>();

    app.add_systems(Last, trace_signals);
}
