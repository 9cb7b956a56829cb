//! End-of-tick despawn pass.
//!
//! Collects finished entities into the engine's despawn buffer and removes
//! them in one batch, so no earlier system ever observes a dangling entity
//! mid-tick.

use hecs::{Entity, World};

use rampart_core::components::{
    AreaPool, DashStrike, PathFollower, PierceBolt, SeekingStrike, SpitGlob,
};
use rampart_core::enums::EnemyPhase;
use rampart_core::types::Position;

use super::effects;

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, follower) in world.query::<&PathFollower>().iter() {
        if follower.phase != EnemyPhase::Marching {
            despawn_buffer.push(entity);
        }
    }

    for (entity, strike) in world.query::<&SeekingStrike>().iter() {
        if !strike.alive {
            despawn_buffer.push(entity);
        }
    }
    for (entity, dash) in world.query::<&DashStrike>().iter() {
        if !dash.alive {
            despawn_buffer.push(entity);
        }
    }
    for (entity, glob) in world.query::<&SpitGlob>().iter() {
        if !glob.alive {
            despawn_buffer.push(entity);
        }
    }
    for (entity, pool) in world.query::<&AreaPool>().iter() {
        if !pool.alive {
            despawn_buffer.push(entity);
        }
    }
    for (entity, bolt) in world.query::<&PierceBolt>().iter() {
        if !bolt.alive {
            despawn_buffer.push(entity);
        }
    }

    // Safety net: anything that slipped off the playfield is pruned even if
    // its own pass missed it.
    for (entity, pos) in world.query::<&Position>().iter() {
        if !effects::in_bounds(pos) && !despawn_buffer.contains(&entity) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        // Already-despawned entities are a no-op.
        let _ = world.despawn(entity);
    }
}
