//! Death resolution: enemies reduced to zero HP this tick pay their bounty
//! and enter the terminal `Dead` phase.

use hecs::World;

use rampart_core::components::{Enemy, Health, PathFollower};
use rampart_core::enums::EnemyPhase;
use rampart_core::events::SimEvent;

pub fn run(world: &mut World, money: &mut u32, events: &mut Vec<SimEvent>) {
    for (_entity, (enemy, health, follower)) in
        world.query_mut::<(&Enemy, &Health, &mut PathFollower)>()
    {
        if follower.phase != EnemyPhase::Marching || health.hp > 0.0 {
            continue;
        }
        follower.phase = EnemyPhase::Dead;
        *money += enemy.bounty;
        events.push(SimEvent::EnemyKilled {
            id: enemy.id,
            bounty: enemy.bounty,
        });
    }
}
