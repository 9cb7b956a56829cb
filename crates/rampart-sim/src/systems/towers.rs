//! Tower system: cooldown bookkeeping, target acquisition, and exhaustive
//! per-variant dispatch.
//!
//! Shared contract: the cooldown decrements by the scaled dt; while it is
//! positive the tower does nothing. A ready tower acquires the nearest
//! living enemy within range and fires, resetting its cooldown to the
//! variant's period. Candidates are scanned in ascending enemy-id order,
//! so a distance tie always resolves to the lower id — a fixed,
//! reproducible tie-break.

use hecs::World;

use rampart_core::components::{
    DashStrike, Enemy, Health, PathFollower, PierceBolt, PoolSpec, SeekingStrike, SpitGlob, Tower,
};
use rampart_core::constants::*;
use rampart_core::enums::{EnemyPhase, TowerKind};
use rampart_core::path::PathSet;
use rampart_core::status::StatusState;
use rampart_core::types::Position;

use crate::world_setup::tower_spec;
use super::movement;

/// A living, targetable enemy captured at the start of the tower pass.
struct Candidate {
    entity: hecs::Entity,
    id: u64,
    position: Position,
    hp: f64,
}

/// What a tower decided to do this tick. Decisions are collected during
/// the tower scan and applied afterwards, so enemy collections are never
/// structurally mutated mid-scan.
enum Action {
    Hit {
        target: hecs::Entity,
        damage: f64,
        stun_secs: f64,
    },
    Burst {
        center: Position,
        radius: f64,
        damage: f64,
        stun_secs: f64,
        knockback: f64,
    },
    Aura {
        center: Position,
        range: f64,
        dps: f64,
        slow_factor: f64,
    },
    Spawn(EffectSpawn),
}

/// An effect entity to create once the tower scan is over.
enum EffectSpawn {
    Seeking {
        from: Position,
        target: hecs::Entity,
        damage: f64,
    },
    Dash {
        from: Position,
        heading: f64,
        damage: f64,
        stun_secs: f64,
        knockback: f64,
        radius: f64,
    },
    Spit {
        from: Position,
        target: hecs::Entity,
        damage: f64,
    },
    Pierce {
        from: Position,
        heading: f64,
        damage: f64,
    },
}

/// Run the tower system for one tick.
pub fn run(world: &mut World, paths: &PathSet, dt: f64) {
    let candidates = collect_candidates(world);
    let mut actions: Vec<Action> = Vec::new();

    for (_entity, (tower, pos)) in world.query_mut::<(&mut Tower, &Position)>() {
        match tower.kind {
            // The aura runs every tick and carries no cooldown state.
            TowerKind::Frost => {
                let spec = tower_spec(TowerKind::Frost);
                actions.push(Action::Aura {
                    center: *pos,
                    range: tower.range,
                    dps: spec.damage,
                    slow_factor: spec.slow_factor,
                });
                continue;
            }
            // Pure economy source; its payout happens at wave start.
            TowerKind::Treasury => continue,
            _ => {}
        }

        tower.cooldown_secs -= dt;
        if tower.cooldown_secs > 0.0 {
            continue;
        }

        let fired = fire(tower, pos, &candidates, &mut actions);
        if fired {
            tower.cooldown_secs = tower.period_secs;
        } else {
            // No target: stay ready, do not accumulate negative cooldown.
            tower.cooldown_secs = 0.0;
        }
    }

    apply_actions(world, paths, dt, actions);
}

/// Decide a ready tower's action. Returns false when no target was found.
fn fire(tower: &Tower, pos: &Position, candidates: &[Candidate], actions: &mut Vec<Action>) -> bool {
    let spec = tower_spec(tower.kind);
    match tower.kind {
        TowerKind::Striker | TowerKind::Maul => {
            let Some(target) = nearest_in_range(candidates, pos, tower.range) else {
                return false;
            };
            actions.push(Action::Hit {
                target: target.entity,
                damage: spec.damage,
                stun_secs: spec.stun_secs,
            });
            true
        }
        TowerKind::Slam => {
            // Fires only when something is in range, but the slam lands on
            // every enemy around the tower, not just the trigger target.
            if nearest_in_range(candidates, pos, tower.range).is_none() {
                return false;
            }
            actions.push(Action::Burst {
                center: *pos,
                radius: spec.radius,
                damage: spec.damage,
                stun_secs: spec.stun_secs,
                knockback: spec.knockback,
            });
            true
        }
        TowerKind::Leaper => {
            let Some(target) = nearest_in_range(candidates, pos, tower.range) else {
                return false;
            };
            actions.push(Action::Spawn(EffectSpawn::Seeking {
                from: *pos,
                target: target.entity,
                damage: spec.damage,
            }));
            true
        }
        TowerKind::Rusher => {
            let Some(target) = nearest_in_range(candidates, pos, tower.range) else {
                return false;
            };
            actions.push(Action::Spawn(EffectSpawn::Dash {
                from: *pos,
                heading: pos.bearing_to(&target.position),
                damage: spec.damage,
                stun_secs: spec.stun_secs,
                knockback: spec.knockback,
                radius: spec.radius,
            }));
            true
        }
        TowerKind::Spitter => {
            let Some(target) = nearest_in_range(candidates, pos, tower.range) else {
                return false;
            };
            actions.push(Action::Spawn(EffectSpawn::Spit {
                from: *pos,
                target: target.entity,
                damage: spec.damage,
            }));
            true
        }
        TowerKind::Spiker => {
            let Some(target) = nearest_in_range(candidates, pos, tower.range) else {
                return false;
            };
            actions.push(Action::Spawn(EffectSpawn::Pierce {
                from: *pos,
                heading: pos.bearing_to(&target.position),
                damage: spec.damage,
            }));
            true
        }
        TowerKind::Artillery => {
            // Global: range is ignored; the shell lands on the healthiest
            // enemy anywhere on the map.
            let Some(target) = highest_hp(candidates) else {
                return false;
            };
            actions.push(Action::Burst {
                center: target.position,
                radius: spec.radius,
                damage: spec.damage,
                stun_secs: 0.0,
                knockback: 0.0,
            });
            true
        }
        // Handled before the cooldown gate.
        TowerKind::Frost | TowerKind::Treasury => false,
    }
}

fn collect_candidates(world: &World) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = world
        .query::<(&Enemy, &PathFollower, &Health, &Position)>()
        .iter()
        .filter(|(_, (_, follower, health, _))| {
            follower.phase == EnemyPhase::Marching && health.hp > 0.0
        })
        .map(|(entity, (enemy, _, health, pos))| Candidate {
            entity,
            id: enemy.id,
            position: *pos,
            hp: health.hp,
        })
        .collect();
    candidates.sort_by_key(|c| c.id);
    candidates
}

/// Nearest candidate within `range` of `from`; distance ties keep the
/// earlier (lower-id) candidate.
fn nearest_in_range<'a>(
    candidates: &'a [Candidate],
    from: &Position,
    range: f64,
) -> Option<&'a Candidate> {
    let mut best: Option<(&Candidate, f64)> = None;
    for c in candidates {
        let dist = from.distance_to(&c.position);
        if dist > range {
            continue;
        }
        if best.map_or(true, |(_, d)| dist < d) {
            best = Some((c, dist));
        }
    }
    best.map(|(c, _)| c)
}

/// Highest-HP candidate; HP ties keep the earlier (lower-id) candidate.
fn highest_hp(candidates: &[Candidate]) -> Option<&Candidate> {
    let mut best: Option<&Candidate> = None;
    for c in candidates {
        if best.map_or(true, |b| c.hp > b.hp) {
            best = Some(c);
        }
    }
    best
}

fn apply_actions(world: &mut World, paths: &PathSet, dt: f64, actions: Vec<Action>) {
    for action in actions {
        match action {
            Action::Hit {
                target,
                damage,
                stun_secs,
            } => {
                if let Ok(mut health) = world.get::<&mut Health>(target) {
                    health.hp -= damage;
                }
                if stun_secs > 0.0 {
                    if let Ok(mut status) = world.get::<&mut StatusState>(target) {
                        status.apply_stun(stun_secs);
                    }
                }
            }
            Action::Burst {
                center,
                radius,
                damage,
                stun_secs,
                knockback,
            } => {
                apply_burst(world, paths, &center, radius, damage, stun_secs, knockback);
            }
            Action::Aura {
                center,
                range,
                dps,
                slow_factor,
            } => {
                for (_entity, (follower, status, health, pos)) in world.query_mut::<(
                    &PathFollower,
                    &mut StatusState,
                    &mut Health,
                    &Position,
                )>() {
                    if follower.phase != EnemyPhase::Marching {
                        continue;
                    }
                    if center.distance_to(pos) <= range {
                        health.hp -= dps * dt;
                        status.apply_slow(slow_factor, AURA_SLOW_REFRESH_SECS);
                    }
                }
            }
            Action::Spawn(spawn) => spawn_effect(world, spawn),
        }
    }
}

/// Damage, stun, and knock back every marching enemy within `radius` of
/// `center`.
pub fn apply_burst(
    world: &mut World,
    paths: &PathSet,
    center: &Position,
    radius: f64,
    damage: f64,
    stun_secs: f64,
    knockback: f64,
) {
    let mut struck: Vec<hecs::Entity> = Vec::new();
    for (entity, (follower, pos)) in world.query_mut::<(&PathFollower, &Position)>() {
        if follower.phase == EnemyPhase::Marching && center.distance_to(pos) <= radius {
            struck.push(entity);
        }
    }
    for entity in struck {
        if let Ok(mut health) = world.get::<&mut Health>(entity) {
            health.hp -= damage;
        }
        if stun_secs > 0.0 {
            if let Ok(mut status) = world.get::<&mut StatusState>(entity) {
                status.apply_stun(stun_secs);
            }
        }
        if knockback > 0.0 {
            if let Ok((follower, pos)) =
                world.query_one_mut::<(&mut PathFollower, &mut Position)>(entity)
            {
                let path = paths.get(follower.path_index);
                movement::knockback(path, follower, pos, knockback);
            }
        }
    }
}

fn spawn_effect(world: &mut World, spawn: EffectSpawn) {
    match spawn {
        EffectSpawn::Seeking { from, target, damage } => {
            let heading = initial_heading(world, &from, target);
            world.spawn((
                SeekingStrike {
                    target,
                    heading,
                    speed: SEEKING_STRIKE_SPEED,
                    turn_rate: SEEKING_STRIKE_TURN_RATE,
                    damage,
                    bleed_dps: STRIKE_BLEED_DPS,
                    bleed_secs: STRIKE_BLEED_SECS,
                    alive: true,
                },
                from,
            ));
        }
        EffectSpawn::Dash {
            from,
            heading,
            damage,
            stun_secs,
            knockback,
            radius,
        } => {
            world.spawn((
                DashStrike {
                    heading,
                    speed: DASH_STRIKE_SPEED,
                    travel_remaining: DASH_TRAVEL_DISTANCE,
                    radius,
                    damage,
                    stun_secs,
                    knockback,
                    hit_ids: Vec::new(),
                    alive: true,
                },
                from,
            ));
        }
        EffectSpawn::Spit { from, target, damage } => {
            let heading = initial_heading(world, &from, target);
            world.spawn((
                SpitGlob {
                    target,
                    heading,
                    speed: SPIT_GLOB_SPEED,
                    turn_rate: SPIT_GLOB_TURN_RATE,
                    damage,
                    pool: PoolSpec {
                        radius: SPIT_POOL_RADIUS,
                        dps: SPIT_POOL_DPS,
                        slow_factor: SPIT_POOL_SLOW_FACTOR,
                        lifetime_secs: SPIT_POOL_LIFETIME_SECS,
                    },
                    alive: true,
                },
                from,
            ));
        }
        EffectSpawn::Pierce { from, heading, damage } => {
            world.spawn((
                PierceBolt {
                    heading,
                    speed: PIERCE_BOLT_SPEED,
                    damage,
                    pierce_remaining: PIERCE_BOLT_COUNT,
                    hit_ids: Vec::new(),
                    alive: true,
                },
                from,
            ));
        }
    }
}

/// Heading from the spawn point toward the target's current position, or
/// zero if the target vanished between decision and spawn.
fn initial_heading(world: &World, from: &Position, target: hecs::Entity) -> f64 {
    world
        .get::<&Position>(target)
        .map(|pos| from.bearing_to(&pos))
        .unwrap_or(0.0)
}
