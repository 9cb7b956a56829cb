//! Effect family system: seeking strikes, dash strikes, spit globs, area
//! pools, and pierce bolts.
//!
//! Each variant is updated in its own pass. Contact results are collected
//! into a hit list and applied after the scans, and deposited pools are
//! spawned last, so no collection is structurally mutated mid-scan.

use hecs::{Entity, World};

use rampart_core::components::{
    AreaPool, DashStrike, Enemy, Health, Mobility, PathFollower, PierceBolt, PoolSpec,
    SeekingStrike, SpitGlob,
};
use rampart_core::constants::{
    FIELD_HEIGHT, FIELD_WIDTH, OOB_MARGIN, POOL_SLOW_REFRESH_SECS, STRIKE_CONTACT_MARGIN,
};
use rampart_core::enums::EnemyPhase;
use rampart_core::path::PathSet;
use rampart_core::status::StatusState;
use rampart_core::types::Position;

use super::movement;
use crate::steering;

/// Snapshot of a living enemy taken at the start of the effect pass.
struct TargetInfo {
    entity: Entity,
    id: u64,
    position: Position,
    radius: f64,
}

/// One resolved contact, applied after all scans.
struct Hit {
    target: Entity,
    damage: f64,
    bleed: Option<(f64, f64)>,
    slow: Option<(f64, f64)>,
    stun_secs: f64,
    knockback: f64,
}

impl Hit {
    fn damage_only(target: Entity, damage: f64) -> Self {
        Self {
            target,
            damage,
            bleed: None,
            slow: None,
            stun_secs: 0.0,
            knockback: 0.0,
        }
    }
}

/// Is a point still on the playfield (plus margin)?
pub fn in_bounds(pos: &Position) -> bool {
    pos.x >= -OOB_MARGIN
        && pos.x <= FIELD_WIDTH + OOB_MARGIN
        && pos.y >= -OOB_MARGIN
        && pos.y <= FIELD_HEIGHT + OOB_MARGIN
}

/// Run all effect passes for one tick.
pub fn run(world: &mut World, paths: &PathSet, dt: f64) {
    let targets = collect_targets(world);
    let mut hits: Vec<Hit> = Vec::new();
    let mut pools: Vec<(Position, PoolSpec)> = Vec::new();

    update_seeking_strikes(world, &targets, dt, &mut hits);
    update_dash_strikes(world, &targets, dt, &mut hits);
    update_spit_globs(world, &targets, dt, &mut hits, &mut pools);
    update_area_pools(world, &targets, dt, &mut hits);
    update_pierce_bolts(world, &targets, dt, &mut hits);

    apply_hits(world, paths, hits);

    for (at, spec) in pools {
        world.spawn((
            AreaPool {
                radius: spec.radius,
                dps: spec.dps,
                slow_factor: spec.slow_factor,
                slow_secs: POOL_SLOW_REFRESH_SECS,
                lifetime_secs: spec.lifetime_secs,
                alive: true,
            },
            at,
        ));
    }
}

/// Living enemies, sorted by id so every pass visits them in a
/// reproducible order.
fn collect_targets(world: &World) -> Vec<TargetInfo> {
    let mut targets: Vec<TargetInfo> = world
        .query::<(&Enemy, &PathFollower, &Health, &Mobility, &Position)>()
        .iter()
        .filter(|(_, (_, follower, health, _, _))| {
            follower.phase == EnemyPhase::Marching && health.hp > 0.0
        })
        .map(|(entity, (enemy, _, _, mobility, pos))| TargetInfo {
            entity,
            id: enemy.id,
            position: *pos,
            radius: mobility.radius,
        })
        .collect();
    targets.sort_by_key(|t| t.id);
    targets
}

fn find_target<'a>(targets: &'a [TargetInfo], entity: Entity) -> Option<&'a TargetInfo> {
    targets.iter().find(|t| t.entity == entity)
}

/// Homing strike: bounded-turn steering toward the target's current
/// position; one damage + bleed hit on contact. A dead target or leaving
/// the playfield terminates the strike with no hit.
fn update_seeking_strikes(
    world: &mut World,
    targets: &[TargetInfo],
    dt: f64,
    hits: &mut Vec<Hit>,
) {
    for (_entity, (strike, pos)) in world.query_mut::<(&mut SeekingStrike, &mut Position)>() {
        if !strike.alive {
            continue;
        }
        let Some(info) = find_target(targets, strike.target) else {
            strike.alive = false;
            continue;
        };

        strike.heading =
            steering::steer_heading(strike.heading, pos, &info.position, strike.turn_rate, dt);
        *pos = steering::advance(pos, strike.heading, strike.speed, dt);

        if pos.distance_to(&info.position) < info.radius + STRIKE_CONTACT_MARGIN {
            hits.push(Hit {
                target: info.entity,
                damage: strike.damage,
                bleed: Some((strike.bleed_dps, strike.bleed_secs)),
                slow: None,
                stun_secs: 0.0,
                knockback: 0.0,
            });
            strike.alive = false;
        } else if !in_bounds(pos) {
            strike.alive = false;
        }
    }
}

/// Straight rush: every not-yet-hit enemy within the dash radius is
/// damaged, stunned, and knocked back once per effect instance.
fn update_dash_strikes(world: &mut World, targets: &[TargetInfo], dt: f64, hits: &mut Vec<Hit>) {
    for (_entity, (dash, pos)) in world.query_mut::<(&mut DashStrike, &mut Position)>() {
        if !dash.alive {
            continue;
        }
        let step = (dash.speed * dt).min(dash.travel_remaining);
        *pos = pos.step_along(dash.heading, step);
        dash.travel_remaining -= step;

        for info in targets {
            if dash.hit_ids.contains(&info.id) {
                continue;
            }
            if pos.distance_to(&info.position) <= dash.radius {
                dash.hit_ids.push(info.id);
                hits.push(Hit {
                    target: info.entity,
                    damage: dash.damage,
                    bleed: None,
                    slow: None,
                    stun_secs: dash.stun_secs,
                    knockback: dash.knockback,
                });
            }
        }

        if dash.travel_remaining <= 0.0 || !in_bounds(pos) {
            dash.alive = false;
        }
    }
}

/// Homing glob: seeking-strike steering and contact, but the payoff is a
/// deposited area pool at the impact point.
fn update_spit_globs(
    world: &mut World,
    targets: &[TargetInfo],
    dt: f64,
    hits: &mut Vec<Hit>,
    pools: &mut Vec<(Position, PoolSpec)>,
) {
    for (_entity, (glob, pos)) in world.query_mut::<(&mut SpitGlob, &mut Position)>() {
        if !glob.alive {
            continue;
        }
        let Some(info) = find_target(targets, glob.target) else {
            glob.alive = false;
            continue;
        };

        glob.heading =
            steering::steer_heading(glob.heading, pos, &info.position, glob.turn_rate, dt);
        *pos = steering::advance(pos, glob.heading, glob.speed, dt);

        if pos.distance_to(&info.position) < info.radius + STRIKE_CONTACT_MARGIN {
            hits.push(Hit::damage_only(info.entity, glob.damage));
            pools.push((*pos, glob.pool));
            glob.alive = false;
        } else if !in_bounds(pos) {
            glob.alive = false;
        }
    }
}

/// Stationary pool: dps and a continuously refreshed slow for everything
/// inside, until its lifetime runs out.
fn update_area_pools(world: &mut World, targets: &[TargetInfo], dt: f64, hits: &mut Vec<Hit>) {
    for (_entity, (pool, pos)) in world.query_mut::<(&mut AreaPool, &Position)>() {
        if !pool.alive {
            continue;
        }
        pool.lifetime_secs -= dt;

        for info in targets {
            if pos.distance_to(&info.position) <= pool.radius {
                hits.push(Hit {
                    target: info.entity,
                    damage: pool.dps * dt,
                    bleed: None,
                    slow: Some((pool.slow_factor, pool.slow_secs)),
                    stun_secs: 0.0,
                    knockback: 0.0,
                });
            }
        }

        if pool.lifetime_secs <= 0.0 {
            pool.alive = false;
        }
    }
}

/// Straight bolt: damages each enemy it touches once, spending one pierce
/// per enemy; expires at zero pierce or out of bounds.
fn update_pierce_bolts(world: &mut World, targets: &[TargetInfo], dt: f64, hits: &mut Vec<Hit>) {
    for (_entity, (bolt, pos)) in world.query_mut::<(&mut PierceBolt, &mut Position)>() {
        if !bolt.alive {
            continue;
        }
        *pos = pos.step_along(bolt.heading, bolt.speed * dt);

        for info in targets {
            if bolt.pierce_remaining == 0 {
                break;
            }
            if bolt.hit_ids.contains(&info.id) {
                continue;
            }
            if pos.distance_to(&info.position) <= info.radius + STRIKE_CONTACT_MARGIN {
                bolt.hit_ids.push(info.id);
                bolt.pierce_remaining -= 1;
                hits.push(Hit::damage_only(info.entity, bolt.damage));
            }
        }

        if bolt.pierce_remaining == 0 || !in_bounds(pos) {
            bolt.alive = false;
        }
    }
}

fn apply_hits(world: &mut World, paths: &PathSet, hits: Vec<Hit>) {
    for hit in hits {
        // The target may already have been despawned or finished by an
        // earlier hit this tick; a missing component just drops the hit.
        if let Ok(mut health) = world.get::<&mut Health>(hit.target) {
            health.hp -= hit.damage;
        } else {
            continue;
        }
        if hit.bleed.is_some() || hit.slow.is_some() || hit.stun_secs > 0.0 {
            if let Ok(mut status) = world.get::<&mut StatusState>(hit.target) {
                if let Some((dps, secs)) = hit.bleed {
                    status.apply_bleed(dps, secs);
                }
                if let Some((factor, secs)) = hit.slow {
                    status.apply_slow(factor, secs);
                }
                if hit.stun_secs > 0.0 {
                    status.apply_stun(hit.stun_secs);
                }
            }
        }
        if hit.knockback > 0.0 {
            if let Ok((follower, pos)) =
                world.query_one_mut::<(&mut PathFollower, &mut Position)>(hit.target)
            {
                let path = paths.get(follower.path_index);
                movement::knockback(path, follower, pos, hit.knockback);
            }
        }
    }
}
