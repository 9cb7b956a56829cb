//! Enemy update system: status decay, stun gating, waypoint traversal,
//! and path-aware knockback.

use hecs::World;

use rampart_core::components::{Enemy, Health, Mobility, PathFollower};
use rampart_core::constants::{
    DRIFT_SNAP_TOLERANCE, KNOCKBACK_FIRST_SEGMENT_CAP, WAYPOINT_EPSILON,
};
use rampart_core::enums::EnemyPhase;
use rampart_core::events::SimEvent;
use rampart_core::path::{project_onto_segment, Path, PathSet};
use rampart_core::status::StatusState;
use rampart_core::types::Position;

/// Advance every marching enemy by one tick of `dt` scaled seconds.
///
/// Status timers decay first (bleed damage lands even while stunned), then
/// movement runs unless the enemy was stunned at the start of the tick.
/// Reaching the final waypoint deducts one life and transitions the enemy
/// to the terminal `Escaped` phase.
pub fn run(
    world: &mut World,
    paths: &PathSet,
    dt: f64,
    lives: &mut u32,
    events: &mut Vec<SimEvent>,
) {
    for (_entity, (enemy, follower, mobility, status, health, pos)) in world.query_mut::<(
        &Enemy,
        &mut PathFollower,
        &Mobility,
        &mut StatusState,
        &mut Health,
        &mut Position,
    )>() {
        if follower.phase != EnemyPhase::Marching {
            continue;
        }

        // Stun is sampled before decay: an enemy stunned at the start of
        // the tick does not move this tick, but all its timers still run.
        let stunned = status.is_stunned();
        let bleed_damage = status.decay(dt);
        if bleed_damage > 0.0 {
            health.hp -= bleed_damage;
        }
        if stunned {
            continue;
        }

        let path = paths.get(follower.path_index);
        let mut budget = mobility.base_speed * status.slow_factor * dt;

        // Segment-by-segment traversal. Any leftover budget after snapping
        // to a waypoint carries into the next segment, so fast-forward
        // never skips a vertex.
        while budget > 0.0 {
            let target = match path.point(follower.waypoint) {
                Some(p) => p,
                None => break,
            };
            let dist = pos.distance_to(&target);
            if dist <= budget + WAYPOINT_EPSILON {
                *pos = target;
                budget -= dist;
                if follower.waypoint == path.last_index() {
                    follower.phase = EnemyPhase::Escaped;
                    *lives = lives.saturating_sub(1);
                    events.push(SimEvent::EnemyLeaked { id: enemy.id });
                    break;
                }
                follower.waypoint += 1;
            } else {
                let heading = pos.bearing_to(&target);
                *pos = pos.step_along(heading, budget);
                break;
            }
        }

        // Repeated partial steps accumulate floating-point drift; snap
        // back onto the segment once it exceeds the tolerance.
        if follower.phase == EnemyPhase::Marching {
            if let (Some(a), Some(b)) = (
                path.point(follower.waypoint - 1),
                path.point(follower.waypoint),
            ) {
                let projected = project_onto_segment(pos, &a, &b);
                if pos.distance_to(&projected) > DRIFT_SNAP_TOLERANCE {
                    *pos = projected;
                }
            }
        }
    }
}

/// Push an enemy backward along its path by `distance`.
///
/// On the first segment the push is capped at 90% of the distance already
/// covered, so an enemy can never be knocked off the start of the course.
/// A push that reaches or crosses the previous waypoint decrements the
/// waypoint index and clamps onto the newly-active segment; it never
/// overshoots past that segment's start.
pub fn knockback(path: &Path, follower: &mut PathFollower, pos: &mut Position, distance: f64) {
    if follower.phase != EnemyPhase::Marching || distance <= 0.0 || follower.waypoint == 0 {
        return;
    }
    let prev = match path.point(follower.waypoint - 1) {
        Some(p) => p,
        None => return,
    };
    let covered = pos.distance_to(&prev);

    if follower.waypoint == 1 {
        // First segment: cap, never cross the course start.
        let push = distance.min(covered * KNOCKBACK_FIRST_SEGMENT_CAP);
        if push > 0.0 {
            let heading = pos.bearing_to(&prev);
            *pos = pos.step_along(heading, push);
        }
        return;
    }

    if distance < covered {
        let heading = pos.bearing_to(&prev);
        *pos = pos.step_along(heading, distance);
        return;
    }

    // The push reaches or crosses the previous waypoint: the enemy drops
    // back onto the previous segment, with the leftover clamped to that
    // segment's length.
    follower.waypoint -= 1;
    let seg_end = prev;
    let seg_start = match path.point(follower.waypoint - 1) {
        Some(p) => p,
        None => {
            *pos = seg_end;
            return;
        }
    };
    let seg_len = seg_end.distance_to(&seg_start);
    let leftover = (distance - covered).min(seg_len);
    if leftover > 0.0 && seg_len > 0.0 {
        let heading = seg_end.bearing_to(&seg_start);
        *pos = seg_end.step_along(heading, leftover);
    } else {
        *pos = seg_end;
    }
}
