//! Read-only snapshot builder. Runs after every other system so the
//! snapshot reflects the fully settled tick.

use hecs::World;

use rampart_core::components::{
    AreaPool, DashStrike, Enemy, Health, Mobility, PathFollower, PierceBolt, SeekingStrike,
    SpitGlob, Tower,
};
use rampart_core::enums::{EffectKind, EnemyPhase, GamePhase};
use rampart_core::events::SimEvent;
use rampart_core::state::{EffectView, EnemyView, GameStateSnapshot, TowerView, WaveView};
use rampart_core::status::StatusState;
use rampart_core::types::{Position, SimTime};

use super::wave_spawner::WaveState;

#[allow(clippy::too_many_arguments)]
pub fn build(
    world: &World,
    time: SimTime,
    phase: GamePhase,
    speed_multiplier: f64,
    money: u32,
    lives: u32,
    wave: &WaveState,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    let mut enemies: Vec<EnemyView> = world
        .query::<(
            &Enemy,
            &Health,
            &Mobility,
            &PathFollower,
            &StatusState,
            &Position,
        )>()
        .iter()
        .filter(|(_, (_, _, _, follower, _, _))| follower.phase == EnemyPhase::Marching)
        .map(|(_, (enemy, health, mobility, follower, status, pos))| EnemyView {
            id: enemy.id,
            rank: enemy.rank,
            position: *pos,
            hp: health.hp,
            max_hp: health.max_hp,
            radius: mobility.radius,
            path_index: follower.path_index,
            waypoint: follower.waypoint,
            stunned: status.is_stunned(),
            slowed: status.is_slowed(),
            bleeding: status.is_bleeding(),
        })
        .collect();
    enemies.sort_by_key(|e| e.id);

    let mut towers: Vec<TowerView> = world
        .query::<(&Tower, &Position)>()
        .iter()
        .map(|(_, (tower, pos))| TowerView {
            kind: tower.kind,
            position: *pos,
            range: tower.range,
            cooldown_frac: if tower.period_secs > 0.0 {
                (tower.cooldown_secs / tower.period_secs).clamp(0.0, 1.0)
            } else {
                0.0
            },
        })
        .collect();
    towers.sort_by(|a, b| {
        a.position
            .x
            .total_cmp(&b.position.x)
            .then(a.position.y.total_cmp(&b.position.y))
    });

    GameStateSnapshot {
        time,
        phase,
        speed_multiplier,
        money,
        lives,
        wave: WaveView {
            number: wave.number,
            spawning: wave.spawning,
            remaining_to_spawn: wave.remaining_to_spawn,
        },
        enemies,
        towers,
        effects: collect_effects(world),
        events,
    }
}

fn collect_effects(world: &World) -> Vec<EffectView> {
    let mut effects = Vec::new();
    for (_, (strike, pos)) in world.query::<(&SeekingStrike, &Position)>().iter() {
        effects.push(EffectView {
            kind: EffectKind::SeekingStrike,
            position: *pos,
            heading: strike.heading,
            radius: 0.0,
        });
    }
    for (_, (dash, pos)) in world.query::<(&DashStrike, &Position)>().iter() {
        effects.push(EffectView {
            kind: EffectKind::DashStrike,
            position: *pos,
            heading: dash.heading,
            radius: dash.radius,
        });
    }
    for (_, (glob, pos)) in world.query::<(&SpitGlob, &Position)>().iter() {
        effects.push(EffectView {
            kind: EffectKind::SpitGlob,
            position: *pos,
            heading: glob.heading,
            radius: 0.0,
        });
    }
    for (_, (pool, pos)) in world.query::<(&AreaPool, &Position)>().iter() {
        effects.push(EffectView {
            kind: EffectKind::AreaPool,
            position: *pos,
            heading: 0.0,
            radius: pool.radius,
        });
    }
    for (_, (bolt, pos)) in world.query::<(&PierceBolt, &Position)>().iter() {
        effects.push(EffectView {
            kind: EffectKind::PierceBolt,
            position: *pos,
            heading: bolt.heading,
            radius: 0.0,
        });
    }
    effects
}
