//! Wave progression: per-wave scaling, spawn cadence, rank rolls, and the
//! periodic miniboss.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use rampart_core::commands::{DifficultyModifiers, MapModifiers};
use rampart_core::components::Tower;
use rampart_core::constants::{
    CHAMPION_CHANCE_BASE, CHAMPION_CHANCE_CAP, CHAMPION_CHANCE_PER_WAVE, ELITE_CHANCE_BASE,
    ELITE_CHANCE_CAP, ELITE_CHANCE_PER_WAVE, MINIBOSS_WAVE_INTERVAL, SPAWN_INTERVAL_SECS,
    TREASURY_PAYOUT, WAVE_COMPLETION_BONUS, WAVE_COUNT_BASE, WAVE_COUNT_PER_WAVE, WAVE_HP_BASE,
    WAVE_HP_LATE_ACCEL, WAVE_HP_PER_WAVE, WAVE_SPEED_BASE, WAVE_SPEED_PER_WAVE,
};
use rampart_core::enums::{EnemyRank, TowerKind};
use rampart_core::events::SimEvent;
use rampart_core::path::PathSet;

use crate::world_setup;

/// Mutable wave progress owned by the engine.
#[derive(Debug, Clone, Default)]
pub struct WaveState {
    /// Current wave number; 0 before the first wave starts.
    pub number: u32,
    /// True while this wave still has spawns pending.
    pub spawning: bool,
    pub remaining_to_spawn: u32,
    /// Countdown to the next spawn, in simulation seconds.
    pub spawn_timer_secs: f64,
    /// Per-enemy HP baseline for this wave, multipliers applied.
    pub base_hp: f64,
    /// Per-enemy speed baseline for this wave, multipliers applied.
    pub base_speed: f64,
    /// A miniboss spawns after the regular count is exhausted.
    pub miniboss_pending: bool,
    /// Set once the wave has fully spawned and no enemy remains marching.
    pub cleared: bool,
}

/// Begin the next wave: pay out the economy, compute this wave's scaling,
/// and arm the spawn timer so the first enemy appears on the next tick.
pub fn start_wave(
    world: &World,
    wave: &mut WaveState,
    map: &MapModifiers,
    difficulty: &DifficultyModifiers,
    money: &mut u32,
    events: &mut Vec<SimEvent>,
) {
    wave.number += 1;
    if wave.number > 1 {
        *money += WAVE_COMPLETION_BONUS;
    }
    let treasuries = world
        .query::<&Tower>()
        .iter()
        .filter(|(_, tower)| tower.kind == TowerKind::Treasury)
        .count() as u32;
    *money += treasuries * TREASURY_PAYOUT;

    let w = wave.number as f64;
    let mut hp = WAVE_HP_BASE + WAVE_HP_PER_WAVE * w;
    if wave.number > 10 {
        hp += WAVE_HP_LATE_ACCEL * (w - 10.0);
    }
    wave.base_hp = hp * map.hp_mult * difficulty.hp_mult;
    wave.base_speed =
        (WAVE_SPEED_BASE + WAVE_SPEED_PER_WAVE * w) * map.speed_mult * difficulty.speed_mult;

    let count = (WAVE_COUNT_BASE + (WAVE_COUNT_PER_WAVE * w).floor())
        * map.count_mult
        * difficulty.count_mult;
    wave.remaining_to_spawn = count.round().max(1.0) as u32;
    wave.spawning = true;
    wave.spawn_timer_secs = 0.0;
    wave.miniboss_pending = wave.number % MINIBOSS_WAVE_INTERVAL == 0;
    wave.cleared = false;

    events.push(SimEvent::WaveStarted { wave: wave.number });
}

/// Emit spawns on the fixed simulation-time cadence. The miniboss, when
/// scheduled, goes out on the same cadence after the regular count.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    wave: &mut WaveState,
    paths: &PathSet,
    rng: &mut ChaCha8Rng,
    money_mult: f64,
    next_enemy_id: &mut u64,
    dt: f64,
    events: &mut Vec<SimEvent>,
) {
    if !wave.spawning {
        return;
    }
    wave.spawn_timer_secs -= dt;

    while wave.spawn_timer_secs <= 0.0 && (wave.remaining_to_spawn > 0 || wave.miniboss_pending) {
        let path_index = paths.pick(rng.gen());
        let id = *next_enemy_id;
        *next_enemy_id += 1;

        if wave.remaining_to_spawn > 0 {
            let rank = roll_rank(rng, wave.number);
            world_setup::spawn_enemy(
                world,
                paths,
                path_index,
                rank,
                wave.base_hp,
                wave.base_speed,
                money_mult,
                id,
            );
            wave.remaining_to_spawn -= 1;
        } else {
            world_setup::spawn_enemy(
                world,
                paths,
                path_index,
                EnemyRank::Miniboss,
                wave.base_hp,
                wave.base_speed,
                money_mult,
                id,
            );
            wave.miniboss_pending = false;
            events.push(SimEvent::MinibossSpawned { wave: wave.number });
        }
        wave.spawn_timer_secs += SPAWN_INTERVAL_SECS;
    }

    if wave.remaining_to_spawn == 0 && !wave.miniboss_pending {
        wave.spawning = false;
    }
}

/// Champion roll first, elite roll second. Both ramp with the wave number
/// up to their caps.
fn roll_rank(rng: &mut ChaCha8Rng, wave_number: u32) -> EnemyRank {
    let w = wave_number as f64;
    let champion_chance =
        (CHAMPION_CHANCE_BASE + CHAMPION_CHANCE_PER_WAVE * w).min(CHAMPION_CHANCE_CAP);
    if rng.gen::<f64>() < champion_chance {
        return EnemyRank::Champion;
    }
    let elite_chance = (ELITE_CHANCE_BASE + ELITE_CHANCE_PER_WAVE * w).min(ELITE_CHANCE_CAP);
    if rng.gen::<f64>() < elite_chance {
        return EnemyRank::Elite;
    }
    EnemyRank::Normal
}
