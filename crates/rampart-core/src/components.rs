//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyPhase, EnemyRank, TowerKind};

/// Identity and bookkeeping for an enemy entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    /// Unique, monotonically assigned by the engine. Stable across the
    /// enemy's lifetime; used for hit-once tracking and tie-breaks.
    pub id: u64,
    pub rank: EnemyRank,
    /// Currency awarded on kill (difficulty money multiplier already
    /// applied at spawn).
    pub bounty: u32,
}

/// Hit points. hp <= max_hp.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub hp: f64,
    pub max_hp: f64,
}

/// Kinematic parameters fixed at spawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mobility {
    /// Unmodified speed in px/s; the effective speed is
    /// base_speed * slow_factor * speed_multiplier.
    pub base_speed: f64,
    /// Collision radius in pixels.
    pub radius: f64,
}

/// Where an enemy is on its path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PathFollower {
    /// Index into the map's PathSet.
    pub path_index: usize,
    /// Index of the waypoint currently being approached. Spawn is at
    /// path[0] with waypoint = 1.
    pub waypoint: usize,
    pub phase: EnemyPhase,
}

/// A placed defender. Lives for the whole session; never mutates other
/// towers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tower {
    pub kind: TowerKind,
    pub range: f64,
    /// Seconds until the next shot. Frost and Treasury never use it.
    pub cooldown_secs: f64,
    /// Cooldown reset value (fire-rate period).
    pub period_secs: f64,
}

// --- Effect family ---
//
// Each effect is its own short-lived entity with a Position component and
// one of the structs below. `alive = false` means resolved: pruned at end
// of tick, never updated or drawn again. Homing variants hold a target
// entity handle; liveness is re-checked by lookup every tick, and a dead
// target terminates the effect rather than being kept alive by it.

/// Homing strike: steers toward its target at a bounded turn rate, then
/// applies one instant hit plus a bleed on contact.
#[derive(Debug, Clone, Copy)]
pub struct SeekingStrike {
    pub target: hecs::Entity,
    /// Current heading in radians.
    pub heading: f64,
    pub speed: f64,
    /// Max turn rate in rad/s.
    pub turn_rate: f64,
    pub damage: f64,
    pub bleed_dps: f64,
    pub bleed_secs: f64,
    pub alive: bool,
}

/// Straight rush over a fixed total distance, hitting each enemy at most
/// once along the way.
#[derive(Debug, Clone)]
pub struct DashStrike {
    pub heading: f64,
    pub speed: f64,
    pub travel_remaining: f64,
    pub radius: f64,
    pub damage: f64,
    pub stun_secs: f64,
    pub knockback: f64,
    /// Enemy ids already hit by this instance.
    pub hit_ids: Vec<u64>,
    pub alive: bool,
}

/// Parameters for the pool a spit glob deposits on impact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PoolSpec {
    pub radius: f64,
    pub dps: f64,
    pub slow_factor: f64,
    pub lifetime_secs: f64,
}

/// Homing glob: same steering and contact rule as the seeking strike, but
/// deposits an AreaPool at the impact point.
#[derive(Debug, Clone, Copy)]
pub struct SpitGlob {
    pub target: hecs::Entity,
    pub heading: f64,
    pub speed: f64,
    pub turn_rate: f64,
    pub damage: f64,
    pub pool: PoolSpec,
    pub alive: bool,
}

/// Stationary damage-over-time zone with a continuous slow refresh.
#[derive(Debug, Clone, Copy)]
pub struct AreaPool {
    pub radius: f64,
    pub dps: f64,
    pub slow_factor: f64,
    /// Slow duration reapplied every tick an enemy stays inside.
    pub slow_secs: f64,
    pub lifetime_secs: f64,
    pub alive: bool,
}

/// Straight bolt that damages up to `pierce_remaining` enemies.
#[derive(Debug, Clone)]
pub struct PierceBolt {
    pub heading: f64,
    pub speed: f64,
    pub damage: f64,
    pub pierce_remaining: u32,
    /// Enemy ids already pierced (each enemy is damaged at most once).
    pub hit_ids: Vec<u64>,
    pub alive: bool,
}
