//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Tower variant. Each arm is dispatched exhaustively in the tower system,
/// so adding a variant is a compile-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerKind {
    /// Single-target instant damage.
    Striker,
    /// Single-target damage plus a short stun.
    Maul,
    /// Area damage, stun, and knockback around the tower.
    Slam,
    /// Aura: continuous slow and light damage to everything in range.
    /// Runs every tick and carries no cooldown state.
    Frost,
    /// Spawns a homing seeking strike.
    Leaper,
    /// Spawns a straight dash strike.
    Rusher,
    /// Spawns a homing spit glob that deposits an area pool on impact.
    Spitter,
    /// Spawns a straight pierce bolt.
    Spiker,
    /// No combat behavior; pays out once per wave start.
    Treasury,
    /// Ignores range: area damage centered on the highest-HP enemy anywhere.
    Artillery,
}

/// Effect variant tag for snapshot views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    SeekingStrike,
    DashStrike,
    SpitGlob,
    AreaPool,
    PierceBolt,
}

/// Enemy lifecycle phase. `Dead` and `Escaped` are terminal: the enemy is
/// pruned at end of tick and never updated again. Stun is not a phase —
/// it lives in `StatusState` and only gates movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyPhase {
    #[default]
    Marching,
    /// HP reached zero (awards bounty).
    Dead,
    /// Reached the final waypoint (deducts a life).
    Escaped,
}

/// Enemy strength tier assigned at spawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyRank {
    #[default]
    Normal,
    /// HP x1.4, speed x1.2.
    Elite,
    /// Rarer roll: HP x2.2, speed x1.05.
    Champion,
    /// Single spawn after every 7th wave: HP x8, slower, larger.
    Miniboss,
}

/// Game phase (top-level state). `Defeated` is a normal end state reached
/// when lives hit zero; the tick loop freezes there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    Defeated,
}

/// Why a tower placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementError {
    InsufficientFunds,
    /// Too close to a path segment (checked against every path in the set).
    BlocksPath,
}
