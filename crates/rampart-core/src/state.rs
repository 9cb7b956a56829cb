//! Game state snapshot — the complete visible state sent to the rendering
//! layer each tick. Read-only: collaborators draw from it, never mutate it.

use serde::{Deserialize, Serialize};

use crate::enums::{EffectKind, EnemyRank, GamePhase, TowerKind};
use crate::events::SimEvent;
use crate::types::{Position, SimTime};

/// Complete game state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub speed_multiplier: f64,
    pub money: u32,
    pub lives: u32,
    pub wave: WaveView,
    pub enemies: Vec<EnemyView>,
    pub towers: Vec<TowerView>,
    pub effects: Vec<EffectView>,
    pub events: Vec<SimEvent>,
}

/// A visible enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u64,
    pub rank: EnemyRank,
    pub position: Position,
    pub hp: f64,
    pub max_hp: f64,
    pub radius: f64,
    pub path_index: usize,
    pub waypoint: usize,
    pub stunned: bool,
    pub slowed: bool,
    pub bleeding: bool,
}

/// A placed tower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub kind: TowerKind,
    pub position: Position,
    pub range: f64,
    /// Fraction of the cooldown remaining, 0 = ready. Always 0 for
    /// cooldown-less variants.
    pub cooldown_frac: f64,
}

/// An active effect entity, for drawing only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectView {
    pub kind: EffectKind,
    pub position: Position,
    /// Heading in radians; 0 for stationary effects.
    pub heading: f64,
    /// Contact/zone radius where meaningful, else 0.
    pub radius: f64,
}

/// Wave progress.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub number: u32,
    pub spawning: bool,
    pub remaining_to_spawn: u32,
}
