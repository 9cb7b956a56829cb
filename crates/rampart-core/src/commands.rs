//! Player commands sent from the UI/input layer to the simulation.
//!
//! Commands are validated and queued for processing at the next tick
//! boundary.

use serde::{Deserialize, Serialize};

use crate::enums::TowerKind;
use crate::types::Position;

/// Multipliers applied by the active map, set on map load.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MapModifiers {
    pub hp_mult: f64,
    pub speed_mult: f64,
    pub count_mult: f64,
}

impl Default for MapModifiers {
    fn default() -> Self {
        Self {
            hp_mult: 1.0,
            speed_mult: 1.0,
            count_mult: 1.0,
        }
    }
}

/// Multipliers applied by the selected difficulty.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DifficultyModifiers {
    pub hp_mult: f64,
    pub speed_mult: f64,
    pub count_mult: f64,
    pub money_mult: f64,
}

impl Default for DifficultyModifiers {
    fn default() -> Self {
        Self {
            hp_mult: 1.0,
            speed_mult: 1.0,
            count_mult: 1.0,
            money_mult: 1.0,
        }
    }
}

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Place a tower. Validated against funds and path clearance; a
    /// rejected placement emits a notice event and mutates nothing.
    PlaceTower { kind: TowerKind, position: Position },
    /// Start the next wave. Ignored while the current wave is still
    /// spawning.
    StartWave,
    /// Set the speed multiplier (0 = paused, 1 = normal, 2 = fast).
    SetSpeed { multiplier: f64 },
    /// Enable or disable automatic wave advance after a cleared wave.
    SetAutoWave { enabled: bool },
    /// Apply map modifiers (on map load).
    SetMapModifiers { modifiers: MapModifiers },
    /// Apply difficulty modifiers.
    SetDifficultyModifiers { modifiers: DifficultyModifiers },
}
