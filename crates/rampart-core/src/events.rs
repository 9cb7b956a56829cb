//! Events emitted by the simulation for UI and audio feedback.
//!
//! Invalid actions surface here as transient notices; nothing in
//! steady-state play is an error.

use serde::{Deserialize, Serialize};

use crate::enums::{PlacementError, TowerKind};

/// Notices produced during a tick, drained into each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A wave began spawning.
    WaveStarted { wave: u32 },
    /// The last enemy of a wave was cleared.
    WaveCleared { wave: u32 },
    /// An enemy died to damage and paid its bounty.
    EnemyKilled { id: u64, bounty: u32 },
    /// An enemy reached the final waypoint and cost a life.
    EnemyLeaked { id: u64 },
    /// A tower was placed and paid for.
    TowerPlaced { kind: TowerKind },
    /// A placement request was rejected.
    PlacementRejected { reason: PlacementError },
    /// The post-wave miniboss entered the field.
    MinibossSpawned { wave: u32 },
    /// Lives hit zero; the simulation is frozen.
    Defeat { wave: u32 },
}
