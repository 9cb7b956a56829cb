//! Simulation systems, run in a fixed order each tick:
//! wave spawner, enemy movement, towers, effects, casualties, cleanup,
//! then the read-only snapshot.

pub mod casualties;
pub mod cleanup;
pub mod effects;
pub mod movement;
pub mod snapshot;
pub mod towers;
pub mod wave_spawner;
