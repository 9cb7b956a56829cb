//! Simulation engine for RAMPART.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the rendering layer.

pub mod engine;
pub mod steering;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use rampart_core as core;
