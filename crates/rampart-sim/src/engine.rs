//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems in a fixed order, and produces `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use rampart_core::commands::{DifficultyModifiers, MapModifiers, PlayerCommand};
use rampart_core::components::PathFollower;
use rampart_core::constants::{
    AUTO_WAVE_DELAY_SECS, DT, MAX_SPEED_MULTIPLIER, STARTING_LIVES, STARTING_MONEY,
    TOWER_PATH_BUFFER,
};
use rampart_core::enums::{EnemyPhase, GamePhase, PlacementError};
use rampart_core::events::SimEvent;
use rampart_core::path::PathSet;
use rampart_core::state::GameStateSnapshot;
use rampart_core::types::SimTime;

use crate::systems;
use crate::systems::wave_spawner::WaveState;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial speed multiplier (0 = paused, 1 = normal).
    pub speed_multiplier: f64,
    /// Map layout. Defaults to the built-in two-path map.
    pub paths: PathSet,
    pub map: MapModifiers,
    pub difficulty: DifficultyModifiers,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            speed_multiplier: 1.0,
            paths: world_setup::default_path_set(),
            map: MapModifiers::default(),
            difficulty: DifficultyModifiers::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    speed_multiplier: f64,
    rng: ChaCha8Rng,
    paths: PathSet,
    map: MapModifiers,
    difficulty: DifficultyModifiers,
    money: u32,
    lives: u32,
    next_enemy_id: u64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
    wave: WaveState,
    auto_wave: bool,
    auto_wave_timer_secs: f64,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            speed_multiplier: config.speed_multiplier.clamp(0.0, MAX_SPEED_MULTIPLIER),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            paths: config.paths,
            map: config.map,
            difficulty: config.difficulty,
            money: STARTING_MONEY,
            lives: STARTING_LIVES,
            next_enemy_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            wave: WaveState::default(),
            auto_wave: false,
            auto_wave_timer_secs: 0.0,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// At speed multiplier 0 the systems do not run and time does not
    /// advance; the snapshot still reflects the frozen state.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        let dt = DT * self.speed_multiplier;
        if self.phase == GamePhase::Active && dt > 0.0 {
            self.run_systems(dt);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            self.time,
            self.phase,
            self.speed_multiplier,
            self.money,
            self.lives,
            &self.wave,
            events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    pub fn money(&self) -> u32 {
        self.money
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn wave_number(&self) -> u32 {
        self.wave.number
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn paths(&self) -> &PathSet {
        &self.paths
    }

    /// Spawn a single enemy directly (for tests that need a known setup).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        path_index: usize,
        rank: rampart_core::enums::EnemyRank,
        hp: f64,
        speed: f64,
    ) -> hecs::Entity {
        let id = self.next_enemy_id;
        self.next_enemy_id += 1;
        world_setup::spawn_enemy(
            &mut self.world,
            &self.paths,
            path_index,
            rank,
            hp,
            speed,
            self.difficulty.money_mult,
            id,
        )
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn set_money(&mut self, money: u32) {
        self.money = money;
    }

    #[cfg(test)]
    pub fn set_lives(&mut self, lives: u32) {
        self.lives = lives;
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::PlaceTower { kind, position } => {
                if self.phase == GamePhase::Defeated {
                    return;
                }
                let spec = world_setup::tower_spec(kind);
                if self.money < spec.cost {
                    self.events.push(SimEvent::PlacementRejected {
                        reason: PlacementError::InsufficientFunds,
                    });
                } else if self.paths.min_distance_to(&position) < TOWER_PATH_BUFFER {
                    self.events.push(SimEvent::PlacementRejected {
                        reason: PlacementError::BlocksPath,
                    });
                } else {
                    self.money -= spec.cost;
                    world_setup::spawn_tower(&mut self.world, kind, position);
                    self.events.push(SimEvent::TowerPlaced { kind });
                }
            }
            PlayerCommand::StartWave => {
                if self.phase == GamePhase::Defeated || self.wave.spawning {
                    return;
                }
                systems::wave_spawner::start_wave(
                    &self.world,
                    &mut self.wave,
                    &self.map,
                    &self.difficulty,
                    &mut self.money,
                    &mut self.events,
                );
                self.auto_wave_timer_secs = 0.0;
            }
            PlayerCommand::SetSpeed { multiplier } => {
                self.speed_multiplier = multiplier.clamp(0.0, MAX_SPEED_MULTIPLIER);
            }
            PlayerCommand::SetAutoWave { enabled } => {
                self.auto_wave = enabled;
            }
            PlayerCommand::SetMapModifiers { modifiers } => {
                self.map = modifiers;
            }
            PlayerCommand::SetDifficultyModifiers { modifiers } => {
                self.difficulty = modifiers;
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Wave spawning
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.wave,
            &self.paths,
            &mut self.rng,
            self.difficulty.money_mult,
            &mut self.next_enemy_id,
            dt,
            &mut self.events,
        );
        // 2. Enemy status decay + movement
        systems::movement::run(
            &mut self.world,
            &self.paths,
            dt,
            &mut self.lives,
            &mut self.events,
        );
        // 3. Tower targeting + firing
        systems::towers::run(&mut self.world, &self.paths, dt);
        // 4. Effect travel + contact resolution
        systems::effects::run(&mut self.world, &self.paths, dt);
        // 5. Death resolution + bounty
        systems::casualties::run(&mut self.world, &mut self.money, &mut self.events);
        // 6. Despawn finished entities
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        self.check_wave_completion(dt);

        if self.lives == 0 && self.phase == GamePhase::Active {
            self.phase = GamePhase::Defeated;
            self.events.push(SimEvent::Defeat {
                wave: self.wave.number,
            });
        }
    }

    /// Mark the wave cleared once it has fully spawned and the field is
    /// empty, and drive the auto-wave countdown.
    fn check_wave_completion(&mut self, dt: f64) {
        if self.wave.number == 0 || self.wave.spawning {
            return;
        }
        if !self.wave.cleared {
            let marching = self
                .world
                .query::<&PathFollower>()
                .iter()
                .any(|(_, follower)| follower.phase == EnemyPhase::Marching);
            if !marching {
                self.wave.cleared = true;
                self.auto_wave_timer_secs = AUTO_WAVE_DELAY_SECS;
                self.events.push(SimEvent::WaveCleared {
                    wave: self.wave.number,
                });
            }
            return;
        }
        if self.auto_wave {
            self.auto_wave_timer_secs -= dt;
            if self.auto_wave_timer_secs <= 0.0 {
                systems::wave_spawner::start_wave(
                    &self.world,
                    &mut self.wave,
                    &self.map,
                    &self.difficulty,
                    &mut self.money,
                    &mut self.events,
                );
            }
        }
    }
}
