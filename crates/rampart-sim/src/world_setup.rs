//! Entity spawn factories and static map/tower configuration.
//!
//! Creates enemy and tower entities with appropriate component bundles,
//! and owns the per-variant tower parameter table.

use hecs::World;

use rampart_core::components::{Enemy, Health, Mobility, PathFollower, Tower};
use rampart_core::constants::*;
use rampart_core::enums::{EnemyPhase, EnemyRank, TowerKind};
use rampart_core::path::{Path, PathSet};
use rampart_core::status::StatusState;
use rampart_core::types::Position;

/// Numeric parameters for a tower variant. Fields a variant does not use
/// stay zero.
#[derive(Debug, Clone, Copy)]
pub struct TowerSpec {
    pub cost: u32,
    pub range: f64,
    /// Cooldown period in seconds; 0 for cooldown-less variants.
    pub period_secs: f64,
    /// Instant damage, or damage-per-second for the aura.
    pub damage: f64,
    pub stun_secs: f64,
    /// Area radius for burst variants.
    pub radius: f64,
    pub knockback: f64,
    pub slow_factor: f64,
}

/// Per-variant tuning table.
pub fn tower_spec(kind: TowerKind) -> TowerSpec {
    let base = TowerSpec {
        cost: 0,
        range: 0.0,
        period_secs: 0.0,
        damage: 0.0,
        stun_secs: 0.0,
        radius: 0.0,
        knockback: 0.0,
        slow_factor: 1.0,
    };
    match kind {
        TowerKind::Striker => TowerSpec {
            cost: 40,
            range: 110.0,
            period_secs: 0.8,
            damage: 7.0,
            ..base
        },
        TowerKind::Maul => TowerSpec {
            cost: 55,
            range: 90.0,
            period_secs: 1.4,
            damage: 9.0,
            stun_secs: 0.35,
            ..base
        },
        TowerKind::Slam => TowerSpec {
            cost: 80,
            range: 100.0,
            period_secs: 2.2,
            damage: 12.0,
            stun_secs: 0.5,
            radius: 70.0,
            knockback: 26.0,
            ..base
        },
        TowerKind::Frost => TowerSpec {
            cost: 60,
            range: 85.0,
            damage: 2.0,
            slow_factor: 0.55,
            ..base
        },
        TowerKind::Leaper => TowerSpec {
            cost: 70,
            range: 150.0,
            period_secs: 1.6,
            damage: 8.0,
            ..base
        },
        TowerKind::Rusher => TowerSpec {
            cost: 75,
            range: 120.0,
            period_secs: 2.8,
            damage: 10.0,
            stun_secs: 0.4,
            radius: 24.0,
            knockback: 30.0,
            ..base
        },
        TowerKind::Spitter => TowerSpec {
            cost: 85,
            range: 160.0,
            period_secs: 2.4,
            damage: 4.0,
            ..base
        },
        TowerKind::Spiker => TowerSpec {
            cost: 65,
            range: 140.0,
            period_secs: 1.1,
            damage: 6.0,
            ..base
        },
        TowerKind::Treasury => TowerSpec { cost: 90, ..base },
        TowerKind::Artillery => TowerSpec {
            cost: 120,
            period_secs: 5.0,
            damage: 14.0,
            radius: 60.0,
            ..base
        },
    }
}

/// Default two-path map: a long northern route and a shorter southern one,
/// weighted 3:1 toward the north.
pub fn default_path_set() -> PathSet {
    PathSet::new(
        vec![
            Path::new(
                "north",
                vec![
                    Position::new(-20.0, 120.0),
                    Position::new(240.0, 120.0),
                    Position::new(240.0, 300.0),
                    Position::new(520.0, 300.0),
                    Position::new(520.0, 140.0),
                    Position::new(760.0, 140.0),
                    Position::new(760.0, 420.0),
                    Position::new(980.0, 420.0),
                ],
            ),
            Path::new(
                "south",
                vec![
                    Position::new(-20.0, 460.0),
                    Position::new(420.0, 460.0),
                    Position::new(420.0, 380.0),
                    Position::new(760.0, 380.0),
                    Position::new(760.0, 420.0),
                    Position::new(980.0, 420.0),
                ],
            ),
        ],
        vec![3.0, 1.0],
    )
}

/// HP / speed / radius / bounty multipliers for a rank.
fn rank_multipliers(rank: EnemyRank) -> (f64, f64, f64, f64) {
    match rank {
        EnemyRank::Normal => (1.0, 1.0, 1.0, 1.0),
        EnemyRank::Elite => (ELITE_HP_MULT, ELITE_SPEED_MULT, 1.0, ELITE_BOUNTY_MULT),
        EnemyRank::Champion => (
            CHAMPION_HP_MULT,
            CHAMPION_SPEED_MULT,
            1.0,
            CHAMPION_BOUNTY_MULT,
        ),
        EnemyRank::Miniboss => (
            MINIBOSS_HP_MULT,
            MINIBOSS_SPEED_MULT,
            MINIBOSS_RADIUS_MULT,
            MINIBOSS_BOUNTY_MULT,
        ),
    }
}

/// Spawn a single enemy at the first point of its path.
///
/// `base_hp`/`base_speed` are the wave baselines (map and difficulty
/// multipliers already applied); rank multipliers are applied here.
#[allow(clippy::too_many_arguments)]
pub fn spawn_enemy(
    world: &mut World,
    paths: &PathSet,
    path_index: usize,
    rank: EnemyRank,
    base_hp: f64,
    base_speed: f64,
    money_mult: f64,
    id: u64,
) -> hecs::Entity {
    let (hp_mult, speed_mult, radius_mult, bounty_mult) = rank_multipliers(rank);
    let hp = base_hp * hp_mult;
    let start = paths
        .get(path_index)
        .point(0)
        .unwrap_or(Position::new(0.0, 0.0));
    let bounty = (ENEMY_BASE_BOUNTY as f64 * money_mult * bounty_mult).round() as u32;

    world.spawn((
        Enemy { id, rank, bounty },
        Health { hp, max_hp: hp },
        Mobility {
            base_speed: base_speed * speed_mult,
            radius: ENEMY_RADIUS * radius_mult,
        },
        PathFollower {
            path_index,
            waypoint: 1,
            phase: EnemyPhase::Marching,
        },
        StatusState::default(),
        start,
    ))
}

/// Spawn a tower of `kind` at `position`. Placement validation happens in
/// the engine before this is called.
pub fn spawn_tower(world: &mut World, kind: TowerKind, position: Position) -> hecs::Entity {
    let spec = tower_spec(kind);
    world.spawn((
        Tower {
            kind,
            range: spec.range,
            cooldown_secs: 0.0,
            period_secs: spec.period_secs,
        },
        position,
    ))
}
