//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick at 1x speed.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Maximum speed multiplier (0 = paused, 1 = normal, 2 = fast).
pub const MAX_SPEED_MULTIPLIER: f64 = 2.0;

// --- Playfield ---

/// Playfield width in pixels.
pub const FIELD_WIDTH: f64 = 960.0;

/// Playfield height in pixels.
pub const FIELD_HEIGHT: f64 = 540.0;

/// Margin beyond the playfield rectangle before an effect is pruned.
pub const OOB_MARGIN: f64 = 40.0;

// --- Economy ---

/// Starting money.
pub const STARTING_MONEY: u32 = 120;

/// Starting lives.
pub const STARTING_LIVES: u32 = 20;

/// Base currency awarded per kill, before the difficulty money multiplier
/// and rank multipliers are applied.
pub const ENEMY_BASE_BOUNTY: u32 = 6;

/// Flat bonus paid at the start of every wave after the first.
pub const WAVE_COMPLETION_BONUS: u32 = 25;

/// Payout per Treasury tower at each wave start.
pub const TREASURY_PAYOUT: u32 = 15;

// --- Placement ---

/// No tower may stand within this distance of any path segment.
pub const TOWER_PATH_BUFFER: f64 = 28.0;

// --- Enemy movement ---

/// Reach-the-waypoint slop so a step never stalls just short of a vertex.
pub const WAYPOINT_EPSILON: f64 = 1e-6;

/// Perpendicular drift beyond this is snapped back onto the segment.
pub const DRIFT_SNAP_TOLERANCE: f64 = 0.5;

/// On the first segment, knockback is capped at this fraction of the
/// distance already covered.
pub const KNOCKBACK_FIRST_SEGMENT_CAP: f64 = 0.9;

/// Default enemy collision radius in pixels.
pub const ENEMY_RADIUS: f64 = 10.0;

// --- Wave scaling ---

/// Seconds between spawns within a wave (simulation time).
pub const SPAWN_INTERVAL_SECS: f64 = 0.55;

/// Base enemy count per wave, before per-wave growth.
pub const WAVE_COUNT_BASE: f64 = 6.0;

/// Enemies added per wave (floored before the multipliers).
pub const WAVE_COUNT_PER_WAVE: f64 = 1.2;

/// Base enemy HP at wave 1, before per-wave growth.
pub const WAVE_HP_BASE: f64 = 24.0;

/// HP added per wave.
pub const WAVE_HP_PER_WAVE: f64 = 9.0;

/// Extra HP per wave past wave 10.
pub const WAVE_HP_LATE_ACCEL: f64 = 14.0;

/// Base enemy speed at wave 1 (px/s).
pub const WAVE_SPEED_BASE: f64 = 46.0;

/// Speed added per wave (px/s).
pub const WAVE_SPEED_PER_WAVE: f64 = 1.5;

/// Elite roll probability: base + per-wave ramp, capped.
pub const ELITE_CHANCE_BASE: f64 = 0.04;
pub const ELITE_CHANCE_PER_WAVE: f64 = 0.012;
pub const ELITE_CHANCE_CAP: f64 = 0.28;

/// Champion (rare elite) roll probability: base + per-wave ramp, capped.
pub const CHAMPION_CHANCE_BASE: f64 = 0.01;
pub const CHAMPION_CHANCE_PER_WAVE: f64 = 0.004;
pub const CHAMPION_CHANCE_CAP: f64 = 0.10;

/// Elite multipliers.
pub const ELITE_HP_MULT: f64 = 1.4;
pub const ELITE_SPEED_MULT: f64 = 1.2;

/// Champion multipliers.
pub const CHAMPION_HP_MULT: f64 = 2.2;
pub const CHAMPION_SPEED_MULT: f64 = 1.05;

/// Miniboss multipliers; one spawns after every wave divisible by this.
pub const MINIBOSS_WAVE_INTERVAL: u32 = 7;
pub const MINIBOSS_HP_MULT: f64 = 8.0;
pub const MINIBOSS_SPEED_MULT: f64 = 0.65;
pub const MINIBOSS_RADIUS_MULT: f64 = 1.8;

/// Bounty multipliers by rank.
pub const ELITE_BOUNTY_MULT: f64 = 2.0;
pub const CHAMPION_BOUNTY_MULT: f64 = 3.0;
pub const MINIBOSS_BOUNTY_MULT: f64 = 10.0;

/// Delay between a cleared wave and the auto-started next one (seconds).
pub const AUTO_WAVE_DELAY_SECS: f64 = 2.0;

// --- Effect family ---

/// Contact margin added to the target radius for homing strikes.
pub const STRIKE_CONTACT_MARGIN: f64 = 2.0;

/// Seeking strike kinematics.
pub const SEEKING_STRIKE_SPEED: f64 = 260.0;
pub const SEEKING_STRIKE_TURN_RATE: f64 = 6.0;

/// Spit glob kinematics (slower, lazier homing than the strike).
pub const SPIT_GLOB_SPEED: f64 = 200.0;
pub const SPIT_GLOB_TURN_RATE: f64 = 5.0;

/// Dash strike travel speed (px/s).
pub const DASH_STRIKE_SPEED: f64 = 340.0;

/// Pierce bolt travel speed (px/s).
pub const PIERCE_BOLT_SPEED: f64 = 380.0;

/// Area pool slow refresh duration (seconds, reapplied every tick inside).
pub const POOL_SLOW_REFRESH_SECS: f64 = 0.4;

/// Bleed applied by a seeking strike on contact.
pub const STRIKE_BLEED_DPS: f64 = 4.0;
pub const STRIKE_BLEED_SECS: f64 = 2.0;

/// Total distance a dash strike travels before expiring.
pub const DASH_TRAVEL_DISTANCE: f64 = 160.0;

/// Enemies a pierce bolt can damage before deactivating.
pub const PIERCE_BOLT_COUNT: u32 = 3;

/// Pool deposited by a spit glob on impact.
pub const SPIT_POOL_RADIUS: f64 = 42.0;
pub const SPIT_POOL_DPS: f64 = 6.0;
pub const SPIT_POOL_SLOW_FACTOR: f64 = 0.7;
pub const SPIT_POOL_LIFETIME_SECS: f64 = 3.2;

/// Frost aura slow refresh duration (seconds, reapplied while in range).
pub const AURA_SLOW_REFRESH_SECS: f64 = 0.3;
