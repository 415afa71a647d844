//! Simulation constants and tuning parameters.
//!
//! Distances are in arena pixels, durations in ticks. Every per-tick delta
//! is multiplied by the engine's time scale.

/// Simulation tick rate (Hz). One tick per display refresh.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Arena ---

/// Arena width in pixels.
pub const ARENA_WIDTH: f64 = 800.0;

/// Arena height in pixels.
pub const ARENA_HEIGHT: f64 = 600.0;

/// Fraction of the arena width used as a side's spawn column.
pub const SPAWN_COLUMN_FRACTION: f64 = 0.25;

/// Random placement attempts before falling back to a grid scan.
pub const PLACEMENT_MAX_ATTEMPTS: u32 = 200;

/// Step of the fallback grid scan.
pub const PLACEMENT_GRID_STEP: f64 = 5.0;

// --- Agents ---

/// Side length of an agent's square box.
pub const AGENT_SIZE: f64 = 20.0;

/// Base agent speed (pixels per tick).
pub const AGENT_SPEED: f64 = 1.5;

/// Maximum (and starting) agent health.
pub const HP_MAX: f64 = 100.0;

/// Ticks between shots without a fire-rate buff.
pub const FIRE_INTERVAL: f64 = 60.0;

/// Upper bound on agents in a single match.
pub const MAX_AGENTS: u32 = 500;

// --- Projectiles ---

/// Projectile speed (pixels per tick).
pub const PROJECTILE_SPEED: f64 = 4.0;

/// Side length of a projectile's square box.
pub const PROJECTILE_SIZE: f64 = 5.0;

/// Damage per projectile without a damage buff.
pub const PROJECTILE_DAMAGE: f64 = 10.0;

/// Maximum heading change of a homing projectile per unscaled tick
/// (radians). A tick at time scale `s` may turn up to `s` times this.
pub const HOMING_TURN_RATE: f64 = 0.05;

/// Angular offset of the outer shots of a triple shot (radians).
pub const TRIPLE_SHOT_SPREAD: f64 = 0.2;

// --- Power-ups ---

/// Radius of a power-up's pickup footprint.
pub const POWERUP_RADIUS: f64 = 10.0;

/// Average ticks between power-up spawns.
pub const POWERUP_SPAWN_INTERVAL: f64 = 300.0;

/// Spawn interval jitter: the next spawn is drawn from
/// `interval * [1 - JITTER, 1 + JITTER)`.
pub const POWERUP_SPAWN_JITTER: f64 = 0.5;

/// Maximum number of power-ups on the field at once.
pub const POWERUP_MAX_ACTIVE: usize = 5;

/// Health restored by a heal pickup.
pub const HEAL_AMOUNT: f64 = 50.0;

/// Duration of a timed buff (ticks).
pub const BUFF_DURATION: f64 = 600.0;

/// Damage multiplier while a damage buff is active.
pub const DAMAGE_BUFF_MULTIPLIER: f64 = 1.5;

/// Fire interval divisor while a fire-rate buff is active.
pub const FIRE_RATE_BUFF_DIVISOR: f64 = 2.0;

/// Movement multiplier while a speed buff is active.
pub const SPEED_BUFF_MULTIPLIER: f64 = 1.5;

// --- Time scale ---

/// Slowest allowed time scale.
pub const TIME_SCALE_MIN: f64 = 0.25;

/// Fastest allowed time scale.
pub const TIME_SCALE_MAX: f64 = 3.0;
