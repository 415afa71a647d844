//! Power-up spawning system: drops pickups at jittered intervals.

use hecs::World;
use log::trace;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use boxclash_core::arena::Arena;
use boxclash_core::components::PowerUp;
use boxclash_core::constants::*;
use boxclash_core::enums::PowerUpKind;
use boxclash_core::events::MatchEvent;

use crate::stats::MatchStats;
use crate::world_setup;

/// Spawn timer and the kinds enabled for this match.
#[derive(Debug, Clone, Default)]
pub struct PowerUpSchedule {
    /// Kinds to draw from. Empty in classic mode, which disables spawning.
    pub enabled: Vec<PowerUpKind>,
    /// Scaled ticks until the next spawn.
    pub countdown: f64,
}

impl PowerUpSchedule {
    /// Repeated kinds are dropped so every enabled kind is equally likely.
    pub fn new(enabled: Vec<PowerUpKind>, rng: &mut ChaCha8Rng) -> Self {
        let mut kinds = Vec::with_capacity(enabled.len());
        for kind in enabled {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        Self {
            enabled: kinds,
            countdown: next_interval(rng),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.enabled.is_empty()
    }
}

/// Draw the delay before the next spawn.
pub fn next_interval(rng: &mut ChaCha8Rng) -> f64 {
    POWERUP_SPAWN_INTERVAL * rng.gen_range(1.0 - POWERUP_SPAWN_JITTER..1.0 + POWERUP_SPAWN_JITTER)
}

/// Count down and spawn a power-up when due, unless the field is full.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    schedule: &mut PowerUpSchedule,
    arena: &Arena,
    next_power_up_id: &mut u64,
    events: &mut Vec<MatchEvent>,
    stats: &mut MatchStats,
    time_scale: f64,
) {
    if !schedule.is_enabled() {
        return;
    }

    schedule.countdown -= time_scale;
    if schedule.countdown > 0.0 {
        return;
    }
    schedule.countdown = next_interval(rng);

    let live = world.query::<&PowerUp>().iter().count();
    if live >= POWERUP_MAX_ACTIVE {
        return;
    }

    let kind = schedule.enabled[rng.gen_range(0..schedule.enabled.len())];
    let center = world_setup::find_power_up_position(rng, arena);
    let id = *next_power_up_id;
    *next_power_up_id += 1;

    world_setup::spawn_power_up(world, id, kind, center);
    stats.power_ups_spawned += 1;
    trace!("power-up {id} ({kind:?}) at {center:?}");
    events.push(MatchEvent::PowerUpSpawned {
        power_up_id: id,
        kind,
    });
}
