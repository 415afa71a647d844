//! Buff system: countdown of timed buffs and pickup effects.

use hecs::World;

use boxclash_core::components::Buffs;
use boxclash_core::constants::{BUFF_DURATION, HEAL_AMOUNT, HP_MAX};
use boxclash_core::enums::{BuffKind, PowerUpKind};

/// Count every active buff down by one scaled tick, stopping at zero.
pub fn tick_down(world: &mut World, time_scale: f64) {
    for (_entity, buffs) in world.query_mut::<&mut Buffs>() {
        for kind in BuffKind::ALL {
            let remaining = buffs.remaining_mut(kind);
            if *remaining > 0.0 {
                *remaining = (*remaining - time_scale).max(0.0);
            }
        }
    }
}

/// Apply a collected pickup. Heal is immediate and capped at `HP_MAX`;
/// every other kind (re)starts its buff timer. Timers refresh, not stack.
pub fn apply_power_up(hp: &mut f64, buffs: &mut Buffs, kind: PowerUpKind) {
    match kind.buff() {
        None => *hp = (*hp + HEAL_AMOUNT).min(HP_MAX),
        Some(buff) => *buffs.remaining_mut(buff) = BUFF_DURATION,
    }
}
