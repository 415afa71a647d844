//! ECS components for hecs entities.
//!
//! Components are plain data. Game logic lives in systems; the only methods
//! here are accessors over the buff table.

use serde::{Deserialize, Serialize};

use crate::enums::BuffKind;
use crate::types::{SideId, TeamId};

/// A combatant box. Its `Position` is the top-left corner of an
/// `AGENT_SIZE` square.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    /// Stable id, unique within a match. Targets refer to agents by this id.
    pub id: u32,
    pub team: TeamId,
    pub side: SideId,
    pub color: String,
}

/// Hit points in `[0, HP_MAX]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub hp: f64,
}

/// Fire control state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Weapon {
    /// Ticks until the next shot is allowed.
    pub cooldown: f64,
}

/// Current target, recomputed every tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Targeting {
    /// Agent id of the nearest enemy. An id that no longer resolves to a
    /// live agent means "no target".
    pub target: Option<u32>,
}

/// Remaining duration (ticks) of each timed buff. A buff is active while its
/// remaining duration is above zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Buffs {
    pub damage: f64,
    pub fire_rate: f64,
    pub homing: f64,
    pub speed_boost: f64,
    pub triple_shot: f64,
}

impl Buffs {
    pub fn remaining(&self, kind: BuffKind) -> f64 {
        match kind {
            BuffKind::Damage => self.damage,
            BuffKind::FireRate => self.fire_rate,
            BuffKind::Homing => self.homing,
            BuffKind::SpeedBoost => self.speed_boost,
            BuffKind::TripleShot => self.triple_shot,
        }
    }

    pub fn remaining_mut(&mut self, kind: BuffKind) -> &mut f64 {
        match kind {
            BuffKind::Damage => &mut self.damage,
            BuffKind::FireRate => &mut self.fire_rate,
            BuffKind::Homing => &mut self.homing,
            BuffKind::SpeedBoost => &mut self.speed_boost,
            BuffKind::TripleShot => &mut self.triple_shot,
        }
    }

    pub fn is_active(&self, kind: BuffKind) -> bool {
        self.remaining(kind) > 0.0
    }
}

/// A moving damaging point. Its `Position` is the projectile's center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u64,
    pub owner_team: TeamId,
    /// Side of the shooter. Agents on this side are never damaged.
    pub owner_side: SideId,
    pub color: String,
    /// Damage captured at fire time, buffs included.
    pub damage: f64,
    pub homing: bool,
    /// Agent id this projectile steers toward (homing only).
    pub tracked: Option<u32>,
}

/// A stationary pickup. Its `Position` is the center of the footprint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u64,
    pub kind: crate::enums::PowerUpKind,
}
