//! Events emitted by the simulation for presentation feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{MatchResult, PowerUpKind};
use crate::types::SideId;

/// Things that happened during a tick, drained into that tick's snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchEvent {
    /// An agent fired `count` projectiles.
    ShotFired { agent_id: u32, count: u32 },
    /// A projectile struck an agent.
    AgentHit {
        agent_id: u32,
        damage: f64,
        remaining_hp: f64,
    },
    /// An agent's health reached zero.
    AgentDestroyed { agent_id: u32, side: SideId },
    PowerUpSpawned { power_up_id: u64, kind: PowerUpKind },
    PowerUpCollected {
        power_up_id: u64,
        agent_id: u32,
        kind: PowerUpKind,
    },
    MatchOver { result: MatchResult },
}
