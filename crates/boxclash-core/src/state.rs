//! Match snapshot: the complete renderable state handed to the presentation
//! layer after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::MatchEvent;
use crate::types::{Position, Rect, SideId, SimTime, TeamId};

/// Complete match state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub time_scale: f64,
    pub arena: ArenaView,
    pub agents: Vec<AgentView>,
    pub projectiles: Vec<ProjectileView>,
    pub power_ups: Vec<PowerUpView>,
    /// Set once the match has ended.
    pub result: Option<MatchResult>,
    pub stats: StatsView,
    pub events: Vec<MatchEvent>,
}

/// Arena bounds and obstacles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArenaView {
    pub id: ArenaId,
    pub width: f64,
    pub height: f64,
    pub obstacles: Vec<Rect>,
}

/// A live agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentView {
    pub id: u32,
    pub team: TeamId,
    pub side: SideId,
    /// Box on screen (top-left anchored).
    pub rect: Rect,
    pub color: String,
    pub hp: f64,
    /// `hp / HP_MAX`, for the health bar.
    pub health_fraction: f64,
    pub target: Option<u32>,
    pub buffs: Vec<BuffView>,
}

/// An active buff on an agent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuffView {
    pub kind: BuffKind,
    /// Remaining ticks.
    pub remaining: f64,
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u64,
    /// Box on screen, centered on the projectile.
    pub rect: Rect,
    pub color: String,
    pub side: SideId,
    pub homing: bool,
}

/// A pickup waiting to be collected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpView {
    pub id: u64,
    pub position: Position,
    pub radius: f64,
    pub kind: PowerUpKind,
    pub symbol: char,
}

/// Running match statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsView {
    pub shots_fired: u32,
    pub projectile_hits: u32,
    pub agents_destroyed: u32,
    pub power_ups_spawned: u32,
    pub power_ups_collected: u32,
    pub match_time_secs: f64,
}
