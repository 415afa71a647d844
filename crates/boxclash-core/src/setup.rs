//! Match setup: the roster, arena and power-up selection a match starts from.
//!
//! Validation happens here, before the engine accepts a setup. The engine
//! itself assumes a valid setup.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::MAX_AGENTS;
use crate::enums::{ArenaId, PowerUpKind};
use crate::types::{SideId, TeamId};

/// Color of the blue team in the classic two-team match.
pub const BLUE_COLOR: &str = "#3498db";
/// Color of the red team in the classic two-team match.
pub const RED_COLOR: &str = "#e74c3c";

/// One team roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamConfig {
    pub id: TeamId,
    pub name: String,
    /// Display color, e.g. `#3498db`.
    pub color: String,
    /// Number of agents spawned for this team.
    pub members: u32,
    pub side: SideId,
}

/// Everything needed to (re)start a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSetup {
    pub teams: Vec<TeamConfig>,
    #[serde(default)]
    pub arena: ArenaId,
    /// `None` plays the classic mode. `Some` enables the power-up variant
    /// with the listed kinds.
    #[serde(default)]
    pub power_ups: Option<Vec<PowerUpKind>>,
}

/// Reasons a setup is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("a match needs at least two sides, found {found}")]
    NotEnoughSides { found: usize },
    #[error("team `{name}` has no members")]
    EmptyTeam { name: String },
    #[error("team id {0} is used by more than one team")]
    DuplicateTeamId(u32),
    #[error("power-up mode needs at least one enabled power-up kind")]
    NoPowerUpsEnabled,
    #[error("{count} agents requested, the limit is {max}")]
    TooManyAgents { count: u32, max: u32 },
    #[error("unknown arena `{0}`")]
    UnknownArena(String),
    #[error("unknown power-up kind `{0}`")]
    UnknownPowerUp(String),
}

impl MatchSetup {
    /// The classic blue-versus-red match.
    pub fn two_teams(blue: u32, red: u32, arena: ArenaId) -> Self {
        Self {
            teams: vec![
                TeamConfig {
                    id: TeamId(0),
                    name: "Blue Team".into(),
                    color: BLUE_COLOR.into(),
                    members: blue,
                    side: SideId(0),
                },
                TeamConfig {
                    id: TeamId(1),
                    name: "Red Team".into(),
                    color: RED_COLOR.into(),
                    members: red,
                    side: SideId(1),
                },
            ],
            arena,
            power_ups: None,
        }
    }

    /// Enable the power-up variant. Repeated kinds are kept once.
    pub fn with_power_ups(mut self, kinds: impl IntoIterator<Item = PowerUpKind>) -> Self {
        let mut enabled: Vec<PowerUpKind> = Vec::new();
        for kind in kinds {
            if !enabled.contains(&kind) {
                enabled.push(kind);
            }
        }
        self.power_ups = Some(enabled);
        self
    }

    /// Check the invariants the engine relies on.
    pub fn validate(&self) -> Result<(), SetupError> {
        let mut ids = HashSet::new();
        for team in &self.teams {
            if !ids.insert(team.id) {
                return Err(SetupError::DuplicateTeamId(team.id.0));
            }
            if team.members == 0 {
                return Err(SetupError::EmptyTeam {
                    name: team.name.clone(),
                });
            }
        }

        let sides = self.sides();
        if sides.len() < 2 {
            return Err(SetupError::NotEnoughSides { found: sides.len() });
        }

        let count = self.total_agents();
        if count > MAX_AGENTS {
            return Err(SetupError::TooManyAgents {
                count,
                max: MAX_AGENTS,
            });
        }

        if matches!(&self.power_ups, Some(kinds) if kinds.is_empty()) {
            return Err(SetupError::NoPowerUpsEnabled);
        }

        Ok(())
    }

    /// Distinct sides in order of first appearance.
    pub fn sides(&self) -> Vec<SideId> {
        let mut sides = Vec::new();
        for team in &self.teams {
            if !sides.contains(&team.side) {
                sides.push(team.side);
            }
        }
        sides
    }

    /// Names of every team fighting for `side`, in roster order.
    pub fn team_names(&self, side: SideId) -> Vec<String> {
        self.teams
            .iter()
            .filter(|t| t.side == side)
            .map(|t| t.name.clone())
            .collect()
    }

    /// Total agents across all teams.
    pub fn total_agents(&self) -> u32 {
        self.teams.iter().map(|t| t.members).sum()
    }

    /// Enabled power-up kinds, empty in classic mode.
    pub fn enabled_power_ups(&self) -> &[PowerUpKind] {
        self.power_ups.as_deref().unwrap_or(&[])
    }
}
