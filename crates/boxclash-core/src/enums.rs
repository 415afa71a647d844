//! Enumeration types used throughout the simulation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::setup::SetupError;
use crate::types::SideId;

/// Named obstacle layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArenaId {
    #[default]
    Empty,
    CenterPillar,
    SimpleMaze,
    Fortress,
    TwoPillars,
    AsteroidField,
}

impl ArenaId {
    pub const ALL: [ArenaId; 6] = [
        ArenaId::Empty,
        ArenaId::CenterPillar,
        ArenaId::SimpleMaze,
        ArenaId::Fortress,
        ArenaId::TwoPillars,
        ArenaId::AsteroidField,
    ];

    /// Catalog name.
    pub fn name(self) -> &'static str {
        match self {
            ArenaId::Empty => "empty",
            ArenaId::CenterPillar => "center_pillar",
            ArenaId::SimpleMaze => "simple_maze",
            ArenaId::Fortress => "fortress",
            ArenaId::TwoPillars => "two_pillars",
            ArenaId::AsteroidField => "asteroid_field",
        }
    }
}

impl FromStr for ArenaId {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArenaId::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| SetupError::UnknownArena(s.to_string()))
    }
}

/// Pickup kinds available in the power-up variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerUpKind {
    Heal,
    Damage,
    FireRate,
    HomingShot,
    SpeedBoost,
    TripleShot,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 6] = [
        PowerUpKind::Heal,
        PowerUpKind::Damage,
        PowerUpKind::FireRate,
        PowerUpKind::HomingShot,
        PowerUpKind::SpeedBoost,
        PowerUpKind::TripleShot,
    ];

    /// Catalog name.
    pub fn name(self) -> &'static str {
        match self {
            PowerUpKind::Heal => "heal",
            PowerUpKind::Damage => "damage",
            PowerUpKind::FireRate => "fire_rate",
            PowerUpKind::HomingShot => "homing_shot",
            PowerUpKind::SpeedBoost => "speed_boost",
            PowerUpKind::TripleShot => "triple_shot",
        }
    }

    /// Symbol drawn on the pickup.
    pub fn symbol(self) -> char {
        match self {
            PowerUpKind::Heal => '+',
            PowerUpKind::Damage => 'D',
            PowerUpKind::FireRate => 'F',
            PowerUpKind::HomingShot => 'H',
            PowerUpKind::SpeedBoost => 'S',
            PowerUpKind::TripleShot => 'T',
        }
    }

    /// The timed buff granted by this pickup. Heal is instantaneous.
    pub fn buff(self) -> Option<BuffKind> {
        match self {
            PowerUpKind::Heal => None,
            PowerUpKind::Damage => Some(BuffKind::Damage),
            PowerUpKind::FireRate => Some(BuffKind::FireRate),
            PowerUpKind::HomingShot => Some(BuffKind::Homing),
            PowerUpKind::SpeedBoost => Some(BuffKind::SpeedBoost),
            PowerUpKind::TripleShot => Some(BuffKind::TripleShot),
        }
    }
}

impl FromStr for PowerUpKind {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PowerUpKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| SetupError::UnknownPowerUp(s.to_string()))
    }
}

/// Timed combat modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuffKind {
    Damage,
    FireRate,
    Homing,
    SpeedBoost,
    TripleShot,
}

impl BuffKind {
    pub const ALL: [BuffKind; 5] = [
        BuffKind::Damage,
        BuffKind::FireRate,
        BuffKind::Homing,
        BuffKind::SpeedBoost,
        BuffKind::TripleShot,
    ];
}

/// Match phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No match configured yet, or returned to the menu.
    #[default]
    Setup,
    Active,
    Paused,
    GameOver,
}

/// Terminal outcome of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchResult {
    /// Every surviving agent belongs to `side`.
    Victory {
        side: SideId,
        /// Names of all teams fighting for the winning side.
        team_names: Vec<String>,
    },
    /// No agents survived.
    Draw,
}
