//! Runtime commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// Host controls available while a match is running.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchCommand {
    /// Freeze the simulation. No entity state changes while paused.
    Pause,
    /// Resume a paused simulation.
    Resume,
    /// Pause if running, resume if paused.
    TogglePause,
    /// Set the time scale. Clamped to `[TIME_SCALE_MIN, TIME_SCALE_MAX]`.
    SetTimeScale { scale: f64 },
    /// Restart from a fresh layout of the stored setup. Also works from the
    /// setup phase after `ReturnToMenu`.
    Rematch,
    /// Drop the match and return to the setup phase.
    ReturnToMenu,
}
