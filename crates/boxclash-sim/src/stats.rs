//! Running match statistics kept by the engine.

/// Counters accumulated over one match. Reset on rematch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchStats {
    pub shots_fired: u32,
    pub projectile_hits: u32,
    pub agents_destroyed: u32,
    pub power_ups_spawned: u32,
    pub power_ups_collected: u32,
}
