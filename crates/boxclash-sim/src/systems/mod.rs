//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state. All state lives in components or is passed in.

use std::collections::HashMap;

use hecs::World;

use boxclash_core::components::Agent;
use boxclash_core::constants::AGENT_SIZE;
use boxclash_core::types::{Position, Rect};

pub mod buffs;
pub mod cleanup;
pub mod collision;
pub mod firing;
pub mod movement;
pub mod power_up_spawner;
pub mod projectile_kinematics;
pub mod snapshot;
pub mod targeting;
pub mod termination;

/// Box of an agent whose top-left corner is `pos`.
pub fn agent_rect(pos: &Position) -> Rect {
    Rect::square(*pos, AGENT_SIZE)
}

/// Center of an agent whose top-left corner is `pos`.
pub fn agent_center(pos: &Position) -> Position {
    agent_rect(pos).center()
}

/// Centers of all live agents, keyed by agent id.
///
/// Target and tracking references resolve through this map; an id that is
/// missing means the referenced agent is gone.
pub fn agent_centers(world: &World) -> HashMap<u32, Position> {
    world
        .query::<(&Agent, &Position)>()
        .iter()
        .map(|(_, (agent, pos))| (agent.id, agent_center(pos)))
        .collect()
}
