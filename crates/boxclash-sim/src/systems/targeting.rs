//! Targeting system: every agent picks the nearest live enemy each tick.
//!
//! Distance is measured center to center. On equal distance the first agent
//! in world iteration order wins. Targets are not sticky.

use hecs::World;

use boxclash_core::components::{Agent, Targeting};
use boxclash_core::types::{Position, SideId};

use super::agent_center;

/// Candidate seen by the targeting scan.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub id: u32,
    pub side: SideId,
    pub center: Position,
}

/// Recompute every agent's target.
pub fn run(world: &mut World) {
    let contacts: Vec<Contact> = world
        .query::<(&Agent, &Position)>()
        .iter()
        .map(|(_, (agent, pos))| Contact {
            id: agent.id,
            side: agent.side,
            center: agent_center(pos),
        })
        .collect();

    for (_entity, (agent, pos, targeting)) in
        world.query_mut::<(&Agent, &Position, &mut Targeting)>()
    {
        targeting.target = nearest_enemy(agent.side, &agent_center(pos), &contacts);
    }
}

/// Id of the closest contact on a different side, if any.
pub fn nearest_enemy(side: SideId, from: &Position, contacts: &[Contact]) -> Option<u32> {
    let mut best: Option<(u32, f64)> = None;
    for contact in contacts.iter().filter(|c| c.side != side) {
        let distance = from.distance_to(&contact.center);
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((contact.id, distance));
        }
    }
    best.map(|(id, _)| id)
}
