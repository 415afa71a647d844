//! Termination check: the match ends when at most one side remains.

use hecs::World;

use boxclash_core::components::Agent;
use boxclash_core::enums::MatchResult;
use boxclash_core::setup::MatchSetup;
use boxclash_core::types::SideId;

/// Sides with at least one live agent, in world iteration order.
pub fn surviving_sides(world: &World) -> Vec<SideId> {
    let mut sides = Vec::new();
    for (_entity, agent) in world.query::<&Agent>().iter() {
        if !sides.contains(&agent.side) {
            sides.push(agent.side);
        }
    }
    sides
}

/// Evaluate the end condition. `None` means the match goes on.
///
/// No survivors is a draw. A single surviving side wins, credited to every
/// team on that side in the setup roster.
pub fn evaluate(world: &World, setup: Option<&MatchSetup>) -> Option<MatchResult> {
    match surviving_sides(world).as_slice() {
        [] => Some(MatchResult::Draw),
        [side] => Some(MatchResult::Victory {
            side: *side,
            team_names: setup.map(|s| s.team_names(*side)).unwrap_or_default(),
        }),
        _ => None,
    }
}
