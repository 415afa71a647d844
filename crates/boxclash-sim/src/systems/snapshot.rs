//! Snapshot system: queries the ECS world and builds a complete MatchSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use boxclash_core::arena::Arena;
use boxclash_core::components::*;
use boxclash_core::constants::{HP_MAX, POWERUP_RADIUS, PROJECTILE_SIZE};
use boxclash_core::enums::*;
use boxclash_core::events::MatchEvent;
use boxclash_core::state::*;
use boxclash_core::types::{Position, Rect, SimTime};

use super::agent_rect;
use crate::stats::MatchStats;

/// Build a complete MatchSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    arena: &Arena,
    time: &SimTime,
    phase: GamePhase,
    time_scale: f64,
    result: Option<&MatchResult>,
    stats: &MatchStats,
    events: Vec<MatchEvent>,
) -> MatchSnapshot {
    MatchSnapshot {
        time: *time,
        phase,
        time_scale,
        arena: build_arena(arena),
        agents: build_agents(world),
        projectiles: build_projectiles(world),
        power_ups: build_power_ups(world),
        result: result.cloned(),
        stats: StatsView {
            shots_fired: stats.shots_fired,
            projectile_hits: stats.projectile_hits,
            agents_destroyed: stats.agents_destroyed,
            power_ups_spawned: stats.power_ups_spawned,
            power_ups_collected: stats.power_ups_collected,
            match_time_secs: time.elapsed_secs,
        },
        events,
    }
}

fn build_arena(arena: &Arena) -> ArenaView {
    ArenaView {
        id: arena.id,
        width: arena.width,
        height: arena.height,
        obstacles: arena.obstacles.clone(),
    }
}

/// Build AgentView list, sorted by agent id.
fn build_agents(world: &World) -> Vec<AgentView> {
    let mut agents: Vec<AgentView> = world
        .query::<(&Agent, &Position, &Health, &Targeting, &Buffs)>()
        .iter()
        .map(|(_, (agent, pos, health, targeting, buffs))| AgentView {
            id: agent.id,
            team: agent.team,
            side: agent.side,
            rect: agent_rect(pos),
            color: agent.color.clone(),
            hp: health.hp,
            health_fraction: (health.hp / HP_MAX).clamp(0.0, 1.0),
            target: targeting.target,
            buffs: BuffKind::ALL
                .into_iter()
                .filter(|kind| buffs.is_active(*kind))
                .map(|kind| BuffView {
                    kind,
                    remaining: buffs.remaining(kind),
                })
                .collect(),
        })
        .collect();

    agents.sort_by_key(|a| a.id);
    agents
}

/// Build ProjectileView list, sorted by projectile id.
fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(_, (projectile, pos))| ProjectileView {
            id: projectile.id,
            rect: Rect::centered(*pos, PROJECTILE_SIZE),
            color: projectile.color.clone(),
            side: projectile.owner_side,
            homing: projectile.homing,
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}

/// Build PowerUpView list, sorted by power-up id.
fn build_power_ups(world: &World) -> Vec<PowerUpView> {
    let mut power_ups: Vec<PowerUpView> = world
        .query::<(&PowerUp, &Position)>()
        .iter()
        .map(|(_, (power_up, pos))| PowerUpView {
            id: power_up.id,
            position: *pos,
            radius: POWERUP_RADIUS,
            kind: power_up.kind,
            symbol: power_up.kind.symbol(),
        })
        .collect();

    power_ups.sort_by_key(|p| p.id);
    power_ups
}
