//! Combat collision system.
//!
//! Runs after all movement, in this order:
//! 1. projectile vs agent (first enemy hit only, friendly fire excluded)
//! 2. projectile vs obstacle
//! 3. agent vs power-up
//! 4. agent vs agent, wounded agents only
//! 5. projectiles outside the arena
//!
//! Entities are copied out of the world, resolved, and written back. Removals
//! are only marked here; the despawn buffer is compacted by `cleanup`.

use hecs::{Entity, World};
use log::debug;

use boxclash_core::arena::Arena;
use boxclash_core::components::*;
use boxclash_core::constants::{HP_MAX, POWERUP_RADIUS};
use boxclash_core::events::MatchEvent;
use boxclash_core::geometry::{penetration, split_apart};
use boxclash_core::types::{Position, Rect, SideId, Velocity};

use super::agent_rect;
use super::movement::{bounce_off_walls, resolve_obstacles};
use crate::stats::MatchStats;

/// Working copy of an agent for the collision passes.
#[derive(Debug, Clone)]
struct AgentState {
    entity: Entity,
    id: u32,
    side: SideId,
    pos: Position,
    vel: Velocity,
    hp: f64,
    dead: bool,
}

/// Working copy of a projectile for the collision passes.
#[derive(Debug, Clone)]
struct ProjectileState {
    entity: Entity,
    pos: Position,
    owner_side: SideId,
    damage: f64,
    removed: bool,
}

/// Run every collision pass for one tick.
pub fn run(
    world: &mut World,
    arena: &Arena,
    events: &mut Vec<MatchEvent>,
    stats: &mut MatchStats,
    despawn_buffer: &mut Vec<Entity>,
) {
    let mut agents: Vec<AgentState> = world
        .query::<(&Agent, &Position, &Velocity, &Health)>()
        .iter()
        .map(|(entity, (agent, pos, vel, health))| AgentState {
            entity,
            id: agent.id,
            side: agent.side,
            pos: *pos,
            vel: *vel,
            hp: health.hp,
            dead: health.hp <= 0.0,
        })
        .collect();

    let mut projectiles: Vec<ProjectileState> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(entity, (projectile, pos))| ProjectileState {
            entity,
            pos: *pos,
            owner_side: projectile.owner_side,
            damage: projectile.damage,
            removed: false,
        })
        .collect();

    projectiles_vs_agents(&mut projectiles, &mut agents, events, stats);
    projectiles_vs_obstacles(&mut projectiles, &arena.obstacles);
    agents_vs_power_ups(world, &mut agents, events, stats, despawn_buffer);
    agents_vs_agents(&mut agents, arena);
    projectiles_out_of_bounds(&mut projectiles, arena);

    for projectile in projectiles.iter().filter(|p| p.removed) {
        despawn_buffer.push(projectile.entity);
    }

    for agent in &agents {
        if let Ok(mut health) = world.get::<&mut Health>(agent.entity) {
            health.hp = agent.hp;
        }
        if agent.dead {
            despawn_buffer.push(agent.entity);
            continue;
        }
        if let Ok(mut pos) = world.get::<&mut Position>(agent.entity) {
            *pos = agent.pos;
        }
        if let Ok(mut vel) = world.get::<&mut Velocity>(agent.entity) {
            *vel = agent.vel;
        }
    }
}

/// Each projectile damages at most one live enemy whose box contains it.
fn projectiles_vs_agents(
    projectiles: &mut [ProjectileState],
    agents: &mut [AgentState],
    events: &mut Vec<MatchEvent>,
    stats: &mut MatchStats,
) {
    for projectile in projectiles.iter_mut().filter(|p| !p.removed) {
        let hit = agents.iter_mut().find(|a| {
            !a.dead && a.side != projectile.owner_side && agent_rect(&a.pos).contains_point(&projectile.pos)
        });
        let Some(agent) = hit else {
            continue;
        };

        agent.hp = (agent.hp - projectile.damage).max(0.0);
        projectile.removed = true;
        stats.projectile_hits += 1;
        events.push(MatchEvent::AgentHit {
            agent_id: agent.id,
            damage: projectile.damage,
            remaining_hp: agent.hp,
        });

        if agent.hp <= 0.0 {
            agent.dead = true;
            stats.agents_destroyed += 1;
            debug!("agent {} ({}) destroyed", agent.id, agent.side);
            events.push(MatchEvent::AgentDestroyed {
                agent_id: agent.id,
                side: agent.side,
            });
        }
    }
}

/// Projectiles whose center is inside an obstacle are removed.
fn projectiles_vs_obstacles(projectiles: &mut [ProjectileState], obstacles: &[Rect]) {
    for projectile in projectiles.iter_mut().filter(|p| !p.removed) {
        if obstacles.iter().any(|o| o.contains_point(&projectile.pos)) {
            projectile.removed = true;
        }
    }
}

/// Each power-up goes to the first live agent whose box overlaps its footprint.
fn agents_vs_power_ups(
    world: &mut World,
    agents: &mut [AgentState],
    events: &mut Vec<MatchEvent>,
    stats: &mut MatchStats,
    despawn_buffer: &mut Vec<Entity>,
) {
    let power_ups: Vec<(Entity, PowerUp, Position)> = world
        .query::<(&PowerUp, &Position)>()
        .iter()
        .map(|(entity, (power_up, pos))| (entity, *power_up, *pos))
        .collect();

    for (entity, power_up, center) in power_ups {
        let footprint = Rect::centered(center, POWERUP_RADIUS * 2.0);
        let Some(agent) = agents
            .iter_mut()
            .find(|a| !a.dead && agent_rect(&a.pos).overlaps(&footprint))
        else {
            continue;
        };

        if let Ok(mut buffs) = world.get::<&mut Buffs>(agent.entity) {
            super::buffs::apply_power_up(&mut agent.hp, &mut buffs, power_up.kind);
        }
        despawn_buffer.push(entity);
        stats.power_ups_collected += 1;
        debug!("agent {} collected {:?}", agent.id, power_up.kind);
        events.push(MatchEvent::PowerUpCollected {
            power_up_id: power_up.id,
            agent_id: agent.id,
            kind: power_up.kind,
        });
    }
}

/// Soft push-apart between overlapping wounded agents. Both agents reverse
/// and each moves half the penetration depth. Full-health agents pass
/// through each other. A pushed agent is re-settled against walls and
/// obstacles so it never ends the tick outside the arena or inside cover.
fn agents_vs_agents(agents: &mut [AgentState], arena: &Arena) {
    for j in 1..agents.len() {
        let (left, right) = agents.split_at_mut(j);
        let b = &mut right[0];
        for a in left.iter_mut() {
            if a.dead || b.dead || a.hp >= HP_MAX || b.hp >= HP_MAX {
                continue;
            }

            let ra = agent_rect(&a.pos);
            let rb = agent_rect(&b.pos);
            let Some(pen) = penetration(&ra, &rb) else {
                continue;
            };

            let (da, db) = split_apart(&ra, &rb, pen);
            a.pos.x += da.x;
            a.pos.y += da.y;
            b.pos.x += db.x;
            b.pos.y += db.y;
            a.vel = Velocity::new(-a.vel.x, -a.vel.y);
            b.vel = Velocity::new(-b.vel.x, -b.vel.y);

            settle(a, arena);
            settle(b, arena);
        }
    }
}

fn settle(agent: &mut AgentState, arena: &Arena) {
    bounce_off_walls(&mut agent.pos, &mut agent.vel, arena);
    resolve_obstacles(&mut agent.pos, &mut agent.vel, &arena.obstacles);
}

/// Projectiles whose center has left `[0, width] × [0, height]` are removed.
fn projectiles_out_of_bounds(projectiles: &mut [ProjectileState], arena: &Arena) {
    for projectile in projectiles.iter_mut().filter(|p| !p.removed) {
        let p = projectile.pos;
        if p.x < 0.0 || p.x > arena.width || p.y < 0.0 || p.y > arena.height {
            projectile.removed = true;
        }
    }
}
