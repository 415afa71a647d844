//! Firing system: cooldown countdown and projectile spawning.
//!
//! An agent fires once its cooldown has run out and it has a target. The
//! shot is aimed at the target's current center; buffs are baked into the
//! projectile at fire time.

use hecs::World;

use boxclash_core::components::*;
use boxclash_core::constants::*;
use boxclash_core::enums::BuffKind;
use boxclash_core::events::MatchEvent;
use boxclash_core::types::{Position, SideId, TeamId, Velocity};

use super::{agent_center, agent_centers};
use crate::stats::MatchStats;

const SINGLE_SHOT: [f64; 1] = [0.0];
const TRIPLE_SHOT: [f64; 3] = [-TRIPLE_SHOT_SPREAD, 0.0, TRIPLE_SHOT_SPREAD];

/// Effective weapon parameters for an agent's current buffs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponStats {
    pub damage: f64,
    pub fire_interval: f64,
    pub homing: bool,
    /// Angular offsets from the line of sight, one per projectile.
    pub spread: &'static [f64],
}

/// Compute weapon parameters from the buff table.
pub fn weapon_stats(buffs: &Buffs) -> WeaponStats {
    WeaponStats {
        damage: if buffs.is_active(BuffKind::Damage) {
            PROJECTILE_DAMAGE * DAMAGE_BUFF_MULTIPLIER
        } else {
            PROJECTILE_DAMAGE
        },
        fire_interval: if buffs.is_active(BuffKind::FireRate) {
            FIRE_INTERVAL / FIRE_RATE_BUFF_DIVISOR
        } else {
            FIRE_INTERVAL
        },
        homing: buffs.is_active(BuffKind::Homing),
        spread: if buffs.is_active(BuffKind::TripleShot) {
            &TRIPLE_SHOT
        } else {
            &SINGLE_SHOT
        },
    }
}

/// A projectile to be spawned once the agent query is released.
struct Shot {
    team: TeamId,
    side: SideId,
    color: String,
    origin: Position,
    angle: f64,
    damage: f64,
    tracked: Option<u32>,
}

/// Run the firing system for one tick.
pub fn run(
    world: &mut World,
    next_projectile_id: &mut u64,
    events: &mut Vec<MatchEvent>,
    stats: &mut MatchStats,
    time_scale: f64,
) {
    let centers = agent_centers(world);
    let mut shots: Vec<Shot> = Vec::new();

    for (_entity, (agent, pos, weapon, targeting, buffs)) in
        world.query_mut::<(&Agent, &Position, &mut Weapon, &Targeting, &Buffs)>()
    {
        weapon.cooldown -= time_scale;

        let Some((target_id, target_center)) = targeting
            .target
            .and_then(|id| centers.get(&id).map(|c| (id, *c)))
        else {
            continue;
        };
        if weapon.cooldown > 0.0 {
            continue;
        }

        let loadout = weapon_stats(buffs);
        let origin = agent_center(pos);
        let aim = origin.angle_to(&target_center);

        for offset in loadout.spread {
            shots.push(Shot {
                team: agent.team,
                side: agent.side,
                color: agent.color.clone(),
                origin,
                angle: aim + offset,
                damage: loadout.damage,
                tracked: loadout.homing.then_some(target_id),
            });
        }
        weapon.cooldown = loadout.fire_interval;

        let count = loadout.spread.len() as u32;
        stats.shots_fired += count;
        events.push(MatchEvent::ShotFired {
            agent_id: agent.id,
            count,
        });
    }

    for shot in shots {
        let id = *next_projectile_id;
        *next_projectile_id += 1;
        world.spawn((
            Projectile {
                id,
                owner_team: shot.team,
                owner_side: shot.side,
                color: shot.color,
                damage: shot.damage,
                homing: shot.tracked.is_some(),
                tracked: shot.tracked,
            },
            shot.origin,
            Velocity::from_angle(shot.angle, PROJECTILE_SPEED),
        ));
    }
}
