//! Projectile kinematics: homing retargeting.
//!
//! Homing projectiles turn toward their tracked agent at a bounded rate.
//! Once the tracked agent is gone the projectile flies straight on.

use hecs::World;

use boxclash_core::components::Projectile;
use boxclash_core::constants::HOMING_TURN_RATE;
use boxclash_core::types::{Position, Velocity};

use super::agent_centers;
use crate::guidance::steer_toward;

/// Steer every homing projectile for one tick.
pub fn run(world: &mut World, time_scale: f64) {
    let centers = agent_centers(world);
    let max_turn = HOMING_TURN_RATE * time_scale;

    for (_entity, (projectile, pos, vel)) in
        world.query_mut::<(&mut Projectile, &Position, &mut Velocity)>()
    {
        if !projectile.homing {
            continue;
        }
        let Some(tracked) = projectile.tracked else {
            continue;
        };

        match centers.get(&tracked) {
            Some(target) => *vel = steer_toward(pos, vel, target, max_turn),
            None => projectile.tracked = None,
        }
    }
}
