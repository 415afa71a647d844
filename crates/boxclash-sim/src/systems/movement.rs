//! Kinematic integration with wall and obstacle bounces.
//!
//! Agents: position += velocity × speed multiplier × time scale, then clamp
//! to the arena edges and push out of every overlapped obstacle along the
//! axis of least penetration, flipping velocity on that axis. Obstacles are
//! resolved one after another; there is no global solve.

use hecs::World;

use boxclash_core::arena::Arena;
use boxclash_core::components::{Agent, Buffs, Projectile};
use boxclash_core::constants::{AGENT_SIZE, SPEED_BUFF_MULTIPLIER};
use boxclash_core::enums::BuffKind;
use boxclash_core::geometry::{penetration, push_out, Axis};
use boxclash_core::types::{Position, Rect, Velocity};

/// Move every agent one tick and resolve wall and obstacle contacts.
pub fn run_agents(world: &mut World, arena: &Arena, time_scale: f64) {
    for (_entity, (_agent, pos, vel, buffs)) in
        world.query_mut::<(&Agent, &mut Position, &mut Velocity, &Buffs)>()
    {
        let multiplier = if buffs.is_active(BuffKind::SpeedBoost) {
            SPEED_BUFF_MULTIPLIER
        } else {
            1.0
        };

        pos.x += vel.x * multiplier * time_scale;
        pos.y += vel.y * multiplier * time_scale;

        bounce_off_walls(pos, vel, arena);
        resolve_obstacles(pos, vel, &arena.obstacles);
    }
}

/// Move every projectile one tick in a straight line.
pub fn run_projectiles(world: &mut World, time_scale: f64) {
    for (_entity, (_projectile, pos, vel)) in
        world.query_mut::<(&Projectile, &mut Position, &Velocity)>()
    {
        pos.x += vel.x * time_scale;
        pos.y += vel.y * time_scale;
    }
}

/// Clamp an agent box to the arena and flip velocity on each touched edge.
pub fn bounce_off_walls(pos: &mut Position, vel: &mut Velocity, arena: &Arena) {
    if pos.x <= 0.0 {
        pos.x = 0.0;
        vel.x = -vel.x;
    } else if pos.x + AGENT_SIZE >= arena.width {
        pos.x = arena.width - AGENT_SIZE;
        vel.x = -vel.x;
    }

    if pos.y <= 0.0 {
        pos.y = 0.0;
        vel.y = -vel.y;
    } else if pos.y + AGENT_SIZE >= arena.height {
        pos.y = arena.height - AGENT_SIZE;
        vel.y = -vel.y;
    }
}

/// Push an agent box out of each overlapped obstacle in turn.
pub fn resolve_obstacles(pos: &mut Position, vel: &mut Velocity, obstacles: &[Rect]) {
    for obstacle in obstacles {
        let agent = Rect::square(*pos, AGENT_SIZE);
        let Some(pen) = penetration(&agent, obstacle) else {
            continue;
        };

        *pos = push_out(&agent, obstacle, pen.axis);
        match pen.axis {
            Axis::X => vel.x = -vel.x,
            Axis::Y => vel.y = -vel.y,
        }
    }
}
