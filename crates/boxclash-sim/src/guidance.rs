//! Homing guidance: bounded-rate steering toward a tracked point.
//!
//! The heading turns toward the line-of-sight bearing by at most the turn
//! limit per tick, taking the shorter way around. Speed is preserved.

use std::f64::consts::{PI, TAU};

use glam::DVec2;

use boxclash_core::types::{Position, Velocity};

/// Wrap an angle into `[-π, π)`.
pub fn wrap_angle(angle: f64) -> f64 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Rotate `heading` toward `bearing` by at most `max_turn` radians.
pub fn turn_toward(heading: f64, bearing: f64, max_turn: f64) -> f64 {
    let diff = wrap_angle(bearing - heading);
    if diff.abs() <= max_turn {
        bearing
    } else {
        heading + max_turn * diff.signum()
    }
}

/// New velocity for a projectile at `pos` steering toward `target`.
///
/// A stationary projectile, or one sitting on its target, keeps its velocity.
pub fn steer_toward(pos: &Position, vel: &Velocity, target: &Position, max_turn: f64) -> Velocity {
    let velocity = vel.to_vec();
    let line_of_sight = target.to_vec() - pos.to_vec();
    let speed = velocity.length();
    if speed <= f64::EPSILON || line_of_sight.length() <= f64::EPSILON {
        return *vel;
    }

    let bearing = line_of_sight.y.atan2(line_of_sight.x);
    let heading = turn_toward(vel.heading(), bearing, max_turn);
    (DVec2::from_angle(heading) * speed).into()
}
