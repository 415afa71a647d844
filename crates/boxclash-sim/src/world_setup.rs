//! Entity spawn factories for setting up a match.
//!
//! Places every team's agents inside its side's spawn column, clear of
//! obstacles, and finds clear spots for power-ups.

use hecs::World;
use log::warn;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use boxclash_core::arena::Arena;
use boxclash_core::components::*;
use boxclash_core::constants::*;
use boxclash_core::geometry::overlaps_any;
use boxclash_core::setup::MatchSetup;
use boxclash_core::types::{Position, Rect, SideId, TeamId, Velocity};

/// Spawn every agent of every team. Agent ids are assigned in roster order.
pub fn spawn_teams(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    arena: &Arena,
    setup: &MatchSetup,
    next_agent_id: &mut u32,
) {
    let sides = setup.sides();

    for team in &setup.teams {
        let side_index = sides.iter().position(|s| *s == team.side).unwrap_or(0);
        let column = spawn_column(arena, side_index, sides.len());

        for _ in 0..team.members {
            let position = find_clear_position(rng, arena, column, AGENT_SIZE);
            let heading = rng.gen_range(0.0..std::f64::consts::TAU);
            let cooldown = rng.gen_range(0.0..FIRE_INTERVAL);

            spawn_agent(
                world,
                *next_agent_id,
                team.id,
                team.side,
                &team.color,
                position,
                Velocity::from_angle(heading, AGENT_SPEED),
                cooldown,
            );
            *next_agent_id += 1;
        }
    }
}

/// Spawn a single agent at full health.
#[allow(clippy::too_many_arguments)]
pub fn spawn_agent(
    world: &mut World,
    id: u32,
    team: TeamId,
    side: SideId,
    color: &str,
    position: Position,
    velocity: Velocity,
    cooldown: f64,
) -> hecs::Entity {
    world.spawn((
        Agent {
            id,
            team,
            side,
            color: color.to_string(),
        },
        position,
        velocity,
        Health { hp: HP_MAX },
        Weapon { cooldown },
        Targeting::default(),
        Buffs::default(),
    ))
}

/// Range of top-left corners an agent of side `side_index` may spawn at.
///
/// With two sides this is the left and right quarter of the arena. More
/// sides spread their columns evenly across the width.
pub fn spawn_column(arena: &Arena, side_index: usize, side_count: usize) -> Rect {
    let column_width = arena.width * SPAWN_COLUMN_FRACTION;
    let x0 = if side_count <= 1 {
        0.0
    } else {
        side_index as f64 * (arena.width - column_width) / (side_count - 1) as f64
    };

    Rect::new(
        x0,
        0.0,
        (column_width - AGENT_SIZE).max(0.0),
        (arena.height - AGENT_SIZE).max(0.0),
    )
}

/// Find a top-left corner inside `region` where a square of side `size`
/// overlaps no obstacle.
///
/// Draws uniformly at random up to `PLACEMENT_MAX_ATTEMPTS` times, then
/// scans a grid over the region, then over the whole arena. If all of that
/// fails the region's origin is returned.
pub fn find_clear_position(
    rng: &mut ChaCha8Rng,
    arena: &Arena,
    region: Rect,
    size: f64,
) -> Position {
    for _ in 0..PLACEMENT_MAX_ATTEMPTS {
        let candidate = Position::new(
            rng.gen_range(region.x..=region.right()),
            rng.gen_range(region.y..=region.bottom()),
        );
        if !overlaps_any(&Rect::square(candidate, size), &arena.obstacles) {
            return candidate;
        }
    }

    warn!(
        "random placement failed {PLACEMENT_MAX_ATTEMPTS} times in {region:?}, scanning for a clear spot"
    );

    let whole = Rect::new(
        0.0,
        0.0,
        (arena.width - size).max(0.0),
        (arena.height - size).max(0.0),
    );
    grid_scan(region, size, &arena.obstacles)
        .or_else(|| grid_scan(whole, size, &arena.obstacles))
        .unwrap_or(Position::new(region.x, region.y))
}

/// First clear top-left corner on a `PLACEMENT_GRID_STEP` grid over `region`.
fn grid_scan(region: Rect, size: f64, obstacles: &[Rect]) -> Option<Position> {
    let mut y = region.y;
    while y <= region.bottom() {
        let mut x = region.x;
        while x <= region.right() {
            let candidate = Position::new(x, y);
            if !overlaps_any(&Rect::square(candidate, size), obstacles) {
                return Some(candidate);
            }
            x += PLACEMENT_GRID_STEP;
        }
        y += PLACEMENT_GRID_STEP;
    }
    None
}

/// Random power-up center whose footprint is clear of obstacles.
pub fn find_power_up_position(rng: &mut ChaCha8Rng, arena: &Arena) -> Position {
    let size = POWERUP_RADIUS * 2.0;
    let region = Rect::new(
        0.0,
        0.0,
        (arena.width - size).max(0.0),
        (arena.height - size).max(0.0),
    );
    let corner = find_clear_position(rng, arena, region, size);
    Position::new(corner.x + POWERUP_RADIUS, corner.y + POWERUP_RADIUS)
}

/// Spawn a power-up entity centered on `center`.
pub fn spawn_power_up(
    world: &mut World,
    id: u64,
    kind: boxclash_core::enums::PowerUpKind,
    center: Position,
) -> hecs::Entity {
    world.spawn((PowerUp { id, kind }, center))
}
