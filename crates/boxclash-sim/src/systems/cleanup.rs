//! Cleanup system: compacts entities marked for removal during the tick.

use hecs::{Entity, World};

use boxclash_core::components::{Agent, Health};

/// Despawn everything in the buffer, plus any agent whose health has
/// reached zero. The buffer is left empty for the next tick. An entity
/// queued twice is despawned once; the second attempt is a no-op.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for (entity, (_agent, health)) in world.query_mut::<(&Agent, &Health)>() {
        if health.hp <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
