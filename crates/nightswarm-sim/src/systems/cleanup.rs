//! Cleanup system: reclaims pursuers whose liveness flag was cleared.

use hecs::{Entity, World};

use nightswarm_core::components::Pursuit;

/// Remove pursuers whose liveness flag is false, bounding the population
/// as waves accumulate. Uses a pre-allocated buffer to avoid per-tick
/// allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, pursuit) in world.query_mut::<&Pursuit>() {
        if !pursuit.alive {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
