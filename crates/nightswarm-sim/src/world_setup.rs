//! Spawn factories for the pursuer population.

use glam::Vec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use nightswarm_core::components::{Position, Pursuer, Pursuit};
use nightswarm_core::constants::{
    PURSUER_SPAWN_HEIGHT, PURSUER_SPEED, SPAWN_BAND_HALF_WIDTH, SPAWN_DEPTH_BASE,
    SPAWN_DEPTH_JITTER,
};

/// Spawn a wave of `count` pursuers. A count of zero is a no-op.
pub fn spawn_wave(world: &mut World, rng: &mut ChaCha8Rng, next_id: &mut u32, count: u32) {
    for _ in 0..count {
        spawn_pursuer(world, rng, next_id);
    }
}

/// Spawn a single pursuer in the far band.
///
/// The lateral position is uniform across the band; the depth sits behind
/// the base plane by an extra random offset, so a fresh spawn always starts
/// well outside the contact radius.
pub fn spawn_pursuer(world: &mut World, rng: &mut ChaCha8Rng, next_id: &mut u32) -> Entity {
    let x = rng.gen_range(-SPAWN_BAND_HALF_WIDTH..SPAWN_BAND_HALF_WIDTH);
    let z = SPAWN_DEPTH_BASE - rng.gen_range(0.0..SPAWN_DEPTH_JITTER);

    let id = *next_id;
    *next_id += 1;

    world.spawn((
        Pursuer { id },
        Position(Vec3::new(x, PURSUER_SPAWN_HEIGHT, z)),
        Pursuit {
            speed: PURSUER_SPEED,
            alive: true,
        },
    ))
}

/// Spawn a pursuer at an exact position, bypassing the random band.
/// Scenario tests use this to set up precise geometry.
#[cfg(test)]
pub fn spawn_pursuer_at(
    world: &mut World,
    next_id: &mut u32,
    position: Vec3,
    speed: f32,
) -> Entity {
    let id = *next_id;
    *next_id += 1;

    world.spawn((
        Pursuer { id },
        Position(position),
        Pursuit { speed, alive: true },
    ))
}
