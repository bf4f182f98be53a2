//! Straight-line pursuit toward the viewer.

use glam::Vec3;
use hecs::World;

use nightswarm_core::components::{Position, Pursuit};

/// Advance every live pursuer toward `target` by `speed * dt`.
///
/// Pursuers move along the exact line to the target with no avoidance and
/// no pursuer-pursuer collision; they pass through each other freely. A
/// pursuer already at the target stays put (zero direction, no NaN). Dead
/// pursuers never move.
pub fn run(world: &mut World, target: Vec3, dt: f32) {
    for (_entity, (position, pursuit)) in world.query_mut::<(&mut Position, &Pursuit)>() {
        if !pursuit.alive {
            continue;
        }
        let direction = (target - position.0).normalize_or_zero();
        position.0 += direction * pursuit.speed * dt;
    }
}
