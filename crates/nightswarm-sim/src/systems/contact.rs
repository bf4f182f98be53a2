//! Terminal contact detection — viewer/pursuer proximity.

use glam::Vec3;
use hecs::World;

use nightswarm_core::components::{Position, Pursuer, Pursuit};

/// Details of a terminal contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactReport {
    /// Spawn id of the pursuer that reached the viewer.
    pub id: u32,
    /// Center-to-center distance at the moment of detection.
    pub distance: f32,
}

/// Return the first live pursuer strictly inside `radius` of `target`.
///
/// A pursuer sitting exactly at the radius does not count. The check
/// short-circuits on the first hit; which pursuer is reported when several
/// arrive in the same tick is arbitrary, and the outcome is the same either
/// way. Dead pursuers are skipped.
pub fn check(world: &World, target: Vec3, radius: f32) -> Option<ContactReport> {
    let mut query = world.query::<(&Pursuer, &Position, &Pursuit)>();
    for (_entity, (pursuer, position, pursuit)) in query.iter() {
        if !pursuit.alive {
            continue;
        }
        let distance = position.0.distance(target);
        if distance < radius {
            return Some(ContactReport {
                id: pursuer.id,
                distance,
            });
        }
    }
    None
}
