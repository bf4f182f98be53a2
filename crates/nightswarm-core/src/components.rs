//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Behavior lives in the sim systems, not here.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Marks an entity as a pursuer and carries its stable identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pursuer {
    /// Monotonic spawn index, unique within a session.
    pub id: u32,
}

/// World-space position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// Straight-line pursuit state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pursuit {
    /// Closing speed in world units per second.
    pub speed: f32,
    /// Dead pursuers are skipped by movement and contact checks and are
    /// reclaimed by the cleanup system.
    pub alive: bool,
}
