//! Events emitted by the simulation for host UI and audio feedback.

use serde::{Deserialize, Serialize};

/// Discrete occurrences surfaced through the frame snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// A wave of pursuers entered the world.
    WaveSpawned { wave_index: u32, count: u32 },
    /// A live pursuer closed inside the contact radius; the session is over.
    Contact { pursuer_id: u32, distance: f32 },
}
