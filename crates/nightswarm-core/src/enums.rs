//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Session lifecycle state (top-level).
///
/// `Ended` is terminal and absorbing: the engine stops simulating and a new
/// session requires constructing a fresh engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// The session is live and ticking.
    #[default]
    Running,
    /// A pursuer reached the viewer. The host decides what happens next
    /// (restart, show a screen, exit); the engine never exits the process.
    Ended,
}
