//! Player commands sent from the host shell to the simulation.
//!
//! Commands are queued and consumed at the next tick boundary in arrival
//! order, so input delivered mid-frame never mutates sim state mid-tick.

use serde::{Deserialize, Serialize};

/// All host-to-engine input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// One raw pointer-motion sample in screen coordinates.
    PointerMoved { x: f64, y: f64 },
    /// Current held state of the directional movement keys.
    SetMovement { forward: bool, backward: bool },
    /// Pointer capture was (re)gained; drop the delta baseline so the next
    /// sample cannot produce a spurious jump.
    ResetPointer,
    /// Viewport aspect ratio changed (window resize).
    SetAspect { aspect: f32 },
}

/// Held directional input, replaced wholesale by `SetMovement`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveInput {
    pub forward: bool,
    pub backward: bool,
}
