//! Frame snapshot — the complete visible state handed to the host each tick.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::SessionStatus;
use crate::events::SessionEvent;
use crate::types::SimTime;

/// Complete per-tick view of the session for the render/host layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub status: SessionStatus,
    pub camera: CameraView,
    /// Live pursuers, sorted by spawn id.
    pub agents: Vec<AgentView>,
    /// Events raised during this tick.
    pub events: Vec<SessionEvent>,
}

/// Camera pose and transforms for draw submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CameraView {
    pub position: Vec3,
    pub yaw_deg: f32,
    pub pitch_deg: f32,
    /// World-to-camera transform.
    pub view: Mat4,
    /// Camera-to-clip transform.
    pub projection: Mat4,
}

/// One live pursuer as the render layer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentView {
    pub id: u32,
    pub position: Vec3,
    /// Model (translation) transform for the unit-cube mesh.
    pub model: Mat4,
}
