//! Snapshot system — queries the world and builds the per-tick
//! [`FrameSnapshot`]. Read-only over the world; it never mutates anything.

use glam::Mat4;
use hecs::World;

use nightswarm_core::components::{Position, Pursuer, Pursuit};
use nightswarm_core::enums::SessionStatus;
use nightswarm_core::events::SessionEvent;
use nightswarm_core::state::{AgentView, CameraView, FrameSnapshot};
use nightswarm_core::types::{SimTime, ViewerState};

/// Build the complete snapshot for the current tick. `events` is the batch
/// drained from the engine for this tick; ownership moves into the snapshot.
pub fn build(
    world: &World,
    time: &SimTime,
    status: SessionStatus,
    viewer: &ViewerState,
    events: Vec<SessionEvent>,
) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        status,
        camera: build_camera(viewer),
        agents: build_agents(world),
        events,
    }
}

fn build_camera(viewer: &ViewerState) -> CameraView {
    CameraView {
        position: viewer.position,
        yaw_deg: viewer.yaw_deg,
        pitch_deg: viewer.pitch_deg,
        view: viewer.view_matrix(),
        projection: viewer.projection_matrix(),
    }
}

/// One view per live pursuer, sorted by spawn id so output order never
/// depends on world iteration order.
fn build_agents(world: &World) -> Vec<AgentView> {
    let mut agents: Vec<AgentView> = world
        .query::<(&Pursuer, &Position, &Pursuit)>()
        .iter()
        .filter(|(_, (_, _, pursuit))| pursuit.alive)
        .map(|(_, (pursuer, position, _))| AgentView {
            id: pursuer.id,
            position: position.0,
            model: Mat4::from_translation(position.0),
        })
        .collect();

    agents.sort_by_key(|agent| agent.id);
    agents
}
