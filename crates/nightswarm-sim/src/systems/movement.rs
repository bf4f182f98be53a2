//! Viewer ground movement from held directional input.

use nightswarm_core::commands::MoveInput;
use nightswarm_core::constants::MOVE_STEP;
use nightswarm_core::types::ViewerState;

/// Apply held forward/backward input to the viewer.
///
/// Movement is a fixed step per tick along the horizontal projection of the
/// view direction, so looking up or down never changes ground speed and the
/// viewer's height stays constant. No acceleration, no friction; holding
/// both directions cancels out.
pub fn run(viewer: &mut ViewerState, held: MoveInput) {
    let heading = viewer.horizontal_forward();
    if held.forward {
        viewer.position += heading * MOVE_STEP;
    }
    if held.backward {
        viewer.position -= heading * MOVE_STEP;
    }
}
