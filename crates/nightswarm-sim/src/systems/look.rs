//! Mouse-look system — turns buffered pointer motion into yaw and pitch.

use nightswarm_core::constants::{PITCH_LIMIT_DEG, POINTER_SENSITIVITY};
use nightswarm_core::types::{PointerTracker, ViewerState};

/// One entry in the pointer backlog. The backlog preserves the arrival
/// order of motion samples and capture resets between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A raw motion sample in screen coordinates.
    Sample { x: f64, y: f64 },
    /// Pointer capture was gained or regained; the next sample is a
    /// baseline and must not rotate the view.
    Reset,
}

/// Consume the pointer backlog accumulated since the last tick.
///
/// Each sample's delta is scaled by the fixed sensitivity and applied to
/// yaw and pitch, clamping pitch to the vertical limit after every sample.
/// Yaw is left unbounded. Baseline samples produce no rotation.
pub fn run(
    viewer: &mut ViewerState,
    tracker: &mut PointerTracker,
    backlog: &mut Vec<PointerEvent>,
) {
    for event in backlog.drain(..) {
        match event {
            PointerEvent::Sample { x, y } => {
                if let Some((dx, dy)) = tracker.observe(x, y) {
                    viewer.yaw_deg += dx * POINTER_SENSITIVITY;
                    viewer.pitch_deg = (viewer.pitch_deg + dy * POINTER_SENSITIVITY)
                        .clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
                }
            }
            PointerEvent::Reset => tracker.reset(),
        }
    }
}
