//! Fundamental simulation types: time, the viewer pose, and pointer tracking.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// The player viewpoint: eye position, yaw/pitch orientation in degrees, and
/// the projection parameters the render boundary consumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewerState {
    /// World-space eye position.
    pub position: Vec3,
    /// Heading in degrees. Unbounded; only its sine/cosine are consumed.
    pub yaw_deg: f32,
    /// Elevation in degrees, kept within [-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG].
    pub pitch_deg: f32,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            position: VIEWER_SPAWN,
            yaw_deg: VIEWER_SPAWN_YAW_DEG,
            pitch_deg: VIEWER_SPAWN_PITCH_DEG,
            fov_y_deg: FOV_Y_DEG,
            aspect: DEFAULT_ASPECT,
            near: NEAR_PLANE,
            far: FAR_PLANE,
        }
    }
}

impl ViewerState {
    /// Unit look direction derived from yaw/pitch.
    pub fn forward(&self) -> Vec3 {
        let yaw = self.yaw_deg.to_radians();
        let pitch = self.pitch_deg.to_radians();
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize()
    }

    /// Forward direction projected onto the ground plane (yaw only).
    /// Unit length regardless of pitch.
    pub fn horizontal_forward(&self) -> Vec3 {
        let yaw = self.yaw_deg.to_radians();
        Vec3::new(yaw.cos(), 0.0, yaw.sin())
    }

    /// World-to-camera transform: look-at from the eye toward
    /// `position + forward()`, world up = +Y.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    /// Camera-to-clip transform.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_deg.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }
}

/// Tracks raw pointer samples and produces per-sample deltas.
///
/// The first sample after construction or `reset` only records the baseline,
/// which suppresses the spurious jump when pointer capture begins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerTracker {
    last: Option<(f64, f64)>,
}

impl PointerTracker {
    /// Consume one raw sample in screen coordinates. Returns the delta from
    /// the previous sample as (dx, dy) with the vertical axis inverted
    /// (screen y grows downward, pitch grows upward), or `None` for the
    /// baseline sample.
    pub fn observe(&mut self, x: f64, y: f64) -> Option<(f32, f32)> {
        let delta = self
            .last
            .map(|(last_x, last_y)| ((x - last_x) as f32, (last_y - y) as f32));
        self.last = Some((x, y));
        delta
    }

    /// Forget the baseline; the next sample produces no delta. Hosts call
    /// this whenever pointer capture is (re)gained.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
