//! Simulation constants and tuning parameters.

use glam::Vec3;

/// Nominal tick rate (Hz) for fixed-rate hosts.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the nominal rate.
pub const TICK_DT: f32 = 1.0 / TICK_RATE as f32;

// --- Viewer ---

/// Viewer spawn position (world units).
pub const VIEWER_SPAWN: Vec3 = Vec3::new(0.0, 1.0, 3.0);

/// Viewer spawn heading in degrees: looking down -Z.
pub const VIEWER_SPAWN_YAW_DEG: f32 = -90.0;

/// Viewer spawn elevation in degrees.
pub const VIEWER_SPAWN_PITCH_DEG: f32 = 0.0;

/// Pointer sensitivity: degrees of rotation per screen pixel of motion.
pub const POINTER_SENSITIVITY: f32 = 0.2;

/// Pitch clamp bound in degrees; keeps the look-at basis off the poles.
pub const PITCH_LIMIT_DEG: f32 = 89.0;

/// Ground-plane movement step per tick per held direction (world units).
pub const MOVE_STEP: f32 = 0.1;

// --- Projection ---

/// Vertical field of view in degrees.
pub const FOV_Y_DEG: f32 = 60.0;

/// Default viewport aspect ratio (width / height).
pub const DEFAULT_ASPECT: f32 = 800.0 / 600.0;

/// Near clip plane distance.
pub const NEAR_PLANE: f32 = 0.1;

/// Far clip plane distance.
pub const FAR_PLANE: f32 = 100.0;

// --- Pursuers ---

/// Default pursuit speed (world units per second).
pub const PURSUER_SPEED: f32 = 1.0;

/// Spawn height; pursuers travel on the viewer's eye plane.
pub const PURSUER_SPAWN_HEIGHT: f32 = 1.0;

/// Half-width of the horizontal spawn band: x is drawn from [-10, 10).
pub const SPAWN_BAND_HALF_WIDTH: f32 = 10.0;

/// Base depth behind the viewer spawn plane (negative z).
pub const SPAWN_DEPTH_BASE: f32 = -20.0;

/// Additional random spawn depth in [0, 10): further away, never closer.
pub const SPAWN_DEPTH_JITTER: f32 = 10.0;

/// A live pursuer strictly inside this distance ends the session.
pub const CONTACT_RADIUS: f32 = 1.0;

// --- Waves ---

/// Accumulated seconds between wave spawns.
pub const WAVE_INTERVAL_SECS: f32 = 5.0;

/// Number of pursuers per wave.
pub const WAVE_SIZE: u32 = 5;
