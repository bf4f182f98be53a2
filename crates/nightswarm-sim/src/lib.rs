//! Simulation engine for NIGHTSWARM.
//!
//! Owns the hecs world holding the pursuer population, advances the session
//! one tick at a time, and produces [`FrameSnapshot`]s for whatever shell is
//! hosting it. Completely headless: no windowing, input, or GPU dependency,
//! which keeps every behavior deterministic and testable.
//!
//! [`FrameSnapshot`]: nightswarm_core::state::FrameSnapshot

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{SessionConfig, SessionEngine};
pub use nightswarm_core as core;
