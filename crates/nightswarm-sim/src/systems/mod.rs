//! Per-tick systems.
//!
//! Each system is a free function over explicit state (the world, the viewer
//! pose, the RNG). Systems own nothing between ticks; the engine holds all
//! session state and calls them in a fixed order.

pub mod cleanup;
pub mod contact;
pub mod look;
pub mod movement;
pub mod pursuit;
pub mod snapshot;
pub mod wave_spawner;
