//! Core types and definitions for the NIGHTSWARM simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, commands, frame snapshots, events, and constants.
//! It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
