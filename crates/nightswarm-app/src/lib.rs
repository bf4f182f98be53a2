//! Host shell for NIGHTSWARM: a fixed-rate session loop thread and a
//! headless demo binary.

pub mod game_loop;
