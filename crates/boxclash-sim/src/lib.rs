//! Simulation engine for BOXCLASH.
//!
//! Owns the hecs ECS world, runs systems once per tick,
//! and produces MatchSnapshots for the presentation layer.

pub mod engine;
pub mod guidance;
pub mod stats;
pub mod systems;
pub mod world_setup;

pub use boxclash_core as core;
pub use engine::{SimConfig, SimulationEngine};
