//! Core types and definitions for the BOXCLASH arena simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, match setup, state snapshots, events, geometry
//! and constants. It has no dependency on the ECS or any host framework.

pub mod arena;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod geometry;
pub mod setup;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
