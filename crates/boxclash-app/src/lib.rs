//! BOXCLASH host driver.
//!
//! Wires the simulation engine to a command line: headless runs that tick
//! as fast as possible, and a realtime loop thread driven from the console.

pub mod cli;
pub mod console;
pub mod game_loop;
pub mod logging;
pub mod state;

pub use boxclash_core as core;
