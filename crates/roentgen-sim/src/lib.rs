//! Simulation engine for ROENTGEN.
//!
//! Owns the hecs ECS world and the tile grids, runs the radiation pass
//! once per tick, and produces PulseReports.

pub mod engine;
pub mod observer;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use roentgen_core as core;
