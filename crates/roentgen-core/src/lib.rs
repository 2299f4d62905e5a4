//! Core types and definitions for the ROENTGEN radiation simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, configuration, events, the transient ray record, and the
//! per-tick pulse report. It has no dependency on the ECS or any runtime.

pub mod components;
pub mod config;
pub mod constants;
pub mod events;
pub mod ray;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
