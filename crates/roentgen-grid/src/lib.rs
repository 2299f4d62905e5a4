//! Tile grids and gridcasting for ROENTGEN.
//!
//! Resistance-map grids, discrete line traversal,
//! and per-grid ray attenuation.

pub use roentgen_core as core;

pub mod cast;
pub mod tiles;
pub mod traversal;

// Re-export key items for convenience.
pub use cast::gridcast;
pub use tiles::TileGrid;
pub use traversal::TileLine;
