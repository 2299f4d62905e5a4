//! Runtime configuration for the radiation pass.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MAX_RADIATION_DISTANCE, DEFAULT_TICK_INTERVAL_SECS, MIN_RAY_INTENSITY,
};

/// Tuning knobs for one engine instance. All fields are read-only to the
/// pass itself; the host may change them between ticks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadiationConfig {
    /// Hard source→receiver distance cutoff (meters).
    pub max_distance: f64,
    /// Floor below which a ray is dropped or zeroed.
    pub min_intensity: f64,
    /// When source and receiver share a grid, test only that grid.
    /// Ignores a third grid possibly interposed between the two points —
    /// an accepted inaccuracy traded for skipping the candidate scan.
    pub simplified_same_grid: bool,
    /// Cadence the host runs the pass at (seconds). Reported, never read
    /// by the pass.
    pub tick_interval_secs: f64,
}

impl Default for RadiationConfig {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_RADIATION_DISTANCE,
            min_intensity: MIN_RAY_INTENSITY,
            simplified_same_grid: true,
            tick_interval_secs: DEFAULT_TICK_INTERVAL_SECS,
        }
    }
}
