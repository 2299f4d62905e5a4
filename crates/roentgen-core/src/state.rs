//! Pulse report — the complete observable output of one radiation pass.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::events::SimEvent;
use crate::ray::{BlockedTile, RadiationRay};
use crate::types::{GridId, SimTime, WorldPos};

/// Everything one tick's pass produced. Exposures are always present;
/// `rays` is populated only when an observer requested ray recording.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PulseReport {
    pub time: SimTime,
    /// Cadence the host runs the pass at (seconds), echoed from config.
    pub tick_interval_secs: f64,
    /// Wall time the pass took, for diagnostics.
    pub elapsed_ms: f64,
    pub source_count: u32,
    pub receiver_count: u32,
    pub grid_count: u32,
    pub exposures: Vec<ExposureView>,
    pub rays: Vec<RayView>,
    pub events: Vec<SimEvent>,
}

/// One receiver's dose this tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExposureView {
    pub receiver: u64,
    pub position: WorldPos,
    pub exposure: f64,
}

/// One traced ray, for debug visualization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RayView {
    pub source: WorldPos,
    pub destination: WorldPos,
    pub final_rads: f64,
    pub reached_destination: bool,
    /// Tiles that subtracted resistance, keyed by grid, in crossing order.
    pub grid_blockers: HashMap<GridId, Vec<BlockedTile>>,
}

impl From<RadiationRay> for RayView {
    fn from(ray: RadiationRay) -> Self {
        Self {
            source: ray.source,
            destination: ray.destination,
            final_rads: ray.rads,
            reached_destination: ray.reached_destination,
            grid_blockers: ray.blockers.unwrap_or_default(),
        }
    }
}
